//! Action callbacks carried inside view configurations.

use std::any::type_name;
use std::fmt;

use crate::Environment;

/// A callback that processes the environment and produces a `T`.
///
/// Closures taking `&Environment` implement this automatically, so view
/// builders accept plain closures and box them into [`BoxHandler`]s.
pub trait Handler<T>: 'static {
    /// Invokes the handler against the given environment.
    fn handle(&mut self, env: &Environment) -> T;
}

impl<F, T> Handler<T> for F
where
    F: FnMut(&Environment) -> T + 'static,
{
    fn handle(&mut self, env: &Environment) -> T {
        self(env)
    }
}

impl<T> fmt::Debug for dyn Handler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(type_name::<Self>())
    }
}

/// A boxed handler with dynamic dispatch.
pub type BoxHandler<T> = Box<dyn Handler<T>>;

/// A boxed handler producing no result, used for control actions.
pub type ActionObject = BoxHandler<()>;

/// A no-op action, the default for controls built without one.
#[must_use]
pub fn noop() -> ActionObject {
    Box::new(|_: &Environment| {})
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn closures_are_handlers() {
        let fired = Rc::new(Cell::new(0));
        let mut action: ActionObject = Box::new({
            let fired = fired.clone();
            move |_: &Environment| fired.set(fired.get() + 1)
        });

        let env = Environment::new();
        action.handle(&env);
        action.handle(&env);
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn noop_does_nothing() {
        let mut action = noop();
        action.handle(&Environment::new());
    }
}
