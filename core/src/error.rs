//! Routing for errors that escape the view tree.

use std::any::type_name;
use std::fmt;
use std::rc::Rc;

use crate::{Environment, Error};

/// The environment entry receiving errors nobody else handled.
///
/// Components do not catch failures from the asynchronous work they start;
/// those flow through [`report`] to whatever boundary the surrounding
/// application installed. Without a boundary the error is logged and
/// dropped.
#[derive(Clone)]
pub struct ErrorBoundary {
    handler: Rc<dyn Fn(&Environment, Error)>,
}

impl fmt::Debug for ErrorBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(type_name::<Self>())
    }
}

impl ErrorBoundary {
    /// Creates a boundary from the given handler.
    pub fn new(handler: impl Fn(&Environment, Error) + 'static) -> Self {
        Self {
            handler: Rc::new(handler),
        }
    }

    /// Delivers an error to this boundary.
    pub fn handle(&self, env: &Environment, error: Error) {
        (self.handler)(env, error);
    }
}

/// Delivers `error` to the environment's [`ErrorBoundary`], or logs it when
/// none is installed.
pub fn report(env: &Environment, error: Error) {
    match env.get::<ErrorBoundary>() {
        Some(boundary) => boundary.handle(env, error),
        None => tracing::error!(error = %error, "unhandled error reached the view root"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::cell::RefCell;

    #[test]
    fn report_routes_to_installed_boundary() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let env = Environment::new().with(ErrorBoundary::new({
            let seen = seen.clone();
            move |_, error| seen.borrow_mut().push(error.to_string())
        }));

        report(&env, anyhow!("fetch failed"));
        assert_eq!(*seen.borrow(), ["fetch failed"]);
    }

    #[test]
    fn report_without_boundary_does_not_panic() {
        report(&Environment::new(), anyhow!("nobody listens"));
    }
}
