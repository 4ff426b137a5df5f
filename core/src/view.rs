//! View composition and type erasure.

use std::any::{Any, type_name};
use std::fmt;
use std::rc::Rc;

use crate::Environment;

/// A declarative description of a piece of UI.
///
/// A view's [`body`](View::body) returns the view it is made of; composition
/// bottoms out at [`Native`] leaves, which only a backend (or a [`Hook`])
/// knows how to interpret. `body` consumes the view: views are descriptions,
/// rebuilt rather than mutated.
pub trait View: 'static {
    /// Resolves this view one level against the given environment.
    fn body(self, env: Environment) -> impl View;
}

/// The empty view. Rendering stops when it is reached.
impl View for () {
    fn body(self, _env: Environment) -> impl View {
        panic!("the empty view has no body");
        #[allow(unreachable_code)]
        return;
    }
}

/// A marker for leaf configurations handled by a rendering backend.
pub trait NativeView: fmt::Debug + 'static {}

/// A leaf wrapper around a backend-handled configuration.
///
/// # Panics
///
/// `Native` has no body; resolving it directly panics. Backends and tests
/// intercept the wrapped configuration instead, either by walking the tree
/// themselves or by installing a [`Hook`] for the config type.
#[derive(Debug)]
pub struct Native<T: NativeView>(pub T);

impl<T: NativeView> View for Native<T> {
    fn body(self, _env: Environment) -> impl View {
        panic!("native view ({}) reached body", type_name::<T>());
        #[allow(unreachable_code)]
        return;
    }
}

/// A view built from a plain configuration struct.
///
/// Implemented by the `configurable!` macro; gives generic access to the
/// config carried by component views such as text fields and buttons.
pub trait ConfigurableView: View {
    /// The configuration this view is built from.
    type Config: 'static;

    /// Consumes the view and returns its configuration.
    fn config(self) -> Self::Config;
}

/// An environment-installed interceptor for a leaf configuration type.
///
/// When a configurable view resolves and the environment carries a
/// `Hook<Config>`, the hook receives the config instead of it surfacing as
/// a [`Native`] leaf. Backends use this to mount platform widgets; tests use
/// it to capture configs and drive them directly.
pub struct Hook<C> {
    apply: Rc<dyn Fn(&Environment, C) -> AnyView>,
}

impl<C> Clone for Hook<C> {
    fn clone(&self) -> Self {
        Self {
            apply: self.apply.clone(),
        }
    }
}

impl<C> fmt::Debug for Hook<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(type_name::<Self>())
    }
}

impl<C: 'static> Hook<C> {
    /// Creates a hook from the given interception function.
    pub fn new(apply: impl Fn(&Environment, C) -> AnyView + 'static) -> Self {
        Self {
            apply: Rc::new(apply),
        }
    }

    /// Applies the hook to a configuration.
    #[must_use]
    pub fn apply(&self, env: &Environment, config: C) -> AnyView {
        (self.apply)(env, config)
    }
}

trait ErasedView {
    fn erased_body(self: Box<Self>, env: Environment) -> AnyView;
    fn as_any(&self) -> &dyn Any;
    fn name(&self) -> &'static str;
}

struct Erase<V>(V);

impl<V: View> ErasedView for Erase<V> {
    fn erased_body(self: Box<Self>, env: Environment) -> AnyView {
        AnyView::new(self.0.body(env))
    }

    fn as_any(&self) -> &dyn Any {
        &self.0
    }

    fn name(&self) -> &'static str {
        type_name::<V>()
    }
}

/// A type-erased view.
pub struct AnyView(Box<dyn ErasedView>);

impl fmt::Debug for AnyView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AnyView").field(&self.0.name()).finish()
    }
}

impl Default for AnyView {
    fn default() -> Self {
        Self(Box::new(Erase(())))
    }
}

impl AnyView {
    /// Erases `view`. Erasing an already-erased view is the identity.
    pub fn new<V: View>(view: V) -> Self {
        let mut slot = Some(view);
        if let Some(nested) = (&mut slot as &mut dyn Any).downcast_mut::<Option<Self>>() {
            if let Some(inner) = nested.take() {
                return inner;
            }
        }
        match slot {
            Some(view) => Self(Box::new(Erase(view))),
            None => Self::default(),
        }
    }

    /// Resolves the wrapped view one level.
    #[must_use]
    pub fn step(self, env: &Environment) -> Self {
        self.0.erased_body(env.clone())
    }

    /// Returns `true` if the wrapped view is a `T`.
    #[must_use]
    pub fn is<T: 'static>(&self) -> bool {
        self.0.as_any().is::<T>()
    }

    /// Returns the type name of the wrapped view.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.0.name()
    }
}

impl View for AnyView {
    fn body(self, env: Environment) -> impl View {
        self.0.erased_body(env)
    }
}

/// A fixed collection of views, used for stack contents.
pub trait TupleViews {
    /// Erases the collection into a list of views.
    fn views(self) -> Vec<AnyView>;
}

impl TupleViews for Vec<AnyView> {
    fn views(self) -> Vec<AnyView> {
        self
    }
}

macro_rules! impl_tuple_views {
    ($($ty:ident),*) => {
        #[allow(non_snake_case)]
        #[allow(unused_variables)]
        impl<$($ty: View,)*> TupleViews for ($($ty,)*) {
            fn views(self) -> Vec<AnyView> {
                let ($($ty,)*) = self;
                vec![$(AnyView::new($ty),)*]
            }
        }
    };
}

tuples!(impl_tuple_views);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn erasure_collapses_nesting() {
        let view = AnyView::new(AnyView::new(()));
        assert!(view.is::<()>());
    }

    #[test]
    fn tuple_views_preserve_order_and_arity() {
        let views = (AnyView::default(), AnyView::default()).views();
        assert_eq!(views.len(), 2);
    }
}
