//! Headless resolution of a view tree.

use crate::{AnyView, Environment, View};

/// Resolves `view` step by step until it collapses to the empty view.
///
/// Every composite view's `body` runs exactly once against `env`, so side
/// effects such as starting asynchronous work happen here. Leaves must be
/// intercepted by [`Hook`](crate::Hook)s installed in the environment;
/// an unhooked [`Native`](crate::Native) leaf panics.
pub fn render(view: impl View, env: &Environment) {
    let mut current = AnyView::new(view);
    while !current.is::<()>() {
        tracing::trace!(view = current.name(), "resolving");
        current = current.step(env);
    }
}
