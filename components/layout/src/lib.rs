//! Stack layout containers.
//!
//! Stacks arrange their children along one axis. They resolve to a single
//! [`StackConfig`] leaf carrying the erased children, so a backend (or a
//! test hook) sees the whole row or column at once.

use moneta_core::{AnyView, Environment, Hook, Native, NativeView, TupleViews, View};

/// The axis a stack lays its children along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Children are arranged in a horizontal line.
    Horizontal,
    /// Children are arranged in a vertical line.
    Vertical,
}

/// The resolved form of a stack: axis, spacing and erased children.
#[derive(Debug)]
#[non_exhaustive]
pub struct StackConfig {
    /// The axis children are arranged along.
    pub axis: Axis,
    /// The spacing between adjacent children.
    pub spacing: f32,
    /// The children, in declaration order.
    pub contents: Vec<AnyView>,
}

impl NativeView for StackConfig {}

const DEFAULT_SPACING: f32 = 10.0;

/// A stack that arranges its children in a horizontal line.
#[derive(Debug)]
pub struct HStack<C> {
    spacing: f32,
    contents: C,
}

/// A stack that arranges its children in a vertical line.
#[derive(Debug)]
pub struct VStack<C> {
    spacing: f32,
    contents: C,
}

impl<C> HStack<C> {
    /// Creates a horizontal stack with the default spacing.
    pub const fn new(contents: C) -> Self {
        Self {
            spacing: DEFAULT_SPACING,
            contents,
        }
    }

    /// Sets the spacing between children in the stack.
    #[must_use]
    pub const fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }
}

impl<C> VStack<C> {
    /// Creates a vertical stack with the default spacing.
    pub const fn new(contents: C) -> Self {
        Self {
            spacing: DEFAULT_SPACING,
            contents,
        }
    }

    /// Sets the spacing between children in the stack.
    #[must_use]
    pub const fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }
}

fn resolve_stack(config: StackConfig, env: &Environment) -> AnyView {
    if let Some(hook) = env.get::<Hook<StackConfig>>() {
        hook.apply(env, config)
    } else {
        AnyView::new(Native(config))
    }
}

impl<C: TupleViews + 'static> View for HStack<C> {
    fn body(self, env: Environment) -> impl View {
        resolve_stack(
            StackConfig {
                axis: Axis::Horizontal,
                spacing: self.spacing,
                contents: self.contents.views(),
            },
            &env,
        )
    }
}

impl<C: TupleViews + 'static> View for VStack<C> {
    fn body(self, env: Environment) -> impl View {
        resolve_stack(
            StackConfig {
                axis: Axis::Vertical,
                spacing: self.spacing,
                contents: self.contents.views(),
            },
            &env,
        )
    }
}

impl<V: View> FromIterator<V> for HStack<Vec<AnyView>> {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Self::new(iter.into_iter().map(AnyView::new).collect())
    }
}

impl<V: View> FromIterator<V> for VStack<Vec<AnyView>> {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Self::new(iter.into_iter().map(AnyView::new).collect())
    }
}

/// Creates a horizontal stack with the default spacing.
pub const fn hstack<C: TupleViews + 'static>(contents: C) -> HStack<C> {
    HStack::new(contents)
}

/// Creates a vertical stack with the default spacing.
pub const fn vstack<C: TupleViews + 'static>(contents: C) -> VStack<C> {
    VStack::new(contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn capture(env: &Environment) -> (Environment, Rc<RefCell<Vec<StackConfig>>>) {
        let captured = Rc::new(RefCell::new(Vec::new()));
        let env = env.clone().with(Hook::<StackConfig>::new({
            let captured = captured.clone();
            move |_, config| {
                captured.borrow_mut().push(config);
                AnyView::default()
            }
        }));
        (env, captured)
    }

    #[test]
    fn hstack_resolves_to_a_horizontal_config() {
        let (env, captured) = capture(&Environment::new());
        moneta_core::render::render(hstack((AnyView::default(),)).spacing(4.0), &env);

        let configs = captured.borrow();
        assert_eq!(configs.len(), 1);
        assert_eq!(configs[0].axis, Axis::Horizontal);
        assert_eq!(configs[0].spacing, 4.0);
        assert_eq!(configs[0].contents.len(), 1);
    }

    #[test]
    fn vstack_keeps_declaration_order() {
        let (env, captured) = capture(&Environment::new());
        moneta_core::render::render(
            vstack((hstack(()), hstack(()), hstack(()))),
            &env,
        );

        let configs = captured.borrow();
        assert_eq!(configs[0].axis, Axis::Vertical);
        assert_eq!(configs[0].contents.len(), 3);
    }
}
