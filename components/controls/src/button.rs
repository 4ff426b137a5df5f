//! A pressable control that runs an action.

use moneta_core::configurable;
use moneta_core::handler::{self, ActionObject};
use moneta_core::{AnyView, Environment, View};
use moneta_reactive::{Computed, IntoComputed, Signal, SignalExt};

configurable!(
    /// A control that performs an action when activated.
    ///
    /// While its `disabled` signal is `true` the backend must ignore
    /// activations; the action itself assumes it only runs on an enabled
    /// button.
    ///
    /// ```ignore
    /// button(text("Search"))
    ///     .icon(Icon::MagnifyingGlass)
    ///     .disabled(form.is_submitting())
    ///     .action(|env| { /* ... */ })
    /// ```
    Button,
    ButtonConfig
);

/// Configuration options for a [`Button`].
#[non_exhaustive]
#[derive(Debug)]
pub struct ButtonConfig {
    /// The label displayed inside the button.
    pub label: AnyView,
    /// An optional leading icon.
    pub icon: Option<Icon>,
    /// Whether the button currently refuses activation.
    pub disabled: Computed<bool>,
    /// The action to run on activation.
    pub action: ActionObject,
}

/// A built-in symbol a control can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Icon {
    /// A magnifying glass, conventionally used for search.
    MagnifyingGlass,
    /// A plus sign.
    Plus,
    /// A trash can.
    Trash,
}

impl Button {
    /// Creates a button with the given label and a no-op action.
    #[must_use]
    pub fn new(label: impl View) -> Self {
        Self(ButtonConfig {
            label: AnyView::new(label),
            icon: None,
            disabled: false.into_computed(),
            action: handler::noop(),
        })
    }

    /// Sets the leading icon.
    #[must_use]
    pub fn icon(mut self, icon: Icon) -> Self {
        self.0.icon = Some(icon);
        self
    }

    /// Drives the disabled state from a boolean signal.
    #[must_use]
    pub fn disabled(mut self, disabled: impl Signal<Output = bool>) -> Self {
        self.0.disabled = disabled.computed();
        self
    }

    /// Sets the action run on activation.
    #[must_use]
    pub fn action(mut self, action: impl FnMut(&Environment) + 'static) -> Self {
        self.0.action = Box::new(action);
        self
    }
}

/// Creates a button with the given label.
pub fn button(label: impl View) -> Button {
    Button::new(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use moneta_core::ConfigurableView;
    use moneta_reactive::binding;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn disabled_tracks_its_signal() {
        let busy = binding(false);
        let config = button(AnyView::default()).disabled(busy.clone()).config();

        assert!(!config.disabled.get());
        busy.set(true);
        assert!(config.disabled.get());
    }

    #[test]
    fn action_fires_against_the_environment() {
        let fired = Rc::new(Cell::new(0));
        let mut config = button(AnyView::default())
            .icon(Icon::MagnifyingGlass)
            .action({
                let fired = fired.clone();
                move |_| fired.set(fired.get() + 1)
            })
            .config();

        config.action.handle(&Environment::new());
        assert_eq!(fired.get(), 1);
        assert_eq!(config.icon, Some(Icon::MagnifyingGlass));
    }
}
