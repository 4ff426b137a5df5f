//! A text input component wired to a reactive string binding.

use moneta_core::configurable;
use moneta_core::{AnyView, View};
use moneta_reactive::{Binding, Computed, IntoComputed};

configurable!(
    /// A single-line text input field.
    ///
    /// Edits flow through the value binding in both directions: typing
    /// updates the binding, and writing the binding updates the field.
    ///
    /// ```ignore
    /// field("Search", &query).prompt("Search for transactions")
    /// ```
    TextField,
    TextFieldConfig
);

/// Configuration options for a [`TextField`].
#[non_exhaustive]
#[derive(Debug)]
pub struct TextFieldConfig {
    /// The label displayed for the text field.
    pub label: AnyView,
    /// The binding to the text value.
    pub value: Binding<String>,
    /// The placeholder text shown when the field is empty.
    pub prompt: Computed<String>,
    /// The type of keyboard to use for input.
    pub keyboard: KeyboardType,
}

/// The type of keyboard to use for text input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum KeyboardType {
    /// General text input.
    #[default]
    Text,
    /// Secure input, such as passwords.
    Secure,
    /// Email addresses.
    Email,
    /// Numeric input.
    Number,
}

impl TextField {
    /// Creates a new `TextField` with the given value binding.
    #[must_use]
    pub fn new(value: &Binding<String>) -> Self {
        Self(TextFieldConfig {
            label: AnyView::default(),
            value: value.clone(),
            prompt: Computed::default(),
            keyboard: KeyboardType::default(),
        })
    }

    /// Sets the label for the text field.
    #[must_use]
    pub fn label(mut self, label: impl View) -> Self {
        self.0.label = AnyView::new(label);
        self
    }

    /// Sets the placeholder shown while the field is empty.
    #[must_use]
    pub fn prompt(mut self, prompt: impl IntoComputed<String>) -> Self {
        self.0.prompt = prompt.into_computed();
        self
    }

    /// Sets the keyboard type for input.
    #[must_use]
    pub fn keyboard(mut self, keyboard: KeyboardType) -> Self {
        self.0.keyboard = keyboard;
        self
    }
}

/// Creates a new [`TextField`] with the specified label and value binding.
pub fn field(label: impl View, value: &Binding<String>) -> TextField {
    TextField::new(value).label(label)
}
