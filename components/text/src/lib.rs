//! Read-only text display for Moneta views.

use moneta_core::configurable;
use moneta_reactive::{Computed, IntoComputed};

configurable!(
    /// A view that displays a line of read-only text.
    ///
    /// The content is a [`Computed`] string, so text built from a binding or
    /// a derived signal updates in place when its source changes.
    ///
    /// ```ignore
    /// text("Search")
    /// text(query.map(|q| format!("Results for {q}")))
    /// ```
    Text,
    TextConfig
);

/// Configuration for text components.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct TextConfig {
    /// The content to be displayed.
    pub content: Computed<String>,
}

impl Text {
    /// Creates a text view from anything convertible to a computed string.
    pub fn new(content: impl IntoComputed<String>) -> Self {
        Self(TextConfig {
            content: content.into_computed(),
        })
    }
}

/// Creates a text view.
pub fn text(content: impl IntoComputed<String>) -> Text {
    Text::new(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use moneta_core::ConfigurableView;
    use moneta_reactive::binding;

    #[test]
    fn literal_content_is_constant() {
        let config = text("Search").config();
        assert_eq!(config.content.get(), "Search");
    }

    #[test]
    fn bound_content_tracks_its_binding() {
        let value = binding(String::from("before"));
        let config = text(&value).config();
        value.set(String::from("after"));
        assert_eq!(config.content.get(), "after");
    }
}
