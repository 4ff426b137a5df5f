//! The transactions screen of a personal finance app.
//!
//! The screen's shared state lives in a [`TransactionsContext`] installed
//! into the environment; views such as [`SearchForm`] pull the slices they
//! need from it and start work through the context's fetch operation.

pub mod context;
pub mod logging;
pub mod search_form;
pub mod transaction;

pub use context::{FetchError, FetchTransactions, TransactionsContext, TransactionsState};
pub use search_form::{SearchForm, SearchQuery};
pub use transaction::{Transaction, TransactionKind};

pub use moneta_controls as controls;
pub use moneta_form as form;
pub use moneta_layout as layout;
pub use moneta_text as text;

pub use moneta_core::{AnyView, Environment, View};
pub use moneta_reactive as reactive;

/// Commonly used traits and types for building screens.
pub mod prelude {
    pub use super::*;
    pub use moneta_controls::{Button, Icon, TextField, button, field};
    pub use moneta_core::handler::Handler;
    pub use moneta_core::render::render;
    pub use moneta_core::{ErrorBoundary, Hook, task};
    pub use moneta_form::{Anything, Form, Validator};
    pub use moneta_layout::{HStack, VStack, hstack, vstack};
    pub use moneta_reactive::{Binding, Computed, Signal, SignalExt, Store, binding};
    pub use moneta_text::text;
}
