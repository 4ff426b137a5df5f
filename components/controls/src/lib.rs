//! Interactive controls for Moneta views.

pub mod button;
pub use button::{Button, ButtonConfig, Icon, button};
pub mod text_field;
pub use text_field::{TextField, TextFieldConfig, field};
