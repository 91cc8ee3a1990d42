//! Keyboard-driven form inputs.

pub mod text_input;
pub mod validation;

pub use text_input::TextInput;
pub use validation::validate_email;
