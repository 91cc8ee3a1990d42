//! Plain value records shared by the controller and the screens.
//!
//! Contains the signed-in [`User`], the two reward [`Token`]s, the
//! checklist [`Task`]s and the [`Screen`] routing enum.

pub mod task;
pub mod token;
pub mod user;

pub use task::{Checklist, Task};
pub use token::{Token, TokenKind, initial_tokens};
pub use user::User;

/// Which screen of the flow is currently shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    /// Email form.
    #[default]
    Login,
    /// Checklist, token list and redemption.
    Exchange,
    /// Post-exchange summary of the new balances.
    Confirmation,
}

impl Screen {
    /// Returns the display label used in the status bar.
    pub fn label(&self) -> &'static str {
        match self {
            Screen::Login => "Ingreso",
            Screen::Exchange => "Wallet",
            Screen::Confirmation => "Canje",
        }
    }
}
