//! Token exchange demo for the Global Pizza Party.
//!
//! A guest signs in with an email, completes a three-item checklist, and
//! exchanges it for one `$SLICE` and one `$DRINK` token plus Beny points.
//! Authentication and settlement are simulated locally with cancellable
//! delayed jobs, and the whole flow is rendered as a terminal UI.

pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod session;
pub mod tui;

pub use controller::Controller;
pub use error::{PartyError, Result};
