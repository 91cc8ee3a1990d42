//! Terminal User Interface for the exchange flow.
//!
//! Provides a Ratatui-based TUI with one screen per phase (login, wallet,
//! confirmation) plus the token scanner modal.

pub mod app;
pub mod components;
pub mod event;
pub mod input;
pub mod screens;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use event::{Action, Event, Message};
pub use terminal::{Tui, restore_terminal, setup_terminal, shutdown};
pub use ui::render;
