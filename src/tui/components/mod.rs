//! Widgets shared by several screens.

pub mod ad_card;
pub mod layout;
pub mod scanner_modal;
pub mod spinner;
pub mod status_bar;
