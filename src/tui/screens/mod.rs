//! One module per screen of the flow.

pub mod confirmation;
pub mod exchange;
pub mod login;
