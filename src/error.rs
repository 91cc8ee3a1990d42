//! Crate-level error types.
//!
//! The exchange flow itself never fails; [`PartyError`] covers the edges
//! around it (configuration, the event file, the terminal and the log file)
//! so `main` can use the `?` operator throughout.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PartyError>;

/// Top-level error type returned by all fallible public APIs.
#[derive(Debug, thiserror::Error)]
pub enum PartyError {
    /// An environment variable or the event file held an unusable value.
    #[error("configuration error: {0}")]
    Config(String),

    /// Terminal setup, drawing, or log file creation failed.
    #[error("io error: {0}")]
    Io(String),

    /// The event file was not valid JSON for [`EventConfig`](crate::config::EventConfig).
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
