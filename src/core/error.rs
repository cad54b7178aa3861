//! Error types.
//!
//! Only round construction and host-side configuration can fail. Misuse of
//! a running round (clicking a matched card, flipping while paused, ...)
//! is a silent no-op, never an error.

use thiserror::Error;

/// Errors raised by the engine and session.
#[derive(Debug, Error)]
pub enum Error {
    /// The theme cannot supply one distinct symbol per pair.
    #[error("theme supplies {available} symbols but the grid needs {required}")]
    InsufficientSymbols { required: usize, available: usize },

    /// No theme is registered under this name.
    #[error("unknown theme `{0}`")]
    UnknownTheme(String),

    /// Grid sizes must be positive and even.
    #[error("invalid grid size {0}: must be a positive even number")]
    InvalidGridSize(u8),

    /// Malformed JSON configuration.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
