//! Centralized error handling.
//!
//! Settings resolution itself never fails (missing or malformed values are
//! defaulted); errors only arise at the CLI edge.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Serialization error")]
    Serialize(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type ConfigResult<T> = Result<T, ConfigError>;
