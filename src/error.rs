//! Error types for the search front end
//!
//! Engine failures stay [`ChessEngineError`]s; this module only adds what reading and
//! writing files on the engine's behalf can go wrong with.

use chess_engine::ChessEngineError;
use thiserror::Error;

/// Errors from loading or saving search configuration and match reports
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File I/O error
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("config serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The file parsed but describes limits no search can run with
    #[error("invalid search configuration: {0}")]
    Invalid(#[from] ChessEngineError),
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
