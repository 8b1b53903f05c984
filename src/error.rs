//! Error types for Cube Dash
//!
//! The render pipeline and simulation are infallible; errors only come from
//! loading and saving user configuration.

use thiserror::Error;

/// Result type alias for Cube Dash operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type
#[derive(Error, Debug)]
pub enum Error {
    /// Reading or writing a settings file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file is not valid JSON for `Settings`
    #[error("Settings format error: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings parsed but hold values the game cannot run with
    #[error("Invalid settings: {message}")]
    InvalidSettings { message: String },
}
