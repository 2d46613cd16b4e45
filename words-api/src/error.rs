//! API error types

use thiserror::Error;

/// API-level errors
///
/// Extraction itself never fails; these come from reading input and loading
/// configuration.
#[derive(Error, Debug)]
pub enum ApiError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// TOML parse error
    #[cfg(feature = "serde")]
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
