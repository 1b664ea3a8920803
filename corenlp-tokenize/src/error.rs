//! Configuration error types
//!
//! Errors raised by an annotation client are never wrapped here: tokenizer
//! calls hand back the client's own error type untouched.

use thiserror::Error;

/// Errors raised while building tokenizer options or loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Option key was empty
    #[error("option key must not be empty")]
    EmptyOptionKey,

    /// Option key or rendered value contains a delimiter of the options string
    #[error("option '{key}' contains reserved character '{character}'")]
    ReservedCharacter {
        /// The offending option key
        key: String,
        /// The reserved character that was found
        character: char,
    },

    /// Float option value is NaN or infinite
    #[error("option '{key}' must be a finite number")]
    NonFiniteFloat {
        /// The offending option key
        key: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse error
    #[cfg(feature = "serde")]
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
