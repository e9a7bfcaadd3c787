//! Error types for the adaptive transform.

/// Result type alias for adaptive operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or running the transform.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// CSS parse error.
    #[error("CSS parse error at line {line}, column {column}: {message}")]
    Parse {
        message: String,
        line: u32,
        column: u32,
    },

    /// A configuration option is out of range.
    #[error("Invalid value for option '{option}': {message}")]
    InvalidConfig { option: String, message: String },

    /// Malformed JSON options object.
    #[error("Failed to read options: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a parse error.
    pub fn parse(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self::Parse {
            message: message.into(),
            line,
            column,
        }
    }

    /// Create a configuration error.
    pub fn invalid_config(option: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            option: option.into(),
            message: message.into(),
        }
    }
}
