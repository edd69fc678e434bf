//! Unified error handling for the thinktool library

use thiserror::Error;

/// The main error type for the thinktool library
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ThinkToolError {
    /// A thought was submitted without any content
    #[error("Thought content cannot be empty")]
    EmptyContent,

    /// Request input failed validation
    #[error("Validation failed: {0}")]
    Validation(String),

}

impl ThinkToolError {
    /// Create a validation error from any displayable message
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ThinkToolError>;
