//! Error types for stylecfg.
//!
//! Uses thiserror for derive macros. Every variant carries enough context to
//! point the developer at the offending field of the document.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for stylecfg operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// Invalid CLI input, unreadable file, or no document found.
    #[error("{0}")]
    UserError(String),

    /// Missing required key or wrong value type.
    #[error("schema error: {0}")]
    SchemaError(String),

    /// A value has the right type but is malformed.
    #[error("validation error at {path}: {message}")]
    ValidationError { path: String, message: String },
}

impl StyleError {
    /// Build a validation error for the field at `path`.
    pub fn validation(path: impl Into<String>, message: impl Into<String>) -> Self {
        StyleError::ValidationError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            StyleError::UserError(_) => exit_codes::USER_ERROR,
            StyleError::SchemaError(_) => exit_codes::SCHEMA_FAILURE,
            StyleError::ValidationError { .. } => exit_codes::VALIDATION_FAILURE,
        }
    }
}

/// Result type alias for stylecfg operations.
pub type Result<T> = std::result::Result<T, StyleError>;
