//! Error types for the form-field engine

use thiserror::Error;

/// Result type for field operations
pub type Result<T> = std::result::Result<T, FieldsError>;

/// Errors that can occur while configuring fields
#[derive(Debug, Error)]
pub enum FieldsError {
    /// Source was neither a key→label mapping nor a list of records.
    /// A caller-configuration error; field construction must abort.
    #[error("source passed in as invalid type: {detail}")]
    InvalidSourceType { detail: String },
}

impl FieldsError {
    /// Create an invalid-source error
    pub fn invalid_source(detail: impl Into<String>) -> Self {
        Self::InvalidSourceType {
            detail: detail.into(),
        }
    }
}
