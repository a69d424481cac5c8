//! Error types for the forms crate

use thiserror::Error;

/// Errors that can occur when working with forms
#[derive(Error, Debug)]
pub enum FormError {
    /// A draft failed to serialize or deserialize
    #[error("draft serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for form operations
pub type FormResult<T> = Result<T, FormError>;
