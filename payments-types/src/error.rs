//! Error types for the payment service.

use crate::domain::ValidationErrors;

/// Application-level errors (for transport responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// The request could not be read (malformed or mistyped body).
    #[error("Bad request: {0}")]
    BadRequest(String),
}
