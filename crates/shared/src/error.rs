//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// Validation and precondition failures are terminal: they are surfaced to
/// the caller and never retried automatically.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed input (non-positive transfer amount, unparseable import row).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Referenced entity absent or not owned by the caller.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Conflict (duplicate category, delete of a referenced category).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A domain precondition does not hold (e.g. wrong account role).
    #[error("Precondition failed: {0}")]
    PreconditionFailed(String),

    /// Persistence-layer failure; the enclosing operation was rolled back.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl AppError {
    /// Returns the stable error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::PreconditionFailed(_) => "PRECONDITION_FAILED",
            Self::Storage(_) => "STORAGE_ERROR",
        }
    }
}
