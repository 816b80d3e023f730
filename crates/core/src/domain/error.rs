//! Structural validation errors for domain entities.

use thiserror::Error;

/// Errors raised when constructing or patching domain entities.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Account name must not be empty.
    #[error("Account name must not be empty")]
    EmptyAccountName,

    /// Category name must not be empty.
    #[error("Category name must not be empty")]
    EmptyCategoryName,

    /// Default budgeted amount must not be negative.
    #[error("Budgeted amount must not be negative: {0}")]
    NegativeBudgetedAmount(rust_decimal::Decimal),

    /// Transaction amount must not be zero.
    #[error("Transaction amount must not be zero")]
    ZeroAmount,

    /// Calendar month outside 1-12 or unrepresentable date.
    #[error("Invalid calendar month: {year}-{month}")]
    InvalidMonth {
        /// Requested year.
        year: i32,
        /// Requested month.
        month: u32,
    },
}

impl From<DomainError> for tally_shared::AppError {
    fn from(err: DomainError) -> Self {
        Self::Validation(err.to_string())
    }
}
