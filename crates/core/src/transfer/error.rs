//! Transfer engine error types.

use rust_decimal::Decimal;
use tally_shared::AppError;
use tally_shared::types::{AccountId, CategoryId};
use thiserror::Error;

use crate::domain::DomainError;

/// Errors that can occur while planning a funding.
#[derive(Debug, Error)]
pub enum TransferError {
    /// The source account is not a checking account.
    #[error("Account {0} is not a checking account")]
    SourceNotChecking(AccountId),

    /// The destination account is not a savings account.
    #[error("Account {0} is not a savings account")]
    DestinationNotSavings(AccountId),

    /// The accounts and category are not all owned by the same user.
    #[error("Accounts and category must belong to the same owner")]
    OwnershipMismatch,

    /// The funded category is not a savings category.
    #[error("Category {0} is not a savings category")]
    NotSavingsCategory(CategoryId),

    /// Transfer amount must be positive.
    #[error("Transfer amount must be positive: {0}")]
    NonPositiveAmount(Decimal),

    /// Invalid target month.
    #[error(transparent)]
    InvalidMonth(#[from] DomainError),
}

impl From<TransferError> for AppError {
    fn from(err: TransferError) -> Self {
        match err {
            TransferError::SourceNotChecking(_)
            | TransferError::DestinationNotSavings(_)
            | TransferError::OwnershipMismatch
            | TransferError::NotSavingsCategory(_) => Self::PreconditionFailed(err.to_string()),
            TransferError::NonPositiveAmount(_) | TransferError::InvalidMonth(_) => {
                Self::Validation(err.to_string())
            }
        }
    }
}
