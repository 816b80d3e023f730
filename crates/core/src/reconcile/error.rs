//! Reconciliation error types.

use tally_shared::AppError;
use thiserror::Error;

/// Errors that can occur during statement import.
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// A row of the batch is malformed; the whole import is aborted.
    #[error("Import row {row} is malformed: {reason}")]
    MalformedRow {
        /// 1-based row number within the batch.
        row: usize,
        /// What is wrong with the row.
        reason: String,
    },

    /// No header row with Description/Date/Amount columns was found.
    #[error("Statement has no recognizable Description/Date/Amount header")]
    MissingHeader,

    /// Underlying CSV read failure.
    #[error("Statement could not be read: {0}")]
    Csv(#[from] csv::Error),
}

impl From<ReconcileError> for AppError {
    fn from(err: ReconcileError) -> Self {
        Self::Validation(err.to_string())
    }
}
