//! Staged pending transaction entity.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::types::{PendingId, UserId};

use super::account::AccountRole;

/// An imported statement row awaiting reconciliation.
///
/// Write-once staging record: consumed exactly once by either ignore
/// (deleted, no ledger effect) or finalize (deleted, one permanent
/// [`Transaction`](super::Transaction) created). Never referenced after the
/// terminal transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingTransaction {
    /// Unique identifier.
    pub id: PendingId,
    /// Owning user.
    pub user_id: UserId,
    /// Raw statement description.
    pub description: String,
    /// Statement date.
    pub date: NaiveDate,
    /// Signed amount, sign pre-classified on import.
    pub amount: Decimal,
    /// Role of the account this row is expected to land on.
    pub target_role: AccountRole,
    /// When the row was staged.
    pub created_at: DateTime<Utc>,
}
