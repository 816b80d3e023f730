//! Transaction entity.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::types::{AccountId, CategoryId, TransactionId, UserId};

/// A recorded money movement.
///
/// The amount is signed: Income-kind categories store positive amounts,
/// every other kind stores negative, except the savings-side inflow leg of
/// a funding pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier.
    pub id: TransactionId,
    /// Owning user.
    pub user_id: UserId,
    /// Account the movement happened on.
    pub account_id: AccountId,
    /// Category the movement is classified under.
    pub category_id: CategoryId,
    /// Signed amount.
    pub amount: Decimal,
    /// Free-text description.
    pub description: Option<String>,
    /// Date the movement happened.
    pub transaction_date: NaiveDate,
    /// When the row was recorded.
    pub created_at: DateTime<Utc>,
}
