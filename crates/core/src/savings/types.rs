//! Savings ledger data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::types::{AccountId, CategoryId};

use crate::domain::Transaction;

/// Running balance of one savings fund (category).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundBalance {
    /// Category ID.
    pub category_id: CategoryId,
    /// Category name.
    pub name: String,
    /// Net signed balance of the fund.
    pub balance: Decimal,
}

/// Ledger view of a savings account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsLedger {
    /// Savings account ID.
    pub account_id: AccountId,
    /// Sum of all signed amounts on the account.
    pub total_balance: Decimal,
    /// Per-fund running balances.
    pub funds: Vec<FundBalance>,
    /// Most recent transactions, date descending.
    pub recent_activity: Vec<Transaction>,
}
