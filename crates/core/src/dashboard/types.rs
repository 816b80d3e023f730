//! Dashboard summary data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::types::CategoryId;

/// One category's budgeted-vs-actual summary line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakdownRow {
    /// Category ID.
    pub category_id: CategoryId,
    /// Category name.
    pub name: String,
    /// Effective budgeted amount for the month.
    pub budgeted: Decimal,
    /// Actual spend accumulated from the transaction log.
    pub actual: Decimal,
    /// Remaining budget: `budgeted - actual`.
    pub difference: Decimal,
}

/// Budget-vs-actual summary for one account over one month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// Sum of income-category amounts in the window.
    pub total_income: Decimal,
    /// Sum of absolute expense-like amounts in the window.
    pub total_expenses: Decimal,
    /// `total_income - total_expenses`.
    pub net_balance: Decimal,
    /// One row per budgeted category of the owner, zero rows included.
    pub breakdown: Vec<BreakdownRow>,
}
