//! Budget override data types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::types::{CategoryId, OverrideId, UserId};

/// A month-specific budgeted amount superseding a category's default.
///
/// At most one override per (owner, category, year, month) is meaningful;
/// the resolver tie-breaks duplicates deterministically on `updated_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyBudgetOverride {
    /// Unique identifier.
    pub id: OverrideId,
    /// Owning user.
    pub user_id: UserId,
    /// Category the override applies to.
    pub category_id: CategoryId,
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// Overriding budgeted amount.
    pub amount: Decimal,
    /// Last modification timestamp, used as the duplicate tie-break.
    pub updated_at: DateTime<Utc>,
}
