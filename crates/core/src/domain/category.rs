//! Category entity and category-kind dispatch rules.
//!
//! The category kind drives both the stored sign of a transaction and the
//! bucket it lands in during aggregation. Both rules live here so adding
//! or auditing a kind is a one-place change.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::types::{CategoryId, UserId};

use super::error::DomainError;

/// Kind of a budget category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    /// Cash envelope spending.
    Cash,
    /// Recurring monthly expenses.
    Monthly,
    /// Savings fund, grown through checking-to-savings transfers.
    Savings,
    /// Internal movement; excluded from all totals.
    Transfer,
    /// Income.
    Income,
}

/// Stored sign for transactions of a category kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignRule {
    /// Stored positive.
    Inflow,
    /// Stored negative.
    Outflow,
}

impl SignRule {
    /// Normalizes a raw amount to the stored sign.
    #[must_use]
    pub fn apply(self, amount: Decimal) -> Decimal {
        match self {
            Self::Inflow => amount.abs(),
            Self::Outflow => -amount.abs(),
        }
    }
}

/// Aggregation bucket a category kind contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AggregationBucket {
    /// Counts toward total income.
    Income,
    /// Counts toward total expenses (absolute value).
    Expense,
    /// Excluded from all totals.
    Excluded,
}

impl CategoryKind {
    /// Sign convention for plain transactions of this kind.
    ///
    /// The savings-side inflow leg of a funding pair is the one exception,
    /// encoded by the transfer engine rather than here.
    #[must_use]
    pub const fn sign_rule(self) -> SignRule {
        match self {
            Self::Income => SignRule::Inflow,
            Self::Cash | Self::Monthly | Self::Savings | Self::Transfer => SignRule::Outflow,
        }
    }

    /// Bucket this kind contributes to during aggregation.
    #[must_use]
    pub const fn aggregation_bucket(self) -> AggregationBucket {
        match self {
            Self::Income => AggregationBucket::Income,
            Self::Transfer => AggregationBucket::Excluded,
            Self::Cash | Self::Monthly | Self::Savings => AggregationBucket::Expense,
        }
    }

    /// Whether categories of this kind get a budget-vs-actual breakdown row.
    #[must_use]
    pub const fn is_budgeted(self) -> bool {
        matches!(self, Self::Cash | Self::Monthly | Self::Savings)
    }
}

impl std::fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cash => write!(f, "cash"),
            Self::Monthly => write!(f, "monthly"),
            Self::Savings => write!(f, "savings"),
            Self::Transfer => write!(f, "transfer"),
            Self::Income => write!(f, "income"),
        }
    }
}

/// A budget category exclusively scoped to one owner.
///
/// (owner, name, kind) is unique; the uniqueness constraint is enforced at
/// the repository boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier.
    pub id: CategoryId,
    /// Owning user.
    pub user_id: UserId,
    /// Display name.
    pub name: String,
    /// Category kind.
    pub kind: CategoryKind,
    /// Default budgeted amount, superseded by monthly overrides.
    pub budgeted_amount: Decimal,
    /// When the category was created.
    pub created_at: DateTime<Utc>,
}

impl Category {
    /// Creates a new category, validating structural well-formedness.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyCategoryName` if the name is blank, or
    /// `DomainError::NegativeBudgetedAmount` if the default budget is
    /// negative.
    pub fn new(
        user_id: UserId,
        name: impl Into<String>,
        kind: CategoryKind,
        budgeted_amount: Decimal,
        created_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyCategoryName);
        }
        if budgeted_amount < Decimal::ZERO {
            return Err(DomainError::NegativeBudgetedAmount(budgeted_amount));
        }

        Ok(Self {
            id: CategoryId::new(),
            user_id,
            name,
            kind,
            budgeted_amount,
            created_at,
        })
    }
}
