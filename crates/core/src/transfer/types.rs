//! Funding plan data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::types::{AccountId, CategoryId};

/// One half of a planned funding pair, ready to be persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundingLeg {
    /// Account the leg posts to.
    pub account_id: AccountId,
    /// Savings category both legs reference.
    pub category_id: CategoryId,
    /// Signed amount: negative on checking, positive on savings.
    pub amount: Decimal,
    /// Transfer description.
    pub description: String,
    /// Transfer date.
    pub transaction_date: NaiveDate,
}

/// A planned checking-to-savings funding: two legs that sum to zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundingPlan {
    /// Outflow leg on the checking account (negative amount).
    pub outflow: FundingLeg,
    /// Inflow leg on the savings account (positive amount).
    pub inflow: FundingLeg,
}

impl FundingPlan {
    /// Net effect of the pair; zero for any valid plan.
    #[must_use]
    pub fn net(&self) -> Decimal {
        self.outflow.amount + self.inflow.amount
    }
}
