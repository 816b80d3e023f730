//! Transfer engine for planning checking-to-savings fundings.

use std::collections::HashSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tally_shared::types::CategoryId;

use super::error::TransferError;
use super::types::{FundingLeg, FundingPlan};
use crate::budget::{BudgetResolver, MonthlyBudgetOverride};
use crate::domain::{Account, AccountRole, Category, CategoryKind, month_window};

/// Transfer engine for funding savings categories from checking.
///
/// Pure planning logic with no persistence dependencies; the store executes
/// plans atomically.
pub struct TransferEngine;

impl TransferEngine {
    /// Plans a single funding of a savings category.
    ///
    /// The outflow leg debits the checking account by `amount` against the
    /// savings category (so the funding counts toward that category's
    /// budget); the inflow leg credits the savings account by the same
    /// amount under the same category (so the fund's balance grows).
    ///
    /// # Errors
    ///
    /// Returns a precondition error if the account roles, the category
    /// kind, or the ownership do not line up, and a validation error if
    /// `amount` is not positive.
    pub fn plan_funding(
        checking: &Account,
        savings: &Account,
        category: &Category,
        amount: Decimal,
        date: NaiveDate,
        description: &str,
    ) -> Result<FundingPlan, TransferError> {
        if checking.role != AccountRole::Checking {
            return Err(TransferError::SourceNotChecking(checking.id));
        }
        if savings.role != AccountRole::Savings {
            return Err(TransferError::DestinationNotSavings(savings.id));
        }
        if checking.user_id != savings.user_id || checking.user_id != category.user_id {
            return Err(TransferError::OwnershipMismatch);
        }
        if category.kind != CategoryKind::Savings {
            return Err(TransferError::NotSavingsCategory(category.id));
        }
        if amount <= Decimal::ZERO {
            return Err(TransferError::NonPositiveAmount(amount));
        }

        Ok(FundingPlan {
            outflow: FundingLeg {
                account_id: checking.id,
                category_id: category.id,
                amount: -amount,
                description: description.to_string(),
                transaction_date: date,
            },
            inflow: FundingLeg {
                account_id: savings.id,
                category_id: category.id,
                amount,
                description: description.to_string(),
                transaction_date: date,
            },
        })
    }

    /// Plans fundings for every savings category not yet funded this month.
    ///
    /// Categories with a resolved budget of zero are skipped, as are those
    /// in `already_funded` (category ids that already carry a checking-side
    /// funding transaction dated within the target month). Each remaining
    /// category is funded with its resolved budgeted amount, dated the
    /// first day of the month. An empty plan list is a valid result.
    ///
    /// The caller must evaluate `already_funded` and execute the returned
    /// plans inside one atomic unit, otherwise two concurrent invocations
    /// can double-fund.
    ///
    /// # Errors
    ///
    /// Returns an error if the month is invalid or any planned funding
    /// fails its preconditions.
    pub fn plan_month_funding(
        checking: &Account,
        savings: &Account,
        categories: &[Category],
        overrides: &[MonthlyBudgetOverride],
        already_funded: &HashSet<CategoryId>,
        year: i32,
        month: u32,
    ) -> Result<Vec<FundingPlan>, TransferError> {
        let window = month_window(year, month)?;

        let mut plans = Vec::new();
        for category in categories
            .iter()
            .filter(|c| c.kind == CategoryKind::Savings)
            .filter(|c| !already_funded.contains(&c.id))
        {
            let amount = BudgetResolver::effective_budget(category, overrides, year, month);
            if amount <= Decimal::ZERO {
                continue;
            }

            let description = format!("Monthly funding: {}", category.name);
            plans.push(Self::plan_funding(
                checking,
                savings,
                category,
                amount,
                window.start,
                &description,
            )?);
        }

        Ok(plans)
    }
}
