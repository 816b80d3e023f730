//! Dashboard aggregation service.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tally_shared::types::CategoryId;
use tally_shared::types::money::to_minor_unit;

use super::types::{BreakdownRow, MonthlySummary};
use crate::budget::{BudgetResolver, MonthlyBudgetOverride};
use crate::domain::{Account, AggregationBucket, Category, DomainError, Transaction, month_window};

/// Dashboard service producing budget-vs-actual summaries.
///
/// Pure read over the supplied transaction and category snapshot; never
/// mutates anything.
pub struct DashboardService;

impl DashboardService {
    /// Summarizes one account's month.
    ///
    /// Transactions are filtered to the account and the half-open window
    /// `[first-of-month, first-of-next-month)`. Transfer-kind categories
    /// are excluded from every total; income-kind amounts accumulate as-is
    /// into total income; everything else contributes its absolute value
    /// to total expenses and to its category's actual spend. Every
    /// budgeted category of the owner gets a breakdown row, including
    /// categories with zero activity and zero budget. Amounts are rounded
    /// to the currency minor unit on the way out.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidMonth` for a month outside 1-12.
    pub fn summarize_month(
        account: &Account,
        transactions: &[Transaction],
        categories: &[Category],
        overrides: &[MonthlyBudgetOverride],
        year: i32,
        month: u32,
    ) -> Result<MonthlySummary, DomainError> {
        let window = month_window(year, month)?;

        let category_map: HashMap<CategoryId, &Category> = categories
            .iter()
            .filter(|c| c.user_id == account.user_id)
            .map(|c| (c.id, c))
            .collect();

        let mut total_income = Decimal::ZERO;
        let mut total_expenses = Decimal::ZERO;
        let mut actual_by_category: HashMap<CategoryId, Decimal> = HashMap::new();

        for transaction in transactions
            .iter()
            .filter(|t| t.user_id == account.user_id && t.account_id == account.id)
            .filter(|t| window.contains(t.transaction_date))
        {
            let Some(category) = category_map.get(&transaction.category_id) else {
                continue;
            };

            match category.kind.aggregation_bucket() {
                AggregationBucket::Excluded => {}
                AggregationBucket::Income => total_income += transaction.amount,
                AggregationBucket::Expense => {
                    let spent = transaction.amount.abs();
                    total_expenses += spent;
                    *actual_by_category.entry(category.id).or_default() += spent;
                }
            }
        }

        let breakdown = categories
            .iter()
            .filter(|c| c.user_id == account.user_id && c.kind.is_budgeted())
            .map(|category| {
                let budgeted =
                    BudgetResolver::effective_budget(category, overrides, year, month);
                let actual = actual_by_category
                    .get(&category.id)
                    .copied()
                    .unwrap_or(Decimal::ZERO);
                BreakdownRow {
                    category_id: category.id,
                    name: category.name.clone(),
                    budgeted: to_minor_unit(budgeted),
                    actual: to_minor_unit(actual),
                    difference: to_minor_unit(budgeted - actual),
                }
            })
            .collect();

        Ok(MonthlySummary {
            year,
            month,
            total_income: to_minor_unit(total_income),
            total_expenses: to_minor_unit(total_expenses),
            net_balance: to_minor_unit(total_income - total_expenses),
            breakdown,
        })
    }
}
