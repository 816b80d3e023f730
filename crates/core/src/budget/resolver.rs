//! Budget resolver: override if present, else category default.

use rust_decimal::Decimal;

use super::types::MonthlyBudgetOverride;
use crate::domain::Category;

/// Budget resolver for effective monthly amounts.
pub struct BudgetResolver;

impl BudgetResolver {
    /// Returns the effective budgeted amount for a category in a month.
    ///
    /// An override keyed by (owner, category, year, month) wins over the
    /// category default. Duplicate overrides are a data anomaly; the most
    /// recently updated one is picked as a defensive tie-break — correct
    /// callers never rely on it.
    ///
    /// Pure read, no side effects.
    #[must_use]
    pub fn effective_budget(
        category: &Category,
        overrides: &[MonthlyBudgetOverride],
        year: i32,
        month: u32,
    ) -> Decimal {
        overrides
            .iter()
            .filter(|o| {
                o.user_id == category.user_id
                    && o.category_id == category.id
                    && o.year == year
                    && o.month == month
            })
            .max_by_key(|o| o.updated_at)
            .map_or(category.budgeted_amount, |o| o.amount)
    }
}
