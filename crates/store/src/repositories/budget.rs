//! Budget override repository.

use chrono::Utc;
use rust_decimal::Decimal;
use tally_core::budget::{BudgetResolver, MonthlyBudgetOverride};
use tally_core::domain::month_window;
use tally_shared::types::{CategoryId, OverrideId, UserId};
use tally_shared::{AppError, AppResult};

use crate::state::MemoryLedger;

/// Repository for budget resolution and override editing.
#[derive(Debug, Clone)]
pub struct BudgetRepository {
    store: MemoryLedger,
}

impl BudgetRepository {
    /// Creates a new budget repository.
    #[must_use]
    pub const fn new(store: MemoryLedger) -> Self {
        Self { store }
    }

    /// Returns the effective budgeted amount for a category in a month:
    /// the monthly override if present, otherwise the category default.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unowned category and `Validation` for an
    /// invalid month.
    pub fn resolve_budget(
        &self,
        user_id: UserId,
        category_id: CategoryId,
        year: i32,
        month: u32,
    ) -> AppResult<Decimal> {
        month_window(year, month)?;

        let state = self.store.read()?;
        let category = state
            .category(user_id, category_id)
            .ok_or_else(|| AppError::NotFound(format!("Category {category_id}")))?;

        Ok(BudgetResolver::effective_budget(
            category,
            &state.overrides,
            year,
            month,
        ))
    }

    /// Creates or updates the override for (category, year, month).
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unowned category and `Validation` for an
    /// invalid month or negative amount.
    pub fn upsert_override(
        &self,
        user_id: UserId,
        category_id: CategoryId,
        year: i32,
        month: u32,
        amount: Decimal,
    ) -> AppResult<MonthlyBudgetOverride> {
        month_window(year, month)?;
        if amount < Decimal::ZERO {
            return Err(AppError::Validation(format!(
                "Override amount must not be negative: {amount}"
            )));
        }

        let mut state = self.store.write()?;
        if state.category(user_id, category_id).is_none() {
            return Err(AppError::NotFound(format!("Category {category_id}")));
        }

        let existing = state.overrides.iter().position(|o| {
            o.user_id == user_id && o.category_id == category_id && o.year == year && o.month == month
        });

        let saved = if let Some(index) = existing {
            let current = &mut state.overrides[index];
            current.amount = amount;
            current.updated_at = Utc::now();
            current.clone()
        } else {
            let created = MonthlyBudgetOverride {
                id: OverrideId::new(),
                user_id,
                category_id,
                year,
                month,
                amount,
                updated_at: Utc::now(),
            };
            state.overrides.push(created.clone());
            created
        };

        tracing::info!(
            category_id = %category_id,
            year,
            month,
            %amount,
            "set monthly budget override"
        );
        Ok(saved)
    }
}
