//! Dashboard repository: read-side summaries over consistent snapshots.

use tally_core::dashboard::{DashboardService, MonthlySummary};
use tally_core::domain::AccountRole;
use tally_core::savings::{SavingsLedger, SavingsService};
use tally_shared::types::{AccountId, UserId};
use tally_shared::{AppError, AppResult};

use crate::state::MemoryLedger;

/// Repository for dashboard and savings-ledger reads.
#[derive(Debug, Clone)]
pub struct DashboardRepository {
    store: MemoryLedger,
}

impl DashboardRepository {
    /// Creates a new dashboard repository.
    #[must_use]
    pub const fn new(store: MemoryLedger) -> Self {
        Self { store }
    }

    /// Builds the budget-vs-actual summary for one account and month.
    ///
    /// Taken under the read guard, so a concurrently executing funding
    /// pair is either fully visible or not at all.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unowned account and `Validation` for an
    /// invalid month.
    pub fn monthly_summary(
        &self,
        user_id: UserId,
        account_id: AccountId,
        year: i32,
        month: u32,
    ) -> AppResult<MonthlySummary> {
        let state = self.store.read()?;
        let account = state
            .account(user_id, account_id)
            .ok_or_else(|| AppError::NotFound(format!("Account {account_id}")))?;

        tracing::debug!(account_id = %account_id, year, month, "building monthly summary");
        Ok(DashboardService::summarize_month(
            account,
            &state.transactions,
            &state.categories,
            &state.overrides,
            year,
            month,
        )?)
    }

    /// Builds the savings ledger: total balance, per-fund balances, and
    /// recent activity.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unowned account and `PreconditionFailed`
    /// if the account is not a savings account.
    pub fn savings_ledger(&self, user_id: UserId, account_id: AccountId) -> AppResult<SavingsLedger> {
        let state = self.store.read()?;
        let account = state
            .account(user_id, account_id)
            .ok_or_else(|| AppError::NotFound(format!("Account {account_id}")))?;
        if account.role != AccountRole::Savings {
            return Err(AppError::PreconditionFailed(format!(
                "Account {account_id} is not a savings account"
            )));
        }

        tracing::debug!(account_id = %account_id, "building savings ledger");
        Ok(SavingsService::build_ledger(
            account,
            &state.transactions,
            &state.categories,
            self.store.config().recent_activity_limit,
        ))
    }
}
