//! Account repository.

use chrono::Utc;
use rust_decimal::Decimal;
use tally_core::domain::{Account, AccountRole};
use tally_shared::types::{AccountId, UserId};
use tally_shared::{AppError, AppResult};

use crate::state::MemoryLedger;

/// Input for creating an account.
#[derive(Debug, Clone)]
pub struct CreateAccountInput {
    /// Owning user.
    pub user_id: UserId,
    /// Display name.
    pub name: String,
    /// Account role, immutable after creation.
    pub role: AccountRole,
    /// Balance at account creation.
    pub opening_balance: Decimal,
}

/// Repository for account operations.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    store: MemoryLedger,
}

impl AccountRepository {
    /// Creates a new account repository.
    #[must_use]
    pub const fn new(store: MemoryLedger) -> Self {
        Self { store }
    }

    /// Creates an account.
    ///
    /// Each owner holds at most one account per role, so transfer
    /// semantics resolve unambiguously.
    ///
    /// # Errors
    ///
    /// Returns `Conflict` if the owner already has an account with this
    /// role, or `Validation` if the name is blank.
    pub fn create_account(&self, input: CreateAccountInput) -> AppResult<Account> {
        let mut state = self.store.write()?;

        if state.account_by_role(input.user_id, input.role).is_some() {
            return Err(AppError::Conflict(format!(
                "A {} account already exists for this owner",
                input.role
            )));
        }

        let account = Account::new(
            input.user_id,
            input.name,
            input.role,
            input.opening_balance,
            Utc::now(),
        )?;
        state.accounts.push(account.clone());

        tracing::info!(account_id = %account.id, role = %account.role, "created account");
        Ok(account)
    }

    /// Gets an account owned by the user.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the account is absent or owned by someone
    /// else.
    pub fn get_account(&self, user_id: UserId, account_id: AccountId) -> AppResult<Account> {
        let state = self.store.read()?;
        state
            .account(user_id, account_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Account {account_id}")))
    }

    /// Lists the user's accounts in creation order.
    pub fn list_accounts(&self, user_id: UserId) -> AppResult<Vec<Account>> {
        let state = self.store.read()?;
        Ok(state
            .accounts
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect())
    }
}
