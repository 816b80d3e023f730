//! In-memory ledger state and its transactional boundary.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tally_core::budget::MonthlyBudgetOverride;
use tally_core::domain::{Account, AccountRole, Category, PendingTransaction, Transaction};
use tally_shared::types::{AccountId, CategoryId, UserId};
use tally_shared::{AppError, AppResult, LedgerConfig};

/// Entity state of the ledger.
///
/// Vectors keep insertion order, which doubles as creation order for
/// pending listings and recent-activity tie-breaks.
#[derive(Debug, Default)]
pub struct LedgerState {
    pub(crate) accounts: Vec<Account>,
    pub(crate) categories: Vec<Category>,
    pub(crate) overrides: Vec<MonthlyBudgetOverride>,
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) pending: Vec<PendingTransaction>,
}

impl LedgerState {
    /// Finds an account owned by the user.
    pub(crate) fn account(&self, user_id: UserId, account_id: AccountId) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|a| a.id == account_id && a.user_id == user_id)
    }

    /// Finds the user's unique account for a role.
    pub(crate) fn account_by_role(&self, user_id: UserId, role: AccountRole) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|a| a.user_id == user_id && a.role == role)
    }

    /// Finds a category owned by the user.
    pub(crate) fn category(&self, user_id: UserId, category_id: CategoryId) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.id == category_id && c.user_id == user_id)
    }
}

/// Shared handle to the ledger state; cheap to clone like a database
/// connection.
///
/// All mutating operations take the single write guard, validate, and only
/// then apply their writes, so a logical operation commits entirely or not
/// at all. The bulk-funding idempotency check runs under the same guard as
/// the writes it protects, which closes the concurrent double-fund race.
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    state: RwLock<LedgerState>,
    config: LedgerConfig,
}

impl MemoryLedger {
    /// Creates an empty ledger with the given configuration.
    #[must_use]
    pub fn new(config: LedgerConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                state: RwLock::new(LedgerState::default()),
                config,
            }),
        }
    }

    /// Returns the ledger configuration.
    #[must_use]
    pub fn config(&self) -> &LedgerConfig {
        &self.inner.config
    }

    /// Takes a consistent read snapshot.
    pub(crate) fn read(&self) -> AppResult<RwLockReadGuard<'_, LedgerState>> {
        self.inner
            .state
            .read()
            .map_err(|_| AppError::Storage("ledger state lock poisoned".to_string()))
    }

    /// Takes the exclusive write guard for one atomic operation.
    pub(crate) fn write(&self) -> AppResult<RwLockWriteGuard<'_, LedgerState>> {
        self.inner
            .state
            .write()
            .map_err(|_| AppError::Storage("ledger state lock poisoned".to_string()))
    }
}
