//! Pending-transaction repository: the reconciliation lifecycle.

use std::collections::HashSet;

use chrono::Utc;
use tally_core::domain::{AccountRole, PendingTransaction, Transaction};
use tally_core::reconcile::{RawStatementRecord, classify_batch};
use tally_shared::types::{AccountId, CategoryId, PendingId, TransactionId, UserId};
use tally_shared::{AppError, AppResult};

use crate::state::MemoryLedger;

/// One finalize instruction: which pending record lands where.
#[derive(Debug, Clone)]
pub struct FinalizeItem {
    /// Staged record to consume.
    pub pending_id: PendingId,
    /// Account the permanent transaction posts to.
    pub account_id: AccountId,
    /// Category the permanent transaction is classified under.
    pub category_id: CategoryId,
}

/// Repository for the import/ignore/finalize lifecycle.
#[derive(Debug, Clone)]
pub struct PendingRepository {
    store: MemoryLedger,
}

impl PendingRepository {
    /// Creates a new pending repository.
    #[must_use]
    pub const fn new(store: MemoryLedger) -> Self {
        Self { store }
    }

    /// Imports a batch of parsed statement rows into the staging area.
    ///
    /// Classification assigns each row's sign from the description; the
    /// import is all-or-nothing — a malformed row aborts the whole batch
    /// with no partial staging. Returns the number of staged rows.
    ///
    /// # Errors
    ///
    /// Returns `Validation` naming the first malformed row.
    pub fn import_statement(
        &self,
        user_id: UserId,
        target_role: AccountRole,
        records: &[RawStatementRecord],
    ) -> AppResult<usize> {
        let classified = classify_batch(records, &self.store.config().inflow_markers)?;

        let mut state = self.store.write()?;
        let now = Utc::now();
        let count = classified.len();
        for record in classified {
            state.pending.push(PendingTransaction {
                id: PendingId::new(),
                user_id,
                description: record.description,
                date: record.date,
                amount: record.amount,
                target_role,
                created_at: now,
            });
        }

        tracing::info!(count, role = %target_role, "staged imported statement rows");
        Ok(count)
    }

    /// Lists the user's staged records for a target role, in insertion
    /// order.
    pub fn list_pending(
        &self,
        user_id: UserId,
        target_role: AccountRole,
    ) -> AppResult<Vec<PendingTransaction>> {
        let state = self.store.read()?;
        Ok(state
            .pending
            .iter()
            .filter(|p| p.user_id == user_id && p.target_role == target_role)
            .cloned()
            .collect())
    }

    /// Deletes staged records with no ledger effect.
    ///
    /// Partial matches delete the valid records and report the count.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if none of the supplied ids match an owned
    /// record.
    pub fn ignore_pending(&self, user_id: UserId, ids: &[PendingId]) -> AppResult<usize> {
        let mut state = self.store.write()?;

        let matched: HashSet<PendingId> = state
            .pending
            .iter()
            .filter(|p| p.user_id == user_id && ids.contains(&p.id))
            .map(|p| p.id)
            .collect();
        if matched.is_empty() {
            return Err(AppError::NotFound(
                "No matching pending transactions".to_string(),
            ));
        }

        state.pending.retain(|p| !matched.contains(&p.id));
        tracing::info!(count = matched.len(), "ignored pending transactions");
        Ok(matched.len())
    }

    /// Promotes staged records into permanent transactions.
    ///
    /// Each item is processed independently: an invalid pending id,
    /// account, or category skips that item without aborting the rest.
    /// A consumed record carries its original signed amount, date, and
    /// description into the chosen account and category, and is deleted
    /// in the same atomic operation. Returns the number finalized.
    pub fn finalize_pending(&self, user_id: UserId, items: &[FinalizeItem]) -> AppResult<usize> {
        let mut state = self.store.write()?;
        let now = Utc::now();
        let mut count = 0;

        for item in items {
            let Some(position) = state
                .pending
                .iter()
                .position(|p| p.id == item.pending_id && p.user_id == user_id)
            else {
                tracing::warn!(pending_id = %item.pending_id, "skipping unknown pending record");
                continue;
            };
            if state.account(user_id, item.account_id).is_none() {
                tracing::warn!(account_id = %item.account_id, "skipping finalize: unknown account");
                continue;
            }
            if state.category(user_id, item.category_id).is_none() {
                tracing::warn!(category_id = %item.category_id, "skipping finalize: unknown category");
                continue;
            }

            let pending = state.pending.remove(position);
            state.transactions.push(Transaction {
                id: TransactionId::new(),
                user_id,
                account_id: item.account_id,
                category_id: item.category_id,
                amount: pending.amount,
                description: Some(pending.description),
                transaction_date: pending.date,
                created_at: now,
            });
            count += 1;
        }

        tracing::info!(count, total = items.len(), "finalized pending transactions");
        Ok(count)
    }
}
