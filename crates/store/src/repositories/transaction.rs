//! Transaction repository: plain movements and savings fundings.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use tally_core::domain::{AccountRole, CategoryKind, DomainError, Transaction, month_window};
use tally_core::transfer::{FundingLeg, TransferEngine};
use tally_shared::types::{AccountId, CategoryId, TransactionId, UserId};
use tally_shared::{AppError, AppResult};

use crate::state::MemoryLedger;

/// Input for creating a plain transaction.
///
/// The stored sign is normalized from the category's sign rule; callers
/// pass the magnitude (any sign is accepted and normalized).
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    /// Owning user.
    pub user_id: UserId,
    /// Account the movement happened on.
    pub account_id: AccountId,
    /// Category the movement is classified under.
    pub category_id: CategoryId,
    /// Amount; sign is normalized from the category kind.
    pub amount: Decimal,
    /// Free-text description.
    pub description: Option<String>,
    /// Date the movement happened.
    pub transaction_date: NaiveDate,
}

/// Patch for updating a transaction; only provided fields are applied.
#[derive(Debug, Clone, Default)]
pub struct UpdateTransactionInput {
    /// New category; ownership is revalidated.
    pub category_id: Option<CategoryId>,
    /// New amount; re-normalized against the effective category.
    pub amount: Option<Decimal>,
    /// New description (`Some(None)` clears it).
    pub description: Option<Option<String>>,
    /// New transaction date.
    pub transaction_date: Option<NaiveDate>,
}

/// Repository for transaction operations.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    store: MemoryLedger,
}

impl TransactionRepository {
    /// Creates a new transaction repository.
    #[must_use]
    pub const fn new(store: MemoryLedger) -> Self {
        Self { store }
    }

    /// Creates a plain transaction.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unowned account or category and
    /// `Validation` for a zero amount.
    pub fn create_transaction(&self, input: CreateTransactionInput) -> AppResult<Transaction> {
        let mut state = self.store.write()?;

        if state.account(input.user_id, input.account_id).is_none() {
            return Err(AppError::NotFound(format!("Account {}", input.account_id)));
        }
        let category = state
            .category(input.user_id, input.category_id)
            .ok_or_else(|| AppError::NotFound(format!("Category {}", input.category_id)))?;
        if input.amount == Decimal::ZERO {
            return Err(DomainError::ZeroAmount.into());
        }

        let transaction = Transaction {
            id: TransactionId::new(),
            user_id: input.user_id,
            account_id: input.account_id,
            category_id: input.category_id,
            amount: category.kind.sign_rule().apply(input.amount),
            description: input.description,
            transaction_date: input.transaction_date,
            created_at: Utc::now(),
        };
        state.transactions.push(transaction.clone());

        tracing::info!(
            transaction_id = %transaction.id,
            amount = %transaction.amount,
            "created transaction"
        );
        Ok(transaction)
    }

    /// Applies a patch to a transaction, field by field.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unowned transaction or patched category
    /// and `Validation` for a zero amount.
    pub fn update_transaction(
        &self,
        user_id: UserId,
        transaction_id: TransactionId,
        patch: UpdateTransactionInput,
    ) -> AppResult<Transaction> {
        let mut state = self.store.write()?;

        let index = state
            .transactions
            .iter()
            .position(|t| t.id == transaction_id && t.user_id == user_id)
            .ok_or_else(|| AppError::NotFound(format!("Transaction {transaction_id}")))?;

        let category_id = patch
            .category_id
            .unwrap_or(state.transactions[index].category_id);
        let category = state
            .category(user_id, category_id)
            .ok_or_else(|| AppError::NotFound(format!("Category {category_id}")))?;

        let amount = patch.amount.unwrap_or(state.transactions[index].amount);
        if amount == Decimal::ZERO {
            return Err(DomainError::ZeroAmount.into());
        }
        let amount = category.kind.sign_rule().apply(amount);

        let transaction = &mut state.transactions[index];
        transaction.category_id = category_id;
        transaction.amount = amount;
        if let Some(description) = patch.description {
            transaction.description = description;
        }
        if let Some(transaction_date) = patch.transaction_date {
            transaction.transaction_date = transaction_date;
        }

        Ok(transaction.clone())
    }

    /// Deletes a transaction.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unowned transaction.
    pub fn delete_transaction(
        &self,
        user_id: UserId,
        transaction_id: TransactionId,
    ) -> AppResult<()> {
        let mut state = self.store.write()?;

        if !state
            .transactions
            .iter()
            .any(|t| t.id == transaction_id && t.user_id == user_id)
        {
            return Err(AppError::NotFound(format!("Transaction {transaction_id}")));
        }

        state.transactions.retain(|t| t.id != transaction_id);
        tracing::info!(transaction_id = %transaction_id, "deleted transaction");
        Ok(())
    }

    /// Lists the user's transactions within a calendar month, in creation
    /// order.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for an invalid month.
    pub fn list_month(&self, user_id: UserId, year: i32, month: u32) -> AppResult<Vec<Transaction>> {
        let window = month_window(year, month)?;
        let state = self.store.read()?;

        Ok(state
            .transactions
            .iter()
            .filter(|t| t.user_id == user_id && window.contains(t.transaction_date))
            .cloned()
            .collect())
    }

    /// Lists the month's transactions categorized as Savings or Transfer.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for an invalid month.
    pub fn list_transfers(
        &self,
        user_id: UserId,
        year: i32,
        month: u32,
    ) -> AppResult<Vec<Transaction>> {
        let window = month_window(year, month)?;
        let state = self.store.read()?;

        Ok(state
            .transactions
            .iter()
            .filter(|t| t.user_id == user_id && window.contains(t.transaction_date))
            .filter(|t| {
                state.category(user_id, t.category_id).is_some_and(|c| {
                    matches!(c.kind, CategoryKind::Savings | CategoryKind::Transfer)
                })
            })
            .cloned()
            .collect())
    }

    /// Funds a savings category from checking: writes the outflow and
    /// inflow legs as one atomic pair. Readers never observe a lone leg.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for unowned accounts or category,
    /// `PreconditionFailed` for wrong roles/kind/ownership, and
    /// `Validation` for a non-positive amount.
    pub fn fund_savings(
        &self,
        user_id: UserId,
        checking_id: AccountId,
        savings_id: AccountId,
        category_id: CategoryId,
        amount: Decimal,
        date: NaiveDate,
        description: &str,
    ) -> AppResult<(Transaction, Transaction)> {
        let mut state = self.store.write()?;

        let checking = state
            .account(user_id, checking_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Account {checking_id}")))?;
        let savings = state
            .account(user_id, savings_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Account {savings_id}")))?;
        let category = state
            .category(user_id, category_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Category {category_id}")))?;

        let plan =
            TransferEngine::plan_funding(&checking, &savings, &category, amount, date, description)?;

        let now = Utc::now();
        let outflow = materialize_leg(user_id, &plan.outflow, now);
        let inflow = materialize_leg(user_id, &plan.inflow, now);
        state.transactions.push(outflow.clone());
        state.transactions.push(inflow.clone());

        tracing::info!(
            category_id = %category_id,
            %amount,
            "funded savings category from checking"
        );
        Ok((outflow, inflow))
    }

    /// Funds every savings category not yet funded this month with its
    /// resolved budgeted amount, dated the first of the month.
    ///
    /// The already-funded check and the writes run under the same guard,
    /// so re-invoking for the same month never double-funds, even
    /// concurrently. Returns the number of newly created fundings; zero
    /// is a valid result.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the owner lacks a checking or savings
    /// account and `Validation` for an invalid month.
    pub fn fund_all_unfunded(&self, user_id: UserId, year: i32, month: u32) -> AppResult<usize> {
        let mut state = self.store.write()?;
        let window = month_window(year, month)?;

        let checking = state
            .account_by_role(user_id, AccountRole::Checking)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Checking account".to_string()))?;
        let savings = state
            .account_by_role(user_id, AccountRole::Savings)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Savings account".to_string()))?;

        let categories: Vec<_> = state
            .categories
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect();
        let already_funded: HashSet<CategoryId> = state
            .transactions
            .iter()
            .filter(|t| t.user_id == user_id && t.account_id == checking.id)
            .filter(|t| window.contains(t.transaction_date))
            .map(|t| t.category_id)
            .collect();

        let plans = TransferEngine::plan_month_funding(
            &checking,
            &savings,
            &categories,
            &state.overrides,
            &already_funded,
            year,
            month,
        )?;

        let now = Utc::now();
        let count = plans.len();
        for plan in &plans {
            state
                .transactions
                .push(materialize_leg(user_id, &plan.outflow, now));
            state
                .transactions
                .push(materialize_leg(user_id, &plan.inflow, now));
        }

        tracing::info!(year, month, count, "bulk-funded savings categories");
        Ok(count)
    }
}

fn materialize_leg(user_id: UserId, leg: &FundingLeg, now: DateTime<Utc>) -> Transaction {
    Transaction {
        id: TransactionId::new(),
        user_id,
        account_id: leg.account_id,
        category_id: leg.category_id,
        amount: leg.amount,
        description: Some(leg.description.clone()),
        transaction_date: leg.transaction_date,
        created_at: now,
    }
}
