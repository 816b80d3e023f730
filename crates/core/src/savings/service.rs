//! Savings ledger builder.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tally_shared::types::CategoryId;
use tally_shared::types::money::to_minor_unit;

use super::types::{FundBalance, SavingsLedger};
use crate::domain::{Account, Category, CategoryKind, Transaction};

/// Savings service computing per-fund running balances.
pub struct SavingsService;

impl SavingsService {
    /// Builds the ledger view of a savings account.
    ///
    /// Balances reuse raw signed amounts (not absolute values), so funding
    /// inflows and any recorded withdrawals net correctly. A fund row is
    /// emitted for every savings-kind category of the owner even with zero
    /// activity, plus any other category that has activity on the account.
    /// Recent activity is ordered by date descending, ties broken by
    /// creation order (most recent first), truncated to `recent_limit`.
    ///
    /// `transactions` must be supplied in creation order.
    #[must_use]
    pub fn build_ledger(
        account: &Account,
        transactions: &[Transaction],
        categories: &[Category],
        recent_limit: usize,
    ) -> SavingsLedger {
        let on_account: Vec<&Transaction> = transactions
            .iter()
            .filter(|t| t.user_id == account.user_id && t.account_id == account.id)
            .collect();

        let total_balance: Decimal = on_account.iter().map(|t| t.amount).sum();

        let mut balance_by_category: HashMap<CategoryId, Decimal> = HashMap::new();
        for transaction in &on_account {
            *balance_by_category
                .entry(transaction.category_id)
                .or_default() += transaction.amount;
        }

        let funds = categories
            .iter()
            .filter(|c| c.user_id == account.user_id)
            .filter(|c| {
                c.kind == CategoryKind::Savings || balance_by_category.contains_key(&c.id)
            })
            .map(|category| FundBalance {
                category_id: category.id,
                name: category.name.clone(),
                balance: to_minor_unit(
                    balance_by_category
                        .get(&category.id)
                        .copied()
                        .unwrap_or(Decimal::ZERO),
                ),
            })
            .collect();

        // Reverse first so the stable sort leaves same-date rows in
        // most-recently-created order.
        let mut recent_activity: Vec<Transaction> =
            on_account.into_iter().rev().cloned().collect();
        recent_activity.sort_by(|a, b| b.transaction_date.cmp(&a.transaction_date));
        recent_activity.truncate(recent_limit);

        SavingsLedger {
            account_id: account.id,
            total_balance: to_minor_unit(total_balance),
            funds,
            recent_activity,
        }
    }
}
