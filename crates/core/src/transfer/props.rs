//! Property-based tests for the transfer engine.

use chrono::{NaiveDate, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use tally_shared::types::UserId;

use super::engine::TransferEngine;
use crate::domain::{Account, AccountRole, Category, CategoryKind};

fn positive_amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000).prop_map(|n| Decimal::new(n, 2))
}

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

proptest! {
    /// Conservation: the two legs of any planned funding sum to exactly
    /// zero, and the outflow always lands on checking.
    #[test]
    fn prop_funding_pair_conserves_money(
        amount in positive_amount_strategy(),
        date in date_strategy(),
    ) {
        let user_id = UserId::new();
        let checking = Account::new(
            user_id, "Checking", AccountRole::Checking, Decimal::ZERO, Utc::now(),
        ).unwrap();
        let savings = Account::new(
            user_id, "Savings", AccountRole::Savings, Decimal::ZERO, Utc::now(),
        ).unwrap();
        let category = Category::new(
            user_id, "Fund", CategoryKind::Savings, Decimal::ZERO, Utc::now(),
        ).unwrap();

        let plan = TransferEngine::plan_funding(
            &checking, &savings, &category, amount, date, "funding",
        ).unwrap();

        prop_assert_eq!(plan.net(), Decimal::ZERO);
        prop_assert_eq!(plan.outflow.amount, -amount);
        prop_assert_eq!(plan.inflow.amount, amount);
        prop_assert_eq!(plan.outflow.account_id, checking.id);
        prop_assert_eq!(plan.inflow.account_id, savings.id);
        prop_assert_eq!(plan.outflow.transaction_date, date);
        prop_assert_eq!(plan.inflow.transaction_date, date);
    }

    /// Non-positive amounts never produce a plan.
    #[test]
    fn prop_non_positive_amounts_rejected(
        raw in -1_000_000_000i64..=0,
        date in date_strategy(),
    ) {
        let user_id = UserId::new();
        let checking = Account::new(
            user_id, "Checking", AccountRole::Checking, Decimal::ZERO, Utc::now(),
        ).unwrap();
        let savings = Account::new(
            user_id, "Savings", AccountRole::Savings, Decimal::ZERO, Utc::now(),
        ).unwrap();
        let category = Category::new(
            user_id, "Fund", CategoryKind::Savings, Decimal::ZERO, Utc::now(),
        ).unwrap();

        let result = TransferEngine::plan_funding(
            &checking, &savings, &category, Decimal::new(raw, 2), date, "funding",
        );
        prop_assert!(result.is_err());
    }
}
