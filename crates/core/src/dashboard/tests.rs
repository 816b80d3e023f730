//! Scenario tests for dashboard aggregation.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tally_shared::types::{TransactionId, UserId};

use super::service::DashboardService;
use crate::budget::MonthlyBudgetOverride;
use crate::domain::{Account, AccountRole, Category, CategoryKind, Transaction};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn make_account(user_id: UserId) -> Account {
    Account::new(
        user_id,
        "Checking",
        AccountRole::Checking,
        Decimal::ZERO,
        Utc::now(),
    )
    .unwrap()
}

fn make_category(user_id: UserId, name: &str, kind: CategoryKind, budget: Decimal) -> Category {
    Category::new(user_id, name, kind, budget, Utc::now()).unwrap()
}

fn make_transaction(
    account: &Account,
    category: &Category,
    amount: Decimal,
    transaction_date: NaiveDate,
) -> Transaction {
    Transaction {
        id: TransactionId::new(),
        user_id: account.user_id,
        account_id: account.id,
        category_id: category.id,
        amount,
        description: None,
        transaction_date,
        created_at: Utc::now(),
    }
}

#[test]
fn test_income_and_expense_totals() {
    let user_id = UserId::new();
    let account = make_account(user_id);
    let salary = make_category(user_id, "Salary", CategoryKind::Income, Decimal::ZERO);
    let groceries = make_category(user_id, "Groceries", CategoryKind::Monthly, dec!(400));

    let transactions = vec![
        make_transaction(&account, &salary, dec!(3200), date(2024, 6, 1)),
        make_transaction(&account, &groceries, dec!(-45.00), date(2024, 6, 3)),
        make_transaction(&account, &groceries, dec!(-55.00), date(2024, 6, 17)),
    ];
    let categories = vec![salary, groceries.clone()];

    let summary =
        DashboardService::summarize_month(&account, &transactions, &categories, &[], 2024, 6)
            .unwrap();

    assert_eq!(summary.total_income, dec!(3200));
    assert_eq!(summary.total_expenses, dec!(100.00));
    assert_eq!(summary.net_balance, dec!(3100.00));

    let row = summary
        .breakdown
        .iter()
        .find(|r| r.category_id == groceries.id)
        .unwrap();
    assert_eq!(row.budgeted, dec!(400));
    assert_eq!(row.actual, dec!(100.00));
    assert_eq!(row.difference, dec!(300.00));
}

#[test]
fn test_transfer_kind_excluded_everywhere() {
    let user_id = UserId::new();
    let account = make_account(user_id);
    let transfer = make_category(user_id, "Internal Move", CategoryKind::Transfer, Decimal::ZERO);

    let transactions = vec![make_transaction(
        &account,
        &transfer,
        dec!(-500),
        date(2024, 6, 10),
    )];
    let categories = vec![transfer.clone()];

    let summary =
        DashboardService::summarize_month(&account, &transactions, &categories, &[], 2024, 6)
            .unwrap();

    assert_eq!(summary.total_income, Decimal::ZERO);
    assert_eq!(summary.total_expenses, Decimal::ZERO);
    assert_eq!(summary.net_balance, Decimal::ZERO);
    assert!(
        summary
            .breakdown
            .iter()
            .all(|r| r.category_id != transfer.id)
    );
}

#[test]
fn test_actuals_are_sign_normalized() {
    let user_id = UserId::new();
    let account = make_account(user_id);
    let groceries = make_category(user_id, "Groceries", CategoryKind::Monthly, dec!(100));

    let transactions = vec![make_transaction(
        &account,
        &groceries,
        dec!(-45.00),
        date(2024, 6, 5),
    )];
    let categories = vec![groceries.clone()];

    let summary =
        DashboardService::summarize_month(&account, &transactions, &categories, &[], 2024, 6)
            .unwrap();

    let row = &summary.breakdown[0];
    assert_eq!(row.actual, dec!(45.00));
    assert_eq!(row.difference, dec!(55.00));
}

#[test]
fn test_zero_activity_rows_still_emitted() {
    let user_id = UserId::new();
    let account = make_account(user_id);
    let idle_cash = make_category(user_id, "Fun Money", CategoryKind::Cash, Decimal::ZERO);
    let idle_savings = make_category(user_id, "Vacation", CategoryKind::Savings, Decimal::ZERO);
    let categories = vec![idle_cash, idle_savings];

    let summary =
        DashboardService::summarize_month(&account, &[], &categories, &[], 2024, 6).unwrap();

    assert_eq!(summary.breakdown.len(), 2);
    for row in &summary.breakdown {
        assert_eq!(row.budgeted, Decimal::ZERO);
        assert_eq!(row.actual, Decimal::ZERO);
        assert_eq!(row.difference, Decimal::ZERO);
    }
}

#[test]
fn test_override_supersedes_default_in_breakdown() {
    let user_id = UserId::new();
    let account = make_account(user_id);
    let groceries = make_category(user_id, "Groceries", CategoryKind::Monthly, dec!(100));
    let overrides = vec![MonthlyBudgetOverride {
        id: tally_shared::types::OverrideId::new(),
        user_id,
        category_id: groceries.id,
        year: 2024,
        month: 6,
        amount: dec!(250),
        updated_at: Utc::now(),
    }];
    let categories = vec![groceries];

    let june =
        DashboardService::summarize_month(&account, &[], &categories, &overrides, 2024, 6).unwrap();
    assert_eq!(june.breakdown[0].budgeted, dec!(250));

    let july =
        DashboardService::summarize_month(&account, &[], &categories, &overrides, 2024, 7).unwrap();
    assert_eq!(july.breakdown[0].budgeted, dec!(100));
}

#[test]
fn test_window_is_half_open() {
    let user_id = UserId::new();
    let account = make_account(user_id);
    let groceries = make_category(user_id, "Groceries", CategoryKind::Monthly, dec!(100));

    let transactions = vec![
        make_transaction(&account, &groceries, dec!(-10), date(2024, 5, 31)),
        make_transaction(&account, &groceries, dec!(-20), date(2024, 6, 1)),
        make_transaction(&account, &groceries, dec!(-40), date(2024, 6, 30)),
        make_transaction(&account, &groceries, dec!(-80), date(2024, 7, 1)),
    ];
    let categories = vec![groceries];

    let summary =
        DashboardService::summarize_month(&account, &transactions, &categories, &[], 2024, 6)
            .unwrap();

    assert_eq!(summary.total_expenses, dec!(60));
}

#[test]
fn test_other_accounts_transactions_ignored() {
    let user_id = UserId::new();
    let account = make_account(user_id);
    let other_account = Account::new(
        user_id,
        "Savings",
        AccountRole::Savings,
        Decimal::ZERO,
        Utc::now(),
    )
    .unwrap();
    let groceries = make_category(user_id, "Groceries", CategoryKind::Monthly, dec!(100));

    let transactions = vec![make_transaction(
        &other_account,
        &groceries,
        dec!(-30),
        date(2024, 6, 5),
    )];
    let categories = vec![groceries];

    let summary =
        DashboardService::summarize_month(&account, &transactions, &categories, &[], 2024, 6)
            .unwrap();

    assert_eq!(summary.total_expenses, Decimal::ZERO);
    assert_eq!(summary.breakdown[0].actual, Decimal::ZERO);
}

#[test]
fn test_invalid_month_rejected() {
    let user_id = UserId::new();
    let account = make_account(user_id);

    assert!(DashboardService::summarize_month(&account, &[], &[], &[], 2024, 13).is_err());
}
