//! Demo seeder for Tally development and testing.
//!
//! Seeds a sample owner with accounts, categories, and transactions, runs
//! a monthly funding cycle, imports a small statement, and logs the
//! resulting dashboard summary and savings ledger.
//!
//! Usage: cargo run --bin seeder

use chrono::{Datelike, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tally_core::domain::{AccountRole, CategoryKind};
use tally_core::reconcile::parse_statement;
use tally_shared::AppConfig;
use tally_shared::types::UserId;
use tally_store::{
    AccountRepository, BudgetRepository, CategoryRepository, CreateAccountInput,
    CreateCategoryInput, CreateTransactionInput, DashboardRepository, FinalizeItem, MemoryLedger,
    PendingRepository, TransactionRepository,
};

const SAMPLE_STATEMENT: &str = "\
Date,Description,Amount
2026-08-01,COFFEE ROASTERS,4.80
2026-08-02,REFUND: RETURNED KETTLE,24.99
2026-08-03,GROCERY MARKET #7,61.35
";

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tally=debug,seeder=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");
    let store = MemoryLedger::new(config.ledger);

    let today = Utc::now().date_naive();
    let (year, month) = (today.year(), today.month());
    let user_id = UserId::new();

    // Accounts: one checking, one savings
    let accounts = AccountRepository::new(store.clone());
    let checking = accounts.create_account(CreateAccountInput {
        user_id,
        name: "Everyday Checking".to_string(),
        role: AccountRole::Checking,
        opening_balance: dec!(2500.00),
    })?;
    let savings = accounts.create_account(CreateAccountInput {
        user_id,
        name: "High-Yield Savings".to_string(),
        role: AccountRole::Savings,
        opening_balance: Decimal::ZERO,
    })?;
    info!(checking = %checking.id, savings = %savings.id, "seeded accounts");

    // Categories across every kind
    let categories = CategoryRepository::new(store.clone());
    let salary = categories.create_category(CreateCategoryInput {
        user_id,
        name: "Salary".to_string(),
        kind: CategoryKind::Income,
        budgeted_amount: Decimal::ZERO,
    })?;
    let groceries = categories.create_category(CreateCategoryInput {
        user_id,
        name: "Groceries".to_string(),
        kind: CategoryKind::Monthly,
        budgeted_amount: dec!(400.00),
    })?;
    let fun_money = categories.create_category(CreateCategoryInput {
        user_id,
        name: "Fun Money".to_string(),
        kind: CategoryKind::Cash,
        budgeted_amount: dec!(150.00),
    })?;
    categories.create_category(CreateCategoryInput {
        user_id,
        name: "Emergency Fund".to_string(),
        kind: CategoryKind::Savings,
        budgeted_amount: dec!(200.00),
    })?;
    info!("seeded categories");

    // Bump the groceries budget for this month only
    BudgetRepository::new(store.clone()).upsert_override(
        user_id,
        groceries.id,
        year,
        month,
        dec!(450.00),
    )?;

    // A paycheck and some spending
    let transactions = TransactionRepository::new(store.clone());
    transactions.create_transaction(CreateTransactionInput {
        user_id,
        account_id: checking.id,
        category_id: salary.id,
        amount: dec!(3200.00),
        description: Some("Paycheck".to_string()),
        transaction_date: today.with_day(1).expect("first of month is valid"),
    })?;
    transactions.create_transaction(CreateTransactionInput {
        user_id,
        account_id: checking.id,
        category_id: fun_money.id,
        amount: dec!(32.50),
        description: Some("Concert tickets".to_string()),
        transaction_date: today,
    })?;

    // Fund every savings category for the current month, twice to show
    // the idempotency guard
    let funded = transactions.fund_all_unfunded(user_id, year, month)?;
    info!(funded, "first bulk funding run");
    let funded_again = transactions.fund_all_unfunded(user_id, year, month)?;
    info!(funded_again, "second bulk funding run (expected 0)");

    // Import a statement, finalize the grocery row, ignore the rest
    let pending = PendingRepository::new(store.clone());
    let records = parse_statement(SAMPLE_STATEMENT.as_bytes())?;
    let staged = pending.import_statement(user_id, AccountRole::Checking, &records)?;
    info!(staged, "imported statement rows");

    let staged_rows = pending.list_pending(user_id, AccountRole::Checking)?;
    let grocery_row = staged_rows
        .iter()
        .find(|p| p.description.contains("GROCERY"))
        .expect("grocery row was staged");
    let finalized = pending.finalize_pending(
        user_id,
        &[FinalizeItem {
            pending_id: grocery_row.id,
            account_id: checking.id,
            category_id: groceries.id,
        }],
    )?;
    let leftover: Vec<_> = pending
        .list_pending(user_id, AccountRole::Checking)?
        .iter()
        .map(|p| p.id)
        .collect();
    let ignored = pending.ignore_pending(user_id, &leftover)?;
    info!(finalized, ignored, "reconciled statement");

    // Dashboard summary for the current month
    let dashboard = DashboardRepository::new(store.clone());
    let summary = dashboard.monthly_summary(user_id, checking.id, year, month)?;
    info!(
        income = %summary.total_income,
        expenses = %summary.total_expenses,
        net = %summary.net_balance,
        "monthly summary"
    );
    for row in &summary.breakdown {
        info!(
            category = %row.name,
            budgeted = %row.budgeted,
            actual = %row.actual,
            difference = %row.difference,
            "breakdown row"
        );
    }

    // Savings ledger
    let ledger = dashboard.savings_ledger(user_id, savings.id)?;
    info!(total = %ledger.total_balance, "savings balance");
    for fund in &ledger.funds {
        info!(fund = %fund.name, balance = %fund.balance, "fund balance");
    }

    Ok(())
}
