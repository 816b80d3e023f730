//! Reconciliation pipeline scenarios: import, ignore, finalize.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tally_core::domain::{AccountRole, CategoryKind};
use tally_core::reconcile::{RawStatementRecord, parse_statement};
use tally_shared::AppError;
use tally_shared::types::{AccountId, CategoryId, PendingId, UserId};
use tally_store::{
    AccountRepository, CategoryRepository, CreateAccountInput, CreateCategoryInput, FinalizeItem,
    MemoryLedger, PendingRepository, TransactionRepository,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn record(description: &str, on: NaiveDate, amount: Decimal) -> RawStatementRecord {
    RawStatementRecord {
        description: description.to_string(),
        date: on,
        amount,
    }
}

struct Fixture {
    store: MemoryLedger,
    user_id: UserId,
    checking_id: AccountId,
    groceries_id: CategoryId,
}

fn setup() -> Fixture {
    let store = MemoryLedger::default();
    let user_id = UserId::new();

    let checking_id = AccountRepository::new(store.clone())
        .create_account(CreateAccountInput {
            user_id,
            name: "Checking".to_string(),
            role: AccountRole::Checking,
            opening_balance: Decimal::ZERO,
        })
        .unwrap()
        .id;
    let groceries_id = CategoryRepository::new(store.clone())
        .create_category(CreateCategoryInput {
            user_id,
            name: "Groceries".to_string(),
            kind: CategoryKind::Monthly,
            budgeted_amount: dec!(400),
        })
        .unwrap()
        .id;

    Fixture {
        store,
        user_id,
        checking_id,
        groceries_id,
    }
}

#[test]
fn test_import_classifies_and_stages() {
    let fixture = setup();
    let pending = PendingRepository::new(fixture.store.clone());

    let count = pending
        .import_statement(
            fixture.user_id,
            AccountRole::Checking,
            &[
                record("GROCERY STORE #12", date(2024, 6, 3), dec!(45.00)),
                record("Refund: returned kettle", date(2024, 6, 5), dec!(12.50)),
            ],
        )
        .unwrap();
    assert_eq!(count, 2);

    let staged = pending
        .list_pending(fixture.user_id, AccountRole::Checking)
        .unwrap();
    assert_eq!(staged.len(), 2);
    // Insertion order, outflows negative, inflows positive
    assert_eq!(staged[0].amount, dec!(-45.00));
    assert_eq!(staged[1].amount, dec!(12.50));
    assert_eq!(staged[0].target_role, AccountRole::Checking);
}

#[test]
fn test_import_is_all_or_nothing() {
    let fixture = setup();
    let pending = PendingRepository::new(fixture.store.clone());

    let result = pending.import_statement(
        fixture.user_id,
        AccountRole::Checking,
        &[
            record("GROCERY STORE", date(2024, 6, 3), dec!(45.00)),
            record("", date(2024, 6, 4), dec!(10.00)),
        ],
    );

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(
        pending
            .list_pending(fixture.user_id, AccountRole::Checking)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_list_pending_filters_by_role_and_owner() {
    let fixture = setup();
    let pending = PendingRepository::new(fixture.store.clone());

    pending
        .import_statement(
            fixture.user_id,
            AccountRole::Checking,
            &[record("STORE", date(2024, 6, 3), dec!(10.00))],
        )
        .unwrap();
    pending
        .import_statement(
            fixture.user_id,
            AccountRole::Savings,
            &[record("INTEREST PAYMENT", date(2024, 6, 30), dec!(1.23))],
        )
        .unwrap();

    assert_eq!(
        pending
            .list_pending(fixture.user_id, AccountRole::Checking)
            .unwrap()
            .len(),
        1
    );
    assert_eq!(
        pending
            .list_pending(fixture.user_id, AccountRole::Savings)
            .unwrap()
            .len(),
        1
    );
    assert!(
        pending
            .list_pending(UserId::new(), AccountRole::Checking)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_ignore_deletes_valid_subset() {
    let fixture = setup();
    let pending = PendingRepository::new(fixture.store.clone());

    pending
        .import_statement(
            fixture.user_id,
            AccountRole::Checking,
            &[
                record("STORE A", date(2024, 6, 3), dec!(10.00)),
                record("STORE B", date(2024, 6, 4), dec!(20.00)),
            ],
        )
        .unwrap();
    let staged = pending
        .list_pending(fixture.user_id, AccountRole::Checking)
        .unwrap();

    let count = pending
        .ignore_pending(fixture.user_id, &[staged[0].id, PendingId::new()])
        .unwrap();
    assert_eq!(count, 1);

    let remaining = pending
        .list_pending(fixture.user_id, AccountRole::Checking)
        .unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, staged[1].id);
}

#[test]
fn test_ignore_with_no_matches_is_not_found() {
    let fixture = setup();
    let pending = PendingRepository::new(fixture.store.clone());

    let result = pending.ignore_pending(fixture.user_id, &[PendingId::new()]);
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[test]
fn test_finalize_consumes_pending_exactly_once() {
    let fixture = setup();
    let pending = PendingRepository::new(fixture.store.clone());

    pending
        .import_statement(
            fixture.user_id,
            AccountRole::Checking,
            &[record("GROCERY STORE", date(2024, 6, 3), dec!(45.00))],
        )
        .unwrap();
    let staged = pending
        .list_pending(fixture.user_id, AccountRole::Checking)
        .unwrap();
    let pending_id = staged[0].id;

    let item = FinalizeItem {
        pending_id,
        account_id: fixture.checking_id,
        category_id: fixture.groceries_id,
    };
    assert_eq!(
        pending
            .finalize_pending(fixture.user_id, std::slice::from_ref(&item))
            .unwrap(),
        1
    );

    // The staged record is gone and a matching permanent transaction exists
    assert!(
        pending
            .list_pending(fixture.user_id, AccountRole::Checking)
            .unwrap()
            .is_empty()
    );
    let transactions = TransactionRepository::new(fixture.store.clone())
        .list_month(fixture.user_id, 2024, 6)
        .unwrap();
    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].amount, dec!(-45.00));
    assert_eq!(transactions[0].transaction_date, date(2024, 6, 3));
    assert_eq!(
        transactions[0].description.as_deref(),
        Some("GROCERY STORE")
    );

    // A second finalize of the same id finds nothing to consume
    assert_eq!(
        pending.finalize_pending(fixture.user_id, &[item]).unwrap(),
        0
    );
    assert_eq!(
        TransactionRepository::new(fixture.store.clone())
            .list_month(fixture.user_id, 2024, 6)
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn test_finalize_skips_invalid_items_without_aborting() {
    let fixture = setup();
    let pending = PendingRepository::new(fixture.store.clone());

    pending
        .import_statement(
            fixture.user_id,
            AccountRole::Checking,
            &[
                record("STORE A", date(2024, 6, 3), dec!(10.00)),
                record("STORE B", date(2024, 6, 4), dec!(20.00)),
            ],
        )
        .unwrap();
    let staged = pending
        .list_pending(fixture.user_id, AccountRole::Checking)
        .unwrap();

    let items = vec![
        FinalizeItem {
            pending_id: staged[0].id,
            account_id: fixture.checking_id,
            // unknown category: this item is skipped
            category_id: CategoryId::new(),
        },
        FinalizeItem {
            pending_id: staged[1].id,
            account_id: fixture.checking_id,
            category_id: fixture.groceries_id,
        },
    ];

    assert_eq!(pending.finalize_pending(fixture.user_id, &items).unwrap(), 1);

    // The skipped record is still staged
    let remaining = pending
        .list_pending(fixture.user_id, AccountRole::Checking)
        .unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, staged[0].id);
}

#[test]
fn test_csv_statement_feeds_import_end_to_end() {
    let fixture = setup();
    let csv = "Date,Description,Amount\n2024-06-03,GROCERY STORE,45.00\n2024-06-05,REFUND KETTLE,12.50\n";
    let records = parse_statement(csv.as_bytes()).unwrap();

    let pending = PendingRepository::new(fixture.store.clone());
    assert_eq!(
        pending
            .import_statement(fixture.user_id, AccountRole::Checking, &records)
            .unwrap(),
        2
    );

    let staged = pending
        .list_pending(fixture.user_id, AccountRole::Checking)
        .unwrap();
    assert_eq!(staged[0].amount, dec!(-45.00));
    assert_eq!(staged[1].amount, dec!(12.50));
}
