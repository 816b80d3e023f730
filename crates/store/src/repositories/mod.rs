//! Repository abstractions for ledger operations.
//!
//! Repositories provide the operation surface consumed by a transport
//! layer, hiding the state-mutation details from the rest of the
//! application.

pub mod account;
pub mod budget;
pub mod category;
pub mod dashboard;
pub mod pending;
pub mod transaction;

pub use account::{AccountRepository, CreateAccountInput};
pub use budget::BudgetRepository;
pub use category::{CategoryRepository, CreateCategoryInput, UpdateCategoryInput};
pub use dashboard::DashboardRepository;
pub use pending::{FinalizeItem, PendingRepository};
pub use transaction::{CreateTransactionInput, TransactionRepository, UpdateTransactionInput};
