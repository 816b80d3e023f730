//! Persistence layer and repositories for Tally.
//!
//! This crate provides:
//! - The in-memory ledger state behind a single transactional boundary
//! - Repository abstractions composing core logic with atomic mutation
//!
//! Every logical operation validates first and applies second under one
//! guard, so readers never observe a partial transfer pair or a partially
//! finalized batch.

pub mod repositories;
pub mod state;

pub use repositories::{
    AccountRepository, BudgetRepository, CategoryRepository, CreateAccountInput,
    CreateCategoryInput, CreateTransactionInput, DashboardRepository, FinalizeItem,
    PendingRepository, TransactionRepository, UpdateCategoryInput, UpdateTransactionInput,
};
pub use state::MemoryLedger;
