//! Per-fund savings balances and recent activity.

pub mod service;
pub mod types;

pub use service::SavingsService;
pub use types::{FundBalance, SavingsLedger};
