//! Statement import classification and CSV parsing.
//!
//! The pipeline stages raw statement rows as
//! [`PendingTransaction`](crate::domain::PendingTransaction) records; the
//! store owns the ignore/finalize lifecycle.

pub mod classify;
pub mod error;
pub mod statement;
pub mod types;

pub use classify::{classify_batch, is_inflow};
pub use error::ReconcileError;
pub use statement::parse_statement;
pub use types::{ClassifiedRecord, RawStatementRecord};
