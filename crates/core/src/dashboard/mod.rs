//! Monthly budget-vs-actual aggregation.

pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use service::DashboardService;
pub use types::{BreakdownRow, MonthlySummary};
