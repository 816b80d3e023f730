//! Statement import data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A raw statement row as parsed at the import boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawStatementRecord {
    /// Raw statement description.
    pub description: String,
    /// Statement date.
    pub date: NaiveDate,
    /// Absolute amount; the classifier assigns the sign.
    pub amount: Decimal,
}

/// A statement row with its sign classified, ready for staging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedRecord {
    /// Raw statement description.
    pub description: String,
    /// Statement date.
    pub date: NaiveDate,
    /// Signed amount: positive for inflows, negative for outflows.
    pub amount: Decimal,
}
