//! Inflow/outflow classification of imported rows.

use rust_decimal::Decimal;

use super::error::ReconcileError;
use super::types::{ClassifiedRecord, RawStatementRecord};

/// Returns true if the description marks the row as an inflow.
///
/// Case-insensitive substring match against the supplied marker
/// vocabulary (refund/payment-style markers).
#[must_use]
pub fn is_inflow(description: &str, markers: &[String]) -> bool {
    let description = description.to_lowercase();
    markers
        .iter()
        .any(|marker| description.contains(&marker.to_lowercase()))
}

/// Classifies a batch of raw statement rows.
///
/// All-or-nothing: the first malformed row (blank description or
/// non-positive absolute amount) aborts the whole batch, naming the row.
///
/// # Errors
///
/// Returns `ReconcileError::MalformedRow` for the first offending row.
pub fn classify_batch(
    records: &[RawStatementRecord],
    markers: &[String],
) -> Result<Vec<ClassifiedRecord>, ReconcileError> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let row = index + 1;
            if record.description.trim().is_empty() {
                return Err(ReconcileError::MalformedRow {
                    row,
                    reason: "description is empty".to_string(),
                });
            }
            if record.amount <= Decimal::ZERO {
                return Err(ReconcileError::MalformedRow {
                    row,
                    reason: format!("amount must be a positive absolute value, got {}", record.amount),
                });
            }

            let amount = if is_inflow(&record.description, markers) {
                record.amount
            } else {
                -record.amount
            };

            Ok(ClassifiedRecord {
                description: record.description.clone(),
                date: record.date,
                amount,
            })
        })
        .collect()
}
