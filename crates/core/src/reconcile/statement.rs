//! CSV statement parsing.
//!
//! Bank exports differ in column order and often carry preamble lines
//! before the real header. The parser scans for the first row containing
//! Description/Date/Amount columns (case-insensitive), then reads every
//! following row through those columns.

use std::io::Read;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::ReconcileError;
use super::types::RawStatementRecord;

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];

struct HeaderColumns {
    description: usize,
    date: usize,
    amount: usize,
}

/// Parses a CSV bank statement into raw import records.
///
/// Amounts are returned as absolute values; sign classification happens in
/// [`classify_batch`](super::classify_batch).
///
/// # Errors
///
/// Returns `ReconcileError::MissingHeader` if no header row is found, and
/// `ReconcileError::MalformedRow` for the first unparseable data row.
pub fn parse_statement<R: Read>(input: R) -> Result<Vec<RawStatementRecord>, ReconcileError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut columns: Option<HeaderColumns> = None;
    let mut records = Vec::new();

    for (index, result) in reader.records().enumerate() {
        let row = result?;
        let row_number = index + 1;

        match &columns {
            None => columns = detect_header(&row),
            Some(header) => {
                if row.iter().all(|field| field.trim().is_empty()) {
                    continue;
                }
                records.push(parse_row(&row, header, row_number)?);
            }
        }
    }

    if columns.is_none() {
        return Err(ReconcileError::MissingHeader);
    }

    Ok(records)
}

fn detect_header(row: &csv::StringRecord) -> Option<HeaderColumns> {
    let find = |name: &str| {
        row.iter()
            .position(|field| field.trim().to_lowercase().contains(name))
    };

    Some(HeaderColumns {
        description: find("description")?,
        date: find("date")?,
        amount: find("amount")?,
    })
}

fn parse_row(
    row: &csv::StringRecord,
    header: &HeaderColumns,
    row_number: usize,
) -> Result<RawStatementRecord, ReconcileError> {
    let field = |index: usize, name: &str| {
        row.get(index)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| ReconcileError::MalformedRow {
                row: row_number,
                reason: format!("missing {name} column"),
            })
    };

    let description = field(header.description, "description")?.to_string();
    let date = parse_date(field(header.date, "date")?, row_number)?;
    let amount = parse_amount(field(header.amount, "amount")?, row_number)?;

    Ok(RawStatementRecord {
        description,
        date,
        amount,
    })
}

fn parse_date(value: &str, row_number: usize) -> Result<NaiveDate, ReconcileError> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .ok_or_else(|| ReconcileError::MalformedRow {
            row: row_number,
            reason: format!("unparseable date '{value}'"),
        })
}

fn parse_amount(value: &str, row_number: usize) -> Result<Decimal, ReconcileError> {
    let cleaned: String = value
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | '(' | ')' | ' '))
        .collect();

    Decimal::from_str(&cleaned)
        .map(|amount| amount.abs())
        .map_err(|_| ReconcileError::MalformedRow {
            row: row_number,
            reason: format!("unparseable amount '{value}'"),
        })
}
