//! Calendar month arithmetic.

use chrono::NaiveDate;

use super::error::DomainError;

/// Half-open date window `[start, end)` covering one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    /// First day of the month.
    pub start: NaiveDate,
    /// First day of the following month (exclusive).
    pub end: NaiveDate,
}

impl MonthWindow {
    /// Returns true if the date falls within this window.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }
}

/// Builds the half-open window for a calendar month.
///
/// # Errors
///
/// Returns `DomainError::InvalidMonth` if the month is outside 1-12 or the
/// year is unrepresentable.
pub fn month_window(year: i32, month: u32) -> Result<MonthWindow, DomainError> {
    let start =
        NaiveDate::from_ymd_opt(year, month, 1).ok_or(DomainError::InvalidMonth { year, month })?;
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let end = NaiveDate::from_ymd_opt(next_year, next_month, 1).ok_or(
        DomainError::InvalidMonth {
            year: next_year,
            month: next_month,
        },
    )?;

    Ok(MonthWindow { start, end })
}
