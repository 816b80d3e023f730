//! Money rounding helpers.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All amounts are `rust_decimal::Decimal`; accumulation is exact and
//! rounding to the currency minor unit happens only at output boundaries.

use rust_decimal::Decimal;

/// Number of decimal places in the currency minor unit (cents).
pub const MINOR_UNIT_SCALE: u32 = 2;

/// Rounds an amount to the currency minor unit.
///
/// Applied at output boundaries (summary rows, ledger balances); internal
/// accumulation stays at full precision.
#[must_use]
pub fn to_minor_unit(amount: Decimal) -> Decimal {
    amount.round_dp(MINOR_UNIT_SCALE)
}
