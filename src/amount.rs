//! Instructed amount builder.

use crate::types::MonetaryAmount;
use rust_decimal::Decimal;

/// Build an instructed amount in EUR.
///
/// The value is kept as given: no rounding, no sign or bounds check.
/// Rejecting zero or negative amounts is up to the caller.
pub fn create_amount(value: Decimal) -> MonetaryAmount {
    MonetaryAmount::eur(value)
}
