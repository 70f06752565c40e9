//! Monetary rounding helpers
//!
//! All monetary values in reports carry two decimal places, rounded at the
//! point of computation rather than deferred to presentation.

use bigdecimal::{BigDecimal, RoundingMode};

/// Round a monetary value to two decimal places, half-up.
pub fn round2(value: &BigDecimal) -> BigDecimal {
    value.with_scale_round(2, RoundingMode::HalfUp)
}

/// Whether two monetary values agree within one cent. Used for the
/// assets = liabilities + equity reconciliation check.
pub fn within_one_cent(a: &BigDecimal, b: &BigDecimal) -> bool {
    (a - b).abs() * BigDecimal::from(100) <= BigDecimal::from(1)
}
