//! Peso rounding for statutory amounts.
//!
//! Every statutory contribution and the withholding tax are reported in
//! whole pesos. All of them round the same way, through this one helper,
//! so the halfway behavior cannot drift between modules.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to the nearest whole peso, halves away from zero.
///
/// The engine's inputs are normalized to be non-negative before any
/// rounding happens, so "away from zero" and "half up" coincide here.
/// Note that this differs from `Decimal::round`, which rounds halves to
/// even (2.5 would become 2, not 3).
///
/// # Arguments
///
/// * `amount` - The amount to round.
///
/// # Returns
///
/// The amount rounded to zero decimal places.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_to_peso;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = Decimal::from_str("250.5").unwrap();
/// assert_eq!(round_to_peso(amount), Decimal::from(251));
///
/// let amount = Decimal::from_str("1675.05").unwrap();
/// assert_eq!(round_to_peso(amount), Decimal::from(1675));
/// ```
pub fn round_to_peso(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
