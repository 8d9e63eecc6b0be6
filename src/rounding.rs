//! Controlled rounding, arbitrary-base logarithms, compounded growth.
//!
//! The rounding rule is *half toward positive infinity*: a tie goes up on
//! both sides of zero, so `round(2.5, 0) == 3.0` and `round(-2.5, 0) == -2.0`
//! (not `-3.0` as in away-from-zero rounding). Ties are decided on the
//! decimal digits the float displays as, not on its binary expansion —
//! which is what makes `round(2.545, 2) == 2.55` hold even though the
//! nearest double to 2.545 lies just below it.

use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive};
use num_bigint::BigInt;

use crate::arith::decimal_from_f64;
use crate::error::{ensure_finite, ensure_strictly_positive, NumError, Result};

/// Logarithm of `value` in an arbitrary `base`: `ln(value) / ln(base)`.
///
/// # Returns
/// - [`NumError::NonFinite`] for NaN/infinite arguments.
/// - [`NumError::BaseOutOfRange`] unless `base > 1`.
/// - [`NumError::NotStrictlyPositive`] unless `value > 0`.
///
/// # Examples
/// ```
/// use numkit::rounding::log;
/// assert!((log(2.0, 8.0).unwrap() - 3.0).abs() < 1e-12);
/// assert!(log(1.0, 8.0).is_err());
/// ```
pub fn log(base: f64, value: f64) -> Result<f64> {
    ensure_finite("base", base)?;
    ensure_finite("value", value)?;
    if base <= 1.0 {
        return Err(NumError::BaseOutOfRange { base });
    }
    if value <= 0.0 {
        return Err(NumError::NotStrictlyPositive {
            name: "value",
            got: value.to_string(),
        });
    }
    Ok(value.ln() / base.ln())
}

/// Rounds `value` to `places` decimal places, half toward positive infinity.
///
/// Negative `places` rounds to tens, hundreds, and so on.
///
/// # Algorithm
/// Shift by 10^`places`, add ½, take the floor, shift back — all in exact
/// decimal arithmetic (`⌊x + ½⌋` *is* half-toward-+∞). The float enters the
/// decimal domain through its shortest round-trip representation, so the
/// digits being rounded are the digits the caller sees.
///
/// # Returns
/// - [`NumError::NonFinite`] for NaN or infinite input.
///
/// # Examples
/// ```
/// use numkit::rounding::round;
/// assert_eq!(round(2.5, 0).unwrap(), 3.0);
/// assert_eq!(round(-2.5, 0).unwrap(), -2.0);
/// assert_eq!(round(2.545, 2).unwrap(), 2.55);
/// assert_eq!(round(1234.5, -1).unwrap(), 1230.0);
/// ```
pub fn round(value: f64, places: i32) -> Result<f64> {
    let decimal = decimal_from_f64(value)?;

    // Move the rounding position to the units digit: value × 10^places.
    let (digits, scale) = decimal.into_bigint_and_exponent();
    let shifted = BigDecimal::new(digits, scale - i64::from(places));

    let half_adjusted = shifted + BigDecimal::new(BigInt::from(5), 1);
    let floored = half_adjusted.with_scale_round(0, RoundingMode::Floor);

    let (units, _) = floored.into_bigint_and_exponent();
    BigDecimal::new(units, i64::from(places))
        .to_f64()
        .ok_or(NumError::Overflow { op: "round" })
}

/// Continuously-compounded growth: `principal × e^(days/360 × rate)`.
///
/// Uses the 360-day banking year. A negative `rate` models decay.
///
/// # Returns
/// - [`NumError::NonFinite`] for NaN/infinite `principal` or `rate`.
/// - [`NumError::NotStrictlyPositive`] unless `days > 0`.
///
/// # Examples
/// ```
/// use numkit::rounding::amount;
/// // One banking year at 5%.
/// let grown = amount(100.0, 0.05, 360).unwrap();
/// assert!((grown - 105.12710963760242).abs() < 1e-9);
/// ```
pub fn amount(principal: f64, rate: f64, days: i64) -> Result<f64> {
    ensure_finite("principal", principal)?;
    ensure_finite("rate", rate)?;
    ensure_strictly_positive("days", days)?;
    Ok(principal * ((days as f64 / 360.0) * rate).exp())
}
