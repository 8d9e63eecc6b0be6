//! Exact decimal arithmetic.
//!
//! Every value here is an arbitrary-precision base-10 number
//! ([`BigDecimal`]), never a binary float: equality, remainder, and digit
//! semantics are evaluated exactly, so `0.1 + 0.2` is `0.3` and not
//! `0.30000000000000004`. Addition and multiplication are exact operations;
//! the one place this crate divides decimals (the birthday-paradox
//! probability) bounds the quotient at [`DIV_PRECISION`] significant digits.

use std::str::FromStr;

use bigdecimal::BigDecimal;

use crate::error::{ensure_finite, NumError, Result};

/// Significant-digit bound applied to non-terminating decimal quotients.
///
/// Addition and multiplication never round; this bound only matters for the
/// single division consumer in [`crate::combinatorics::birthday_problem`].
pub const DIV_PRECISION: u64 = 50;

/// Sums one or more decimals exactly (left fold over `+`).
///
/// # Returns
/// - [`NumError::Empty`] if `values` has zero elements.
///
/// # Examples
/// ```
/// use bigdecimal::BigDecimal;
/// use numkit::arith::add_all;
///
/// let values = ["0.1", "0.2"].map(|s| s.parse::<BigDecimal>().unwrap());
/// assert_eq!(add_all(&values).unwrap(), "0.3".parse::<BigDecimal>().unwrap());
/// ```
pub fn add_all(values: &[BigDecimal]) -> Result<BigDecimal> {
    if values.is_empty() {
        return Err(NumError::Empty);
    }
    Ok(values
        .iter()
        .skip(1)
        .fold(values[0].clone(), |acc, v| acc + v))
}

/// Multiplies one or more decimals exactly (left fold over `*`).
///
/// # Returns
/// - [`NumError::Empty`] if `values` has zero elements.
///
/// # Examples
/// ```
/// use bigdecimal::BigDecimal;
/// use numkit::arith::multiply_all;
///
/// let values = ["1.5", "4"].map(|s| s.parse::<BigDecimal>().unwrap());
/// assert_eq!(multiply_all(&values).unwrap(), BigDecimal::from(6));
/// ```
pub fn multiply_all(values: &[BigDecimal]) -> Result<BigDecimal> {
    if values.is_empty() {
        return Err(NumError::Empty);
    }
    Ok(values
        .iter()
        .skip(1)
        .fold(values[0].clone(), |acc, v| acc * v))
}

/// Parses text as an exact decimal.
///
/// # Returns
/// - [`NumError::ParseDecimal`] if `text` is not a valid base-10 number.
///
/// # Examples
/// ```
/// use numkit::arith::parse_decimal;
/// assert!(parse_decimal("2.545").is_ok());
/// assert!(parse_decimal("two and a half").is_err());
/// ```
pub fn parse_decimal(text: &str) -> Result<BigDecimal> {
    BigDecimal::from_str(text).map_err(|_| NumError::ParseDecimal {
        input: text.to_string(),
    })
}

/// Converts a float to the exact decimal it *displays* as.
///
/// The conversion goes through the shortest decimal representation that
/// round-trips the float, so `2.545_f64` becomes exactly `2.545` rather
/// than its binary expansion `2.54499999999999992894…`. This is what makes
/// digit-level contracts such as `round(2.545, 2) == 2.55` reachable.
///
/// # Returns
/// - [`NumError::NonFinite`] for NaN or infinite input.
///
/// # Examples
/// ```
/// use bigdecimal::BigDecimal;
/// use numkit::arith::decimal_from_f64;
/// assert_eq!(decimal_from_f64(2.545).unwrap(), "2.545".parse::<BigDecimal>().unwrap());
/// assert!(decimal_from_f64(f64::NAN).is_err());
/// ```
pub fn decimal_from_f64(value: f64) -> Result<BigDecimal> {
    ensure_finite("value", value)?;
    parse_decimal(&format!("{value}"))
}

/// Renders a decimal in plain notation with trailing zeros dropped.
///
/// # Examples
/// ```
/// use numkit::arith::{format_decimal, parse_decimal};
/// let d = parse_decimal("2.50").unwrap();
/// assert_eq!(format_decimal(&d), "2.5");
/// ```
pub fn format_decimal(value: &BigDecimal) -> String {
    value.normalized().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decimals(strs: &[&str]) -> Vec<BigDecimal> {
        strs.iter().map(|s| parse_decimal(s).unwrap()).collect()
    }

    // --- add_all ---

    #[test]
    fn test_add_all_single_operand() {
        let v = decimals(&["7.25"]);
        assert_eq!(add_all(&v).unwrap(), parse_decimal("7.25").unwrap());
    }

    #[test]
    fn test_add_all_is_exact() {
        // The classic binary-float failure case.
        let v = decimals(&["0.1", "0.2"]);
        assert_eq!(add_all(&v).unwrap(), parse_decimal("0.3").unwrap());
    }

    #[test]
    fn test_add_all_mixed_integer_and_decimal() {
        let v = decimals(&["1", "2.5", "-0.5"]);
        assert_eq!(add_all(&v).unwrap(), BigDecimal::from(3));
    }

    #[test]
    fn test_add_all_empty_fails() {
        assert_eq!(add_all(&[]), Err(NumError::Empty));
    }

    // --- multiply_all ---

    #[test]
    fn test_multiply_all_basic() {
        let v = decimals(&["2", "3", "4"]);
        assert_eq!(multiply_all(&v).unwrap(), BigDecimal::from(24));
    }

    #[test]
    fn test_multiply_all_keeps_digits() {
        let v = decimals(&["1.1", "1.1"]);
        assert_eq!(multiply_all(&v).unwrap(), parse_decimal("1.21").unwrap());
    }

    #[test]
    fn test_multiply_all_empty_fails() {
        assert_eq!(multiply_all(&[]), Err(NumError::Empty));
    }

    // --- parse / format ---

    #[test]
    fn test_parse_decimal_rejects_garbage() {
        assert!(matches!(
            parse_decimal("1.2.3"),
            Err(NumError::ParseDecimal { .. })
        ));
    }

    #[test]
    fn test_decimal_from_f64_uses_shortest_repr() {
        // 2.545 has no exact binary representation; the decimal must still
        // carry the three digits the float displays as.
        assert_eq!(
            decimal_from_f64(2.545).unwrap(),
            parse_decimal("2.545").unwrap()
        );
    }

    #[test]
    fn test_decimal_from_f64_rejects_non_finite() {
        assert!(decimal_from_f64(f64::INFINITY).is_err());
        assert!(decimal_from_f64(f64::NAN).is_err());
    }

    #[test]
    fn test_format_decimal_plain() {
        assert_eq!(format_decimal(&parse_decimal("250.00").unwrap()), "250");
        assert_eq!(format_decimal(&parse_decimal("-0.50").unwrap()), "-0.5");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        // --- add_all agrees with integer summation ---
        #[test]
        fn add_all_matches_integer_sum(values in proptest::collection::vec(-1_000_000_i64..1_000_000, 1..20)) {
            let decimals: Vec<BigDecimal> = values.iter().map(|&v| BigDecimal::from(v)).collect();
            let expected: i64 = values.iter().sum();
            prop_assert_eq!(add_all(&decimals).unwrap(), BigDecimal::from(expected));
        }

        // --- multiplication by one is the identity ---
        #[test]
        fn multiply_all_one_is_identity(v in -1_000_000_i64..1_000_000, scale in 0_i64..4) {
            let d = BigDecimal::new(v.into(), scale);
            let values = [d.clone(), BigDecimal::from(1)];
            prop_assert_eq!(multiply_all(&values).unwrap(), d);
        }

        // --- the f64 bridge preserves the displayed digits ---
        #[test]
        fn decimal_from_f64_round_trips_display(v in -1e9_f64..1e9) {
            let d = decimal_from_f64(v).unwrap();
            let back: f64 = format_decimal(&d).parse().unwrap();
            prop_assert_eq!(back, v);
        }
    }
}
