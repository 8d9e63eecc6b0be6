//! Combinatorics: factorial, binomial coefficient, birthday paradox.
//!
//! Factorials and binomial coefficients grow super-linearly, so both return
//! arbitrary-precision integers ([`BigUint`]) — there is no input small
//! enough to make a fixed-width result type honest (`21!` already exceeds
//! `u64`). The birthday probability is the one place the crate divides
//! decimals; it runs at [`DIV_PRECISION`](crate::arith::DIV_PRECISION)
//! significant digits and only collapses to `f64` at the very end.

use bigdecimal::{BigDecimal, One, ToPrimitive};
use num_bigint::{BigInt, BigUint};
use tracing::trace;

use crate::arith::DIV_PRECISION;
use crate::error::{ensure_non_negative, ensure_strictly_positive, NumError, Result};

/// Days in the (non-leap) year assumed by [`birthday_problem`].
pub const YEAR_LENGTH: i64 = 365;

/// Factorial `n! = n × (n−1) × … × 1`, with `0! == 1`.
///
/// # Returns
/// - [`NumError::BelowMinimum`] if `n < 0`.
///
/// # Examples
/// ```
/// use num_bigint::BigUint;
/// use numkit::combinatorics::factorial;
///
/// assert_eq!(factorial(4).unwrap(), BigUint::from(24_u32));
/// assert_eq!(factorial(0).unwrap(), BigUint::from(1_u32));
/// assert!(factorial(-1).is_err());
/// ```
pub fn factorial(n: i64) -> Result<BigUint> {
    ensure_non_negative("n", n)?;
    Ok((2..=n as u64).fold(BigUint::one(), |acc, i| acc * i))
}

/// Binomial coefficient `C(n, k) = n! / (k! × (n−k)!)`.
///
/// Evaluated as a falling factorial divided term by term, so intermediate
/// values never exceed the final result times `n` and every division is
/// exact.
///
/// # Returns
/// - [`NumError::BelowMinimum`] if `n < 0` or `k < 0`.
/// - [`NumError::InvalidRange`] if `k > n`.
///
/// # Examples
/// ```
/// use num_bigint::BigUint;
/// use numkit::combinatorics::binomial_coefficient;
///
/// assert_eq!(binomial_coefficient(7, 3).unwrap(), BigUint::from(35_u32));
/// assert!(binomial_coefficient(3, 4).is_err());
/// ```
pub fn binomial_coefficient(n: i64, k: i64) -> Result<BigUint> {
    ensure_non_negative("n", n)?;
    ensure_non_negative("k", k)?;
    if k > n {
        return Err(NumError::InvalidRange {
            what: "binomial coefficient",
            lower: k.to_string(),
            upper: n.to_string(),
        });
    }

    // C(n, k) == C(n, n−k); fold over the smaller side.
    let k = k.min(n - k) as u64;
    let n = n as u64;
    Ok((1..=k).fold(BigUint::one(), |acc, i| acc * (n - k + i) / i))
}

/// Probability that among `people` persons at least two share a birthday,
/// assuming a uniform 365-day year.
///
/// Computed as `1 − (365! / (365 − people)!) / 365^people` with the falling
/// factorial and the power held exactly in big integers; the single division
/// runs in decimal arithmetic at
/// [`DIV_PRECISION`](crate::arith::DIV_PRECISION) digits, so no
/// double-precision loss accumulates before the final conversion.
///
/// # Returns
/// - [`NumError::NotStrictlyPositive`] if `people < 1`.
/// - [`NumError::InvalidRange`] if `people > 365` — the model's falling
///   factorial is undefined beyond the year length.
///
/// # Examples
/// ```
/// use numkit::combinatorics::birthday_problem;
///
/// let p = birthday_problem(23).unwrap();
/// assert!((p - 0.50729).abs() < 1e-5);
/// ```
pub fn birthday_problem(people: i64) -> Result<f64> {
    ensure_strictly_positive("people", people)?;
    if people > YEAR_LENGTH {
        return Err(NumError::InvalidRange {
            what: "birthday cohort",
            lower: people.to_string(),
            upper: YEAR_LENGTH.to_string(),
        });
    }

    // Falling factorial 365 × 364 × … × (365 − people + 1).
    let numerator = ((YEAR_LENGTH - people + 1)..=YEAR_LENGTH)
        .fold(BigUint::one(), |acc, i| acc * i as u64);
    let denominator = BigUint::from(YEAR_LENGTH as u64).pow(people as u32);

    let ratio = (BigDecimal::from(BigInt::from(numerator))
        / BigDecimal::from(BigInt::from(denominator)))
    .with_prec(DIV_PRECISION);
    let probability = (BigDecimal::one() - ratio)
        .to_f64()
        .ok_or(NumError::Overflow {
            op: "birthday_problem",
        })?;
    trace!(people, probability, "birthday probability computed");
    Ok(probability)
}
