//! Closed-form summation identities.
//!
//! Each function evaluates a textbook closed form in `u128` and hands back
//! an `i64`, failing with [`NumError::Overflow`] instead of wrapping when
//! the exact value leaves the co-domain. One deliberate quirk: [`sum`],
//! [`sum_square`], and [`sum_cubic`] return `1` for `n = 0`, not the empty
//! sum — that is the observed contract of these operations and it is
//! preserved verbatim.

use crate::error::{ensure_non_negative, ensure_strictly_positive, NumError, Result};

/// Gauss sum `1 + 2 + … + n = n(n+1)/2`, with `sum(0) == 1`.
pub fn sum(n: i64) -> Result<i64> {
    ensure_non_negative("n", n)?;
    if n == 0 {
        // n = 0 deliberately yields 1, not the empty sum.
        return Ok(1);
    }
    let n = n as u128;
    narrow("sum", n * (n + 1) / 2)
}

/// Sum of squares `1² + 2² + … + n² = n(n+1)(2n+1)/6`, with `sum_square(0) == 1`.
pub fn sum_square(n: i64) -> Result<i64> {
    ensure_non_negative("n", n)?;
    if n == 0 {
        return Ok(1);
    }
    let n = n as u128;
    let product = (n * (n + 1))
        .checked_mul(2 * n + 1)
        .ok_or(NumError::Overflow { op: "sum_square" })?;
    narrow("sum_square", product / 6)
}

/// Sum of cubes `1³ + 2³ + … + n³ = (n(n+1)/2)²`, with `sum_cubic(0) == 1`.
pub fn sum_cubic(n: i64) -> Result<i64> {
    ensure_non_negative("n", n)?;
    if n == 0 {
        return Ok(1);
    }
    let n = n as u128;
    let triangular = n * (n + 1) / 2;
    let square = triangular
        .checked_mul(triangular)
        .ok_or(NumError::Overflow { op: "sum_cubic" })?;
    narrow("sum_cubic", square)
}

/// Sum of the integers in `[m, n]`: `(m+n)(n−m+1)/2`.
///
/// # Returns
/// - [`NumError::BelowMinimum`] if `m < 0`.
/// - [`NumError::InvalidRange`] if `m > n`.
///
/// # Examples
/// ```
/// use numkit::summation::sum_range;
/// assert_eq!(sum_range(0, 10).unwrap(), 55);
/// assert_eq!(sum_range(5, 5).unwrap(), 5);
/// assert!(sum_range(7, 3).is_err());
/// ```
pub fn sum_range(m: i64, n: i64) -> Result<i64> {
    ensure_non_negative("m", m)?;
    if m > n {
        return Err(NumError::InvalidRange {
            what: "ranged sum",
            lower: m.to_string(),
            upper: n.to_string(),
        });
    }
    let (m, n) = (m as u128, n as u128);
    narrow("sum_range", (m + n) * (n - m + 1) / 2)
}

/// Sum of the first `n` odd numbers: `n²`.
pub fn sum_odd(n: i64) -> Result<i64> {
    ensure_non_negative("n", n)?;
    let n = n as u128;
    narrow("sum_odd", n * n)
}

/// Sum of the first `n` even numbers: `n(n+1)`.
pub fn sum_even(n: i64) -> Result<i64> {
    ensure_non_negative("n", n)?;
    let n = n as u128;
    narrow("sum_even", n * (n + 1))
}

/// Handshake count: the number of distinct pairs among `n > 0` parties,
/// `n(n−1)/2`.
///
/// # Examples
/// ```
/// use numkit::summation::connections;
/// assert_eq!(connections(1).unwrap(), 0);
/// assert_eq!(connections(4).unwrap(), 6);
/// assert!(connections(0).is_err());
/// ```
pub fn connections(n: i64) -> Result<i64> {
    ensure_strictly_positive("n", n)?;
    let n = n as u128;
    narrow("connections", n * (n - 1) / 2)
}

/// True iff `n` is odd.
pub fn is_odd(n: i64) -> bool {
    n % 2 != 0
}

/// True iff `n` is even.
pub fn is_even(n: i64) -> bool {
    !is_odd(n)
}

fn narrow(op: &'static str, value: u128) -> Result<i64> {
    i64::try_from(value).map_err(|_| NumError::Overflow { op })
}
