//! Number theory: gcd, lcm, primality, and prime enumeration.
//!
//! The gcd/lcm pair works on exact decimals, not floats: `gcd(2.5, 5)` is
//! `2.5` digit-exactly, because the Euclidean remainder sequence is
//! evaluated in base-10 arithmetic. Primality uses plain trial division —
//! O(√n) per candidate — which is the right tool for machine-word inputs;
//! nothing here pretends to be a sieve or a probabilistic test.
//!
//! # Algorithms
//!
//! - **Gcd**: iterative Euclidean algorithm (the remainder loop, not the
//!   recursion — same O(log min(a, b)) bound without touching the stack).
//!   Reference: Knuth (1997), *TAOCP* Vol. 2, §4.5.2, Algorithm A.
//! - **Nearest prime**: upward linear scan; termination is guaranteed by
//!   Bertrand's postulate (a prime exists in `(n, 2n)`), worst-case cost is
//!   linear in the local prime gap.

use bigdecimal::{BigDecimal, Signed, Zero};
use tracing::trace;

use crate::error::{NumError, Result};

/// Greatest common divisor of two non-negative exact decimals.
///
/// Runs the iterative Euclidean remainder loop in base-10 arithmetic, so
/// decimal operands divide exactly: `gcd(2.5, 5) == 2.5`.
///
/// Conventions: `gcd(a, a) == a`, `gcd(a, 0) == a`, `gcd(0, 0) == 0`.
///
/// # Returns
/// - [`NumError::BelowMinimum`] if either operand is negative.
///
/// # Examples
/// ```
/// use bigdecimal::BigDecimal;
/// use numkit::number_theory::gcd;
///
/// let g = gcd(&BigDecimal::from(2), &BigDecimal::from(4)).unwrap();
/// assert_eq!(g, BigDecimal::from(2));
///
/// let g = gcd(&"2.5".parse().unwrap(), &BigDecimal::from(5)).unwrap();
/// assert_eq!(g, "2.5".parse::<BigDecimal>().unwrap());
/// ```
pub fn gcd(a: &BigDecimal, b: &BigDecimal) -> Result<BigDecimal> {
    ensure_non_negative_decimal("a", a)?;
    ensure_non_negative_decimal("b", b)?;

    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    Ok(a)
}

/// Least common multiple of two strictly positive exact decimals.
///
/// Computed as `(a / gcd(a, b)) * b`; the division is exact because the
/// gcd divides both operands. Commutative: `lcm(2, 5) == lcm(5, 2) == 10`.
///
/// # Returns
/// - [`NumError::NotStrictlyPositive`] if either operand is zero or negative.
///
/// # Examples
/// ```
/// use bigdecimal::BigDecimal;
/// use numkit::number_theory::lcm;
///
/// let l = lcm(&BigDecimal::from(2), &BigDecimal::from(5)).unwrap();
/// assert_eq!(l, BigDecimal::from(10));
/// ```
pub fn lcm(a: &BigDecimal, b: &BigDecimal) -> Result<BigDecimal> {
    ensure_strictly_positive_decimal("a", a)?;
    ensure_strictly_positive_decimal("b", b)?;

    let g = gcd(a, b)?;
    // a / g is exact: g divides a by construction.
    Ok((a / &g) * b)
}

/// Trial-division primality test.
///
/// `n < 2` is never prime; even numbers above 2 are composite; everything
/// else is checked against odd divisors `3, 5, …` up to `⌊√n⌋`, stopping at
/// the first hit.
///
/// # Examples
/// ```
/// use numkit::number_theory::is_prime;
/// assert!(is_prime(2));
/// assert!(is_prime(997));
/// assert!(!is_prime(1));
/// assert!(!is_prime(21));
/// assert!(!is_prime(-7));
/// ```
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let n = n as u64;
    let mut d = 3u64;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// Smallest prime greater than or equal to `n` (with `nearest_prime(n) == 2`
/// for all `n <= 2`).
///
/// # Examples
/// ```
/// use numkit::number_theory::nearest_prime;
/// assert_eq!(nearest_prime(21), 23);
/// assert_eq!(nearest_prime(0), 2);
/// assert_eq!(nearest_prime(23), 23);
/// ```
pub fn nearest_prime(n: i64) -> i64 {
    if n <= 2 {
        return 2;
    }
    let mut candidate = n;
    while !is_prime(candidate) {
        candidate += 1;
    }
    trace!(from = n, prime = candidate, "nearest prime located");
    candidate
}

/// Enumerates every prime in the inclusive range `[start, end]`, ascending.
///
/// The result may be empty (e.g. `primes_in_range(24, 28)`), never contains
/// duplicates, and is produced by trial-dividing each candidate.
///
/// # Returns
/// - [`NumError::BelowMinimum`] if `end < 0`.
/// - [`NumError::InvalidRange`] if `start > end`.
/// - [`NumError::RangeTooLarge`] if `end − start + 1` exceeds the platform's
///   maximum collection length — the call fails instead of truncating.
///
/// # Examples
/// ```
/// use numkit::number_theory::primes_in_range;
/// assert_eq!(primes_in_range(0, 3).unwrap(), vec![2, 3]);
/// assert_eq!(primes_in_range(0, 1000).unwrap().len(), 168);
/// assert!(primes_in_range(50, 10).is_err());
/// ```
pub fn primes_in_range(start: i64, end: i64) -> Result<Vec<i64>> {
    if end < 0 {
        return Err(NumError::BelowMinimum {
            name: "end",
            min: 0,
            got: end.to_string(),
        });
    }
    if start > end {
        return Err(NumError::InvalidRange {
            what: "prime enumeration",
            lower: start.to_string(),
            upper: end.to_string(),
        });
    }
    let span = (end as i128 - start as i128 + 1) as u128;
    if span > usize::MAX as u128 {
        return Err(NumError::RangeTooLarge {
            span,
            max: usize::MAX as u128,
        });
    }

    let mut primes = Vec::new();
    for candidate in start.max(2)..=end {
        if is_prime(candidate) {
            primes.push(candidate);
        }
    }
    trace!(start, end, count = primes.len(), "prime enumeration complete");
    Ok(primes)
}

fn ensure_non_negative_decimal(name: &'static str, value: &BigDecimal) -> Result<()> {
    if value.is_negative() {
        Err(NumError::BelowMinimum {
            name,
            min: 0,
            got: value.to_string(),
        })
    } else {
        Ok(())
    }
}

fn ensure_strictly_positive_decimal(name: &'static str, value: &BigDecimal) -> Result<()> {
    if value.is_positive() {
        Ok(())
    } else {
        Err(NumError::NotStrictlyPositive {
            name,
            got: value.to_string(),
        })
    }
}
