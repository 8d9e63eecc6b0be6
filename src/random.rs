//! Bounded uniform random sampling.
//!
//! Provides seeded RNG construction and uniform sampling of integers and
//! floats from caller-supplied bounds. The generator is a general-purpose
//! PRNG — there is **no cryptographic guarantee** anywhere in this module.
//!
//! # Reproducibility
//!
//! Samplers take `&mut impl Rng`, so the caller owns the generator; for
//! reproducible draws, build one with [`create_rng`] and a fixed seed. The
//! sequence is deterministic for a given seed on the same platform.
//!
//! # Intervals
//!
//! The integer samplers draw from the **inclusive** interval (`[0, max]`,
//! `[start, end]`), so a degenerate bound like `max == 0` yields `0` and a
//! ranged draw can produce `end` itself. The float sampler scales a `[0, 1)`
//! source and therefore covers `[0, max)`.

use rand::Rng;

use crate::error::{ensure_finite, NumError, Result};

/// Creates a fast, seeded random number generator.
///
/// Uses `SmallRng` (Xoshiro256++) for high performance. The sequence is
/// deterministic for a given seed on the same platform.
///
/// # Examples
/// ```
/// use numkit::random::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: f64 = rng.random();
/// assert!(x >= 0.0 && x < 1.0);
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// Uniform draw from `[0, max]` inclusive.
///
/// # Returns
/// - [`NumError::BelowMinimum`] if `max < 0`.
///
/// # Examples
/// ```
/// use numkit::random::{create_rng, random_i32};
/// let mut rng = create_rng(42);
/// assert_eq!(random_i32(0, &mut rng).unwrap(), 0);
/// let x = random_i32(10, &mut rng).unwrap();
/// assert!((0..=10).contains(&x));
/// ```
pub fn random_i32<R: Rng>(max: i32, rng: &mut R) -> Result<i32> {
    if max < 0 {
        return Err(NumError::BelowMinimum {
            name: "max",
            min: 0,
            got: max.to_string(),
        });
    }
    Ok(rng.random_range(0..=max))
}

/// Uniform draw from `[0, max]` inclusive, 64-bit.
///
/// # Returns
/// - [`NumError::BelowMinimum`] if `max < 0`.
pub fn random_i64<R: Rng>(max: i64, rng: &mut R) -> Result<i64> {
    if max < 0 {
        return Err(NumError::BelowMinimum {
            name: "max",
            min: 0,
            got: max.to_string(),
        });
    }
    Ok(rng.random_range(0..=max))
}

/// Uniform draw from `[0, max)`: a `[0, 1)` source scaled by `max`.
///
/// # Returns
/// - [`NumError::NonFinite`] if `max` is NaN or infinite.
/// - [`NumError::BelowMinimum`] if `max < 0`.
///
/// # Examples
/// ```
/// use numkit::random::{create_rng, random_f64};
/// let mut rng = create_rng(42);
/// let x = random_f64(2.5, &mut rng).unwrap();
/// assert!(x >= 0.0 && x < 2.5);
/// ```
pub fn random_f64<R: Rng>(max: f64, rng: &mut R) -> Result<f64> {
    ensure_finite("max", max)?;
    if max < 0.0 {
        return Err(NumError::BelowMinimum {
            name: "max",
            min: 0,
            got: max.to_string(),
        });
    }
    Ok(rng.random::<f64>() * max)
}

/// Uniform draw from `[start, end]` inclusive.
///
/// Samples the target interval directly — no rejection loop, so termination
/// is structural and a narrow interval costs the same as a wide one.
///
/// # Returns
/// - [`NumError::InvalidRange`] if `start > end`.
///
/// # Examples
/// ```
/// use numkit::random::{create_rng, random_i32_in};
/// let mut rng = create_rng(42);
/// let x = random_i32_in(5, 9, &mut rng).unwrap();
/// assert!((5..=9).contains(&x));
/// assert_eq!(random_i32_in(7, 7, &mut rng).unwrap(), 7);
/// ```
pub fn random_i32_in<R: Rng>(start: i32, end: i32, rng: &mut R) -> Result<i32> {
    if start > end {
        return Err(NumError::InvalidRange {
            what: "sampling interval",
            lower: start.to_string(),
            upper: end.to_string(),
        });
    }
    Ok(rng.random_range(start..=end))
}

/// Uniform draw from `[start, end]` inclusive, 64-bit.
///
/// # Returns
/// - [`NumError::InvalidRange`] if `start > end`.
pub fn random_i64_in<R: Rng>(start: i64, end: i64, rng: &mut R) -> Result<i64> {
    if start > end {
        return Err(NumError::InvalidRange {
            what: "sampling interval",
            lower: start.to_string(),
            upper: end.to_string(),
        });
    }
    Ok(rng.random_range(start..=end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_rng_deterministic() {
        let mut rng1 = create_rng(42);
        let mut rng2 = create_rng(42);
        let vals1: Vec<i64> = (0..10).map(|_| random_i64(1000, &mut rng1).unwrap()).collect();
        let vals2: Vec<i64> = (0..10).map(|_| random_i64(1000, &mut rng2).unwrap()).collect();
        assert_eq!(vals1, vals2);
    }

    #[test]
    fn test_zero_bound_returns_zero() {
        let mut rng = create_rng(7);
        assert_eq!(random_i32(0, &mut rng).unwrap(), 0);
        assert_eq!(random_i64(0, &mut rng).unwrap(), 0);
        assert_eq!(random_f64(0.0, &mut rng).unwrap(), 0.0);
    }

    #[test]
    fn test_negative_bound_fails() {
        let mut rng = create_rng(7);
        assert!(random_i32(-1, &mut rng).is_err());
        assert!(random_i64(-1, &mut rng).is_err());
        assert!(random_f64(-0.5, &mut rng).is_err());
    }

    #[test]
    fn test_non_finite_float_bound_fails() {
        let mut rng = create_rng(7);
        assert!(random_f64(f64::NAN, &mut rng).is_err());
        assert!(random_f64(f64::INFINITY, &mut rng).is_err());
    }

    #[test]
    fn test_draws_stay_in_bounds() {
        let mut rng = create_rng(123);
        for _ in 0..1000 {
            let a = random_i32(10, &mut rng).unwrap();
            assert!((0..=10).contains(&a));
            let b = random_i64(1_000_000_000_000, &mut rng).unwrap();
            assert!((0..=1_000_000_000_000).contains(&b));
            let c = random_f64(2.5, &mut rng).unwrap();
            assert!((0.0..2.5).contains(&c));
        }
    }

    #[test]
    fn test_ranged_draws_stay_in_bounds() {
        let mut rng = create_rng(123);
        for _ in 0..1000 {
            let a = random_i32_in(-5, 5, &mut rng).unwrap();
            assert!((-5..=5).contains(&a));
            let b = random_i64_in(900, 1000, &mut rng).unwrap();
            assert!((900..=1000).contains(&b));
        }
    }

    #[test]
    fn test_degenerate_interval_is_constant() {
        let mut rng = create_rng(99);
        for _ in 0..50 {
            assert_eq!(random_i64_in(42, 42, &mut rng).unwrap(), 42);
        }
    }

    #[test]
    fn test_reversed_interval_fails() {
        let mut rng = create_rng(99);
        assert!(matches!(
            random_i32_in(9, 5, &mut rng),
            Err(NumError::InvalidRange { .. })
        ));
        assert!(random_i64_in(1, 0, &mut rng).is_err());
    }

    #[test]
    fn test_draws_are_not_constant() {
        // With 1000 draws over [0, 100], a constant output has probability
        // ~101^-999 — this is a non-degeneracy check, not an exact test.
        let mut rng = create_rng(7);
        let draws: Vec<i32> = (0..1000)
            .map(|_| random_i32(100, &mut rng).unwrap())
            .collect();
        assert!(draws.iter().any(|&x| x != draws[0]));
    }

    #[test]
    fn test_draws_cover_the_interval_roughly_uniformly() {
        // Mean of Uniform[0, 100] is 50; over 10 000 draws the sample mean
        // should land well inside ±5.
        let mut rng = create_rng(31);
        let n = 10_000;
        let total: i64 = (0..n)
            .map(|_| i64::from(random_i32(100, &mut rng).unwrap()))
            .sum();
        let mean = total as f64 / n as f64;
        assert!((mean - 50.0).abs() < 5.0, "sample mean {mean}");
    }
}
