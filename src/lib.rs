//! # numkit
//!
//! Exact numeric primitives: arbitrary-precision arithmetic, number theory,
//! combinatorics, closed-form summation, controlled rounding, and bounded
//! random sampling.
//!
//! Every function is a pure leaf — no I/O, no shared state, no platform
//! calls — and validates its arguments before computing anything. The crate
//! knows nothing about any consumer domain.
//!
//! ## Modules
//!
//! - [`arith`] — exact decimal add/multiply folds, decimal parse/format
//! - [`number_theory`] — gcd, lcm, primality, nearest-prime, prime enumeration
//! - [`combinatorics`] — factorial, binomial coefficient, birthday paradox
//! - [`summation`] — Gauss sums, ranged/odd/even sums, handshake count
//! - [`rounding`] — arbitrary-base logarithm, half-up rounding, compounded growth
//! - [`random`] — seeded RNG construction, bounded uniform sampling
//! - [`error`] — the fail-fast validation taxonomy shared by all of the above
//!
//! ## Design Philosophy
//!
//! - **Exactness first**: decimal quantities live in base-10
//!   arbitrary-precision arithmetic (`gcd(2.5, 5) == 2.5` digit-exactly);
//!   unbounded results (factorials, binomial coefficients) are big integers,
//!   never saturating machine words.
//! - **Fail fast**: every precondition violation raises a typed
//!   [`NumError`] before any computation begins — no fallback values, no
//!   silent truncation.
//! - **Property-based testing**: the mathematical invariants are verified
//!   via proptest alongside example-based tests.

pub mod arith;
pub mod combinatorics;
pub mod error;
pub mod number_theory;
pub mod random;
pub mod rounding;
pub mod summation;

pub use error::{NumError, Result};
