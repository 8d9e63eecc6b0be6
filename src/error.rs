//! Fail-fast validation errors.
//!
//! Every public function in this crate checks its preconditions before any
//! computation begins. A violation is a contract error on the caller's side,
//! not a transient condition: there is no fallback value, no retry, and no
//! partial result. The variants carry the offending values as structured
//! fields so callers can match or log them without string parsing.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NumError>;

/// Validation and arithmetic-domain errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumError {
    /// A variadic operand list was present but had zero elements.
    #[error("no operands supplied — at least one value is required")]
    Empty,

    /// A numeric argument violated its lower bound.
    #[error("{name} must be greater than or equal to {min}, got {got}")]
    BelowMinimum {
        name: &'static str,
        min: i64,
        got: String,
    },

    /// A numeric argument was required to be strictly positive.
    #[error("{name} must be greater than 0, got {got}")]
    NotStrictlyPositive { name: &'static str, got: String },

    /// A logarithm base outside the domain of `log`.
    #[error("logarithm base must be greater than 1, got {base}")]
    BaseOutOfRange { base: f64 },

    /// An enumeration request spanning more values than the platform can
    /// hold in a single collection.
    #[error("range spans {span} values, which exceeds the maximum enumerable count {max}")]
    RangeTooLarge { span: u128, max: u128 },

    /// A start/end or n/k pair in the wrong order.
    #[error("illegal range for {what}: {lower} must not exceed {upper}")]
    InvalidRange {
        what: &'static str,
        lower: String,
        upper: String,
    },

    /// A floating-point argument that is NaN or infinite.
    #[error("{name} must be a finite number, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    /// Text that is not a valid base-10 decimal.
    #[error("cannot parse {input:?} as an exact decimal")]
    ParseDecimal { input: String },

    /// A closed-form identity whose exact result does not fit the return
    /// type. Raised instead of wrapping or truncating.
    #[error("arithmetic overflow in {op}: the exact result does not fit an i64")]
    Overflow { op: &'static str },
}

/// Rejects NaN and infinite floating-point arguments.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(NumError::NonFinite { name, value })
    }
}

/// Rejects negative integer arguments.
pub(crate) fn ensure_non_negative(name: &'static str, value: i64) -> Result<()> {
    if value >= 0 {
        Ok(())
    } else {
        Err(NumError::BelowMinimum {
            name,
            min: 0,
            got: value.to_string(),
        })
    }
}

/// Rejects zero and negative integer arguments.
pub(crate) fn ensure_strictly_positive(name: &'static str, value: i64) -> Result<()> {
    if value > 0 {
        Ok(())
    } else {
        Err(NumError::NotStrictlyPositive {
            name,
            got: value.to_string(),
        })
    }
}
