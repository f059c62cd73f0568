//! Exact-or-float intermediate values produced by the curves.
//!
//! A curve result is either an exact integer (ceiling over a rational, fixed
//! overrides) or a binary float (growth products, the float `1e6` literal).
//! The conversion to [`U256`] truncates toward zero and rejects anything that
//! is not representable as an ABI `uint256`.

use std::fmt;

use alloy_primitives::ruint::ToUintError;
use alloy_primitives::U256;
use num_bigint::{BigInt, Sign};
use num_traits::ToPrimitive;

use crate::error::{EncodingError, FormulaError};

/// A curve result prior to truncation and encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum Numeric {
    /// Exact integer arithmetic.
    Int(BigInt),
    /// IEEE 754 double arithmetic.
    Float(f64),
}

impl Numeric {
    /// Truncate toward zero and convert to an unsigned 256-bit integer.
    ///
    /// Fails with [`EncodingError::Negative`] when the truncated value is
    /// below zero, [`EncodingError::NotFinite`] for NaN or infinities and
    /// [`EncodingError::TooLarge`] for values of at least `2^256`. A float in
    /// `(-1, 0]` truncates to zero and encodes successfully.
    pub fn to_u256(&self) -> Result<U256, EncodingError> {
        match self {
            Self::Int(v) => int_to_u256(v),
            Self::Float(v) => float_to_u256(*v),
        }
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v:?}"),
        }
    }
}

/// Convert an integer input to the nearest double.
///
/// Integers beyond the `f64` range fail instead of saturating to infinity.
pub fn int_to_f64(v: &BigInt) -> Result<f64, FormulaError> {
    v.to_f64()
        .filter(|f| f.is_finite())
        .ok_or_else(|| FormulaError::FloatConversion(v.clone()))
}

fn int_to_u256(v: &BigInt) -> Result<U256, EncodingError> {
    if v.sign() == Sign::Minus {
        return Err(EncodingError::Negative(v.to_string()));
    }
    U256::try_from_be_slice(&v.magnitude().to_bytes_be()).ok_or(EncodingError::TooLarge)
}

fn float_to_u256(v: f64) -> Result<U256, EncodingError> {
    if !v.is_finite() {
        return Err(EncodingError::NotFinite);
    }

    let truncated = v.trunc();
    // Covers both +0.0 and -0.0.
    if truncated == 0.0 {
        return Ok(U256::ZERO);
    }

    // An integral double converts exactly.
    U256::try_from(truncated).map_err(|err| match err {
        ToUintError::ValueNegative(..) => EncodingError::Negative(truncated.to_string()),
        ToUintError::ValueTooLarge(..) => EncodingError::TooLarge,
        _ => EncodingError::NotFinite,
    })
}
