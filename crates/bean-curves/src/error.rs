//! Error types for curve evaluation and `uint256` encoding.
use num_bigint::BigInt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("value out of uint256 bounds: {0} is negative")] Negative(String),
    #[error("value is not finite")] NotFinite,
    #[error("value does not fit in uint256")] TooLarge,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormulaError {
    #[error("unknown type: {0}")] UnknownSelector(String),
    #[error("math domain error: log of 2 * {blocks} + 1")] Domain { blocks: BigInt },
    #[error("integer too large to convert to float: {0}")] FloatConversion(BigInt),
    #[error(transparent)] Encoding(#[from] EncodingError),
}
