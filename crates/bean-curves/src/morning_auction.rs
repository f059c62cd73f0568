//! Morning Auction temperature curve (`morningAuctionLog`).
//!
//! The temperature ramps logarithmically over the first 25 blocks of a
//! season:
//!
//! ```text
//! scale = floor(log51(2 * blocks + 1) * 1e12)
//! t'    = max(ceil(t * scale / 1e6), 1e6)
//! ```
//!
//! The product and the ceiling of the division by `1e6` are taken over exact
//! big integers and rationals; a binary float loses the ceiling at boundary
//! inputs.
//!
//! Fixed points override the curve, later rules winning: `t == 0` yields 0,
//! `blocks == 0` yields `1e6`, and `blocks == 25` yields the full `1e6 * t`.

use alloy_primitives::U256;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};
use tracing::debug;

use crate::constants::{
    clamp_blocks, AUCTION_LOG_BASE, AUCTION_SCALE_PRECISION, MAX_BLOCKS, MIN_TEMPERATURE,
    TEMPERATURE_PRECISION, TEMPERATURE_PRECISION_F64,
};
use crate::error::FormulaError;
use crate::numeric::{int_to_f64, Numeric};

/// `floor(log51(2 * blocks + 1) * 1e12)` for a clamped, non-negative
/// `blocks` (at most [`MAX_BLOCKS`]).
pub fn auction_scale(blocks: u32) -> i64 {
    let x = f64::from(2 * blocks + 1);
    let log = x.ln() / AUCTION_LOG_BASE.ln();
    (log * AUCTION_SCALE_PRECISION).floor() as i64
}

/// `max(ceil(t * scale / 1e6), 1e6)` with the product and ceiling exact.
pub fn scaled_temperature(t: &BigInt, scale: i64) -> BigInt {
    let product = t * scale;
    let ceiled = BigRational::new(product, BigInt::from(TEMPERATURE_PRECISION))
        .ceil()
        .to_integer();
    ceiled.max(BigInt::from(MIN_TEMPERATURE))
}

/// Scaled temperature before encoding.
pub fn scaled_t(t: &BigInt, blocks: &BigInt) -> Result<Numeric, FormulaError> {
    let clamped = clamp_blocks(blocks);
    // Only negative values miss u32 once clamped.
    let blocks = clamped
        .to_u32()
        .ok_or_else(|| FormulaError::Domain { blocks: clamped.clone() })?;
    let scale = auction_scale(blocks);

    let new_t = if blocks == MAX_BLOCKS {
        Numeric::Float(TEMPERATURE_PRECISION_F64 * int_to_f64(t)?)
    } else if blocks == 0 {
        Numeric::Int(BigInt::from(TEMPERATURE_PRECISION))
    } else if t.is_zero() {
        Numeric::Int(BigInt::zero())
    } else {
        Numeric::Int(scaled_temperature(t, scale))
    };

    debug!(%t, blocks, scale, %new_t, "morningAuctionLog");
    Ok(new_t)
}

/// Evaluate `morningAuctionLog(t, blocks)` as a `uint256`.
pub fn morning_auction_log(t: &BigInt, blocks: &BigInt) -> Result<U256, FormulaError> {
    Ok(scaled_t(t, blocks)?.to_u256()?)
}
