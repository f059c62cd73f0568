//! Curve constants. Temperatures are fixed-point with six decimals.

use num_bigint::BigInt;

/// Upper clamp applied to the `blocks` argument of both curves.
///
/// There is no lower clamp: negative block counts pass through unchanged.
pub const MAX_BLOCKS: u32 = 25;

/// Per-step growth factor of the reward curve.
pub const REWARD_GROWTH_BASE: f64 = 1.01;

/// Growth steps per block.
pub const REWARD_STEPS_PER_BLOCK: u32 = 12;

/// Base of the logarithm in the Morning Auction curve.
pub const AUCTION_LOG_BASE: f64 = 51.0;

/// Fixed-point multiplier applied to the logarithm before flooring.
pub const AUCTION_SCALE_PRECISION: f64 = 1e12;

/// Temperature precision (six decimals).
pub const TEMPERATURE_PRECISION: u32 = 1_000_000;

/// Minimum temperature once the auction has started (blocks > 0).
pub const MIN_TEMPERATURE: u32 = TEMPERATURE_PRECISION;

/// Float form of [`TEMPERATURE_PRECISION`], used where the curve multiplies
/// by the float literal rather than the integer.
pub const TEMPERATURE_PRECISION_F64: f64 = 1e6;

/// Clamp `blocks` from above to [`MAX_BLOCKS`]; values below pass through.
pub fn clamp_blocks(blocks: &BigInt) -> BigInt {
    let max = BigInt::from(MAX_BLOCKS);
    if *blocks > max { max } else { blocks.clone() }
}
