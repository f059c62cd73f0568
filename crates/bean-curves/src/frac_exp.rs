//! Reward growth curve (`fracExp`).
//!
//! `reward * 1.01^(min(blocks, 25) * 12)`, evaluated in `f64` and truncated
//! toward zero. The exponent goes through `powf` (C `pow`) rather than
//! repeated multiplication so results match double-precision `pow` bit for
//! bit.

use alloy_primitives::U256;
use num_bigint::BigInt;
use tracing::debug;

use crate::constants::{clamp_blocks, REWARD_GROWTH_BASE, REWARD_STEPS_PER_BLOCK};
use crate::error::FormulaError;
use crate::numeric::{int_to_f64, Numeric};

/// Grown reward before truncation.
///
/// Negative `blocks` shrink the reward; the result is a float and may be
/// negative when `bean_reward` is. Both inputs are converted to the nearest
/// double, failing only when they lie beyond the `f64` range.
pub fn grown_reward(bean_reward: &BigInt, blocks: &BigInt) -> Result<Numeric, FormulaError> {
    let blocks = clamp_blocks(blocks);
    let steps = &blocks * REWARD_STEPS_PER_BLOCK;
    let growth = REWARD_GROWTH_BASE.powf(int_to_f64(&steps)?);
    let new_reward = int_to_f64(bean_reward)? * growth;
    debug!(%bean_reward, %blocks, %steps, new_reward, "fracExp");
    Ok(Numeric::Float(new_reward))
}

/// Evaluate `fracExp(bean_reward, blocks)` as a `uint256`.
pub fn frac_exp(bean_reward: &BigInt, blocks: &BigInt) -> Result<U256, FormulaError> {
    Ok(grown_reward(bean_reward, blocks)?.to_u256()?)
}
