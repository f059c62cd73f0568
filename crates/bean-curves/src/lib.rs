//! # bean-curves — Closed-form Beanstalk curves for contract tests.
//!
//! Two pure formulas are exposed, each producing the exact value a Solidity
//! test compares against:
//! - **fracExp**: exponential reward growth, `reward * 1.01^(blocks * 12)`,
//!   evaluated in binary floating point and truncated toward zero.
//! - **morningAuctionLog**: the Morning Auction temperature scaling,
//!   `ceil(t * floor(log51(2 * blocks + 1) * 1e12) / 1e6)` with the ceiling
//!   taken over an exact rational.
//!
//! Results are returned as [`U256`] and ABI-encoded as a single `uint256`
//! word by [`abi`].

pub mod abi;
pub mod constants;
pub mod error;
pub mod formula;
pub mod frac_exp;
pub mod morning_auction;
pub mod numeric;

pub use abi::{encode_uint256, to_hex_word};
pub use alloy_primitives::U256;
pub use constants::clamp_blocks;
pub use error::{EncodingError, FormulaError};
pub use formula::Formula;
pub use frac_exp::frac_exp;
pub use morning_auction::morning_auction_log;
pub use num_bigint::BigInt;
pub use numeric::Numeric;
