//! Selector dispatch: maps the wire name of a curve to its evaluation.

use std::fmt;
use std::str::FromStr;

use alloy_primitives::U256;
use num_bigint::BigInt;

use crate::error::FormulaError;
use crate::frac_exp::frac_exp;
use crate::morning_auction::morning_auction_log;

/// A curve that can be evaluated over FFI.
///
/// # Examples
///
/// ```
/// use bean_curves::{Formula, U256};
/// let formula: Formula = "fracExp".parse().unwrap();
/// assert_eq!(formula, Formula::FracExp);
/// assert_eq!(formula.evaluate(&100.into(), &0.into()).unwrap(), U256::from(100u64));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Formula {
    /// `fracExp(beanReward, blocks)`.
    FracExp,
    /// `morningAuctionLog(t, blocks)`.
    MorningAuctionLog,
}

impl Formula {
    /// Every selectable curve.
    pub const ALL: [Formula; 2] = [Formula::FracExp, Formula::MorningAuctionLog];

    /// The case-sensitive selector accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FracExp => "fracExp",
            Self::MorningAuctionLog => "morningAuctionLog",
        }
    }

    /// Evaluate the curve with its two positional inputs.
    pub fn evaluate(&self, input_1: &BigInt, input_2: &BigInt) -> Result<U256, FormulaError> {
        match self {
            Self::FracExp => frac_exp(input_1, input_2),
            Self::MorningAuctionLog => morning_auction_log(input_1, input_2),
        }
    }
}

impl FromStr for Formula {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|formula| formula.name() == s)
            .ok_or_else(|| FormulaError::UnknownSelector(s.to_string()))
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
