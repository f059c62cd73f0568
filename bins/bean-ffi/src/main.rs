//! bean-ffi — Curve evaluator for contract tests.
//!
//! Called through the test framework's FFI cheatcode. Evaluates one curve and
//! prints its ABI-encoded `uint256` result as a single `0x`-prefixed hex line
//! on stdout. Logs and errors go to stderr.

mod config;

use anyhow::{Context, Result};
use bean_curves::{to_hex_word, BigInt, Formula};
use clap::Parser;
use tracing::debug;

use crate::config::{LogConfig, LogFormat, DEFAULT_LOG_LEVEL};

/// Evaluate a Beanstalk curve and print the ABI-encoded uint256.
#[derive(Parser, Debug)]
#[command(name = "bean-ffi", version)]
struct Args {
    /// Curve to evaluate: fracExp or morningAuctionLog
    #[arg(value_name = "TYPE")]
    selector: String,

    /// First input (beanReward for fracExp, t for morningAuctionLog)
    #[arg(long = "input_1", allow_negative_numbers = true)]
    input_1: BigInt,

    /// Second input (blocks)
    #[arg(long = "input_2", allow_negative_numbers = true)]
    input_2: BigInt,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log output format ("text" or "json")
    #[arg(long, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

impl Args {
    fn log_config(&self) -> LogConfig {
        LogConfig {
            level: self.log_level.clone(),
            format: self.log_format,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    args.log_config().init();

    let formula: Formula = args.selector.parse()?;
    debug!(%formula, input_1 = %args.input_1, input_2 = %args.input_2, "evaluating");

    let value = formula
        .evaluate(&args.input_1, &args.input_2)
        .with_context(|| format!("{formula}({}, {}) failed", args.input_1, args.input_2))?;

    println!("{}", to_hex_word(&value));
    Ok(())
}
