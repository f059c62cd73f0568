//! ABI encoding of a single `uint256` word for the FFI caller.
//!
//! The caller decodes stdout with `abi.decode(..., (uint256))`, so the output
//! is the 32-byte big-endian word rendered as `0x` plus 64 lowercase hex
//! characters.

use alloy_primitives::U256;
use alloy_sol_types::{sol_data, SolType};

/// Encode `value` as an ABI `uint256` word.
pub fn encode_uint256(value: &U256) -> Vec<u8> {
    sol_data::Uint::<256>::abi_encode(value)
}

/// Render `value` as `0x` followed by the hex of its ABI word.
///
/// # Examples
///
/// ```
/// use bean_curves::{to_hex_word, U256};
/// let word = to_hex_word(&U256::from(100u64));
/// assert_eq!(word.len(), 66);
/// assert!(word.ends_with("64"));
/// ```
pub fn to_hex_word(value: &U256) -> String {
    format!("0x{}", hex::encode(encode_uint256(value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_is_thirty_two_bytes() {
        assert_eq!(encode_uint256(&U256::ZERO).len(), 32);
        assert_eq!(encode_uint256(&U256::MAX).len(), 32);
    }

    #[test]
    fn word_is_big_endian() {
        let word = encode_uint256(&U256::from(0x0102u64));
        assert_eq!(word[30], 0x01);
        assert_eq!(word[31], 0x02);
        assert!(word[..30].iter().all(|&b| b == 0));
    }

    #[test]
    fn word_matches_raw_big_endian_bytes() {
        let value = U256::from(1u64) << 200usize;
        assert_eq!(encode_uint256(&value), value.to_be_bytes::<32>().to_vec());
    }

    #[test]
    fn hex_word_for_hundred() {
        assert_eq!(
            to_hex_word(&U256::from(100u64)),
            "0x0000000000000000000000000000000000000000000000000000000000000064"
        );
    }

    #[test]
    fn hex_word_for_one_percent() {
        assert_eq!(
            to_hex_word(&U256::from(1_000_000u64)),
            "0x00000000000000000000000000000000000000000000000000000000000f4240"
        );
    }

    #[test]
    fn hex_word_is_lowercase() {
        let word = to_hex_word(&U256::MAX);
        assert_eq!(word, format!("0x{}", "f".repeat(64)));
    }

    #[test]
    fn decodes_with_sol_types() {
        let value = U256::from(279_415_312_704u64);
        let decoded = sol_data::Uint::<256>::abi_decode(&encode_uint256(&value), true).unwrap();
        assert_eq!(decoded, value);
    }
}
