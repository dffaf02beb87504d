//! Textual form of bit sequences: one `0`/`1` character per bit.

use bitvec::slice::BitSlice;
use bitvec::vec::BitVec;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid bit {found:?} at position {position}, expected '0' or '1'")]
pub struct ParseBitsError {
    pub position: usize,
    pub found: char,
}

/// Render `bits` as a string of `0` and `1`.
pub fn to_bit_string(bits: &BitSlice) -> String {
    bits.iter()
        .by_vals()
        .map(|bit| if bit { '1' } else { '0' })
        .collect()
}

/// Parse a string of `0` and `1`; whitespace is not accepted.
pub fn parse_bit_string(input: &str) -> Result<BitVec, ParseBitsError> {
    input
        .chars()
        .enumerate()
        .map(|(position, c)| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            found => Err(ParseBitsError { position, found }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use bitvec::prelude::*;

    use super::*;

    #[test]
    fn given_bits_when_formatting_then_one_char_per_bit() {
        assert_eq!(to_bit_string(&bitvec![1, 0, 1, 1]), "1011");
        assert_eq!(to_bit_string(BitSlice::empty()), "");
    }

    #[test]
    fn given_valid_string_when_parsing_then_returns_bits() {
        assert_eq!(parse_bit_string("0110").unwrap(), bitvec![0, 1, 1, 0]);
        assert!(parse_bit_string("").unwrap().is_empty());
    }

    #[test]
    fn given_invalid_char_when_parsing_then_reports_position() {
        assert_eq!(
            parse_bit_string("01x0"),
            Err(ParseBitsError {
                position: 2,
                found: 'x'
            })
        );
    }
}
