//! Reflected binary gray code.
//!
//! The gray word for rank `r` is `r ^ (r >> 1)`. Decoding folds every right
//! shift of the word back in with xor. Pattern position `i` is bit `i` of the
//! word, so the first superset element flips most often:
//!
//! ```text
//! rank  word  pattern (positions 0..3)
//!    0   000  000
//!    1   001  100
//!    2   011  110
//!    3   010  010
//!    4   110  011
//! ```

use crate::bits::BitPattern;
use crate::traits::GrayCodeOracle;

/// The standard reflected binary gray code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ReflectedGrayCode;

impl ReflectedGrayCode {
    /// Gray word for `rank`.
    #[inline]
    pub fn encode(rank: u128) -> u128 {
        rank ^ (rank >> 1)
    }

    /// Rank of the gray word `code`.
    #[inline]
    pub fn decode(code: u128) -> u128 {
        let mut rank = code;
        let mut shift = code >> 1;
        while shift != 0 {
            rank ^= shift;
            shift >>= 1;
        }
        rank
    }
}

impl GrayCodeOracle for ReflectedGrayCode {
    fn rank(&self, bits: &BitPattern) -> u128 {
        Self::decode(bits.mask())
    }

    fn unrank(&self, rank: u128, len: usize) -> BitPattern {
        // encode() never sets a bit above the highest bit of rank, so the
        // word stays below 2^len.
        BitPattern::from_mask_unchecked(Self::encode(rank), len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_sequence() {
        let codes: Vec<u128> = (0..8).map(ReflectedGrayCode::encode).collect();
        assert_eq!(codes, vec![0, 1, 3, 2, 6, 7, 5, 4]);
    }

    #[test]
    fn test_decode_inverts_encode() {
        for rank in 0..1024u128 {
            assert_eq!(ReflectedGrayCode::decode(ReflectedGrayCode::encode(rank)), rank);
        }
    }

    #[test]
    fn test_rank_reads_position_zero_as_low_bit() {
        let oracle = ReflectedGrayCode;
        let bits: BitPattern = "0011".parse().unwrap();
        assert_eq!(oracle.rank(&bits), 8);

        let bits: BitPattern = "010110".parse().unwrap();
        assert_eq!(oracle.rank(&bits), 19);
    }

    #[test]
    fn test_unrank() {
        let oracle = ReflectedGrayCode;
        assert_eq!(oracle.unrank(4, 3).to_string(), "011");
        assert_eq!(oracle.unrank(0, 3).to_string(), "000");
    }

    #[test]
    fn test_neighbours_differ_in_one_position() {
        let oracle = ReflectedGrayCode;
        for rank in 0..63u128 {
            let a = oracle.unrank(rank, 6);
            let b = oracle.unrank(rank + 1, 6);
            let flips = a.iter().zip(b.iter()).filter(|(x, y)| x != y).count();
            assert_eq!(flips, 1, "ranks {} and {}", rank, rank + 1);
        }
    }
}
