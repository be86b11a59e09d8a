//! Fixed-length membership bit patterns.
//!
//! A [`BitPattern`] marks which positions of a superset are selected. Position
//! `i` always corresponds to `superset[i]`; the two integer views differ only in
//! which end is most significant:
//!
//! - [`BitPattern::binary_rank`] reads position 0 as the most significant bit,
//!   so `0011` over `[a, b, c, d]` is 3.
//! - [`BitPattern::mask`] gives position `i` the weight `2^i`, so `0011` is 12.
//!   Gray-code ranking works on this view.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SubsetError};
use crate::MAX_SUPERSET_SIZE;

/// Number of patterns of the given length. `len` must not exceed
/// [`MAX_SUPERSET_SIZE`].
#[inline]
pub(crate) fn cardinality(len: usize) -> u128 {
    debug_assert!(len <= MAX_SUPERSET_SIZE);
    1u128 << len
}

fn check_len(len: usize) -> Result<()> {
    if len > MAX_SUPERSET_SIZE {
        return Err(SubsetError::SupersetTooLarge {
            size: len,
            max: MAX_SUPERSET_SIZE,
        });
    }
    Ok(())
}

/// Membership flags for each position of a superset.
///
/// Never longer than [`MAX_SUPERSET_SIZE`], so both integer views fit a `u128`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<bool>", into = "Vec<bool>")
)]
pub struct BitPattern {
    bits: Vec<bool>,
}

impl BitPattern {
    /// All-zero pattern of length `len`.
    pub fn zeros(len: usize) -> Result<Self> {
        check_len(len)?;
        Ok(Self {
            bits: vec![false; len],
        })
    }

    /// Decode a binary rank, most significant bit first.
    ///
    /// Fails with [`SubsetError::RankOutOfRange`] when `rank >= 2^len`; the
    /// value is never truncated.
    pub fn from_binary_rank(rank: u128, len: usize) -> Result<Self> {
        check_len(len)?;
        let total = cardinality(len);
        if rank >= total {
            return Err(SubsetError::RankOutOfRange {
                rank,
                cardinality: total,
            });
        }
        Ok(Self::from_binary_rank_unchecked(rank, len))
    }

    /// Caller guarantees `len <= MAX_SUPERSET_SIZE` and `rank < 2^len`.
    pub(crate) fn from_binary_rank_unchecked(rank: u128, len: usize) -> Self {
        debug_assert!(len <= MAX_SUPERSET_SIZE);
        let bits = (0..len).map(|i| (rank >> (len - 1 - i)) & 1 == 1).collect();
        Self { bits }
    }

    /// Binary rank of this pattern, most significant bit first.
    pub fn binary_rank(&self) -> u128 {
        self.bits
            .iter()
            .fold(0u128, |acc, &bit| (acc << 1) | u128::from(bit))
    }

    /// Build a pattern where position `i` is bit `i` of `mask`.
    pub fn from_mask(mask: u128, len: usize) -> Result<Self> {
        check_len(len)?;
        let total = cardinality(len);
        if mask >= total {
            return Err(SubsetError::RankOutOfRange {
                rank: mask,
                cardinality: total,
            });
        }
        Ok(Self::from_mask_unchecked(mask, len))
    }

    /// Caller guarantees `len <= MAX_SUPERSET_SIZE` and `mask < 2^len`.
    pub(crate) fn from_mask_unchecked(mask: u128, len: usize) -> Self {
        debug_assert!(len <= MAX_SUPERSET_SIZE);
        let bits = (0..len).map(|i| (mask >> i) & 1 == 1).collect();
        Self { bits }
    }

    /// Integer view with position `i` weighted `2^i`.
    pub fn mask(&self) -> u128 {
        self.iter_ones().fold(0u128, |acc, i| acc | (1u128 << i))
    }

    /// Number of positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the pattern has no positions at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Bit at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    /// Number of selected positions.
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&bit| bit).count()
    }

    /// Iterate over every bit in position order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// Selected positions in ascending order.
    pub fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(i, &bit)| bit.then_some(i))
    }

    /// Borrow the raw flags.
    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    pub(crate) fn set(&mut self, index: usize) {
        self.bits[index] = true;
    }
}

impl TryFrom<Vec<bool>> for BitPattern {
    type Error = SubsetError;

    fn try_from(bits: Vec<bool>) -> Result<Self> {
        check_len(bits.len())?;
        Ok(Self { bits })
    }
}

impl From<BitPattern> for Vec<bool> {
    fn from(pattern: BitPattern) -> Self {
        pattern.bits
    }
}

impl FromStr for BitPattern {
    type Err = SubsetError;

    fn from_str(s: &str) -> Result<Self> {
        let bits = s
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(SubsetError::InvalidBit(other)),
            })
            .collect::<Result<Vec<bool>>>()?;
        Self::try_from(bits)
    }
}

impl fmt::Display for BitPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_rank_is_msb_first() {
        let bits: BitPattern = "0011".parse().unwrap();
        assert_eq!(bits.binary_rank(), 3);
        assert_eq!(bits.mask(), 12);
    }

    #[test]
    fn test_from_binary_rank_pads_to_length() {
        let bits = BitPattern::from_binary_rank(4, 4).unwrap();
        assert_eq!(bits.to_string(), "0100");

        let zero = BitPattern::from_binary_rank(0, 3).unwrap();
        assert_eq!(zero.to_string(), "000");
    }

    #[test]
    fn test_from_binary_rank_rejects_overflow() {
        let err = BitPattern::from_binary_rank(16, 4).unwrap_err();
        assert_eq!(
            err,
            SubsetError::RankOutOfRange {
                rank: 16,
                cardinality: 16
            }
        );
    }

    #[test]
    fn test_from_mask() {
        let bits = BitPattern::from_mask(0b110, 3).unwrap();
        assert_eq!(bits.to_string(), "011");
        assert!(BitPattern::from_mask(8, 3).is_err());
    }

    #[test]
    fn test_iter_ones() {
        let bits: BitPattern = "010110".parse().unwrap();
        assert_eq!(bits.iter_ones().collect::<Vec<_>>(), vec![1, 3, 4]);
        assert_eq!(bits.count_ones(), 3);
    }

    #[test]
    fn test_parse_rejects_other_characters() {
        let err = "01x1".parse::<BitPattern>().unwrap_err();
        assert_eq!(err, SubsetError::InvalidBit('x'));
    }

    #[test]
    fn test_length_limit() {
        assert!(BitPattern::zeros(MAX_SUPERSET_SIZE).is_ok());
        let err = BitPattern::zeros(MAX_SUPERSET_SIZE + 1).unwrap_err();
        assert!(matches!(err, SubsetError::SupersetTooLarge { .. }));
    }

    #[test]
    fn test_empty_pattern() {
        let bits = BitPattern::zeros(0).unwrap();
        assert!(bits.is_empty());
        assert_eq!(bits.binary_rank(), 0);
        assert_eq!(bits.to_string(), "");
    }

    #[test]
    fn test_full_width_rank() {
        let bits = BitPattern::from_binary_rank(u128::MAX >> 1, MAX_SUPERSET_SIZE).unwrap();
        assert_eq!(bits.count_ones(), MAX_SUPERSET_SIZE);
        assert_eq!(bits.binary_rank(), u128::MAX >> 1);
    }
}
