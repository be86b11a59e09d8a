//! Trait for gray-code ranking strategies.

use crate::bits::BitPattern;

/// Ranks and unranks bit patterns in a gray-code order, where patterns with
/// consecutive ranks differ in exactly one position.
///
/// [`Subset`](crate::Subset) consumes an oracle for its gray-code rank and
/// navigation. [`ReflectedGrayCode`](crate::ReflectedGrayCode) is the default.
pub trait GrayCodeOracle {
    /// Rank of `bits` in this gray-code order, in `[0, 2^bits.len())`.
    fn rank(&self, bits: &BitPattern) -> u128;

    /// Pattern of length `len` holding `rank`.
    ///
    /// Callers guarantee `len <= MAX_SUPERSET_SIZE` and `rank < 2^len`;
    /// [`Subset`](crate::Subset) checks both before calling. The returned
    /// pattern must have exactly `len` positions. `Subset` rejects anything
    /// else, with an error when unranking and a panic when stepping.
    fn unrank(&self, rank: u128, len: usize) -> BitPattern;
}

impl<G: GrayCodeOracle + ?Sized> GrayCodeOracle for &G {
    fn rank(&self, bits: &BitPattern) -> u128 {
        (**self).rank(bits)
    }

    fn unrank(&self, rank: u128, len: usize) -> BitPattern {
        (**self).unrank(rank, len)
    }
}
