//! Subsets of an ordered superset, ranked in three orders.
//!
//! A [`Subset`] pairs the selected elements with the superset they are drawn
//! from. Every order works on the same [`BitPattern`]: position `i` is set when
//! `superset[i]` is selected.
//!
//! | order | rank of `[c, d]` in `[a, b, c, d]` | navigation |
//! |-------|-----------------------------------|------------|
//! | binary | 3 | [`Subset::iterate_binary`] |
//! | lexicographic | 14 | not implemented |
//! | gray code | 8 | [`Subset::iterate_graycode`] |
//!
//! Navigation treats the ranks as a ring of `2^n` points and always returns a
//! new subset; a subset never changes after construction, which is what makes
//! the memoized ranks safe.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

use tracing::{debug, trace};

use crate::bits::{cardinality, BitPattern};
use crate::error::{Result, SubsetError};
use crate::gray::ReflectedGrayCode;
use crate::traits::GrayCodeOracle;
use crate::{SubsetOrder, MAX_SUPERSET_SIZE};

/// Bit pattern marking where each of `elements` sits in `superset`.
///
/// Fails with [`SubsetError::ElementNotFound`] when an element is missing from
/// the superset and [`SubsetError::DuplicateElement`] when one is listed twice.
/// Duplicates inside `superset` resolve to their first occurrence.
///
/// ```rust
/// use subrank::bitlist_from_subset;
///
/// let bits = bitlist_from_subset(&['c', 'd'], &['a', 'b', 'c', 'd']).unwrap();
/// assert_eq!(bits.to_string(), "0011");
/// ```
pub fn bitlist_from_subset<T: PartialEq>(elements: &[T], superset: &[T]) -> Result<BitPattern> {
    let mut bits = BitPattern::zeros(superset.len())?;
    for (position, element) in elements.iter().enumerate() {
        let index = superset
            .iter()
            .position(|candidate| candidate == element)
            .ok_or(SubsetError::ElementNotFound { position })?;
        if bits.get(index) == Some(true) {
            return Err(SubsetError::DuplicateElement { position });
        }
        bits.set(index);
    }
    Ok(bits)
}

fn check_superset<T: PartialEq>(superset: &[T]) -> Result<()> {
    if superset.len() > MAX_SUPERSET_SIZE {
        return Err(SubsetError::SupersetTooLarge {
            size: superset.len(),
            max: MAX_SUPERSET_SIZE,
        });
    }
    for position in 1..superset.len() {
        if superset[..position].contains(&superset[position]) {
            return Err(SubsetError::DuplicateInSuperset { position });
        }
    }
    Ok(())
}

fn check_rank(rank: u128, len: usize) -> Result<()> {
    let total = cardinality(len);
    if rank >= total {
        debug!(rank = %rank, cardinality = %total, "rank out of range");
        return Err(SubsetError::RankOutOfRange {
            rank,
            cardinality: total,
        });
    }
    Ok(())
}

/// Move `k` steps around a ring of `modulus` points starting at `rank`.
///
/// `rank < modulus <= 2^127`, so neither sum below can overflow.
fn step_on_ring(rank: u128, k: i128, modulus: u128) -> u128 {
    let step = k.unsigned_abs() % modulus;
    if k >= 0 {
        (rank + step) % modulus
    } else {
        (rank + modulus - step) % modulus
    }
}

/// Lexicographic rank over the selected positions of `bits`.
///
/// Walking positions left to right until every selected position has been
/// passed, a selected position adds 1 and an unselected position `i` adds
/// `2^(n - i - 1)`.
fn lexicographic_rank(bits: &BitPattern) -> u128 {
    let n = bits.len();
    let mut remaining = bits.count_ones();
    let mut rank = 0u128;
    for (i, selected) in bits.iter().enumerate() {
        if remaining == 0 {
            break;
        }
        if selected {
            remaining -= 1;
            rank += 1;
        } else {
            rank += 1u128 << (n - i - 1);
        }
    }
    rank
}

/// A subset of an ordered superset.
///
/// Elements keep the order they were given in; equality and hashing only look
/// at membership, so `Subset([d, c], S) == Subset([c, d], S)`. Subsets produced
/// by decoding list their elements in superset order.
///
/// The gray-code order comes from the oracle `G`, [`ReflectedGrayCode`] unless
/// built through one of the `*_with` constructors.
///
/// ```rust
/// use subrank::Subset;
///
/// let a = Subset::new(vec!['c', 'd'], vec!['a', 'b', 'c', 'd']).unwrap();
/// assert_eq!(a.rank_binary(), 3);
/// assert_eq!(a.next_binary(), Subset::new(vec!['b'], vec!['a', 'b', 'c', 'd']).unwrap());
/// assert_eq!(a.prev_binary(), Subset::new(vec!['c'], vec!['a', 'b', 'c', 'd']).unwrap());
/// ```
#[derive(Clone)]
pub struct Subset<T, G = ReflectedGrayCode> {
    elements: Vec<T>,
    superset: Arc<[T]>,
    bits: BitPattern,
    oracle: G,
    rank_binary: OnceLock<u128>,
    rank_lexicographic: OnceLock<u128>,
    rank_graycode: OnceLock<u128>,
}

impl<T: PartialEq + Clone> Subset<T> {
    /// Subset of `superset` holding `elements`, ranked with the reflected
    /// gray code.
    pub fn new(elements: impl Into<Vec<T>>, superset: impl Into<Arc<[T]>>) -> Result<Self> {
        Self::with_oracle(elements, superset, ReflectedGrayCode)
    }

    /// Subset of `superset` selected by `bits`.
    ///
    /// Fails with [`SubsetError::ShapeMismatch`] unless `bits` has one entry per
    /// superset element.
    ///
    /// ```rust
    /// use subrank::{BitPattern, Subset};
    ///
    /// let bits: BitPattern = "0011".parse().unwrap();
    /// let s = Subset::from_bitlist(vec!['a', 'b', 'c', 'd'], &bits).unwrap();
    /// assert_eq!(s.elements(), &['c', 'd']);
    /// ```
    pub fn from_bitlist(superset: impl Into<Arc<[T]>>, bits: &BitPattern) -> Result<Self> {
        Self::from_bitlist_with(superset, bits, ReflectedGrayCode)
    }

    /// Subset of `superset` with binary rank `rank`.
    ///
    /// Fails with [`SubsetError::RankOutOfRange`] when `rank >= 2^n`.
    pub fn unrank_binary(rank: u128, superset: impl Into<Arc<[T]>>) -> Result<Self> {
        Self::unrank_binary_with(rank, superset, ReflectedGrayCode)
    }

    /// Subset of `superset` with reflected gray-code rank `rank`.
    ///
    /// ```rust
    /// use subrank::Subset;
    ///
    /// let s = Subset::unrank_graycode(4, vec!['a', 'b', 'c']).unwrap();
    /// assert_eq!(s.elements(), &['b', 'c']);
    /// ```
    pub fn unrank_graycode(rank: u128, superset: impl Into<Arc<[T]>>) -> Result<Self> {
        Self::unrank_graycode_with(rank, superset, ReflectedGrayCode)
    }
}

impl<T, G> Subset<T, G>
where
    T: PartialEq + Clone,
    G: GrayCodeOracle + Clone,
{
    /// Like [`Subset::new`], ranking gray codes with `oracle`.
    pub fn with_oracle(
        elements: impl Into<Vec<T>>,
        superset: impl Into<Arc<[T]>>,
        oracle: G,
    ) -> Result<Self> {
        let elements = elements.into();
        let superset = superset.into();
        check_superset(&superset)?;
        let bits = bitlist_from_subset(&elements, &superset).inspect_err(|err| {
            debug!(error = %err, "rejected subset");
        })?;
        Ok(Self::from_parts(elements, superset, bits, oracle))
    }

    /// Like [`Subset::from_bitlist`], ranking gray codes with `oracle`.
    pub fn from_bitlist_with(
        superset: impl Into<Arc<[T]>>,
        bits: &BitPattern,
        oracle: G,
    ) -> Result<Self> {
        let superset = superset.into();
        check_superset(&superset)?;
        if bits.len() != superset.len() {
            return Err(SubsetError::ShapeMismatch {
                expected: superset.len(),
                found: bits.len(),
            });
        }
        Ok(Self::decode(superset, bits.clone(), oracle))
    }

    /// Like [`Subset::unrank_binary`], ranking gray codes with `oracle`.
    pub fn unrank_binary_with(
        rank: u128,
        superset: impl Into<Arc<[T]>>,
        oracle: G,
    ) -> Result<Self> {
        let superset = superset.into();
        check_superset(&superset)?;
        check_rank(rank, superset.len())?;
        let bits = BitPattern::from_binary_rank_unchecked(rank, superset.len());
        Ok(Self::decode(superset, bits, oracle))
    }

    /// Like [`Subset::unrank_graycode`], ranking gray codes with `oracle`.
    ///
    /// Fails with [`SubsetError::ShapeMismatch`] if the oracle returns a
    /// pattern of the wrong length.
    pub fn unrank_graycode_with(
        rank: u128,
        superset: impl Into<Arc<[T]>>,
        oracle: G,
    ) -> Result<Self> {
        let superset = superset.into();
        check_superset(&superset)?;
        check_rank(rank, superset.len())?;
        let bits = oracle.unrank(rank, superset.len());
        Self::from_bitlist_with(superset, &bits, oracle)
    }

    fn from_parts(elements: Vec<T>, superset: Arc<[T]>, bits: BitPattern, oracle: G) -> Self {
        Self {
            elements,
            superset,
            bits,
            oracle,
            rank_binary: OnceLock::new(),
            rank_lexicographic: OnceLock::new(),
            rank_graycode: OnceLock::new(),
        }
    }

    /// `bits` must have one position per superset element.
    fn decode(superset: Arc<[T]>, bits: BitPattern, oracle: G) -> Self {
        debug_assert_eq!(bits.len(), superset.len());
        let elements = bits
            .iter_ones()
            .filter_map(|i| superset.get(i).cloned())
            .collect();
        Self::from_parts(elements, superset, bits, oracle)
    }

    /// Rank in the given order.
    pub fn rank(&self, order: SubsetOrder) -> u128 {
        match order {
            SubsetOrder::Binary => self.rank_binary(),
            SubsetOrder::Lexicographic => self.rank_lexicographic(),
            SubsetOrder::GrayCode => self.rank_graycode(),
        }
    }

    /// Binary rank: the bit pattern read with `superset[0]` most significant.
    pub fn rank_binary(&self) -> u128 {
        *self.rank_binary.get_or_init(|| self.bits.binary_rank())
    }

    /// Lexicographic rank. `[c, d]` in `[a, b, c, d]` ranks 14.
    pub fn rank_lexicographic(&self) -> u128 {
        *self
            .rank_lexicographic
            .get_or_init(|| lexicographic_rank(&self.bits))
    }

    /// Gray-code rank as reported by the oracle.
    pub fn rank_graycode(&self) -> u128 {
        *self
            .rank_graycode
            .get_or_init(|| self.oracle.rank(&self.bits))
    }

    /// Step `k` places in the given order.
    ///
    /// Lexicographic stepping fails with [`SubsetError::NotImplemented`].
    pub fn iterate(&self, order: SubsetOrder, k: i128) -> Result<Self> {
        match order {
            SubsetOrder::Binary => Ok(self.iterate_binary(k)),
            SubsetOrder::Lexicographic => Err(SubsetError::NotImplemented(
                "lexicographic subset iteration",
            )),
            SubsetOrder::GrayCode => Ok(self.iterate_graycode(k)),
        }
    }

    /// Step `k` places (either direction) in binary order, wrapping at both ends.
    pub fn iterate_binary(&self, k: i128) -> Self {
        let rank = self.rank_binary();
        let next = step_on_ring(rank, k, self.cardinality());
        trace!(from = %rank, to = %next, step = %k, "binary step");
        let bits = BitPattern::from_binary_rank_unchecked(next, self.superset_size());
        Self::decode(Arc::clone(&self.superset), bits, self.oracle.clone())
    }

    /// Next subset in binary order.
    pub fn next_binary(&self) -> Self {
        self.iterate_binary(1)
    }

    /// Previous subset in binary order.
    pub fn prev_binary(&self) -> Self {
        self.iterate_binary(-1)
    }

    /// Step `k` places (either direction) in gray-code order, wrapping at both
    /// ends. With `k = ±1` exactly one element joins or leaves.
    ///
    /// # Panics
    ///
    /// If the oracle breaks the [`GrayCodeOracle::unrank`] postcondition and
    /// returns a pattern whose length differs from the superset's.
    pub fn iterate_graycode(&self, k: i128) -> Self {
        let modulus = self.cardinality();
        let rank = self.rank_graycode() % modulus;
        let next = step_on_ring(rank, k, modulus);
        trace!(from = %rank, to = %next, step = %k, "gray-code step");
        let bits = self.oracle.unrank(next, self.superset_size());
        assert_eq!(
            bits.len(),
            self.superset_size(),
            "gray-code oracle returned a pattern of the wrong length"
        );
        Self::decode(Arc::clone(&self.superset), bits, self.oracle.clone())
    }

    /// Next subset in gray-code order.
    pub fn next_graycode(&self) -> Self {
        self.iterate_graycode(1)
    }

    /// Previous subset in gray-code order.
    pub fn prev_graycode(&self) -> Self {
        self.iterate_graycode(-1)
    }

    /// Always fails with [`SubsetError::NotImplemented`].
    pub fn next_lexicographic(&self) -> Result<Self> {
        Err(SubsetError::NotImplemented("next_lexicographic"))
    }

    /// Always fails with [`SubsetError::NotImplemented`].
    pub fn prev_lexicographic(&self) -> Result<Self> {
        Err(SubsetError::NotImplemented("prev_lexicographic"))
    }
}

impl<T, G> Subset<T, G> {
    /// Selected elements, in the order they were given.
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    /// The superset the elements are drawn from.
    pub fn superset(&self) -> &[T] {
        &self.superset
    }

    /// Membership pattern over the superset.
    pub fn bitlist(&self) -> &BitPattern {
        &self.bits
    }

    /// Number of selected elements.
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    /// Number of superset elements.
    pub fn superset_size(&self) -> usize {
        self.superset.len()
    }

    /// Number of distinct subsets of the superset, `2^superset_size`.
    pub fn cardinality(&self) -> u128 {
        cardinality(self.superset_size())
    }

    /// Whether `element` is selected.
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.superset
            .iter()
            .position(|candidate| candidate == element)
            .and_then(|index| self.bits.get(index))
            .unwrap_or(false)
    }
}

impl<T: PartialEq, G> PartialEq for Subset<T, G> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits && self.superset == other.superset
    }
}

impl<T: Eq, G> Eq for Subset<T, G> {}

impl<T: Hash, G> Hash for Subset<T, G> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.superset.hash(state);
        self.bits.hash(state);
    }
}

impl<T: fmt::Debug, G> fmt::Debug for Subset<T, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Subset({:?}, {:?})", self.elements, &*self.superset)
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize, G> serde::Serialize for Subset<T, G> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Subset", 2)?;
        state.serialize_field("elements", &self.elements)?;
        state.serialize_field("superset", &*self.superset)?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T, G> serde::Deserialize<'de> for Subset<T, G>
where
    T: serde::Deserialize<'de> + PartialEq + Clone,
    G: GrayCodeOracle + Clone + Default,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw<T> {
            elements: Vec<T>,
            superset: Vec<T>,
        }

        let raw = <Raw<T> as serde::Deserialize>::deserialize(deserializer)?;
        Self::with_oracle(raw.elements, raw.superset, G::default()).map_err(serde::de::Error::custom)
    }
}
