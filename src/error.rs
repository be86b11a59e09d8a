//! Error type for subset construction, decoding and navigation.

use thiserror::Error;

/// Errors raised while building, decoding or moving between subsets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubsetError {
    /// A bit list does not have one bit per superset element.
    #[error("sizes of lists are not equal: superset has {expected} elements, bitlist has {found}")]
    ShapeMismatch {
        /// Superset length.
        expected: usize,
        /// Bit list length.
        found: usize,
    },

    /// An element of the subset does not occur in the superset.
    #[error("subset element at position {position} is not in the superset")]
    ElementNotFound {
        /// Position of the offending element in the subset.
        position: usize,
    },

    /// The subset names the same superset element twice.
    #[error("subset element at position {position} is repeated")]
    DuplicateElement {
        /// Position of the second occurrence in the subset.
        position: usize,
    },

    /// The superset contains the same element twice.
    #[error("superset element at position {position} is repeated")]
    DuplicateInSuperset {
        /// Position of the second occurrence in the superset.
        position: usize,
    },

    /// A rank lies outside `[0, cardinality)`.
    #[error("rank {rank} is out of range for {cardinality} subsets")]
    RankOutOfRange {
        /// Requested rank.
        rank: u128,
        /// Number of subsets of the superset.
        cardinality: u128,
    },

    /// The superset is too large for its cardinality to fit a `u128`.
    #[error("superset of {size} elements exceeds the maximum of {max}")]
    SupersetTooLarge {
        /// Requested size.
        size: usize,
        /// Largest supported size.
        max: usize,
    },

    /// A bit string contained something other than `0` or `1`.
    #[error("invalid bit {0:?}, expected '0' or '1'")]
    InvalidBit(char),

    /// The requested operation has no implementation.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SubsetError>;
