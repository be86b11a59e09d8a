//! Subset ranking and navigation.
//!
//! `subrank` indexes the `2^n` subsets of an ordered, finite superset. Each
//! subset is reduced to a membership bit pattern, which is ranked in one of
//! three total orders:
//!
//! - **Binary**: the pattern read as a base-2 number, first superset element
//!   most significant.
//! - **Lexicographic**: the standard combinatorial numbering, where gaps
//!   before the first selected element weigh the most.
//! - **Gray code**: reflected binary gray code, so neighbouring ranks differ by
//!   one element.
//!
//! Ranks can be turned back into subsets, and binary and gray-code ranks can be
//! stepped around a ring of `2^n` positions. [`ksubsets`] enumerates the
//! fixed-size combinations of a superset.
//!
//! # Example
//!
//! ```rust
//! use subrank::{Subset, SubsetOrder};
//!
//! let superset = vec!['a', 'b', 'c', 'd'];
//! let a = Subset::new(vec!['c', 'd'], superset.clone()).unwrap();
//!
//! assert_eq!(a.rank(SubsetOrder::Binary), 3);
//! assert_eq!(a.rank(SubsetOrder::Lexicographic), 14);
//! assert_eq!(a.rank(SubsetOrder::GrayCode), 8);
//!
//! // One gray-code step changes exactly one element.
//! let b = a.next_graycode();
//! assert_eq!(b.elements(), &['a', 'c', 'd']);
//!
//! // Unranking inverts ranking.
//! let c = Subset::unrank_binary(a.rank_binary(), superset).unwrap();
//! assert_eq!(a, c);
//! ```
//!
//! # References
//!
//! - Kreher, D. and Stinson, D. (1999). "Combinatorial Algorithms: Generation,
//!   Enumeration, and Search"
//! - Gray, F. (1953). "Pulse code communication", U.S. Patent 2,632,058

#![warn(missing_docs)]
#![warn(clippy::all)]

mod bits;
mod error;
mod gray;
mod ksubsets;
mod subset;
mod traits;

pub use bits::BitPattern;
pub use error::{Result, SubsetError};
pub use gray::ReflectedGrayCode;
pub use ksubsets::ksubsets;
pub use subset::{bitlist_from_subset, Subset};
pub use traits::GrayCodeOracle;

/// Largest supported superset. `2^127` subsets still fit a `u128` rank.
pub const MAX_SUPERSET_SIZE: usize = 127;

/// Ordering used to rank or step through subsets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SubsetOrder {
    /// Membership bits read as a binary number.
    #[default]
    Binary,
    /// Combinatorial lexicographic numbering (ranking only).
    Lexicographic,
    /// Reflected binary gray code.
    GrayCode,
}
