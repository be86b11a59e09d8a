//! Fixed-size combinations of a superset.

use itertools::Itertools;

/// All `k`-element combinations of `superset`, in lexicographic order of
/// position.
///
/// The iterator is lazy and `Clone`; clone it to walk the sequence again.
/// `k == 0` yields one empty combination and `k > superset.len()` yields none.
///
/// ```rust
/// use subrank::ksubsets;
///
/// let pairs: Vec<Vec<i32>> = ksubsets(&[1, 2, 3], 2).collect();
/// assert_eq!(pairs, vec![vec![1, 2], vec![1, 3], vec![2, 3]]);
/// ```
pub fn ksubsets<T: Clone>(superset: &[T], k: usize) -> impl Iterator<Item = Vec<T>> + Clone + '_ {
    superset.iter().cloned().combinations(k)
}
