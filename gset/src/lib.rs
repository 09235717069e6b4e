//! Unordered sets of hashable values and the usual set algebra.
//!
//! The crate is built around a single type, [`Set`], with operations to build, update and compare
//! sets, and two functions, [`union`] and [`intersection`], that combine any number of sets.
//!
//! ```
//! use gset::{intersection, union, Set};
//!
//! let a = Set::from_array([1, 2]);
//! let b = Set::from_array([2, 3]);
//! let c = Set::from_array([1, 3]);
//! assert_eq!(union([&a, &b, &c]), Set::from_array([1, 2, 3]));
//! assert!(intersection([&a, &b, &c]).is_empty());
//! ```
//!
//! # Absent sets
//!
//! Binary operations accept an [`Operand`], which may be an absent set (`None`). An absent set
//! is read as the empty set with one exception: as the filter of an intersection it imposes
//! no constraint, so that `a.get_intersection(None)` is a copy of `a`.
//! Queries on a possibly absent receiver are provided by [`MaybeSet`].
//!
//! # Concurrency
//!
//! A set has no internal synchronization. Concurrent reads are fine, but any mutation must be
//! serialized by its owner (which the borrow checker enforces for safe code).

mod absent;
mod operand;
pub mod params;
mod set;
mod text;

pub use absent::MaybeSet;
pub use operand::Operand;
pub use set::{IntoIter, Iter, Set};
pub use text::ParseSetError;

use std::hash::Hash;

/// Set of all elements that appear in at least one of the `sets`.
///
/// Absent sets contribute no elements. With no input at all, the result is the empty set.
pub fn union<'a, T, S>(sets: impl IntoIterator<Item = S>) -> Set<T>
where
    T: Eq + Hash + Clone + 'a,
    S: Operand<'a, T>,
{
    let mut result = Set::empty();
    let mut num_sets = 0usize;
    for set in sets {
        result.merge_from(set);
        num_sets += 1;
    }
    tracing::trace!(num_sets, len = result.len(), "union");
    result
}

/// Set of the elements that appear in all `sets`.
///
/// With no input the result is empty, with a single input it is a copy of this input.
/// If the first set is absent the result is empty. Any other absent set imposes no
/// constraint (see [`Set::get_intersection`]).
pub fn intersection<'a, T, S>(sets: impl IntoIterator<Item = S>) -> Set<T>
where
    T: Eq + Hash + Clone + 'a,
    S: Operand<'a, T>,
{
    let mut sets = sets.into_iter();
    let Some(first) = sets.next() else {
        return Set::empty();
    };
    let Some(first) = first.as_set() else {
        tracing::trace!("intersection with an absent first set");
        return Set::empty();
    };
    let mut result = first.clone();
    let mut num_sets = 1usize;
    for set in sets {
        if result.is_empty() {
            break;
        }
        result = result.get_intersection(set);
        num_sets += 1;
    }
    tracing::trace!(num_sets, len = result.len(), "intersection");
    result
}
