use crate::operand::Operand;
use crate::Set;
use std::borrow::Borrow;
use std::hash::Hash;

/// Read-only queries on a set that may be absent.
///
/// An absent set behaves as the empty set. Mutation is not offered: an absent set must first be
/// materialized, e.g. with `Option::get_or_insert_with(Set::empty)`.
///
/// ```
/// use gset::{MaybeSet, Set};
/// let absent: Option<&Set<u8>> = None;
/// assert!(!absent.has(&1));
/// assert!(absent.is_sub_of(&Set::from_array([1])));
/// assert!(absent.equals(&Set::<u8>::empty()));
/// ```
pub trait MaybeSet<T> {
    fn has<Q>(self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized;

    fn len(self) -> usize;

    fn is_empty(self) -> bool;

    fn equals<'a>(self, other: impl Operand<'a, T>) -> bool
    where
        T: 'a;

    fn safe_equals<'a>(self, other: impl Operand<'a, T>) -> bool
    where
        T: 'a;

    fn is_super_of<'a>(self, other: impl Operand<'a, T>) -> bool
    where
        T: 'a;

    fn is_sub_of<'a>(self, other: impl Operand<'a, T>) -> bool
    where
        T: 'a;

    /// Copy of the set, or a new empty set if absent.
    fn cloned_set(self) -> Set<T>
    where
        T: Clone;

    /// Intersection with `other`. An absent receiver yields the empty set, whatever `other` is.
    fn get_intersection<'a>(self, other: impl Operand<'a, T>) -> Set<T>
    where
        T: Clone + 'a;

    fn to_array(self) -> Vec<T>
    where
        T: Clone;
}

fn other_is_empty<'a, T: Eq + Hash + 'a>(other: impl Operand<'a, T>) -> bool {
    other.as_set().is_none_or(Set::is_empty)
}

impl<T: Eq + Hash> MaybeSet<T> for Option<&Set<T>> {
    fn has<Q>(self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.is_some_and(|s| s.has(value))
    }

    fn len(self) -> usize {
        self.map_or(0, Set::len)
    }

    fn is_empty(self) -> bool {
        self.is_none_or(Set::is_empty)
    }

    fn equals<'a>(self, other: impl Operand<'a, T>) -> bool
    where
        T: 'a,
    {
        match self {
            Some(s) => s.equals(other),
            None => other_is_empty(other),
        }
    }

    fn safe_equals<'a>(self, other: impl Operand<'a, T>) -> bool
    where
        T: 'a,
    {
        match self {
            Some(s) => s.safe_equals(other),
            None => other_is_empty(other),
        }
    }

    fn is_super_of<'a>(self, other: impl Operand<'a, T>) -> bool
    where
        T: 'a,
    {
        match self {
            Some(s) => s.is_super_of(other),
            None => other_is_empty(other),
        }
    }

    fn is_sub_of<'a>(self, other: impl Operand<'a, T>) -> bool
    where
        T: 'a,
    {
        match self {
            Some(s) => s.is_sub_of(other),
            None => true,
        }
    }

    fn cloned_set(self) -> Set<T>
    where
        T: Clone,
    {
        self.map_or_else(Set::empty, Set::clone)
    }

    fn get_intersection<'a>(self, other: impl Operand<'a, T>) -> Set<T>
    where
        T: Clone + 'a,
    {
        match self {
            Some(s) => s.get_intersection(other),
            None => Set::empty(),
        }
    }

    fn to_array(self) -> Vec<T>
    where
        T: Clone,
    {
        self.map_or_else(Vec::new, Set::to_array)
    }
}
