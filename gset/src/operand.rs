use crate::Set;

/// A reference to a set that may be absent.
///
/// Binary operations of [`Set`] and the multi-set functions accept any `Operand`, which
/// allows quite broad patterns on the calling side:
///
/// ```
/// use gset::Set;
/// let mut s = Set::from_array([1, 2]);
/// let other = Set::from_array([2, 3]);
/// let missing: Option<Set<i32>> = None;
///
/// s.merge_from(&other);
/// s.merge_from(Some(&other));
/// s.merge_from(&missing); // absent: nothing to merge
/// assert!(s.equals(&Set::from_array([1, 2, 3])));
/// ```
///
/// An absent operand reads as the empty set, except when used as the filter of an
/// intersection where it imposes no constraint (see [`Set::get_intersection`]).
pub trait Operand<'a, T: 'a> {
    fn as_set(self) -> Option<&'a Set<T>>;
}

impl<'a, T> Operand<'a, T> for &'a Set<T> {
    fn as_set(self) -> Option<&'a Set<T>> {
        Some(self)
    }
}

impl<'a, T> Operand<'a, T> for Option<&'a Set<T>> {
    fn as_set(self) -> Option<&'a Set<T>> {
        self
    }
}

impl<'a, T> Operand<'a, T> for &'a Option<Set<T>> {
    fn as_set(self) -> Option<&'a Set<T>> {
        self.as_ref()
    }
}

impl<'a, T> Operand<'a, T> for &'a &'a Set<T> {
    fn as_set(self) -> Option<&'a Set<T>> {
        Some(*self)
    }
}
