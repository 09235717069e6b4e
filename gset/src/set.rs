use crate::operand::Operand;
use crate::params::INITIAL_CAPACITY;
use hashbrown::HashSet;
use std::borrow::Borrow;
use std::fmt::{Debug, Formatter};
use std::hash::Hash;
use std::ops::{BitAnd, BitOr, Sub};

pub type Iter<'a, T> = hashbrown::hash_set::Iter<'a, T>;
pub type IntoIter<T> = hashbrown::hash_set::IntoIter<T>;

/// An unordered collection of unique values.
///
/// Each member is stored once in a hash table, giving constant-time (amortized) insertion,
/// removal and membership tests. There is no guarantee on the order in which members are
/// enumerated, and two calls to [`Set::to_array`] may return them in different orders.
///
/// ```
/// use gset::Set;
/// let mut set = Set::from_array([1, 2, 3]);
/// set.push([3, 4]);
/// assert!(set.has(&4));
/// assert!(set.is_super_of(&Set::from_array([1, 4])));
/// set.delete([1, 2]);
/// assert_eq!(set, Set::from_array([3, 4]));
/// ```
#[derive(Clone)]
pub struct Set<T> {
    elements: HashSet<T>,
}

/// Number of members of a possibly absent set.
fn size<T>(set: Option<&Set<T>>) -> usize {
    set.map_or(0, |s| s.elements.len())
}

impl<T: Eq + Hash> Set<T> {
    pub fn empty() -> Self {
        Self::with_capacity(INITIAL_CAPACITY.get())
    }

    /// Empty set with room for `capacity` members.
    ///
    /// The capacity is only a hint: if it cannot be reserved, the set starts without any
    /// preallocated room.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut elements = HashSet::new();
        if let Err(err) = elements.try_reserve(capacity) {
            tracing::warn!(capacity, ?err, "cannot reserve set capacity, starting empty");
        }
        Set { elements }
    }

    /// Builds a set from a sequence of values. Duplicated values are only stored once.
    pub fn from_array(values: impl IntoIterator<Item = T>) -> Self {
        let mut set = Set::empty();
        set.push(values);
        set
    }

    /// Builds the set of all keys of a map.
    ///
    /// ```
    /// use gset::Set;
    /// use std::collections::HashMap;
    /// let map = HashMap::from([(1, "a"), (2, "b")]);
    /// assert_eq!(Set::from_map_keys(&map), Set::from_array([1, 2]));
    /// ```
    pub fn from_map_keys<'m, V, M>(map: &'m M) -> Self
    where
        M: ?Sized,
        &'m M: IntoIterator<Item = (&'m T, &'m V)>,
        T: Clone + 'm,
        V: 'm,
    {
        Set::from_array(map.into_iter().map(|(key, _)| key.clone()))
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.elements.iter()
    }

    /// Inserts all given values. Values already in the set are left untouched.
    pub fn push(&mut self, values: impl IntoIterator<Item = T>) {
        for value in values {
            self.elements.insert(value);
        }
    }

    /// Inserts a single value, returning true if it was not already present.
    pub fn insert(&mut self, value: T) -> bool {
        self.elements.insert(value)
    }

    /// Removes all given values. Values that are not in the set are ignored.
    pub fn delete<B: Borrow<T>>(&mut self, values: impl IntoIterator<Item = B>) {
        for value in values {
            let value: &T = value.borrow();
            self.elements.remove(value);
        }
    }

    /// Removes a single value, returning true if it was present.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.elements.remove(value)
    }

    pub fn clear(&mut self) {
        self.elements.clear()
    }

    /// Adds all members of `other` to this set.
    pub fn merge_from<'a>(&mut self, other: impl Operand<'a, T>)
    where
        T: Clone + 'a,
    {
        if let Some(other) = other.as_set() {
            self.elements.extend(other.elements.iter().cloned());
        }
    }

    /// Removes all members of `other` from this set.
    pub fn delete_from<'a>(&mut self, other: impl Operand<'a, T>)
    where
        T: 'a,
    {
        if let Some(other) = other.as_set() {
            for value in &other.elements {
                self.elements.remove(value);
            }
        }
    }

    pub fn has<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.elements.contains(value)
    }

    /// Returns true if both sets have exactly the same members.
    ///
    /// The comparison stops at the first member of `self` that is missing in `other`.
    /// See [`Set::safe_equals`] for a variant whose running time does not depend on the
    /// position of that member.
    pub fn equals<'a>(&self, other: impl Operand<'a, T>) -> bool
    where
        T: 'a,
    {
        let other = other.as_set();
        if self.len() != size(other) {
            return false;
        }
        match other {
            Some(other) => self.elements.iter().all(|value| other.has(value)),
            None => true,
        }
    }

    /// Same result as [`Set::equals`], but every member of `self` is looked up in `other`
    /// even after a mismatch was found, so that the time taken only depends on the size of the
    /// set (see <https://en.wikipedia.org/wiki/Timing_attack>).
    ///
    /// Sets of different sizes are rejected immediately: the size is not considered secret.
    pub fn safe_equals<'a>(&self, other: impl Operand<'a, T>) -> bool
    where
        T: 'a,
    {
        let other = other.as_set();
        if self.len() != size(other) {
            return false;
        }
        let Some(other) = other else {
            return true;
        };
        let mut same = true;
        for value in &self.elements {
            // non short-circuiting `&`: the lookup must happen for every member
            same &= other.has(value);
        }
        same
    }

    /// Returns true if all members of `other` are in `self`.
    ///
    /// Any set is a superset of the empty set.
    pub fn is_super_of<'a>(&self, other: impl Operand<'a, T>) -> bool
    where
        T: 'a,
    {
        match other.as_set() {
            Some(other) => other.len() <= self.len() && other.elements.iter().all(|value| self.has(value)),
            None => true,
        }
    }

    /// Returns true if all members of `self` are in `other`.
    ///
    /// The empty set is a subset of any set.
    pub fn is_sub_of<'a>(&self, other: impl Operand<'a, T>) -> bool
    where
        T: 'a,
    {
        match other.as_set() {
            Some(other) => other.is_super_of(self),
            None => self.is_empty(),
        }
    }

    /// Returns a new set with the members that are both in `self` and in `other`.
    ///
    /// If `other` is absent, it is not interpreted as an empty set but as the absence of filter:
    /// the result is a copy of `self`.
    pub fn get_intersection<'a>(&self, other: impl Operand<'a, T>) -> Set<T>
    where
        T: Clone + 'a,
    {
        let Some(other) = other.as_set() else {
            return self.clone();
        };
        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        smaller
            .elements
            .iter()
            .filter(|value| larger.has(*value))
            .cloned()
            .collect()
    }

    /// All members of the set, in no particular order.
    pub fn to_array(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.elements.iter().cloned().collect()
    }
}

impl<T: Eq + Hash> Default for Set<T> {
    fn default() -> Self {
        Set::empty()
    }
}

impl<T: Eq + Hash> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T: Eq + Hash> Eq for Set<T> {}

impl<T: Debug> Debug for Set<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.elements.iter()).finish()
    }
}

impl<T: Eq + Hash> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Set::from_array(iter)
    }
}

impl<T: Eq + Hash> From<Vec<T>> for Set<T> {
    fn from(values: Vec<T>) -> Self {
        Set::from_array(values)
    }
}

impl<T: Eq + Hash, const N: usize> From<[T; N]> for Set<T> {
    fn from(values: [T; N]) -> Self {
        Set::from_array(values)
    }
}

impl<T: Eq + Hash> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push(iter)
    }
}

impl<'a, T: Eq + Hash + Copy + 'a> Extend<&'a T> for Set<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.push(iter.into_iter().copied())
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: Eq + Hash + Clone> BitOr<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    /// Union of two sets.
    fn bitor(self, rhs: &Set<T>) -> Set<T> {
        let mut result = self.clone();
        result.merge_from(rhs);
        result
    }
}

impl<T: Eq + Hash + Clone> BitAnd<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    /// Intersection of two sets.
    fn bitand(self, rhs: &Set<T>) -> Set<T> {
        self.get_intersection(rhs)
    }
}

impl<T: Eq + Hash + Clone> Sub<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    /// Members of `self` that are not in `rhs`.
    fn sub(self, rhs: &Set<T>) -> Set<T> {
        let mut result = self.clone();
        result.delete_from(rhs);
        result
    }
}
