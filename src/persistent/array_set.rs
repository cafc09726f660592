//! Persistent (immutable) insertion-ordered set.
//!
//! [`PersistentArraySet`] is a [`PersistentArrayMap`] whose values equal
//! their keys. Membership is a linear scan under the map's
//! [`KeyEquality`] strategy, and iteration follows insertion order.
//!
//! # Examples
//!
//! ```rust
//! use momentum::hash_set;
//!
//! let set = hash_set![1, 2, 3];
//! assert!(set.contains(&2));
//!
//! let smaller = set.disj(&2);
//! assert!(!smaller.contains(&2));
//! assert!(set.contains(&2));
//! ```

use std::fmt;
use std::iter::FromIterator;

use super::array_map::{KeyEquality, KeySeq, PersistentArrayMap, PersistentArrayMapIterator, ValueEquality};
use crate::seq::{Conj, IntoSequence, equiv};

/// A persistent (immutable) set keeping its members in insertion order.
///
/// Adding a member that is already present leaves the set unchanged in
/// size; the stored member is replaced by the new one.
///
/// Equality is order-sensitive: two sets are equal only when they hold
/// equal members in the same insertion order. Compare membership with
/// [`PersistentArraySet::contains`] when order must not matter.
///
/// ```rust
/// use momentum::hash_set;
///
/// assert_eq!(hash_set![1, 2], hash_set![1, 2]);
/// assert_ne!(hash_set![1, 2], hash_set![2, 1]);
/// ```
pub struct PersistentArraySet<T, E = ValueEquality> {
    inner: PersistentArrayMap<T, T, E>,
}

impl<T> PersistentArraySet<T> {
    /// Creates a new empty set comparing members with `PartialEq`.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: PersistentArrayMap::new(),
        }
    }
}

impl<T, E> PersistentArraySet<T, E> {
    /// Creates a new empty set comparing members with `equality`.
    #[inline]
    #[must_use]
    pub fn with_equality(equality: E) -> Self {
        Self {
            inner: PersistentArrayMap::with_equality(equality),
        }
    }

    /// Returns the number of members.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set has no members.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns an iterator over the members in insertion order.
    #[inline]
    pub fn iter(&self) -> PersistentArraySetIterator<'_, T> {
        PersistentArraySetIterator {
            inner: self.inner.iter(),
        }
    }
}

impl<T, E: KeyEquality<T>> PersistentArraySet<T, E> {
    /// Returns `true` if `element` is a member.
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        self.inner.contains_key(element)
    }

    /// Returns the stored member equivalent to `element`.
    #[must_use]
    pub fn get(&self, element: &T) -> Option<&T> {
        self.inner.get(element)
    }
}

impl<T, E> PersistentArraySet<T, E>
where
    T: Clone,
    E: KeyEquality<T> + Clone,
{
    /// Returns a new set containing `element`.
    #[must_use]
    pub fn conj(&self, element: T) -> Self {
        Self {
            inner: self.inner.assoc(element.clone(), element),
        }
    }

    /// Returns a new set without `element`.
    #[must_use]
    pub fn disj(&self, element: &T) -> Self {
        Self {
            inner: self.inner.dissoc(element),
        }
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the members of a [`PersistentArraySet`].
pub struct PersistentArraySetIterator<'a, T> {
    inner: PersistentArrayMapIterator<'a, T, T>,
}

impl<'a, T> Iterator for PersistentArraySetIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(member, _)| member)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for PersistentArraySetIterator<'_, T> {}

// =============================================================================
// Sequence Protocol
// =============================================================================

impl<T, E> IntoSequence for PersistentArraySet<T, E> {
    type Item = T;
    type Seq = KeySeq<T, T>;

    #[inline]
    fn into_seq(self) -> KeySeq<T, T> {
        self.inner.keys()
    }
}

impl<T, E> IntoSequence for &PersistentArraySet<T, E> {
    type Item = T;
    type Seq = KeySeq<T, T>;

    #[inline]
    fn into_seq(self) -> KeySeq<T, T> {
        self.inner.keys()
    }
}

impl<T, E> Conj<T> for PersistentArraySet<T, E>
where
    T: Clone,
    E: KeyEquality<T> + Clone,
{
    #[inline]
    fn conj(&self, element: T) -> Self {
        Self::conj(self, element)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, E: Clone> Clone for PersistentArraySet<T, E> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T, E: Default> Default for PersistentArraySet<T, E> {
    fn default() -> Self {
        Self::with_equality(E::default())
    }
}

impl<T, E> FromIterator<T> for PersistentArraySet<T, E>
where
    T: Clone,
    E: KeyEquality<T> + Clone + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: iter
                .into_iter()
                .map(|element| (element.clone(), element))
                .collect(),
        }
    }
}

impl<'a, T, E> IntoIterator for &'a PersistentArraySet<T, E> {
    type Item = &'a T;
    type IntoIter = PersistentArraySetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Sets are equal when they hold equal members in the same order.
impl<T: PartialEq, E, F> PartialEq<PersistentArraySet<T, F>> for PersistentArraySet<T, E> {
    fn eq(&self, other: &PersistentArraySet<T, F>) -> bool {
        equiv(self, other)
    }
}

impl<T: Eq, E> Eq for PersistentArraySet<T, E> {}

impl<T: fmt::Debug, E> fmt::Debug for PersistentArraySet<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, E> fmt::Display for PersistentArraySet<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "#{{")?;
        for (index, member) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, " ")?;
            }
            write!(formatter, "{member}")?;
        }
        write!(formatter, "}}")
    }
}
