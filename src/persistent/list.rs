//! Persistent (immutable) singly-linked list.
//!
//! This module provides [`PersistentList`], an immutable singly-linked list
//! that uses structural sharing for efficient operations.
//!
//! # Overview
//!
//! `PersistentList` is a cons-list inspired by Lisp/Scheme. It provides:
//!
//! - O(1) prepend
//! - O(1) `first`, `rest` and `len`
//! - O(n) index access and reverse
//!
//! The list is its own [`Sequence`] cursor: `rest` hands out the shared
//! suffix, and the rest of a one-element list is the canonical empty list.
//!
//! # Examples
//!
//! ```rust
//! use momentum::persistent::PersistentList;
//!
//! let list = PersistentList::new().prepend(3).prepend(2).prepend(1);
//! assert_eq!(list.first(), Some(&1));
//! assert_eq!(list.len(), 3);
//!
//! // Structural sharing: the original list is preserved
//! let extended = list.prepend(0);
//! assert_eq!(list.len(), 3);
//! assert_eq!(extended.len(), 4);
//! ```
//!
//! # Structural Sharing
//!
//! ```text
//! list1: 1 -> 2 -> 3 -> nil
//! list2 = list1.prepend(0): 0 -> [1 -> 2 -> 3 -> nil]  // shares [1, 2, 3] with list1
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use super::ReferenceCounter;
use crate::seq::{Conj, IntoSequence, Sequence, equiv};

/// Internal node structure for the persistent list.
///
/// A node owns its element and shares its successor with every list
/// ending in the same suffix.
struct Node<T> {
    /// The element stored in this node.
    element: T,
    /// Reference to the next node (if any).
    next: Option<ReferenceCounter<Self>>,
}

/// A persistent (immutable) singly-linked list.
///
/// # Time Complexity
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `new`     | O(1)       |
/// | `prepend` | O(1)       |
/// | `first`   | O(1)       |
/// | `rest`    | O(1)       |
/// | `len`     | O(1)       |
/// | `get`     | O(n)       |
/// | `reverse` | O(n)       |
///
/// # Examples
///
/// ```rust
/// use momentum::persistent::PersistentList;
///
/// let list = PersistentList::singleton(42);
/// assert_eq!(list.first(), Some(&42));
/// ```
pub struct PersistentList<T> {
    /// Reference to the head node (if any).
    head: Option<ReferenceCounter<Node<T>>>,
    /// Cached length for O(1) access.
    length: usize,
}

impl<T> PersistentList<T> {
    /// Creates a new empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use momentum::persistent::PersistentList;
    ///
    /// let list: PersistentList<i32> = PersistentList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Creates a list containing a single element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::new().prepend(element)
    }

    /// Builds a list holding the elements of `iter` in iteration order.
    pub(crate) fn from_ordered<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: DoubleEndedIterator,
    {
        iter.into_iter()
            .rev()
            .fold(Self::new(), |list, element| list.prepend(element))
    }

    /// Prepends an element to the front of the list.
    ///
    /// The new list shares every node of `self`.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use momentum::persistent::PersistentList;
    ///
    /// let list = PersistentList::new().prepend(3).prepend(2).prepend(1);
    /// assert_eq!(list.first(), Some(&1));
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn prepend(&self, element: T) -> Self {
        Self {
            head: Some(ReferenceCounter::new(Node {
                element,
                next: self.head.clone(),
            })),
            length: self.length + 1,
        }
    }

    /// Returns a reference to the first element of the list.
    ///
    /// Returns `None` if the list is empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.element)
    }

    /// Returns the list without its first element.
    ///
    /// The rest of an empty or one-element list is the empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use momentum::persistent::PersistentList;
    ///
    /// let list = PersistentList::new().prepend(3).prepend(2).prepend(1);
    /// let rest = list.rest();
    /// assert_eq!(rest.first(), Some(&2));
    /// assert_eq!(rest.len(), 2);
    /// assert!(PersistentList::singleton(1).rest().is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn rest(&self) -> Self {
        match &self.head {
            Some(node) if self.length > 1 => Self {
                head: node.next.clone(),
                length: self.length - 1,
            },
            _ => Self::new(),
        }
    }

    /// Returns a reference to the element at the given index.
    ///
    /// # Complexity
    ///
    /// O(n) where n = index
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// Returns the number of elements in the list.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the list contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns an iterator over references to the elements.
    #[inline]
    #[must_use]
    pub const fn iter(&self) -> PersistentListIterator<'_, T> {
        PersistentListIterator {
            current: self.head.as_ref(),
            remaining: self.length,
        }
    }
}

impl<T: Clone> PersistentList<T> {
    /// Returns a new list with the elements in reverse order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use momentum::persistent::PersistentList;
    ///
    /// let list: PersistentList<i32> = (1..=3).collect();
    /// let reversed = list.reverse();
    /// let collected: Vec<&i32> = reversed.iter().collect();
    /// assert_eq!(collected, vec![&3, &2, &1]);
    /// ```
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.iter()
            .fold(Self::new(), |result, element| result.prepend(element.clone()))
    }
}

// Dropping a long chain node by node avoids recursing once per element.
impl<T> Drop for PersistentList<T> {
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(node) = next {
            match ReferenceCounter::try_unwrap(node) {
                Ok(mut node) => next = node.next.take(),
                Err(_) => break,
            }
        }
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to elements of a [`PersistentList`].
pub struct PersistentListIterator<'a, T> {
    current: Option<&'a ReferenceCounter<Node<T>>>,
    remaining: usize,
}

impl<'a, T> Iterator for PersistentListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_ref();
            self.remaining -= 1;
            &node.element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for PersistentListIterator<'_, T> {}

// =============================================================================
// Sequence Protocol
// =============================================================================

impl<T> Sequence for PersistentList<T> {
    type Item = T;

    #[inline]
    fn is_empty(&self) -> bool {
        self.length == 0
    }

    #[inline]
    fn first(&self) -> Option<&T> {
        Self::first(self)
    }

    #[inline]
    fn rest(&self) -> Self {
        Self::rest(self)
    }

    #[inline]
    fn count(&self) -> Option<usize> {
        Some(self.length)
    }
}

impl<T> IntoSequence for PersistentList<T> {
    type Item = T;
    type Seq = Self;

    #[inline]
    fn into_seq(self) -> Self {
        self
    }
}

impl<T> IntoSequence for &PersistentList<T> {
    type Item = T;
    type Seq = PersistentList<T>;

    #[inline]
    fn into_seq(self) -> PersistentList<T> {
        self.clone()
    }
}

impl<T> Conj<T> for PersistentList<T> {
    /// Prepends, the cheap end of a list.
    #[inline]
    fn conj(&self, element: T) -> Self {
        self.prepend(element)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for PersistentList<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            length: self.length,
        }
    }
}

impl<T> Default for PersistentList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for PersistentList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let elements: Vec<T> = iter.into_iter().collect();
        Self::from_ordered(elements)
    }
}

impl<'a, T> IntoIterator for &'a PersistentList<T> {
    type Item = &'a T;
    type IntoIter = PersistentListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq<U>, U> PartialEq<PersistentList<U>> for PersistentList<T> {
    fn eq(&self, other: &PersistentList<U>) -> bool {
        equiv(self, other)
    }
}

impl<T: Eq> Eq for PersistentList<T> {}

impl<T: Hash> Hash for PersistentList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistentList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for PersistentList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "(")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, " ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, ")")
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_display_empty_list() {
        let list: PersistentList<i32> = PersistentList::new();
        assert_eq!(format!("{list}"), "()");
    }

    #[rstest]
    fn test_display_multiple_elements_list() {
        let list: PersistentList<i32> = (1..=3).collect();
        assert_eq!(format!("{list}"), "(1 2 3)");
    }

    #[rstest]
    fn test_new_creates_empty() {
        let list: PersistentList<i32> = PersistentList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.first(), None);
    }

    #[rstest]
    fn test_prepend_shares_suffix() {
        let base = PersistentList::new().prepend(2).prepend(1);
        let extended = base.prepend(0);

        let base_head = base.head.as_ref().unwrap();
        let shared = extended.head.as_ref().unwrap().next.as_ref().unwrap();
        assert!(ReferenceCounter::ptr_eq(base_head, shared));
        assert_eq!(base.len(), 2);
    }

    #[rstest]
    fn test_rest_of_single_element_is_canonical_empty() {
        let rest = PersistentList::singleton(1).rest();
        assert!(rest.is_empty());
        assert!(rest.head.is_none());
        assert_eq!(rest, PersistentList::<i32>::new());
    }

    #[rstest]
    fn test_rest_of_empty_is_empty() {
        let list: PersistentList<i32> = PersistentList::new();
        assert!(list.rest().is_empty());
    }

    #[rstest]
    fn test_get() {
        let list: PersistentList<i32> = (1..=3).collect();
        assert_eq!(list.get(0), Some(&1));
        assert_eq!(list.get(2), Some(&3));
        assert_eq!(list.get(3), None);
    }

    #[rstest]
    fn test_iter_is_exact_size() {
        let list: PersistentList<i32> = (1..=4).collect();
        let mut iterator = list.iter();
        assert_eq!(iterator.len(), 4);
        iterator.next();
        assert_eq!(iterator.len(), 3);
    }

    #[rstest]
    fn test_reverse() {
        let list: PersistentList<i32> = (1..=3).collect();
        let reversed = list.reverse();
        let collected: Vec<&i32> = reversed.iter().collect();
        assert_eq!(collected, vec![&3, &2, &1]);
        assert_eq!(list.len(), 3);
    }

    #[rstest]
    fn test_eq_ignores_physical_chain() {
        let built = PersistentList::new().prepend(3).prepend(2).prepend(1);
        let collected: PersistentList<i32> = (1..=3).collect();
        let shorter: PersistentList<i32> = (1..=2).collect();
        assert_eq!(built, collected);
        assert_ne!(built, shorter);
    }

    #[rstest]
    fn test_sequence_count_is_exact() {
        let list: PersistentList<i32> = (0..10).collect();
        assert_eq!(Sequence::count(&list), Some(10));
        assert_eq!(Sequence::count(&list.rest()), Some(9));
    }

    #[rstest]
    fn test_drop_long_list_does_not_overflow() {
        let list: PersistentList<u32> = (0..200_000).collect();
        assert_eq!(list.len(), 200_000);
        drop(list);
    }

    #[rstest]
    fn test_drop_keeps_shared_suffix_alive() {
        let base: PersistentList<i32> = (1..=3).collect();
        let extended = base.prepend(0);
        drop(extended);
        let collected: Vec<&i32> = base.iter().collect();
        assert_eq!(collected, vec![&1, &2, &3]);
    }
}
