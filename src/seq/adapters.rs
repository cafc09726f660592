//! Cursors over foreign collections.
//!
//! [`SliceSeq`] walks borrowed slices, arrays and `Vec`s in place.
//! [`IteratedSeq`] materialises an arbitrary iterable once into shared
//! storage, so that its cursors can be cloned and advanced independently.

use std::fmt;
use std::ops::{Range, RangeInclusive};

use super::{IntoSequence, Sequence, debug_sequence, equiv};
use crate::persistent::ReferenceCounter;

// =============================================================================
// SliceSeq
// =============================================================================

/// A cursor over a borrowed slice.
///
/// # Examples
///
/// ```rust
/// use momentum::{Sequence, seq};
///
/// let numbers = [1, 2, 3];
/// let cursor = seq(&numbers);
/// assert_eq!(cursor.first(), Some(&1));
/// assert_eq!(cursor.rest().rest().first(), Some(&3));
/// assert!(cursor.rest().rest().rest().is_empty());
/// ```
pub struct SliceSeq<'a, T> {
    elements: &'a [T],
}

impl<'a, T> SliceSeq<'a, T> {
    /// Creates a cursor at the start of `elements`.
    #[inline]
    #[must_use]
    pub const fn new(elements: &'a [T]) -> Self {
        Self { elements }
    }

    /// Returns the elements not yet consumed.
    #[inline]
    #[must_use]
    pub const fn as_slice(&self) -> &'a [T] {
        self.elements
    }
}

impl<T> Clone for SliceSeq<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceSeq<'_, T> {}

impl<T> Default for SliceSeq<'_, T> {
    #[inline]
    fn default() -> Self {
        Self { elements: &[] }
    }
}

impl<T> Sequence for SliceSeq<'_, T> {
    type Item = T;

    #[inline]
    fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    #[inline]
    fn rest(&self) -> Self {
        self.elements
            .split_first()
            .map_or_else(Self::default, |(_, rest)| Self::new(rest))
    }

    #[inline]
    fn count(&self) -> Option<usize> {
        Some(self.elements.len())
    }
}

impl<T: fmt::Debug> fmt::Debug for SliceSeq<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.elements).finish()
    }
}

impl<T, S> PartialEq<S> for SliceSeq<'_, T>
where
    S: IntoSequence + Clone,
    T: PartialEq<S::Item>,
{
    fn eq(&self, other: &S) -> bool {
        equiv(*self, other.clone())
    }
}

impl<'a, T> IntoSequence for SliceSeq<'a, T> {
    type Item = T;
    type Seq = Self;

    #[inline]
    fn into_seq(self) -> Self {
        self
    }
}

impl<'a, T> IntoSequence for &'a [T] {
    type Item = T;
    type Seq = SliceSeq<'a, T>;

    #[inline]
    fn into_seq(self) -> SliceSeq<'a, T> {
        SliceSeq::new(self)
    }
}

impl<'a, T, const N: usize> IntoSequence for &'a [T; N] {
    type Item = T;
    type Seq = SliceSeq<'a, T>;

    #[inline]
    fn into_seq(self) -> SliceSeq<'a, T> {
        SliceSeq::new(self)
    }
}

impl<'a, T> IntoSequence for &'a Vec<T> {
    type Item = T;
    type Seq = SliceSeq<'a, T>;

    #[inline]
    fn into_seq(self) -> SliceSeq<'a, T> {
        SliceSeq::new(self)
    }
}

// =============================================================================
// IteratedSeq
// =============================================================================

/// A cursor over elements collected from an arbitrary iterable.
///
/// The elements are gathered once into shared storage; cloning or
/// advancing the cursor never copies them again.
pub struct IteratedSeq<T> {
    elements: ReferenceCounter<[T]>,
    offset: usize,
}

/// Adapts any iterable into a [`Sequence`].
///
/// # Examples
///
/// ```rust
/// use momentum::{iterated, reduce};
///
/// let words = "a bb ccc".split(' ').map(str::len);
/// assert_eq!(reduce(|total, length| total + length, 0, iterated(words)), 6);
/// ```
pub fn iterated<I>(iter: I) -> IteratedSeq<I::Item>
where
    I: IntoIterator,
{
    IteratedSeq {
        elements: iter.into_iter().collect(),
        offset: 0,
    }
}

impl<T> Clone for IteratedSeq<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            offset: self.offset,
        }
    }
}

impl<T> Default for IteratedSeq<T> {
    fn default() -> Self {
        Self {
            elements: ReferenceCounter::from(Vec::new()),
            offset: 0,
        }
    }
}

impl<T> Sequence for IteratedSeq<T> {
    type Item = T;

    #[inline]
    fn is_empty(&self) -> bool {
        self.offset >= self.elements.len()
    }

    #[inline]
    fn first(&self) -> Option<&T> {
        self.elements.get(self.offset)
    }

    fn rest(&self) -> Self {
        if Sequence::is_empty(self) {
            return self.clone();
        }
        Self {
            elements: self.elements.clone(),
            offset: self.offset + 1,
        }
    }

    #[inline]
    fn count(&self) -> Option<usize> {
        Some(self.elements.len().saturating_sub(self.offset))
    }
}

impl<T: fmt::Debug> fmt::Debug for IteratedSeq<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_sequence(self, formatter)
    }
}

impl<T, S> PartialEq<S> for IteratedSeq<T>
where
    S: IntoSequence + Clone,
    T: PartialEq<S::Item>,
{
    fn eq(&self, other: &S) -> bool {
        equiv(self.clone(), other.clone())
    }
}

impl<T> IntoSequence for IteratedSeq<T> {
    type Item = T;
    type Seq = Self;

    #[inline]
    fn into_seq(self) -> Self {
        self
    }
}

impl<T> IntoSequence for Vec<T> {
    type Item = T;
    type Seq = IteratedSeq<T>;

    fn into_seq(self) -> IteratedSeq<T> {
        IteratedSeq {
            elements: ReferenceCounter::from(self),
            offset: 0,
        }
    }
}

impl<T> IntoSequence for Range<T>
where
    Range<T>: Iterator<Item = T>,
{
    type Item = T;
    type Seq = IteratedSeq<T>;

    fn into_seq(self) -> IteratedSeq<T> {
        iterated(self)
    }
}

impl<T> IntoSequence for RangeInclusive<T>
where
    RangeInclusive<T>: Iterator<Item = T>,
{
    type Item = T;
    type Seq = IteratedSeq<T>;

    fn into_seq(self) -> IteratedSeq<T> {
        iterated(self)
    }
}
