//! The sequence protocol.
//!
//! A [`Sequence`] is an immutable cursor offering `is_empty`, `first` and
//! `rest`, plus an optional exact `count`. Advancing never mutates the
//! structure a cursor points into; it returns a new cursor. Every collection
//! of this crate, and any foreign iterable adapted through [`IntoSequence`],
//! can be walked this way, so the algorithms in this module are written once
//! and work on all of them.
//!
//! # Examples
//!
//! ```rust
//! use momentum::{PersistentVector, list, reduce, seq, Sequence};
//!
//! let vector: PersistentVector<i32> = (1..=3).collect();
//! let cursor = seq(&vector);
//! assert_eq!(cursor.first(), Some(&1));
//! assert_eq!(cursor.rest().first(), Some(&2));
//!
//! assert_eq!(reduce(|sum, x| sum + x, 0, &vector), 6);
//! assert_eq!(reduce(|sum, x| sum + x, 0, list![1, 2, 3]), 6);
//! assert_eq!(reduce(|sum, x| sum + x, 0, &[1, 2, 3][..]), 6);
//! ```

mod adapters;
mod algorithms;

use std::fmt;

pub use adapters::{IteratedSeq, SliceSeq, iterated};
pub use algorithms::{
    conj, count, drop, drop_while, equiv, every, every_as, filter, filter_as, first, first_as,
    for_each, into, is_empty, last, map, map_as, merge, nth_rest, partition, partition_by, reduce,
    reduce_as, rest, second, seq, some, some_as, take, take_while, try_reduce,
};

/// An immutable cursor over the elements of a collection.
///
/// `Default` yields the canonical empty cursor of the type. `first` must
/// return `None` exactly when `is_empty` is `true`, and `rest` of an empty
/// cursor is empty again.
pub trait Sequence: Clone + Default {
    /// The element type.
    type Item;

    /// Returns `true` if no element is left.
    fn is_empty(&self) -> bool;

    /// Returns the element at the cursor position.
    fn first(&self) -> Option<&Self::Item>;

    /// Returns a cursor positioned after the first element.
    #[must_use]
    fn rest(&self) -> Self;

    /// Returns the number of elements left, if the cursor knows it in O(1).
    ///
    /// When `Some`, the value must be exact. Use [`count`] for a size that
    /// falls back to traversal.
    fn count(&self) -> Option<usize> {
        None
    }

    /// Returns an iterator yielding clones of the remaining elements.
    fn elements(&self) -> SequenceIter<Self>
    where
        Self::Item: Clone,
    {
        SequenceIter {
            cursor: self.clone(),
        }
    }
}

/// Writes the remaining elements of `cursor` as a debug list.
pub(crate) fn debug_sequence<S>(cursor: &S, formatter: &mut fmt::Formatter<'_>) -> fmt::Result
where
    S: Sequence,
    S::Item: fmt::Debug,
{
    let mut entries = formatter.debug_list();
    let mut cursor = cursor.clone();
    while let Some(element) = cursor.first() {
        entries.entry(element);
        cursor = cursor.rest();
    }
    entries.finish()
}

/// Conversion into a [`Sequence`] cursor.
///
/// Implemented by every collection (by value and by reference), by every
/// cursor (as the identity, so `seq(seq(x))` is `seq(x)`), by slices, arrays,
/// `Vec`s and ranges, and by `Option`, where `None` becomes the canonical
/// empty cursor.
pub trait IntoSequence {
    /// The element type of the produced cursor.
    type Item;
    /// The cursor type.
    type Seq: Sequence<Item = Self::Item>;

    /// Returns a cursor positioned at the first element.
    fn into_seq(self) -> Self::Seq;
}

impl<X> IntoSequence for Option<X>
where
    X: IntoSequence,
{
    type Item = X::Item;
    type Seq = X::Seq;

    fn into_seq(self) -> X::Seq {
        self.map_or_else(<X::Seq as Default>::default, |x| x.into_seq())
    }
}

/// Adds one element to a collection, returning the new collection.
///
/// Where the element lands is the collection's own business: a list
/// prepends, a vector appends, a map associates a key/value pair and a set
/// adds a member. [`into`] and [`merge`] are built on this.
pub trait Conj<T> {
    /// Returns a new collection containing `element`.
    #[must_use]
    fn conj(&self, element: T) -> Self;
}

/// An iterator over clones of the elements of a [`Sequence`].
///
/// Created by [`Sequence::elements`].
#[derive(Clone)]
pub struct SequenceIter<S> {
    cursor: S,
}

impl<S> Iterator for SequenceIter<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.cursor.first().cloned()?;
        self.cursor = self.cursor.rest();
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor
            .count()
            .map_or((0, None), |remaining| (remaining, Some(remaining)))
    }
}
