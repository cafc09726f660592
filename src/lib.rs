//! # momentum
//!
//! Immutable, value-semantic collections unified by one sequence protocol.
//!
//! ## Overview
//!
//! Every "mutating" operation returns a new collection. Older versions stay
//! valid and share most of their structure with the new one.
//!
//! - **Value cell**: [`Value`] holds one payload of any type with a checked
//!   downcast, so collections can store heterogeneous elements
//! - **Sequence protocol**: [`Sequence`] (`is_empty`, `first`, `rest`,
//!   optional `count`) and [`IntoSequence`] adapt every collection and any
//!   foreign iterable
//! - **Algorithms**: [`reduce`], [`map`], [`filter`], [`take`], [`drop`],
//!   [`partition`], [`into`], [`merge`] and friends, written once against the
//!   protocol
//! - **Persistent collections**: [`PersistentList`], [`PersistentVector`]
//!   (32-way trie with a tail buffer), [`PersistentArrayMap`] and
//!   [`PersistentArraySet`] (insertion-ordered, linear scan)
//!
//! ## Feature Flags
//!
//! - `arc`: share nodes through `Arc` instead of `Rc`, making collections
//!   `Send + Sync` so published versions can be read and derived from on
//!   several threads
//!
//! ## Example
//!
//! ```rust
//! use momentum::{array_map, filter, list, merge, reduce, vector};
//!
//! assert_eq!(reduce(|sum, x| sum + x, 0, list![1, 2, 3]), 6);
//! assert_eq!(filter(|x| x % 2 == 0, vector![1, 2, 3, 4, 5]), list![2, 4]);
//!
//! let merged = merge(array_map! {1 => 3, 2 => 5}, array_map! {8 => 0, 12 => 23});
//! assert_eq!(merged.len(), 4);
//! assert_eq!(merged.get(&12), Some(&23));
//! ```
//!
//! ## Logging
//!
//! Structural events (trie growth and shrink, tail absorption, entry-table
//! copies) are emitted as `tracing` events at trace level. The library never
//! installs a subscriber.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the collection types and the protocol traits. The algorithm
/// functions are left out so that a glob import does not shadow
/// [`std::mem::drop`].
///
/// # Usage
///
/// ```rust
/// use momentum::prelude::*;
///
/// let vector: PersistentVector<i32> = (0..3).collect();
/// assert_eq!(vector.into_seq().first(), Some(&0));
/// ```
pub mod prelude {
    pub use crate::error::CollectionError;
    pub use crate::persistent::{
        PersistentArrayMap, PersistentArraySet, PersistentList, PersistentVector,
    };
    pub use crate::seq::{Conj, IntoSequence, Sequence};
    pub use crate::value::Value;
}

mod error;
mod macros;
pub mod persistent;
pub mod seq;
mod value;

pub use error::CollectionError;
pub use persistent::{PersistentArrayMap, PersistentArraySet, PersistentList, PersistentVector};
pub use seq::{
    Conj, IntoSequence, IteratedSeq, Sequence, SequenceIter, SliceSeq, conj, count, drop,
    drop_while, equiv, every, every_as, filter, filter_as, first, first_as, for_each, into,
    is_empty, iterated, last, map, map_as, merge, nth_rest, partition, partition_by, reduce,
    reduce_as, rest, second, seq, some, some_as, take, take_while, try_reduce,
};
pub use value::{Shareable, Value};
