//! Persistent (immutable) collections.
//!
//! Every collection in this module is a value: "mutating" operations
//! return a new collection and leave the original, and anybody holding it,
//! untouched. Unchanged structure is shared between versions instead of
//! copied:
//!
//! - [`PersistentList`]: singly-linked list, O(1) prepend, shares suffixes
//! - [`PersistentVector`]: 32-way trie plus tail buffer, O(1) amortized append,
//!   O(log32 N) indexed read and update by path copying
//! - [`PersistentArrayMap`]: insertion-ordered association table with linear
//!   lookup; every update copies the entry table
//! - [`PersistentArraySet`]: a set backed by [`PersistentArrayMap`]
//!
//! All of them implement the [`Sequence`](crate::Sequence) protocol through
//! [`IntoSequence`](crate::IntoSequence), so the generic algorithms in
//! [`crate::seq`] work on each of them.
//!
//! # Examples
//!
//! ```rust
//! use momentum::persistent::PersistentVector;
//!
//! let vector: PersistentVector<i32> = (0..100).collect();
//! assert_eq!(vector.get(50), Some(&50));
//!
//! // Structural sharing: the original vector is preserved
//! let updated = vector.assoc(50, 999).unwrap();
//! assert_eq!(vector.get(50), Some(&50));
//! assert_eq!(updated.get(50), Some(&999));
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod array_map;
mod array_set;
mod list;
mod vector;

pub use array_map::KeyEquality;
pub use array_map::KeySeq;
pub use array_map::MapSeq;
pub use array_map::PersistentArrayMap;
pub use array_map::PersistentArrayMapIterator;
pub use array_map::ValSeq;
pub use array_map::ValueEquality;
pub use array_set::PersistentArraySet;
pub use array_set::PersistentArraySetIterator;
pub use list::PersistentList;
pub use list::PersistentListIterator;
pub use vector::PersistentVector;
pub use vector::PersistentVectorIterator;
pub use vector::VectorSeq;

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(PersistentList<i32>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(PersistentVector<crate::Value>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(PersistentArrayMap<String, crate::Value>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(PersistentArraySet<i32>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(PersistentVector<i32>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod reference_counter_tests {
    use super::ReferenceCounter;
    use rstest::rstest;

    #[rstest]
    fn test_reference_counter_clone() {
        let reference_counter: ReferenceCounter<i32> = ReferenceCounter::new(42);
        let reference_counter_clone = reference_counter.clone();
        assert_eq!(*reference_counter, *reference_counter_clone);
    }

    #[rstest]
    fn test_reference_counter_strong_count() {
        let reference_counter: ReferenceCounter<i32> = ReferenceCounter::new(42);
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 1);
        let reference_counter_clone = reference_counter.clone();
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 2);
        drop(reference_counter_clone);
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 1);
    }
}
