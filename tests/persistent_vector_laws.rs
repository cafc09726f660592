//! Property-based tests for PersistentVector laws.
//!
//! This module verifies the indexing, update and sharing laws of
//! PersistentVector using proptest.

use momentum::persistent::PersistentVector;
use momentum::{Sequence, count, seq};
use proptest::prelude::*;

proptest! {
    /// Building by appending then reading back by index is the identity.
    #[test]
    fn prop_conj_nth_round_trip(elements in prop::collection::vec(any::<i32>(), 0..2100)) {
        let vector = elements
            .iter()
            .fold(PersistentVector::new(), |vector, element| vector.conj(*element));

        prop_assert_eq!(vector.len(), elements.len());
        for (index, element) in elements.iter().enumerate() {
            prop_assert_eq!(vector.nth(index), Ok(element));
        }
        prop_assert!(vector.nth(elements.len()).is_err());
    }

    /// Collecting and appending one by one produce equal vectors.
    #[test]
    fn prop_from_iter_equals_conj(elements in prop::collection::vec(any::<i16>(), 0..1200)) {
        let collected: PersistentVector<i16> = elements.iter().copied().collect();
        let appended = elements
            .iter()
            .fold(PersistentVector::new(), |vector, element| vector.conj(*element));
        prop_assert_eq!(collected, appended);
    }

    /// assoc changes the target index and nothing else.
    #[test]
    fn prop_assoc_law(
        elements in prop::collection::vec(any::<i32>(), 1..1500),
        seed: usize,
        new_value: i32
    ) {
        let vector: PersistentVector<i32> = elements.iter().copied().collect();
        let target = seed % elements.len();
        let updated = vector.assoc(target, new_value).unwrap();

        prop_assert_eq!(updated.get(target), Some(&new_value));
        for index in (0..elements.len()).filter(|index| *index != target) {
            prop_assert_eq!(updated.get(index), vector.get(index));
        }
        prop_assert_eq!(vector.get(target), Some(&elements[target]));
    }

    /// pop undoes conj.
    #[test]
    fn prop_conj_pop_law(elements in prop::collection::vec(any::<i32>(), 0..1500), extra: i32) {
        let vector: PersistentVector<i32> = elements.iter().copied().collect();
        prop_assert_eq!(vector.conj(extra).pop(), Some(vector));
    }

    /// The cursor visits the same elements as the borrowing iterator.
    #[test]
    fn prop_seq_matches_iter(elements in prop::collection::vec(any::<u8>(), 0..300)) {
        let vector: PersistentVector<u8> = elements.iter().copied().collect();
        let walked: Vec<u8> = seq(&vector).elements().collect();
        let iterated: Vec<u8> = vector.iter().copied().collect();
        prop_assert_eq!(&walked, &iterated);
        prop_assert_eq!(walked, elements);
        prop_assert_eq!(count(&vector), vector.len());
    }
}
