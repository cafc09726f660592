//! Property-based tests for PersistentList and the sequence algorithms over it.

use momentum::persistent::{PersistentList, PersistentVector};
use momentum::{count, equiv, filter, into, map, partition, reduce, take};
use proptest::prelude::*;

// =============================================================================
// Strategy for generating PersistentList
// =============================================================================

/// Generates a `PersistentList<i32>` with up to `max_size` elements.
fn persistent_list_strategy(max_size: usize) -> impl Strategy<Value = PersistentList<i32>> {
    prop::collection::vec(any::<i32>(), 0..max_size).prop_map(|vector| vector.into_iter().collect())
}

fn small_list() -> impl Strategy<Value = PersistentList<i32>> {
    persistent_list_strategy(40)
}

proptest! {
    #[test]
    fn prop_len_matches_count(list in small_list()) {
        prop_assert_eq!(list.len(), list.iter().count());
        prop_assert_eq!(count(&list), list.len());
    }

    #[test]
    fn prop_prepend_then_rest_is_identity(list in small_list(), element: i32) {
        let extended = list.prepend(element);
        prop_assert_eq!(extended.first(), Some(&element));
        prop_assert_eq!(extended.rest(), list);
    }

    #[test]
    fn prop_reverse_is_involution(list in small_list()) {
        prop_assert_eq!(list.reverse().reverse(), list);
    }

    #[test]
    fn prop_map_preserves_length_and_order(list in small_list()) {
        let mapped = map(|x| i64::from(*x) * 2, &list);
        prop_assert_eq!(mapped.len(), list.len());
        prop_assert!(equiv(&mapped, list.iter().map(|x| i64::from(*x) * 2).collect::<Vec<_>>()));
    }

    #[test]
    fn prop_filter_matches_iterator_filter(list in small_list()) {
        let kept = filter(|x| x % 3 == 0, &list);
        let expected: Vec<i32> = list.iter().copied().filter(|x| x % 3 == 0).collect();
        prop_assert!(equiv(&kept, expected));
    }

    #[test]
    fn prop_take_never_exceeds_n(list in small_list(), n in 0usize..50) {
        prop_assert_eq!(take(n, &list).len(), n.min(list.len()));
    }

    #[test]
    fn prop_partition_covers_complete_groups(list in small_list(), n in 1usize..6) {
        let groups = partition(n, &list);
        prop_assert_eq!(groups.len(), list.len() / n);
        prop_assert!(groups.iter().all(|group| group.len() == n));
    }

    #[test]
    fn prop_into_vector_preserves_order(list in small_list()) {
        let vector = into(PersistentVector::new(), &list);
        prop_assert!(equiv(&vector, &list));
        prop_assert_eq!(vector.len(), list.len());
    }

    #[test]
    fn prop_reduce_matches_iterator_sum(list in small_list()) {
        let total = reduce(|sum, x| sum + i64::from(*x), 0_i64, &list);
        prop_assert_eq!(total, list.iter().map(|x| i64::from(*x)).sum::<i64>());
    }
}
