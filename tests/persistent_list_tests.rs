//! Unit tests for PersistentList.

use momentum::persistent::PersistentList;
use momentum::{Sequence, conj, count, list, seq};
use rstest::rstest;

#[rstest]
fn test_prepend_shares_and_preserves_original() {
    let base = list![2, 3];
    let extended = base.prepend(1);
    assert_eq!(extended, list![1, 2, 3]);
    assert_eq!(base, list![2, 3]);
}

#[rstest]
fn test_first_rest_count() {
    let numbers = list![1, 2, 3];
    assert_eq!(numbers.first(), Some(&1));
    assert_eq!(numbers.rest(), list![2, 3]);
    assert_eq!(count(&numbers), 3);
}

#[rstest]
fn test_rest_reaches_canonical_empty() {
    let numbers = list![1];
    let empty: PersistentList<i32> = PersistentList::new();
    assert_eq!(numbers.rest(), empty);
    assert!(numbers.rest().rest().is_empty());
}

#[rstest]
fn test_structurally_distinct_lists_are_equal() {
    let built = PersistentList::new().prepend(3).prepend(2).prepend(1);
    assert_eq!(built, list![1, 2, 3]);
    assert_ne!(built, list![1, 2]);
    assert_ne!(list![1, 2], built);
}

#[rstest]
fn test_conj_on_list_prepends() {
    assert_eq!(conj(&list![2, 3], 1), list![1, 2, 3]);
}

#[rstest]
fn test_seq_is_identity_on_list() {
    let numbers = list![1, 2, 3];
    assert_eq!(seq(&numbers), numbers);
    assert_eq!(seq(seq(&numbers)), numbers);
}

#[rstest]
fn test_reverse_and_get() {
    let numbers = list!['a', 'b', 'c'];
    assert_eq!(numbers.reverse(), list!['c', 'b', 'a']);
    assert_eq!(numbers.get(1), Some(&'b'));
    assert_eq!(numbers.get(3), None);
}

#[rstest]
fn test_sequence_elements_iterator() {
    let numbers = list![1, 2, 3];
    let cursor = seq(&numbers);
    assert_eq!(cursor.elements().size_hint(), (3, Some(3)));
    assert_eq!(cursor.elements().sum::<i32>(), 6);
}

#[rstest]
fn test_nested_lists_display() {
    let nested = list![list![1, 2], list![3]];
    assert_eq!(format!("{nested}"), "((1 2) (3))");
}
