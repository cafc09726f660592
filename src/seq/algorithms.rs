//! Algorithms written once against the [`Sequence`] protocol.
//!
//! Every function takes its callback first and the sequence last, accepts
//! anything implementing [`IntoSequence`], and walks it with `first`/`rest`.
//! Functions that build a new sequence return a [`PersistentList`] in input
//! order.
//!
//! The `_as` variants work on sequences of [`Value`] and downcast each
//! element to a concrete type before handing it to the callback. A cell
//! holding another type stops the walk with
//! [`CollectionError::TypeMismatch`].

use std::any::Any;

use smallvec::SmallVec;

use super::{Conj, IntoSequence, Sequence};
use crate::error::CollectionError;
use crate::persistent::PersistentList;
use crate::value::Value;

// =============================================================================
// Access
// =============================================================================

/// Adapts `x` into a [`Sequence`] cursor.
///
/// `seq` is idempotent: a cursor converts into itself.
///
/// # Examples
///
/// ```rust
/// use momentum::{Sequence, list, seq};
///
/// let numbers = list![1, 2, 3];
/// assert_eq!(seq(seq(&numbers)), seq(&numbers));
/// assert!(seq(None::<Vec<i32>>).is_empty());
/// ```
#[inline]
pub fn seq<X: IntoSequence>(x: X) -> X::Seq {
    x.into_seq()
}

/// Returns `true` if `x` has no elements.
#[inline]
pub fn is_empty<X: IntoSequence>(x: X) -> bool {
    x.into_seq().is_empty()
}

/// Returns a clone of the first element of `x`.
#[inline]
pub fn first<X>(x: X) -> Option<X::Item>
where
    X: IntoSequence,
    X::Item: Clone,
{
    x.into_seq().first().cloned()
}

/// Returns the first element of a sequence of [`Value`]s as a `T`.
///
/// # Errors
///
/// Returns [`CollectionError::TypeMismatch`] when the first cell does not
/// hold a `T`. An empty sequence yields `Ok(None)`.
///
/// # Examples
///
/// ```rust
/// use momentum::{Value, first_as, list};
///
/// let cells = list![Value::new(1_i32), Value::new("two")];
/// assert_eq!(first_as::<i32>(&cells), Ok(Some(1)));
/// assert!(first_as::<f64>(&cells).is_err());
/// ```
pub fn first_as<T>(x: impl IntoSequence<Item = Value>) -> Result<Option<T>, CollectionError>
where
    T: Any + Clone,
{
    x.into_seq()
        .first()
        .map(|cell| cell.get::<T>().cloned())
        .transpose()
}

/// Returns a clone of the second element of `x`.
#[inline]
pub fn second<X>(x: X) -> Option<X::Item>
where
    X: IntoSequence,
    X::Item: Clone,
{
    x.into_seq().rest().first().cloned()
}

/// Returns a clone of the last element of `x`, walking the whole sequence.
pub fn last<X>(x: X) -> Option<X::Item>
where
    X: IntoSequence,
    X::Item: Clone,
{
    let mut cursor = x.into_seq();
    loop {
        let next = cursor.rest();
        if next.is_empty() {
            return cursor.first().cloned();
        }
        cursor = next;
    }
}

/// Returns a cursor past the first element of `x`.
#[inline]
pub fn rest<X: IntoSequence>(x: X) -> X::Seq {
    x.into_seq().rest()
}

/// Returns a cursor past the first `n` elements of `x`.
///
/// Running past the end yields an empty cursor.
pub fn nth_rest<X: IntoSequence>(n: usize, x: X) -> X::Seq {
    let mut cursor = x.into_seq();
    for _ in 0..n {
        if cursor.is_empty() {
            break;
        }
        cursor = cursor.rest();
    }
    cursor
}

/// Returns the number of elements in `x`.
///
/// O(1) when the cursor knows its size, otherwise a full traversal.
///
/// # Examples
///
/// ```rust
/// use momentum::{count, iterated, vector};
///
/// assert_eq!(count(&vector![1, 2, 3]), 3);
/// assert_eq!(count(iterated("abcd".chars())), 4);
/// ```
pub fn count<X: IntoSequence>(x: X) -> usize {
    let mut cursor = x.into_seq();
    if let Some(size) = cursor.count() {
        return size;
    }
    let mut size = 0;
    while !cursor.is_empty() {
        size += 1;
        cursor = cursor.rest();
    }
    size
}

// =============================================================================
// Folds
// =============================================================================

/// Left fold over `x`, starting from `init`.
///
/// # Examples
///
/// ```rust
/// use momentum::{list, map, reduce, vector};
///
/// assert_eq!(reduce(|sum, x| sum + x, 0, list![1, 2, 3]), 6);
/// assert_eq!(reduce(|sum, x| sum + x, 0, map(|x| x + 1, vector![1, 2, 3])), 9);
/// ```
pub fn reduce<X, B, F>(mut f: F, init: B, x: X) -> B
where
    X: IntoSequence,
    F: FnMut(B, &X::Item) -> B,
{
    let mut cursor = x.into_seq();
    let mut accumulator = init;
    while let Some(element) = cursor.first() {
        accumulator = f(accumulator, element);
        cursor = cursor.rest();
    }
    accumulator
}

/// Left fold that stops at the first error returned by `f`.
///
/// # Errors
///
/// Returns the first error produced by `f`.
pub fn try_reduce<X, B, E, F>(mut f: F, init: B, x: X) -> Result<B, E>
where
    X: IntoSequence,
    F: FnMut(B, &X::Item) -> Result<B, E>,
{
    let mut cursor = x.into_seq();
    let mut accumulator = init;
    while let Some(element) = cursor.first() {
        accumulator = f(accumulator, element)?;
        cursor = cursor.rest();
    }
    Ok(accumulator)
}

/// Left fold over a sequence of [`Value`]s, each downcast to `T`.
///
/// # Errors
///
/// Returns [`CollectionError::TypeMismatch`] at the first cell that does not
/// hold a `T`.
///
/// # Examples
///
/// ```rust
/// use momentum::{Value, list, reduce_as};
///
/// let cells = list![Value::new(1_i32), Value::new(2_i32), Value::new(3_i32)];
/// assert_eq!(reduce_as(|sum, x: &i32| sum + x, 0, &cells), Ok(6));
/// assert!(reduce_as(|sum, x: &f64| sum + x, 0.0, &cells).is_err());
/// ```
pub fn reduce_as<T, B>(
    mut f: impl FnMut(B, &T) -> B,
    init: B,
    x: impl IntoSequence<Item = Value>,
) -> Result<B, CollectionError>
where
    T: Any,
{
    try_reduce(
        |accumulator, cell: &Value| Ok(f(accumulator, cell.get::<T>()?)),
        init,
        x,
    )
}

/// Calls `f` on every element of `x`, in order.
pub fn for_each<X, F>(mut f: F, x: X)
where
    X: IntoSequence,
    F: FnMut(&X::Item),
{
    reduce(|(), element| f(element), (), x);
}

// =============================================================================
// Transformations
// =============================================================================

/// Applies `f` to every element of `x`.
pub fn map<X, U, F>(mut f: F, x: X) -> PersistentList<U>
where
    X: IntoSequence,
    F: FnMut(&X::Item) -> U,
{
    let mapped = reduce(
        |mut mapped: Vec<U>, element| {
            mapped.push(f(element));
            mapped
        },
        Vec::new(),
        x,
    );
    PersistentList::from_ordered(mapped)
}

/// Applies `f` to every element of a sequence of [`Value`]s downcast to `T`.
///
/// # Errors
///
/// Returns [`CollectionError::TypeMismatch`] at the first cell that does not
/// hold a `T`.
pub fn map_as<T, U>(
    mut f: impl FnMut(&T) -> U,
    x: impl IntoSequence<Item = Value>,
) -> Result<PersistentList<U>, CollectionError>
where
    T: Any,
{
    let mapped = try_reduce(
        |mut mapped: Vec<U>, cell: &Value| {
            mapped.push(f(cell.get::<T>()?));
            Ok(mapped)
        },
        Vec::new(),
        x,
    )?;
    Ok(PersistentList::from_ordered(mapped))
}

/// Keeps the elements of `x` satisfying `predicate`, in their original order.
///
/// # Examples
///
/// ```rust
/// use momentum::{filter, list, vector};
///
/// let evens = filter(|x| x % 2 == 0, vector![1, 2, 3, 4, 5]);
/// assert_eq!(evens, list![2, 4]);
/// ```
pub fn filter<X, P>(mut predicate: P, x: X) -> PersistentList<X::Item>
where
    X: IntoSequence,
    X::Item: Clone,
    P: FnMut(&X::Item) -> bool,
{
    let kept = reduce(
        |mut kept: Vec<X::Item>, element| {
            if predicate(element) {
                kept.push(element.clone());
            }
            kept
        },
        Vec::new(),
        x,
    );
    PersistentList::from_ordered(kept)
}

/// Keeps the cells holding a `T` that satisfies `predicate`, as a list of `T`.
///
/// # Errors
///
/// Returns [`CollectionError::TypeMismatch`] at the first cell that does not
/// hold a `T`.
pub fn filter_as<T>(
    mut predicate: impl FnMut(&T) -> bool,
    x: impl IntoSequence<Item = Value>,
) -> Result<PersistentList<T>, CollectionError>
where
    T: Any + Clone,
{
    let kept = try_reduce(
        |mut kept: Vec<T>, cell: &Value| {
            let element = cell.get::<T>()?;
            if predicate(element) {
                kept.push(element.clone());
            }
            Ok(kept)
        },
        Vec::new(),
        x,
    )?;
    Ok(PersistentList::from_ordered(kept))
}

/// Returns the first `n` elements of `x`, or all of them if there are fewer.
pub fn take<X>(n: usize, x: X) -> PersistentList<X::Item>
where
    X: IntoSequence,
    X::Item: Clone,
{
    take_while_counted(n, |_| true, x)
}

/// Returns the leading elements of `x` satisfying `predicate`.
pub fn take_while<X, P>(predicate: P, x: X) -> PersistentList<X::Item>
where
    X: IntoSequence,
    X::Item: Clone,
    P: FnMut(&X::Item) -> bool,
{
    take_while_counted(usize::MAX, predicate, x)
}

fn take_while_counted<X, P>(limit: usize, mut predicate: P, x: X) -> PersistentList<X::Item>
where
    X: IntoSequence,
    X::Item: Clone,
    P: FnMut(&X::Item) -> bool,
{
    let mut taken = Vec::new();
    let mut cursor = x.into_seq();
    while taken.len() < limit
        && let Some(element) = cursor.first()
        && predicate(element)
    {
        taken.push(element.clone());
        cursor = cursor.rest();
    }
    PersistentList::from_ordered(taken)
}

/// Returns a cursor past the first `n` elements of `x`.
///
/// Dropping past the end yields an empty cursor.
///
/// # Examples
///
/// ```rust
/// use momentum::{Sequence, drop, vector};
///
/// let numbers = vector![1, 2, 3];
/// assert_eq!(drop(2, &numbers).first(), Some(&3));
/// assert!(drop(5, &numbers).is_empty());
/// ```
#[inline]
pub fn drop<X: IntoSequence>(n: usize, x: X) -> X::Seq {
    nth_rest(n, x)
}

/// Returns a cursor at the first element of `x` failing `predicate`.
pub fn drop_while<X, P>(mut predicate: P, x: X) -> X::Seq
where
    X: IntoSequence,
    P: FnMut(&X::Item) -> bool,
{
    let mut cursor = x.into_seq();
    while cursor.first().is_some_and(&mut predicate) {
        cursor = cursor.rest();
    }
    cursor
}

// =============================================================================
// Predicates
// =============================================================================

/// Returns `true` if every element of `x` satisfies `predicate`.
///
/// Stops at the first failure. An empty sequence satisfies any predicate.
pub fn every<X, P>(mut predicate: P, x: X) -> bool
where
    X: IntoSequence,
    P: FnMut(&X::Item) -> bool,
{
    let mut cursor = x.into_seq();
    while let Some(element) = cursor.first() {
        if !predicate(element) {
            return false;
        }
        cursor = cursor.rest();
    }
    true
}

/// [`every`] over a sequence of [`Value`]s downcast to `T`.
///
/// # Errors
///
/// Returns [`CollectionError::TypeMismatch`] at the first visited cell that
/// does not hold a `T`.
pub fn every_as<T>(
    mut predicate: impl FnMut(&T) -> bool,
    x: impl IntoSequence<Item = Value>,
) -> Result<bool, CollectionError>
where
    T: Any,
{
    let mut cursor = x.into_seq();
    while let Some(cell) = cursor.first() {
        if !predicate(cell.get::<T>()?) {
            return Ok(false);
        }
        cursor = cursor.rest();
    }
    Ok(true)
}

/// Returns the first element of `x` satisfying `predicate`.
///
/// # Examples
///
/// ```rust
/// use momentum::{list, some};
///
/// assert_eq!(some(|x| *x > 3, list![1, 2, 3, 4, 5]), Some(4));
/// assert_eq!(some(|x| *x > 9, list![1, 2, 3]), None);
/// ```
pub fn some<X, P>(mut predicate: P, x: X) -> Option<X::Item>
where
    X: IntoSequence,
    X::Item: Clone,
    P: FnMut(&X::Item) -> bool,
{
    let mut cursor = x.into_seq();
    while let Some(element) = cursor.first() {
        if predicate(element) {
            return Some(element.clone());
        }
        cursor = cursor.rest();
    }
    None
}

/// [`some`] over a sequence of [`Value`]s downcast to `T`.
///
/// # Errors
///
/// Returns [`CollectionError::TypeMismatch`] at the first visited cell that
/// does not hold a `T`.
pub fn some_as<T>(
    mut predicate: impl FnMut(&T) -> bool,
    x: impl IntoSequence<Item = Value>,
) -> Result<Option<T>, CollectionError>
where
    T: Any + Clone,
{
    let mut cursor = x.into_seq();
    while let Some(cell) = cursor.first() {
        let element = cell.get::<T>()?;
        if predicate(element) {
            return Ok(Some(element.clone()));
        }
        cursor = cursor.rest();
    }
    Ok(None)
}

// =============================================================================
// Building
// =============================================================================

/// Returns `collection` with `element` added the way the collection adds.
#[inline]
pub fn conj<C, T>(collection: &C, element: T) -> C
where
    C: Conj<T>,
{
    collection.conj(element)
}

/// Adds every element of `from` to `to` with [`Conj`].
///
/// # Examples
///
/// ```rust
/// use momentum::{PersistentVector, into, list};
///
/// let vector = into(PersistentVector::new(), list![1, 2, 3, 4]);
/// assert_eq!(vector, list![1, 2, 3, 4]);
///
/// // A list adds at the front
/// assert_eq!(into(list![0], list![1, 2]), list![2, 1, 0]);
/// ```
pub fn into<C, X>(to: C, from: X) -> C
where
    C: Conj<X::Item>,
    X: IntoSequence,
    X::Item: Clone,
{
    reduce(
        |collection: C, element| collection.conj(element.clone()),
        to,
        from,
    )
}

/// Adds every element of `b` to `a`; on maps, `b` wins on shared keys.
///
/// # Examples
///
/// ```rust
/// use momentum::{array_map, merge};
///
/// let merged = merge(array_map! {1 => 3, 2 => 5}, &array_map! {8 => 0, 2 => 23});
/// assert_eq!(merged.len(), 3);
/// assert_eq!(merged.get(&2), Some(&23));
/// ```
pub fn merge<C, X>(a: C, b: X) -> C
where
    C: Conj<X::Item>,
    X: IntoSequence,
    X::Seq: IntoSequence<Item = X::Item>,
    X::Item: Clone,
{
    into(a, seq(b))
}

/// Splits `x` into groups of exactly `n` elements.
///
/// A trailing group with fewer than `n` elements is dropped, and a group
/// size of zero yields no groups.
///
/// # Examples
///
/// ```rust
/// use momentum::{list, partition};
///
/// let groups = partition(2, list![1, 2, 3, 4, 5]);
/// assert_eq!(groups, list![list![1, 2], list![3, 4]]);
/// ```
pub fn partition<X>(n: usize, x: X) -> PersistentList<PersistentList<X::Item>>
where
    X: IntoSequence,
    X::Item: Clone,
{
    if n == 0 {
        return PersistentList::new();
    }
    let mut group: SmallVec<[X::Item; 8]> = SmallVec::new();
    let groups = reduce(
        |mut groups: Vec<PersistentList<X::Item>>, element| {
            group.push(element.clone());
            if group.len() == n {
                groups.push(PersistentList::from_ordered(group.drain(..)));
            }
            groups
        },
        Vec::new(),
        x,
    );
    PersistentList::from_ordered(groups)
}

/// Splits `x` into runs of consecutive elements for which `f` returns the
/// same key.
///
/// # Examples
///
/// ```rust
/// use momentum::{list, partition_by};
///
/// let runs = partition_by(|x| x % 2 == 0, list![1, 3, 2, 4, 5]);
/// assert_eq!(runs, list![list![1, 3], list![2, 4], list![5]]);
/// ```
pub fn partition_by<X, K, F>(mut f: F, x: X) -> PersistentList<PersistentList<X::Item>>
where
    X: IntoSequence,
    X::Item: Clone,
    K: PartialEq,
    F: FnMut(&X::Item) -> K,
{
    let mut groups = Vec::new();
    let mut run: Vec<X::Item> = Vec::new();
    let mut run_key: Option<K> = None;
    let mut cursor = x.into_seq();
    while let Some(element) = cursor.first() {
        let key = f(element);
        if run_key.as_ref().is_some_and(|current| *current != key) {
            groups.push(PersistentList::from_ordered(std::mem::take(&mut run)));
        }
        run_key = Some(key);
        run.push(element.clone());
        cursor = cursor.rest();
    }
    if !run.is_empty() {
        groups.push(PersistentList::from_ordered(run));
    }
    PersistentList::from_ordered(groups)
}

// =============================================================================
// Equivalence
// =============================================================================

/// Returns `true` if `a` and `b` hold pairwise equal elements and end
/// together.
///
/// This is the equality used by every collection in the crate.
///
/// # Examples
///
/// ```rust
/// use momentum::{equiv, list, vector};
///
/// assert!(equiv(&list![1, 2, 3], &vector![1, 2, 3]));
/// assert!(!equiv(&list![1, 2, 3], &[1, 2]));
/// ```
pub fn equiv<A, B>(a: A, b: B) -> bool
where
    A: IntoSequence,
    B: IntoSequence,
    A::Item: PartialEq<B::Item>,
{
    let mut left = a.into_seq();
    let mut right = b.into_seq();
    if let (Some(left_count), Some(right_count)) = (left.count(), right.count())
        && left_count != right_count
    {
        return false;
    }
    loop {
        match (left.first(), right.first()) {
            (None, None) => return true,
            (Some(left_element), Some(right_element)) if left_element == right_element => {}
            _ => return false,
        }
        left = left.rest();
        right = right.rest();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistent::PersistentVector;
    use crate::{list, vector};
    use rstest::rstest;

    #[rstest]
    fn test_reduce_sums_list() {
        assert_eq!(reduce(|sum, x| sum + x, 0, list![1, 2, 3]), 6);
    }

    #[rstest]
    fn test_reduce_of_empty_is_init() {
        let empty: PersistentList<i32> = PersistentList::new();
        assert_eq!(reduce(|sum, x| sum + x, 42, empty), 42);
    }

    #[rstest]
    fn test_reduce_over_mapped_vector() {
        let mapped = map(|x| x + 1, vector![1, 2, 3]);
        assert_eq!(reduce(|sum, x| sum + x, 0, mapped), 9);
    }

    #[rstest]
    fn test_map_preserves_order() {
        let doubled = map(|x| x * 2, &[1, 2, 3]);
        assert_eq!(doubled, list![2, 4, 6]);
    }

    #[rstest]
    fn test_filter_keeps_order() {
        let evens = filter(|x| x % 2 == 0, vector![1, 2, 3, 4, 5]);
        assert_eq!(evens, list![2, 4]);
    }

    #[rstest]
    #[case(0, vec![])]
    #[case(2, vec![1, 2])]
    #[case(3, vec![1, 2, 3])]
    #[case(10, vec![1, 2, 3])]
    fn test_take(#[case] n: usize, #[case] expected: Vec<i32>) {
        assert!(equiv(take(n, list![1, 2, 3]), &expected));
    }

    #[rstest]
    fn test_take_while_stops_at_first_failure() {
        let taken = take_while(|x| *x < 3, list![1, 2, 3, 1]);
        assert_eq!(taken, list![1, 2]);
    }

    #[rstest]
    #[case(0, vec![1, 2, 3])]
    #[case(1, vec![2, 3])]
    #[case(3, vec![])]
    #[case(7, vec![])]
    fn test_drop(#[case] n: usize, #[case] expected: Vec<i32>) {
        assert!(equiv(drop(n, vector![1, 2, 3]), &expected));
    }

    #[rstest]
    fn test_drop_while_skips_leading_run() {
        let rest = drop_while(|x| *x < 3, list![1, 2, 3, 1]);
        assert_eq!(rest, list![3, 1]);
    }

    #[rstest]
    fn test_every_is_vacuously_true() {
        let empty: PersistentVector<i32> = PersistentVector::new();
        assert!(every(|_| false, &empty));
        assert!(every(|x| *x > 0, list![1, 2]));
        assert!(!every(|x| *x > 1, list![1, 2]));
    }

    #[rstest]
    fn test_every_short_circuits() {
        let mut visited = 0;
        let result = every(
            |x| {
                visited += 1;
                *x < 2
            },
            list![1, 2, 3, 4],
        );
        assert!(!result);
        assert_eq!(visited, 2);
    }

    #[rstest]
    fn test_some_returns_first_match() {
        assert_eq!(some(|x| *x > 3, list![1, 2, 3, 4, 5]), Some(4));
        assert_eq!(some(|x| *x > 5, list![1, 2, 3]), None);
    }

    #[rstest]
    fn test_partition_drops_incomplete_group() {
        let groups = partition(2, list![1, 2, 3, 4, 5]);
        assert_eq!(groups, list![list![1, 2], list![3, 4]]);
        let total = reduce(|sum, group| sum + reduce(|s, x| s + x, 0, group), 0, &groups);
        assert_eq!(total, 10);
    }

    #[rstest]
    fn test_partition_zero_is_empty() {
        assert!(partition(0, list![1, 2, 3]).is_empty());
    }

    #[rstest]
    fn test_partition_by_starts_group_on_key_change() {
        let runs = partition_by(|x| *x > 2, vector![1, 2, 3, 4, 1]);
        assert_eq!(runs, list![list![1, 2], list![3, 4], list![1]]);
    }

    #[rstest]
    fn test_into_vector_appends_in_order() {
        let vector = into(PersistentVector::new(), list![1, 2, 3, 4]);
        assert_eq!(vector, list![1, 2, 3, 4]);
    }

    #[rstest]
    fn test_into_list_prepends() {
        assert_eq!(into(PersistentList::new(), vector![1, 2, 3]), list![3, 2, 1]);
    }

    #[rstest]
    fn test_equiv_different_lengths() {
        assert!(!equiv(list![1, 2, 3], list![1, 2]));
        assert!(!equiv(list![1, 2], list![1, 2, 3]));
        assert!(equiv(list![1, 2, 3], vector![1, 2, 3]));
    }

    #[rstest]
    fn test_equiv_without_known_counts() {
        assert!(equiv(crate::seq::iterated(1..4), &[1, 2, 3]));
        assert!(!equiv(crate::seq::iterated(1..4), &[1, 2]));
    }

    #[rstest]
    fn test_count_falls_back_to_traversal() {
        #[derive(Clone, Default)]
        struct Countdown(u8);

        impl Sequence for Countdown {
            type Item = u8;

            fn is_empty(&self) -> bool {
                self.0 == 0
            }

            fn first(&self) -> Option<&u8> {
                if self.0 == 0 { None } else { Some(&self.0) }
            }

            fn rest(&self) -> Self {
                Self(self.0.saturating_sub(1))
            }
        }

        impl IntoSequence for Countdown {
            type Item = u8;
            type Seq = Self;

            fn into_seq(self) -> Self {
                self
            }
        }

        assert_eq!(count(Countdown(5)), 5);
        assert_eq!(last(Countdown(5)), Some(1));
        assert_eq!(second(Countdown(5)), Some(4));
    }

    #[rstest]
    fn test_first_second_last() {
        let numbers = vector![1, 2, 3];
        assert_eq!(first(&numbers), Some(1));
        assert_eq!(second(&numbers), Some(2));
        assert_eq!(last(&numbers), Some(3));
        let empty: PersistentList<i32> = PersistentList::new();
        assert_eq!(first(&empty), None);
        assert_eq!(last(&empty), None);
    }

    #[rstest]
    fn test_nth_rest() {
        assert_eq!(nth_rest(2, list![1, 2, 3]), list![3]);
        assert!(nth_rest(4, list![1, 2, 3]).is_empty());
    }

    #[rstest]
    fn test_for_each_visits_in_order() {
        let mut seen = Vec::new();
        for_each(|x| seen.push(*x), vector![3, 1, 2]);
        assert_eq!(seen, vec![3, 1, 2]);
    }

    #[rstest]
    fn test_try_reduce_stops_at_error() {
        let result: Result<i32, &str> = try_reduce(
            |sum, x| if *x < 3 { Ok(sum + x) } else { Err("too big") },
            0,
            list![1, 2, 3, 4],
        );
        assert_eq!(result, Err("too big"));
    }

    #[rstest]
    fn test_reduce_as_surfaces_type_mismatch() {
        let cells = list![Value::new(1_i32), Value::new(2_i32)];
        assert_eq!(reduce_as(|sum, x: &i32| sum + x, 0, &cells), Ok(3));
        assert_eq!(
            reduce_as(|sum, x: &f32| sum + x, 0.0, &cells),
            Err(CollectionError::TypeMismatch {
                expected: "f32",
                found: "i32",
            })
        );
    }

    #[rstest]
    fn test_typed_variants_over_values() {
        let cells = vector![Value::new(1_i32), Value::new(4_i32), Value::new(6_i32)];
        assert_eq!(map_as(|x: &i32| x * 10, &cells), Ok(list![10, 40, 60]));
        assert_eq!(filter_as(|x: &i32| x % 2 == 0, &cells), Ok(list![4, 6]));
        assert_eq!(every_as(|x: &i32| *x > 0, &cells), Ok(true));
        assert_eq!(some_as(|x: &i32| *x > 3, &cells), Ok(Some(4)));
        assert_eq!(first_as::<i32>(&cells), Ok(Some(1)));
        assert!(some_as(|x: &String| x.is_empty(), &cells).is_err());
    }

    #[rstest]
    fn test_seq_is_idempotent() {
        let numbers = vector![1, 2, 3];
        let once = seq(&numbers);
        let twice = seq(seq(&numbers));
        assert_eq!(twice, once);
        assert_eq!(seq(list![1, 2]), seq(seq(list![1, 2])));
    }

    #[rstest]
    fn test_exhausted_cursor_equals_empty_collection() {
        let numbers = vector![1, 2, 3];
        assert_eq!(drop(3, &numbers), PersistentVector::<i32>::new());
        assert_eq!(drop(5, &numbers), PersistentVector::<i32>::new());
        assert_eq!(rest(&vector![1]), PersistentVector::<i32>::new());
        assert_eq!(drop(1, &numbers), vector![2, 3]);
        assert_ne!(drop(1, &numbers), PersistentVector::<i32>::new());
    }

    #[rstest]
    fn test_merge_accepts_cursor_argument() {
        let merged = merge(vector![1, 2], drop(1, list![7, 8, 9]));
        assert_eq!(merged, vector![1, 2, 8, 9]);
        let merged = merge(list![0], seq(&vector![1, 2]));
        assert_eq!(merged, list![2, 1, 0]);
    }
}
