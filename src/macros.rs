//! Literal constructors for the persistent collections.
//!
//! Each macro accepts a comma-separated element list (a trailing comma is
//! fine) and builds the collection through its `FromIterator` impl, so the
//! element type is inferred as for `vec!`.

/// Creates a [`PersistentList`](crate::persistent::PersistentList) holding
/// the given elements in order.
///
/// # Examples
///
/// ```
/// use momentum::list;
///
/// let numbers = list![1, 2, 3];
/// assert_eq!(numbers.first(), Some(&1));
/// assert_eq!(numbers.len(), 3);
///
/// let empty: momentum::PersistentList<i32> = list![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! list {
    ($($element:expr),* $(,)?) => {
        <$crate::persistent::PersistentList<_> as ::core::iter::FromIterator<_>>::from_iter([
            $($element),*
        ])
    };
}

/// Creates a [`PersistentVector`](crate::persistent::PersistentVector)
/// holding the given elements in order.
///
/// # Examples
///
/// ```
/// use momentum::vector;
///
/// let numbers = vector![1, 2, 3];
/// assert_eq!(numbers.nth(2), Ok(&3));
/// ```
#[macro_export]
macro_rules! vector {
    ($($element:expr),* $(,)?) => {
        <$crate::persistent::PersistentVector<_> as ::core::iter::FromIterator<_>>::from_iter([
            $($element),*
        ])
    };
}

/// Creates a [`PersistentArrayMap`](crate::persistent::PersistentArrayMap)
/// from `key => value` pairs, in order.
///
/// A repeated key keeps its first position and its last value.
///
/// # Examples
///
/// ```
/// use momentum::array_map;
///
/// let map = array_map! {"a" => 1, "b" => 2, "a" => 3};
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.get(&"a"), Some(&3));
/// ```
#[macro_export]
macro_rules! array_map {
    ($($key:expr => $value:expr),* $(,)?) => {
        <$crate::persistent::PersistentArrayMap<_, _> as ::core::iter::FromIterator<_>>::from_iter([
            $(($key, $value)),*
        ])
    };
}

/// Creates a [`PersistentArraySet`](crate::persistent::PersistentArraySet)
/// holding the given members in order of first appearance.
///
/// # Examples
///
/// ```
/// use momentum::hash_set;
///
/// let set = hash_set![3, 1, 3, 2];
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
/// ```
#[macro_export]
macro_rules! hash_set {
    ($($element:expr),* $(,)?) => {
        <$crate::persistent::PersistentArraySet<_> as ::core::iter::FromIterator<_>>::from_iter([
            $($element),*
        ])
    };
}
