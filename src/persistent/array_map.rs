//! Persistent (immutable) insertion-ordered association table.
//!
//! This module provides [`PersistentArrayMap`], a small-N map stored as a
//! flat array of entries.
//!
//! # Overview
//!
//! Lookups scan the entries linearly, comparing keys with a pluggable
//! [`KeyEquality`] strategy. Every `assoc` and `dissoc` that changes the map
//! copies the whole entry table: nothing is shared between versions except
//! the untouched original. In exchange the map keeps insertion order, which
//! its cursors and iterators expose.
//!
//! - O(N) `get`, `assoc`, `dissoc`
//! - O(1) `len`, `is_empty`, `keys`, `vals`
//!
//! # Examples
//!
//! ```rust
//! use momentum::persistent::PersistentArrayMap;
//!
//! let map = PersistentArrayMap::new().assoc("foo", 1).assoc("bar", 2);
//! assert_eq!(map.get(&"foo"), Some(&1));
//!
//! let smaller = map.dissoc(&"bar");
//! assert_eq!(smaller.len(), 1);
//! assert_eq!(smaller.get(&"bar"), None);
//! assert_eq!(map.len(), 2);
//! ```

use std::any::Any;
use std::fmt;
use std::iter::FromIterator;

use tracing::trace;

use super::ReferenceCounter;
use crate::error::CollectionError;
use crate::seq::{Conj, IntoSequence, Sequence, debug_sequence, equiv};
use crate::value::Value;

// =============================================================================
// Key Equality
// =============================================================================

/// Decides whether two keys name the same entry.
///
/// Any `Fn(&K, &K) -> bool` is a strategy, so a map can compare keys
/// case-insensitively, by a projection, and so on.
///
/// # Examples
///
/// ```rust
/// use momentum::persistent::PersistentArrayMap;
///
/// let map = PersistentArrayMap::with_equality(|a: &String, b: &String| a.eq_ignore_ascii_case(b))
///     .assoc("Key".to_string(), 1)
///     .assoc("KEY".to_string(), 2);
/// assert_eq!(map.len(), 1);
/// assert_eq!(map.get(&"key".to_string()), Some(&2));
/// ```
pub trait KeyEquality<K: ?Sized> {
    /// Returns `true` if `left` and `right` are the same key.
    fn equivalent(&self, left: &K, right: &K) -> bool;
}

/// The default strategy: keys are compared with `PartialEq`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValueEquality;

impl<K: PartialEq + ?Sized> KeyEquality<K> for ValueEquality {
    #[inline]
    fn equivalent(&self, left: &K, right: &K) -> bool {
        left == right
    }
}

impl<K: ?Sized, F> KeyEquality<K> for F
where
    F: Fn(&K, &K) -> bool,
{
    #[inline]
    fn equivalent(&self, left: &K, right: &K) -> bool {
        self(left, right)
    }
}

// =============================================================================
// PersistentArrayMap Definition
// =============================================================================

/// A persistent (immutable) map keeping its entries in insertion order.
///
/// # Time Complexity
///
/// | Operation  | Complexity |
/// |------------|------------|
/// | `new`      | O(1)       |
/// | `get`      | O(N)       |
/// | `assoc`    | O(N)       |
/// | `dissoc`   | O(N)       |
/// | `len`      | O(1)       |
/// | `keys`     | O(1)       |
///
/// # Examples
///
/// ```rust
/// use momentum::array_map;
///
/// let map = array_map! {1 => "one", 2 => "two"};
/// assert_eq!(map.get(&2), Some(&"two"));
/// assert_eq!(map.get_or(&3, &"none"), &"none");
/// ```
pub struct PersistentArrayMap<K, V, E = ValueEquality> {
    entries: ReferenceCounter<[(K, V)]>,
    equality: E,
}

impl<K, V> PersistentArrayMap<K, V> {
    /// Creates a new empty map comparing keys with `PartialEq`.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_equality(ValueEquality)
    }
}

impl<K, V, E> PersistentArrayMap<K, V, E> {
    /// Creates a new empty map comparing keys with `equality`.
    #[inline]
    #[must_use]
    pub fn with_equality(equality: E) -> Self {
        Self {
            entries: ReferenceCounter::from(Vec::new()),
            equality,
        }
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the key equality strategy.
    #[inline]
    pub const fn equality(&self) -> &E {
        &self.equality
    }

    /// Returns a cursor over the keys, in insertion order, sharing the
    /// map's storage.
    #[inline]
    #[must_use]
    pub fn keys(&self) -> KeySeq<K, V> {
        KeySeq(Entries::new(self.entries.clone()))
    }

    /// Returns a cursor over the values, in insertion order, sharing the
    /// map's storage.
    #[inline]
    #[must_use]
    pub fn vals(&self) -> ValSeq<K, V> {
        ValSeq(Entries::new(self.entries.clone()))
    }

    /// Returns an iterator over the entries in insertion order.
    #[inline]
    pub fn iter(&self) -> PersistentArrayMapIterator<'_, K, V> {
        PersistentArrayMapIterator {
            inner: self.entries.iter(),
        }
    }
}

impl<K, V, E: KeyEquality<K>> PersistentArrayMap<K, V, E> {
    /// Returns the position of `key` in insertion order.
    #[must_use]
    pub fn find(&self, key: &K) -> Option<usize> {
        self.entries
            .iter()
            .position(|(candidate, _)| self.equality.equivalent(candidate, key))
    }

    /// Returns the value associated with `key`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key).map(|index| &self.entries[index].1)
    }

    /// Returns the value associated with `key`, or `default` when absent.
    #[must_use]
    pub fn get_or<'a>(&'a self, key: &K, default: &'a V) -> &'a V {
        self.get(key).unwrap_or(default)
    }

    /// Returns `true` if the map has an entry for `key`.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }
}

impl<K, E: KeyEquality<K>> PersistentArrayMap<K, Value, E> {
    /// Returns the value associated with `key` downcast to `T`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::TypeMismatch`] when the entry exists but
    /// does not hold a `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use momentum::{Value, array_map};
    ///
    /// let map = array_map! {"answer" => Value::new(42_i32)};
    /// assert_eq!(map.get_as::<i32>(&"answer"), Ok(Some(&42)));
    /// assert_eq!(map.get_as::<i32>(&"question"), Ok(None));
    /// assert!(map.get_as::<String>(&"answer").is_err());
    /// ```
    pub fn get_as<T: Any>(&self, key: &K) -> Result<Option<&T>, CollectionError> {
        self.get(key).map(Value::get::<T>).transpose()
    }
}

impl<K, V, E> PersistentArrayMap<K, V, E>
where
    K: Clone,
    V: Clone,
    E: KeyEquality<K> + Clone,
{
    /// Returns a new map with `key` associated to `value`.
    ///
    /// An existing entry keeps its position; a new key goes last. The whole
    /// entry table is copied either way.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use momentum::persistent::PersistentArrayMap;
    ///
    /// let map = PersistentArrayMap::new().assoc(1, "a").assoc(2, "b").assoc(1, "c");
    /// let keys: Vec<&i32> = map.iter().map(|(key, _)| key).collect();
    /// assert_eq!(keys, vec![&1, &2]);
    /// assert_eq!(map.get(&1), Some(&"c"));
    /// ```
    #[must_use]
    pub fn assoc(&self, key: K, value: V) -> Self {
        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.extend_from_slice(&self.entries);

        match self.find(&key) {
            Some(index) => entries[index] = (key, value),
            None => entries.push((key, value)),
        }
        trace!(entries = entries.len(), "copied array map entries");

        Self {
            entries: ReferenceCounter::from(entries),
            equality: self.equality.clone(),
        }
    }

    /// Returns a new map without the entry for `key`.
    ///
    /// When `key` is absent the result shares this map's storage.
    #[must_use]
    pub fn dissoc(&self, key: &K) -> Self {
        let Some(index) = self.find(key) else {
            return self.clone();
        };

        let entries: Vec<(K, V)> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(position, _)| *position != index)
            .map(|(_, entry)| entry.clone())
            .collect();
        trace!(entries = entries.len(), "copied array map entries");

        Self {
            entries: ReferenceCounter::from(entries),
            equality: self.equality.clone(),
        }
    }
}

// =============================================================================
// Sequence Protocol
// =============================================================================

/// Shared cursor state over an entry table.
struct Entries<K, V> {
    entries: ReferenceCounter<[(K, V)]>,
    offset: usize,
}

impl<K, V> Entries<K, V> {
    const fn new(entries: ReferenceCounter<[(K, V)]>) -> Self {
        Self { entries, offset: 0 }
    }

    fn current(&self) -> Option<&(K, V)> {
        self.entries.get(self.offset)
    }

    fn advance(&self) -> Self {
        if self.offset >= self.entries.len() {
            return Self::default();
        }
        Self {
            entries: self.entries.clone(),
            offset: self.offset + 1,
        }
    }

    fn remaining(&self) -> usize {
        self.entries.len().saturating_sub(self.offset)
    }
}

impl<K, V> Clone for Entries<K, V> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            offset: self.offset,
        }
    }
}

impl<K, V> Default for Entries<K, V> {
    fn default() -> Self {
        Self::new(ReferenceCounter::from(Vec::new()))
    }
}

/// A [`Sequence`] cursor over the `(key, value)` entries of a map.
pub struct MapSeq<K, V>(Entries<K, V>);

/// A [`Sequence`] cursor over the keys of a map.
pub struct KeySeq<K, V>(Entries<K, V>);

/// A [`Sequence`] cursor over the values of a map.
pub struct ValSeq<K, V>(Entries<K, V>);

impl<K, V> Sequence for MapSeq<K, V> {
    type Item = (K, V);

    fn is_empty(&self) -> bool {
        self.0.remaining() == 0
    }

    fn first(&self) -> Option<&(K, V)> {
        self.0.current()
    }

    fn rest(&self) -> Self {
        Self(self.0.advance())
    }

    fn count(&self) -> Option<usize> {
        Some(self.0.remaining())
    }
}

impl<K, V> Sequence for KeySeq<K, V> {
    type Item = K;

    fn is_empty(&self) -> bool {
        self.0.remaining() == 0
    }

    fn first(&self) -> Option<&K> {
        self.0.current().map(|(key, _)| key)
    }

    fn rest(&self) -> Self {
        Self(self.0.advance())
    }

    fn count(&self) -> Option<usize> {
        Some(self.0.remaining())
    }
}

impl<K, V> Sequence for ValSeq<K, V> {
    type Item = V;

    fn is_empty(&self) -> bool {
        self.0.remaining() == 0
    }

    fn first(&self) -> Option<&V> {
        self.0.current().map(|(_, value)| value)
    }

    fn rest(&self) -> Self {
        Self(self.0.advance())
    }

    fn count(&self) -> Option<usize> {
        Some(self.0.remaining())
    }
}

impl<K, V> Clone for MapSeq<K, V> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<K, V> Clone for KeySeq<K, V> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<K, V> Clone for ValSeq<K, V> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<K, V> Default for MapSeq<K, V> {
    fn default() -> Self {
        Self(Entries::default())
    }
}

impl<K, V> Default for KeySeq<K, V> {
    fn default() -> Self {
        Self(Entries::default())
    }
}

impl<K, V> Default for ValSeq<K, V> {
    fn default() -> Self {
        Self(Entries::default())
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for MapSeq<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_sequence(self, formatter)
    }
}

impl<K: fmt::Debug, V> fmt::Debug for KeySeq<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_sequence(self, formatter)
    }
}

impl<K, V: fmt::Debug> fmt::Debug for ValSeq<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_sequence(self, formatter)
    }
}

impl<K, V, S> PartialEq<S> for MapSeq<K, V>
where
    S: IntoSequence + Clone,
    (K, V): PartialEq<S::Item>,
{
    fn eq(&self, other: &S) -> bool {
        equiv(self.clone(), other.clone())
    }
}

impl<K, V, S> PartialEq<S> for KeySeq<K, V>
where
    S: IntoSequence + Clone,
    K: PartialEq<S::Item>,
{
    fn eq(&self, other: &S) -> bool {
        equiv(self.clone(), other.clone())
    }
}

impl<K, V, S> PartialEq<S> for ValSeq<K, V>
where
    S: IntoSequence + Clone,
    V: PartialEq<S::Item>,
{
    fn eq(&self, other: &S) -> bool {
        equiv(self.clone(), other.clone())
    }
}

impl<K, V> IntoSequence for MapSeq<K, V> {
    type Item = (K, V);
    type Seq = Self;

    fn into_seq(self) -> Self {
        self
    }
}

impl<K, V> IntoSequence for KeySeq<K, V> {
    type Item = K;
    type Seq = Self;

    fn into_seq(self) -> Self {
        self
    }
}

impl<K, V> IntoSequence for ValSeq<K, V> {
    type Item = V;
    type Seq = Self;

    fn into_seq(self) -> Self {
        self
    }
}

impl<K, V, E> IntoSequence for PersistentArrayMap<K, V, E> {
    type Item = (K, V);
    type Seq = MapSeq<K, V>;

    fn into_seq(self) -> MapSeq<K, V> {
        MapSeq(Entries::new(self.entries))
    }
}

impl<K, V, E> IntoSequence for &PersistentArrayMap<K, V, E> {
    type Item = (K, V);
    type Seq = MapSeq<K, V>;

    fn into_seq(self) -> MapSeq<K, V> {
        MapSeq(Entries::new(self.entries.clone()))
    }
}

impl<K, V, E> Conj<(K, V)> for PersistentArrayMap<K, V, E>
where
    K: Clone,
    V: Clone,
    E: KeyEquality<K> + Clone,
{
    #[inline]
    fn conj(&self, (key, value): (K, V)) -> Self {
        self.assoc(key, value)
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the entries of a [`PersistentArrayMap`].
pub struct PersistentArrayMapIterator<'a, K, V> {
    inner: std::slice::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for PersistentArrayMapIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for PersistentArrayMapIterator<'_, K, V> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V, E: Clone> Clone for PersistentArrayMap<K, V, E> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            equality: self.equality.clone(),
        }
    }
}

impl<K, V, E: Default> Default for PersistentArrayMap<K, V, E> {
    fn default() -> Self {
        Self::with_equality(E::default())
    }
}

impl<K, V, E> FromIterator<(K, V)> for PersistentArrayMap<K, V, E>
where
    K: Clone,
    V: Clone,
    E: KeyEquality<K> + Clone + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let equality = E::default();
        let mut entries: Vec<(K, V)> = Vec::new();
        for (key, value) in iter {
            match entries
                .iter()
                .position(|(candidate, _)| equality.equivalent(candidate, &key))
            {
                Some(index) => entries[index].1 = value,
                None => entries.push((key, value)),
            }
        }
        Self {
            entries: ReferenceCounter::from(entries),
            equality,
        }
    }
}

impl<'a, K, V, E> IntoIterator for &'a PersistentArrayMap<K, V, E> {
    type Item = (&'a K, &'a V);
    type IntoIter = PersistentArrayMapIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Maps are equal when they hold equal entries in the same order.
impl<K, V, E, F> PartialEq<PersistentArrayMap<K, V, F>> for PersistentArrayMap<K, V, E>
where
    K: PartialEq,
    V: PartialEq,
{
    fn eq(&self, other: &PersistentArrayMap<K, V, F>) -> bool {
        equiv(self, other)
    }
}

impl<K: Eq, V: Eq, E> Eq for PersistentArrayMap<K, V, E> {}

impl<K: fmt::Debug, V: fmt::Debug, E> fmt::Debug for PersistentArrayMap<K, V, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display, E> fmt::Display for PersistentArrayMap<K, V, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        for (index, (key, value)) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key} {value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> PersistentArrayMap<&'static str, i32> {
        PersistentArrayMap::new().assoc("foo", 1).assoc("bar", 2)
    }

    #[rstest]
    fn test_get_after_assoc() {
        let map = sample();
        assert_eq!(map.get(&"foo"), Some(&1));
        assert_eq!(map.get(&"bar"), Some(&2));
        assert_eq!(map.get(&"baz"), None);
    }

    #[rstest]
    fn test_dissoc_removes_entry() {
        let map = sample().dissoc(&"bar");
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&"bar"), None);
        assert_eq!(map.get(&"foo"), Some(&1));
    }

    #[rstest]
    fn test_dissoc_absent_key_shares_storage() {
        let map = sample();
        let same = map.dissoc(&"missing");
        assert!(ReferenceCounter::ptr_eq(&map.entries, &same.entries));
    }

    #[rstest]
    fn test_assoc_replaces_in_place() {
        let map = sample().assoc("foo", 10);
        assert_eq!(map.len(), 2);
        assert_eq!(map.find(&"foo"), Some(0));
        assert_eq!(map.get(&"foo"), Some(&10));
    }

    #[rstest]
    fn test_assoc_leaves_original_untouched() {
        let map = sample();
        let extended = map.assoc("baz", 3);
        assert_eq!(map.len(), 2);
        assert_eq!(extended.len(), 3);
        assert!(!map.contains_key(&"baz"));
    }

    #[rstest]
    fn test_get_or_falls_back() {
        let map = sample();
        assert_eq!(*map.get_or(&"foo", &0), 1);
        assert_eq!(*map.get_or(&"nope", &0), 0);
    }

    #[rstest]
    fn test_keys_and_vals_share_storage() {
        let map = sample();
        let keys = map.keys();
        let vals = map.vals();
        assert!(ReferenceCounter::ptr_eq(&map.entries, &keys.0.entries));
        assert_eq!(keys.first(), Some(&"foo"));
        assert_eq!(keys.rest().first(), Some(&"bar"));
        assert_eq!(vals.first(), Some(&1));
        assert_eq!(vals.count(), Some(2));
        assert!(vals.rest().rest().is_empty());
    }

    #[rstest]
    fn test_equality_is_ordered() {
        let forward = PersistentArrayMap::new().assoc(1, 'a').assoc(2, 'b');
        let backward = PersistentArrayMap::new().assoc(2, 'b').assoc(1, 'a');
        let again = PersistentArrayMap::new().assoc(1, 'a').assoc(2, 'b');
        assert_eq!(forward, again);
        assert_ne!(forward, backward);
    }

    #[rstest]
    fn test_custom_equality() {
        let map = PersistentArrayMap::with_equality(|a: &i32, b: &i32| a % 10 == b % 10)
            .assoc(1, "one")
            .assoc(11, "eleven");
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&21), Some(&"eleven"));
    }

    #[rstest]
    fn test_from_iter_later_value_wins() {
        let map: PersistentArrayMap<i32, i32> = vec![(1, 1), (2, 2), (1, 3)].into_iter().collect();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&1), Some(&3));
    }

    #[rstest]
    fn test_display_and_debug() {
        let map = sample();
        assert_eq!(format!("{map}"), "{foo 1, bar 2}");
        assert_eq!(format!("{map:?}"), "{\"foo\": 1, \"bar\": 2}");
    }
}
