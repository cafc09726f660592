//! Persistent (immutable) vector based on a 32-way trie.
//!
//! This module provides [`PersistentVector`], an immutable indexed sequence
//! that uses structural sharing for efficient operations.
//!
//! # Overview
//!
//! `PersistentVector` is a bitmapped vector trie in the style of Clojure's
//! `PersistentVector`. It provides:
//!
//! - O(log32 N) random access (effectively O(1) for practical sizes)
//! - O(1) amortized `conj` (append) thanks to the tail buffer
//! - O(log32 N) `assoc` (indexed update) and `pop` by path copying
//! - O(1) `len` and `is_empty`
//!
//! # Internal Structure
//!
//! The vector consists of:
//! - A root node (32-way branching trie) whose leaves hold 32 elements each
//! - A tail buffer (up to 32 elements) not yet absorbed into the trie
//!
//! Every root-to-leaf path has the same length, `shift / 5 + 1`. Elements at
//! or past `tail_offset` live in the tail.
//!
//! # Examples
//!
//! ```rust
//! use momentum::persistent::PersistentVector;
//!
//! let vector = PersistentVector::new().conj(1).conj(2).conj(3);
//!
//! assert_eq!(vector.get(0), Some(&1));
//! assert_eq!(vector.get(2), Some(&3));
//!
//! // Structural sharing: the original vector is preserved
//! let extended = vector.conj(4);
//! assert_eq!(vector.len(), 3);
//! assert_eq!(extended.len(), 4);
//! ```

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use arrayvec::ArrayVec;
use tracing::trace;

use super::ReferenceCounter;
use super::list::PersistentList;
use crate::error::CollectionError;
use crate::seq::{Conj, IntoSequence, Sequence, debug_sequence, equiv};
use crate::value::Value;

// =============================================================================
// Constants
// =============================================================================

/// Branching factor (2^5 = 32)
const BRANCHING_FACTOR: usize = 32;

/// Bits per level in the trie
const BITS_PER_LEVEL: usize = 5;

/// Bit mask for extracting index within a node
const MASK: usize = BRANCHING_FACTOR - 1;

// =============================================================================
// Node Definition
// =============================================================================

type Children<T> = [Option<ReferenceCounter<Node<T>>>; BRANCHING_FACTOR];

/// Internal node structure for the trie.
enum Node<T> {
    /// Interior node; slots past the last occupied one are `None`
    Branch(ReferenceCounter<Children<T>>),
    /// Bottom level, always holding exactly 32 elements
    Leaf(ReferenceCounter<[T]>),
}

impl<T> Node<T> {
    /// Creates an empty branch node.
    fn empty_branch() -> Self {
        Self::Branch(ReferenceCounter::new(empty_children()))
    }

    /// Creates a branch whose leading slots hold `nodes`.
    fn branch_of(nodes: &[ReferenceCounter<Self>]) -> Self {
        let mut children = empty_children();
        for (slot, node) in children.iter_mut().zip(nodes) {
            *slot = Some(node.clone());
        }
        Self::Branch(ReferenceCounter::new(children))
    }
}

fn empty_children<T>() -> Children<T> {
    std::array::from_fn(|_| None)
}

// =============================================================================
// PersistentVector Definition
// =============================================================================

/// A persistent (immutable) vector based on a 32-way trie with a tail buffer.
///
/// # Time Complexity
///
/// | Operation | Complexity                |
/// |-----------|---------------------------|
/// | `new`     | O(1)                      |
/// | `get`     | O(log32 N)                |
/// | `nth`     | O(log32 N)                |
/// | `conj`    | O(log32 N) amortized O(1) |
/// | `assoc`   | O(log32 N)                |
/// | `pop`     | O(log32 N)                |
/// | `len`     | O(1)                      |
///
/// # Examples
///
/// ```rust
/// use momentum::persistent::PersistentVector;
///
/// let vector: PersistentVector<i32> = (0..100).collect();
/// assert_eq!(vector.len(), 100);
/// assert_eq!(vector.get(50), Some(&50));
/// ```
pub struct PersistentVector<T> {
    /// Total number of elements
    length: usize,
    /// Shift amount for index calculation: (depth - 1) * `BITS_PER_LEVEL`
    shift: usize,
    /// Root node of the trie
    root: ReferenceCounter<Node<T>>,
    /// Tail buffer for efficient append (up to 32 elements)
    tail: ReferenceCounter<[T]>,
}

impl<T> PersistentVector<T> {
    /// Creates a new empty vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use momentum::persistent::PersistentVector;
    ///
    /// let vector: PersistentVector<i32> = PersistentVector::new();
    /// assert!(vector.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            length: 0,
            shift: BITS_PER_LEVEL,
            root: ReferenceCounter::new(Node::empty_branch()),
            tail: ReferenceCounter::from(Vec::new()),
        }
    }

    /// Creates a vector containing a single element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self {
            length: 1,
            shift: BITS_PER_LEVEL,
            root: ReferenceCounter::new(Node::empty_branch()),
            tail: ReferenceCounter::from(vec![element]),
        }
    }

    /// Returns the number of elements in the vector.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the vector contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the starting index of the tail buffer.
    #[inline]
    const fn tail_offset(&self) -> usize {
        if self.length < BRANCHING_FACTOR {
            0
        } else {
            ((self.length - 1) >> BITS_PER_LEVEL) << BITS_PER_LEVEL
        }
    }

    /// Returns the leaf (or the tail) holding `index`.
    fn leaf_for(&self, index: usize) -> Option<&ReferenceCounter<[T]>> {
        if index >= self.length {
            return None;
        }
        if index >= self.tail_offset() {
            return Some(&self.tail);
        }

        let mut node = self.root.as_ref();
        let mut level = self.shift;
        loop {
            match node {
                Node::Branch(children) => {
                    node = children[(index >> level) & MASK].as_deref()?;
                    level = level.saturating_sub(BITS_PER_LEVEL);
                }
                Node::Leaf(elements) => return Some(elements),
            }
        }
    }

    /// Returns a reference to the element at the given index.
    ///
    /// Returns `None` if the index is out of bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use momentum::persistent::PersistentVector;
    ///
    /// let vector: PersistentVector<i32> = (1..=5).collect();
    /// assert_eq!(vector.get(0), Some(&1));
    /// assert_eq!(vector.get(4), Some(&5));
    /// assert_eq!(vector.get(10), None);
    /// ```
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.leaf_for(index)
            .and_then(|leaf| leaf.get(index & MASK))
    }

    /// Returns a reference to the element at the given index.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] carrying `index` and the
    /// vector length when `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use momentum::{CollectionError, persistent::PersistentVector};
    ///
    /// let vector: PersistentVector<i32> = (0..40).collect();
    /// assert_eq!(vector.nth(35), Ok(&35));
    /// assert_eq!(vector.nth(40), Err(CollectionError::out_of_bounds(40, 40)));
    /// ```
    pub fn nth(&self, index: usize) -> Result<&T, CollectionError> {
        self.get(index)
            .ok_or(CollectionError::out_of_bounds(index, self.length))
    }

    /// Returns a reference to the first element.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a reference to the last element.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.tail.last()
    }

    /// Returns an iterator over references to the elements.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> PersistentVectorIterator<'_, T> {
        PersistentVectorIterator {
            vector: self,
            index: 0,
            leaf: &[],
        }
    }
}

impl PersistentVector<Value> {
    /// Returns the element at `index` downcast to `T`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] for a bad index and
    /// [`CollectionError::TypeMismatch`] when the cell does not hold a `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use momentum::{Value, vector};
    ///
    /// let cells = vector![Value::new(1_i32), Value::new("two")];
    /// assert_eq!(cells.nth_as::<&str>(1), Ok(&"two"));
    /// assert!(cells.nth_as::<i64>(0).is_err());
    /// assert!(cells.nth_as::<i32>(2).is_err());
    /// ```
    pub fn nth_as<T: Any>(&self, index: usize) -> Result<&T, CollectionError> {
        self.nth(index)?.get::<T>()
    }
}

impl<T: Clone> PersistentVector<T> {
    /// Appends an element to the back of the vector.
    ///
    /// While the tail has room only the tail is copied and the trie is
    /// shared. A full tail is absorbed into the trie first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use momentum::persistent::PersistentVector;
    ///
    /// let vector = PersistentVector::new().conj(1).conj(2).conj(3);
    ///
    /// assert_eq!(vector.len(), 3);
    /// assert_eq!(vector.get(2), Some(&3));
    /// ```
    #[must_use]
    pub fn conj(&self, element: T) -> Self {
        if self.tail.len() < BRANCHING_FACTOR {
            let mut new_tail = Vec::with_capacity(self.tail.len() + 1);
            new_tail.extend_from_slice(&self.tail);
            new_tail.push(element);

            Self {
                length: self.length + 1,
                shift: self.shift,
                root: self.root.clone(),
                tail: ReferenceCounter::from(new_tail),
            }
        } else {
            let (root, shift) = self.push_tail_to_root();
            Self {
                length: self.length + 1,
                shift,
                root,
                tail: ReferenceCounter::from(vec![element]),
            }
        }
    }

    /// Returns a new vector with the element at `index` replaced.
    ///
    /// Only the nodes on the path to `index` are copied.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] when `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use momentum::persistent::PersistentVector;
    ///
    /// let vector: PersistentVector<i32> = (1..=5).collect();
    /// let updated = vector.assoc(2, 100).unwrap();
    ///
    /// assert_eq!(updated.get(2), Some(&100));
    /// assert_eq!(vector.get(2), Some(&3));
    /// assert!(vector.assoc(5, 0).is_err());
    /// ```
    pub fn assoc(&self, index: usize, element: T) -> Result<Self, CollectionError> {
        if index >= self.length {
            return Err(CollectionError::out_of_bounds(index, self.length));
        }

        let tail_offset = self.tail_offset();

        if index >= tail_offset {
            let mut new_tail = self.tail.to_vec();
            new_tail[index & MASK] = element;

            Ok(Self {
                length: self.length,
                shift: self.shift,
                root: self.root.clone(),
                tail: ReferenceCounter::from(new_tail),
            })
        } else {
            let new_root = Self::update_in_root(&self.root, self.shift, index, element);

            Ok(Self {
                length: self.length,
                shift: self.shift,
                root: ReferenceCounter::new(new_root),
                tail: self.tail.clone(),
            })
        }
    }

    /// Returns the vector without its last element, or `None` if it is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use momentum::persistent::PersistentVector;
    ///
    /// let vector: PersistentVector<i32> = (1..=5).collect();
    /// let popped = vector.pop().unwrap();
    ///
    /// assert_eq!(popped.len(), 4);
    /// assert_eq!(popped.last(), Some(&4));
    /// assert_eq!(vector.len(), 5);
    /// ```
    #[must_use]
    pub fn pop(&self) -> Option<Self> {
        match self.length {
            0 => None,
            1 => Some(Self::new()),
            _ if self.tail.len() > 1 => Some(Self {
                length: self.length - 1,
                shift: self.shift,
                root: self.root.clone(),
                tail: ReferenceCounter::from(&self.tail[..self.tail.len() - 1]),
            }),
            _ => {
                // The last trie leaf becomes the new tail.
                let last_root_index = self.length - 2;
                let new_tail = self.leaf_for(last_root_index)?.clone();
                let (root, shift) = self.pop_tail_from_root(last_root_index);

                Some(Self {
                    length: self.length - 1,
                    shift,
                    root,
                    tail: new_tail,
                })
            }
        }
    }

    /// Updates an element in the root tree.
    fn update_in_root(
        node: &ReferenceCounter<Node<T>>,
        level: usize,
        index: usize,
        element: T,
    ) -> Node<T> {
        match node.as_ref() {
            Node::Branch(children) => {
                let subindex = (index >> level) & MASK;
                let mut new_children = children.as_ref().clone();

                if let Some(child) = &children[subindex] {
                    new_children[subindex] = Some(ReferenceCounter::new(Self::update_in_root(
                        child,
                        level.saturating_sub(BITS_PER_LEVEL),
                        index,
                        element,
                    )));
                }

                Node::Branch(ReferenceCounter::new(new_children))
            }
            Node::Leaf(elements) => {
                let mut new_elements = elements.to_vec();
                new_elements[index & MASK] = element;
                Node::Leaf(ReferenceCounter::from(new_elements))
            }
        }
    }
}

impl<T> PersistentVector<T> {
    /// Absorbs the full tail into the trie, growing the root when it is full.
    fn push_tail_to_root(&self) -> (ReferenceCounter<Node<T>>, usize) {
        let tail_leaf = Node::Leaf(self.tail.clone());
        let tail_offset = self.tail_offset();

        // The root addresses 32^(shift/5 + 1) elements
        let root_overflow = (tail_offset >> self.shift) >= BRANCHING_FACTOR;

        if root_overflow {
            let new_shift = self.shift + BITS_PER_LEVEL;
            trace!(length = self.length, shift = new_shift, "grew trie root");

            let path = ReferenceCounter::new(Self::new_path(self.shift, tail_leaf));
            let new_root = Node::branch_of(&[self.root.clone(), path]);
            (ReferenceCounter::new(new_root), new_shift)
        } else {
            trace!(length = self.length, tail_offset, "absorbed tail into trie");

            let new_root =
                Self::push_tail_into_node(&self.root, self.shift, tail_offset, tail_leaf);
            (ReferenceCounter::new(new_root), self.shift)
        }
    }

    /// Builds a chain of single-child branches from `level` down to `node`.
    fn new_path(level: usize, node: Node<T>) -> Node<T> {
        if level == 0 {
            node
        } else {
            let child = ReferenceCounter::new(Self::new_path(level - BITS_PER_LEVEL, node));
            Node::branch_of(&[child])
        }
    }

    /// Copies the spine down to `tail_offset` and installs `tail_node` there.
    fn push_tail_into_node(
        node: &ReferenceCounter<Node<T>>,
        level: usize,
        tail_offset: usize,
        tail_node: Node<T>,
    ) -> Node<T> {
        let subindex = (tail_offset >> level) & MASK;

        match node.as_ref() {
            Node::Branch(children) => {
                let mut new_children = children.as_ref().clone();

                let child = if level == BITS_PER_LEVEL {
                    tail_node
                } else {
                    match &children[subindex] {
                        Some(child) => Self::push_tail_into_node(
                            child,
                            level - BITS_PER_LEVEL,
                            tail_offset,
                            tail_node,
                        ),
                        None => Self::new_path(level - BITS_PER_LEVEL, tail_node),
                    }
                };
                new_children[subindex] = Some(ReferenceCounter::new(child));

                Node::Branch(ReferenceCounter::new(new_children))
            }
            Node::Leaf(_) => tail_node,
        }
    }

    /// Removes the leaf holding `offset` from the trie, shrinking the root
    /// when only its first child is left.
    fn pop_tail_from_root(&self, offset: usize) -> (ReferenceCounter<Node<T>>, usize) {
        let Some(new_root) = Self::pop_tail_from_node(&self.root, self.shift, offset) else {
            return (
                ReferenceCounter::new(Node::empty_branch()),
                BITS_PER_LEVEL,
            );
        };

        if self.shift > BITS_PER_LEVEL
            && let Node::Branch(children) = new_root.as_ref()
            && children[1].is_none()
            && let Some(only_child) = &children[0]
        {
            trace!(
                length = self.length - 1,
                shift = self.shift - BITS_PER_LEVEL,
                "shrank trie root"
            );
            return (only_child.clone(), self.shift - BITS_PER_LEVEL);
        }
        (new_root, self.shift)
    }

    /// Returns the copy of `node` without the last leaf, or `None` when
    /// nothing would be left.
    fn pop_tail_from_node(
        node: &ReferenceCounter<Node<T>>,
        level: usize,
        offset: usize,
    ) -> Option<ReferenceCounter<Node<T>>> {
        let Node::Branch(children) = node.as_ref() else {
            return None;
        };
        let subindex = (offset >> level) & MASK;

        let replacement = if level == BITS_PER_LEVEL {
            None
        } else {
            children[subindex]
                .as_ref()
                .and_then(|child| Self::pop_tail_from_node(child, level - BITS_PER_LEVEL, offset))
        };

        if replacement.is_none() && subindex == 0 {
            return None;
        }

        let mut new_children = children.as_ref().clone();
        new_children[subindex] = replacement;
        Some(ReferenceCounter::new(Node::Branch(ReferenceCounter::new(
            new_children,
        ))))
    }

    /// Builds a vector whose full leaves are `leaves` and whose tail is `tail`.
    fn from_leaves(leaves: Vec<ReferenceCounter<[T]>>, tail: ReferenceCounter<[T]>) -> Self {
        let length = leaves.len() * BRANCHING_FACTOR + tail.len();

        let mut level: Vec<ReferenceCounter<Node<T>>> = leaves
            .into_iter()
            .map(|leaf| ReferenceCounter::new(Node::Leaf(leaf)))
            .collect();
        let mut shift = BITS_PER_LEVEL;

        while level.len() > BRANCHING_FACTOR {
            level = level
                .chunks(BRANCHING_FACTOR)
                .map(|chunk| ReferenceCounter::new(Node::branch_of(chunk)))
                .collect();
            shift += BITS_PER_LEVEL;
        }

        Self {
            length,
            shift,
            root: ReferenceCounter::new(Node::branch_of(&level)),
            tail,
        }
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to elements of a [`PersistentVector`].
///
/// Descends the trie once per leaf and walks each leaf as a slice.
pub struct PersistentVectorIterator<'a, T> {
    vector: &'a PersistentVector<T>,
    index: usize,
    leaf: &'a [T],
}

impl<'a, T> Iterator for PersistentVectorIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index & MASK == 0 || self.leaf.is_empty() {
            self.leaf = self.vector.leaf_for(self.index).map(|leaf| &**leaf)?;
        }
        let element = self.leaf.get(self.index & MASK)?;
        self.index += 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.vector.length.saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for PersistentVectorIterator<'_, T> {}

// =============================================================================
// Sequence Protocol
// =============================================================================

/// A [`Sequence`] cursor over a [`PersistentVector`].
///
/// The cursor keeps the leaf holding its position, so advancing within a
/// leaf is O(1) and only crossing into the next leaf descends the trie.
pub struct VectorSeq<T> {
    vector: PersistentVector<T>,
    index: usize,
    leaf: ReferenceCounter<[T]>,
}

impl<T> VectorSeq<T> {
    fn new(vector: PersistentVector<T>) -> Self {
        let leaf = vector
            .leaf_for(0)
            .cloned()
            .unwrap_or_else(|| ReferenceCounter::from(Vec::new()));
        Self {
            vector,
            index: 0,
            leaf,
        }
    }

    /// Returns the index of the current element in the underlying vector.
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }
}

impl<T> Clone for VectorSeq<T> {
    fn clone(&self) -> Self {
        Self {
            vector: self.vector.clone(),
            index: self.index,
            leaf: self.leaf.clone(),
        }
    }
}

impl<T> Default for VectorSeq<T> {
    fn default() -> Self {
        Self::new(PersistentVector::new())
    }
}

impl<T> Sequence for VectorSeq<T> {
    type Item = T;

    #[inline]
    fn is_empty(&self) -> bool {
        self.index >= self.vector.length
    }

    #[inline]
    fn first(&self) -> Option<&T> {
        if Sequence::is_empty(self) {
            return None;
        }
        self.leaf.get(self.index & MASK)
    }

    fn rest(&self) -> Self {
        let next = self.index + 1;
        if next >= self.vector.length {
            return Self::default();
        }
        let leaf = if next & MASK == 0 {
            match self.vector.leaf_for(next) {
                Some(leaf) => leaf.clone(),
                None => return Self::default(),
            }
        } else {
            self.leaf.clone()
        };
        Self {
            vector: self.vector.clone(),
            index: next,
            leaf,
        }
    }

    #[inline]
    fn count(&self) -> Option<usize> {
        Some(self.vector.length.saturating_sub(self.index))
    }
}

impl<T: fmt::Debug> fmt::Debug for VectorSeq<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_sequence(self, formatter)
    }
}

/// Compares element-wise against any sequenceable value, so an exhausted
/// cursor equals the empty vector.
impl<T, S> PartialEq<S> for VectorSeq<T>
where
    S: IntoSequence + Clone,
    T: PartialEq<S::Item>,
{
    fn eq(&self, other: &S) -> bool {
        equiv(self.clone(), other.clone())
    }
}

impl<T> IntoSequence for VectorSeq<T> {
    type Item = T;
    type Seq = Self;

    #[inline]
    fn into_seq(self) -> Self {
        self
    }
}

impl<T> IntoSequence for PersistentVector<T> {
    type Item = T;
    type Seq = VectorSeq<T>;

    #[inline]
    fn into_seq(self) -> VectorSeq<T> {
        VectorSeq::new(self)
    }
}

impl<T> IntoSequence for &PersistentVector<T> {
    type Item = T;
    type Seq = VectorSeq<T>;

    #[inline]
    fn into_seq(self) -> VectorSeq<T> {
        VectorSeq::new(self.clone())
    }
}

impl<T: Clone> Conj<T> for PersistentVector<T> {
    /// Appends, the cheap end of a vector.
    #[inline]
    fn conj(&self, element: T) -> Self {
        Self::conj(self, element)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for PersistentVector<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            length: self.length,
            shift: self.shift,
            root: self.root.clone(),
            tail: self.tail.clone(),
        }
    }
}

impl<T> Default for PersistentVector<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for PersistentVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut leaves = Vec::new();
        let mut chunk: ArrayVec<T, BRANCHING_FACTOR> = ArrayVec::new();

        for element in iter {
            if chunk.is_full() {
                leaves.push(chunk.drain(..).collect());
            }
            chunk.push(element);
        }

        Self::from_leaves(leaves, chunk.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a PersistentVector<T> {
    type Item = &'a T;
    type IntoIter = PersistentVectorIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq<U>, U> PartialEq<PersistentVector<U>> for PersistentVector<T> {
    fn eq(&self, other: &PersistentVector<U>) -> bool {
        equiv(self, other)
    }
}

impl<T: PartialEq<U>, U> PartialEq<PersistentList<U>> for PersistentVector<T> {
    fn eq(&self, other: &PersistentList<U>) -> bool {
        equiv(self, other)
    }
}

impl<T: PartialEq<U>, U> PartialEq<PersistentVector<U>> for PersistentList<T> {
    fn eq(&self, other: &PersistentVector<U>) -> bool {
        equiv(self, other)
    }
}

impl<T: Eq> Eq for PersistentVector<T> {}

impl<T: Hash> Hash for PersistentVector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistentVector<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for PersistentVector<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, " ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Tests
// =============================================================================


// =============================================================================
// Thread Safety Tests (arc feature only)
// =============================================================================
