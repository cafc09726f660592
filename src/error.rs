//! Error type shared by every collection in this crate.
//!
//! Errors are raised where they are detected and returned to the immediate
//! caller. Nothing in this crate retries or swallows them.

use std::fmt;

/// Represents the failures a collection operation can report.
///
/// # Examples
///
/// ```rust
/// use momentum::{CollectionError, PersistentVector};
///
/// let vector: PersistentVector<i32> = (0..3).collect();
/// assert_eq!(
///     vector.nth(3),
///     Err(CollectionError::IndexOutOfBounds { index: 3, size: 3 })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// The requested concrete type does not match the stored one.
    ///
    /// The check is exact: a convertible or related type is still a mismatch.
    TypeMismatch {
        /// Name of the type the caller asked for.
        expected: &'static str,
        /// Name of the type actually stored, or `"<unset>"` for an empty cell.
        found: &'static str,
    },
    /// An index at or past the end of an indexed collection.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Size of the collection at the time of the access.
        size: usize,
    },
}

impl CollectionError {
    /// Builds an [`CollectionError::IndexOutOfBounds`] that carries the collection size.
    #[must_use]
    pub const fn out_of_bounds(index: usize, size: usize) -> Self {
        Self::IndexOutOfBounds { index, size }
    }
}

impl fmt::Display for CollectionError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch { expected, found } => write!(
                formatter,
                "Bad cast of value to concrete type: expected {expected}, found {found}"
            ),
            Self::IndexOutOfBounds { index, size } => write!(
                formatter,
                "Index out of bounds: {index}. Collection had size: {size}"
            ),
        }
    }
}

impl std::error::Error for CollectionError {}
