//! Type-erased value cell.
//!
//! [`Value`] holds at most one payload of any concrete type together with
//! its runtime type identity. Collections use it to store heterogeneous
//! elements (`PersistentVector<Value>`, `PersistentList<Value>`, ...) while
//! typed algorithms such as [`reduce_as`](crate::reduce_as) recover the
//! concrete type through a checked downcast.
//!
//! # Equality
//!
//! Two cells are equal when both are unset, or when both hold the same
//! concrete type and that type's own `PartialEq` says so. Cells holding
//! different concrete types are never equal.
//!
//! # Examples
//!
//! ```rust
//! use momentum::{CollectionError, Value};
//!
//! let cell = Value::new(42_i32);
//! assert_eq!(cell.get::<i32>(), Ok(&42));
//! assert!(matches!(
//!     cell.get::<i64>(),
//!     Err(CollectionError::TypeMismatch { .. })
//! ));
//!
//! assert_eq!(Value::new(1_i32), Value::new(1_i32));
//! assert_ne!(Value::new(1_i32), Value::new(1_i64));
//! ```

use std::any::{Any, type_name};
use std::fmt;

use crate::error::CollectionError;

const UNSET: &str = "<unset>";

/// Thread-sharing requirement placed on values stored in a [`Value`].
///
/// With the `arc` feature this is `Send + Sync`, so that collections of
/// values can be read from several threads. Without it, every type qualifies.
#[cfg(feature = "arc")]
pub trait Shareable: Send + Sync {}

#[cfg(feature = "arc")]
impl<T: Send + Sync + ?Sized> Shareable for T {}

/// Thread-sharing requirement placed on values stored in a [`Value`].
///
/// With the `arc` feature this is `Send + Sync`, so that collections of
/// values can be read from several threads. Without it, every type qualifies.
#[cfg(not(feature = "arc"))]
pub trait Shareable {}

#[cfg(not(feature = "arc"))]
impl<T: ?Sized> Shareable for T {}

/// Object-safe view of a stored payload.
trait Payload: Any + Shareable {
    fn clone_payload(&self) -> Box<dyn Payload>;

    fn equals(&self, other: &dyn Payload) -> bool;

    fn as_any(&self) -> &dyn Any;

    fn payload_type_name(&self) -> &'static str;

    fn debug(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl<T> Payload for T
where
    T: Any + Clone + PartialEq + fmt::Debug + Shareable,
{
    fn clone_payload(&self) -> Box<dyn Payload> {
        Box::new(self.clone())
    }

    fn equals(&self, other: &dyn Payload) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn payload_type_name(&self) -> &'static str {
        type_name::<T>()
    }

    fn debug(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, formatter)
    }
}

/// A cell holding exactly one value of any type, or nothing.
///
/// Cloning a `Value` clones its payload, so two cells never alias the same
/// payload.
pub struct Value {
    payload: Option<Box<dyn Payload>>,
}

impl Value {
    /// Wraps `value`, recording its concrete type.
    ///
    /// Wrapping a `Value` does not nest: the result is a copy of the inner cell.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use momentum::Value;
    ///
    /// let cell = Value::new(String::from("hello"));
    /// assert!(cell.is::<String>());
    /// assert_eq!(Value::new(cell.clone()), cell);
    /// ```
    #[must_use]
    pub fn new<T>(value: T) -> Self
    where
        T: Any + Clone + PartialEq + fmt::Debug + Shareable,
    {
        if let Some(inner) = (&value as &dyn Any).downcast_ref::<Self>() {
            return inner.clone();
        }
        Self {
            payload: Some(Box::new(value)),
        }
    }

    /// Creates a cell holding no value.
    #[inline]
    #[must_use]
    pub const fn unset() -> Self {
        Self { payload: None }
    }

    /// Returns `true` if the cell holds a value.
    #[inline]
    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.payload.is_some()
    }

    /// Returns `true` if the cell holds a value of exactly type `T`.
    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.get::<T>().is_ok()
    }

    /// Returns the name of the stored concrete type, if any.
    #[must_use]
    pub fn type_name(&self) -> Option<&'static str> {
        self.payload
            .as_deref()
            .map(Payload::payload_type_name)
    }

    /// Returns the payload as a `T`.
    ///
    /// Asking for `Value` itself always succeeds and returns the cell.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::TypeMismatch`] when the cell is unset or its
    /// stored type is not exactly `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use momentum::Value;
    ///
    /// let cell = Value::new(3_u32);
    /// assert_eq!(cell.get::<u32>(), Ok(&3));
    /// assert!(cell.get::<u64>().is_err());
    /// ```
    pub fn get<T: Any>(&self) -> Result<&T, CollectionError> {
        if let Some(cell) = (self as &dyn Any).downcast_ref::<T>() {
            return Ok(cell);
        }
        match self.payload.as_deref() {
            Some(payload) => payload.as_any().downcast_ref::<T>().ok_or_else(|| {
                CollectionError::TypeMismatch {
                    expected: type_name::<T>(),
                    found: payload.payload_type_name(),
                }
            }),
            None => Err(CollectionError::TypeMismatch {
                expected: type_name::<T>(),
                found: UNSET,
            }),
        }
    }
}

impl Default for Value {
    #[inline]
    fn default() -> Self {
        Self::unset()
    }
}

impl Clone for Value {
    fn clone(&self) -> Self {
        Self {
            payload: self.payload.as_deref().map(Payload::clone_payload),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self.payload.as_deref(), other.payload.as_deref()) {
            (None, None) => true,
            (Some(left), Some(right)) => left.equals(right),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.payload.as_deref() {
            Some(payload) => payload.debug(formatter),
            None => formatter.write_str(UNSET),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[rstest]
    fn test_get_returns_payload_of_matching_type() {
        let cell = Value::new(42_i32);
        assert_eq!(cell.get::<i32>(), Ok(&42));
    }

    #[rstest]
    fn test_get_rejects_related_type() {
        let cell = Value::new(42_u32);
        assert_eq!(
            cell.get::<u64>(),
            Err(CollectionError::TypeMismatch {
                expected: "u64",
                found: "u32",
            })
        );
    }

    #[rstest]
    fn test_get_on_unset_cell_fails() {
        let cell = Value::unset();
        assert!(!cell.is_set());
        assert_eq!(
            cell.get::<i32>(),
            Err(CollectionError::TypeMismatch {
                expected: "i32",
                found: UNSET,
            })
        );
    }

    #[rstest]
    fn test_get_value_returns_cell_itself() {
        let cell = Value::new("text");
        assert_eq!(cell.get::<Value>(), Ok(&cell));
    }

    #[rstest]
    fn test_new_does_not_nest_values() {
        let inner = Value::new(7_i64);
        let outer = Value::new(inner.clone());
        assert_eq!(outer.get::<i64>(), Ok(&7));
        assert_eq!(outer, inner);
    }

    #[rstest]
    #[case(Value::new(1_i32), Value::new(1_i32), true)]
    #[case(Value::new(1_i32), Value::new(2_i32), false)]
    #[case(Value::new(1_i32), Value::new(1_i64), false)]
    #[case(Value::new("a"), Value::new(String::from("a")), false)]
    #[case(Value::unset(), Value::unset(), true)]
    #[case(Value::unset(), Value::new(0_u8), false)]
    fn test_equality_is_total(#[case] left: Value, #[case] right: Value, #[case] expected: bool) {
        assert_eq!(left == right, expected);
        assert_eq!(right == left, expected);
    }

    #[rstest]
    fn test_clone_copies_payload() {
        static CLONES: AtomicUsize = AtomicUsize::new(0);

        #[derive(Debug, PartialEq)]
        struct Counted(i32);

        impl Clone for Counted {
            fn clone(&self) -> Self {
                CLONES.fetch_add(1, Ordering::SeqCst);
                Self(self.0)
            }
        }

        let cell = Value::new(Counted(5));
        let before = CLONES.load(Ordering::SeqCst);
        let copy = cell.clone();
        assert_eq!(CLONES.load(Ordering::SeqCst), before + 1);
        assert_eq!(copy, cell);
    }

    #[rstest]
    fn test_type_name_reports_stored_type() {
        assert_eq!(Value::new(1.5_f64).type_name(), Some("f64"));
        assert_eq!(Value::unset().type_name(), None);
    }

    #[rstest]
    fn test_debug_delegates_to_payload() {
        assert_eq!(format!("{:?}", Value::new(vec![1, 2])), "[1, 2]");
        assert_eq!(format!("{:?}", Value::unset()), "<unset>");
    }
}
