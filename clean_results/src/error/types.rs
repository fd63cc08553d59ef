//! The minimal contract every error held by an outcome satisfies.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::MetadataValue;

/// Error handle shared between outcomes.
///
/// Outcomes never own their error exclusively. Cloning an outcome, narrowing
/// it, or collapsing it with `fail_if_null` hands on the same allocation.
pub type SharedError = Arc<dyn ResultError>;

/// Type-erasure hooks used to narrow a [`ResultError`] back to its concrete
/// type.
///
/// Blanket-implemented for every thread-safe `'static` type, so error types
/// never implement it by hand.
pub trait AsAny: Any + Send + Sync {
    /// Borrows `self` as [`Any`].
    fn as_any(&self) -> &dyn Any;

    /// Converts a shared `self` into a shared [`Any`].
    fn into_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

impl<T: Any + Send + Sync> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

/// Contract implemented by every error an outcome can carry.
///
/// Implementations must be immutable once constructed. The message doubles
/// as a structured-log template and the metadata supplies its positional
/// arguments, so the order of [`ResultError::metadata`] is significant.
///
/// The bundled [`Error`](crate::Error) validates its message; user-defined
/// error types may apply whatever validation policy they need.
///
/// # Examples
///
/// ```
/// use clean_results::{MetadataValue, ResultError};
///
/// #[derive(Debug)]
/// struct NotFound {
///     metadata: Vec<MetadataValue>,
/// }
///
/// impl ResultError for NotFound {
///     fn message(&self) -> &str {
///         "item {Id} was not found"
///     }
///
///     fn metadata(&self) -> &[MetadataValue] {
///         &self.metadata
///     }
/// }
///
/// let err = NotFound { metadata: vec![MetadataValue::new(42)] };
/// assert_eq!(err.metadata().len(), 1);
/// ```
pub trait ResultError: AsAny + fmt::Debug {
    /// Human-readable description of the failure. Never empty.
    fn message(&self) -> &str;

    /// Ordered placeholder arguments for [`ResultError::message`].
    fn metadata(&self) -> &[MetadataValue];
}

impl dyn ResultError {
    /// Returns `true` when the concrete error type is `E`.
    #[must_use]
    pub fn is<E: ResultError>(&self) -> bool {
        self.as_any().is::<E>()
    }

    /// Narrows the error to `E`, borrowing it.
    #[must_use]
    pub fn downcast_ref<E: ResultError>(&self) -> Option<&E> {
        self.as_any().downcast_ref::<E>()
    }

    /// Narrows a shared error to a shared `E` without copying it.
    ///
    /// The returned handle points at the same allocation as `self`.
    #[must_use]
    pub fn downcast_arc<E: ResultError>(self: Arc<Self>) -> Option<Arc<E>> {
        <Self as AsAny>::into_any_arc(self).downcast::<E>().ok()
    }
}
