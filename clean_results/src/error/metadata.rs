//! Opaque positional metadata attached to errors.

use std::fmt;
use std::sync::Arc;

/// A single positional metadata item.
///
/// Items are opaque to this crate: the only thing a consumer may do with one
/// is render it, typically while substituting a structured-log placeholder.
/// An item can also be the explicit null item, which renders as `(null)`.
/// Cloning is cheap and shares the underlying value.
#[derive(Clone)]
pub struct MetadataValue(Option<Arc<dyn fmt::Display + Send + Sync>>);

impl MetadataValue {
    /// Wraps a displayable value.
    #[must_use]
    pub fn new<T>(value: T) -> Self
    where
        T: fmt::Display + Send + Sync + 'static,
    {
        Self(Some(Arc::new(value)))
    }

    /// The explicit null item.
    #[must_use]
    pub const fn null() -> Self {
        Self(None)
    }

    /// Returns `true` for the null item.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        self.0.is_none()
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str("(null)"),
        }
    }
}

impl fmt::Debug for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MetadataValue")
            .field(&format_args!("{self}"))
            .finish()
    }
}

impl<T> From<Option<T>> for MetadataValue
where
    T: fmt::Display + Send + Sync + 'static,
{
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Self::null, Self::new)
    }
}

/// Builds an ordered `Vec<MetadataValue>` from displayable expressions.
///
/// # Examples
///
/// ```
/// use clean_results::{Error, ResultError, metadata};
///
/// let err = Error::with_metadata("user {User} exceeded {Limit}", metadata!["ada", 3]);
/// assert_eq!(err.metadata().len(), 2);
/// assert_eq!(err.metadata()[1].to_string(), "3");
/// ```
#[macro_export]
macro_rules! metadata {
    () => {
        ::std::vec::Vec::<$crate::MetadataValue>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::MetadataValue::new($value)),+]
    };
}
