//! Inline outcomes: plain records passed and returned by value.
//!
//! An inline outcome is a single pointer-sized slot (plus the payload for
//! [`TypedValueResult`]); creating one never allocates beyond the error it
//! may hold. The empty error slot is the all-zero representation, so the
//! [`Default`] value is the success outcome. Equality is structural: two
//! outcomes are equal when both succeed (with equal payloads) or both fail
//! with the same shared error.

mod typed;

pub use typed::TypedValueResult;

use std::sync::Arc;

use crate::error::{ContractViolation, Error, ResultError, SharedError};
use crate::outcome::Outcome;

/// Inline outcome without a payload.
///
/// # Examples
///
/// ```
/// use clean_results::{Error, Outcome, ValueResult};
///
/// fn flush(dirty: bool) -> ValueResult {
///     if dirty {
///         return ValueResult::fail(Error::new("buffer is dirty"));
///     }
///     ValueResult::ok()
/// }
///
/// assert_eq!(flush(false), ValueResult::default());
/// assert!(flush(true).is_failure());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValueResult {
    error: Option<SharedError>,
}

impl ValueResult {
    /// The success outcome; identical to [`ValueResult::default`].
    #[must_use]
    pub const fn ok() -> Self {
        Self { error: None }
    }

    /// A failing outcome holding `error`.
    #[must_use]
    pub fn fail<E: ResultError>(error: E) -> Self {
        Self::fail_shared(Arc::new(error))
    }

    /// A failing outcome holding an error that is already shared.
    #[must_use]
    pub const fn fail_shared(error: SharedError) -> Self {
        Self { error: Some(error) }
    }

    /// A failing outcome, rejecting an absent error.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::NullReference`] when `error` is `None`.
    pub fn try_fail(error: Option<SharedError>) -> Result<Self, ContractViolation> {
        error
            .map(Self::fail_shared)
            .ok_or(ContractViolation::null_reference("error"))
    }

    /// A successful valued outcome holding `value`.
    #[must_use]
    pub const fn ok_with<T>(value: T) -> TypedValueResult<T> {
        TypedValueResult::from_value(value)
    }

    /// A failing valued outcome holding `error`.
    #[must_use]
    pub fn fail_typed<T, E: ResultError>(error: E) -> TypedValueResult<T> {
        TypedValueResult::from_error(error)
    }
}

impl Outcome for ValueResult {
    fn error(&self) -> Option<&SharedError> {
        self.error.as_ref()
    }
}

impl PartialEq for ValueResult {
    fn eq(&self, other: &Self) -> bool {
        match (&self.error, &other.error) {
            (None, None) => true,
            (Some(lhs), Some(rhs)) => Arc::ptr_eq(lhs, rhs),
            _ => false,
        }
    }
}

impl Eq for ValueResult {}

impl From<Error> for ValueResult {
    fn from(error: Error) -> Self {
        Self::fail(error)
    }
}

impl From<SharedError> for ValueResult {
    fn from(error: SharedError) -> Self {
        Self::fail_shared(error)
    }
}

/// Narrows a valued outcome by discarding its payload.
///
/// Success becomes [`ValueResult::ok`]; failure keeps the same error. Defined
/// for every `T`.
impl<T> From<TypedValueResult<T>> for ValueResult {
    fn from(result: TypedValueResult<T>) -> Self {
        Self {
            error: result.into_error(),
        }
    }
}

impl<T> From<&TypedValueResult<T>> for ValueResult {
    fn from(result: &TypedValueResult<T>) -> Self {
        Self {
            error: result.error().cloned(),
        }
    }
}
