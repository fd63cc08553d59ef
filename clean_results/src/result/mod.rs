//! Reference outcomes: one heap allocation per outcome, shared by handle.
//!
//! Cloning a reference outcome clones the handle, never the outcome, so
//! identity is observable through [`Result::ptr_eq`] and
//! [`TypedResult::ptr_eq`]. Prefer these when outcomes are stored long-term
//! or shared widely; see [`ValueResult`](crate::ValueResult) for the inline
//! form.

mod typed;

pub use typed::TypedResult;

use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::error::{ContractViolation, Error, ResultError, SharedError};
use crate::outcome::Outcome;

static SUCCESS: LazyLock<Result> = LazyLock::new(|| Result {
    error: Arc::new(None),
});

/// Reference outcome without a payload.
///
/// # Examples
///
/// ```
/// use clean_results::{Error, Outcome, Result};
///
/// fn remove(name: &str) -> Result {
///     if name.is_empty() {
///         return Result::fail(Error::new("name is required"));
///     }
///     Result::ok()
/// }
///
/// assert!(remove("cache").is_success());
/// assert!(remove("").is_failure());
/// assert!(Result::ptr_eq(&Result::ok(), &Result::ok()));
/// ```
#[derive(Clone)]
pub struct Result {
    error: Arc<Option<SharedError>>,
}

impl Result {
    /// The process-wide success outcome.
    ///
    /// Every call returns a handle to the same allocation.
    #[must_use]
    pub fn ok() -> Self {
        Self::clone(&SUCCESS)
    }

    /// A failing outcome holding `error`.
    #[must_use]
    pub fn fail<E: ResultError>(error: E) -> Self {
        Self::fail_shared(Arc::new(error))
    }

    /// A failing outcome holding an error that is already shared.
    #[must_use]
    pub fn fail_shared(error: SharedError) -> Self {
        Self {
            error: Arc::new(Some(error)),
        }
    }

    /// A failing outcome, rejecting an absent error.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::NullReference`] when `error` is `None`.
    pub fn try_fail(error: Option<SharedError>) -> std::result::Result<Self, ContractViolation> {
        error
            .map(Self::fail_shared)
            .ok_or(ContractViolation::null_reference("error"))
    }

    /// A successful valued outcome holding `value`.
    #[must_use]
    pub fn ok_with<T>(value: T) -> TypedResult<T> {
        TypedResult::from_value(value)
    }

    /// A failing valued outcome holding `error`.
    #[must_use]
    pub fn fail_typed<T, E: ResultError>(error: E) -> TypedResult<T> {
        TypedResult::from_error(error)
    }

    /// Returns `true` when both handles point at the same outcome.
    #[must_use]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.error, &other.error)
    }
}

impl Outcome for Result {
    fn error(&self) -> Option<&SharedError> {
        (*self.error).as_ref()
    }
}

impl Default for Result {
    fn default() -> Self {
        Self::ok()
    }
}

impl From<Error> for Result {
    fn from(error: Error) -> Self {
        Self::fail(error)
    }
}

impl From<SharedError> for Result {
    fn from(error: SharedError) -> Self {
        Self::fail_shared(error)
    }
}

/// Drops the payload: success becomes the shared success outcome and failure
/// keeps the same error.
impl<T> From<&TypedResult<T>> for Result {
    fn from(result: &TypedResult<T>) -> Self {
        result
            .error()
            .map_or_else(Self::ok, |error| Self::fail_shared(Arc::clone(error)))
    }
}

impl fmt::Debug for Result {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.error() {
            None => f.write_str("Result::Ok"),
            Some(error) => f.debug_tuple("Result::Fail").field(error).finish(),
        }
    }
}
