//! Inline outcome carrying a payload.

use std::sync::Arc;

use super::ValueResult;
use crate::error::{ContractViolation, Error, ResultError, SharedError};
use crate::outcome::{Outcome, Slot, ValuedOutcome};

/// Inline outcome carrying a payload of type `T` when successful.
///
/// Narrow it to a [`ValueResult`] with [`From`] or
/// [`TypedValueResult::into_unvalued`].
///
/// # Examples
///
/// ```
/// use clean_results::{Error, Outcome, TypedValueResult, ValueResult, ValuedOutcome};
///
/// let parsed = TypedValueResult::from_value(8080_u16);
/// assert_eq!(parsed.try_get_value(), Some(&8080));
///
/// let failed: TypedValueResult<u16> = TypedValueResult::from_error(Error::new("bad port"));
/// let narrowed = ValueResult::from(failed.clone());
/// assert_eq!(narrowed.error().map(|e| e.message()), failed.error().map(|e| e.message()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedValueResult<T> {
    slot: Slot<T>,
}

impl<T> TypedValueResult<T> {
    /// A successful outcome holding `value`.
    #[must_use]
    pub const fn from_value(value: T) -> Self {
        Self {
            slot: Slot::Success(value),
        }
    }

    /// A failing outcome holding `error`.
    #[must_use]
    pub fn from_error<E: ResultError>(error: E) -> Self {
        Self::fail_shared(Arc::new(error))
    }

    /// A failing outcome holding an error that is already shared.
    #[must_use]
    pub const fn fail_shared(error: SharedError) -> Self {
        Self {
            slot: Slot::Failure(error),
        }
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

    /// Discards the payload, keeping only success or the error.
    #[must_use]
    pub fn into_unvalued(self) -> ValueResult {
        ValueResult::from(self)
    }

    /// Converts into a standard [`Result`].
    ///
    /// # Errors
    ///
    /// Returns the contained error when the outcome is failing.
    pub fn into_std(self) -> Result<T, SharedError> {
        self.slot.into_std()
    }

    pub(super) fn into_error(self) -> Option<SharedError> {
        self.slot.into_std().err()
    }
}

impl<U> TypedValueResult<Option<U>> {
    /// Turns a successful `None` payload into a failure holding `error`.
    ///
    /// Any other outcome is returned unchanged.
    #[must_use]
    pub fn fail_if_null<E: ResultError>(self, error: E) -> Self {
        self.fail_if_null_shared(Arc::new(error))
    }

    /// As [`TypedValueResult::fail_if_null`], with an error that is already
    /// shared.
    #[must_use]
    pub fn fail_if_null_shared(self, error: SharedError) -> Self {
        match self.slot.null_collapse(error) {
            Some(slot) => Self { slot },
            None => self,
        }
    }
}

impl<T> Outcome for TypedValueResult<T> {
    fn error(&self) -> Option<&SharedError> {
        self.slot.error()
    }
}

impl<T> ValuedOutcome<T> for TypedValueResult<T> {
    fn try_value(&self) -> Result<&T, ContractViolation> {
        self.slot.value()
    }
}

/// A success holding `T::default()`.
impl<T: Default> Default for TypedValueResult<T> {
    fn default() -> Self {
        Self::from_value(T::default())
    }
}

impl<T> From<Error> for TypedValueResult<T> {
    fn from(error: Error) -> Self {
        Self::from_error(error)
    }
}

impl<T> From<SharedError> for TypedValueResult<T> {
    fn from(error: SharedError) -> Self {
        Self::fail_shared(error)
    }
}
