//! Reference outcome carrying a payload.

use std::fmt;
use std::sync::Arc;

use crate::error::{ContractViolation, Error, ResultError, SharedError};
use crate::outcome::{Outcome, Slot, ValuedOutcome};

/// Reference outcome carrying a payload of type `T` when successful.
///
/// Cloning shares the outcome; `T` does not need to be [`Clone`].
///
/// # Examples
///
/// ```
/// use clean_results::{Error, Outcome, TypedResult, ValuedOutcome};
///
/// let found = TypedResult::from_value(7_u32);
/// assert_eq!(*found.value(), 7);
///
/// let missing: TypedResult<u32> = TypedResult::from_error(Error::new("not found"));
/// assert!(missing.try_get_value().is_none());
/// assert!(missing.has_error::<Error>());
/// ```
pub struct TypedResult<T> {
    slot: Arc<Slot<T>>,
}

impl<T> TypedResult<T> {
    /// A successful outcome holding `value`.
    #[must_use]
    pub fn from_value(value: T) -> Self {
        Self::from_slot(Slot::Success(value))
    }

    /// A failing outcome holding `error`.
    #[must_use]
    pub fn from_error<E: ResultError>(error: E) -> Self {
        Self::fail_shared(Arc::new(error))
    }

    /// A failing outcome holding an error that is already shared.
    #[must_use]
    pub fn fail_shared(error: SharedError) -> Self {
        Self::from_slot(Slot::Failure(error))
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

    /// Returns `true` when both handles point at the same outcome.
    #[must_use]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.slot, &other.slot)
    }

    /// Converts into a standard [`Result`], cloning the payload only when the
    /// outcome is still shared.
    ///
    /// # Errors
    ///
    /// Returns the contained error when the outcome is failing.
    pub fn into_std(self) -> Result<T, SharedError>
    where
        T: Clone,
    {
        Arc::unwrap_or_clone(self.slot).into_std()
    }

    fn from_slot(slot: Slot<T>) -> Self {
        Self {
            slot: Arc::new(slot),
        }
    }
}

impl<U> TypedResult<Option<U>> {
    /// Turns a successful `None` payload into a failure holding `error`.
    ///
    /// Any other outcome is returned as another handle to itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use clean_results::{Error, Outcome, Result, ResultError};
    ///
    /// let collapsed = Result::ok_with(None::<String>).fail_if_null(Error::new("was null"));
    /// assert_eq!(collapsed.error().map(|e| e.message()), Some("was null"));
    /// ```
    #[must_use]
    pub fn fail_if_null<E: ResultError>(&self, error: E) -> Self {
        self.fail_if_null_shared(Arc::new(error))
    }

    /// As [`TypedResult::fail_if_null`], with an error that is already shared.
    #[must_use]
    pub fn fail_if_null_shared(&self, error: SharedError) -> Self {
        self.slot
            .null_collapse(error)
            .map_or_else(|| self.clone(), Self::from_slot)
    }
}

impl<T> Outcome for TypedResult<T> {
    fn error(&self) -> Option<&SharedError> {
        self.slot.error()
    }
}

impl<T> ValuedOutcome<T> for TypedResult<T> {
    fn try_value(&self) -> Result<&T, ContractViolation> {
        self.slot.value()
    }
}

impl<T> Clone for TypedResult<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<T> From<Error> for TypedResult<T> {
    fn from(error: Error) -> Self {
        Self::from_error(error)
    }
}

impl<T> From<SharedError> for TypedResult<T> {
    fn from(error: SharedError) -> Self {
        Self::fail_shared(error)
    }
}

impl<T: fmt::Debug> fmt::Debug for TypedResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.slot {
            Slot::Success(value) => f.debug_tuple("TypedResult::Ok").field(value).finish(),
            Slot::Failure(error) => f.debug_tuple("TypedResult::Fail").field(error).finish(),
        }
    }
}
