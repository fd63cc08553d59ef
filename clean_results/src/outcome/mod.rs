//! Behaviour shared by every outcome type.
//!
//! [`Outcome`] holds the error-inspection logic once, as provided methods, so
//! the four concrete outcome types only expose their error slot. Valued
//! outcomes add [`ValuedOutcome`] on top.

mod slot;

pub(crate) use slot::Slot;

use std::sync::Arc;

use crate::error::{ContractViolation, ResultError, SharedError, raise};

/// Success/failure contract shared by all outcome types.
///
/// An outcome is failing exactly when it holds an error, so
/// [`Outcome::is_success`] and [`Outcome::is_failure`] are always
/// complements.
pub trait Outcome {
    /// The contained error; present exactly when the outcome is failing.
    fn error(&self) -> Option<&SharedError>;

    /// Returns `true` when no error is held.
    fn is_success(&self) -> bool {
        self.error().is_none()
    }

    /// Returns `true` when an error is held.
    fn is_failure(&self) -> bool {
        self.error().is_some()
    }

    /// Returns `true` when failing with an error whose concrete type is `E`.
    fn has_error<E: ResultError>(&self) -> bool
    where
        Self: Sized,
    {
        self.error().is_some_and(|error| error.is::<E>())
    }

    /// Borrows the error when failing.
    fn try_get_error(&self) -> Option<&SharedError> {
        self.error()
    }

    /// Borrows the error narrowed to `E`, when failing with an `E`.
    fn try_get_error_as<E: ResultError>(&self) -> Option<&E>
    where
        Self: Sized,
    {
        self.error().and_then(|error| error.downcast_ref::<E>())
    }

    /// Shares the error narrowed to `E`, when failing with an `E`.
    fn try_get_shared_error_as<E: ResultError>(&self) -> Option<Arc<E>>
    where
        Self: Sized,
    {
        self.error()
            .and_then(|error| Arc::clone(error).downcast_arc::<E>())
    }
}

/// Outcomes that carry a payload of type `T` when successful.
///
/// The payload may itself be "empty" (for example `None`) while the outcome
/// is still successful; success and presence of data are separate ideas.
pub trait ValuedOutcome<T>: Outcome {
    /// Borrows the payload, or reports [`ContractViolation::InvalidState`]
    /// when failing.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::InvalidState`] when the outcome is failing.
    fn try_value(&self) -> Result<&T, ContractViolation>;

    /// Borrows the payload.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::InvalidState`] when the outcome is
    /// failing. Reading the payload of a failure is a programmer error.
    #[track_caller]
    fn value(&self) -> &T {
        match self.try_value() {
            Ok(value) => value,
            Err(violation) => raise(violation),
        }
    }

    /// Borrows the payload when successful.
    fn try_get_value(&self) -> Option<&T> {
        self.try_value().ok()
    }
}
