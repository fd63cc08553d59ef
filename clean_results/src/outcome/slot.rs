//! Storage shared by the valued outcome types.

use std::sync::Arc;

use crate::error::{ContractViolation, SharedError};

/// Either the payload of a success or the error of a failure.
#[derive(Debug, Clone)]
pub(crate) enum Slot<T> {
    Success(T),
    Failure(SharedError),
}

impl<T> Slot<T> {
    pub(crate) const fn error(&self) -> Option<&SharedError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    pub(crate) const fn value(&self) -> Result<&T, ContractViolation> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(ContractViolation::InvalidState),
        }
    }

    pub(crate) fn into_std(self) -> Result<T, SharedError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<U> Slot<Option<U>> {
    /// Returns the failing slot to use when the payload is `None`.
    pub(crate) fn null_collapse(&self, error: SharedError) -> Option<Self> {
        matches!(self, Self::Success(None)).then(|| Self::Failure(error))
    }
}

/// Failures compare by error identity; error equality belongs to the error
/// type, not to this crate.
impl<T: PartialEq> PartialEq for Slot<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Success(lhs), Self::Success(rhs)) => lhs == rhs,
            (Self::Failure(lhs), Self::Failure(rhs)) => Arc::ptr_eq(lhs, rhs),
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Slot<T> {}
