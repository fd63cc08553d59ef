//! Contract faults raised when an outcome or error invariant is broken.

use thiserror::Error;

/// A broken precondition of this crate's API.
///
/// Each variant is a programmer error rather than a recoverable condition.
/// The panicking constructors and accessors raise these as panics; the
/// `try_*` forms return them so callers with dynamic inputs can check first.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ContractViolation {
    /// A required argument was absent.
    #[error("required argument `{argument}` was not supplied")]
    NullReference {
        /// Name of the missing argument.
        argument: &'static str,
    },

    /// An argument was present but unusable.
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        /// Name of the offending argument.
        argument: &'static str,
        /// Why the argument was rejected.
        reason: &'static str,
    },

    /// The payload of a failing outcome was read.
    #[error("outcome is failed; no value available")]
    InvalidState,
}

impl ContractViolation {
    /// Builds a [`ContractViolation::NullReference`] for `argument`.
    #[must_use]
    pub const fn null_reference(argument: &'static str) -> Self {
        Self::NullReference { argument }
    }

    /// Builds a [`ContractViolation::InvalidArgument`] for `argument`.
    #[must_use]
    pub const fn invalid_argument(argument: &'static str, reason: &'static str) -> Self {
        Self::InvalidArgument { argument, reason }
    }
}

/// Surfaces a violation as a panic at the caller's location.
#[track_caller]
pub(crate) fn raise(violation: ContractViolation) -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!(%violation, "outcome contract violated");
    panic!("{violation}")
}
