//! Bridges between standard `Result`s and outcomes.
//!
//! Outcome-returning APIs often sit on top of code that returns
//! `std::result::Result<T, E>`; [`IntoOutcome`] removes the repetitive
//! `match` at those seams. The reverse direction is `into_std` on
//! [`TypedResult`] and [`TypedValueResult`].
//!
//! # Examples
//!
//! ```
//! use clean_results::{Error, IntoOutcome, Outcome, TypedValueResult};
//!
//! fn lookup(key: &str) -> Result<u32, Error> {
//!     if key == "answer" { Ok(42) } else { Err(Error::new("unknown key")) }
//! }
//!
//! let found: TypedValueResult<u32> = lookup("answer").into_value_outcome();
//! assert!(found.is_success());
//! assert!(lookup("question").into_outcome().is_failure());
//! ```

use crate::error::ResultError;
use crate::{TypedResult, TypedValueResult};

/// Converts a standard `Result` whose error is a [`ResultError`] into an
/// outcome.
pub trait IntoOutcome<T> {
    /// Converts into a reference outcome.
    fn into_outcome(self) -> TypedResult<T>;

    /// Converts into an inline outcome.
    fn into_value_outcome(self) -> TypedValueResult<T>;
}

impl<T, E> IntoOutcome<T> for Result<T, E>
where
    E: ResultError,
{
    fn into_outcome(self) -> TypedResult<T> {
        self.map_or_else(TypedResult::from_error, TypedResult::from_value)
    }

    fn into_value_outcome(self) -> TypedValueResult<T> {
        self.map_or_else(TypedValueResult::from_error, TypedValueResult::from_value)
    }
}
