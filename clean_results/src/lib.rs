//! Explicit success/failure outcomes with structured, shareable errors.
//!
//! Operations return an outcome instead of panicking or bubbling an opaque
//! error, and callers check which state they hold before reading a payload.
//! Four outcome types share one contract, [`Outcome`]:
//!
//! | | no payload | payload `T` |
//! |---|---|---|
//! | reference (shared handle) | [`Result`] | [`TypedResult`] |
//! | inline (plain value) | [`ValueResult`] | [`TypedValueResult`] |
//!
//! A failing outcome always holds a [`SharedError`]: any type implementing
//! [`ResultError`], typically the bundled [`Error`]. Its message and
//! positional [`MetadataValue`]s are shaped for structured logging.
//!
//! ```
//! use clean_results::{Error, Outcome, TypedValueResult, ValuedOutcome, metadata};
//!
//! fn parse_port(raw: &str) -> TypedValueResult<u16> {
//!     match raw.parse() {
//!         Ok(port) => TypedValueResult::from_value(port),
//!         Err(_) => Error::with_metadata("invalid port {Port}", metadata![raw.to_owned()]).into(),
//!     }
//! }
//!
//! let parsed = parse_port("8080");
//! assert_eq!(parsed.try_get_value(), Some(&8080));
//! assert!(parse_port("eighty").has_error::<Error>());
//! ```
//!
//! Broken preconditions (an empty error message, an absent error, reading
//! the payload of a failure) are programmer errors. They panic through the
//! direct constructors and accessors; each has a `try_*` counterpart that
//! returns a [`ContractViolation`] instead.

mod error;
mod outcome;
mod result;
mod result_ext;
mod value_result;

pub use error::{AsAny, ContractViolation, Error, MetadataValue, ResultError, SharedError};
pub use outcome::{Outcome, ValuedOutcome};
pub use result::{Result, TypedResult};
pub use result_ext::IntoOutcome;
pub use value_result::{TypedValueResult, ValueResult};
