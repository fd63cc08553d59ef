//! Error capability carried by failing outcomes.

mod default;
mod metadata;
mod types;
mod violation;

pub use default::Error;
pub use metadata::MetadataValue;
pub use types::{AsAny, ResultError, SharedError};
pub use violation::ContractViolation;

pub(crate) use violation::raise;
