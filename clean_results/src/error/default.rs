//! The bundled error implementation.

use std::fmt;

use super::{ContractViolation, MetadataValue, ResultError, raise};

/// Immutable error carrying a validated message and positional metadata.
///
/// # Examples
///
/// ```
/// use clean_results::{Error, ResultError, metadata};
///
/// let err = Error::with_metadata("disk {Disk} is full", metadata!["sda1"]);
/// assert_eq!(err.message(), "disk {Disk} is full");
/// assert_eq!(err.metadata().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Error {
    message: String,
    metadata: Vec<MetadataValue>,
}

impl Error {
    /// Creates an error without metadata.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::InvalidArgument`] when `message` is
    /// empty.
    #[must_use]
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_metadata(message, Vec::new())
    }

    /// Creates an error with ordered placeholder arguments.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::InvalidArgument`] when `message` is
    /// empty.
    #[must_use]
    #[track_caller]
    pub fn with_metadata(message: impl Into<String>, metadata: Vec<MetadataValue>) -> Self {
        match Self::try_new(message, Some(metadata)) {
            Ok(error) => error,
            Err(violation) => raise(violation),
        }
    }

    /// Creates an error, reporting a broken precondition instead of panicking.
    ///
    /// `None` metadata stands for "no sequence supplied" and is rejected; an
    /// empty vector is a valid, empty sequence.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::InvalidArgument`] for an empty message and
    /// [`ContractViolation::NullReference`] for absent metadata.
    pub fn try_new(
        message: impl Into<String>,
        metadata: Option<Vec<MetadataValue>>,
    ) -> Result<Self, ContractViolation> {
        let text = message.into();
        if text.is_empty() {
            return Err(ContractViolation::invalid_argument(
                "message",
                "must not be empty",
            ));
        }
        let items = metadata.ok_or(ContractViolation::null_reference("metadata"))?;
        Ok(Self {
            message: text,
            metadata: items,
        })
    }
}

impl ResultError for Error {
    fn message(&self) -> &str {
        &self.message
    }

    fn metadata(&self) -> &[MetadataValue] {
        &self.metadata
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
