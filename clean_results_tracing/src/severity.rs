//! Severity classification supplied by callers.

use std::fmt;

use tracing::Level;

/// How serious a logged error is.
///
/// `tracing` has no level above `ERROR`, so [`Severity::Critical`] is emitted
/// at `ERROR` and told apart by the event's `severity` field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Step-by-step diagnostics.
    Trace,
    /// Developer diagnostics.
    Debug,
    /// Normal operational messages.
    Information,
    /// Unexpected but handled conditions.
    Warning,
    /// Failures of the current operation.
    #[default]
    Error,
    /// Failures requiring immediate attention.
    Critical,
}

impl Severity {
    /// The `tracing` level events of this severity are emitted at.
    #[must_use]
    pub const fn level(self) -> Level {
        match self {
            Self::Trace => Level::TRACE,
            Self::Debug => Level::DEBUG,
            Self::Information => Level::INFO,
            Self::Warning => Level::WARN,
            Self::Error | Self::Critical => Level::ERROR,
        }
    }

    /// Lower-case name recorded in the `severity` field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Information => "information",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
