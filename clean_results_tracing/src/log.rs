//! Emission of error events.

use std::error::Error as StdError;

use clean_results::{Outcome, ResultError};
use tracing::Level;

use crate::{Severity, render};

/// Target of every event emitted by this crate.
pub const TARGET: &str = "clean_results";

/// Numeric identifier, optionally named, attached to an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EventId {
    id: i32,
    name: Option<&'static str>,
}

impl EventId {
    /// An unnamed identifier.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self { id, name: None }
    }

    /// A named identifier.
    #[must_use]
    pub const fn named(id: i32, name: &'static str) -> Self {
        Self {
            id,
            name: Some(name),
        }
    }

    /// The numeric identifier.
    #[must_use]
    pub const fn id(self) -> i32 {
        self.id
    }

    /// The name, if any.
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        self.name
    }
}

/// Per-call settings for [`log`].
///
/// ```
/// use clean_results_tracing::{EventId, LogOptions, Severity};
///
/// let io = std::io::Error::other("socket closed");
/// let options = LogOptions::new(Severity::Warning)
///     .with_event_id(EventId::named(17, "sync"))
///     .with_cause(&io);
/// assert_eq!(options.severity(), Severity::Warning);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LogOptions<'a> {
    severity: Severity,
    event_id: Option<EventId>,
    cause: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> LogOptions<'a> {
    /// Options for `severity`, without an event id or cause.
    #[must_use]
    pub const fn new(severity: Severity) -> Self {
        Self {
            severity,
            event_id: None,
            cause: None,
        }
    }

    /// Attaches an event id.
    #[must_use]
    pub const fn with_event_id(mut self, event_id: EventId) -> Self {
        self.event_id = Some(event_id);
        self
    }

    /// Attaches the underlying fault that led to the error.
    #[must_use]
    pub const fn with_cause(mut self, cause: &'a (dyn StdError + 'static)) -> Self {
        self.cause = Some(cause);
        self
    }

    /// The configured severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }
}

/// Emits one event describing `error`.
///
/// The error's message is recorded as the `template` field and its metadata,
/// rendered in order, as `args`; the event message is the rendered template.
/// An absent error still produces an event, with an empty template and no
/// arguments. The error is only borrowed for the duration of the call.
pub fn log(options: LogOptions<'_>, error: Option<&dyn ResultError>) {
    let template = error.map_or("", |e| e.message());
    let metadata = error.map_or(&[][..], |e| e.metadata());
    let args: Vec<String> = metadata.iter().map(ToString::to_string).collect();
    let rendered = render(template, metadata);
    let event_id = options.event_id.unwrap_or_default();

    macro_rules! emit {
        ($level:expr) => {
            tracing::event!(
                target: TARGET,
                $level,
                severity = options.severity.as_str(),
                event_id = event_id.id(),
                event_name = event_id.name(),
                cause = options.cause,
                template,
                args = ?args,
                "{rendered}"
            )
        };
    }

    match options.severity {
        Severity::Trace => emit!(Level::TRACE),
        Severity::Debug => emit!(Level::DEBUG),
        Severity::Information => emit!(Level::INFO),
        Severity::Warning => emit!(Level::WARN),
        Severity::Error | Severity::Critical => emit!(Level::ERROR),
    }
}

macro_rules! severity_shortcuts {
    ($($(#[$doc:meta])* $name:ident => $severity:ident;)+) => {
        $(
            $(#[$doc])*
            pub fn $name(error: Option<&dyn ResultError>) {
                log(LogOptions::new(Severity::$severity), error);
            }
        )+
    };
}

severity_shortcuts! {
    /// Logs `error` at [`Severity::Trace`].
    log_trace => Trace;
    /// Logs `error` at [`Severity::Debug`].
    log_debug => Debug;
    /// Logs `error` at [`Severity::Information`].
    log_information => Information;
    /// Logs `error` at [`Severity::Warning`].
    log_warning => Warning;
    /// Logs `error` at [`Severity::Error`].
    log_error => Error;
    /// Logs `error` at [`Severity::Critical`].
    log_critical => Critical;
}

/// Logs the error of a failing outcome.
///
/// ```
/// use clean_results::{Error, Result};
/// use clean_results_tracing::{LogFailure, LogOptions, Severity};
///
/// let outcome = Result::fail(Error::new("cache miss"));
/// outcome.log_failure(LogOptions::new(Severity::Debug));
/// ```
pub trait LogFailure: Outcome {
    /// Logs the contained error when failing; successes log nothing.
    /// Returns `self` for chaining.
    fn log_failure(&self, options: LogOptions<'_>) -> &Self {
        if let Some(error) = self.error() {
            log(options, Some(error.as_ref()));
        }
        self
    }
}

impl<O: Outcome + ?Sized> LogFailure for O {}
