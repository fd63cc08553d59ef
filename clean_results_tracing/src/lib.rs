//! `tracing` output for [`clean_results`] errors.
//!
//! Every [`ResultError`](clean_results::ResultError) carries a message that
//! doubles as a template and ordered metadata that fills its placeholders.
//! This crate turns one such error into one structured `tracing` event, so a
//! failure can be reported without losing its arguments:
//!
//! ```
//! use clean_results::{Error, metadata};
//! use clean_results_tracing::{LogOptions, Severity, log};
//!
//! let error = Error::with_metadata("quota for {Tenant} exceeded", metadata!["acme"]);
//! log(LogOptions::new(Severity::Warning), Some(&error));
//! ```
//!
//! The emitted event has target [`TARGET`], the rendered template as its
//! message, and the fields `severity`, `event_id`, `event_name`, `cause`,
//! `template` and `args`.

mod log;
mod severity;
mod template;

pub use log::{
    EventId, LogFailure, LogOptions, TARGET, log, log_critical, log_debug, log_error,
    log_information, log_trace, log_warning,
};
pub use severity::Severity;
pub use template::render;
