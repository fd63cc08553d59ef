//! In-memory capture of `tracing` events.
//!
//! [`capture`] installs a thread-local subscriber for the duration of a
//! closure and returns every event it saw, with all fields rendered to text.
//!
//! ```
//! use test_helpers::logs::capture;
//!
//! let ((), events) = capture(|| tracing::warn!(attempt = 3, "retrying"));
//! assert_eq!(events.len(), 1);
//! assert_eq!(events[0].field("attempt"), Some("3"));
//! assert_eq!(events[0].message(), Some("retrying"));
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{Layer, Registry};

/// One recorded event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedEvent {
    /// Level the event was emitted at.
    pub level: Level,
    /// Target of the emitting callsite.
    pub target: String,
    /// Every recorded field, rendered with `Display` for strings and
    /// `%`-values and with `Debug` otherwise.
    pub fields: BTreeMap<String, String>,
}

impl CapturedEvent {
    /// Looks up a rendered field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// The event's message, if it had one.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.field("message")
    }
}

#[derive(Default)]
struct FieldRecorder(BTreeMap<String, String>);

impl Visit for FieldRecorder {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_owned(), value.to_owned());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_owned(), format!("{value:?}"));
    }
}

struct CaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut recorder = FieldRecorder::default();
        event.record(&mut recorder);
        let metadata = event.metadata();
        self.events.lock().push(CapturedEvent {
            level: *metadata.level(),
            target: metadata.target().to_owned(),
            fields: recorder.0,
        });
    }
}

/// Runs `f` with a subscriber that records every event emitted on the
/// current thread, returning `f`'s output and the recorded events in order.
pub fn capture<F, R>(f: F) -> (R, Vec<CapturedEvent>)
where
    F: FnOnce() -> R,
{
    let events = Arc::new(Mutex::new(Vec::new()));
    let subscriber = Registry::default().with(CaptureLayer {
        events: Arc::clone(&events),
    });
    let output = tracing::subscriber::with_default(subscriber, f);
    let recorded = std::mem::take(&mut *events.lock());
    (output, recorded)
}
