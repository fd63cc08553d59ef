//! Contract violations are logged before the panic unwinds.
#![cfg(feature = "tracing")]

use std::panic::{self, AssertUnwindSafe};

use clean_results::{Error, TypedValueResult, ValueResult, ValuedOutcome};
use test_helpers::logs::capture;
use tracing::Level;

#[test]
fn value_on_failure_logs_the_violation() {
    let failed: TypedValueResult<u8> = ValueResult::fail_typed(Error::new("boom"));
    let (outcome, events) = capture(|| panic::catch_unwind(AssertUnwindSafe(|| *failed.value())));
    assert!(outcome.is_err());
    assert_eq!(events.len(), 1, "expected exactly one event: {events:?}");
    let event = &events[0];
    assert_eq!(event.level, Level::ERROR);
    assert_eq!(
        event.field("violation"),
        Some("outcome is failed; no value available")
    );
    assert_eq!(event.message(), Some("outcome contract violated"));
}

#[test]
fn rejected_constructor_argument_is_logged() {
    let (outcome, events) = capture(|| panic::catch_unwind(|| Error::new("")));
    assert!(outcome.is_err());
    assert_eq!(events.len(), 1, "expected exactly one event: {events:?}");
    assert!(
        events[0]
            .field("violation")
            .is_some_and(|text| text.starts_with("invalid argument `message`"))
    );
}

#[test]
fn successful_access_logs_nothing() {
    let (value, events) = capture(|| *ValueResult::ok_with(7_u8).value());
    assert_eq!(value, 7);
    assert!(events.is_empty());
}
