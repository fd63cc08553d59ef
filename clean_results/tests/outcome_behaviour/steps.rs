//! Step definitions for the outcome scenarios.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use anyhow::{Result, anyhow, ensure};
use clean_results::{
    ContractViolation, Error, Outcome, ResultError, TypedResult, TypedValueResult, ValueResult,
    ValuedOutcome,
};
use rstest_bdd_macros::{given, then, when};
use test_helpers::text::unquote;

use crate::fixtures::OutcomeContext;

#[given("two success outcomes requested from the reference type")]
fn two_successes(outcome_context: &OutcomeContext) {
    outcome_context.first_success.set(clean_results::Result::ok());
    outcome_context.second_success.set(clean_results::Result::ok());
}

#[then("both outcomes are the same instance")]
fn same_instance(outcome_context: &OutcomeContext) -> Result<()> {
    let first = outcome_context
        .first_success
        .take()
        .ok_or_else(|| anyhow!("first success missing"))?;
    let second = outcome_context
        .second_success
        .take()
        .ok_or_else(|| anyhow!("second success missing"))?;
    ensure!(
        clean_results::Result::ptr_eq(&first, &second),
        "success outcomes must share one instance"
    );
    Ok(())
}

#[given("a failing valued outcome with message {message}")]
fn failing_valued(outcome_context: &OutcomeContext, message: String) {
    let outcome = TypedResult::from_error(Error::new(unquote(&message)));
    outcome_context.current.set(outcome);
}

#[given("a successful valued outcome without a payload")]
fn empty_success(outcome_context: &OutcomeContext) {
    let outcome = TypedResult::from_value(None);
    outcome_context.original.set(outcome.clone());
    outcome_context.current.set(outcome);
}

#[given("a successful valued outcome with payload {payload}")]
fn present_success(outcome_context: &OutcomeContext, payload: String) {
    let outcome = TypedResult::from_value(Some(unquote(&payload).to_owned()));
    outcome_context.original.set(outcome.clone());
    outcome_context.current.set(outcome);
}

#[when("the value is read")]
fn read_value(outcome_context: &OutcomeContext) -> Result<()> {
    let outcome = outcome_context
        .current
        .take()
        .ok_or_else(|| anyhow!("no outcome to read"))?;
    let payload = catch_unwind(AssertUnwindSafe(|| outcome.value().clone()))
        .err()
        .ok_or_else(|| anyhow!("reading a failed outcome must panic"))?;
    let message = payload
        .downcast_ref::<String>()
        .cloned()
        .ok_or_else(|| anyhow!("panic payload was not a formatted message"))?;
    outcome_context.panic_message.set(message);
    Ok(())
}

#[then("the read is refused with {expected}")]
fn read_refused(outcome_context: &OutcomeContext, expected: String) -> Result<()> {
    let message = outcome_context
        .panic_message
        .take()
        .ok_or_else(|| anyhow!("no panic recorded"))?;
    ensure!(
        message == unquote(&expected),
        "unexpected panic message: {message}"
    );
    Ok(())
}

#[when("it is checked for null with message {message}")]
fn check_null(outcome_context: &OutcomeContext, message: String) -> Result<()> {
    let outcome = outcome_context
        .current
        .take()
        .ok_or_else(|| anyhow!("no outcome to check"))?;
    let checked = outcome.fail_if_null(Error::new(unquote(&message)));
    outcome_context.current.set(checked);
    Ok(())
}

#[then("the outcome fails with message {message}")]
fn fails_with(outcome_context: &OutcomeContext, message: String) -> Result<()> {
    let actual = outcome_context
        .current
        .with_ref(|outcome| outcome.error().map(|error| error.message().to_owned()))
        .ok_or_else(|| anyhow!("no outcome recorded"))?;
    ensure!(
        actual.as_deref() == Some(unquote(&message)),
        "unexpected error message: {actual:?}"
    );
    Ok(())
}

#[then("the outcome is unchanged")]
fn unchanged(outcome_context: &OutcomeContext) -> Result<()> {
    let original = outcome_context
        .original
        .take()
        .ok_or_else(|| anyhow!("original outcome missing"))?;
    let current = outcome_context
        .current
        .take()
        .ok_or_else(|| anyhow!("checked outcome missing"))?;
    ensure!(
        TypedResult::ptr_eq(&original, &current),
        "null check must return the same outcome"
    );
    Ok(())
}

#[given("an inline valued outcome failing with message {message}")]
fn inline_failure(outcome_context: &OutcomeContext, message: String) {
    let outcome = TypedValueResult::from_error(Error::new(unquote(&message)));
    outcome_context.inline.set(outcome);
}

#[given("an inline valued outcome succeeding with payload {payload}")]
fn inline_success(outcome_context: &OutcomeContext, payload: String) {
    let outcome = TypedValueResult::from_value(unquote(&payload).to_owned());
    outcome_context.inline.set(outcome);
}

#[when("it is narrowed to an unvalued outcome")]
fn narrow(outcome_context: &OutcomeContext) -> Result<()> {
    let narrowed = outcome_context
        .inline
        .with_ref(|inline| ValueResult::from(inline))
        .ok_or_else(|| anyhow!("no inline outcome to narrow"))?;
    outcome_context.narrowed.set(narrowed);
    Ok(())
}

#[then("the narrowed outcome fails with the same error")]
fn narrowed_same_error(outcome_context: &OutcomeContext) -> Result<()> {
    let inline = outcome_context
        .inline
        .take()
        .ok_or_else(|| anyhow!("inline outcome missing"))?;
    let narrowed = outcome_context
        .narrowed
        .take()
        .ok_or_else(|| anyhow!("narrowed outcome missing"))?;
    let (Some(before), Some(after)) = (inline.error(), narrowed.error()) else {
        return Err(anyhow!("both outcomes must be failing"));
    };
    ensure!(Arc::ptr_eq(before, after), "narrowing must keep the error");
    Ok(())
}

#[then("the narrowed outcome is the default success")]
fn narrowed_default(outcome_context: &OutcomeContext) -> Result<()> {
    let narrowed = outcome_context
        .narrowed
        .take()
        .ok_or_else(|| anyhow!("narrowed outcome missing"))?;
    ensure!(
        narrowed == ValueResult::default(),
        "expected the default success, got {narrowed:?}"
    );
    Ok(())
}

#[when("an error is built with message {message} and an empty metadata list")]
fn build_with_metadata(outcome_context: &OutcomeContext, message: String) {
    let built = Error::try_new(unquote(&message), Some(Vec::new()));
    outcome_context.built.set(built);
}

#[when("an error is built with message {message} and absent metadata")]
fn build_without_metadata(outcome_context: &OutcomeContext, message: String) {
    let built = Error::try_new(unquote(&message), None);
    outcome_context.built.set(built);
}

fn take_violation(outcome_context: &OutcomeContext) -> Result<ContractViolation> {
    outcome_context
        .built
        .take()
        .ok_or_else(|| anyhow!("no error was built"))?
        .err()
        .ok_or_else(|| anyhow!("expected the build to be rejected"))
}

#[then("the build is rejected as an invalid argument")]
fn rejected_invalid(outcome_context: &OutcomeContext) -> Result<()> {
    let violation = take_violation(outcome_context)?;
    ensure!(
        matches!(violation, ContractViolation::InvalidArgument { .. }),
        "unexpected violation: {violation}"
    );
    Ok(())
}

#[then("the build is rejected as a null reference")]
fn rejected_null(outcome_context: &OutcomeContext) -> Result<()> {
    let violation = take_violation(outcome_context)?;
    ensure!(
        matches!(violation, ContractViolation::NullReference { .. }),
        "unexpected violation: {violation}"
    );
    Ok(())
}

#[then("the built error has no metadata")]
fn built_without_metadata(outcome_context: &OutcomeContext) -> Result<()> {
    let error = outcome_context
        .built
        .take()
        .ok_or_else(|| anyhow!("no error was built"))?
        .map_err(|violation| anyhow!("build rejected: {violation}"))?;
    ensure!(error.metadata().is_empty(), "metadata must be empty");
    Ok(())
}
