//! Shared fixtures for the outcome scenarios.

use clean_results::{ContractViolation, Error, TypedResult, TypedValueResult, ValueResult};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// Reference outcome with an optional payload, as exercised by the null
/// check scenarios.
pub type MaybeText = TypedResult<Option<String>>;

/// Scenario state shared between steps.
#[derive(Debug, Default, ScenarioState)]
pub struct OutcomeContext {
    pub first_success: Slot<clean_results::Result>,
    pub second_success: Slot<clean_results::Result>,
    pub original: Slot<MaybeText>,
    pub current: Slot<MaybeText>,
    pub inline: Slot<TypedValueResult<String>>,
    pub narrowed: Slot<ValueResult>,
    pub panic_message: Slot<String>,
    pub built: Slot<Result<Error, ContractViolation>>,
}

/// Creates a clean context for each scenario.
#[fixture]
pub fn outcome_context() -> OutcomeContext {
    OutcomeContext::default()
}
