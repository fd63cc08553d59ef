//! Binds the outcome feature file to the step registry.

use crate::fixtures::{OutcomeContext, outcome_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/outcomes.feature",
    fixtures = [outcome_context: OutcomeContext]
);
