//! Behavioural tests for the outcome types using `rstest-bdd`.
//!
//! Step implementations live under [`steps`], while [`scenarios`] binds the
//! `.feature` file to the shared fixtures.

mod fixtures;
mod scenarios;
mod steps;
