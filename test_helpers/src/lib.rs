//! Test helpers shared across the workspace.
//!
//! - [`text`] normalises values captured from behaviour-test step text.
//! - [`logs`] records `tracing` events so tests can assert on them.

pub mod logs;
pub mod text;
