//! Command-line interface for devstrap.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`plan`] - Which steps a set of flags selects
//! - [`orchestrator`] - Runs the selected steps in order

pub mod args;
pub mod orchestrator;
pub mod plan;

pub use args::Cli;
pub use orchestrator::{Orchestrator, RunSummary};
pub use plan::ActionPlan;
