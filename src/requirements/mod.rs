//! Prerequisite checking.
//!
//! Verifies that the language runtimes and package managers the project
//! needs are installed, and reports their versions.
//!
//! - [`status`] - prerequisite definitions and result types
//! - [`checker`] - runs the version queries

pub mod checker;
pub mod status;

pub use checker::PrerequisiteChecker;
pub use status::{Prerequisite, PrerequisiteReport, ToolCheck};
