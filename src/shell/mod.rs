//! External command execution and environment checks.

pub mod command;
pub mod platform;

pub use command::{
    execute, execute_foreground, execute_quiet, CommandOptions, CommandResult, CommandSpec,
};
pub use platform::{is_ci, is_ci_with_env};
