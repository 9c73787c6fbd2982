//! Console output.
//!
//! All user-facing output goes through the [`UserInterface`] trait. Two
//! implementations exist for real use and one for tests:
//!
//! - [`TerminalUI`] - colored output and live spinners for a real terminal
//! - [`PlainUI`] - plain text for pipes, CI logs, `NO_COLOR` and `--no-color`
//! - [`MockUI`] - records every call for assertions
//!
//! The implementation is chosen once in `main()` via [`create_ui`] and
//! passed down to the orchestrator; nothing else inspects terminal
//! capabilities.
//!
//! # Example
//!
//! ```
//! use devstrap::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.header("My App");
//! ui.success("Setup complete!");
//! ```

pub mod hints;
pub mod mock;
pub mod output;
pub mod plain;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use plain::PlainUI;
pub use spinner::ProgressSpinner;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, DevstrapTheme};

/// Trait for user-facing console output.
///
/// This trait allows swapping the rich terminal for plain text and for
/// mocks in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Show a section header.
    fn header(&mut self, title: &str);

    /// Display an informational message.
    fn info(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every output mode.
    fn error(&mut self, msg: &str);

    /// Show output captured from a command (verbose mode only).
    fn command_output(&mut self, output: &str);

    /// Start a spinner for a long-running operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Stop and remove the spinner. The caller reports the outcome.
    fn finish(&mut self);
}

/// Create the UI for this run.
///
/// `rich` selects colored output with spinners; it should only be true
/// when stdout is a terminal that accepts colors.
pub fn create_ui(rich: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if rich {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(PlainUI::new(mode))
    }
}
