//! Rich terminal UI.

use console::Term;
use std::io::Write;

use super::{
    DevstrapTheme, OutputMode, ProgressSpinner, SpinnerHandle, UserInterface,
};

/// Colored terminal UI with live spinners.
///
/// Status goes to stdout; warnings and errors go to stderr, matching
/// [`PlainUI`](super::PlainUI).
pub struct TerminalUI {
    term: Term,
    err: Term,
    theme: DevstrapTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            term: Term::stdout(),
            err: Term::stderr(),
            theme: DevstrapTheme::new(),
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "\n{}", self.theme.format_header(title)).ok();
        }
    }

    fn info(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_info(msg)).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn command_output(&mut self, output: &str) {
        if self.mode.shows_command_output() {
            for line in output.lines() {
                writeln!(self.term, "  {}", self.theme.dim.apply_to(line)).ok();
            }
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }
}
