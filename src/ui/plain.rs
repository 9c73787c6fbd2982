//! Plain-text UI for pipes, CI logs and `--no-color`.

use super::spinner::NoopSpinner;
use super::theme::DevstrapTheme;
use super::{OutputMode, SpinnerHandle, UserInterface};

/// UI that writes unstyled lines.
///
/// Status goes to stdout; warnings and errors go to stderr so they stay
/// visible when stdout is redirected.
pub struct PlainUI {
    mode: OutputMode,
    theme: DevstrapTheme,
}

impl PlainUI {
    /// Create a new plain UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: DevstrapTheme::plain(),
        }
    }
}

impl UserInterface for PlainUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}", self.theme.format_header(title));
        }
    }

    fn info(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_info(msg));
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("{}", self.theme.format_warning(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn command_output(&mut self, output: &str) {
        if self.mode.shows_command_output() {
            for line in output.lines() {
                println!("  {}", line);
            }
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("  {}", message);
        }
        Box::new(NoopSpinner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_ui_output_mode() {
        let ui = PlainUI::new(OutputMode::Verbose);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }

    #[test]
    fn plain_ui_methods_do_not_panic() {
        let mut ui = PlainUI::new(OutputMode::Quiet);
        ui.header("Header");
        ui.info("info");
        ui.success("ok");
        ui.warning("careful");
        ui.command_output("line one\nline two");
        let mut spinner = ui.start_spinner("working");
        spinner.finish();
    }
}
