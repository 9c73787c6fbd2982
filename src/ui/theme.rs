//! Visual theme and styling.

use console::Style;

/// Glyphs for each message category.
pub mod glyph {
    pub const HEADER: &str = "▶";
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const INFO: &str = "ℹ";
}

/// Console theme for devstrap output.
#[derive(Debug, Clone)]
pub struct DevstrapTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (yellow).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for informational messages (blue).
    pub info: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
}

impl Default for DevstrapTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl DevstrapTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            info: Style::new().blue(),
            header: Style::new().cyan().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            header: Style::new(),
            dim: Style::new(),
        }
    }

    /// Format a success message.
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("{} {}", glyph::SUCCESS, msg)))
    }

    /// Format a warning message.
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("{} {}", glyph::WARNING, msg)))
    }

    /// Format an error message.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("{} {}", glyph::ERROR, msg)))
    }

    /// Format an informational message.
    pub fn format_info(&self, msg: &str) -> String {
        format!("{}", self.info.apply_to(format!("{} {}", glyph::INFO, msg)))
    }

    /// Format a section header: the title line plus an underline.
    pub fn format_header(&self, title: &str) -> String {
        let line = format!("{} {}", glyph::HEADER, title);
        let rule = "=".repeat(line.chars().count());
        format!(
            "{}\n{}",
            self.header.apply_to(line),
            self.header.apply_to(rule)
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    console::Term::stdout().is_term()
}
