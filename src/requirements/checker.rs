//! Prerequisite checking.
//!
//! Failures are reported through the UI and recorded in the report; they
//! never propagate as errors.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::detection::{VersionDetector, VersionQuery};
use crate::ui::UserInterface;

use super::status::{Prerequisite, PrerequisiteReport, ToolCheck};

/// Queries the version of each prerequisite.
#[derive(Debug, Clone)]
pub struct PrerequisiteChecker {
    project_root: PathBuf,
    timeout: Duration,
}

impl PrerequisiteChecker {
    /// Create a checker that runs queries in `project_root`.
    pub fn new(project_root: &Path, timeout: Duration) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            timeout,
        }
    }

    /// Check a single tool, trying each of its version commands in turn.
    pub fn check(&self, tool: Prerequisite) -> ToolCheck {
        let mut last_reason = String::from("no version command configured");

        for command in tool.version_commands() {
            let detector = VersionDetector::new(command, self.timeout);
            match detector.query(Some(&self.project_root)) {
                VersionQuery::Found { version } => {
                    return ToolCheck {
                        tool,
                        program: Some(detector.command().program.clone()),
                        status: VersionQuery::Found { version },
                    };
                }
                VersionQuery::Missing { reason } => {
                    tracing::debug!("`{}` unavailable: {}", command, reason);
                    last_reason = reason;
                }
            }
        }

        ToolCheck {
            tool,
            program: None,
            status: VersionQuery::Missing {
                reason: last_reason,
            },
        }
    }

    /// Check every prerequisite and report each result.
    pub fn check_all(&self, ui: &mut dyn UserInterface) -> PrerequisiteReport {
        let checks = Prerequisite::ALL
            .iter()
            .map(|&tool| {
                let check = self.check(tool);
                report(&check, ui);
                check
            })
            .collect();

        PrerequisiteReport { checks }
    }
}

fn report(check: &ToolCheck, ui: &mut dyn UserInterface) {
    match &check.status {
        VersionQuery::Found { .. } => ui.success(&check.summary()),
        VersionQuery::Missing { reason } => {
            ui.error(&check.summary());
            ui.command_output(reason);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn check_all_reports_every_tool() {
        let temp = tempfile::TempDir::new().unwrap();
        let checker = PrerequisiteChecker::new(temp.path(), Duration::from_secs(30));
        let mut ui = MockUI::new();

        let report = checker.check_all(&mut ui);

        assert_eq!(report.checks.len(), Prerequisite::ALL.len());
        // Every tool produces exactly one success or error line.
        assert_eq!(
            ui.successes().len() + ui.errors().len(),
            Prerequisite::ALL.len()
        );
    }

    #[test]
    fn report_missing_tool_is_error() {
        let check = ToolCheck {
            tool: Prerequisite::Node,
            program: None,
            status: VersionQuery::Missing {
                reason: "No such file or directory".to_string(),
            },
        };
        let mut ui = MockUI::new();

        report(&check, &mut ui);

        assert!(ui.has_error("Node.js is not installed"));
        assert_eq!(ui.outputs(), &["No such file or directory".to_string()]);
    }

    #[test]
    fn report_found_tool_is_success() {
        let check = ToolCheck {
            tool: Prerequisite::Npm,
            program: Some("npm".to_string()),
            status: VersionQuery::Found {
                version: "10.2.4".to_string(),
            },
        };
        let mut ui = MockUI::new();

        report(&check, &mut ui);

        assert!(ui.has_success("npm 10.2.4 is available"));
    }
}
