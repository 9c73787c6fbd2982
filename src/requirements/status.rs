//! Prerequisite definitions and check results.

use std::fmt;

use crate::detection::VersionQuery;

/// An external tool whose presence is checked before setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prerequisite {
    Python,
    Node,
    Npm,
}

impl Prerequisite {
    /// All prerequisites, in check order.
    pub const ALL: [Prerequisite; 3] = [Prerequisite::Python, Prerequisite::Node, Prerequisite::Npm];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Prerequisite::Python => "Python",
            Prerequisite::Node => "Node.js",
            Prerequisite::Npm => "npm",
        }
    }

    /// Version commands to try, in order. The first that answers wins.
    pub fn version_commands(&self) -> &'static [&'static str] {
        match self {
            Prerequisite::Python => &["python3 --version", "python --version", "py --version"],
            Prerequisite::Node => &["node --version"],
            Prerequisite::Npm => &["npm --version"],
        }
    }

    /// Whether this is a package manager rather than a language runtime.
    ///
    /// Only affects wording: runtimes are "installed", managers "available".
    pub fn is_package_manager(&self) -> bool {
        matches!(self, Prerequisite::Npm)
    }
}

impl fmt::Display for Prerequisite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of checking one prerequisite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCheck {
    /// The tool that was checked.
    pub tool: Prerequisite,
    /// Program that answered the version query, when one did.
    pub program: Option<String>,
    /// Query outcome.
    pub status: VersionQuery,
}

impl ToolCheck {
    /// Whether the tool is present.
    pub fn is_found(&self) -> bool {
        self.status.is_found()
    }

    /// Reported version, when present.
    pub fn version(&self) -> Option<&str> {
        match &self.status {
            VersionQuery::Found { version } => Some(version),
            VersionQuery::Missing { .. } => None,
        }
    }

    /// Line reported to the user for this check.
    pub fn summary(&self) -> String {
        let verb = if self.tool.is_package_manager() {
            "available"
        } else {
            "installed"
        };
        match self.version() {
            Some(v) if !v.is_empty() => format!("{} {} is {}", self.tool, v, verb),
            Some(_) => format!("{} is {}", self.tool, verb),
            None => format!("{} is not {}", self.tool, verb),
        }
    }
}

/// Results for every prerequisite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrerequisiteReport {
    /// One entry per [`Prerequisite::ALL`] item, in the same order.
    pub checks: Vec<ToolCheck>,
}

impl PrerequisiteReport {
    /// Look up the check for `tool`.
    pub fn get(&self, tool: Prerequisite) -> Option<&ToolCheck> {
        self.checks.iter().find(|c| c.tool == tool)
    }

    /// Whether `tool` was found.
    pub fn is_found(&self, tool: Prerequisite) -> bool {
        self.get(tool).is_some_and(ToolCheck::is_found)
    }

    /// Node dependencies can only be installed with both node and npm.
    pub fn node_ready(&self) -> bool {
        self.is_found(Prerequisite::Node) && self.is_found(Prerequisite::Npm)
    }

    /// The Python interpreter that answered, if any.
    pub fn python_program(&self) -> Option<&str> {
        self.get(Prerequisite::Python)
            .and_then(|c| c.program.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found(tool: Prerequisite, program: &str, version: &str) -> ToolCheck {
        ToolCheck {
            tool,
            program: Some(program.to_string()),
            status: VersionQuery::Found {
                version: version.to_string(),
            },
        }
    }

    fn missing(tool: Prerequisite) -> ToolCheck {
        ToolCheck {
            tool,
            program: None,
            status: VersionQuery::Missing {
                reason: "not found".to_string(),
            },
        }
    }

    #[test]
    fn summary_wording_for_runtime_and_manager() {
        assert_eq!(
            found(Prerequisite::Node, "node", "18.17.0").summary(),
            "Node.js 18.17.0 is installed"
        );
        assert_eq!(
            found(Prerequisite::Npm, "npm", "9.6.7").summary(),
            "npm 9.6.7 is available"
        );
        assert_eq!(missing(Prerequisite::Npm).summary(), "npm is not available");
        assert_eq!(
            missing(Prerequisite::Python).summary(),
            "Python is not installed"
        );
    }

    #[test]
    fn summary_without_version_number() {
        assert_eq!(
            found(Prerequisite::Python, "python3", "").summary(),
            "Python is installed"
        );
    }

    #[test]
    fn node_ready_requires_node_and_npm() {
        let report = PrerequisiteReport {
            checks: vec![
                missing(Prerequisite::Python),
                found(Prerequisite::Node, "node", "20.1.0"),
                missing(Prerequisite::Npm),
            ],
        };
        assert!(!report.node_ready());

        let report = PrerequisiteReport {
            checks: vec![
                missing(Prerequisite::Python),
                found(Prerequisite::Node, "node", "20.1.0"),
                found(Prerequisite::Npm, "npm", "10.0.0"),
            ],
        };
        assert!(report.node_ready());
    }

    #[test]
    fn python_program_is_reported() {
        let report = PrerequisiteReport {
            checks: vec![found(Prerequisite::Python, "python", "3.12.1")],
        };
        assert_eq!(report.python_program(), Some("python"));
    }

    #[test]
    fn python_commands_prefer_python3() {
        assert_eq!(
            Prerequisite::Python.version_commands()[0],
            "python3 --version"
        );
    }
}
