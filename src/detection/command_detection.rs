//! Version queries against external tools.

use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;

use crate::shell::{execute_quiet, CommandSpec};

/// Outcome of asking a tool for its version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionQuery {
    /// The command succeeded; `version` is the parsed version, or the raw
    /// first output line when no version number could be extracted.
    Found { version: String },
    /// The command could not run, failed, or timed out.
    Missing { reason: String },
}

impl VersionQuery {
    /// Whether the tool answered.
    pub fn is_found(&self) -> bool {
        matches!(self, VersionQuery::Found { .. })
    }
}

/// Runs `<program> --version`-style commands and parses the answer.
#[derive(Debug, Clone)]
pub struct VersionDetector {
    command: CommandSpec,
    timeout: Duration,
}

impl VersionDetector {
    /// Create a detector from a full command string, e.g. `node --version`.
    pub fn new(command: &str, timeout: Duration) -> Self {
        Self {
            command: CommandSpec::from_string(command),
            timeout,
        }
    }

    /// The command that will be run.
    pub fn command(&self) -> &CommandSpec {
        &self.command
    }

    /// Run the query in `cwd`.
    pub fn query(&self, cwd: Option<&Path>) -> VersionQuery {
        match execute_quiet(&self.command, cwd, self.timeout) {
            Ok(result) if result.success => {
                // Python 2 prints its version on stderr.
                let output = if result.stdout.trim().is_empty() {
                    result.stderr
                } else {
                    result.stdout
                };
                let version = extract_version(&output).unwrap_or_else(|| first_line(&output));
                VersionQuery::Found { version }
            }
            Ok(result) => VersionQuery::Missing {
                reason: result.failure_detail(),
            },
            Err(e) => VersionQuery::Missing {
                reason: e.to_string(),
            },
        }
    }
}

fn version_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [r"(\d+\.\d+\.\d+)", r"version\s+(\d+\.\d+)", r"v?(\d+\.\d+)"]
            .iter()
            .filter_map(|p| Regex::new(p).ok())
            .collect()
    })
}

/// Extract a version number from command output.
///
/// A leading `v` (as printed by `node --version`) is dropped.
pub fn extract_version(output: &str) -> Option<String> {
    version_patterns().iter().find_map(|re| {
        re.captures(output)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    })
}

fn first_line(output: &str) -> String {
    output.lines().next().unwrap_or("").trim().to_string()
}
