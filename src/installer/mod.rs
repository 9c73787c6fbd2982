//! Dependency installation through external package managers.
//!
//! Each installer looks for its manifest in the project root and, when
//! found, runs the package manager against it. Problems are reported to
//! the user and summarised in an [`InstallOutcome`]; nothing here aborts
//! the run.

pub mod node;
pub mod python;

use std::path::PathBuf;

pub use node::{NodeInstaller, PACKAGE_MANIFEST};
pub use python::PythonInstaller;

/// Result of an install step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Dependencies were installed from `manifest`.
    Installed { manifest: PathBuf },
    /// Nothing was attempted.
    Skipped { reason: String },
    /// The package manager ran and failed.
    Failed { manifest: PathBuf, detail: String },
}

impl InstallOutcome {
    /// Whether dependencies were installed.
    pub fn succeeded(&self) -> bool {
        matches!(self, InstallOutcome::Installed { .. })
    }

    /// Whether the step was skipped.
    pub fn is_skipped(&self) -> bool {
        matches!(self, InstallOutcome::Skipped { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_installed_counts_as_success() {
        let installed = InstallOutcome::Installed {
            manifest: PathBuf::from("requirements.txt"),
        };
        let skipped = InstallOutcome::Skipped {
            reason: "no manifest".into(),
        };
        let failed = InstallOutcome::Failed {
            manifest: PathBuf::from("package.json"),
            detail: "E404".into(),
        };

        assert!(installed.succeeded());
        assert!(!skipped.succeeded());
        assert!(skipped.is_skipped());
        assert!(!failed.succeeded());
        assert!(!failed.is_skipped());
    }
}
