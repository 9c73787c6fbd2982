//! Python requirements installation.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::detection::VersionDetector;
use crate::shell::{execute_quiet, CommandSpec};
use crate::ui::UserInterface;

use super::InstallOutcome;

/// Installs Python packages from the first usable requirements file.
#[derive(Debug, Clone)]
pub struct PythonInstaller {
    project_root: PathBuf,
    requirements: Vec<String>,
    python: Option<String>,
    pip: Option<CommandSpec>,
    query_timeout: Duration,
    install_timeout: Duration,
}

impl PythonInstaller {
    /// Create an installer trying `requirements` (relative to the project
    /// root) in order.
    pub fn new(project_root: &Path, requirements: &[String]) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            requirements: requirements.to_vec(),
            python: None,
            pip: None,
            query_timeout: Duration::from_secs(30),
            install_timeout: Duration::from_secs(30),
        }
    }

    /// Interpreter to fall back to for `<python> -m pip`.
    pub fn with_python(mut self, python: Option<&str>) -> Self {
        self.python = python.map(str::to_string);
        self
    }

    /// Use this pip command instead of discovering one.
    pub fn with_pip(mut self, pip: CommandSpec) -> Self {
        self.pip = Some(pip);
        self
    }

    /// Set the version-query and install timeouts.
    pub fn with_timeouts(mut self, query: Duration, install: Duration) -> Self {
        self.query_timeout = query;
        self.install_timeout = install;
        self
    }

    /// Requirement files that exist, in preference order.
    pub fn existing_manifests(&self) -> Vec<PathBuf> {
        self.requirements
            .iter()
            .map(|name| self.project_root.join(name))
            .filter(|path| path.is_file())
            .collect()
    }

    /// Install requirements, stopping at the first file that installs cleanly.
    pub fn install(&self, ui: &mut dyn UserInterface) -> InstallOutcome {
        ui.info("Installing Python requirements...");

        let manifests = self.existing_manifests();
        if manifests.is_empty() {
            let reason = "No requirements file found, skipping Python package installation";
            ui.warning(reason);
            return InstallOutcome::Skipped {
                reason: reason.to_string(),
            };
        }

        let Some(pip) = self.resolve_pip() else {
            let reason = "pip is not available, skipping Python package installation";
            ui.warning(reason);
            return InstallOutcome::Skipped {
                reason: reason.to_string(),
            };
        };

        let mut failure = None;
        for manifest in manifests {
            let name = display_name(&manifest);
            ui.info(&format!("Found {}", name));

            let mut spec = pip.clone();
            spec.args
                .extend(["install".to_string(), "-r".to_string(), name.clone()]);

            let mut spinner = ui.start_spinner(&format!("Running {}", spec));
            let result = execute_quiet(&spec, Some(&self.project_root), self.install_timeout);
            spinner.finish();

            let detail = match result {
                Ok(r) if r.success => {
                    ui.command_output(&r.stdout);
                    ui.success(&format!("Python packages installed from {}", name));
                    return InstallOutcome::Installed { manifest };
                }
                Ok(r) => r.failure_detail(),
                Err(e) => e.to_string(),
            };

            ui.warning(&format!("Failed to install from {}: {}", name, detail));
            failure = Some(InstallOutcome::Failed { manifest, detail });
        }

        failure.unwrap_or_else(|| InstallOutcome::Skipped {
            reason: "No requirements installed".to_string(),
        })
    }

    /// Find a working pip: `pip3`, `pip`, then `<python> -m pip`.
    fn resolve_pip(&self) -> Option<CommandSpec> {
        if let Some(pip) = &self.pip {
            return Some(pip.clone());
        }

        let mut candidates = vec![
            CommandSpec::new("pip3", Vec::<String>::new()),
            CommandSpec::new("pip", Vec::<String>::new()),
        ];
        if let Some(python) = &self.python {
            candidates.push(CommandSpec::new(python, ["-m", "pip"]));
        }

        candidates.into_iter().find(|candidate| {
            let query = format!("{} --version", candidate);
            VersionDetector::new(&query, self.query_timeout)
                .query(Some(&self.project_root))
                .is_found()
        })
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
