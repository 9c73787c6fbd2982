//! Node.js dependency installation.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::shell::{execute_quiet, CommandSpec};
use crate::ui::UserInterface;

use super::InstallOutcome;

/// The npm package manifest.
pub const PACKAGE_MANIFEST: &str = "package.json";

/// Runs `npm install` when the project has a `package.json`.
#[derive(Debug, Clone)]
pub struct NodeInstaller {
    project_root: PathBuf,
    npm: CommandSpec,
    timeout: Duration,
}

impl NodeInstaller {
    /// Create an installer for `project_root`.
    pub fn new(project_root: &Path, timeout: Duration) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            npm: CommandSpec::new("npm", ["install"]),
            timeout,
        }
    }

    /// Use a different install command.
    pub fn with_command(mut self, npm: CommandSpec) -> Self {
        self.npm = npm;
        self
    }

    /// Path of the manifest this installer looks for.
    pub fn manifest(&self) -> PathBuf {
        self.project_root.join(PACKAGE_MANIFEST)
    }

    /// Install dependencies.
    pub fn install(&self, ui: &mut dyn UserInterface) -> InstallOutcome {
        let manifest = self.manifest();
        if !manifest.is_file() {
            let reason = format!("{} not found", PACKAGE_MANIFEST);
            ui.warning(&reason);
            return InstallOutcome::Skipped { reason };
        }

        ui.info("Installing Node.js dependencies...");
        let mut spinner = ui.start_spinner(&format!("Running {}", self.npm));
        let result = execute_quiet(&self.npm, Some(&self.project_root), self.timeout);
        spinner.finish();

        let detail = match result {
            Ok(r) if r.success => {
                ui.command_output(&r.stdout);
                ui.success("Node.js dependencies installed successfully");
                return InstallOutcome::Installed { manifest };
            }
            Ok(r) => r.failure_detail(),
            Err(e) => e.to_string(),
        };

        ui.error(&format!("Failed to install Node.js dependencies: {}", detail));
        InstallOutcome::Failed { manifest, detail }
    }
}
