//! Creating the working `.env` file from its template.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use crate::config::{EnvFile, EnvFileSettings};
use crate::ui::UserInterface;

/// Result of the env-file step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvFileOutcome {
    /// The target was created from the template.
    Created,
    /// The target already existed and was left untouched.
    AlreadyExists {
        /// Keys the template declares that the target lacks.
        missing_keys: Vec<String>,
    },
    /// Neither file exists; nothing was written.
    TemplateMissing,
    /// Copying failed.
    Failed { message: String },
}

impl EnvFileOutcome {
    /// Whether a usable target file is in place.
    pub fn succeeded(&self) -> bool {
        matches!(
            self,
            EnvFileOutcome::Created | EnvFileOutcome::AlreadyExists { .. }
        )
    }
}

/// Copies the env template to the target exactly once.
#[derive(Debug, Clone)]
pub struct EnvFileMaterializer {
    template: PathBuf,
    target: PathBuf,
}

impl EnvFileMaterializer {
    /// Create a materializer using the configured file names.
    pub fn new(project_root: &Path, settings: &EnvFileSettings) -> Self {
        Self::with_paths(
            project_root.join(&settings.template),
            project_root.join(&settings.target),
        )
    }

    /// Create a materializer for explicit paths.
    pub fn with_paths(template: PathBuf, target: PathBuf) -> Self {
        Self { template, target }
    }

    /// Ensure the target exists, copying the template if needed.
    ///
    /// An existing target is never written to.
    pub fn materialize(&self, ui: &mut dyn UserInterface) -> EnvFileOutcome {
        let target_name = file_label(&self.target);
        let template_name = file_label(&self.template);

        if self.target.exists() {
            ui.success(&format!("{} file already exists", target_name));
            let missing_keys = self.missing_keys();
            if !missing_keys.is_empty() {
                ui.warning(&format!(
                    "{} is missing keys declared in {}: {}",
                    target_name,
                    template_name,
                    missing_keys.join(", ")
                ));
            }
            return EnvFileOutcome::AlreadyExists { missing_keys };
        }

        let mut template = match File::open(&self.template) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                ui.warning(&format!("{} template not found", template_name));
                return EnvFileOutcome::TemplateMissing;
            }
            Err(e) => return self.report_failure(ui, &target_name, e),
        };

        ui.info(&format!("Creating {} file from template...", target_name));
        match self.copy_new(&mut template) {
            Ok(bytes) => {
                tracing::debug!("Copied {} bytes to {}", bytes, self.target.display());
                ui.success(&format!("{} file created successfully", target_name));
                ui.warning(&format!(
                    "Please edit {} file with your actual configuration",
                    target_name
                ));
                EnvFileOutcome::Created
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                // Appeared between the existence check and the create.
                ui.success(&format!("{} file already exists", target_name));
                EnvFileOutcome::AlreadyExists {
                    missing_keys: Vec::new(),
                }
            }
            Err(e) => self.report_failure(ui, &target_name, e),
        }
    }

    /// Keys in the template that the existing target does not declare.
    pub fn missing_keys(&self) -> Vec<String> {
        match (EnvFile::load(&self.template), EnvFile::load(&self.target)) {
            (Ok(template), Ok(target)) => template.missing_from(&target),
            (template, target) => {
                tracing::debug!(
                    "Skipping key comparison (template readable: {}, target readable: {})",
                    template.is_ok(),
                    target.is_ok()
                );
                Vec::new()
            }
        }
    }

    fn copy_new(&self, template: &mut File) -> io::Result<u64> {
        let mut target = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.target)?;

        match io::copy(template, &mut target) {
            Ok(bytes) => Ok(bytes),
            Err(e) => {
                drop(target);
                let _ = std::fs::remove_file(&self.target);
                Err(e)
            }
        }
    }

    fn report_failure(
        &self,
        ui: &mut dyn UserInterface,
        target_name: &str,
        e: io::Error,
    ) -> EnvFileOutcome {
        let message = e.to_string();
        ui.error(&format!("Failed to create {} file: {}", target_name, message));
        EnvFileOutcome::Failed { message }
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
