//! Configuration file discovery and loading.

use crate::config::schema::DevstrapConfig;
use crate::error::{DevstrapError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project configuration file.
pub const CONFIG_FILE_NAME: &str = ".devstrap.yml";

/// Location of the project config for `project_root`.
pub fn config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_FILE_NAME)
}

/// Parse configuration from YAML text.
///
/// `path` is only used for error messages.
pub fn parse_config(content: &str, path: &Path) -> Result<DevstrapConfig> {
    if content.trim().is_empty() {
        return Ok(DevstrapConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| DevstrapError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a single configuration file.
pub fn load_config_file(path: &Path) -> Result<DevstrapConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DevstrapError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DevstrapError::Io(e)
        }
    })?;
    parse_config(&content, path)
}

/// Load configuration for a project.
///
/// An explicit path must exist. Without one, `.devstrap.yml` in the
/// project root is used when present and defaults otherwise.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<DevstrapConfig> {
    if let Some(path) = explicit {
        tracing::debug!("Loading config from {}", path.display());
        return load_config_file(path);
    }

    let path = config_path(project_root);
    if path.is_file() {
        tracing::debug!("Loading config from {}", path.display());
        load_config_file(&path)
    } else {
        tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
        Ok(DevstrapConfig::default())
    }
}
