//! Configuration schema for `.devstrap.yml`.
//!
//! Every section and field is optional; a missing file is equivalent to
//! an empty one.

use serde::Deserialize;
use std::time::Duration;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DevstrapConfig {
    /// Health probe settings.
    pub health: HealthSettings,

    /// Development server settings.
    pub server: ServerSettings,

    /// Subprocess settings.
    pub commands: CommandSettings,

    /// Python dependency settings.
    pub python: PythonSettings,

    /// Environment file settings.
    pub env_file: EnvFileSettings,
}

/// Health probe settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HealthSettings {
    /// Default port when `--port` is not given.
    pub port: u16,

    /// Path of the health endpoint.
    pub path: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for HealthSettings {
    fn default() -> Self {
        Self {
            port: 3000,
            path: "/health".to_string(),
            timeout_secs: 5,
        }
    }
}

impl HealthSettings {
    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Development server settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSettings {
    /// Port of the built-in static file server.
    pub fallback_port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            fallback_port: 8080,
        }
    }
}

/// Subprocess settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CommandSettings {
    /// Timeout for version queries, in seconds.
    pub timeout_secs: u64,

    /// Timeout for package installs, in seconds.
    pub install_timeout_secs: u64,
}

impl Default for CommandSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            install_timeout_secs: 30,
        }
    }
}

impl CommandSettings {
    /// Timeout for version queries.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Timeout for package installs.
    pub fn install_timeout(&self) -> Duration {
        Duration::from_secs(self.install_timeout_secs)
    }
}

/// Python dependency settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PythonSettings {
    /// Requirement files to try, in order.
    pub requirements: Vec<String>,
}

impl Default for PythonSettings {
    fn default() -> Self {
        Self {
            requirements: vec![
                "requirements-minimal.txt".to_string(),
                "requirements.txt".to_string(),
            ],
        }
    }
}

/// Environment file settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvFileSettings {
    /// Template copied when the target is missing.
    pub template: String,

    /// File that gets created.
    pub target: String,
}

impl Default for EnvFileSettings {
    fn default() -> Self {
        Self {
            template: ".env.example".to_string(),
            target: ".env".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = DevstrapConfig::default();
        assert_eq!(config.health.port, 3000);
        assert_eq!(config.health.path, "/health");
        assert_eq!(config.health.timeout(), Duration::from_secs(5));
        assert_eq!(config.server.fallback_port, 8080);
        assert_eq!(config.commands.timeout(), Duration::from_secs(30));
        assert_eq!(config.commands.install_timeout(), Duration::from_secs(30));
        assert_eq!(
            config.python.requirements,
            vec!["requirements-minimal.txt", "requirements.txt"]
        );
        assert_eq!(config.env_file.template, ".env.example");
        assert_eq!(config.env_file.target, ".env");
    }

    #[test]
    fn install_timeout_can_be_raised() {
        let settings: CommandSettings =
            serde_yaml::from_str("install_timeout_secs: 900\n").unwrap();
        assert_eq!(settings.timeout(), Duration::from_secs(30));
        assert_eq!(settings.install_timeout(), Duration::from_secs(900));
    }
}
