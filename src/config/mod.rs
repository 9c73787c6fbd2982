//! Configuration loading for devstrap.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - `.env` parsing in [`env_file`]
//!
//! # Example
//!
//! ```
//! use devstrap::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".devstrap.yml"), "health:\n  port: 4000\n").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.health.port, 4000);
//! assert_eq!(config.server.fallback_port, 8080);
//! ```

pub mod env_file;
pub mod loader;
pub mod schema;

pub use env_file::EnvFile;
pub use loader::{config_path, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::{
    CommandSettings, DevstrapConfig, EnvFileSettings, HealthSettings, PythonSettings,
    ServerSettings,
};
