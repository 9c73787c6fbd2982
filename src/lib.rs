//! devstrap - Cross-platform development environment bootstrap.
//!
//! devstrap checks that a project's language runtimes are installed,
//! installs its Python and Node.js dependencies, creates a `.env` from
//! `.env.example`, and can probe or start the local development server.
//!
//! # Modules
//!
//! - [`cli`] - Argument parsing and the step orchestrator
//! - [`config`] - `.devstrap.yml` loading and `.env` parsing
//! - [`detection`] - Platform and tool version detection
//! - [`environment`] - Creating `.env` from its template
//! - [`error`] - Error types and result aliases
//! - [`health`] - HTTP health probe
//! - [`installer`] - Python and Node.js dependency installation
//! - [`requirements`] - Prerequisite checks
//! - [`server`] - Development server and static file fallback
//! - [`shell`] - Subprocess execution with timeouts
//! - [`ui`] - Colored and plain terminal output
//!
//! # Example
//!
//! ```
//! use devstrap::cli::{ActionPlan, Cli};
//! use clap::Parser;
//!
//! // No action flags means a full setup.
//! let cli = Cli::parse_from(["devstrap", "--port", "4000"]);
//! let plan = ActionPlan::from_cli(&cli, 3000);
//! assert!(plan.setup);
//! assert_eq!(plan.port, 4000);
//! ```

pub mod cli;
pub mod config;
pub mod detection;
pub mod environment;
pub mod error;
pub mod health;
pub mod installer;
pub mod requirements;
pub mod server;
pub mod shell;
pub mod ui;

pub use error::{DevstrapError, Result};
