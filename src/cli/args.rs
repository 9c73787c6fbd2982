//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

/// devstrap - Cross-platform development environment bootstrap utility.
///
/// Without any action flag a full setup runs (same as `--setup`).
#[derive(Debug, Parser)]
#[command(name = "devstrap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run full setup (prerequisites, dependencies, .env)
    #[arg(long)]
    pub setup: bool,

    /// Install Python requirements
    #[arg(long)]
    pub install_python: bool,

    /// Install Node.js dependencies
    #[arg(long)]
    pub install_node: bool,

    /// Create .env from .env.example
    #[arg(long)]
    pub create_env: bool,

    /// Check server health
    #[arg(long)]
    pub health: bool,

    /// Start development server
    #[arg(long)]
    pub start: bool,

    /// Port for the health check [default: 3000]
    #[arg(long, env = "DEVSTRAP_PORT")]
    pub port: Option<u16>,

    /// Path to config file (overrides default .devstrap.yml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Whether any of the action switches was given.
    ///
    /// `--port` and the output/config flags are not actions.
    pub fn has_action(&self) -> bool {
        [
            self.setup,
            self.install_python,
            self.install_node,
            self.create_env,
            self.health,
            self.start,
        ]
        .into_iter()
        .any(|flag| flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_action_flags() {
        let cli = Cli::try_parse_from(["devstrap", "--install-node", "--create-env"]).unwrap();
        assert!(cli.install_node);
        assert!(cli.create_env);
        assert!(!cli.setup);
        assert!(cli.has_action());
    }

    #[test]
    fn no_flags_has_no_action() {
        let cli = Cli::try_parse_from(["devstrap"]).unwrap();
        assert!(!cli.has_action());
    }

    #[test]
    fn port_and_ambient_flags_are_not_actions() {
        let cli = Cli::try_parse_from([
            "devstrap",
            "--port",
            "4000",
            "--verbose",
            "--no-color",
            "--debug",
            "--project",
            "/tmp",
        ])
        .unwrap();
        assert_eq!(cli.port, Some(4000));
        assert!(!cli.has_action());
    }

    #[test]
    fn rejects_non_numeric_port() {
        assert!(Cli::try_parse_from(["devstrap", "--port", "abc"]).is_err());
        assert!(Cli::try_parse_from(["devstrap", "--port", "70000"]).is_err());
    }

    #[test]
    fn verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["devstrap", "-v", "-q"]).is_err());
    }
}
