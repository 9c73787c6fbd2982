//! Turning parsed flags into the list of steps to run.

use super::args::Cli;

/// Which steps a run performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionPlan {
    /// Full setup, including the closing banner.
    pub setup: bool,
    pub install_python: bool,
    pub install_node: bool,
    pub create_env: bool,
    pub health: bool,
    pub start: bool,
    /// Port probed by the health check.
    pub port: u16,
}

impl ActionPlan {
    /// Build the plan from CLI flags.
    ///
    /// With no action flag the plan is a full setup. `default_port` applies
    /// when `--port` was not given.
    pub fn from_cli(cli: &Cli, default_port: u16) -> Self {
        Self {
            setup: cli.setup || !cli.has_action(),
            install_python: cli.install_python,
            install_node: cli.install_node,
            create_env: cli.create_env,
            health: cli.health,
            start: cli.start,
            port: cli.port.unwrap_or(default_port),
        }
    }

    /// A full setup with no extra steps.
    pub fn setup(port: u16) -> Self {
        Self {
            setup: true,
            install_python: false,
            install_node: false,
            create_env: false,
            health: false,
            start: false,
            port,
        }
    }

    /// Whether Python requirements get installed.
    pub fn runs_python(&self) -> bool {
        self.setup || self.install_python
    }

    /// Whether Node.js dependencies get installed.
    pub fn runs_node(&self) -> bool {
        self.setup || self.install_node
    }

    /// Whether the env file gets created.
    pub fn runs_env_file(&self) -> bool {
        self.setup || self.create_env
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn plan(args: &[&str]) -> ActionPlan {
        let mut argv = vec!["devstrap"];
        argv.extend_from_slice(args);
        ActionPlan::from_cli(&Cli::try_parse_from(argv).unwrap(), 3000)
    }

    #[test]
    fn no_flags_is_setup() {
        assert_eq!(plan(&[]), ActionPlan::setup(3000));
        assert_eq!(plan(&[]), plan(&["--setup"]));
    }

    #[test]
    fn port_alone_is_still_setup() {
        let p = plan(&["--port", "5000"]);
        assert!(p.setup);
        assert_eq!(p.port, 5000);
    }

    #[test]
    fn single_action_excludes_others() {
        let p = plan(&["--create-env"]);
        assert!(!p.setup);
        assert!(p.runs_env_file());
        assert!(!p.runs_python());
        assert!(!p.runs_node());
        assert!(!p.health);
        assert!(!p.start);
    }

    #[test]
    fn setup_covers_install_steps() {
        let p = plan(&["--setup"]);
        assert!(p.runs_python() && p.runs_node() && p.runs_env_file());
        assert!(!p.health && !p.start);
    }

    #[test]
    fn default_port_comes_from_caller() {
        let cli = Cli::try_parse_from(["devstrap", "--health"]).unwrap();
        assert_eq!(ActionPlan::from_cli(&cli, 8000).port, 8000);
    }
}
