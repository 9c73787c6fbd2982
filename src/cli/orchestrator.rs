//! Runs the selected steps in their fixed order.
//!
//! Every step reports through the UI and records an outcome; none of them
//! stops the run. The process exit code is 0 whenever the run completes.

use std::path::PathBuf;

use crate::config::DevstrapConfig;
use crate::detection::Platform;
use crate::environment::{EnvFileMaterializer, EnvFileOutcome};
use crate::health::{HealthOutcome, HealthProber};
use crate::installer::{InstallOutcome, NodeInstaller, PythonInstaller};
use crate::requirements::{PrerequisiteChecker, PrerequisiteReport};
use crate::server::{InterruptFlag, ServerExit, ServerLauncher};
use crate::ui::{hints, UserInterface};

use super::plan::ActionPlan;

/// What each step of a run produced. Steps that did not run are `None`.
#[derive(Debug)]
pub struct RunSummary {
    pub platform: Platform,
    pub prerequisites: PrerequisiteReport,
    pub python: Option<InstallOutcome>,
    pub node: Option<InstallOutcome>,
    pub env_file: Option<EnvFileOutcome>,
    pub health: Option<HealthOutcome>,
    pub server: Option<ServerExit>,
}

/// Sequences the bootstrap steps for one project.
pub struct Orchestrator {
    project_root: PathBuf,
    config: DevstrapConfig,
    interrupt: Option<InterruptFlag>,
}

impl Orchestrator {
    /// Create an orchestrator for `project_root`.
    pub fn new(project_root: PathBuf, config: DevstrapConfig) -> Self {
        Self {
            project_root,
            config,
            interrupt: None,
        }
    }

    /// Use `interrupt` instead of the process-wide Ctrl+C flag.
    pub fn with_interrupt(mut self, interrupt: InterruptFlag) -> Self {
        self.interrupt = Some(interrupt);
        self
    }

    /// Run every step the plan selects.
    pub fn run(&self, plan: &ActionPlan, ui: &mut dyn UserInterface) -> RunSummary {
        tracing::debug!("Running {:?} in {}", plan, self.project_root.display());

        ui.header("devstrap Cross-Platform Setup Utility");
        let platform = Platform::detect();
        ui.info(&format!("Platform: {}", platform));

        ui.header("Checking Prerequisites");
        let prerequisites =
            PrerequisiteChecker::new(&self.project_root, self.config.commands.timeout())
                .check_all(ui);

        let python = plan
            .runs_python()
            .then(|| self.install_python(&prerequisites, ui));

        let node = if plan.runs_node() {
            self.install_node(&prerequisites, ui)
        } else {
            None
        };

        let env_file = plan.runs_env_file().then(|| {
            ui.header("Environment Configuration");
            EnvFileMaterializer::new(&self.project_root, &self.config.env_file).materialize(ui)
        });

        let health = plan.health.then(|| {
            ui.header("Health Check");
            HealthProber::new(plan.port, &self.config.health).probe(ui)
        });

        let server = plan.start.then(|| {
            ui.header("Starting Development Server");
            let interrupt = self.interrupt.clone().unwrap_or_else(InterruptFlag::process);
            ServerLauncher::new(&self.project_root, &self.config.server, interrupt).start(ui)
        });

        if plan.setup {
            self.print_completion(ui);
        }

        RunSummary {
            platform,
            prerequisites,
            python,
            node,
            env_file,
            health,
            server,
        }
    }

    fn install_python(
        &self,
        prerequisites: &PrerequisiteReport,
        ui: &mut dyn UserInterface,
    ) -> InstallOutcome {
        ui.header("Python Setup");
        PythonInstaller::new(&self.project_root, &self.config.python.requirements)
            .with_python(prerequisites.python_program())
            .with_timeouts(
                self.config.commands.timeout(),
                self.config.commands.install_timeout(),
            )
            .install(ui)
    }

    fn install_node(
        &self,
        prerequisites: &PrerequisiteReport,
        ui: &mut dyn UserInterface,
    ) -> Option<InstallOutcome> {
        if !prerequisites.node_ready() {
            ui.warning("Node.js/npm not available, skipping Node.js dependencies");
            return None;
        }
        ui.header("Node.js Setup");
        let installer =
            NodeInstaller::new(&self.project_root, self.config.commands.install_timeout());
        Some(installer.install(ui))
    }

    fn print_completion(&self, ui: &mut dyn UserInterface) {
        ui.header("Setup Complete");
        ui.success("devstrap setup completed successfully!");
        ui.info("Next steps:");
        let steps = hints::after_setup(
            &self.config.env_file.target,
            self.config.health.port,
            self.config.server.fallback_port,
        );
        for step in steps {
            ui.info(&step);
        }
    }
}
