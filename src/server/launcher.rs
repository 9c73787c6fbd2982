//! Starting the development server.

use serde_json::Value;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use crate::config::ServerSettings;
use crate::installer::PACKAGE_MANIFEST;
use crate::shell::{execute_foreground, CommandSpec};
use crate::ui::UserInterface;

use super::interrupt::InterruptFlag;
use super::static_files::StaticServer;

/// How the development server ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerExit {
    /// The server process exited on its own. `None` when killed by a signal.
    Exited { code: Option<i32> },
    /// The user pressed Ctrl+C.
    Interrupted,
    /// The server could not be started.
    FailedToStart { message: String },
}

/// Pick the npm script that starts a development server.
///
/// Prefers `dev`, then `start`; falls back to `dev` and lets npm report
/// the error.
pub fn select_script(manifest: &Value) -> &'static str {
    let scripts = manifest.get("scripts").and_then(Value::as_object);
    match scripts {
        Some(s) if s.contains_key("dev") => "dev",
        Some(s) if s.contains_key("start") => "start",
        _ => "dev",
    }
}

/// Runs the project's dev server, or serves static files.
#[derive(Debug, Clone)]
pub struct ServerLauncher {
    project_root: PathBuf,
    fallback_port: u16,
    npm: CommandSpec,
    interrupt: InterruptFlag,
}

impl ServerLauncher {
    /// Create a launcher for `project_root`.
    pub fn new(project_root: &Path, settings: &ServerSettings, interrupt: InterruptFlag) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            fallback_port: settings.fallback_port,
            npm: CommandSpec::new("npm", Vec::<String>::new()),
            interrupt,
        }
    }

    /// Use a different npm executable.
    pub fn with_npm(mut self, npm: CommandSpec) -> Self {
        self.npm = npm;
        self
    }

    /// The command that will start the Node.js server, if the project has one.
    pub fn node_command(&self) -> Option<CommandSpec> {
        let manifest = self.project_root.join(PACKAGE_MANIFEST);
        if !manifest.is_file() {
            return None;
        }

        let script = match std::fs::read_to_string(&manifest)
            .map_err(|e| e.to_string())
            .and_then(|s| serde_json::from_str::<Value>(&s).map_err(|e| e.to_string()))
        {
            Ok(value) => select_script(&value),
            Err(e) => {
                tracing::debug!("Could not read {}: {}", manifest.display(), e);
                "dev"
            }
        };

        let mut spec = self.npm.clone();
        spec.args.extend(["run".to_string(), script.to_string()]);
        Some(spec)
    }

    /// Start the server and block until it stops.
    pub fn start(&self, ui: &mut dyn UserInterface) -> ServerExit {
        ui.info("Starting development server...");
        self.interrupt.clear();

        let exit = match self.node_command() {
            Some(spec) => self.run_node(&spec, ui),
            None => self.run_static(ui),
        };

        match &exit {
            ServerExit::Interrupted => ui.info("Server stopped by user"),
            ServerExit::Exited { code: Some(0) } => {}
            ServerExit::Exited { code: Some(code) } => {
                ui.warning(&format!("Server exited with code {}", code))
            }
            ServerExit::Exited { code: None } => ui.warning("Server was terminated by a signal"),
            ServerExit::FailedToStart { message } => {
                ui.error(&format!("Failed to start server: {}", message))
            }
        }
        exit
    }

    fn run_node(&self, spec: &CommandSpec, ui: &mut dyn UserInterface) -> ServerExit {
        ui.info("Starting Node.js development server...");
        ui.command_output(&format!("$ {}", spec));

        match execute_foreground(spec, Some(&self.project_root)) {
            // The child shares our terminal, so Ctrl+C reaches both of us.
            Ok(_) if self.interrupt.is_raised() => ServerExit::Interrupted,
            Ok(status) => ServerExit::Exited {
                code: status.code(),
            },
            Err(e) => ServerExit::FailedToStart {
                message: e.to_string(),
            },
        }
    }

    fn run_static(&self, ui: &mut dyn UserInterface) -> ServerExit {
        ui.info("Starting built-in static file server...");
        let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.fallback_port));

        let server = match StaticServer::bind(&self.project_root, addr) {
            Ok(server) => server,
            Err(e) => {
                return ServerExit::FailedToStart {
                    message: format!("cannot bind port {}: {}", self.fallback_port, e),
                }
            }
        };
        ui.info(&format!(
            "Server will be available at http://localhost:{}",
            self.fallback_port
        ));

        match server.serve_until(&self.interrupt) {
            Ok(()) => ServerExit::Interrupted,
            Err(e) => ServerExit::FailedToStart {
                message: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn launcher(temp: &TempDir) -> ServerLauncher {
        ServerLauncher::new(temp.path(), &ServerSettings::default(), InterruptFlag::new())
    }

    #[test]
    fn select_script_prefers_dev() {
        let manifest = json!({ "scripts": { "start": "node server.js", "dev": "nodemon" } });
        assert_eq!(select_script(&manifest), "dev");
    }

    #[test]
    fn select_script_falls_back_to_start() {
        let manifest = json!({ "scripts": { "start": "node server.js" } });
        assert_eq!(select_script(&manifest), "start");
    }

    #[test]
    fn select_script_defaults_to_dev() {
        assert_eq!(select_script(&json!({})), "dev");
        assert_eq!(select_script(&json!({ "scripts": { "test": "jest" } })), "dev");
    }

    #[test]
    fn node_command_requires_manifest() {
        let temp = TempDir::new().unwrap();
        assert!(launcher(&temp).node_command().is_none());
    }

    #[test]
    fn node_command_runs_selected_script() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(PACKAGE_MANIFEST),
            r#"{"scripts":{"start":"node server.js"}}"#,
        )
        .unwrap();

        let spec = launcher(&temp).node_command().unwrap();
        assert!(spec.to_string().ends_with("npm run start"));
    }

    #[test]
    fn unreadable_manifest_uses_dev() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PACKAGE_MANIFEST), "{ not json").unwrap();

        let spec = launcher(&temp).node_command().unwrap();
        assert!(spec.to_string().ends_with("npm run dev"));
    }

    #[cfg(unix)]
    #[test]
    fn node_server_exit_code_is_reported() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PACKAGE_MANIFEST), "{}").unwrap();
        let launcher = launcher(&temp).with_npm(CommandSpec::new("true", Vec::<String>::new()));
        let mut ui = MockUI::new();

        let exit = launcher.start(&mut ui);

        assert_eq!(exit, ServerExit::Exited { code: Some(0) });
        assert!(ui.has_info("Starting development server..."));
        assert!(ui.has_info("Starting Node.js development server..."));
    }

    #[cfg(unix)]
    #[test]
    fn node_server_failure_exit_is_a_warning() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PACKAGE_MANIFEST), "{}").unwrap();
        let launcher = launcher(&temp).with_npm(CommandSpec::new("false", Vec::<String>::new()));
        let mut ui = MockUI::new();

        let exit = launcher.start(&mut ui);

        assert_eq!(exit, ServerExit::Exited { code: Some(1) });
        assert!(ui.has_warning("Server exited with code 1"));
    }

    #[cfg(unix)]
    #[test]
    fn missing_npm_fails_to_start() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PACKAGE_MANIFEST), "{}").unwrap();
        let launcher = launcher(&temp).with_npm(CommandSpec::new(
            "devstrap-no-such-npm",
            Vec::<String>::new(),
        ));
        let mut ui = MockUI::new();

        let exit = launcher.start(&mut ui);

        assert!(matches!(exit, ServerExit::FailedToStart { .. }));
        assert!(ui.has_error("Failed to start server"));
    }

    fn free_port() -> u16 {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    }

    #[test]
    fn static_fallback_stops_on_interrupt() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("index.html"), "<h1>home</h1>").unwrap();
        let port = free_port();
        let interrupt = InterruptFlag::new();
        let launcher = ServerLauncher::new(
            temp.path(),
            &ServerSettings {
                fallback_port: port,
            },
            interrupt.clone(),
        );

        // Raise the flag only once the server is accepting connections,
        // since `start` clears it on entry.
        let stopper = std::thread::spawn(move || {
            let deadline = std::time::Instant::now() + std::time::Duration::from_secs(10);
            while std::net::TcpStream::connect(("127.0.0.1", port)).is_err() {
                assert!(std::time::Instant::now() < deadline, "server never listened");
                std::thread::sleep(std::time::Duration::from_millis(20));
            }
            interrupt.raise();
        });
        let mut ui = MockUI::new();

        let exit = launcher.start(&mut ui);
        stopper.join().unwrap();

        assert_eq!(exit, ServerExit::Interrupted);
        assert!(ui.has_info(&format!(
            "Server will be available at http://localhost:{}",
            port
        )));
        assert!(ui.has_info("Server stopped by user"));
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn static_server_port_in_use_fails_to_start() {
        let temp = TempDir::new().unwrap();
        let taken = std::net::TcpListener::bind("0.0.0.0:0").unwrap();
        let settings = ServerSettings {
            fallback_port: taken.local_addr().unwrap().port(),
        };
        let launcher = ServerLauncher::new(temp.path(), &settings, InterruptFlag::new());
        let mut ui = MockUI::new();

        let exit = launcher.start(&mut ui);

        assert!(matches!(exit, ServerExit::FailedToStart { .. }));
        assert!(ui.has_error("cannot bind port"));
    }
}
