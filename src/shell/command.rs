//! External command execution.
//!
//! Commands are spawned directly (no intermediate shell) so that argument
//! handling is identical on every platform. On Windows the program is routed
//! through `cmd /C`, which is what resolves `npm.cmd` and friends.

use crate::error::{DevstrapError, Result};
use std::collections::HashMap;
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// How often a running child is polled while waiting for a deadline.
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// A program plus its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Program name or path.
    pub program: String,
    /// Arguments passed verbatim.
    pub args: Vec<String>,
}

impl CommandSpec {
    /// Create a command from a program and arguments.
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Create from a whitespace-separated command string.
    pub fn from_string(cmd: &str) -> Self {
        let mut parts = cmd.split_whitespace();
        let program = parts.next().unwrap_or_default().to_string();
        Self {
            program,
            args: parts.map(str::to_string).collect(),
        }
    }

    fn to_command(&self) -> Command {
        if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(&self.program).args(&self.args);
            cmd
        } else {
            let mut cmd = Command::new(&self.program);
            cmd.args(&self.args);
            cmd
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    fn from_status(status: ExitStatus, stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: status.code(),
            stdout,
            stderr,
            duration,
            success: status.success(),
        }
    }

    /// Best available description of why the command failed.
    ///
    /// Prefers stderr, then stdout, then the exit code.
    pub fn failure_detail(&self) -> String {
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            return stderr.to_string();
        }
        let stdout = self.stdout.trim();
        if !stdout.is_empty() {
            return stdout.to_string();
        }
        match self.exit_code {
            Some(code) => format!("exited with code {}", code),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Environment variables (merged with system env).
    pub env: HashMap<String, String>,

    /// Capture stdout (if false, inherits from parent).
    pub capture_stdout: bool,

    /// Capture stderr (if false, inherits from parent).
    pub capture_stderr: bool,

    /// Kill the command once this much time has passed.
    pub timeout: Option<Duration>,
}

impl CommandOptions {
    /// Capture both streams, run in `cwd`, and give up after `timeout`.
    pub fn captured(cwd: Option<&Path>, timeout: Duration) -> Self {
        Self {
            cwd: cwd.map(Path::to_path_buf),
            capture_stdout: true,
            capture_stderr: true,
            timeout: Some(timeout),
            ..Default::default()
        }
    }
}

/// Execute a command, waiting at most `options.timeout`.
///
/// Captured pipes are drained on helper threads while the child is polled,
/// so a command producing a lot of output cannot block on a full pipe.
pub fn execute(spec: &CommandSpec, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();
    let mut cmd = spec.to_command();

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    for (key, value) in &options.env {
        cmd.env(key, value);
    }

    if options.capture_stdout || options.capture_stderr {
        cmd.stdin(Stdio::null());
    }
    cmd.stdout(if options.capture_stdout {
        Stdio::piped()
    } else {
        Stdio::inherit()
    });
    cmd.stderr(if options.capture_stderr {
        Stdio::piped()
    } else {
        Stdio::inherit()
    });

    tracing::debug!("Running `{}`", spec);

    let mut child = cmd.spawn().map_err(|e| DevstrapError::CommandSpawn {
        command: spec.to_string(),
        message: e.to_string(),
    })?;

    let stdout_reader = child.stdout.take().map(|out| thread::spawn(move || drain(out)));
    let stderr_reader = child.stderr.take().map(|err| thread::spawn(move || drain(err)));

    let deadline = options.timeout.map(|t| (start + t, t));
    // Reader threads are left detached whenever the child is abandoned: a
    // grandchild may still hold the pipes open after the kill.
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {}
            Err(e) => {
                abandon(&mut child);
                return Err(e.into());
            }
        }
        if let Some((deadline, limit)) = deadline {
            if Instant::now() >= deadline {
                abandon(&mut child);
                tracing::debug!("`{}` killed after {:?}", spec, limit);
                return Err(DevstrapError::CommandTimeout {
                    command: spec.to_string(),
                    seconds: limit.as_secs(),
                });
            }
        }
        thread::sleep(POLL_INTERVAL);
    };

    let stdout = stdout_reader
        .map(|h| h.join().unwrap_or_default())
        .unwrap_or_default();
    let stderr = stderr_reader
        .map(|h| h.join().unwrap_or_default())
        .unwrap_or_default();

    let duration = start.elapsed();
    tracing::debug!(
        "`{}` finished with {:?} in {:?}",
        spec,
        status.code(),
        duration
    );

    Ok(CommandResult::from_status(status, stdout, stderr, duration))
}

/// Execute a command with captured output and a timeout.
pub fn execute_quiet(spec: &CommandSpec, cwd: Option<&Path>, timeout: Duration) -> Result<CommandResult> {
    execute(spec, &CommandOptions::captured(cwd, timeout))
}

/// Run a command attached to the terminal and block until it exits.
pub fn execute_foreground(spec: &CommandSpec, cwd: Option<&Path>) -> Result<ExitStatus> {
    let mut cmd = spec.to_command();
    if let Some(cwd) = cwd {
        cmd.current_dir(cwd);
    }
    cmd.stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    tracing::debug!("Running `{}` in the foreground", spec);

    cmd.status().map_err(|e| DevstrapError::CommandSpawn {
        command: spec.to_string(),
        message: e.to_string(),
    })
}

/// Kill a child we are giving up on and reap it.
fn abandon(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

fn drain<R: Read>(mut reader: R) -> String {
    let mut buf = Vec::new();
    let _ = reader.read_to_end(&mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sh(script: &str) -> CommandSpec {
        CommandSpec::new("sh", ["-c", script])
    }

    #[cfg(unix)]
    #[test]
    fn abandon_kills_and_reaps_running_child() {
        let mut child = sh("sleep 30").to_command().spawn().unwrap();
        assert!(child.try_wait().unwrap().is_none());

        let start = Instant::now();
        abandon(&mut child);

        assert!(start.elapsed() < Duration::from_secs(5));
        assert!(child.try_wait().unwrap().is_some());
    }

    #[test]
    fn from_string_splits_program_and_args() {
        let spec = CommandSpec::from_string("npm   install --silent");
        assert_eq!(spec.program, "npm");
        assert_eq!(spec.args, vec!["install", "--silent"]);
    }

    #[test]
    fn display_joins_program_and_args() {
        let spec = CommandSpec::new("pip", ["install", "-r", "requirements.txt"]);
        assert_eq!(spec.to_string(), "pip install -r requirements.txt");
    }

    #[test]
    fn failure_detail_prefers_stderr() {
        let result = CommandResult {
            exit_code: Some(1),
            stdout: "out".into(),
            stderr: "  boom \n".into(),
            duration: Duration::ZERO,
            success: false,
        };
        assert_eq!(result.failure_detail(), "boom");
    }

    #[test]
    fn failure_detail_falls_back_to_exit_code() {
        let result = CommandResult {
            exit_code: Some(3),
            stdout: String::new(),
            stderr: String::new(),
            duration: Duration::ZERO,
            success: false,
        };
        assert_eq!(result.failure_detail(), "exited with code 3");
    }

    #[cfg(unix)]
    #[test]
    fn execute_successful_command() {
        let result = execute_quiet(&sh("echo hello"), None, Duration::from_secs(10)).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
    }

    #[cfg(unix)]
    #[test]
    fn execute_failing_command_captures_stderr() {
        let result =
            execute_quiet(&sh("echo nope >&2; exit 2"), None, Duration::from_secs(10)).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(2));
        assert!(result.stderr.contains("nope"));
    }

    #[cfg(unix)]
    #[test]
    fn execute_with_env() {
        let mut options = CommandOptions::captured(None, Duration::from_secs(10));
        options
            .env
            .insert("MY_VAR".to_string(), "my_value".to_string());

        let result = execute(&sh("echo $MY_VAR"), &options).unwrap();

        assert!(result.stdout.contains("my_value"));
    }

    #[cfg(unix)]
    #[test]
    fn execute_with_cwd() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("marker.txt"), "x").unwrap();

        let result = execute_quiet(&sh("ls"), Some(temp.path()), Duration::from_secs(10)).unwrap();

        assert!(result.stdout.contains("marker.txt"));
    }

    #[cfg(unix)]
    #[test]
    fn execute_times_out() {
        let start = Instant::now();
        let err = execute_quiet(&sh("sleep 5"), None, Duration::from_millis(200)).unwrap_err();

        assert!(matches!(err, DevstrapError::CommandTimeout { .. }));
        assert!(start.elapsed() < Duration::from_secs(4));
    }

    #[test]
    fn execute_missing_program_is_spawn_error() {
        let spec = CommandSpec::new("this-command-does-not-exist-12345", ["--version"]);
        let result = execute_quiet(&spec, None, Duration::from_secs(5));

        // On Windows `cmd /C` itself spawns and reports a non-zero exit instead.
        match result {
            Err(DevstrapError::CommandSpawn { command, .. }) => {
                assert!(command.contains("this-command-does-not-exist-12345"))
            }
            Ok(r) => assert!(!r.success),
            Err(other) => panic!("unexpected error: {}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn execute_foreground_returns_status() {
        let status = execute_foreground(&sh("exit 4"), None).unwrap();
        assert_eq!(status.code(), Some(4));
    }
}
