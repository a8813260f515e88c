//! Running the binary under test as a subprocess

use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use tempfile::TempDir;
use tokio::process::Command;

use super::error::HarnessError;
use super::server::StubServer;

/// How long a single invocation may run before it is killed
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Environment the binary reads configuration from; cleared so the
/// developer's shell cannot leak into a scenario
const ISOLATED_ENV: &[&str] = &[
    "RUST_LOG",
    "DBCTL_ACCESS_TOKEN",
    "DBCTL_API_URL",
    "DBCTL_OUTPUT",
    "DBCTL_DEBUG",
];

/// Result of one completed subprocess run
#[derive(Debug)]
pub struct Invocation {
    /// stdout followed by stderr
    pub output: String,
    pub stdout: String,
    pub stderr: String,
    pub status: ExitStatus,
}

/// The CLI binary plus the credentials it is invoked with
pub struct CliUnderTest {
    binary: PathBuf,
    token: String,
    timeout: Duration,
    /// Holds an always-empty config location for the run
    scratch: TempDir,
}

impl CliUnderTest {
    /// The crate's own `dbctl` binary, authenticating with `token`
    pub fn new(token: &str) -> Self {
        Self::with_binary(assert_cmd::cargo::cargo_bin!("dbctl").to_path_buf(), token)
    }

    pub fn with_binary(binary: PathBuf, token: &str) -> Self {
        Self {
            binary,
            token: token.to_string(),
            timeout: DEFAULT_TIMEOUT,
            scratch: tempfile::tempdir().expect("failed to create scratch directory"),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the command: `<binary> -t <token> -u <base_url> <args...>`.
    ///
    /// This does NOT execute the command - use `run()` or `invoke()` for that.
    pub fn command(&self, base_url: &str, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.binary);
        cmd.args(["-t", &self.token, "-u", base_url])
            .args(args)
            .env("DBCTL_CONFIG", self.scratch.path().join("config.yaml"))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        for var in ISOLATED_ENV {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Run against `base_url` and capture the outcome whatever the exit status.
    ///
    /// Fails only if the process cannot start or outlives the timeout; in the
    /// latter case dropping the wait future kills the child.
    pub async fn run(&self, base_url: &str, args: &[&str]) -> Result<Invocation, HarnessError> {
        let child = self
            .command(base_url, args)
            .spawn()
            .map_err(|source| HarnessError::Spawn {
                binary: self.binary.display().to_string(),
                source,
            })?;

        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| HarnessError::ProcessTimeout {
                after: self.timeout,
            })?
            .map_err(|source| HarnessError::Spawn {
                binary: self.binary.display().to_string(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        Ok(Invocation {
            output: format!("{}{}", stdout, stderr),
            stdout,
            stderr,
            status: output.status,
        })
    }

    /// Run against `server` and require success.
    ///
    /// A fatal failure recorded by the stub (unexpected path, body mismatch)
    /// outranks the process result, since it is what made the client fail.
    pub async fn invoke(
        &self,
        server: &StubServer,
        args: &[&str],
    ) -> Result<Invocation, HarnessError> {
        let result = self.run(server.url(), args).await;
        server.verify()?;

        let invocation = result?;
        if !invocation.status.success() {
            return Err(HarnessError::ProcessFailure {
                status: invocation.status.to_string(),
                output: invocation.output,
            });
        }
        Ok(invocation)
    }
}
