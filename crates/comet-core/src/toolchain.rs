//! External tool invocation.
//!
//! Everything that shells out goes through the [`ToolRunner`] trait so the
//! scaffolder can be exercised without a Go installation. [`ProcessRunner`]
//! is the real implementation; [`GoToolchain`] builds the `go` commands the
//! CLI needs on top of any runner.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{CometError, Result};

/// A single command to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
    /// Kill the process if it has not exited after this long.
    pub timeout: Option<Duration>,
}

impl ToolInvocation {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            working_dir: None,
            timeout: None,
        }
    }

    pub fn in_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The command as a user would type it, for messages.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Captured output of a successful invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// stdout followed by stderr.
    pub combined: String,
}

/// Capability to run external commands.
#[async_trait]
pub trait ToolRunner: Send + Sync {
    /// Run the invocation to completion.
    ///
    /// A non-zero exit is an error ([`CometError::ExternalTool`]) carrying the
    /// combined output, so callers only see [`ToolOutput`] on success.
    async fn run(&self, invocation: &ToolInvocation) -> Result<ToolOutput>;
}

/// Runs commands as child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ToolRunner for ProcessRunner {
    async fn run(&self, invocation: &ToolInvocation) -> Result<ToolOutput> {
        which::which(&invocation.program).map_err(|_| CometError::MissingTool {
            name: invocation.program.clone(),
            install: install_hint(&invocation.program).into(),
        })?;

        let mut cmd = tokio::process::Command::new(&invocation.program);
        cmd.args(&invocation.args)
            .stdin(Stdio::null())
            .kill_on_drop(true);
        if let Some(dir) = &invocation.working_dir {
            cmd.current_dir(dir);
        }

        tracing::debug!("running `{}`", invocation.command_line());

        let output = match invocation.timeout {
            Some(limit) => tokio::time::timeout(limit, cmd.output())
                .await
                .map_err(|_| CometError::ToolTimeout {
                    command: invocation.command_line(),
                    timeout: limit,
                })??,
            None => cmd.output().await?,
        };

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            return Err(CometError::ExternalTool {
                command: invocation.command_line(),
                output: combined.trim().to_string(),
            });
        }

        Ok(ToolOutput { combined })
    }
}

fn install_hint(program: &str) -> &'static str {
    match Path::new(program).file_stem().and_then(|s| s.to_str()) {
        Some("go") => "https://go.dev/doc/install",
        _ => "make sure it is on PATH",
    }
}

/// The `go` commands used by comet.
pub struct GoToolchain<'a> {
    runner: &'a dyn ToolRunner,
    binary: &'a str,
}

impl<'a> GoToolchain<'a> {
    pub fn new(runner: &'a dyn ToolRunner, binary: &'a str) -> Self {
        Self { runner, binary }
    }

    /// `go mod init <module>` inside `project_dir`.
    pub async fn init_module(&self, project_dir: &Path, module: &str) -> Result<()> {
        let invocation =
            ToolInvocation::new(self.binary, ["mod", "init", module]).in_dir(project_dir);
        self.runner.run(&invocation).await?;
        Ok(())
    }

    /// `go get -u <library>` inside `project_dir`, killed after `timeout`.
    pub async fn fetch_runtime(
        &self,
        project_dir: &Path,
        library: &str,
        timeout: Duration,
    ) -> Result<()> {
        let invocation = ToolInvocation::new(self.binary, ["get", "-u", library])
            .in_dir(project_dir)
            .with_timeout(timeout);
        let output = self.runner.run(&invocation).await?;
        tracing::debug!("go get output: {}", output.combined.trim());
        Ok(())
    }

    /// `go run .` inside `dir`.
    pub async fn run_project(&self, dir: &Path) -> Result<ToolOutput> {
        let invocation = ToolInvocation::new(self.binary, ["run", "."]).in_dir(dir);
        self.runner.run(&invocation).await
    }
}
