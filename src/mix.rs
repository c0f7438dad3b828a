//! Bridge to the external `mix` executable.
//!
//! Every call spawns one child process, waits for it, and captures both output
//! streams. Nothing is retried and nothing times out.

use crate::error::{MixError, Result};
use std::process::Command;

/// Captured output of a successful invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    pub stdout: String,
    pub stderr: String,
}

/// The mix subcommands this crate relies on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MixTask {
    /// `mix compile --dry-run`
    CompileCheck,
    /// `mix hex.info <name>`
    HexInfo(String),
    /// `mix deps.get`
    DepsGet,
    /// `mix deps.unlock <names...>`
    DepsUnlock(Vec<String>),
    /// `mix deps.clean <names...>`
    DepsClean(Vec<String>),
}

impl MixTask {
    pub fn args(&self) -> Vec<String> {
        let mut args: Vec<String> = match self {
            MixTask::CompileCheck => vec!["compile".into(), "--dry-run".into()],
            MixTask::HexInfo(name) => vec!["hex.info".into(), name.clone()],
            MixTask::DepsGet => vec!["deps.get".into()],
            MixTask::DepsUnlock(_) => vec!["deps.unlock".into()],
            MixTask::DepsClean(_) => vec!["deps.clean".into()],
        };
        if let MixTask::DepsUnlock(names) | MixTask::DepsClean(names) = self {
            args.extend(names.iter().cloned());
        }
        args
    }
}

/// A build tool that can be asked to run subcommands.
pub trait BuildTool {
    fn run(&self, args: &[String]) -> Result<ToolOutput>;

    /// Human readable command line, used in messages and verbose output.
    fn command_line(&self, args: &[String]) -> String {
        std::iter::once("mix".to_string())
            .chain(args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn exec(&self, task: &MixTask) -> Result<ToolOutput> {
        self.run(&task.args())
    }
}

/// The real `mix`, or whatever program the settings point at.
#[derive(Debug, Clone)]
pub struct Mix {
    program: String,
}

impl Mix {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for Mix {
    fn default() -> Self {
        Self::new("mix")
    }
}

impl BuildTool for Mix {
    fn run(&self, args: &[String]) -> Result<ToolOutput> {
        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|e| MixError::ExternalToolFailure {
                command: self.command_line(args),
                stderr: format!("could not start '{}': {}", self.program, e),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if output.status.success() {
            Ok(ToolOutput { stdout, stderr })
        } else {
            Err(MixError::ExternalToolFailure {
                command: self.command_line(args),
                stderr: if stderr.trim().is_empty() {
                    // mix prints most compile errors on stdout
                    stdout
                } else {
                    stderr
                },
            })
        }
    }

    fn command_line(&self, args: &[String]) -> String {
        std::iter::once(self.program.clone())
            .chain(args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
