//! CLI command handlers
//!
//! Each mode of the CLI (`--pkg-info`, `--pkg-add`, `--pkg-rm`) has a handler
//! here, plus the precondition check every run starts with. Handlers print as
//! they go and return a small report of what happened to each package.

pub mod add;
pub mod check;
pub mod info;
pub mod remove;

use crate::config::Settings;
use crate::error::{MixError, Result};
use crate::manifest::Manifest;
use crate::mix::{BuildTool, MixTask, ToolOutput};
use crate::ui::{self, Style};

/// Everything a handler needs: the tool, the file, and how to print.
pub struct Project<'a> {
    tool: &'a dyn BuildTool,
    manifest: Manifest,
    manifest_name: String,
    style: Style,
    match_indent: bool,
    verbose: bool,
}

impl<'a> Project<'a> {
    pub fn new(settings: &Settings, tool: &'a dyn BuildTool, style: Style, verbose: bool) -> Self {
        Self {
            tool,
            manifest: Manifest::new(settings.manifest.clone()),
            manifest_name: settings.manifest_name(),
            style,
            match_indent: settings.match_indent,
            verbose,
        }
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    pub fn manifest_name(&self) -> &str {
        &self.manifest_name
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Run `task` behind a spinner, echoing the command line first in verbose mode.
    pub fn mix(&self, task: &MixTask, message: &str) -> Result<ToolOutput> {
        let args = task.args();
        if self.verbose {
            println!(
                "{}",
                self.style
                    .detail(format!("$ {}", self.tool.command_line(&args)))
            );
        }
        ui::with_spinner(&self.style, message, || self.tool.run(&args))
    }

    /// Print a one-line failure; the underlying cause only in verbose mode.
    pub fn report_failure(&self, summary: &str, err: &MixError) {
        eprintln!("{}", self.style.error(summary));
        if self.verbose {
            eprintln!("{}", err);
        }
    }
}
