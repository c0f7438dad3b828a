//! # mixdeps CLI Entry Point
//!
//! Parses the command line with clap, checks that the project is usable, and
//! then runs each requested mode in order: info, add, remove.

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

use mixdeps::commands::{self, Project};
use mixdeps::config::{Overrides, SETTINGS_FILE, Settings};
use mixdeps::mix::Mix;
use mixdeps::ui::Style;

#[cfg(windows)]
#[link(name = "kernel32")]
unsafe extern "system" {
    fn SetConsoleOutputCP(wCodePageID: u32) -> i32;
}

#[cfg(windows)]
fn enable_windows_utf8_console() {
    unsafe {
        SetConsoleOutputCP(65001);
    }
}

#[cfg(not(windows))]
fn enable_windows_utf8_console() {}

const EXAMPLES: &str = "\
Examples:

  # Fetch package info
  mixdeps --pkg-info ecto
  mixdeps --pkg-info ecto_sql postgrex

  # Add dependencies (latest version)
  mixdeps --pkg-add ecto ecto_sql

  # Add a dependency with a specific version
  mixdeps --pkg-add postgrex=0.20.0

  # Remove dependencies
  mixdeps --pkg-rm ecto ecto_sql
";

#[derive(Parser)]
#[command(name = "mixdeps")]
#[command(about = "Manage Elixir dependencies in mix.exs", version = env!("CARGO_PKG_VERSION"))]
#[command(after_help = EXAMPLES)]
struct Cli {
    /// Fetch package information
    #[arg(long = "pkg-info", value_name = "NAME", num_args = 1..)]
    pkg_info: Vec<String>,

    /// Add dependencies to mix.exs (latest or NAME=VERSION)
    #[arg(long = "pkg-add", value_name = "NAME[=VERSION]", num_args = 1..)]
    pkg_add: Vec<String>,

    /// Remove dependencies from mix.exs
    #[arg(long = "pkg-rm", value_name = "NAME", num_args = 1..)]
    pkg_rm: Vec<String>,

    /// mix executable to run
    #[arg(long, value_name = "PROGRAM", env = "MIXDEPS_MIX")]
    mix: Option<String>,

    /// Path to the project's mix.exs
    #[arg(long, value_name = "PATH", env = "MIXDEPS_MANIFEST")]
    manifest_path: Option<PathBuf>,

    /// Indent new entries like the existing ones instead of six spaces
    #[arg(long)]
    match_indent: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Echo mix commands and show their errors in full
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    enable_windows_utf8_console();

    let cli = Cli::parse();
    let style = Style::detect(cli.no_color);

    let settings = Settings::load(Path::new(SETTINGS_FILE))?.apply(Overrides {
        mix: cli.mix,
        manifest: cli.manifest_path,
        match_indent: cli.match_indent,
    });

    let mix = Mix::new(settings.mix.clone());
    let project = Project::new(&settings, &mix, style, cli.verbose);

    if let Err(e) = commands::check::run(&project) {
        eprintln!("{}", commands::check::describe_failure(&project, &e));
        std::process::exit(1);
    }

    if !cli.pkg_info.is_empty() {
        commands::info::run(&project, &cli.pkg_info);
    }

    if !cli.pkg_add.is_empty() {
        commands::add::run(&project, &cli.pkg_add);
    }

    if !cli.pkg_rm.is_empty() {
        commands::remove::run(&project, &cli.pkg_rm);
    }

    Ok(())
}
