//! `--pkg-add`: declare packages in the deps list, then fetch them once.

use super::{Project, info};
use crate::error::{MixError, Result};
use crate::manifest::AddOutcome;
use crate::mix::MixTask;
use regex::Regex;
use std::sync::LazyLock;

/// Hex package names: lowercase ASCII letter, then lowercase letters, digits or `_`.
static PACKAGE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9_]*$").expect("valid package name pattern"));

/// One `--pkg-add` argument: `NAME` or `NAME=VERSION`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSpec {
    pub name: String,
    pub version: Option<String>,
}

impl PackageSpec {
    pub fn parse(token: &str) -> Result<Self> {
        let invalid = || MixError::InvalidPackageSpec {
            token: token.to_string(),
        };

        let (name, version) = match token.split_once('=') {
            Some((name, version)) => {
                let version = version.trim();
                if version.is_empty() || version.contains('=') {
                    return Err(invalid());
                }
                (name.trim(), Some(version.to_string()))
            }
            None => (token.trim(), None),
        };
        if !PACKAGE_NAME_RE.is_match(name) {
            return Err(invalid());
        }

        Ok(Self {
            name: name.to_string(),
            version,
        })
    }
}

#[derive(Debug, Default)]
pub struct AddReport {
    /// `(name, version)` pairs written to the manifest.
    pub added: Vec<(String, String)>,
    pub skipped: Vec<String>,
    pub failed: Vec<String>,
    /// Whether `mix deps.get` ran and succeeded.
    pub fetched: bool,
}

fn resolve_version(project: &Project, spec: PackageSpec) -> Result<(String, String)> {
    if let Some(version) = spec.version {
        return Ok((spec.name, version));
    }
    let info = info::fetch(project, &spec.name)?;
    match info.latest_version {
        Some(version) => Ok((spec.name, version)),
        None => Err(MixError::NoActiveRelease { name: spec.name }),
    }
}

pub fn run(project: &Project, tokens: &[String]) -> AddReport {
    let style = project.style();
    let file = project.manifest_name();
    let mut report = AddReport::default();

    println!(
        "\n{}\n",
        style.info(format!("Adding dependencies to {}...", file))
    );

    for token in tokens {
        let resolved = PackageSpec::parse(token).and_then(|spec| resolve_version(project, spec));
        let (name, version) = match resolved {
            Ok(pair) => pair,
            Err(err) => {
                eprintln!("{}", style.error(err.to_string()));
                report.failed.push(token.clone());
                continue;
            }
        };

        match project
            .manifest()
            .add(&name, &version, project.match_indent)
        {
            Ok(AddOutcome::Added) => {
                println!(
                    "{}",
                    style.success("Added", format!("{} ~> {} to {}", name, version, file))
                );
                report.added.push((name, version));
            }
            Ok(AddOutcome::AlreadyPresent) => {
                println!(
                    "{}",
                    style.warning("Skipping", format!("{} is already in {}", name, file))
                );
                report.skipped.push(name);
            }
            Err(err) => {
                eprintln!("{}", style.error(err.to_string()));
                report.failed.push(name);
            }
        }
    }

    if !report.added.is_empty() {
        println!(
            "\n{}",
            style.info("Fetching dependencies with mix deps.get...")
        );
        match project.mix(&MixTask::DepsGet, "Fetching dependencies") {
            Ok(_) => {
                println!("\n{}", style.done("Dependencies installed successfully!"));
                report.fetched = true;
            }
            Err(err) => project.report_failure("Failed to run mix deps.get", &err),
        }
    }

    report
}
