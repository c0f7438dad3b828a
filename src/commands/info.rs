//! `--pkg-info`: print hex metadata for each package.

use super::Project;
use crate::error::{MixError, Result};
use crate::hex::{PackageInfo, parse_info};
use crate::mix::MixTask;
use crate::ui::Style;

#[derive(Debug, Default)]
pub struct InfoReport {
    pub found: Vec<PackageInfo>,
    pub failed: Vec<String>,
}

/// Query `mix hex.info` for `name`. A failing query means hex does not know the package.
pub fn fetch(project: &Project, name: &str) -> Result<PackageInfo> {
    match project.mix(&MixTask::HexInfo(name.to_string()), "Fetching info") {
        Ok(out) => parse_info(name, &out.stdout),
        Err(err @ MixError::ExternalToolFailure { .. }) => {
            if project.verbose {
                eprintln!("{}", err);
            }
            Err(MixError::PackageNotFound {
                name: name.to_string(),
            })
        }
        Err(other) => Err(other),
    }
}

/// Lines printed for one package, labels included.
pub fn render(style: &Style, info: &PackageInfo) -> Vec<String> {
    let mut lines = vec![style.field("Description", &info.description)];
    if let Some(config) = &info.config {
        lines.push(style.field("Config", config));
    }
    if let Some(latest) = &info.latest_version {
        lines.push(style.field("Latest Release", latest));
    }
    if !info.all_versions.is_empty() {
        lines.push(style.field("All Releases", info.all_versions.join(", ")));
    }
    if let Some(license) = &info.license {
        lines.push(style.field("License", license));
    }
    if let Some(url) = &info.source_url {
        lines.push(style.field("GitHub Repo", url));
    }
    lines
}

pub fn run(project: &Project, names: &[String]) -> InfoReport {
    let style = project.style();
    let mut report = InfoReport::default();

    for name in names {
        println!(
            "\n{}\n",
            style.info(format!("Fetching info for package: {}", name))
        );

        match fetch(project, name) {
            Ok(info) => {
                for line in render(style, &info) {
                    println!("{}", line);
                }
                println!("\n{}", style.separator());
                report.found.push(info);
            }
            Err(err) => {
                eprintln!("{}", style.error(err.to_string()));
                report.failed.push(name.clone());
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{FakeMix, MIX_EXS, project_dir};

    const ECTO: &str = "Ecto\nConfig: {:ecto, Ecto.Repo}\nReleases: 3.10.0, 3.9.0 (retired)\nLicenses: Apache-2.0\nGitHub: https://github.com/elixir-ecto/ecto\n";

    #[test]
    fn test_batch_continues_past_unknown_package() {
        let (_dir, settings) = project_dir(MIX_EXS);
        let mix = FakeMix::default()
            .with_info("ecto", ECTO)
            .failing("hex.info nope");
        let project = Project::new(&settings, &mix, Style::new(false), false);

        let names = vec!["nope".to_string(), "ecto".to_string()];
        let report = run(&project, &names);

        assert_eq!(report.failed, vec!["nope"]);
        assert_eq!(report.found.len(), 1);
        assert_eq!(report.found[0].latest_version.as_deref(), Some("3.10.0"));
        assert_eq!(mix.calls(), vec!["hex.info nope", "hex.info ecto"]);
    }

    #[test]
    fn test_empty_output_is_not_found() {
        let (_dir, settings) = project_dir(MIX_EXS);
        let mix = FakeMix::default();
        let project = Project::new(&settings, &mix, Style::new(false), false);

        assert!(matches!(
            fetch(&project, "ghost"),
            Err(MixError::PackageNotFound { name }) if name == "ghost"
        ));
    }

    #[test]
    fn test_render_skips_absent_fields() -> Result<()> {
        let style = Style::new(false);
        let info = parse_info("ecto", ECTO)?;
        assert_eq!(
            render(&style, &info),
            vec![
                "Description: Ecto",
                "Config: :ecto, Ecto.Repo",
                "Latest Release: 3.10.0",
                "All Releases: 3.10.0",
                "License: Apache-2.0",
                "GitHub Repo: https://github.com/elixir-ecto/ecto",
            ]
        );

        let bare = parse_info("x", "Only a description")?;
        assert_eq!(render(&style, &bare), vec!["Description: Only a description"]);
        Ok(())
    }
}
