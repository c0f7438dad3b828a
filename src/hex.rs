//! Parsing of `mix hex.info <package>` output.
//!
//! The output is free text; fields are picked out by their labels:
//!
//! ```text
//! Ecto
//! Config: {:ecto, "~> 3.10"}
//! Releases: 3.10.0, 3.9.5, 3.9.0 (retired)
//! Licenses: Apache-2.0
//! GitHub: https://github.com/elixir-ecto/ecto
//! ```

use crate::error::{MixError, Result};
use regex::Regex;
use std::sync::LazyLock;

const RETIRED_MARKER: &str = "(retired)";

static CONFIG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Config: \{(.*?)\}").expect("valid config pattern"));
static RELEASES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Releases:[ \t]*(.*)").expect("valid releases pattern"));
static LICENSES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Licenses:[ \t]*(.*)").expect("valid licenses pattern"));
static GITHUB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"GitHub:\s*(https://\S+)").expect("valid github pattern"));

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageInfo {
    pub description: String,
    /// Inside of the `Config: {...}` braces, e.g. `:ecto, "~> 3.10"`.
    pub config: Option<String>,
    pub latest_version: Option<String>,
    /// Releases in the order hex lists them (newest first), retired ones removed.
    pub all_versions: Vec<String>,
    pub license: Option<String>,
    pub source_url: Option<String>,
}

/// Parse `hex.info` output for `name`. Empty output means hex knows nothing about it.
pub fn parse_info(name: &str, raw: &str) -> Result<PackageInfo> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(MixError::PackageNotFound {
            name: name.to_string(),
        });
    }

    let description = text.lines().next().unwrap_or_default().to_string();

    let config = CONFIG_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string());

    let all_versions = RELEASES_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| active_releases(m.as_str()))
        .unwrap_or_default();
    let latest_version = all_versions.first().cloned();

    let license = LICENSES_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty());

    let source_url = GITHUB_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string());

    Ok(PackageInfo {
        description,
        config,
        latest_version,
        all_versions,
        license,
        source_url,
    })
}

fn active_releases(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.contains(RETIRED_MARKER))
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ECTO: &str = "Ecto\nConfig: {:ecto, Ecto.Repo}\nReleases: 3.10.0, 3.9.0 (retired)\nLicenses: Apache-2.0\nGitHub: https://github.com/elixir-ecto/ecto";

    #[test]
    fn test_parse_full_output() -> Result<()> {
        let info = parse_info("ecto", ECTO)?;
        assert_eq!(info.description, "Ecto");
        assert_eq!(info.config.as_deref(), Some(":ecto, Ecto.Repo"));
        assert_eq!(info.latest_version.as_deref(), Some("3.10.0"));
        assert_eq!(info.all_versions, vec!["3.10.0"]);
        assert_eq!(info.license.as_deref(), Some("Apache-2.0"));
        assert_eq!(
            info.source_url.as_deref(),
            Some("https://github.com/elixir-ecto/ecto")
        );
        Ok(())
    }

    #[test]
    fn test_no_releases_line() -> Result<()> {
        let info = parse_info("thing", "A thing\nLicenses: MIT")?;
        assert!(info.latest_version.is_none());
        assert!(info.all_versions.is_empty());
        assert_eq!(info.license.as_deref(), Some("MIT"));
        Ok(())
    }

    #[test]
    fn test_all_releases_retired() -> Result<()> {
        let info = parse_info("old", "Old\nReleases: 0.2.0 (retired), 0.1.0 (retired)")?;
        assert!(info.latest_version.is_none());
        assert!(info.all_versions.is_empty());
        Ok(())
    }

    #[test]
    fn test_retired_entries_dropped_in_order() -> Result<()> {
        let info = parse_info(
            "jason",
            "Jason\nReleases: 1.4.4, 1.4.3 (retired), 1.4.2, 1.4.1\n",
        )?;
        assert_eq!(info.all_versions, vec!["1.4.4", "1.4.2", "1.4.1"]);
        assert_eq!(info.latest_version.as_deref(), Some("1.4.4"));
        Ok(())
    }

    #[test]
    fn test_description_is_first_line_only() -> Result<()> {
        let raw = "Releases: 1.0.0\nConfig: {:x, \"~> 1.0\"}";
        let info = parse_info("x", raw)?;
        assert_eq!(info.description, "Releases: 1.0.0");
        assert_eq!(info.latest_version.as_deref(), Some("1.0.0"));
        assert_eq!(info.config.as_deref(), Some(":x, \"~> 1.0\""));
        Ok(())
    }

    #[test]
    fn test_missing_optional_fields() -> Result<()> {
        let info = parse_info("bare", "Just a description")?;
        assert_eq!(info.description, "Just a description");
        assert_eq!(
            info,
            PackageInfo {
                description: "Just a description".to_string(),
                ..Default::default()
            }
        );
        Ok(())
    }

    #[test]
    fn test_empty_license_is_absent() -> Result<()> {
        let info = parse_info("p", "P\nLicenses:\nGitHub: https://github.com/a/p")?;
        assert!(info.license.is_none());
        assert_eq!(info.source_url.as_deref(), Some("https://github.com/a/p"));
        Ok(())
    }

    #[test]
    fn test_github_requires_https() -> Result<()> {
        let info = parse_info("p", "P\nGitHub: http://github.com/a/p")?;
        assert!(info.source_url.is_none());
        Ok(())
    }

    #[test]
    fn test_empty_output_is_not_found() {
        match parse_info("nope", "  \n\n") {
            Err(MixError::PackageNotFound { name }) => assert_eq!(name, "nope"),
            other => panic!("expected PackageNotFound, got {:?}", other),
        }
    }
}
