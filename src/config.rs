//! Settings for a mixdeps run.
//!
//! Defaults can be overridden by an optional `mixdeps.toml` in the working directory,
//! and that in turn by command-line flags (or their environment variables):
//!
//! ```toml
//! mix = "/opt/elixir/bin/mix"
//! manifest = "apps/core/mix.exs"
//! match_indent = true
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE: &str = "mixdeps.toml";

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Program used for every mix invocation.
    pub mix: String,
    /// The project file holding `defp deps do`.
    pub manifest: PathBuf,
    /// Indent new declarations like the last one already in the deps list
    /// instead of the fixed six spaces.
    pub match_indent: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mix: "mix".to_string(),
            manifest: PathBuf::from("mix.exs"),
            match_indent: false,
        }
    }
}

/// Values given on the command line; `None`/`false` leaves the file setting alone.
#[derive(Debug, Default)]
pub struct Overrides {
    pub mix: Option<String>,
    pub manifest: Option<PathBuf>,
    pub match_indent: bool,
}

impl Settings {
    /// Read `path` if it exists, otherwise start from defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| {
            format!(
                "Failed to parse {} - expected keys: mix, manifest, match_indent",
                path.display()
            )
        })
    }

    pub fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(mix) = overrides.mix {
            self.mix = mix;
        }
        if let Some(manifest) = overrides.manifest {
            self.manifest = manifest;
        }
        self.match_indent |= overrides.match_indent;
        self
    }

    /// File name shown in user messages, e.g. `mix.exs`.
    pub fn manifest_name(&self) -> String {
        self.manifest
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.manifest.display().to_string())
    }
}
