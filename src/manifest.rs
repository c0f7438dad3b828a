//! Line-level editing of the dependency list in `mix.exs`.
//!
//! Declarations are expected to sit one per line inside `defp deps do`:
//!
//! ```elixir
//!   defp deps do
//!     [
//!       {:ecto_sql, "~> 3.10"},
//!       {:postgrex, ">= 0.0.0"}
//!     ]
//!   end
//! ```
//!
//! Only the targeted line is ever touched; every other byte of the file,
//! line endings included, is written back unchanged.

use crate::error::{MixError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const SECTION_OPENER: &str = "defp deps do";
const DEFAULT_INDENT: &str = "      ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

enum InsertError {
    NoSection,
    Unclosed,
}

pub struct Manifest {
    path: PathBuf,
}

impl Manifest {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Declare `name` at `~> version` unless `{:name,` already occurs anywhere
    /// in the file, comments included.
    pub fn add(&self, name: &str, version: &str, match_indent: bool) -> Result<AddOutcome> {
        let content = self.read()?;
        if content.contains(&declaration_marker(name)) {
            return Ok(AddOutcome::AlreadyPresent);
        }

        let updated = insert_declaration(&content, name, version, match_indent).map_err(|e| {
            let path = self.path.clone();
            match e {
                InsertError::NoSection => MixError::SectionNotFound { path },
                InsertError::Unclosed => MixError::UnclosedSection { path },
            }
        })?;

        self.write(&updated)?;
        Ok(AddOutcome::Added)
    }

    /// Drop every declaration line for `name`. Returns false, leaving the file
    /// untouched, when there was none.
    pub fn remove(&self, name: &str) -> Result<bool> {
        let content = self.read()?;
        match remove_declaration(&content, name) {
            Some(updated) => {
                self.write(&updated)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn read(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|source| MixError::FileReadFailure {
            path: self.path.clone(),
            source,
        })
    }

    /// Whole-file replace through a temp file and a rename. Symlinks are
    /// resolved first so the link itself survives and its target is replaced.
    fn write(&self, content: &str) -> Result<()> {
        let target = fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone());
        let file_name = target
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "mix.exs".to_string());
        let tmp = target.with_file_name(format!(".{}.mixdeps-tmp", file_name));

        let result = fs::write(&tmp, content)
            .and_then(|_| {
                if let Ok(meta) = fs::metadata(&target) {
                    fs::set_permissions(&tmp, meta.permissions())?;
                }
                Ok(())
            })
            .and_then(|_| fs::rename(&tmp, &target));

        result.map_err(|source| {
            let _ = fs::remove_file(&tmp);
            MixError::FileWriteFailure {
                path: self.path.clone(),
                source,
            }
        })
    }
}

fn declaration_marker(name: &str) -> String {
    format!("{{:{},", name)
}

fn is_declaration(line: &str) -> bool {
    line.trim_start().starts_with("{:")
}

fn leading_whitespace(line: &str) -> &str {
    let trimmed = line.trim_start_matches([' ', '\t']);
    &line[..line.len() - trimmed.len()]
}

fn insert_declaration(
    content: &str,
    name: &str,
    version: &str,
    match_indent: bool,
) -> std::result::Result<String, InsertError> {
    let mut lines: Vec<&str> = content.split_inclusive('\n').collect();

    let start = lines
        .iter()
        .position(|l| l.contains(SECTION_OPENER))
        .ok_or(InsertError::NoSection)?;
    let close = lines[start..]
        .iter()
        .position(|l| l.contains(']'))
        .map(|i| start + i)
        .ok_or(InsertError::Unclosed)?;

    let indent = if match_indent {
        lines[start..close]
            .iter()
            .rev()
            .find(|l| is_declaration(l))
            .map(|l| leading_whitespace(*l))
            .unwrap_or(DEFAULT_INDENT)
    } else {
        DEFAULT_INDENT
    };
    let eol = if lines[close].ends_with("\r\n") {
        "\r\n"
    } else {
        "\n"
    };

    let entry = format!("{}{{:{}, \"~> {}\"}},{}", indent, name, version, eol);
    lines.insert(close, &entry);
    Ok(lines.concat())
}

fn remove_declaration(content: &str, name: &str) -> Option<String> {
    let marker = declaration_marker(name);
    let lines: Vec<&str> = content.split_inclusive('\n').collect();
    let kept: Vec<&str> = lines
        .iter()
        .copied()
        .filter(|l| !l.contains(&marker))
        .collect();

    if kept.len() == lines.len() {
        None
    } else {
        Some(kept.concat())
    }
}
