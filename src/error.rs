//! Error taxonomy for mix and `mix.exs` operations.
//!
//! Only [`MixError::MissingConfigFile`] and a failed dry-run check end the
//! process; every other variant is reported and the affected package skipped.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MixError {
    #[error("{} not found.", .path.display())]
    MissingConfigFile { path: PathBuf },

    #[error("`{command}` failed: {stderr}")]
    ExternalToolFailure { command: String, stderr: String },

    #[error("Package '{name}' not found.")]
    PackageNotFound { name: String },

    #[error("No active release found for '{name}'")]
    NoActiveRelease { name: String },

    #[error("No `defp deps do` section found in {}", .path.display())]
    SectionNotFound { path: PathBuf },

    /// The deps section was found but no closing `]` follows it.
    #[error("The deps list in {} is never closed with `]`", .path.display())]
    UnclosedSection { path: PathBuf },

    #[error("Invalid package spec '{token}' (expected NAME or NAME=VERSION)")]
    InvalidPackageSpec { token: String },

    #[error("Could not read {} - {source}", .path.display())]
    FileReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not modify {} - {source}", .path.display())]
    FileWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, MixError>;
