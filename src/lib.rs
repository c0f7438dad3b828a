//! # mixdeps - Elixir dependency helper
//!
//! mixdeps manages the `deps` list of a Mix project from the command line. It
//! asks `mix hex.info` about packages, edits declarations in `mix.exs`, and
//! runs `mix deps.get` / `deps.unlock` / `deps.clean` afterwards.
//!
//! ## Quick Start
//!
//! ```bash
//! # Show package details
//! mixdeps --pkg-info ecto postgrex
//!
//! # Add the latest release, or pin a version
//! mixdeps --pkg-add ecto_sql postgrex=0.20.0
//!
//! # Remove dependencies
//! mixdeps --pkg-rm ecto_sql
//! ```
//!
//! ## Module Organization
//!
//! - [`commands`] - Handlers for each CLI mode
//! - [`config`] - Settings (`mixdeps.toml` and CLI overrides)
//! - [`hex`] - Parsing of `mix hex.info` output
//! - [`manifest`] - Line edits on `mix.exs`
//! - [`mix`] - Running the `mix` executable

/// CLI command handlers.
pub mod commands;

/// Settings file parsing (`mixdeps.toml`).
pub mod config;

/// Error types shared by all modules.
pub mod error;

/// Hex package metadata parsing.
pub mod hex;

/// Dependency declarations in `mix.exs`.
pub mod manifest;

/// External `mix` invocation.
pub mod mix;

/// Terminal UI utilities (colors, spinner).
pub mod ui;
