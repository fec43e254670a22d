// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Configuration module for toolbadge.
//!
//! Handles loading, merging, and validation of configuration from multiple sources:
//! - Global config: ~/.toolbadge/config.json
//! - Workspace config: .toolbadge.json, .toolbadge.yaml, .toolbadge/config.json, or toolbadge.config.json
//! - Local config: .toolbadge.local.json (gitignored, for personal overrides)
//! - CLI options: command-line arguments
//!
//! Configuration is merged with precedence (CLI > local > workspace > global > defaults).

mod loader;
mod merger;
mod types;

pub use loader::{
    find_workspace_root, get_example_config, get_global_config_dir, get_global_config_path,
    init_config, load_config_file, load_global_config, load_local_config, load_workspace_config,
    save_workspace_config, CONFIG_FILES, GLOBAL_CONFIG_DIR, GLOBAL_CONFIG_FILE, LOCAL_CONFIG_FILE,
};

pub use merger::{default_config, merge_config, CliOptions};

pub use types::{ResolvedConfig, WorkspaceConfig};

use crate::error::ConfigError;
use std::path::{Path, PathBuf};

/// Resolve the workspace root for a starting directory.
///
/// Walks up to the nearest directory holding a workspace config file and
/// falls back to `start` itself when there is none.
pub fn resolve_workspace_root(start: &Path) -> PathBuf {
    find_workspace_root(start).unwrap_or_else(|| start.to_path_buf())
}

/// Load, merge and validate all configuration sources for a workspace.
///
/// This is the main entry point for configuration loading.
pub fn load_config(
    workspace_root: &Path,
    cli_options: CliOptions,
) -> Result<ResolvedConfig, ConfigError> {
    let global = load_global_config()?;
    let workspace = load_workspace_config(workspace_root)?;
    let local = load_local_config(workspace_root)?;

    let resolved = merge_config(global, workspace, local, cli_options);
    resolved.validate()?;
    Ok(resolved)
}
