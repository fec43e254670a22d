// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Configuration merging.
//!
//! Handles merging configurations from different sources with proper precedence.

use super::types::{ResolvedConfig, WorkspaceConfig};

/// CLI options that can override configuration.
#[derive(Debug, Clone, Default)]
pub struct CliOptions {
    pub editor_tool: Option<String>,
    pub file_manager_tool: Option<String>,
    pub max_file_name_length: Option<usize>,
}

/// Default configuration values.
pub fn default_config() -> ResolvedConfig {
    ResolvedConfig::default()
}

/// Merge multiple configurations with precedence.
///
/// Precedence (highest to lowest):
/// 1. CLI options
/// 2. Local config (.toolbadge.local.json)
/// 3. Workspace config (.toolbadge.json)
/// 4. Global config (~/.toolbadge/config.json)
/// 5. Default values
pub fn merge_config(
    global: Option<WorkspaceConfig>,
    workspace: Option<WorkspaceConfig>,
    local: Option<WorkspaceConfig>,
    cli: CliOptions,
) -> ResolvedConfig {
    let mut result = default_config();

    for config in [global, workspace, local].into_iter().flatten() {
        apply_workspace_config(&mut result, &config);
    }

    apply_cli_options(&mut result, &cli);

    result
}

fn apply_workspace_config(result: &mut ResolvedConfig, config: &WorkspaceConfig) {
    if let Some(ref tool) = config.editor_tool {
        result.editor_tool = tool.clone();
    }

    if let Some(ref tool) = config.file_manager_tool {
        result.file_manager_tool = tool.clone();
    }

    if let Some(max) = config.max_file_name_length {
        result.max_file_name_length = max;
    }
}

fn apply_cli_options(result: &mut ResolvedConfig, cli: &CliOptions) {
    if let Some(ref tool) = cli.editor_tool {
        result.editor_tool = tool.clone();
    }

    if let Some(ref tool) = cli.file_manager_tool {
        result.file_manager_tool = tool.clone();
    }

    if let Some(max) = cli.max_file_name_length {
        result.max_file_name_length = max;
    }
}
