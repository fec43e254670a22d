// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Configuration type definitions.
//!
//! Defines the structure of workspace and resolved configuration,
//! supporting JSON and YAML formats.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::status::FormatterConfig;

/// Workspace configuration for toolbadge.
/// Can be defined in .toolbadge.json or .toolbadge/config.json in the project root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceConfig {
    /// Tool identifier treated as the string-replace editor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor_tool: Option<String>,

    /// Tool identifier treated as the file manager
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_manager_tool: Option<String>,

    /// Display budget for file names, in characters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_file_name_length: Option<usize>,
}

/// Fully resolved configuration after merging every source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    pub editor_tool: String,
    pub file_manager_tool: String,
    pub max_file_name_length: usize,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        let formatter = FormatterConfig::default();
        Self {
            editor_tool: formatter.editor_tool,
            file_manager_tool: formatter.file_manager_tool,
            max_file_name_length: formatter.max_file_name_len,
        }
    }
}

impl ResolvedConfig {
    /// Check that the merged values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_file_name_length == 0 {
            return Err(ConfigError::invalid_value(
                "maxFileNameLength",
                "must be greater than zero",
            ));
        }
        if self.editor_tool.is_empty() {
            return Err(ConfigError::invalid_value("editorTool", "must not be empty"));
        }
        if self.file_manager_tool.is_empty() {
            return Err(ConfigError::invalid_value(
                "fileManagerTool",
                "must not be empty",
            ));
        }
        Ok(())
    }

    /// Settings for a [`crate::StatusFormatter`].
    pub fn formatter_config(&self) -> FormatterConfig {
        FormatterConfig {
            editor_tool: self.editor_tool.clone(),
            file_manager_tool: self.file_manager_tool.clone(),
            max_file_name_len: self.max_file_name_length,
        }
    }
}
