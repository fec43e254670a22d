// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Status label formatting for tool invocations.
//!
//! Turns a tool invocation plus a completion flag into a short label such as
//! `Creating App.jsx` or `Renamed to new.tsx`. Known tool families look their
//! wording up in a static vocabulary keyed by command, every other tool gets a
//! generic `Running <tool>` / `Completed <tool>` label.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use toolbadge::{format_status, LifecycleState, ToolInvocation};
//!
//! let inv = ToolInvocation::new("1", "str_replace_editor", LifecycleState::Pending)
//!     .with_args(json!({"command": "create", "path": "/components/App.jsx"}));
//!
//! assert_eq!(format_status(&inv, false), "Creating App.jsx");
//! assert_eq!(format_status(&inv, true), "Created App.jsx");
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::lifecycle::is_completed;
use crate::paths::{base_name, truncate_file_name, DEFAULT_MAX_FILE_NAME_LEN};
use crate::types::{ToolArgs, ToolInvocation};

/// Default identifier of the string-replace style editor tool.
pub const EDITOR_TOOL: &str = "str_replace_editor";

/// Default identifier of the move/delete style file manager tool.
pub const FILE_MANAGER_TOOL: &str = "file_manager";

/// Label used when the arguments are missing or not an object.
const PROCESSING: TensePair = TensePair::new("Processing...", "Completed");

/// Wording for tools outside every known family.
const GENERIC: TensePair = TensePair::new("Running", "Completed");

// ============================================================================
// Vocabulary
// ============================================================================

/// A present/past tense verb pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TensePair {
    pub present: &'static str,
    pub past: &'static str,
}

impl TensePair {
    pub const fn new(present: &'static str, past: &'static str) -> Self {
        Self { present, past }
    }

    /// Pick the verb for the given completion flag.
    pub fn verb(&self, completed: bool) -> &'static str {
        if completed {
            self.past
        } else {
            self.present
        }
    }
}

/// Which argument a label names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The file at `path`.
    Path,
    /// The file at `new_path`, rendered as `to <name>`.
    Destination,
}

/// One row of a tool family's vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerbEntry {
    /// Command this row applies to; empty for a family default.
    pub command: &'static str,
    pub verbs: TensePair,
    pub target: Target,
}

impl VerbEntry {
    const fn path(command: &'static str, present: &'static str, past: &'static str) -> Self {
        Self {
            command,
            verbs: TensePair::new(present, past),
            target: Target::Path,
        }
    }
}

const EDITOR_VERBS: &[VerbEntry] = &[
    VerbEntry::path("create", "Creating", "Created"),
    VerbEntry::path("view", "Viewing", "Viewed"),
    VerbEntry::path("str_replace", "Editing", "Edited"),
    VerbEntry::path("insert", "Updating", "Updated"),
    VerbEntry::path("undo_edit", "Reverting", "Reverted"),
];

const FILE_MANAGER_VERBS: &[VerbEntry] = &[
    VerbEntry {
        command: "rename",
        verbs: TensePair::new("Renaming", "Renamed"),
        target: Target::Destination,
    },
    VerbEntry::path("delete", "Deleting", "Deleted"),
];

/// Fallback row shared by both families for unknown or missing commands.
static MODIFY: VerbEntry = VerbEntry::path("", "Modifying", "Modified");

/// A group of commands under one tool identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolFamily {
    /// String-replace style file editing.
    Editor,
    /// Rename/delete style file management.
    FileManager,
}

impl ToolFamily {
    /// Resolve the family of a tool name, if it belongs to one.
    pub fn classify(tool_name: &str, config: &FormatterConfig) -> Option<Self> {
        if tool_name == config.editor_tool {
            Some(ToolFamily::Editor)
        } else if tool_name == config.file_manager_tool {
            Some(ToolFamily::FileManager)
        } else {
            None
        }
    }

    /// The commands this family knows by name.
    pub fn verbs(&self) -> &'static [VerbEntry] {
        match self {
            ToolFamily::Editor => EDITOR_VERBS,
            ToolFamily::FileManager => FILE_MANAGER_VERBS,
        }
    }

    /// Row used for commands the family does not know.
    pub fn default_entry(&self) -> &'static VerbEntry {
        &MODIFY
    }

    /// Look up the row for a command, falling back to the family default.
    pub fn entry_for(&self, command: Option<&str>) -> &'static VerbEntry {
        let found = command.and_then(|cmd| self.verbs().iter().find(|e| e.command == cmd));
        match found {
            Some(entry) => entry,
            None => {
                debug!(family = ?self, command = ?command, "unrecognized command, using default wording");
                self.default_entry()
            }
        }
    }
}

/// Replace word separators in a tool identifier with spaces.
pub fn humanize_tool_name(tool_name: &str) -> String {
    tool_name.replace('_', " ")
}

// ============================================================================
// Formatter
// ============================================================================

/// Settings that shape the produced labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatterConfig {
    /// Identifier of the editor family tool.
    pub editor_tool: String,
    /// Identifier of the file manager family tool.
    pub file_manager_tool: String,
    /// Display budget for file names, in characters.
    pub max_file_name_len: usize,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            editor_tool: EDITOR_TOOL.to_string(),
            file_manager_tool: FILE_MANAGER_TOOL.to_string(),
            max_file_name_len: DEFAULT_MAX_FILE_NAME_LEN,
        }
    }
}

/// A label together with the flag that picks its icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusLine {
    pub label: String,
    pub completed: bool,
}

/// Produces status labels for tool invocations.
#[derive(Debug, Clone, Default)]
pub struct StatusFormatter {
    config: FormatterConfig,
}

impl StatusFormatter {
    /// Create a formatter with the given settings.
    pub fn new(config: FormatterConfig) -> Self {
        Self { config }
    }

    /// The active settings.
    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Build the label for an invocation.
    ///
    /// The tense follows `completed` as given; it is never derived from the
    /// invocation itself.
    pub fn format(&self, invocation: &ToolInvocation, completed: bool) -> String {
        let Some(args) = invocation.structured_args() else {
            trace!(tool = %invocation.tool_name, "no structured arguments");
            return PROCESSING.verb(completed).to_string();
        };

        match ToolFamily::classify(&invocation.tool_name, &self.config) {
            Some(family) => {
                let entry = family.entry_for(args.command());
                trace!(family = ?family, command = entry.command, "formatting family label");
                self.family_label(entry, args, completed)
            }
            None => {
                trace!(tool = %invocation.tool_name, "formatting generic label");
                format!(
                    "{} {}",
                    GENERIC.verb(completed),
                    humanize_tool_name(&invocation.tool_name)
                )
            }
        }
    }

    /// Classify an invocation and build its label in one step.
    pub fn describe(&self, invocation: &ToolInvocation) -> StatusLine {
        let completed = is_completed(invocation);
        StatusLine {
            label: self.format(invocation, completed),
            completed,
        }
    }

    fn display_name(&self, path: &str) -> String {
        truncate_file_name(base_name(path), self.config.max_file_name_len)
    }

    fn family_label(&self, entry: &VerbEntry, args: &ToolArgs, completed: bool) -> String {
        let verb = entry.verbs.verb(completed);
        match entry.target {
            Target::Path => format!("{} {}", verb, self.display_name(args.path())),
            Target::Destination => format!("{} to {}", verb, self.display_name(args.new_path())),
        }
    }
}

/// Build the label for an invocation with default settings.
pub fn format_status(invocation: &ToolInvocation, completed: bool) -> String {
    StatusFormatter::default().format(invocation, completed)
}

/// Classify and label an invocation with default settings.
pub fn describe(invocation: &ToolInvocation) -> StatusLine {
    StatusFormatter::default().describe(invocation)
}
