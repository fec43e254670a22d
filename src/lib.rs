// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! toolbadge - status labels for AI agent tool invocations.
//!
//! A chat UI shows every tool call an agent makes as a small badge: a spinner
//! or a checkmark next to a label such as `Creating App.jsx`. This crate
//! derives both pieces from the raw invocation record, without rendering
//! anything itself.
//!
//! # Architecture
//!
//! - [`types`] - The invocation record and its argument bag
//! - [`lifecycle`] - Lifecycle tags and the completion check
//! - [`status`] - Label formatting and the per-family vocabulary
//! - [`paths`] - Filename extraction and truncation
//! - [`config`] - Configuration loading and merging
//! - [`error`] - Error types and result aliases
//! - [`telemetry`] - Tracing subscriber setup
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use toolbadge::{describe, ToolInvocation};
//!
//! let inv = ToolInvocation::from_value(json!({
//!     "toolCallId": "call_1",
//!     "toolName": "file_manager",
//!     "args": {"command": "rename", "path": "/old.tsx", "new_path": "/new.tsx"},
//!     "state": "result",
//!     "result": {"success": true}
//! }))?;
//!
//! let line = describe(&inv);
//! assert_eq!(line.label, "Renamed to new.tsx");
//! assert!(line.completed);
//! # Ok::<(), toolbadge::InvocationError>(())
//! ```

pub mod config;
pub mod error;
pub mod lifecycle;
pub mod paths;
pub mod status;
pub mod telemetry;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{ConfigError, InvocationError, Result};
pub use lifecycle::{is_completed, LifecycleState};
pub use paths::{base_name, truncate_file_name, DEFAULT_MAX_FILE_NAME_LEN};
pub use status::{
    describe, format_status, humanize_tool_name, FormatterConfig, StatusFormatter, StatusLine,
    ToolFamily,
};
pub use types::{ToolArgs, ToolArguments, ToolInvocation};

/// toolbadge version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
