// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Core types for toolbadge.
//!
//! This module defines the tool invocation record a host UI receives from an
//! agent transport, in the same camelCase wire shape the host uses.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::InvocationError;
use crate::lifecycle::LifecycleState;

// ============================================================================
// Argument Types
// ============================================================================

/// Argument keys the formatter understands.
pub const COMMAND_KEY: &str = "command";
pub const PATH_KEY: &str = "path";
pub const NEW_PATH_KEY: &str = "new_path";
pub const NEW_PATH_ALIAS: &str = "newPath";

/// Structured arguments of a tool call.
///
/// The recognized keys are pulled out into typed fields. Everything else is
/// kept in `extra` untouched, so unknown keys are tolerated rather than
/// rejected. A recognized key holding a non-string value is left in `extra`
/// and reads as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolArgs {
    /// Sub-operation selector (e.g. `create`, `rename`).
    pub command: Option<String>,
    /// Primary file path.
    pub path: Option<String>,
    /// Destination path for rename-like operations.
    pub new_path: Option<String>,
    /// Any other arguments.
    pub extra: Map<String, Value>,
}

impl ToolArgs {
    /// Build arguments from a JSON object.
    pub fn from_map(mut map: Map<String, Value>) -> Self {
        let command = take_string(&mut map, COMMAND_KEY);
        let path = take_string(&mut map, PATH_KEY);
        let new_path =
            take_string(&mut map, NEW_PATH_KEY).or_else(|| take_string(&mut map, NEW_PATH_ALIAS));

        Self {
            command,
            path,
            new_path,
            extra: map,
        }
    }

    /// Convert back into a JSON object.
    pub fn into_map(self) -> Map<String, Value> {
        let mut map = self.extra;
        if let Some(command) = self.command {
            map.insert(COMMAND_KEY.to_string(), Value::String(command));
        }
        if let Some(path) = self.path {
            map.insert(PATH_KEY.to_string(), Value::String(path));
        }
        if let Some(new_path) = self.new_path {
            map.insert(NEW_PATH_KEY.to_string(), Value::String(new_path));
        }
        map
    }

    /// The command, if any.
    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    /// The primary path, empty when absent.
    pub fn path(&self) -> &str {
        self.path.as_deref().unwrap_or("")
    }

    /// The destination path, empty when absent.
    pub fn new_path(&self) -> &str {
        self.new_path.as_deref().unwrap_or("")
    }
}

fn take_string(map: &mut Map<String, Value>, key: &str) -> Option<String> {
    match map.remove(key) {
        Some(Value::String(s)) => Some(s),
        Some(other) => {
            map.insert(key.to_string(), other);
            None
        }
        None => None,
    }
}

/// The argument payload of a tool call as it arrived.
///
/// Agents normally send an object, but a transport may hand over anything.
/// Non-object payloads are kept verbatim so they can be re-serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum ToolArguments {
    /// A JSON object.
    Structured(ToolArgs),
    /// Any other JSON value.
    Unstructured(Value),
}

impl ToolArguments {
    /// Get the structured bag, if the payload is one.
    pub fn as_structured(&self) -> Option<&ToolArgs> {
        match self {
            ToolArguments::Structured(args) => Some(args),
            ToolArguments::Unstructured(_) => None,
        }
    }
}

impl From<Value> for ToolArguments {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => ToolArguments::Structured(ToolArgs::from_map(map)),
            other => ToolArguments::Unstructured(other),
        }
    }
}

impl From<ToolArguments> for Value {
    fn from(args: ToolArguments) -> Self {
        match args {
            ToolArguments::Structured(args) => Value::Object(args.into_map()),
            ToolArguments::Unstructured(value) => value,
        }
    }
}

impl From<ToolArgs> for ToolArguments {
    fn from(args: ToolArgs) -> Self {
        ToolArguments::Structured(args)
    }
}

// ============================================================================
// Invocation Record
// ============================================================================

/// A single call made by an agent to a named tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolInvocation {
    /// Correlates the call with its response. Not used for formatting.
    #[serde(default)]
    pub tool_call_id: String,

    /// Name of the invoked tool.
    pub tool_name: String,

    /// Arguments of the call, if any were sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<ToolArguments>,

    /// Current lifecycle tag.
    pub state: LifecycleState,

    /// Result payload. `None` means the key was absent; an explicit JSON
    /// `null` is a defined payload.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_defined"
    )]
    pub result: Option<Value>,
}

fn deserialize_defined<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl ToolInvocation {
    /// Create an invocation with no arguments and no result.
    pub fn new(
        tool_call_id: impl Into<String>,
        tool_name: impl Into<String>,
        state: LifecycleState,
    ) -> Self {
        Self {
            tool_call_id: tool_call_id.into(),
            tool_name: tool_name.into(),
            args: None,
            state,
            result: None,
        }
    }

    /// Attach arguments.
    pub fn with_args(mut self, args: impl Into<ToolArguments>) -> Self {
        self.args = Some(args.into());
        self
    }

    /// Attach a result payload.
    pub fn with_result(mut self, result: Value) -> Self {
        self.result = Some(result);
        self
    }

    /// Move to another lifecycle state.
    pub fn with_state(mut self, state: LifecycleState) -> Self {
        self.state = state;
        self
    }

    /// Structured arguments, when present.
    pub fn structured_args(&self) -> Option<&ToolArgs> {
        self.args.as_ref().and_then(ToolArguments::as_structured)
    }

    /// Check whether this invocation has completed.
    pub fn is_completed(&self) -> bool {
        crate::lifecycle::is_completed(self)
    }

    /// Decode an invocation record from a JSON string.
    pub fn from_json(input: &str) -> Result<Self, InvocationError> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_value(value)
    }

    /// Decode an invocation record from a JSON value.
    ///
    /// A record must carry at least `toolName` and `state`; anything else may
    /// be missing.
    pub fn from_value(value: Value) -> Result<Self, InvocationError> {
        let object = value
            .as_object()
            .ok_or_else(|| InvocationError::Json("expected a JSON object".to_string()))?;

        if !object.get("toolName").is_some_and(Value::is_string) {
            return Err(InvocationError::MissingField("toolName"));
        }
        match object.get("state") {
            Some(Value::String(state)) => {
                state.parse::<LifecycleState>()?;
            }
            Some(other) => return Err(InvocationError::InvalidState(other.to_string())),
            None => return Err(InvocationError::MissingField("state")),
        }

        Ok(serde_json::from_value(value)?)
    }
}
