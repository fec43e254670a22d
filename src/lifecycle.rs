// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Lifecycle classification for tool invocations.
//!
//! A host re-renders an invocation every time its lifecycle tag changes
//! (`pending` -> `streaming` -> `result`). The only question answered here is
//! whether the call has really finished, which drives both the tense of the
//! label and the spinner/checkmark choice.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvocationError;
use crate::types::ToolInvocation;

/// Lifecycle tag of a tool invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifecycleState {
    /// Call announced but not started.
    #[serde(rename = "pending")]
    Pending,
    /// Call is actively producing output.
    #[serde(rename = "streaming")]
    Streaming,
    /// Call finished; a payload may or may not be attached yet.
    #[serde(rename = "result")]
    Result,
    /// Call arguments are still arriving.
    #[serde(rename = "partial-call", alias = "partialCall")]
    PartialCall,
}

impl LifecycleState {
    /// All lifecycle tags in progression order.
    pub const ALL: [LifecycleState; 4] = [
        LifecycleState::PartialCall,
        LifecycleState::Pending,
        LifecycleState::Streaming,
        LifecycleState::Result,
    ];

    /// The wire tag for this state.
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleState::Pending => "pending",
            LifecycleState::Streaming => "streaming",
            LifecycleState::Result => "result",
            LifecycleState::PartialCall => "partial-call",
        }
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LifecycleState {
    type Err = InvocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(LifecycleState::Pending),
            "streaming" => Ok(LifecycleState::Streaming),
            "result" => Ok(LifecycleState::Result),
            "partial-call" | "partialCall" => Ok(LifecycleState::PartialCall),
            other => Err(InvocationError::InvalidState(other.to_string())),
        }
    }
}

/// Check whether an invocation has really completed.
///
/// Only a `result` state carrying a defined payload counts. A `result` state
/// without a payload means the slot was allocated but not yet filled, so it
/// is still in progress.
pub fn is_completed(invocation: &ToolInvocation) -> bool {
    match invocation.state {
        LifecycleState::Result => invocation.result.is_some(),
        LifecycleState::Pending | LifecycleState::Streaming | LifecycleState::PartialCall => false,
    }
}
