// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Tests for completion classification and label formatting through the
//! public API.

use serde_json::{json, Value};

use toolbadge::{
    base_name, describe, format_status, is_completed, truncate_file_name, LifecycleState,
    ToolInvocation,
};

fn record(value: Value) -> ToolInvocation {
    ToolInvocation::from_value(value).unwrap()
}

// ============================================================================
// Editor Commands
// ============================================================================

#[test]
fn test_create_in_progress() {
    let inv = record(json!({
        "toolCallId": "1",
        "toolName": "str_replace_editor",
        "args": {"command": "create", "path": "/components/App.jsx"},
        "state": "pending"
    }));
    assert_eq!(format_status(&inv, false), "Creating App.jsx");
}

#[test]
fn test_create_completed() {
    let inv = record(json!({
        "toolCallId": "1",
        "toolName": "str_replace_editor",
        "args": {"command": "create", "path": "/components/App.jsx"},
        "state": "result",
        "result": "success"
    }));
    assert_eq!(format_status(&inv, true), "Created App.jsx");
}

#[test]
fn test_str_replace_streaming() {
    let inv = record(json!({
        "toolCallId": "1",
        "toolName": "str_replace_editor",
        "args": {"command": "str_replace", "path": "/Card.tsx", "old_str": "a", "new_str": "b"},
        "state": "streaming"
    }));
    assert_eq!(format_status(&inv, false), "Editing Card.tsx");
    assert_eq!(format_status(&inv, true), "Edited Card.tsx");
}

#[test]
fn test_view_insert_and_undo() {
    let view = record(json!({
        "toolName": "str_replace_editor",
        "args": {"command": "view", "path": "/utils/helpers.ts"},
        "state": "pending"
    }));
    assert_eq!(format_status(&view, false), "Viewing helpers.ts");

    let insert = record(json!({
        "toolName": "str_replace_editor",
        "args": {"command": "insert", "path": "/index.ts", "insert_line": 5, "new_str": "code"},
        "state": "pending"
    }));
    assert_eq!(format_status(&insert, false), "Updating index.ts");

    let undo = record(json!({
        "toolName": "str_replace_editor",
        "args": {"command": "undo_edit", "path": "/App.tsx"},
        "state": "pending"
    }));
    assert_eq!(format_status(&undo, false), "Reverting App.tsx");
}

#[test]
fn test_unknown_editor_command_keeps_family_wording() {
    let inv = record(json!({
        "toolName": "str_replace_editor",
        "args": {"command": "unknown_command", "path": "/test.ts"},
        "state": "pending"
    }));
    assert_eq!(format_status(&inv, false), "Modifying test.ts");
}

// ============================================================================
// File Manager Commands
// ============================================================================

#[test]
fn test_rename_uses_destination() {
    let inv = record(json!({
        "toolName": "file_manager",
        "args": {"command": "rename", "path": "/old.tsx", "new_path": "/new.tsx"},
        "state": "pending"
    }));
    assert_eq!(format_status(&inv, false), "Renaming to new.tsx");

    let done = inv.with_state(LifecycleState::Result).with_result(json!({"success": true}));
    assert_eq!(format_status(&done, true), "Renamed to new.tsx");
}

#[test]
fn test_rename_with_camel_case_destination() {
    let inv = record(json!({
        "toolName": "file_manager",
        "args": {"command": "rename", "path": "/old.tsx", "newPath": "/new.tsx"},
        "state": "pending"
    }));
    assert_eq!(format_status(&inv, false), "Renaming to new.tsx");
}

#[test]
fn test_delete() {
    let inv = record(json!({
        "toolName": "file_manager",
        "args": {"command": "delete", "path": "/unused.js"},
        "state": "pending"
    }));
    assert_eq!(format_status(&inv, false), "Deleting unused.js");
    assert_eq!(format_status(&inv, true), "Deleted unused.js");
}

// ============================================================================
// Edge Cases
// ============================================================================

#[test]
fn test_empty_path() {
    let inv = record(json!({
        "toolName": "str_replace_editor",
        "args": {"command": "create", "path": ""},
        "state": "pending"
    }));
    assert_eq!(format_status(&inv, false), "Creating file");
}

#[test]
fn test_missing_args() {
    let inv = record(json!({
        "toolCallId": "1",
        "toolName": "str_replace_editor",
        "args": null,
        "state": "pending"
    }));
    assert_eq!(format_status(&inv, false), "Processing...");
    assert_eq!(format_status(&inv, true), "Completed");
}

#[test]
fn test_long_file_name_is_truncated() {
    let inv = record(json!({
        "toolName": "str_replace_editor",
        "args": {"command": "create", "path": "/VeryLongComponentNameThatExceedsLimit.tsx"},
        "state": "pending"
    }));
    let message = format_status(&inv, false);
    assert!(message.contains("..."));
    assert!(message.ends_with(".tsx"));

    let file_name = message.strip_prefix("Creating ").unwrap();
    assert_eq!(file_name.chars().count(), 25);
}

#[test]
fn test_path_without_directory() {
    let inv = record(json!({
        "toolName": "str_replace_editor",
        "args": {"command": "create", "path": "App.tsx"},
        "state": "pending"
    }));
    assert_eq!(format_status(&inv, false), "Creating App.tsx");
}

#[test]
fn test_deeply_nested_path() {
    let inv = record(json!({
        "toolName": "str_replace_editor",
        "args": {"command": "create", "path": "/src/components/ui/forms/Input.tsx"},
        "state": "pending"
    }));
    assert_eq!(format_status(&inv, false), "Creating Input.tsx");
}

#[test]
fn test_unknown_tool() {
    let inv = record(json!({
        "toolCallId": "1",
        "toolName": "unknown_tool",
        "args": {"path": "/test.ts"},
        "state": "pending"
    }));
    assert_eq!(format_status(&inv, false), "Running unknown tool");
    assert_eq!(format_status(&inv, true), "Completed unknown tool");
}

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn test_completion_requires_result_state_and_payload() {
    let base = json!({
        "toolName": "str_replace_editor",
        "args": {"command": "create", "path": "/App.jsx"}
    });

    for state in ["pending", "streaming", "partial-call"] {
        let mut with_payload = base.clone();
        with_payload["state"] = json!(state);
        with_payload["result"] = json!("success");
        assert!(!is_completed(&record(with_payload)), "{state}");
    }

    let mut slot_only = base.clone();
    slot_only["state"] = json!("result");
    assert!(!is_completed(&record(slot_only)));

    let mut finished = base;
    finished["state"] = json!("result");
    finished["result"] = json!("Success");
    assert!(is_completed(&record(finished)));
}

#[test]
fn test_label_follows_lifecycle_progression() {
    let inv = ToolInvocation::new("call_9", "str_replace_editor", LifecycleState::PartialCall)
        .with_args(json!({"command": "create", "path": "/App.jsx"}));

    let labels: Vec<String> = [
        inv.clone(),
        inv.clone().with_state(LifecycleState::Pending),
        inv.clone().with_state(LifecycleState::Streaming),
        inv.clone().with_state(LifecycleState::Result),
        inv.with_state(LifecycleState::Result).with_result(json!("ok")),
    ]
    .iter()
    .map(|i| describe(i).label)
    .collect();

    assert_eq!(
        labels,
        vec![
            "Creating App.jsx",
            "Creating App.jsx",
            "Creating App.jsx",
            "Creating App.jsx",
            "Created App.jsx",
        ]
    );
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_tense_pair_differs_only_in_verb() {
    let cases = [
        ("str_replace_editor", "create"),
        ("str_replace_editor", "view"),
        ("str_replace_editor", "str_replace"),
        ("str_replace_editor", "insert"),
        ("str_replace_editor", "undo_edit"),
        ("str_replace_editor", "other"),
        ("file_manager", "rename"),
        ("file_manager", "delete"),
        ("file_manager", "other"),
    ];

    for (tool, command) in cases {
        let inv = ToolInvocation::new("1", tool, LifecycleState::Pending).with_args(json!({
            "command": command,
            "path": "/src/lib/SomeRatherLongModuleName.ts",
            "new_path": "/src/lib/Renamed.ts"
        }));
        let present = format_status(&inv, false);
        let past = format_status(&inv, true);

        let (present_verb, present_rest) = present.split_once(' ').unwrap();
        let (past_verb, past_rest) = past.split_once(' ').unwrap();
        assert_ne!(present_verb, past_verb, "{tool} {command}");
        assert_eq!(present_rest, past_rest, "{tool} {command}");
    }
}

#[test]
fn test_formatting_is_idempotent() {
    let inv = record(json!({
        "toolName": "file_manager",
        "args": {"command": "delete", "path": "/a/b/c.rs"},
        "state": "streaming"
    }));
    assert_eq!(format_status(&inv, false), format_status(&inv, false));
    assert_eq!(describe(&inv), describe(&inv));
}

#[test]
fn test_truncation_bounds() {
    let names = [
        "App.jsx",
        "VeryLongComponentNameThatExceedsLimit.tsx",
        "README",
        "a_really_long_name_without_any_extension_at_all",
        "x.verylongextensionthatdoesnotfitanywhere",
    ];

    for name in names {
        for max in [3, 8, 12, 25, 60] {
            let out = truncate_file_name(name, max);
            assert!(out.chars().count() <= max);
            if name.chars().count() <= max {
                assert_eq!(out, name);
            }
        }
    }

    let out = truncate_file_name("VeryLongComponentNameThatExceedsLimit.tsx", 25);
    assert!(out.ends_with(".tsx"));
}

#[test]
fn test_base_name_last_segment() {
    for (path, expected) in [
        ("/components/App.jsx", "App.jsx"),
        ("a/b/c", "c"),
        ("single", "single"),
        ("", "file"),
    ] {
        assert_eq!(base_name(path), expected);
        assert_eq!(base_name(base_name(path)), base_name(path));
    }
}
