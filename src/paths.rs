// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Filename extraction and truncation for status labels.
//!
//! Lengths are counted in characters, never bytes, so multi-byte names are
//! never cut inside a character.

/// Fallback name used when a path has no usable final segment.
pub const FALLBACK_FILE_NAME: &str = "file";

/// Default display budget for a file name.
pub const DEFAULT_MAX_FILE_NAME_LEN: usize = 25;

const ELLIPSIS: &str = "...";
const ELLIPSIS_LEN: usize = 3;

/// Get the final `/`-delimited segment of a path.
///
/// Returns [`FALLBACK_FILE_NAME`] for an empty path or an empty final
/// segment (a trailing slash).
pub fn base_name(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => FALLBACK_FILE_NAME,
    }
}

/// Shorten a file name to at most `max_length` characters.
///
/// Names within the budget are returned unchanged. Longer names keep their
/// extension when it fits, so `VeryLongComponentNameThatExceedsLimit.tsx`
/// becomes `VeryLongComponentN....tsx` at the default budget. When the
/// extension alone leaves no room for the stem, the name is cut as if it had
/// no extension.
pub fn truncate_file_name(name: &str, max_length: usize) -> String {
    let len = name.chars().count();
    if len <= max_length {
        return name.to_string();
    }

    if max_length < ELLIPSIS_LEN {
        return take_chars(name, max_length).to_string();
    }

    let Some(dot) = extension_start(name) else {
        return cut(name, max_length);
    };

    let extension = &name[dot..];
    let budget = max_length as isize - extension.chars().count() as isize - ELLIPSIS_LEN as isize;
    if budget <= 0 {
        return cut(name, max_length);
    }

    format!(
        "{}{}{}",
        take_chars(&name[..dot], budget as usize),
        ELLIPSIS,
        extension
    )
}

/// Byte offset of the last `.` when it is not the first character.
fn extension_start(name: &str) -> Option<usize> {
    name.rfind('.').filter(|&idx| idx > 0)
}

fn cut(name: &str, max_length: usize) -> String {
    format!("{}{}", take_chars(name, max_length - ELLIPSIS_LEN), ELLIPSIS)
}

fn take_chars(s: &str, count: usize) -> &str {
    match s.char_indices().nth(count) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
