//! Turns arbitrary identity strings into legal path segments.
//!
//! Responsibilities:
//! - Replace characters that are illegal in a file name with `_`.
//! - Replace spaces with `_`.
//! - Optionally cap the segment length.
//!
//! Invariants:
//! - The illegal set is the same on every platform, so a given identity
//!   produces the same directory segment everywhere.
//! - Truncation counts chars, never splitting a UTF-8 sequence.

use crate::constants::MAX_SEGMENT_LENGTH;

const REPLACEMENT: char = '_';

/// Returns true if `c` may not appear in a file name on at least one
/// supported platform.
fn is_illegal_name_char(c: char) -> bool {
    (c as u32) < 0x20
        || matches!(c, '"' | '<' | '>' | '|' | ':' | '*' | '?' | '\\' | '/')
}

/// Sanitizes `input` into a single path segment.
///
/// Illegal file name characters and spaces become `_`. When `limit_length`
/// is set the result is cut to [`MAX_SEGMENT_LENGTH`] characters. Empty
/// input is returned unchanged.
///
/// # Example
///
/// ```
/// use config_paths::sanitize;
///
/// assert_eq!(sanitize("My:Company*Name", true), "My_Company_Name");
/// assert_eq!(sanitize("Contoso Ltd", false), "Contoso_Ltd");
/// ```
pub fn sanitize(input: &str, limit_length: bool) -> String {
    if input.is_empty() {
        return String::new();
    }

    let replaced = input.chars().map(|c| {
        if c == ' ' || is_illegal_name_char(c) {
            REPLACEMENT
        } else {
            c
        }
    });

    if limit_length {
        replaced.take(MAX_SEGMENT_LENGTH).collect()
    } else {
        replaced.collect()
    }
}
