//! Locate the current assignment for a key inside a file's text.

use crate::error::{Error, Result};

use super::grammar::KeyPattern;

/// What: Find the first assignment matching `pattern` in `contents`.
///
/// Inputs:
/// - `contents`: Full file text as a single blob.
/// - `pattern`: Key prefix plus the value shape permitted behind it.
///
/// Output:
/// - The full matched span including the prefix, e.g. `LookAndFeelPackage=Breeze`.
/// - `Error::KeyNotFound` when the prefix occurs nowhere; the caller has no
///   way to know where to write and must not proceed.
///
/// Details:
/// - Matching is greedy and takes the first occurrence only. A prefix that
///   also appears in a comment or as a manual duplicate is not disambiguated;
///   the first match is treated as authoritative.
/// - The value extends through characters the shape allows and stops at the
///   first character outside it, so a match never crosses into the next line.
pub fn find_assignment(contents: &str, pattern: &KeyPattern) -> Result<String> {
    let start = contents
        .find(pattern.prefix.as_str())
        .ok_or_else(|| Error::KeyNotFound {
            key: pattern.prefix.clone(),
        })?;

    let value_start = start + pattern.prefix.len();
    let rest = &contents[value_start..];
    let mut value_len = 0usize;
    for (i, c) in rest.char_indices() {
        if !pattern.shape.allows(c) {
            break;
        }
        value_len = i + c.len_utf8();
    }

    Ok(contents[start..value_start + value_len].to_string())
}
