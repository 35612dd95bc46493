//! Compare-and-rewrite of a single assignment inside a config file.

use std::fs;
use std::path::PathBuf;

use crate::error::{Error, Result};

use super::grammar::KeyPattern;
use super::matcher::find_assignment;

/// A configuration file to patch: a directory plus a filename, supplied per
/// call. The file on disk is the sole source of truth; nothing is cached
/// between invocations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigTarget {
    /// Directory containing the file.
    pub dir: PathBuf,
    /// Filename within `dir`.
    pub file: String,
}

impl ConfigTarget {
    /// Build a target from a directory and a filename.
    pub fn new(dir: impl Into<PathBuf>, file: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            file: file.into(),
        }
    }

    /// Full path of the target file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file)
    }
}

/// What a patch operation did to the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// Live and persisted state already matched the desired value; no write
    /// was performed.
    AlreadyApplied,
    /// The old assignment was substituted and the file rewritten.
    Updated,
}

/// Normalize an assignment span for comparison: drop carriage returns and
/// trailing whitespace so CRLF files and padded values compare equal.
pub(crate) fn normalize(s: &str) -> String {
    s.replace('\r', "").trim_end().to_string()
}

fn desired_assignment(pattern: &KeyPattern, desired_value: &str) -> String {
    format!("{}{}", pattern.prefix, desired_value)
}

fn read_target(target: &ConfigTarget) -> Result<String> {
    let path = target.path();
    fs::read_to_string(&path).map_err(|source| Error::ReadConfig { path, source })
}

/// What: Read-only check whether the desired value is already persisted.
///
/// Inputs:
/// - `target`: File to inspect.
/// - `pattern`: Key prefix and value shape.
/// - `desired_value`: Value the caller wants behind the prefix.
///
/// Output:
/// - `Ok(true)` when the normalized current assignment equals the normalized
///   desired one; `Ok(false)` otherwise; `Error::KeyNotFound` when the key is
///   absent.
///
/// Details:
/// - This is the fast path the orchestrator uses to decide whether any
///   live-apply action is needed at all. It never writes.
pub fn is_applied(target: &ConfigTarget, pattern: &KeyPattern, desired_value: &str) -> Result<bool> {
    let contents = read_target(target)?;
    let current = find_assignment(&contents, pattern)?;
    Ok(normalize(&current) == normalize(&desired_assignment(pattern, desired_value)))
}

/// What: Ensure the file persists `desired_value` behind the key pattern.
///
/// Inputs:
/// - `target`: File to patch.
/// - `pattern`: Key prefix and value shape locating the assignment.
/// - `desired_value`: Replacement value, written verbatim after the prefix.
///
/// Output:
/// - `PatchOutcome::AlreadyApplied` when nothing needed to change (no write).
/// - `PatchOutcome::Updated` after a successful rewrite.
/// - `Error::KeyNotFound` when the pattern matches nothing.
/// - `Error::StaleMatch` when the file changed between locate and rewrite.
///
/// Details:
/// - The whole file is rewritten in one write after substituting every
///   instance of the old assignment span. The write is not atomic; a crash
///   between read and write can lose the file, and no file locking guards
///   against concurrent invocations. Both are accepted for the intended
///   single-interactive-user pattern.
pub fn apply_assignment(
    target: &ConfigTarget,
    pattern: &KeyPattern,
    desired_value: &str,
) -> Result<PatchOutcome> {
    let contents = read_target(target)?;
    let current = find_assignment(&contents, pattern)?;
    let wanted = desired_assignment(pattern, desired_value);

    if normalize(&current) == normalize(&wanted) {
        return Ok(PatchOutcome::AlreadyApplied);
    }

    substitute_verified(target, &current, &wanted)?;
    Ok(PatchOutcome::Updated)
}

/// Re-read the file, verify the previously matched span is still present,
/// substitute it, and write the result back to the same path.
fn substitute_verified(target: &ConfigTarget, current: &str, wanted: &str) -> Result<()> {
    let fresh = read_target(target)?;
    if !fresh.contains(current) {
        return Err(Error::StaleMatch {
            path: target.path(),
        });
    }
    let updated = fresh.replace(current, wanted);
    let path = target.path();
    fs::write(&path, updated).map_err(|source| Error::WriteConfig { path, source })
}
