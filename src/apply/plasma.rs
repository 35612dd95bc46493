//! Plasma global theme: `lookandfeeltool` plus the `kdeglobals` entry.

use crate::check;
use crate::error::{Error, Result};
use crate::exec;
use crate::patch::{self, KeyPattern, PatchOutcome, ValueShape};
use crate::paths::UserPaths;

/// Pattern locating the look-and-feel entry in `kdeglobals`,
/// e.g. `LookAndFeelPackage=Aritim-Dark_DEV`.
fn key_pattern() -> KeyPattern {
    KeyPattern::new("LookAndFeelPackage=", ValueShape::ini())
}

/// What: Synchronize the Plasma global theme.
///
/// Inputs:
/// - `paths`: Resolved user directories.
/// - `theme`: Look-and-feel package id to apply.
///
/// Output:
/// - `AlreadyApplied` when `kdeglobals` already carries the theme (nothing is
///   invoked live); `Updated` after a live apply and a successful patch.
///
/// Details:
/// - `lookandfeeltool --apply` performs the live switch; the `kdeglobals`
///   patch keeps the persisted entry consistent with what other tools read.
pub fn sync_global_theme(paths: &UserPaths, theme: &str) -> Result<PatchOutcome> {
    if !check::global_theme_exists(theme)? {
        return Err(Error::ThemeNotFound(theme.to_string()));
    }

    let target = paths.kdeglobals();
    let pattern = key_pattern();
    if patch::is_applied(&target, &pattern, theme)? {
        return Ok(PatchOutcome::AlreadyApplied);
    }

    exec::run_quiet("lookandfeeltool", &["--apply", theme])?;
    patch::apply_assignment(&target, &pattern, theme)
}
