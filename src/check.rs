//! Existence validators for the names and files a sync run receives.
//!
//! Each requested setting is validated before anything is applied, so a typo
//! fails that one setting up front instead of leaving the desktop half-themed.

use std::path::Path;

use crate::error::Result;
use crate::exec;
use crate::paths::UserPaths;

/// What: Check whether a global theme (look-and-feel package) is installed.
///
/// Inputs:
/// - `name`: Package id as listed by `lookandfeeltool -l`.
///
/// Output:
/// - `Ok(true)` when the listing contains the name; `Ok(false)` otherwise;
///   `Error::ExternalTool` when the listing tool itself is unavailable.
pub fn global_theme_exists(name: &str) -> Result<bool> {
    let listing = exec::run_capture("lookandfeeltool", &["-l"])?;
    log::debug!("lookandfeeltool -l returned {} entries", listing.lines().count());
    Ok(listing.lines().any(|line| line.trim() == name))
}

/// Whether the wallpaper path points at an existing regular file.
pub fn wallpaper_exists(path: &Path) -> bool {
    path.is_file()
}

/// What: Check whether a Konsole profile with this name exists on disk.
///
/// Inputs:
/// - `paths`: Resolved user directories.
/// - `name`: Profile name without the `.profile` suffix.
///
/// Output:
/// - `true` when `<name>.profile` is a file in the Konsole data directory.
pub fn konsole_profile_exists(paths: &UserPaths, name: &str) -> bool {
    paths
        .konsole_profiles_dir()
        .join(format!("{name}.profile"))
        .is_file()
}

/// What: Check whether a GTK theme directory with this name exists.
///
/// Inputs:
/// - `paths`: Resolved user directories.
/// - `name`: Theme directory name.
///
/// Output:
/// - `true` when any of the user or system theme directories contains a
///   directory with the requested name.
pub fn gtk_theme_exists(paths: &UserPaths, name: &str) -> bool {
    paths
        .gtk_theme_dirs()
        .iter()
        .any(|dir| dir.join(name).is_dir())
}
