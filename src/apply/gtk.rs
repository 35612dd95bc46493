//! GTK widget theme: the KDE GTK bridge plus `settings.ini` entries.

use crate::check;
use crate::error::{Error, Result};
use crate::exec;
use crate::patch::{self, KeyPattern, PatchOutcome, ValueShape};
use crate::paths::UserPaths;

/// Pattern locating the theme entry in a GTK `settings.ini`,
/// e.g. `gtk-theme-name=Adwaita-dark`.
fn key_pattern() -> KeyPattern {
    KeyPattern::new("gtk-theme-name=", ValueShape::ini())
}

/// What: Synchronize the GTK widget theme.
///
/// Inputs:
/// - `paths`: Resolved user directories.
/// - `theme`: GTK theme directory name.
///
/// Output:
/// - `AlreadyApplied` when the GTK 3 settings already carry the theme;
///   `Updated` after the D-Bus call and a successful patch.
///
/// Details:
/// - The live switch goes through `org.kde.GtkConfig.setGtkTheme`, the KDE
///   daemon that re-themes running GTK applications.
/// - `gtk-3.0/settings.ini` is the authoritative persisted entry; a
///   `gtk-4.0/settings.ini` is patched too when one exists.
pub fn sync_gtk_theme(paths: &UserPaths, theme: &str) -> Result<PatchOutcome> {
    if !check::gtk_theme_exists(paths, theme) {
        return Err(Error::GtkThemeNotFound(theme.to_string()));
    }

    let target = paths.gtk3_settings();
    let pattern = key_pattern();
    if patch::is_applied(&target, &pattern, theme)? {
        return Ok(PatchOutcome::AlreadyApplied);
    }

    exec::dbus_call(
        "org.kde.GtkConfig",
        "/GtkConfig",
        "org.kde.GtkConfig.setGtkTheme",
        &[format!("string:{theme}")],
    )?;

    let outcome = patch::apply_assignment(&target, &pattern, theme)?;

    let gtk4 = paths.gtk4_settings();
    if gtk4.path().is_file() {
        patch::apply_assignment(&gtk4, &pattern, theme)?;
    }
    Ok(outcome)
}
