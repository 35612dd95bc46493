//! Desktop wallpaper via the Plasma shell scripting interface.

use std::path::Path;

use crate::check;
use crate::error::{Error, Result};
use crate::exec;
use crate::patch::PatchOutcome;

/// Desktop script setting the image on every desktop containment.
fn wallpaper_script(image: &str) -> String {
    format!(
        r#"
var allDesktops = desktops();
for (i = 0; i < allDesktops.length; i++) {{
    d = allDesktops[i];
    d.wallpaperPlugin = "org.kde.image";
    d.currentConfigGroup = Array("Wallpaper", "org.kde.image", "General");
    d.writeConfig("Image", "{image}");
}}
"#
    )
}

/// What: Set the wallpaper on every desktop.
///
/// Inputs:
/// - `wallpaper`: Absolute path to the image file.
///
/// Output:
/// - `Updated` after the shell accepted the script; validation and D-Bus
///   failures are returned as errors.
///
/// Details:
/// - `org.kde.PlasmaShell.evaluateScript` both applies the image and
///   persists it in the shell's own config, so there is no file to patch
///   here. The call cannot observe the current image cheaply, which is why
///   this setting has no already-applied fast path.
pub fn sync_wallpaper(wallpaper: &Path) -> Result<PatchOutcome> {
    if !check::wallpaper_exists(wallpaper) {
        return Err(Error::WallpaperNotFound(wallpaper.to_path_buf()));
    }

    let script = wallpaper_script(&wallpaper.display().to_string());
    exec::dbus_call(
        "org.kde.plasmashell",
        "/PlasmaShell",
        "org.kde.PlasmaShell.evaluateScript",
        &[format!("string:{script}")],
    )?;
    Ok(PatchOutcome::Updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::scratch_dir;

    #[test]
    /// What: The generated desktop script embeds the image path verbatim.
    ///
    /// Inputs:
    /// - A wallpaper path with a space in it.
    ///
    /// Output:
    /// - The script writes that exact path into the image config key and
    ///   targets every desktop containment.
    fn wallpaper_script_embeds_path() {
        let script = wallpaper_script("/home/u/Pictures/winter scene.png");
        assert!(script.contains("d.writeConfig(\"Image\", \"/home/u/Pictures/winter scene.png\")"));
        assert!(script.contains("var allDesktops = desktops();"));
        assert!(script.contains("org.kde.image"));
    }

    #[test]
    /// What: A missing wallpaper file fails validation before any D-Bus call.
    ///
    /// Inputs:
    /// - A path that does not exist.
    ///
    /// Output:
    /// - `Error::WallpaperNotFound` carrying the path.
    fn wallpaper_missing_file_rejected() {
        let dir = scratch_dir("wallpaper");
        let missing = dir.join("nope.png");
        match sync_wallpaper(&missing) {
            Err(Error::WallpaperNotFound(p)) => assert_eq!(p, missing),
            other => panic!("expected WallpaperNotFound, got {other:?}"),
        }
        let _ = std::fs::remove_dir_all(&dir);
    }
}
