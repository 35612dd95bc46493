//! VS Code color theme inside the user `settings.json`.

use std::fs;

use crate::error::{Error, Result};
use crate::patch::{self, KeyPattern, PatchOutcome, ValueShape};
use crate::paths::UserPaths;
use crate::settings::Settings;

const COLOR_THEME_PREFIX: &str = "\"workbench.colorTheme\":";
const PDF_INVERT_PREFIX: &str = "\"latex-workshop.view.pdf.invert\":";

fn color_theme_pattern() -> KeyPattern {
    KeyPattern::new(COLOR_THEME_PREFIX, ValueShape::json())
}

fn pdf_invert_pattern() -> KeyPattern {
    KeyPattern::new(PDF_INVERT_PREFIX, ValueShape::json())
}

/// Quoted settings.json value with its trailing comma,
/// e.g. ` "GitHub Plus",`.
fn quoted_value(theme: &str) -> String {
    format!(" \"{theme}\",")
}

/// What: Synchronize the VS Code color theme.
///
/// Inputs:
/// - `paths`: Resolved user directories.
/// - `settings`: Supplies the editor directory override.
/// - `theme`: Theme name as shown in the editor's theme picker.
///
/// Output:
/// - `AlreadyApplied` when the settings file already carries the theme;
///   `Updated` after the patch.
///
/// Details:
/// - The editor watches its settings file and re-themes itself on change, so
///   the file patch is also the live apply.
/// - When the file carries a LaTeX Workshop PDF-invert entry, its value is
///   flipped alongside the theme so the PDF preview follows the switch. A
///   file without that entry is left alone.
pub fn sync_vscode_theme(
    paths: &UserPaths,
    settings: &Settings,
    theme: &str,
) -> Result<PatchOutcome> {
    let target = paths.vscode_settings(settings);
    let pattern = color_theme_pattern();
    let desired = quoted_value(theme);
    if patch::is_applied(&target, &pattern, &desired)? {
        return Ok(PatchOutcome::AlreadyApplied);
    }

    let outcome = patch::apply_assignment(&target, &pattern, &desired)?;
    toggle_pdf_invert(&target)?;
    Ok(outcome)
}

/// Flip `"latex-workshop.view.pdf.invert":` between ` 1,` and ` 0,` when the
/// entry is present; absence is not an error.
fn toggle_pdf_invert(target: &patch::ConfigTarget) -> Result<()> {
    let path = target.path();
    let contents = fs::read_to_string(&path).map_err(|source| Error::ReadConfig {
        path: path.clone(),
        source,
    })?;
    let pattern = pdf_invert_pattern();
    let current = match patch::find_assignment(&contents, &pattern) {
        Ok(found) => found,
        Err(Error::KeyNotFound { .. }) => {
            log::debug!("no PDF-invert entry in {}; skipping toggle", path.display());
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let inverted = patch::normalize(&current) == format!("{PDF_INVERT_PREFIX} 1,");
    let desired = if inverted { " 0," } else { " 1," };
    log::debug!("PDF invert {} -> {}", if inverted { 1 } else { 0 }, desired.trim());
    patch::apply_assignment(target, &pattern, desired).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{lock_home_mutex, scratch_dir};

    const SETTINGS_JSON: &str = "{\n    \"editor.fontSize\": 14,\n    \"workbench.colorTheme\": \"GitHub Plus\",\n    \"latex-workshop.view.pdf.invert\": 1,\n    \"files.autoSave\": \"off\"\n}\n";

    fn paths_under(base: &std::path::Path) -> UserPaths {
        UserPaths {
            home_dir: base.to_path_buf(),
            config_dir: base.join(".config"),
            data_dir: base.join(".local").join("share"),
        }
    }

    #[test]
    /// What: Theme patch flips the PDF-invert entry and keeps the JSON valid.
    ///
    /// Inputs:
    /// - A realistic `settings.json` with theme and invert entries.
    ///
    /// Output:
    /// - `Updated`, theme rewritten, invert flipped from 1 to 0, other keys
    ///   untouched, file still parses as JSON.
    fn vscode_sync_patches_theme_and_invert() {
        let _guard = lock_home_mutex();
        let base = scratch_dir("vscode_sync");
        let user_dir = base.join(".config").join("Code").join("User");
        std::fs::create_dir_all(&user_dir).unwrap();
        std::fs::write(user_dir.join("settings.json"), SETTINGS_JSON).unwrap();
        let paths = paths_under(&base);
        let settings = Settings::default();

        assert_eq!(
            sync_vscode_theme(&paths, &settings, "Solarized Dark").unwrap(),
            PatchOutcome::Updated
        );
        let body = std::fs::read_to_string(user_dir.join("settings.json")).unwrap();
        assert!(body.contains("\"workbench.colorTheme\": \"Solarized Dark\","));
        assert!(body.contains("\"latex-workshop.view.pdf.invert\": 0,"));
        assert!(body.contains("\"editor.fontSize\": 14,"));
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed["workbench.colorTheme"], "Solarized Dark");
        assert_eq!(parsed["latex-workshop.view.pdf.invert"], 0);

        let _ = std::fs::remove_dir_all(&base);
    }

    #[test]
    /// What: A second sync with the same theme is a no-op for the whole file.
    ///
    /// Inputs:
    /// - A settings file already carrying the desired theme.
    ///
    /// Output:
    /// - `AlreadyApplied` and byte-identical content, invert untouched.
    fn vscode_sync_already_applied_leaves_invert_alone() {
        let _guard = lock_home_mutex();
        let base = scratch_dir("vscode_noop");
        let user_dir = base.join(".config").join("Code").join("User");
        std::fs::create_dir_all(&user_dir).unwrap();
        std::fs::write(user_dir.join("settings.json"), SETTINGS_JSON).unwrap();
        let paths = paths_under(&base);
        let settings = Settings::default();

        assert_eq!(
            sync_vscode_theme(&paths, &settings, "GitHub Plus").unwrap(),
            PatchOutcome::AlreadyApplied
        );
        assert_eq!(
            std::fs::read_to_string(user_dir.join("settings.json")).unwrap(),
            SETTINGS_JSON
        );
        let _ = std::fs::remove_dir_all(&base);
    }

    #[test]
    /// What: A settings file without the invert entry is patched normally.
    ///
    /// Inputs:
    /// - A settings file carrying only the theme entry.
    ///
    /// Output:
    /// - `Updated` with the theme rewritten; the missing invert entry is not
    ///   an error and nothing else changes.
    fn vscode_sync_without_invert_entry() {
        let _guard = lock_home_mutex();
        let base = scratch_dir("vscode_no_invert");
        let user_dir = base.join(".config").join("Code").join("User");
        std::fs::create_dir_all(&user_dir).unwrap();
        std::fs::write(
            user_dir.join("settings.json"),
            "{\n    \"workbench.colorTheme\": \"Old\",\n    \"files.autoSave\": \"off\"\n}\n",
        )
        .unwrap();
        let paths = paths_under(&base);
        let settings = Settings::default();

        assert_eq!(
            sync_vscode_theme(&paths, &settings, "New").unwrap(),
            PatchOutcome::Updated
        );
        let body = std::fs::read_to_string(user_dir.join("settings.json")).unwrap();
        assert!(body.contains("\"workbench.colorTheme\": \"New\","));
        assert!(body.contains("\"files.autoSave\": \"off\""));
        let _ = std::fs::remove_dir_all(&base);
    }

    #[test]
    /// What: The invert toggle flips 0 back to 1.
    ///
    /// Inputs:
    /// - A settings file with the invert entry at 0.
    ///
    /// Output:
    /// - After a theme change, the entry reads 1.
    fn vscode_invert_toggles_back_up() {
        let _guard = lock_home_mutex();
        let base = scratch_dir("vscode_invert_up");
        let user_dir = base.join(".config").join("Code").join("User");
        std::fs::create_dir_all(&user_dir).unwrap();
        std::fs::write(
            user_dir.join("settings.json"),
            "{\n    \"workbench.colorTheme\": \"Old\",\n    \"latex-workshop.view.pdf.invert\": 0,\n}\n",
        )
        .unwrap();
        let paths = paths_under(&base);
        let settings = Settings::default();

        sync_vscode_theme(&paths, &settings, "New").unwrap();
        let body = std::fs::read_to_string(user_dir.join("settings.json")).unwrap();
        assert!(body.contains("\"latex-workshop.view.pdf.invert\": 1,"));
        let _ = std::fs::remove_dir_all(&base);
    }
}
