//! User settings for the tool itself, read from `settings.conf`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Tunables read from `~/.config/shadesync/settings.conf`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Send desktop notifications for applied changes and failures.
    pub notifications: bool,
    /// Override for the VS Code user directory (VSCodium, Code - OSS).
    pub vscode_user_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            notifications: true,
            vscode_user_dir: None,
        }
    }
}

/// What: Load user settings from `settings.conf` under HOME/XDG.
///
/// Output:
/// - A `Settings` value; falls back to `Settings::default()` when the file is
///   missing or a line is unparsable.
///
/// Details:
/// - Lines are `key = value`; `#` and `//` start comments; keys are matched
///   case-insensitively with `.`, `-`, and spaces folded to `_`.
pub fn settings() -> Settings {
    let mut out = Settings::default();
    let Some(path) = resolve_settings_path() else {
        return out;
    };
    let Ok(content) = fs::read_to_string(&path) else {
        return out;
    };
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        if !trimmed.contains('=') {
            continue;
        }
        let mut parts = trimmed.splitn(2, '=');
        let raw_key = parts.next().unwrap_or("");
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val_raw = parts.next().unwrap_or("").trim();
        let val = strip_inline_comment(val_raw);
        match key.as_str() {
            "notifications" | "notify" | "desktop_notifications" => {
                out.notifications = parse_bool(val);
            }
            "vscode_user_dir" | "vscode_dir" | "code_user_dir" => {
                if !val.is_empty() {
                    out.vscode_user_dir = Some(PathBuf::from(val));
                }
            }
            _ => {}
        }
    }
    out
}

/// Locate `settings.conf`, preferring `$HOME/.config/shadesync` then XDG.
fn resolve_settings_path() -> Option<PathBuf> {
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Ok(h) = env::var("HOME") {
        candidates.push(
            Path::new(&h)
                .join(".config")
                .join("shadesync")
                .join("settings.conf"),
        );
    }
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME")
        && !xdg.trim().is_empty()
    {
        candidates.push(Path::new(&xdg).join("shadesync").join("settings.conf"));
    }
    candidates.into_iter().find(|p| p.is_file())
}

/// Cut an inline `#` or `//` comment off a value and trim the remainder.
fn strip_inline_comment(val: &str) -> &str {
    let mut cut = val.len();
    if let Some(i) = val.find('#') {
        cut = cut.min(i);
    }
    if let Some(i) = val.find("//") {
        cut = cut.min(i);
    }
    val[..cut].trim()
}

fn parse_bool(val: &str) -> bool {
    let lv = val.to_ascii_lowercase();
    lv == "true" || lv == "1" || lv == "yes" || lv == "on"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{lock_home_mutex, scratch_dir};

    #[test]
    /// What: Parse recognized keys and ignore comments and junk lines.
    ///
    /// Inputs:
    /// - Temporary `HOME` with a `settings.conf` containing overrides,
    ///   comments, and an unknown key.
    ///
    /// Output:
    /// - Notifications disabled and the editor directory override picked up;
    ///   unknown keys are skipped silently.
    ///
    /// Details:
    /// - Restores `HOME` afterwards to avoid polluting the user environment.
    fn settings_parse_overrides_and_comments() {
        let _guard = lock_home_mutex();
        let orig_home = std::env::var_os("HOME");
        let base = scratch_dir("settings");
        let cfg = base.join(".config").join("shadesync");
        let _ = std::fs::create_dir_all(&cfg);
        std::fs::write(
            cfg.join("settings.conf"),
            "# shadesync settings\nnotifications = off // too chatty\nvscode-user-dir = /tmp/VSCodium/User\nnot_a_real_key = 1\nmalformed line\n",
        )
        .unwrap();
        unsafe { std::env::set_var("HOME", base.display().to_string()) };

        let s = settings();
        assert!(!s.notifications);
        assert_eq!(
            s.vscode_user_dir.as_deref(),
            Some(Path::new("/tmp/VSCodium/User"))
        );

        unsafe {
            match orig_home {
                Some(v) => std::env::set_var("HOME", v),
                None => std::env::remove_var("HOME"),
            }
        }
        let _ = std::fs::remove_dir_all(&base);
    }

    #[test]
    /// What: Missing config file yields plain defaults.
    ///
    /// Inputs:
    /// - Temporary `HOME` without a `settings.conf`.
    ///
    /// Output:
    /// - `Settings::default()`.
    fn settings_defaults_when_absent() {
        let _guard = lock_home_mutex();
        let orig_home = std::env::var_os("HOME");
        let base = scratch_dir("settings_absent");
        unsafe { std::env::set_var("HOME", base.display().to_string()) };

        assert_eq!(settings(), Settings::default());

        unsafe {
            match orig_home {
                Some(v) => std::env::set_var("HOME", v),
                None => std::env::remove_var("HOME"),
            }
        }
        let _ = std::fs::remove_dir_all(&base);
    }

    #[test]
    /// What: Inline comment stripping handles both comment markers.
    ///
    /// Inputs:
    /// - Values with trailing `#` and `//` comments and one without.
    ///
    /// Output:
    /// - The bare value in every case.
    fn settings_strip_inline_comment() {
        assert_eq!(strip_inline_comment("on # note"), "on");
        assert_eq!(strip_inline_comment("on // note"), "on");
        assert_eq!(strip_inline_comment("plain"), "plain");
    }
}
