//! Filesystem locations of the user's desktop configuration.
//!
//! All user paths are resolved once at startup into a [`UserPaths`] value and
//! passed into every operation; nothing reads `HOME` ambiently after that.

use std::env;
use std::path::{Path, PathBuf};

use crate::patch::ConfigTarget;
use crate::settings::Settings;

/// What: The per-user directories every patch target hangs off.
///
/// Details:
/// - `config_dir` is `XDG_CONFIG_HOME` or `$HOME/.config`.
/// - `data_dir` is `XDG_DATA_HOME` or `$HOME/.local/share`.
/// - Empty environment values are treated as unset; a missing `$HOME`
///   degrades to the current directory so path construction never panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPaths {
    /// The user's home directory.
    pub home_dir: PathBuf,
    /// Base for `.config`-style files.
    pub config_dir: PathBuf,
    /// Base for `.local/share`-style data.
    pub data_dir: PathBuf,
}

impl UserPaths {
    /// Resolve the three base directories from the environment.
    pub fn from_env() -> Self {
        let home_dir = PathBuf::from(env::var("HOME").unwrap_or_else(|_| ".".to_string()));
        let config_dir = env_dir("XDG_CONFIG_HOME").unwrap_or_else(|| home_dir.join(".config"));
        let data_dir =
            env_dir("XDG_DATA_HOME").unwrap_or_else(|| home_dir.join(".local").join("share"));
        Self {
            home_dir,
            config_dir,
            data_dir,
        }
    }

    /// The Plasma global config file carrying `LookAndFeelPackage=`.
    pub fn kdeglobals(&self) -> ConfigTarget {
        ConfigTarget::new(&self.config_dir, "kdeglobals")
    }

    /// The Konsole config file carrying `DefaultProfile=`.
    pub fn konsolerc(&self) -> ConfigTarget {
        ConfigTarget::new(&self.config_dir, "konsolerc")
    }

    /// The GTK 3 settings file carrying `gtk-theme-name=`.
    pub fn gtk3_settings(&self) -> ConfigTarget {
        ConfigTarget::new(self.config_dir.join("gtk-3.0"), "settings.ini")
    }

    /// The GTK 4 settings file; only patched when it already exists.
    pub fn gtk4_settings(&self) -> ConfigTarget {
        ConfigTarget::new(self.config_dir.join("gtk-4.0"), "settings.ini")
    }

    /// The VS Code user settings file, honoring the `vscode_user_dir`
    /// override from `settings.conf`.
    pub fn vscode_settings(&self, settings: &Settings) -> ConfigTarget {
        let dir = settings
            .vscode_user_dir
            .clone()
            .unwrap_or_else(|| self.config_dir.join("Code").join("User"));
        ConfigTarget::new(dir, "settings.json")
    }

    /// Directory holding the user's Konsole `.profile` files.
    pub fn konsole_profiles_dir(&self) -> PathBuf {
        self.data_dir.join("konsole")
    }

    /// Directories searched for an installed GTK theme, in priority order.
    pub fn gtk_theme_dirs(&self) -> Vec<PathBuf> {
        vec![
            self.home_dir.join(".themes"),
            self.data_dir.join("themes"),
            PathBuf::from("/usr/share/themes"),
        ]
    }
}

/// Read an environment directory variable, treating empty values as unset.
fn env_dir(var: &str) -> Option<PathBuf> {
    match env::var(var) {
        Ok(v) if !v.trim().is_empty() => Some(PathBuf::from(v)),
        _ => None,
    }
}

/// What: Resolve this tool's own configuration directory, ensuring it exists.
///
/// Output:
/// - `$HOME/.config/shadesync` when `$HOME` is usable, otherwise
///   `XDG_CONFIG_HOME/shadesync`.
pub fn app_config_dir() -> PathBuf {
    if let Ok(home) = env::var("HOME") {
        let dir = Path::new(&home).join(".config").join("shadesync");
        if std::fs::create_dir_all(&dir).is_ok() {
            return dir;
        }
    }
    let base = env_dir("XDG_CONFIG_HOME")
        .unwrap_or_else(|| PathBuf::from(env::var("HOME").unwrap_or_else(|_| ".".into())).join(".config"));
    let dir = base.join("shadesync");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs subdirectory inside the tool's config folder (created if missing).
pub fn logs_dir() -> PathBuf {
    let dir = app_config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{lock_home_mutex, scratch_dir};

    #[test]
    /// What: Verify every patch target resolves under the redirected `HOME`.
    ///
    /// Inputs:
    /// - Temporary `HOME`, with XDG variables cleared.
    ///
    /// Output:
    /// - `kdeglobals`, `konsolerc`, GTK and VS Code targets, profile and logs
    ///   directories all sit below the temp home.
    ///
    /// Details:
    /// - Restores the original environment afterwards.
    fn paths_targets_under_home() {
        let _guard = lock_home_mutex();
        let orig_home = std::env::var_os("HOME");
        let orig_xdg_cfg = std::env::var_os("XDG_CONFIG_HOME");
        let orig_xdg_data = std::env::var_os("XDG_DATA_HOME");
        let base = scratch_dir("paths");
        unsafe {
            std::env::set_var("HOME", base.display().to_string());
            std::env::remove_var("XDG_CONFIG_HOME");
            std::env::remove_var("XDG_DATA_HOME");
        }

        let paths = UserPaths::from_env();
        assert_eq!(
            paths.kdeglobals().path(),
            base.join(".config").join("kdeglobals")
        );
        assert_eq!(
            paths.konsolerc().path(),
            base.join(".config").join("konsolerc")
        );
        assert_eq!(
            paths.gtk3_settings().path(),
            base.join(".config").join("gtk-3.0").join("settings.ini")
        );
        assert_eq!(
            paths
                .vscode_settings(&crate::settings::Settings::default())
                .path(),
            base.join(".config")
                .join("Code")
                .join("User")
                .join("settings.json")
        );
        assert_eq!(
            paths.konsole_profiles_dir(),
            base.join(".local").join("share").join("konsole")
        );
        assert!(app_config_dir().ends_with("shadesync"));
        assert!(logs_dir().ends_with("logs"));

        unsafe {
            match orig_home {
                Some(v) => std::env::set_var("HOME", v),
                None => std::env::remove_var("HOME"),
            }
            match orig_xdg_cfg {
                Some(v) => std::env::set_var("XDG_CONFIG_HOME", v),
                None => std::env::remove_var("XDG_CONFIG_HOME"),
            }
            match orig_xdg_data {
                Some(v) => std::env::set_var("XDG_DATA_HOME", v),
                None => std::env::remove_var("XDG_DATA_HOME"),
            }
        }
        let _ = std::fs::remove_dir_all(&base);
    }

    #[test]
    /// What: The `vscode_user_dir` override replaces the default location.
    ///
    /// Inputs:
    /// - A `Settings` value with an explicit editor directory.
    ///
    /// Output:
    /// - The target points into the override, not `.config/Code/User`.
    fn paths_vscode_override_wins() {
        let _guard = lock_home_mutex();
        let paths = UserPaths {
            home_dir: PathBuf::from("/home/u"),
            config_dir: PathBuf::from("/home/u/.config"),
            data_dir: PathBuf::from("/home/u/.local/share"),
        };
        let settings = crate::settings::Settings {
            vscode_user_dir: Some(PathBuf::from("/home/u/.config/VSCodium/User")),
            ..Default::default()
        };
        assert_eq!(
            paths.vscode_settings(&settings).path(),
            PathBuf::from("/home/u/.config/VSCodium/User/settings.json")
        );
    }
}
