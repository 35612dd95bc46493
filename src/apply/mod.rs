//! Per-setting synchronization flows.
//!
//! Each submodule owns the full sequence for one setting: validate the
//! requested name, short-circuit when the persisted file already carries the
//! value, apply the change live through the desktop mechanism, then patch the
//! persisted file to match. Failures are returned to the orchestrator, which
//! reports them and moves on to the next setting.

mod gtk;
mod konsole;
mod plasma;
mod vscode;
mod wallpaper;

pub use gtk::sync_gtk_theme;
pub use konsole::sync_konsole_profile;
pub use plasma::sync_global_theme;
pub use vscode::sync_vscode_theme;
pub use wallpaper::sync_wallpaper;

/// The settings this tool can synchronize, used for labeling reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    /// Plasma global theme (look-and-feel package).
    GlobalTheme,
    /// GTK widget theme.
    GtkTheme,
    /// Desktop wallpaper.
    Wallpaper,
    /// Konsole terminal profile.
    KonsoleProfile,
    /// VS Code color theme.
    VscodeTheme,
}

impl SettingKind {
    /// Human-readable label used in logs and notifications.
    pub fn label(self) -> &'static str {
        match self {
            SettingKind::GlobalTheme => "global theme",
            SettingKind::GtkTheme => "GTK theme",
            SettingKind::Wallpaper => "wallpaper",
            SettingKind::KonsoleProfile => "Konsole profile",
            SettingKind::VscodeTheme => "VS Code theme",
        }
    }
}
