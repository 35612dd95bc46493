//! Top-level orchestration: run every requested setting and report each one.

use crate::apply::{
    self, SettingKind, sync_global_theme, sync_gtk_theme, sync_konsole_profile, sync_vscode_theme,
    sync_wallpaper,
};
use crate::cli::Cli;
use crate::error::{Error, Result};
use crate::logging;
use crate::notify::{Severity, notify};
use crate::patch::PatchOutcome;
use crate::paths::UserPaths;
use crate::settings::{self, Settings};

/// What: Apply every setting requested on the command line.
///
/// Inputs:
/// - `cli`: Parsed flags.
///
/// Output:
/// - `Ok(failed)` with the number of settings that failed; settings run in a
///   fixed order and one failure never blocks the rest.
/// - `Error::NoSettingsRequested` when no flag asked for anything.
///
/// Details:
/// - There is no retry and no rollback; a failed setting is terminal for
///   this run and reported via log and notification.
pub fn run(cli: &Cli) -> Result<usize> {
    if cli.requests_nothing() {
        return Err(Error::NoSettingsRequested);
    }

    let paths = UserPaths::from_env();
    let settings = settings::settings();
    let mut failed = 0usize;

    if let Some(theme) = cli.plasma.as_deref() {
        report(
            &settings,
            SettingKind::GlobalTheme,
            theme,
            sync_global_theme(&paths, theme),
            &mut failed,
        );
    }
    if let Some(theme) = cli.gtk.as_deref() {
        report(
            &settings,
            SettingKind::GtkTheme,
            theme,
            sync_gtk_theme(&paths, theme),
            &mut failed,
        );
    }
    if let Some(wallpaper) = cli.wallpaper.as_deref() {
        report(
            &settings,
            SettingKind::Wallpaper,
            &wallpaper.display().to_string(),
            sync_wallpaper(wallpaper),
            &mut failed,
        );
    }
    if let Some(profile) = cli.konsole.as_deref() {
        report(
            &settings,
            SettingKind::KonsoleProfile,
            profile,
            sync_konsole_profile(&paths, profile),
            &mut failed,
        );
    }
    if let Some(theme) = cli.vscode.as_deref() {
        report(
            &settings,
            SettingKind::VscodeTheme,
            theme,
            sync_vscode_theme(&paths, &settings, theme),
            &mut failed,
        );
    }

    Ok(failed)
}

/// Log one setting's outcome, notify on changes and failures, and count
/// failures for the exit status.
fn report(
    settings: &Settings,
    kind: apply::SettingKind,
    value: &str,
    result: Result<PatchOutcome>,
    failed: &mut usize,
) {
    let label = kind.label();
    match result {
        Ok(PatchOutcome::AlreadyApplied) => {
            log::info!("{label}: `{value}` already applied, nothing to do");
        }
        Ok(PatchOutcome::Updated) => {
            log::info!("{label}: applied `{value}`");
            if let Err(e) = logging::log_applied(label, value) {
                log::warn!("could not write audit log: {e}");
            }
            notify(
                settings,
                Severity::Info,
                "shadesync",
                &format!("{label}: applied {value}"),
            );
        }
        Err(e) => {
            *failed += 1;
            log::error!("{label}: {e}");
            notify(
                settings,
                Severity::Error,
                "shadesync",
                &format!("{label}: {e}"),
            );
        }
    }
}
