//! Fire-and-forget desktop notifications via `notify-send`.

use crate::exec;
use crate::settings::Settings;

/// Urgency of a notification, mapped onto `notify-send -u` levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Routine progress, shown with low urgency.
    Info,
    /// Something was skipped or degraded.
    Warning,
    /// A setting failed to apply.
    Error,
}

impl Severity {
    fn urgency(self) -> &'static str {
        match self {
            Severity::Info => "low",
            Severity::Warning => "normal",
            Severity::Error => "critical",
        }
    }
}

/// What: Show a desktop notification, honoring the user's notifications toggle.
///
/// Inputs:
/// - `settings`: Gates the call; nothing is sent when notifications are off.
/// - `severity`: Mapped to the `notify-send` urgency level.
/// - `summary` / `body`: Notification title and text.
///
/// Details:
/// - Fire-and-forget: the process is spawned detached and spawn failures are
///   ignored, since a missing `notify-send` must never fail a sync run.
pub fn notify(settings: &Settings, severity: Severity, summary: &str, body: &str) {
    if !settings.notifications || !exec::command_on_path("notify-send") {
        return;
    }
    let _ = exec::spawn_detached(
        "notify-send",
        &[
            "-a",
            "shadesync",
            "-u",
            severity.urgency(),
            summary,
            body,
        ],
    );
}
