//! Konsole profile: live re-profiling of open sessions plus `konsolerc`.

use crate::check;
use crate::error::{Error, Result};
use crate::exec;
use crate::patch::{self, KeyPattern, PatchOutcome, ValueShape};
use crate::paths::UserPaths;

/// Pattern locating the default profile entry in `konsolerc`,
/// e.g. `DefaultProfile=Dark.profile`.
fn key_pattern() -> KeyPattern {
    KeyPattern::new("DefaultProfile=", ValueShape::ini())
}

/// What: Synchronize the Konsole profile.
///
/// Inputs:
/// - `paths`: Resolved user directories.
/// - `profile`: Profile name without the `.profile` suffix.
///
/// Output:
/// - `AlreadyApplied` when `konsolerc` already points at the profile;
///   `Updated` after re-profiling live sessions and patching the default.
///
/// Details:
/// - Every running Konsole window is found via `pidof`; each exposes its
///   sessions on the bus as `org.kde.konsole-<pid>`, and each session gets a
///   `setProfile` call so open terminals change immediately. The `konsolerc`
///   patch covers freshly spawned windows.
pub fn sync_konsole_profile(paths: &UserPaths, profile: &str) -> Result<PatchOutcome> {
    if !check::konsole_profile_exists(paths, profile) {
        return Err(Error::ProfileNotFound(profile.to_string()));
    }

    let target = paths.konsolerc();
    let pattern = key_pattern();
    let desired = format!("{profile}.profile");
    if patch::is_applied(&target, &pattern, &desired)? {
        return Ok(PatchOutcome::AlreadyApplied);
    }

    reprofile_running_sessions(profile)?;
    patch::apply_assignment(&target, &pattern, &desired)
}

/// Switch the profile of every session in every running Konsole process.
fn reprofile_running_sessions(profile: &str) -> Result<()> {
    for pid in konsole_pids() {
        let dest = format!("org.kde.konsole-{pid}");
        let xml = exec::dbus_introspect(&dest, "/Sessions")?;
        let sessions = parse_session_nodes(&xml);
        log::debug!("konsole pid {pid}: {} session(s)", sessions.len());
        for session in sessions {
            exec::dbus_call(
                &dest,
                &format!("/Sessions/{session}"),
                "org.kde.konsole.Session.setProfile",
                &[format!("string:{profile}")],
            )?;
        }
    }
    Ok(())
}

/// PIDs of running Konsole processes. `pidof` exits non-zero when none run;
/// that is an empty list, not an error.
fn konsole_pids() -> Vec<String> {
    match exec::run_capture("pidof", &["konsole"]) {
        Ok(out) => out.split_whitespace().map(str::to_string).collect(),
        Err(_) => Vec::new(),
    }
}

/// What: Extract session numbers from a `/Sessions` introspection reply.
///
/// Inputs:
/// - `xml`: Introspection XML containing `<node name="NN"/>` children.
///
/// Output:
/// - The numeric node names in document order; non-numeric nodes are skipped.
pub(crate) fn parse_session_nodes(xml: &str) -> Vec<String> {
    let mut out = Vec::new();
    let marker = "<node name=\"";
    let mut rest = xml;
    while let Some(pos) = rest.find(marker) {
        rest = &rest[pos + marker.len()..];
        if let Some(end) = rest.find('"') {
            let name = &rest[..end];
            if !name.is_empty() && name.chars().all(|c| c.is_ascii_digit()) {
                out.push(name.to_string());
            }
            rest = &rest[end..];
        } else {
            break;
        }
    }
    out
}
