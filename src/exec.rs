//! Thin wrappers around the external desktop tools this crate drives.
//!
//! Nothing here interprets tool behavior; each helper spawns a process,
//! waits for it, and maps spawn failures and non-zero exits onto
//! [`Error::ExternalTool`]. All calls block until the tool finishes; there is
//! no timeout, so a hanging tool hangs the run.

use std::ffi::OsStr;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// What: Run a tool and capture its stdout as UTF-8 text.
///
/// Inputs:
/// - `tool`: Binary name, resolved through `PATH`.
/// - `args`: Arguments passed verbatim.
///
/// Output:
/// - Captured stdout on success; `Error::ExternalTool` on spawn failure or a
///   non-zero exit, carrying the first stderr line when there is one.
pub fn run_capture<S: AsRef<OsStr>>(tool: &str, args: &[S]) -> Result<String> {
    let output = Command::new(tool)
        .args(args)
        .output()
        .map_err(|e| Error::external(tool, e))?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let detail = stderr.lines().next().unwrap_or("").trim().to_string();
        let reason = if detail.is_empty() {
            output.status.to_string()
        } else {
            format!("{} ({detail})", output.status)
        };
        return Err(Error::external(tool, reason));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Run a tool for its side effect, discarding stdout.
pub fn run_quiet<S: AsRef<OsStr>>(tool: &str, args: &[S]) -> Result<()> {
    run_capture(tool, args).map(|_| ())
}

/// What: Spawn a tool detached from our stdio and do not wait for it.
///
/// Details:
/// - Used for fire-and-forget calls such as desktop notifications, where
///   tool chatter must not interleave with our own output.
pub fn spawn_detached<S: AsRef<OsStr>>(tool: &str, args: &[S]) -> Result<()> {
    Command::new(tool)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|e| Error::external(tool, e))
}

/// What: Send a session-bus method call via `dbus-send`.
///
/// Inputs:
/// - `dest`: Bus name, e.g. `org.kde.plasmashell`.
/// - `object`: Object path, e.g. `/PlasmaShell`.
/// - `method`: Fully qualified method name.
/// - `args`: Typed payload arguments in `dbus-send` syntax, e.g. `string:x`.
pub fn dbus_call(dest: &str, object: &str, method: &str, args: &[String]) -> Result<()> {
    let mut argv: Vec<String> = vec![
        "--session".to_string(),
        format!("--dest={dest}"),
        "--type=method_call".to_string(),
        object.to_string(),
        method.to_string(),
    ];
    argv.extend(args.iter().cloned());
    run_quiet("dbus-send", &argv)
}

/// Introspect a session-bus object and return the reply XML.
pub fn dbus_introspect(dest: &str, object: &str) -> Result<String> {
    let argv: Vec<String> = vec![
        "--session".to_string(),
        format!("--dest={dest}"),
        "--type=method_call".to_string(),
        "--print-reply".to_string(),
        object.to_string(),
        "org.freedesktop.DBus.Introspectable.Introspect".to_string(),
    ];
    run_capture("dbus-send", &argv)
}

/// What: Determine whether a command is available on the `PATH`.
///
/// Details:
/// - Accepts explicit paths (containing a separator) and honours Unix
///   permission bits; otherwise scans `PATH` directories in order.
pub fn command_on_path(cmd: &str) -> bool {
    use std::path::Path;

    fn is_exec(p: &Path) -> bool {
        if !p.is_file() {
            return false;
        }
        use std::os::unix::fs::PermissionsExt;
        match std::fs::metadata(p) {
            Ok(meta) => meta.permissions().mode() & 0o111 != 0,
            Err(_) => false,
        }
    }

    if cmd.contains(std::path::MAIN_SEPARATOR) {
        return is_exec(Path::new(cmd));
    }
    if let Some(paths) = std::env::var_os("PATH") {
        for dir in std::env::split_paths(&paths) {
            if is_exec(&dir.join(cmd)) {
                return true;
            }
        }
    }
    false
}
