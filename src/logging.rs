//! Append-only audit log of applied settings.

use std::io::Write;

use crate::util::ts_to_date;

/// What: Append one applied setting to the audit log under the logs directory.
///
/// Inputs:
/// - `kind`: Human label of the setting, e.g. `global theme`.
/// - `value`: The value that was applied.
///
/// Output:
/// - `Ok(())` on success; otherwise an I/O error.
///
/// Details:
/// - Writes to `logs_dir/apply_log.log`, prefixing each line with a UTC
///   timestamp so runs triggered from cron stay attributable.
pub fn log_applied(kind: &str, value: &str) -> std::io::Result<()> {
    let path = crate::paths::logs_dir().join("apply_log.log");
    let mut f = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .ok();
    writeln!(f, "{} {kind}: {value}", ts_to_date(now))
}
