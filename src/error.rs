//! Crate-wide error type for theme synchronization.
//!
//! Every fallible operation in the crate returns [`Result`]. Failures are
//! reported per setting at the orchestration boundary; a failed setting never
//! aborts the remaining ones.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// What: All failure modes of a synchronization run.
///
/// Details:
/// - `KeyNotFound` and `StaleMatch` come out of the config-file patcher and
///   are always surfaced to the user; swallowing them would leave the live
///   desktop state and the persisted file inconsistent.
/// - `ExternalTool` covers spawn failures and non-zero exits of the desktop
///   tools this crate drives but does not reimplement.
#[derive(Debug, Error)]
pub enum Error {
    /// The key pattern matched nothing in the target file.
    #[error("configuration key `{key}` not found; wrong file format or key pattern")]
    KeyNotFound {
        /// Prefix of the key pattern that failed to match.
        key: String,
    },

    /// The file changed between locating the old assignment and rewriting it.
    #[error("{} changed while patching; leaving it untouched", .path.display())]
    StaleMatch {
        /// File that was concurrently modified.
        path: PathBuf,
    },

    /// An external desktop tool failed to spawn or exited with an error.
    #[error("{tool}: {reason}")]
    ExternalTool {
        /// Binary that was invoked.
        tool: String,
        /// Spawn error or captured stderr.
        reason: String,
    },

    /// Invoked without any setting to apply.
    #[error("no settings requested; run with --help for the available flags")]
    NoSettingsRequested,

    /// The requested global theme is not installed.
    #[error("no global theme named `{0}` is installed")]
    ThemeNotFound(String),

    /// The requested GTK theme is not present in any theme directory.
    #[error("no GTK theme named `{0}` was found")]
    GtkThemeNotFound(String),

    /// The requested wallpaper path does not point at a file.
    #[error("wallpaper {} does not exist or is not a file", .0.display())]
    WallpaperNotFound(PathBuf),

    /// The requested Konsole profile has no `.profile` file on disk.
    #[error("no Konsole profile named `{0}` was found")]
    ProfileNotFound(String),

    /// Reading a configuration file failed.
    #[error("failed to read {}: {source}", .path.display())]
    ReadConfig {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Writing a configuration file back failed.
    #[error("failed to write {}: {source}", .path.display())]
    WriteConfig {
        /// File that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

impl Error {
    /// Build an `ExternalTool` error from a tool name and any displayable cause.
    pub(crate) fn external(tool: &str, reason: impl std::fmt::Display) -> Self {
        Error::ExternalTool {
            tool: tool.to_string(),
            reason: reason.to_string(),
        }
    }
}
