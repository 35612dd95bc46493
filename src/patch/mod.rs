//! Idempotent single-key patching of loosely structured text config files.
//!
//! The desktop keeps theme state in several formats (INI-like `kdeglobals`,
//! GTK `settings.ini`, JSON-like VS Code `settings.json`). None of them are
//! parsed here; a file is treated as an opaque UTF-8 blob and exactly one
//! `key value` span is substituted, so comments, ordering, and formatting
//! survive byte-for-byte. Public re-exports keep the `crate::patch::*` API
//! stable.

mod grammar;
mod matcher;
mod patcher;

pub use grammar::{KeyPattern, ValueShape};
pub use matcher::find_assignment;
pub use patcher::{ConfigTarget, PatchOutcome, apply_assignment, is_applied};

pub(crate) use patcher::normalize;
