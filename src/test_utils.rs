//! Global test utilities for ensuring test isolation.

#[cfg(test)]
use std::sync::{Mutex, MutexGuard, OnceLock};

#[cfg(test)]
/// Global mutex for tests that modify the PATH environment variable.
///
/// `std::env::set_var` affects the entire process, so tests that rewrite PATH
/// to point at fake executables must serialize through this mutex.
static PATH_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();

#[cfg(test)]
/// Global mutex for tests that modify the HOME environment variable.
static HOME_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();

#[cfg(test)]
/// Acquire the global PATH mutex, recovering from poisoning by panicked tests.
///
/// Hold the returned guard for the entire duration that PATH is modified.
pub fn lock_path_mutex() -> MutexGuard<'static, ()> {
    PATH_MUTEX
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

#[cfg(test)]
/// Acquire the global HOME mutex, recovering from poisoning by panicked tests.
pub fn lock_home_mutex() -> MutexGuard<'static, ()> {
    HOME_MUTEX
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

#[cfg(test)]
/// Build a unique scratch directory under the system temp dir.
///
/// The name embeds the process id and a nanosecond timestamp so parallel test
/// binaries never collide. The directory is created before returning.
pub fn scratch_dir(tag: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "shadesync_test_{}_{}_{}",
        tag,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let _ = std::fs::create_dir_all(&dir);
    dir
}
