//! Common-password list management
//!
//! The built-in list is always active. It can be extended once at startup
//! from a newline-separated file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use thiserror::Error;

/// Passwords rejected out of the box.
pub const BUILTIN_COMMON_PASSWORDS: [&str; 7] = [
    "password", "123456", "qwerty", "admin", "letmein", "abc123", "iloveyou",
];

const DEFAULT_BLACKLIST_PATH: &str = "./assets/common-passwords.txt";

/// Loaded list, merged with the built-in one. `None` until initialized.
static COMMON_PASSWORDS: RwLock<Option<HashSet<String>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// Returns the blacklist file path.
///
/// Priority:
/// 1. Environment variable `PWD_BLACKLIST_PATH`
/// 2. Default path `./assets/common-passwords.txt`
pub fn get_blacklist_path() -> PathBuf {
    std::env::var("PWD_BLACKLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_BLACKLIST_PATH))
}

fn builtin_set() -> HashSet<String> {
    BUILTIN_COMMON_PASSWORDS
        .iter()
        .map(|p| p.to_string())
        .collect()
}

/// Extends the common-password list from the file at [`get_blacklist_path`].
///
/// Calling this is optional: the built-in list applies either way.
///
/// # Errors
///
/// Returns error if the file does not exist, cannot be read, or is empty.
pub fn init_blacklist() -> Result<usize, BlacklistError> {
    let path = get_blacklist_path();
    init_blacklist_from_path(&path)
}

/// Extends the common-password list from a specific file path.
///
/// Entries are trimmed and lowercased; blank lines are skipped. Once a list
/// has been loaded, later calls return the current size without reading.
///
/// # Returns
///
/// The number of distinct entries in the active list, built-ins included.
pub fn init_blacklist_from_path<P: AsRef<Path>>(path: P) -> Result<usize, BlacklistError> {
    {
        let guard = COMMON_PASSWORDS
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(set) = guard.as_ref() {
            return Ok(set.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Blacklist initialization FAILED: file not found {:?}", path);
        return Err(BlacklistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Blacklist initialization FAILED: empty file {:?}", path);
        return Err(BlacklistError::EmptyFile);
    }

    let mut set = builtin_set();
    set.extend(
        content
            .lines()
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty()),
    );

    let count = set.len();
    {
        let mut guard = COMMON_PASSWORDS
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        // Another caller may have won the race; keep the first list.
        if let Some(existing) = guard.as_ref() {
            return Ok(existing.len());
        }
        *guard = Some(set);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Blacklist initialized: {} passwords from {:?}", count, path);

    Ok(count)
}

/// Returns a snapshot of the active list.
pub fn get_blacklist() -> HashSet<String> {
    let guard = COMMON_PASSWORDS
        .read()
        .unwrap_or_else(PoisonError::into_inner);
    guard.clone().unwrap_or_else(builtin_set)
}

/// Checks if a password is on the common-password list (case-insensitive).
pub fn is_blacklisted(password: &str) -> bool {
    let lowered = password.to_lowercase();
    let guard = COMMON_PASSWORDS
        .read()
        .unwrap_or_else(PoisonError::into_inner);
    match guard.as_ref() {
        Some(set) => set.contains(&lowered),
        None => BUILTIN_COMMON_PASSWORDS.contains(&lowered.as_str()),
    }
}

/// Drops any loaded list, leaving only the built-ins.
#[cfg(test)]
pub fn reset_blacklist_for_testing() {
    let mut guard = COMMON_PASSWORDS
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = None;
}
