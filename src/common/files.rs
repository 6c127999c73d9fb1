//! # File Handling Helpers
//!
//! Path checks run before any image is decoded so that a missing input or an
//! occupied output is reported without doing the expensive work first.

use anyhow::{bail, Result};
use log::warn;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Fail unless a file exists at `path`. `role` names the input in the error ("carrier", "payload", ...).
pub fn ensure_exists(path: &Path, role: &str) -> Result<()> {
    if !path.is_file() {
        bail!("{} input '{}' does not exist", role, path.display());
    }
    Ok(())
}

/// Fail if something already exists at `path` and overwriting is not allowed.
pub fn ensure_available(path: &Path, overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        bail!("file '{}' already exists", path.display());
    }
    Ok(())
}

/// Append `.extension` to `path` unless it already ends with it (case-insensitive).
///
/// Unlike [`Path::with_extension`] an existing, different extension is kept:
/// `secret.bin` becomes `secret.bin.png`.
pub fn with_extension(path: &Path, extension: &str) -> PathBuf {
    let extension = extension.trim_start_matches('.');
    if extension.is_empty() {
        return path.to_path_buf();
    }

    let already = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
    if already {
        return path.to_path_buf();
    }

    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

/// Delete a partially written output. Failures are logged, not returned.
pub fn remove_partial(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        warn!("Could not remove partial output '{}': {}", path.display(), e);
    }
}
