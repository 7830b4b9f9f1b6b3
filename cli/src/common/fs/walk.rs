//! # Pienkuu Folder Enumeration
//!
//! File: cli/src/common/fs/walk.rs
//!
//! ## Overview
//!
//! Lists every regular file below a folder, returning archive-style paths
//! (`/`-separated, starting with the folder path in its `normalize_folder`
//! spelling). Directories themselves never become archive entries.
//!
//! Results are sorted so repeated runs stage files in the same order.
//!
use crate::core::error::{PienkuuError, Result};
use std::path::{Component, Path};
use walkdir::WalkDir;

/// Recursively lists all files under `folder` as `/`-separated paths.
///
/// # Errors
///
/// Returns `PienkuuError::FileRead` if the folder or any entry below it cannot be read.
pub fn list_files(folder: &str) -> Result<Vec<String>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(folder).sort_by_file_name() {
        let entry = entry.map_err(|e| PienkuuError::FileRead {
            path: e
                .path()
                .map(to_archive_path)
                .unwrap_or_else(|| folder.to_string()),
            reason: e.to_string(),
        })?;
        if entry.file_type().is_file() {
            files.push(to_archive_path(entry.path()));
        }
    }
    Ok(files)
}

/// Converts a filesystem path into an archive path using `/` separators.
pub fn to_archive_path(path: &Path) -> String {
    let mut out = String::new();
    for component in path.components() {
        match component {
            Component::RootDir => out.push('/'),
            Component::Prefix(prefix) => out.push_str(&prefix.as_os_str().to_string_lossy()),
            other => {
                if !out.is_empty() && !out.ends_with('/') {
                    out.push('/');
                }
                out.push_str(&other.as_os_str().to_string_lossy());
            }
        }
    }
    out
}

/// Joins archive path segments with `/`, skipping empty segments.
pub fn join_archive_path(base: &str, rest: &str) -> String {
    let base = base.trim_end_matches('/');
    let rest = rest.trim_start_matches('/');
    match (base.is_empty(), rest.is_empty()) {
        (true, _) => rest.to_string(),
        (false, true) => base.to_string(),
        (false, false) => format!("{}/{}", base, rest),
    }
}

/// Canonical spelling of a folder argument, matching the paths `list_files` yields.
///
/// Trailing separators, repeated separators and interior `.` segments are
/// dropped (`libs/./shared//` becomes `libs/shared`). `..` is kept as written.
pub fn normalize_folder(folder: &str) -> String {
    to_archive_path(Path::new(folder))
}
