//! # Path Filtering
//!
//! File: cli/src/commands/pack/filter.rs
//!
//! ## Overview
//!
//! Decides which discovered files of a folder are staged, and which staged
//! files are linted and/or minified.
//!
//! ## Architecture
//!
//! - Every folder-relative pattern from `ignore`, `lint` and `minify` is rooted
//!   at the declaring folder (`lua/*.lua` in folder `addon` becomes
//!   `addon/lua/*.lua`) before it is matched against discovered paths.
//!   The folder prefix is normalised like discovered paths and glob-escaped,
//!   so a folder named `addon [v2]` or `addon{old` is matched literally.
//! - The global ignore set is added to each folder's own ignore patterns. It is
//!   passed in explicitly rather than read from process-wide state.
//! - Matching follows shell-glob rules: `*` stays within one path segment,
//!   `**` spans segments, and dot-files are matched like any other name.
//! - A path is excluded as soon as it matches any ignore pattern.
//!
use crate::common::fs::walk::{join_archive_path, normalize_folder};
use crate::core::config::{FolderConfig, CONFIG_FILENAME};
use crate::core::error::{PienkuuError, Result};
use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};

/// Patterns excluded from every folder: version-control metadata and the
/// folder configuration file itself, at any depth.
pub fn global_ignore_patterns() -> Vec<String> {
    vec!["**/.git/**".to_string(), format!("**/{}", CONFIG_FILENAME)]
}

/// Which transformations apply to a staged file. A file may need both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classification {
    pub lint: bool,
    pub minify: bool,
}

impl Classification {
    /// True if the file must be decoded as text before staging.
    pub fn needs_text(&self) -> bool {
        self.lint || self.minify
    }
}

/// Compiled, folder-rooted filters for a single folder.
#[derive(Debug, Clone)]
pub struct PathFilter {
    ignore: GlobSet,
    lint: GlobSet,
    minify: GlobSet,
}

impl PathFilter {
    /// Builds the filter for `folder` from its configuration and the global ignore set.
    ///
    /// # Errors
    ///
    /// Returns `PienkuuError::InvalidPattern` if any pattern fails to compile.
    pub fn new(folder: &str, config: &FolderConfig, global_ignore: &[String]) -> Result<Self> {
        let folder_ignore = root_patterns(folder, &config.ignore);
        let ignore: Vec<String> = global_ignore.iter().cloned().chain(folder_ignore).collect();
        Ok(Self {
            ignore: build_set(&ignore)?,
            lint: build_set(&root_patterns(folder, &config.lint))?,
            minify: build_set(&root_patterns(folder, &config.minify))?,
        })
    }

    /// True unless `path` matches any ignore pattern.
    pub fn is_included(&self, path: &str) -> bool {
        !self.ignore.is_match(path)
    }

    /// Classifies `path` against the lint and minify patterns. Pure.
    pub fn classify(&self, path: &str) -> Classification {
        Classification {
            lint: self.lint.is_match(path),
            minify: self.minify.is_match(path),
        }
    }
}

/// Rewrites folder-relative patterns so they are rooted at `folder`.
///
/// Only the folder prefix is escaped; the patterns keep their glob syntax.
pub fn root_patterns(folder: &str, patterns: &[String]) -> Vec<String> {
    let prefix = globset::escape(&normalize_folder(folder));
    patterns
        .iter()
        .map(|pattern| join_archive_path(&prefix, pattern))
        .collect()
}

fn build_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(compile(pattern)?);
    }
    builder.build().map_err(|e| {
        anyhow::anyhow!(PienkuuError::InvalidPattern {
            pattern: patterns.join(", "),
            reason: e.to_string(),
        })
    })
}

fn compile(pattern: &str) -> Result<Glob> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .backslash_escape(true)
        .build()
        .map_err(|e| {
            anyhow::anyhow!(PienkuuError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })
        })
}
