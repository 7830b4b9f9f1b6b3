//! # Pienkuu Archive Sink (`common::archive::sink`)
//!
//! File: cli/src/common/archive/sink.rs
//!
//! ## Overview
//!
//! `ArchiveSink` is the in-memory representation of the archive being
//! assembled. It maps archive paths to file contents. Writing to a path that
//! already exists replaces the previous contents (last writer wins).
//!
//! Nothing is encoded until `to_zip_bytes` is called, which happens only once
//! the whole assembly has succeeded.
//!
//! ## Architecture
//!
//! - Entries live in a `BTreeMap`, so the produced zip lists files in sorted
//!   path order regardless of staging order.
//! - Encoding uses the `zip` crate with deflate compression.
//!
use crate::core::error::{PienkuuError, Result};
use std::collections::BTreeMap;
use std::io::{Cursor, Write};
use tracing::{debug, trace};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Accumulates `(path, bytes)` entries for the output archive.
#[derive(Debug, Default, Clone)]
pub struct ArchiveSink {
    entries: BTreeMap<String, Vec<u8>>,
}

impl ArchiveSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `contents` at `path`, replacing any earlier entry at that path.
    pub fn insert(&mut self, path: impl Into<String>, contents: impl Into<Vec<u8>>) {
        let path = path.into();
        let contents = contents.into();
        trace!("Staging '{}' ({} bytes)", path, contents.len());
        if self.entries.insert(path.clone(), contents).is_some() {
            debug!("Overwrote existing archive entry '{}'", path);
        }
    }

    #[allow(dead_code)] // Inspection helper, used by tests.
    pub fn get(&self, path: &str) -> Option<&[u8]> {
        self.entries.get(path).map(Vec::as_slice)
    }

    #[allow(dead_code)] // Inspection helper, used by tests.
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Archive paths in sorted order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Encodes every entry as a deflate-compressed zip archive.
    ///
    /// # Errors
    ///
    /// Returns `PienkuuError::Archive` if the zip writer rejects an entry.
    pub fn to_zip_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for (path, contents) in &self.entries {
            writer
                .start_file(path.as_str(), options)
                .map_err(|e| PienkuuError::Archive(format!("Failed to add '{}': {}", path, e)))?;
            writer
                .write_all(contents)
                .map_err(|e| PienkuuError::Archive(format!("Failed to write '{}': {}", path, e)))?;
        }

        let cursor = writer
            .finish()
            .map_err(|e| PienkuuError::Archive(format!("Failed to finish archive: {}", e)))?;
        Ok(cursor.into_inner())
    }
}
