//! # Pienkuu CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`: locating the
//! compiled `pienkuu` binary and laying out folder trees in a scratch directory.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::Path;

/// Returns an `assert_cmd::Command` for the compiled `pienkuu` binary.
///
/// Linting is disabled through the environment so tests never depend on an
/// installed linter.
pub fn pienkuu_cmd() -> Command {
    let mut cmd = Command::cargo_bin("pienkuu").expect("Failed to find pienkuu binary for testing");
    cmd.env_remove("RUST_LOG");
    cmd.env("PIENKUU_LINTER", "pienkuu-test-no-linter");
    cmd
}

/// Writes `content` to `root/rel`, creating parent directories.
pub fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Reads every entry of a zip archive into `(name, contents)` pairs.
pub fn read_zip(path: &Path) -> Vec<(String, Vec<u8>)> {
    use std::io::Read;
    let file = fs::File::open(path).expect("archive should exist");
    let mut archive = zip::ZipArchive::new(file).expect("archive should be a valid zip");
    let mut entries = Vec::new();
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).unwrap();
        let mut contents = Vec::new();
        entry.read_to_end(&mut contents).unwrap();
        entries.push((entry.name().to_string(), contents));
    }
    entries
}
