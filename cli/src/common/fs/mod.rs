//! # Pienkuu Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! This module groups the filesystem helpers used while assembling an archive.
//!
//! - **`io`**: Async file reads that map failures to `PienkuuError::FileRead`,
//!   plus writing and removing the output archive.
//! - **`walk`**: Recursive file enumeration and archive path helpers
//!   (`to_archive_path`, `join_archive_path`, `normalize_folder`).
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::{io, walk};
//!
//! # async fn run_example() -> crate::core::error::Result<()> {
//! for path in walk::list_files("addon")? {
//!     let bytes = io::read_file_bytes(&path).await?;
//! }
//! # Ok(())
//! # }
//! ```
//!

/// Async file reads and output writes.
pub mod io;
/// Folder enumeration and archive path helpers.
pub mod walk;
