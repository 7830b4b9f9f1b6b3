//! # Pienkuu Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared utilities used by the packaging command. They deal with the
//! collaborators at the edge of an assembly run: the output archive, the
//! filesystem, the network and external processes.
//!
//! - **`archive`**: `ArchiveSink` and zip serialization.
//! - **`fs`**: File enumeration, reads, and archive path helpers.
//! - **`network`**: HTTP fetching for the `download` action.
//! - **`process`**: Running the external linter and capturing its output.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::{archive::ArchiveSink, fs, network::Fetcher};
//! ```
//!

/// The in-memory output archive and its zip encoding.
pub mod archive;
/// Filesystem reads and folder enumeration.
pub mod fs;
/// HTTP fetching for `download` actions.
pub mod network;
/// External process execution with captured output.
pub mod process;
