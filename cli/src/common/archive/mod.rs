//! # Pienkuu Archive Utilities Module (`common::archive`)
//!
//! File: cli/src/common/archive/mod.rs
//!
//! ## Overview
//!
//! This module holds the output side of a packaging run: the `ArchiveSink`
//! that every folder and action writes into, and its zip encoding.
//!
//! - **`sink`**: `ArchiveSink`, an ordered path-to-bytes map with last-writer-wins
//!   semantics, plus serialization to a deflate-compressed zip.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::archive::ArchiveSink;
//!
//! let mut sink = ArchiveSink::new();
//! sink.insert("addon/lua/init.lua", b"print('hi')".to_vec());
//! let bytes = sink.to_zip_bytes()?;
//! ```
//!

pub mod sink;

pub use sink::ArchiveSink;
