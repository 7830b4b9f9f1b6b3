//! # Pienkuu Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the command implementations of the Pienkuu CLI.
//! There is a single command today: packaging a folder tree into a zip.
//!
//! ## Command Groups
//!
//! - `pack`: Folder assembly, filtering, transformation and actions
//!

/// Packages a folder (and its dependencies) into `<folder>.zip`.
pub mod pack;
