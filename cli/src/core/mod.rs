//! # Pienkuu Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure components shared by the
//! packaging command:
//! - `config`: Loading and parsing of per-folder `pienkuu.json` files
//! - `error`: The `PienkuuError` taxonomy and the `Result` alias
//! - `templating`: Placeholder expansion for action options
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config; // For loading folder configuration
//! use crate::core::error::{PienkuuError, Result}; // For error handling
//! use crate::core::templating; // For `{builddate}` expansion
//! ```
//!
pub mod config;
pub mod error;
pub mod templating;
