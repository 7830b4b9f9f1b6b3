//! # Pienkuu Template Expansion
//!
//! File: cli/src/core/templating.rs
//!
//! ## Overview
//!
//! Action options such as `target` and `content` may contain placeholders that
//! are expanded right before the action runs. Only the placeholders listed in
//! this module are recognized; anything else in braces passes through untouched.
//!
//! | Placeholder   | Expands to                                         |
//! |---------------|----------------------------------------------------|
//! | `{builddate}` | Current local date as `YYYY-M-D` (no zero padding) |
//!
//! ## Examples
//!
//! ```rust
//! let text = templating::expand("v{builddate} {other}");
//! // "v2024-3-7 {other}"
//! ```
//!
use chrono::{Datelike, Local, NaiveDate};

/// Placeholder replaced by the current build date.
pub const BUILD_DATE_PLACEHOLDER: &str = "{builddate}";

/// Expands recognized placeholders in `input` using today's local date.
pub fn expand(input: &str) -> String {
    expand_with_date(input, Local::now().date_naive())
}

/// Expands recognized placeholders in `input` using the given `date`.
pub fn expand_with_date(input: &str, date: NaiveDate) -> String {
    input.replace(BUILD_DATE_PLACEHOLDER, &format_build_date(date))
}

/// Formats a date as `YYYY-M-D`, e.g. `2024-3-7`.
pub fn format_build_date(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.year(), date.month(), date.day())
}
