//! # Pienkuu Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! Runs external programs and collects their output line by line. The packager
//! uses this to invoke the external linter once per lint-marked file.
//!
//! ## Architecture
//!
//! - `run_capture_lines` spawns the program with `tokio::process::Command`,
//!   waits for it, and returns every non-blank line of stdout followed by every
//!   non-blank line of stderr.
//! - The exit status is logged at DEBUG but never turned into an error; only a
//!   failure to spawn the program is an `Err`.
//!
//! ## Usage
//!
//! ```rust
//! let lines = process::run_capture_lines("glualint", &["addon/lua/init.lua"]).await?;
//! for line in lines {
//!     tracing::warn!("[lint] {}", line);
//! }
//! ```
//!
use crate::core::error::Result;
use anyhow::Context;
use tokio::process::Command;
use tracing::debug;

/// Runs `program` with `args` and returns its non-blank output lines.
///
/// # Errors
///
/// Returns an `Err` only if the process cannot be spawned or waited on.
pub async fn run_capture_lines(program: &str, args: &[&str]) -> Result<Vec<String>> {
    debug!("Running {} {:?}", program, args);
    let output = Command::new(program)
        .args(args)
        .output()
        .await
        .with_context(|| format!("Failed to run '{}'", program))?;
    debug!("'{}' exited with {}", program, output.status);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    Ok(non_blank_lines(&stdout)
        .chain(non_blank_lines(&stderr))
        .map(str::to_string)
        .collect())
}

fn non_blank_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().filter(|line| !line.trim().is_empty())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank_lines() {
        let lines: Vec<&str> = non_blank_lines("a\n\n   \nb\r\n").collect();
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_capture_lines_collects_both_streams() -> Result<()> {
        let lines = run_capture_lines("sh", &["-c", "echo out; echo; echo err 1>&2; exit 3"]).await?;
        assert_eq!(lines, vec!["out".to_string(), "err".to_string()]);
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_program_is_error() {
        let result = run_capture_lines("pienkuu-definitely-not-a-real-linter", &[]).await;
        assert!(result.is_err());
    }
}
