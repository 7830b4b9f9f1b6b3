//! # Pienkuu Pack Command
//!
//! File: cli/src/commands/pack/mod.rs
//!
//! ## Overview
//!
//! Entry point of a packaging run. Given a root folder, it assembles the folder
//! and its dependency tree into an in-memory archive and, only if the whole
//! assembly succeeds, writes `<folder name>.zip` to the current directory.
//!
//! ## Architecture
//!
//! The run is built from the submodules of this group:
//! - `filter`: `PathFilter`, folder-rooted ignore / lint / minify matching
//! - `transform`: `ContentTransformer`, lint via external process and minify
//! - `actions`: `Action`, the post-staging action interpreter
//! - `assembler`: `FolderAssembler`, the recursive dependency walk
//!
//! Processing flow:
//! 1. Remove any previous output archive of the same name
//! 2. Assemble the root folder into a fresh `ArchiveSink`
//! 3. Encode the sink as zip and write it out
//!
//! Any error aborts before step 3, so a failed run leaves no archive behind.
//!
//! ## Examples
//!
//! ```bash
//! # Package ./my_addon into ./my_addon.zip
//! pienkuu my_addon
//!
//! # Same, with info-level logs and a different linter
//! pienkuu -v --linter luacheck my_addon
//! ```
//!
use crate::common::archive::ArchiveSink;
use crate::common::fs::{io, walk};
use crate::common::network::Fetcher;
use crate::core::error::Result;
use anyhow::Context;
use clap::Args;
use std::path::{Path, PathBuf};
use tracing::{info, trace, warn};

pub mod actions;
pub mod assembler;
pub mod filter;
pub mod transform;

use assembler::FolderAssembler;
use transform::ContentTransformer;

/// Extension appended to the root folder name to form the output file name.
pub const ARCHIVE_EXTENSION: &str = "zip";

/// Arguments for a packaging run.
#[derive(Args, Debug)]
pub struct PackArgs {
    /// Folder to package. Its name (plus `.zip`) becomes the output file name.
    pub folder: String,

    /// External linter run once per lint-marked file.
    #[arg(long, env = "PIENKUU_LINTER", default_value = "glualint")]
    pub linter: String,

    /// Skip the external linter entirely.
    #[arg(long)]
    pub no_lint: bool,
}

/// Main handler for a packaging run.
pub async fn handle_pack(args: PackArgs) -> Result<()> {
    let folder = walk::normalize_folder(&args.folder);
    let output = output_path(&folder)?;

    // Never leave a stale archive behind if this run fails.
    io::remove_file_if_exists(&output).await?;

    let linter = if args.no_lint { None } else { Some(args.linter) };
    let assembler = FolderAssembler::new(
        filter::global_ignore_patterns(),
        ContentTransformer::new(linter),
        Fetcher::new()?,
    );

    let mut archive = ArchiveSink::new();
    assembler
        .assemble(&folder, &mut archive)
        .await
        .with_context(|| format!("Failed to package '{}'", folder))?;

    if archive.is_empty() {
        warn!("Nothing was staged for '{}', writing an empty archive", folder);
    }
    for path in archive.paths() {
        trace!("Archive entry: {}", path);
    }

    let bytes = archive.to_zip_bytes()?;
    io::write_file_bytes(&output, &bytes).await?;
    info!(
        "Packaged {} entries from '{}' ({} bytes)",
        archive.len(),
        folder,
        bytes.len()
    );
    println!("Wrote {}", output.display());
    Ok(())
}

/// Output file for `folder`: its last path component plus `.zip`, in the current directory.
///
/// Folders spelled without a final name (`.`, `..`, `addon/..`) are resolved on
/// disk first, so `pienkuu .` is named after the current directory.
pub fn output_path(folder: &str) -> Result<PathBuf> {
    let path = Path::new(folder);
    let resolved;
    let named = if path.file_name().is_some() {
        path
    } else {
        resolved = std::fs::canonicalize(path)
            .with_context(|| format!("Cannot resolve folder '{}'", folder))?;
        resolved.as_path()
    };
    let name = named
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .with_context(|| format!("Cannot derive an archive name from folder '{}'", folder))?;
    Ok(PathBuf::from(format!("{}.{}", name, ARCHIVE_EXTENSION)))
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_uses_folder_name() {
        assert_eq!(output_path("my_addon").unwrap(), PathBuf::from("my_addon.zip"));
        assert_eq!(
            output_path("addons/my_addon").unwrap(),
            PathBuf::from("my_addon.zip")
        );
    }

    #[test]
    fn test_output_path_resolves_dot_folders() -> Result<()> {
        let cwd = std::env::current_dir()?;
        let cwd_name = cwd.file_name().unwrap().to_string_lossy().to_string();
        assert_eq!(output_path(".")?, PathBuf::from(format!("{}.zip", cwd_name)));

        let parent = std::fs::canonicalize("..")?;
        let parent_name = parent.file_name().unwrap().to_string_lossy().to_string();
        assert_eq!(output_path("..")?, PathBuf::from(format!("{}.zip", parent_name)));
        Ok(())
    }

    #[test]
    fn test_output_path_rejects_filesystem_root() {
        assert!(output_path("/").is_err());
    }
}
