//! # Folder Assembly
//!
//! File: cli/src/commands/pack/assembler.rs
//!
//! ## Overview
//!
//! The recursive core of the packager. Assembling a folder means:
//! 1. Load its `pienkuu.json`.
//! 2. Fully assemble each dependency, in listed order, into the same archive.
//! 3. Stage the folder's own files: enumerate, drop ignored paths, lint and/or
//!    minify the classified ones, and write each into the archive.
//! 4. Run the folder's actions in order.
//!
//! Later writes to an archive path replace earlier ones, so a folder's own
//! files and actions win over anything its dependencies staged at the same path.
//!
//! ## Architecture
//!
//! - There is no caching by folder path. A folder listed by two different
//!   dependents is loaded and assembled twice, once per occurrence.
//! - A folder that appears again on its own dependency chain is rejected with
//!   `PienkuuError::DependencyCycle` instead of recursing forever.
//! - Each step is awaited before the next starts; nothing runs concurrently.
//!   The recursion returns a `BoxFuture` because async functions cannot call
//!   themselves directly.
//!
use super::actions::{self, ActionContext};
use super::filter::PathFilter;
use super::transform::ContentTransformer;
use crate::common::archive::ArchiveSink;
use crate::common::fs::{io, walk};
use crate::common::network::Fetcher;
use crate::core::config::{self, FolderConfig};
use crate::core::error::{PienkuuError, Result};
use anyhow::Context;
use futures_util::future::{BoxFuture, FutureExt};
use tracing::{debug, info, trace};

/// Assembles folders, their dependencies and actions into an `ArchiveSink`.
#[derive(Debug, Clone)]
pub struct FolderAssembler {
    global_ignore: Vec<String>,
    transformer: ContentTransformer,
    fetcher: Fetcher,
}

impl FolderAssembler {
    pub fn new(global_ignore: Vec<String>, transformer: ContentTransformer, fetcher: Fetcher) -> Self {
        Self {
            global_ignore,
            transformer,
            fetcher,
        }
    }

    /// Assembles `folder` and everything it depends on into `archive`.
    pub async fn assemble(&self, folder: &str, archive: &mut ArchiveSink) -> Result<()> {
        self.assemble_folder(walk::normalize_folder(folder), Vec::new(), archive)
            .await
    }

    fn assemble_folder<'a>(
        &'a self,
        folder: String,
        mut chain: Vec<String>,
        archive: &'a mut ArchiveSink,
    ) -> BoxFuture<'a, Result<()>> {
        async move {
            if chain.contains(&folder) {
                chain.push(folder);
                anyhow::bail!(PienkuuError::DependencyCycle {
                    chain: chain.join(" -> "),
                });
            }
            info!("Assembling folder '{}'", folder);
            let config = config::load_folder_config(&folder).await?;
            chain.push(folder.clone());

            for dependency in &config.dependencies {
                let dependency = walk::normalize_folder(dependency);
                debug!("'{}' depends on '{}'", folder, dependency);
                self.assemble_folder(dependency.clone(), chain.clone(), archive)
                    .await
                    .with_context(|| {
                        format!("Failed to assemble dependency '{}' of '{}'", dependency, folder)
                    })?;
            }

            let staged = self.stage_files(&folder, &config, archive).await?;
            debug!("Staged {} files from '{}'", staged, folder);

            let mut ctx = ActionContext {
                folder: &folder,
                config: &config,
                archive,
                fetcher: &self.fetcher,
            };
            actions::run_actions(&mut ctx).await?;
            Ok(())
        }
        .boxed()
    }

    /// Writes the folder's own included files into `archive`. Returns how many were staged.
    async fn stage_files(
        &self,
        folder: &str,
        config: &FolderConfig,
        archive: &mut ArchiveSink,
    ) -> Result<usize> {
        let filter = PathFilter::new(folder, config, &self.global_ignore)?;
        let mut staged = 0;
        for path in walk::list_files(folder)? {
            if !filter.is_included(&path) {
                trace!("Ignoring '{}'", path);
                continue;
            }
            let classification = filter.classify(&path);
            let contents = if classification.needs_text() {
                let text = io::read_file_to_string(&path).await?;
                self.transformer
                    .transform(&path, text, classification)
                    .await
                    .into_bytes()
            } else {
                io::read_file_bytes(&path).await?
            };
            archive.insert(path, contents);
            staged += 1;
        }
        Ok(staged)
    }
}
