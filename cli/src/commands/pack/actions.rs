//! # Folder Actions
//!
//! File: cli/src/commands/pack/actions.rs
//!
//! ## Overview
//!
//! Post-processing steps listed in a folder's `actions`. They run after the
//! folder's own files are staged, one at a time, in declared order, and may
//! add entries to the archive relative to the current folder.
//!
//! | Name          | Options                                         | Effect                                             |
//! |---------------|-------------------------------------------------|----------------------------------------------------|
//! | `print`       | `text`                                          | Prints `<folder>: <text>` to stdout                |
//! | `download`    | `url`, `target`                                 | Fetches `url` into `<folder>/<target>`             |
//! | `create-file` | `target`, `content?`                            | Writes `content` (default empty) to `<folder>/<target>` |
//! | `copy`        | `from`, `to`, `recursive?`, `toRoot?`           | Copies files from `<folder>/<from>` into the archive |
//!
//! `target` and `content` go through template expansion (`{builddate}`).
//! A `download` target ending in `/` gets the URL's file name appended.
//! A single-file `copy` with an empty `to` keeps the source's file name.
//!
//! ## Architecture
//!
//! Configuration keeps each action as a raw `ActionSpec`. `Action::parse` turns
//! it into a typed variant just before it runs, so an unknown name fails the run
//! only after every earlier action has completed.
//!
use crate::common::archive::ArchiveSink;
use crate::common::fs::{io, walk};
use crate::common::network::{self, Fetcher};
use crate::core::config::{ActionSpec, FolderConfig};
use crate::core::error::{PienkuuError, Result};
use crate::core::templating;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info};

/// Mutable state an action runs against.
pub struct ActionContext<'a> {
    /// Folder whose action list is running.
    pub folder: &'a str,
    /// That folder's configuration.
    pub config: &'a FolderConfig,
    /// The archive being assembled.
    pub archive: &'a mut ArchiveSink,
    pub fetcher: &'a Fetcher,
}

/// A recognized action with its validated options.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Print(PrintOptions),
    Download(DownloadOptions),
    CreateFile(CreateFileOptions),
    Copy(CopyOptions),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PrintOptions {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DownloadOptions {
    pub url: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateFileOptions {
    pub target: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyOptions {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub recursive: bool,
    #[serde(default)]
    pub to_root: bool,
}

impl Action {
    /// Resolves `spec` into a typed action.
    ///
    /// # Errors
    ///
    /// - `PienkuuError::UnknownAction` if the name has no handler.
    /// - `PienkuuError::InvalidActionOptions` if the options do not fit the action.
    pub fn parse(folder: &str, spec: &ActionSpec) -> Result<Self> {
        let action = match spec.name.as_str() {
            "print" => Action::Print(options(folder, spec)?),
            "download" => Action::Download(options(folder, spec)?),
            "create-file" => Action::CreateFile(options(folder, spec)?),
            "copy" => Action::Copy(options(folder, spec)?),
            _ => anyhow::bail!(PienkuuError::UnknownAction {
                folder: folder.to_string(),
                name: spec.name.clone(),
            }),
        };
        Ok(action)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::Print(_) => "print",
            Action::Download(_) => "download",
            Action::CreateFile(_) => "create-file",
            Action::Copy(_) => "copy",
        }
    }

    /// Runs the action against `ctx`.
    pub async fn apply(&self, ctx: &mut ActionContext<'_>) -> Result<()> {
        match self {
            Action::Print(opts) => {
                println!("{}: {}", ctx.folder, opts.text);
                Ok(())
            }
            Action::Download(opts) => download(opts, ctx).await,
            Action::CreateFile(opts) => {
                let target = walk::join_archive_path(ctx.folder, &templating::expand(&opts.target));
                let content = templating::expand(&opts.content);
                info!("Creating '{}' ({} bytes)", target, content.len());
                ctx.archive.insert(target, content);
                Ok(())
            }
            Action::Copy(opts) => copy(opts, ctx).await,
        }
    }
}

/// Runs every action of the current folder in order, stopping at the first failure.
pub async fn run_actions(ctx: &mut ActionContext<'_>) -> Result<()> {
    let config = ctx.config;
    for spec in &config.actions {
        let action = Action::parse(ctx.folder, spec)?;
        debug!("Running action '{}' for {}", action.name(), ctx.folder);
        action.apply(ctx).await.map_err(|e| {
            e.context(format!(
                "Action '{}' failed in folder '{}'",
                action.name(),
                ctx.folder
            ))
        })?;
    }
    Ok(())
}

fn options<T: DeserializeOwned>(folder: &str, spec: &ActionSpec) -> Result<T> {
    // A bare action name carries no options; treat it as an empty object.
    let value = match &spec.options {
        Value::Null => Value::Object(Default::default()),
        other => other.clone(),
    };
    serde_json::from_value(value).map_err(|e| {
        anyhow::anyhow!(PienkuuError::InvalidActionOptions {
            folder: folder.to_string(),
            name: spec.name.clone(),
            reason: e.to_string(),
        })
    })
}

async fn download(opts: &DownloadOptions, ctx: &mut ActionContext<'_>) -> Result<()> {
    let mut target = templating::expand(&opts.target);
    if target.ends_with('/') || target.ends_with('\\') {
        target.push_str(&network::filename_from_url(&opts.url));
    }
    let bytes = ctx.fetcher.fetch(&opts.url).await?;
    let path = walk::join_archive_path(ctx.folder, &target);
    info!("Downloaded '{}' to '{}' ({} bytes)", opts.url, path, bytes.len());
    ctx.archive.insert(path, bytes);
    Ok(())
}

async fn copy(opts: &CopyOptions, ctx: &mut ActionContext<'_>) -> Result<()> {
    let source = walk::join_archive_path(ctx.folder, &opts.from);
    let to = if !opts.recursive && opts.to.trim_matches('/').is_empty() {
        // A single file copied to an empty `to` keeps its own name.
        match Path::new(&opts.from).file_name() {
            Some(name) => name.to_string_lossy().to_string(),
            None => anyhow::bail!(PienkuuError::InvalidActionOptions {
                folder: ctx.folder.to_string(),
                name: "copy".to_string(),
                reason: format!("cannot derive a destination name from '{}'", opts.from),
            }),
        }
    } else {
        opts.to.clone()
    };
    let destination = if opts.to_root {
        to
    } else {
        walk::join_archive_path(ctx.folder, &to)
    };

    if !opts.recursive {
        let text = io::read_file_to_string(&source).await?;
        info!("Copying '{}' to '{}'", source, destination);
        ctx.archive.insert(destination, text);
        return Ok(());
    }

    let mut copied = 0usize;
    for file in walk::list_files(&source)? {
        let relative = Path::new(&file)
            .strip_prefix(&source)
            .map(walk::to_archive_path)
            .unwrap_or_else(|_| file.clone());
        let bytes = io::read_file_bytes(&file).await?;
        ctx.archive
            .insert(walk::join_archive_path(&destination, &relative), bytes);
        copied += 1;
    }
    info!(
        "Copied {} files from '{}' to '{}'",
        copied,
        source,
        if destination.is_empty() {
            "<root>"
        } else {
            destination.as_str()
        }
    );
    Ok(())
}
