//! # Pienkuu Folder Configuration
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! Every folder that takes part in a packaging run carries a `pienkuu.json`
//! file. This module defines its data model (`FolderConfig`) and the loader
//! that reads and parses it.
//!
//! ## Architecture
//!
//! - All fields are optional; absent lists default to empty.
//! - `actions` entries are either `["name", { ...options }]` or a bare
//!   `"name"`. Options stay raw JSON (`ActionSpec`) until the action runs, so
//!   an unrecognized action name only fails the run once it is reached.
//! - A file that cannot be read raises `PienkuuError::ConfigMissing`; a file
//!   that is not valid JSON raises `PienkuuError::ConfigMalformed`. Both are
//!   fatal to the whole run.
//!
//! ## Examples
//!
//! ```json
//! {
//!     "dependencies": ["libs/shared"],
//!     "ignore": ["docs/**"],
//!     "lint": ["lua/**/*.lua"],
//!     "minify": ["html/*.js"],
//!     "actions": [
//!         ["print", { "text": "packing" }],
//!         ["create-file", { "target": "VERSION", "content": "{builddate}" }]
//!     ]
//! }
//! ```
//!
//! ```rust
//! let config = config::load_folder_config("addon").await?;
//! for dep in &config.dependencies { /* ... */ }
//! ```
//!
use crate::core::error::{PienkuuError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Fixed name of the configuration file inside every folder.
pub const CONFIG_FILENAME: &str = "pienkuu.json";

/// Parsed contents of one folder's `pienkuu.json`. Immutable once loaded.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct FolderConfig {
    /// Folders assembled, in order, before this folder's own files.
    pub dependencies: Vec<String>,
    /// Folder-relative glob patterns excluded from staging.
    pub ignore: Vec<String>,
    /// Folder-relative glob patterns passed to the external linter.
    pub lint: Vec<String>,
    /// Folder-relative glob patterns whose content is minified.
    pub minify: Vec<String>,
    /// Post-processing steps run after this folder's files are staged.
    pub actions: Vec<ActionSpec>,
}

/// One entry of the `actions` list: a name plus its raw, unvalidated options.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(from = "RawActionSpec")]
pub struct ActionSpec {
    pub name: String,
    pub options: Value,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawActionSpec {
    WithOptions(String, Value),
    Bare(String),
}

impl From<RawActionSpec> for ActionSpec {
    fn from(raw: RawActionSpec) -> Self {
        match raw {
            RawActionSpec::WithOptions(name, options) => ActionSpec { name, options },
            RawActionSpec::Bare(name) => ActionSpec {
                name,
                options: Value::Null,
            },
        }
    }
}

/// Path of the configuration file belonging to `folder`.
pub fn config_path(folder: &str) -> String {
    format!("{}/{}", folder, CONFIG_FILENAME)
}

/// Reads and parses the configuration file of `folder`.
///
/// # Errors
///
/// - `PienkuuError::ConfigMissing` if the file cannot be read.
/// - `PienkuuError::ConfigMalformed` if it is not valid JSON for `FolderConfig`.
pub async fn load_folder_config(folder: &str) -> Result<FolderConfig> {
    let path = config_path(folder);
    let content = tokio::fs::read_to_string(Path::new(&path))
        .await
        .map_err(|e| PienkuuError::ConfigMissing {
            path: path.clone(),
            reason: e.to_string(),
        })?;
    let config = parse_folder_config(&path, &content)?;
    debug!("Loaded configuration from {}: {:?}", path, config);
    Ok(config)
}

/// Parses configuration text. `path` is only used for error reporting.
pub fn parse_folder_config(path: &str, content: &str) -> Result<FolderConfig> {
    // Valid JSON that is not an object (`null`, arrays, numbers) is rejected too.
    let value: Value =
        serde_json::from_str(content).map_err(|e| PienkuuError::ConfigMalformed {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
    if !value.is_object() {
        anyhow::bail!(PienkuuError::ConfigMalformed {
            path: path.to_string(),
            reason: "top-level value must be an object".to_string(),
        });
    }
    let config = serde_json::from_value(value).map_err(|e| PienkuuError::ConfigMalformed {
        path: path.to_string(),
        reason: e.to_string(),
    })?;
    Ok(config)
}
