//! # Pienkuu Network Utilities Module (`common::network`)
//!
//! File: cli/src/common/network/mod.rs
//!
//! ## Overview
//!
//! Retrieval of remote resources for the `download` action. A `Fetcher` wraps a
//! single `reqwest::Client` that is reused for the whole run.
//!
//! ## Architecture
//!
//! - Redirects are followed up to `MAX_REDIRECTS` hops.
//! - There is no request timeout and no retry. Any transport error or non-2xx
//!   status is reported as `PienkuuError::Network` and aborts the run.
//! - `filename_from_url` derives the name used when a `download` target is a
//!   directory (ends with `/`).
//!
//! ## Usage
//!
//! ```rust
//! let fetcher = Fetcher::new()?;
//! let bytes = fetcher.fetch("https://example.com/lib.lua").await?;
//! ```
//!
use crate::core::error::{PienkuuError, Result};
use anyhow::Context;
use reqwest::redirect::Policy;
use tracing::{debug, info};

/// Maximum number of redirects followed for a single fetch.
pub const MAX_REDIRECTS: usize = 10;

/// HTTP client used by `download` actions.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(Policy::limited(MAX_REDIRECTS))
            .user_agent(concat!("pienkuu/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }

    /// Fetches `url` and returns the response body.
    ///
    /// # Errors
    ///
    /// Returns `PienkuuError::Network` on transport failure or a non-success status.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        info!("Fetching {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| network_error(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(network_error(url, format!("HTTP {}", status)));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| network_error(url, e.to_string()))?;
        debug!("Fetched {} bytes from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }
}

/// Returns the last path segment of `url`, without query string or fragment.
///
/// Falls back to `download` when the URL has no usable file name.
pub fn filename_from_url(url: &str) -> String {
    let without_fragment = url.split('#').next().unwrap_or(url);
    let without_query = without_fragment
        .split('?')
        .next()
        .unwrap_or(without_fragment);
    // Skip past the scheme so a bare host is not mistaken for a file name.
    let path = match without_query.find("://") {
        Some(idx) => {
            let after_scheme = &without_query[idx + 3..];
            match after_scheme.find('/') {
                Some(slash) => &after_scheme[slash..],
                None => "",
            }
        }
        None => without_query,
    };
    match path.rsplit('/').next() {
        Some(name) if !name.is_empty() && name != "." && name != ".." => name.to_string(),
        _ => "download".to_string(),
    }
}

fn network_error(url: &str, reason: String) -> anyhow::Error {
    anyhow::anyhow!(PienkuuError::Network {
        url: url.to_string(),
        reason,
    })
}
