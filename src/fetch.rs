// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index acquisition: one fetch per page load, no retries.
//!
//! The engine sees only [`IndexFetcher`]; where the bytes come from is the
//! host's business. [`HttpFetcher`] serves the CLI against a deployed site,
//! [`DirFetcher`] reads a local build output, [`StaticFetcher`] holds an
//! in-memory payload for tests and embedding. The browser host fetches
//! through the page's own `fetch` and hands parsed documents straight to the
//! engine.

use std::collections::HashSet;
use std::path::PathBuf;

use tracing::warn;

use crate::error::LecternError;
use crate::types::IndexedDoc;

#[cfg(feature = "http")]
use std::time::{SystemTime, UNIX_EPOCH};
#[cfg(feature = "http")]
use tracing::debug;

#[cfg(feature = "http")]
use crate::siteroot::SiteRoot;

/// File name of the index resource, relative to the site root.
pub const INDEX_FILENAME: &str = "search-index.json";

/// Where index bytes come from.
pub trait IndexFetcher {
    /// Produce the raw index payload.
    fn fetch(&self) -> Result<Vec<u8>, LecternError>;

    /// Human-readable source label for diagnostics.
    fn describe(&self) -> String;
}

/// Cache-defeating query value: milliseconds since the Unix epoch.
///
/// Appended as `?v=` so a freshly deployed index is never read out of a
/// stale HTTP cache.
#[cfg(feature = "http")]
pub fn cache_bust() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}

/// Fetches the index over HTTP from a deployed site.
#[cfg(feature = "http")]
pub struct HttpFetcher {
    site: SiteRoot,
    client: reqwest::blocking::Client,
}

#[cfg(feature = "http")]
impl HttpFetcher {
    pub fn new(site: SiteRoot) -> Self {
        Self {
            site,
            client: reqwest::blocking::Client::new(),
        }
    }
}

#[cfg(feature = "http")]
impl IndexFetcher for HttpFetcher {
    fn fetch(&self) -> Result<Vec<u8>, LecternError> {
        let url = self.site.index_url(cache_bust());
        debug!(%url, "fetching search index");
        let response = self.client.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(LecternError::Status(status.as_u16()));
        }
        Ok(response.bytes()?.to_vec())
    }

    fn describe(&self) -> String {
        format!("{}/{}", self.site.as_str(), INDEX_FILENAME)
    }
}

/// Reads the index from a built site checked out on disk.
pub struct DirFetcher {
    root: PathBuf,
}

impl DirFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl IndexFetcher for DirFetcher {
    fn fetch(&self) -> Result<Vec<u8>, LecternError> {
        Ok(std::fs::read(self.root.join(INDEX_FILENAME))?)
    }

    fn describe(&self) -> String {
        self.root.join(INDEX_FILENAME).display().to_string()
    }
}

/// Serves a payload already in memory.
pub struct StaticFetcher {
    payload: Vec<u8>,
}

impl StaticFetcher {
    pub fn new(payload: impl Into<Vec<u8>>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

impl IndexFetcher for StaticFetcher {
    fn fetch(&self) -> Result<Vec<u8>, LecternError> {
        Ok(self.payload.clone())
    }

    fn describe(&self) -> String {
        "in-memory payload".to_string()
    }
}

/// Parse and validate a fetched payload.
///
/// The url is the document identifier, so duplicates keep the first
/// occurrence and drop the rest with a warning. Everything else malformed
/// fails the whole load: a partial index would silently miss pages.
pub fn parse_index(bytes: &[u8]) -> Result<Vec<IndexedDoc>, LecternError> {
    let docs: Vec<IndexedDoc> = serde_json::from_slice(bytes)?;
    let mut seen = HashSet::new();
    let docs = docs
        .into_iter()
        .filter(|doc| {
            let fresh = seen.insert(doc.url.clone());
            if !fresh {
                warn!(url = %doc.url, "duplicate document url in index, keeping first");
            }
            fresh
        })
        .collect();
    Ok(docs)
}
