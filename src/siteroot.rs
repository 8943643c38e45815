// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where is the site mounted?
//!
//! A documentation site may live at the domain root or under a sub-path
//! (`https://example.com/docs/`). Every URL the widget builds, the index
//! fetch and each result's navigation target, has to be relative to that
//! mount point. [`SiteRoot::resolve`] derives it from the page itself, so
//! the same widget bundle works on both layouts without configuration.

use std::fmt;

/// Script `src` suffix the resolver scans for.
///
/// The widget bundle ships at a fixed path under the site root; whatever
/// precedes it in the script's `src` is the root.
pub const DEFAULT_ASSET_SUFFIX: &str = "/lectern/lectern.js";

/// Base path the site is mounted under, without a trailing slash.
///
/// The empty string means the domain root; joining is always
/// `{root}/{relative}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteRoot(String);

impl SiteRoot {
    /// Wrap a base path, stripping any trailing slashes.
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self(base)
    }

    /// Derive the root from the page's script elements, falling back to the
    /// document location.
    ///
    /// The first script whose `src` contains `asset_suffix` pins the root:
    /// everything before the suffix. When no script matches (inlined or
    /// renamed bundle), the location with its last `/`-segment stripped is
    /// the best remaining guess.
    pub fn resolve<'a>(
        script_srcs: impl IntoIterator<Item = &'a str>,
        location: &str,
        asset_suffix: &str,
    ) -> Self {
        for src in script_srcs {
            if let Some(pos) = src.find(asset_suffix) {
                return Self::new(&src[..pos]);
            }
        }
        match location.rfind('/') {
            Some(pos) => Self::new(&location[..pos]),
            None => Self::new(""),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// URL of the index resource, with the cache-defeating parameter.
    pub fn index_url(&self, cache_bust: u64) -> String {
        format!("{}/{}?v={}", self.0, crate::fetch::INDEX_FILENAME, cache_bust)
    }

    /// Navigation target for a document.
    ///
    /// One leading slash on the document url is the index generator's
    /// convention for site-relative paths; strip it so the join never
    /// doubles the separator.
    pub fn page_url(&self, doc_url: &str) -> String {
        format!("{}/{}", self.0, doc_url.strip_prefix('/').unwrap_or(doc_url))
    }
}

impl fmt::Display for SiteRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
