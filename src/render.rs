// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The results panel, as data.
//!
//! Rendering never touches a document object. [`Panel::render`] turns ranked
//! matches into plain entries, and [`Panel::to_html`] serializes them with
//! every interpolated string passed through [`escape_html`], so document text
//! (or query text echoed back through it) stays inert markup. Hosts paint
//! the returned string and delegate clicks on the `data-target` attribute.

use crate::siteroot::SiteRoot;
use crate::types::MatchResult;

/// Placeholder shown when a dispatched query matches nothing.
pub const NO_RESULTS_TEXT: &str = "No results found";

/// One clickable search result. All fields are raw text; escaping happens
/// at serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelEntry {
    pub title: String,
    pub excerpt: String,
    /// Navigation target, already joined onto the site root.
    pub target: String,
}

/// Everything the host needs to paint the results container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    /// Whether the container should be visible at all.
    pub active: bool,
    pub entries: Vec<PanelEntry>,
}

impl Panel {
    /// Hidden and empty: before any query, and after dismissal.
    pub fn hidden() -> Self {
        Self {
            active: false,
            entries: Vec::new(),
        }
    }

    /// Build the panel for a ranked result list. Always a full replacement,
    /// never an append; an empty list still yields a visible panel so the
    /// no-results message can show.
    pub fn render(results: &[MatchResult], site: &SiteRoot, excerpt_len: usize) -> Self {
        let entries = results
            .iter()
            .map(|result| PanelEntry {
                title: result.doc.title.clone(),
                excerpt: truncate_excerpt(&result.doc.content, excerpt_len),
                target: site.page_url(&result.doc.url),
            })
            .collect();
        Self {
            active: true,
            entries,
        }
    }

    /// Escaped HTML for the panel body. Empty string when hidden.
    pub fn to_html(&self) -> String {
        if !self.active {
            return String::new();
        }
        if self.entries.is_empty() {
            return format!(
                r#"<div class="search-no-results">{}</div>"#,
                escape_html(NO_RESULTS_TEXT)
            );
        }
        let mut html = String::new();
        for entry in &self.entries {
            html.push_str(&format!(
                concat!(
                    r#"<div class="search-result-item" data-target="{target}">"#,
                    r#"<div class="search-result-title">{title}</div>"#,
                    r#"<div class="search-result-excerpt">{excerpt}</div>"#,
                    "</div>"
                ),
                target = escape_html(&entry.target),
                title = escape_html(&entry.title),
                excerpt = escape_html(&entry.excerpt),
            ));
        }
        html
    }
}

/// Replace markup-special characters with entities.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Cut body text to at most `max_chars` characters, appending `...` only
/// when something was actually cut. Counted in characters and cut wherever
/// that lands, mid-word included.
pub fn truncate_excerpt(content: &str, max_chars: usize) -> String {
    let mut chars = content.chars();
    let mut excerpt: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        excerpt.push_str("...");
    }
    excerpt
}
