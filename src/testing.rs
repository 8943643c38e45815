//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::IndexedDoc;

/// Create a test document with the canonical field shapes.
pub fn make_doc(url: &str, title: &str, content: &str, tags: &[&str]) -> IndexedDoc {
    IndexedDoc {
        url: url.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        tags: tags.iter().map(ToString::to_string).collect(),
    }
}

/// Small documentation-site corpus used across tests.
///
/// `/a` and `/b` are the install pair: a shared stem at different offsets,
/// which is what position-bonus ordering tests lean on.
pub fn docs_corpus() -> Vec<IndexedDoc> {
    vec![
        make_doc(
            "/a",
            "Installing",
            "Run the installer and follow the prompts",
            &["setup"],
        ),
        make_doc("/b", "Uninstalling", "Removing a broken copy", &["setup"]),
        make_doc(
            "/posts/search/",
            "Client Side Search",
            "How the widget matches queries against titles tags and body text",
            &["search", "rust"],
        ),
        make_doc(
            "/posts/themes/",
            "Dark Mode",
            "Persisting a display preference across visits",
            &["design"],
        ),
    ]
}
