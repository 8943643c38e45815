//! Shared fixtures for integration tests.

use lectern::testing::make_doc;
use lectern::{IndexedDoc, SearchWidget, SiteRoot, StaticFetcher, WidgetConfig};

/// A small but realistic documentation site: install pages sharing a stem,
/// a page with markup in its body, tagged posts, and an accented title.
pub fn site_corpus() -> Vec<IndexedDoc> {
    vec![
        make_doc(
            "/install/",
            "Installing",
            "Download the release archive and run the installer",
            &["setup", "guide"],
        ),
        make_doc(
            "/uninstall/",
            "Uninstalling",
            "Removing every trace of a broken installation",
            &["setup"],
        ),
        make_doc(
            "/posts/search/",
            "Client Side Search",
            "How the widget matches queries against titles tags and body text",
            &["search", "rust"],
        ),
        make_doc(
            "/posts/themes/",
            "Dark Mode",
            "Persisting a display preference across visits without a flash",
            &["design"],
        ),
        make_doc(
            "/posts/markup/",
            "Writing <em>Posts</em>",
            "Bodies may contain <script>alert(1)</script> literal markup",
            &["authoring"],
        ),
        make_doc(
            "/posts/cafe/",
            "Café Reviews",
            "Notes on espresso naïveté and crème",
            &["food"],
        ),
    ]
}

pub fn corpus_payload() -> Vec<u8> {
    serde_json::to_vec(&site_corpus()).unwrap()
}

/// A widget loaded with [`site_corpus`], mounted at the domain root.
pub fn ready_widget() -> SearchWidget {
    ready_widget_with(WidgetConfig::default())
}

pub fn ready_widget_with(config: WidgetConfig) -> SearchWidget {
    let mut widget = SearchWidget::new(SiteRoot::new(""), config);
    widget
        .load(&StaticFetcher::new(corpus_payload()))
        .expect("corpus should load");
    widget
}

/// Drive a full keystroke-then-timer cycle and return the widget.
pub fn dispatch(widget: &mut SearchWidget, query: &str) {
    let update = widget.on_input(query);
    let request = update.timer.expect("query should schedule a dispatch");
    widget.on_timer(request.token);
}
