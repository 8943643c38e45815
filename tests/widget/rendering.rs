//! Panel HTML through the full pipeline: real corpus, real queries.

use lectern::{PanelEntry, WidgetConfig, NO_RESULTS_TEXT};

use super::common::{dispatch, ready_widget, ready_widget_with};

fn entry_for<'a>(entries: &'a [PanelEntry], target: &str) -> &'a PanelEntry {
    entries
        .iter()
        .find(|e| e.target == target)
        .unwrap_or_else(|| panic!("no entry targeting {target}"))
}

#[test]
fn document_markup_cannot_escape_into_the_panel() {
    let mut widget = ready_widget();
    dispatch(&mut widget, "markup");

    let entry = entry_for(&widget.panel().entries, "/posts/markup/");
    assert_eq!(entry.title, "Writing <em>Posts</em>");

    let html = widget.panel().to_html();
    assert!(!html.contains("<script>"));
    assert!(!html.contains("<em>"));
    assert!(html.contains("Writing &lt;em&gt;Posts&lt;/em&gt;"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
}

#[test]
fn panel_html_carries_the_hooks_the_host_wires_to() {
    let mut widget = ready_widget();
    dispatch(&mut widget, "dark mode");

    let html = widget.panel().to_html();
    assert!(html.contains(r#"data-target="/posts/themes/""#));
    assert!(html.contains(r#"class="search-result-item""#));
    assert!(html.contains(r#"class="search-result-title""#));
    assert!(html.contains(r#"class="search-result-excerpt""#));
}

#[test]
fn no_matches_paints_the_placeholder() {
    let mut widget = ready_widget();
    dispatch(&mut widget, "qqqqqq");

    assert_eq!(
        widget.panel().to_html(),
        format!(r#"<div class="search-no-results">{NO_RESULTS_TEXT}</div>"#)
    );
}

#[test]
fn excerpts_honor_the_configured_length() {
    let mut widget = ready_widget_with(WidgetConfig {
        excerpt_len: 12,
        ..WidgetConfig::default()
    });
    dispatch(&mut widget, "installing");

    let entry = entry_for(&widget.panel().entries, "/install/");
    assert_eq!(entry.excerpt, "Download the...");
}

#[test]
fn accented_titles_display_verbatim_even_though_matching_folds_them() {
    let mut widget = ready_widget();
    dispatch(&mut widget, "cafe");

    assert_eq!(widget.panel().entries[0].target, "/posts/cafe/");
    assert!(widget.panel().to_html().contains("Café Reviews"));
}
