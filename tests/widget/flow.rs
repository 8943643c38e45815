//! Event flow: debounced dispatch, dismissal, and configuration plumbing.

use std::time::Duration;

use lectern::{WidgetConfig, WidgetUpdate};

use super::common::{dispatch, ready_widget, ready_widget_with};

#[test]
fn a_visitor_types_reads_and_dismisses() {
    let mut widget = ready_widget();

    dispatch(&mut widget, "instal");
    assert!(widget.panel().active);
    assert_eq!(widget.panel().entries[0].target, "/install/");
    assert_eq!(widget.panel().entries[1].target, "/uninstall/");

    let update = widget.on_escape();
    assert!(update.blur_input);
    assert!(!widget.panel().active);
    assert_eq!(widget.panel().to_html(), "");

    // the widget is fully usable again after a dismissal
    dispatch(&mut widget, "dark mode");
    assert_eq!(widget.panel().entries[0].target, "/posts/themes/");
}

#[test]
fn a_timer_armed_before_a_dismissal_never_repaints() {
    let mut widget = ready_widget();
    let update = widget.on_input("search");
    let request = update.timer.expect("should schedule");

    widget.on_click_outside();
    assert_eq!(widget.on_timer(request.token), WidgetUpdate::default());
    assert!(!widget.panel().active);
}

#[test]
fn each_dispatch_replaces_the_previous_panel() {
    let mut widget = ready_widget();

    dispatch(&mut widget, "installing");
    assert!(!widget.panel().entries.is_empty());

    dispatch(&mut widget, "qqqqqq");
    assert!(widget.panel().active);
    assert!(widget.panel().entries.is_empty());

    dispatch(&mut widget, "dark mode");
    let targets: Vec<&str> = widget
        .panel()
        .entries
        .iter()
        .map(|e| e.target.as_str())
        .collect();
    assert_eq!(targets.first(), Some(&"/posts/themes/"));
    assert!(!targets.contains(&"/install/"));
}

#[test]
fn min_query_len_counts_characters_through_the_whole_stack() {
    let mut widget = ready_widget_with(WidgetConfig {
        min_query_len: 4,
        ..WidgetConfig::default()
    });

    assert!(widget.on_input("caf").timer.is_none());

    // four characters in five bytes
    dispatch(&mut widget, "café");
    assert_eq!(widget.panel().entries[0].target, "/posts/cafe/");
}

#[test]
fn configured_debounce_interval_reaches_the_timer_request() {
    let mut widget = ready_widget_with(WidgetConfig {
        debounce_ms: 50,
        ..WidgetConfig::default()
    });
    let update = widget.on_input("search");
    let request = update.timer.expect("should schedule");
    assert_eq!(request.delay, Duration::from_millis(50));
}
