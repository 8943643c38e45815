// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The widget: input events in, panel state and host effects out.
//!
//! [`SearchWidget`] owns the engine, the debounce controller and the current
//! panel. Hosts translate raw UI events into the `on_*` methods and apply
//! the returned [`WidgetUpdate`]: repaint the panel, rearm a timer, drop
//! focus. Nothing in here touches a document object, which is what keeps
//! the whole flow testable off-browser.

use std::time::Duration;

use crate::debounce::{DebouncedInput, InputAction, TimerRequest, TimerToken};
use crate::engine::QueryEngine;
use crate::error::LecternError;
use crate::fetch::IndexFetcher;
use crate::render::Panel;
use crate::siteroot::SiteRoot;
use crate::types::WidgetConfig;

/// Effects the host applies after an event, in order: repaint if
/// `panel_changed`, rearm the timer if `timer` is set, blur the input if
/// `blur_input`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WidgetUpdate {
    pub panel_changed: bool,
    pub timer: Option<TimerRequest>,
    pub blur_input: bool,
}

/// The search subsystem behind one input box.
#[derive(Debug)]
pub struct SearchWidget {
    config: WidgetConfig,
    site: SiteRoot,
    engine: QueryEngine,
    input: DebouncedInput,
    panel: Panel,
}

impl SearchWidget {
    pub fn new(site: SiteRoot, config: WidgetConfig) -> Self {
        let input = DebouncedInput::new(
            Duration::from_millis(config.debounce_ms),
            config.min_query_len,
        );
        Self {
            config,
            site,
            engine: QueryEngine::new(),
            input,
            panel: Panel::hidden(),
        }
    }

    /// Synchronous build path (CLI and tests). A failure leaves the engine
    /// unavailable; the widget keeps answering events with empty panels.
    pub fn load(&mut self, fetcher: &dyn IndexFetcher) -> Result<(), LecternError> {
        self.engine.load(fetcher, self.config.strategy)
    }

    /// Hosts that fetch asynchronously step the engine themselves.
    pub fn engine_mut(&mut self) -> &mut QueryEngine {
        &mut self.engine
    }

    pub fn engine(&self) -> &QueryEngine {
        &self.engine
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn site(&self) -> &SiteRoot {
        &self.site
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// The input's value changed.
    pub fn on_input(&mut self, value: &str) -> WidgetUpdate {
        match self.input.keystroke(value) {
            InputAction::Hide => self.hide_panel(false),
            InputAction::Schedule(request) => WidgetUpdate {
                timer: Some(request),
                ..WidgetUpdate::default()
            },
        }
    }

    /// A host timer fired. Stale tokens are no-ops.
    pub fn on_timer(&mut self, token: TimerToken) -> WidgetUpdate {
        match self.input.fire(token) {
            Some(query) => self.run_query(&query),
            None => WidgetUpdate::default(),
        }
    }

    /// Escape pressed: dismiss everything and release focus.
    pub fn on_escape(&mut self) -> WidgetUpdate {
        self.input.dismiss();
        self.hide_panel(true)
    }

    /// Click landed outside the input and the panel.
    pub fn on_click_outside(&mut self) -> WidgetUpdate {
        self.input.dismiss();
        self.hide_panel(false)
    }

    fn hide_panel(&mut self, blur_input: bool) -> WidgetUpdate {
        let panel_changed = self.panel.active;
        self.panel = Panel::hidden();
        WidgetUpdate {
            panel_changed,
            timer: None,
            blur_input,
        }
    }

    fn run_query(&mut self, query: &str) -> WidgetUpdate {
        let mut results = self.engine.search(query);
        if let Some(cap) = self.config.max_results {
            results.truncate(cap);
        }
        self.panel = Panel::render(&results, &self.site, self.config.excerpt_len);
        WidgetUpdate {
            panel_changed: true,
            ..WidgetUpdate::default()
        }
    }
}
