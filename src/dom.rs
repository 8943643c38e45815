//! Browser glue: wires the page's DOM to the core widget.
//!
//! Compiled only for wasm32 with the `wasm` feature. Everything here is
//! translation: DOM events become `SearchWidget` calls, and the returned
//! [`WidgetUpdate`] is applied back to real elements. No matching, ranking
//! or rendering logic lives in this module.
//!
//! Page contract: an `#search-input` input, a `#search-results` container,
//! and optionally a `#theme-toggle` button with a `.theme-toggle-icon`
//! child. Pages without the search elements still get theming; the widget
//! declines the rest silently. Module scripts execute after the document is
//! parsed, so mounting happens immediately at start.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::Date;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{
    Document, Element, Event, HtmlInputElement, KeyboardEvent, Response, Storage, Window,
};

use crate::debounce::TimerRequest;
use crate::error::LecternError;
use crate::fetch::parse_index;
use crate::index::build_strategy;
use crate::siteroot::{SiteRoot, DEFAULT_ASSET_SUFFIX};
use crate::theme::{DisplayMode, ModeStore, ThemeToggle, STORAGE_KEY};
use crate::types::{IndexedDoc, WidgetConfig};
use crate::widget::{SearchWidget, WidgetUpdate};

const SEARCH_INPUT_ID: &str = "search-input";
const SEARCH_RESULTS_ID: &str = "search-results";
const THEME_TOGGLE_ID: &str = "theme-toggle";
const THEME_ICON_SELECTOR: &str = ".theme-toggle-icon";

/// Everything the event closures need, cheap to clone into each one.
#[derive(Clone)]
struct Host {
    widget: Rc<RefCell<SearchWidget>>,
    window: Window,
    document: Document,
    input: HtmlInputElement,
    results: Element,
    /// Live `setTimeout` handle, replaced on every scheduled dispatch.
    timer: Rc<Cell<Option<i32>>>,
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    mount_with(&window, page_config(&window))
}

/// Configuration from `window.lecternConfig`, when the page set one before
/// loading the module. Absent or malformed config means defaults.
fn page_config(window: &Window) -> WidgetConfig {
    js_sys::Reflect::get(window.as_ref(), &JsValue::from_str("lecternConfig"))
        .ok()
        .map(|value| serde_wasm_bindgen::from_value(value).unwrap_or_default())
        .unwrap_or_default()
}

fn mount_with(window: &Window, config: WidgetConfig) -> Result<(), JsValue> {
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    // theme first, before anything can paint in the wrong colors
    wire_theme(window, &document);

    let (Some(input), Some(results)) = (
        document.get_element_by_id(SEARCH_INPUT_ID),
        document.get_element_by_id(SEARCH_RESULTS_ID),
    ) else {
        tracing::debug!(
            error = %LecternError::MissingMount(SEARCH_INPUT_ID),
            "search widget not mounted"
        );
        return Ok(());
    };
    let input: HtmlInputElement = input
        .dyn_into()
        .map_err(|_| JsValue::from_str("search-input is not an input element"))?;

    let site = resolve_site_root(window, &document);
    let host = Host {
        widget: Rc::new(RefCell::new(SearchWidget::new(site.clone(), config))),
        window: window.clone(),
        document,
        input,
        results,
        timer: Rc::new(Cell::new(None)),
    };
    wire_search(&host)?;
    spawn_local(load_index(host, site));
    Ok(())
}

// ---------------------------------------------------------------------------
// Index loading
// ---------------------------------------------------------------------------

async fn load_index(host: Host, site: SiteRoot) {
    host.widget.borrow_mut().engine_mut().begin_build();
    let kind = host.widget.borrow().config().strategy;
    match fetch_docs(&site).await {
        Ok(docs) => {
            let strategy = build_strategy(kind, docs);
            host.widget.borrow_mut().engine_mut().install(strategy);
        }
        Err(err) => {
            web_sys::console::error_2(&JsValue::from_str("Failed to load search index:"), &err);
            host.widget.borrow_mut().engine_mut().mark_unavailable();
        }
    }
}

async fn fetch_docs(site: &SiteRoot) -> Result<Vec<IndexedDoc>, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let url = site.index_url(Date::now() as u64);
    let response: Response = JsFuture::from(window.fetch_with_str(&url)).await?.dyn_into()?;
    if !response.ok() {
        let err = LecternError::Status(response.status());
        return Err(JsValue::from_str(&err.to_string()));
    }
    let body = JsFuture::from(response.text()?).await?;
    let text = body
        .as_string()
        .ok_or_else(|| JsValue::from_str("index body was not text"))?;
    parse_index(text.as_bytes()).map_err(|e| e.to_string().into())
}

// ---------------------------------------------------------------------------
// Search wiring
// ---------------------------------------------------------------------------

fn wire_search(host: &Host) -> Result<(), JsValue> {
    {
        let h = host.clone();
        let on_input = Closure::<dyn FnMut()>::new(move || {
            let update = h.widget.borrow_mut().on_input(&h.input.value());
            apply(&h, update);
        });
        host.input
            .add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
        on_input.forget();
    }
    {
        // delegated navigation: one listener, whatever the panel repaints to
        let h = host.clone();
        let on_result_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            if let Ok(Some(item)) = target.closest(".search-result-item") {
                if let Some(url) = item.get_attribute("data-target") {
                    let _ = h.window.location().assign(&url);
                }
            }
        });
        host.results
            .add_event_listener_with_callback("click", on_result_click.as_ref().unchecked_ref())?;
        on_result_click.forget();
    }
    {
        let h = host.clone();
        let on_doc_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let inside = event
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
                .map_or(false, |node| {
                    h.input.contains(Some(&node)) || h.results.contains(Some(&node))
                });
            if !inside {
                let update = h.widget.borrow_mut().on_click_outside();
                apply(&h, update);
            }
        });
        host.document
            .add_event_listener_with_callback("click", on_doc_click.as_ref().unchecked_ref())?;
        on_doc_click.forget();
    }
    {
        let h = host.clone();
        let on_keydown = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            if event.key() == "Escape" {
                let update = h.widget.borrow_mut().on_escape();
                apply(&h, update);
            }
        });
        host.document
            .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())?;
        on_keydown.forget();
    }
    Ok(())
}

fn apply(host: &Host, update: WidgetUpdate) {
    if update.panel_changed {
        paint_panel(host);
    }
    if let Some(request) = update.timer {
        arm_timer(host, request);
    }
    if update.blur_input {
        let _ = host.input.blur();
    }
}

fn paint_panel(host: &Host) {
    let widget = host.widget.borrow();
    let panel = widget.panel();
    // panel HTML is escaped at construction, see render::Panel::to_html
    host.results.set_inner_html(&panel.to_html());
    let classes = host.results.class_list();
    let _ = if panel.active {
        classes.add_1("active")
    } else {
        classes.remove_1("active")
    };
}

fn arm_timer(host: &Host, request: TimerRequest) {
    if let Some(id) = host.timer.take() {
        host.window.clear_timeout_with_handle(id);
    }
    let h = host.clone();
    let callback = Closure::once_into_js(move || {
        h.timer.set(None);
        let update = h.widget.borrow_mut().on_timer(request.token);
        apply(&h, update);
    });
    let scheduled = host.window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        request.delay.as_millis() as i32,
    );
    host.timer.set(scheduled.ok());
}

// ---------------------------------------------------------------------------
// Site root
// ---------------------------------------------------------------------------

fn resolve_site_root(window: &Window, document: &Document) -> SiteRoot {
    let scripts = document.scripts();
    let mut srcs = Vec::with_capacity(scripts.length() as usize);
    for i in 0..scripts.length() {
        let Some(node) = scripts.item(i) else { continue };
        if let Some(script) = node.dyn_ref::<web_sys::HtmlScriptElement>() {
            let src = script.src();
            if !src.is_empty() {
                srcs.push(src);
            }
        }
    }
    let location = window.location().href().unwrap_or_default();
    SiteRoot::resolve(srcs.iter().map(String::as_str), &location, DEFAULT_ASSET_SUFFIX)
}

// ---------------------------------------------------------------------------
// Theme wiring
// ---------------------------------------------------------------------------

/// localStorage-backed persistence. Private browsing can refuse both reads
/// and writes; either way the page keeps the mode it resolved.
struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    fn new(window: &Window) -> Self {
        Self {
            storage: window.local_storage().ok().flatten(),
        }
    }
}

impl ModeStore for LocalStorageStore {
    fn load(&self) -> Option<DisplayMode> {
        let value = self.storage.as_ref()?.get_item(STORAGE_KEY).ok().flatten()?;
        DisplayMode::parse(&value)
    }

    fn store(&self, mode: DisplayMode) {
        if let Some(storage) = &self.storage {
            if storage.set_item(STORAGE_KEY, mode.as_str()).is_err() {
                tracing::debug!("display mode not persisted, storage rejected the write");
            }
        }
    }
}

fn wire_theme(window: &Window, document: &Document) {
    let store = LocalStorageStore::new(window);
    let prefers_dark = window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map_or(false, |media| media.matches());
    let toggle = Rc::new(RefCell::new(ThemeToggle::init(&store, prefers_dark)));
    paint_theme(document, toggle.borrow().applied());

    let Some(button) = document.get_element_by_id(THEME_TOGGLE_ID) else {
        return;
    };
    let window = window.clone();
    let doc = document.clone();
    let on_toggle = Closure::<dyn FnMut()>::new(move || {
        let store = LocalStorageStore::new(&window);
        let applied = toggle.borrow_mut().toggle(&store);
        paint_theme(&doc, applied);
    });
    if button
        .add_event_listener_with_callback("click", on_toggle.as_ref().unchecked_ref())
        .is_ok()
    {
        on_toggle.forget();
    }
}

fn paint_theme(document: &Document, applied: crate::theme::AppliedTheme) {
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("data-theme", applied.data_theme);
    }
    if let Some(button) = document.get_element_by_id(THEME_TOGGLE_ID) {
        let _ = button.set_attribute("aria-label", applied.aria_label);
        if let Ok(Some(icon)) = button.query_selector(THEME_ICON_SELECTOR) {
            icon.set_text_content(Some(applied.icon));
        }
    }
}
