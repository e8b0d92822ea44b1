//! Browser backends and the JS-facing entry points.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page markup calls `copyLink()`, `toggleAlias()` and `toggleTheme()`
//! from `onclick`/`onchange` attributes. Each export builds a
//! [`PageInteractions`] over the live document and runs one handler.
//! `start` runs when the module loads and schedules `initialize` for
//! `DOMContentLoaded`.
//!
//! The root element may carry a `data-page-config` attribute holding a JSON
//! [`PageConfig`] override; it is read on every call.

use std::rc::Rc;
use std::time::Duration;

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{CssStyleDeclaration, Document, DocumentReadyState, HtmlElement, HtmlInputElement, Storage, Window};

use crate::config::PageConfig;
use crate::dom::{Clipboard, ColorSchemePreference, Display, PageDom, Scheduler, ThemeStore, TimerHandle};
use crate::error::PageError;
use crate::interactions::{PageHandles, PageInteractions};
use crate::theme::Theme;

const CONFIG_ATTRIBUTE: &str = "data-page-config";

#[cfg(all(test, target_arch = "wasm32"))]
#[path = "web_test.rs"]
mod web_test;

// =============================================================
// DOM
// =============================================================

/// [`PageDom`] over a live `Document`.
pub struct WebDom {
    document: Document,
}

impl WebDom {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn html(&self, id: &str) -> Option<HtmlElement> {
        self.document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
    }

    fn input(&self, id: &str) -> Option<HtmlInputElement> {
        self.document.get_element_by_id(id)?.dyn_into::<HtmlInputElement>().ok()
    }

    fn style(&self, id: &str) -> Option<CssStyleDeclaration> {
        self.html(id).map(|el| el.style())
    }
}

impl PageDom for WebDom {
    fn text(&self, id: &str) -> Option<String> {
        self.html(id).map(|el| el.inner_text())
    }

    fn set_text(&self, id: &str, text: &str) -> bool {
        let Some(el) = self.html(id) else {
            return false;
        };
        el.set_inner_text(text);
        true
    }

    fn color(&self, id: &str) -> Option<String> {
        self.style(id)?.get_property_value("color").ok()
    }

    fn set_color(&self, id: &str, color: &str) -> bool {
        let Some(style) = self.style(id) else {
            return false;
        };
        if color.is_empty() {
            style.remove_property("color").is_ok()
        } else {
            style.set_property("color", color).is_ok()
        }
    }

    fn set_display(&self, id: &str, display: Display) -> bool {
        self.style(id)
            .is_some_and(|style| style.set_property("display", display.as_css()).is_ok())
    }

    fn is_checked(&self, id: &str) -> Option<bool> {
        self.input(id).map(|el| el.checked())
    }

    fn set_checked(&self, id: &str, checked: bool) -> bool {
        let Some(el) = self.input(id) else {
            return false;
        };
        el.set_checked(checked);
        true
    }

    fn value(&self, id: &str) -> Option<String> {
        self.input(id).map(|el| el.value())
    }

    fn focus(&self, id: &str) -> bool {
        self.html(id).is_some_and(|el| el.focus().is_ok())
    }

    fn set_inner_html(&self, id: &str, html: &str) -> bool {
        match self.document.get_element_by_id(id) {
            Some(el) => {
                el.set_inner_html(html);
                true
            }
            None => false,
        }
    }

    fn root_attribute(&self, name: &str) -> Option<String> {
        self.document.document_element()?.get_attribute(name)
    }

    fn set_root_attribute(&self, name: &str, value: &str) {
        if let Some(root) = self.document.document_element() {
            let _ = root.set_attribute(name, value);
        }
    }
}

// =============================================================
// Storage and color scheme
// =============================================================

/// [`ThemeStore`] over `window.localStorage`. Storage can be unavailable
/// (private mode, disabled cookies); loads then return `None`.
pub struct LocalThemeStore {
    storage: Option<Storage>,
}

impl LocalThemeStore {
    pub fn new(window: &Window) -> Self {
        Self { storage: window.local_storage().ok().flatten() }
    }
}

impl ThemeStore for LocalThemeStore {
    fn load(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PageError> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| PageError::Storage("localStorage unavailable".to_owned()))?;
        storage
            .set_item(key, value)
            .map_err(|err| PageError::Storage(describe(&err)))
    }
}

/// [`ColorSchemePreference`] via `matchMedia`.
pub struct MediaColorScheme {
    window: Window,
}

impl MediaColorScheme {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl ColorSchemePreference for MediaColorScheme {
    fn prefers_dark(&self) -> bool {
        self.window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }
}

// =============================================================
// Clipboard
// =============================================================

/// [`Clipboard`] over `navigator.clipboard`, which only exists in secure
/// contexts.
pub struct NavigatorClipboard {
    window: Window,
}

impl NavigatorClipboard {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    fn clipboard(&self) -> Option<web_sys::Clipboard> {
        let clipboard = self.window.navigator().clipboard();
        // Insecure contexts hand back `undefined` behind the typed wrapper.
        if clipboard.is_undefined() || clipboard.is_null() {
            return None;
        }
        Some(clipboard)
    }
}

impl Clipboard for NavigatorClipboard {
    fn write_text(&self, text: &str) -> LocalBoxFuture<'static, Result<(), PageError>> {
        let Some(clipboard) = self.clipboard() else {
            return async { Err(PageError::ClipboardUnavailable) }.boxed_local();
        };
        let promise = clipboard.write_text(text);
        async move {
            JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|err| PageError::ClipboardRejected(describe(&err)))
        }
        .boxed_local()
    }
}

// =============================================================
// Timers
// =============================================================

/// [`Scheduler`] backed by `setTimeout`.
pub struct TimeoutScheduler;

struct TimeoutHandle(Option<Timeout>);

impl TimerHandle for TimeoutHandle {
    fn cancel(mut self: Box<Self>) {
        if let Some(timeout) = self.0.take() {
            let _ = timeout.cancel();
        }
    }
}

impl Drop for TimeoutHandle {
    fn drop(&mut self) {
        // gloo cancels on drop; an uncancelled restore must still fire.
        if let Some(timeout) = self.0.take() {
            let _ = timeout.forget();
        }
    }
}

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Box<dyn TimerHandle> {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Box::new(TimeoutHandle(Some(Timeout::new(millis, task))))
    }
}

// =============================================================
// Entry points
// =============================================================

fn describe(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| err.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
        .unwrap_or_else(|| format!("{err:?}"))
}

fn load_config(dom: &WebDom) -> PageConfig {
    let Some(raw) = dom.root_attribute(CONFIG_ATTRIBUTE) else {
        return PageConfig::default();
    };
    PageConfig::from_json(&raw).unwrap_or_else(|err| {
        log::warn!("ignoring {CONFIG_ATTRIBUTE}: {err}");
        PageConfig::default()
    })
}

/// Handlers bound to the current window, or `None` outside a document.
pub fn browser_interactions() -> Option<PageInteractions> {
    let window = web_sys::window()?;
    let dom = WebDom::new(window.document()?);
    let config = load_config(&dom);
    let handles = PageHandles {
        dom: Rc::new(dom),
        store: Rc::new(LocalThemeStore::new(&window)),
        color_scheme: Rc::new(MediaColorScheme::new(window.clone())),
        clipboard: Rc::new(NavigatorClipboard::new(window)),
        scheduler: Rc::new(TimeoutScheduler),
    };
    Some(PageInteractions::new(config, handles))
}

#[wasm_bindgen(js_name = copyLink)]
pub fn copy_link() {
    let Some(page) = browser_interactions() else {
        return;
    };
    wasm_bindgen_futures::spawn_local(async move {
        // Dropping the handle leaves the restore scheduled.
        let _ = page.copy_link().await;
    });
}

#[wasm_bindgen(js_name = toggleAlias)]
pub fn toggle_alias() {
    if let Some(page) = browser_interactions() {
        page.toggle_alias();
    }
}

/// Returns the theme now in effect.
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() -> Option<String> {
    browser_interactions().map(|page| page.toggle_theme().as_str().to_owned())
}

#[wasm_bindgen(js_name = updateThemeIcon)]
pub fn update_theme_icon(theme: &str) {
    if let Some(page) = browser_interactions() {
        page.update_theme_icon(Theme::from_attribute(Some(theme)));
    }
}

fn initialize() {
    if let Some(page) = browser_interactions() {
        page.initialize();
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() != DocumentReadyState::Loading {
        initialize();
        return;
    }
    let on_ready = Closure::once_into_js(initialize);
    if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
        log::error!("could not register page setup: {}", describe(&err));
    }
}
