//! Page handlers: copy link, alias toggle, theme toggle, and load setup.
//!
//! DESIGN
//! ======
//! Each handler is independent and guards on its own elements, so a page
//! that omits a widget simply gets a no-op for it. The only suspending step
//! is the clipboard write; the hint restore runs later as its own scheduled
//! callback.
//!
//! TRADE-OFFS
//! ==========
//! A second copy inside the hint window does not cancel the first restore.
//! Both timers fire, and the second one re-captured "Copied!" as its old
//! text, so rapid double copies can leave the hint reading "Copied!" after
//! the last timer. Callers that care can cancel the returned handle.

use std::rc::Rc;

use crate::config::PageConfig;
use crate::dom::{Clipboard, ColorSchemePreference, Display, PageDom, Scheduler, ThemeStore, TimerHandle};
use crate::theme::Theme;

#[cfg(test)]
#[path = "interactions_test.rs"]
mod interactions_test;

/// Handles injected into [`PageInteractions`].
#[derive(Clone)]
pub struct PageHandles {
    pub dom: Rc<dyn PageDom>,
    pub store: Rc<dyn ThemeStore>,
    pub color_scheme: Rc<dyn ColorSchemePreference>,
    pub clipboard: Rc<dyn Clipboard>,
    pub scheduler: Rc<dyn Scheduler>,
}

/// The page's event handlers, bound to one set of handles.
#[derive(Clone)]
pub struct PageInteractions {
    config: Rc<PageConfig>,
    handles: PageHandles,
}

impl PageInteractions {
    pub fn new(config: PageConfig, handles: PageHandles) -> Self {
        Self { config: Rc::new(config), handles }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Copy the short URL to the clipboard and flash the copy hint.
    ///
    /// Returns the pending restore when the hint was swapped. Clipboard
    /// failures are logged and leave the hint untouched.
    pub async fn copy_link(&self) -> Option<Box<dyn TimerHandle>> {
        let cfg = &self.config;
        let url = self.handles.dom.text(&cfg.short_url_id)?;

        if let Err(err) = self.handles.clipboard.write_text(&url).await {
            log::error!("copy failed: {err}");
            return None;
        }

        let dom = &self.handles.dom;
        let old_text = dom.text(&cfg.copy_hint_id)?;
        let old_color = dom.color(&cfg.copy_hint_id).unwrap_or_default();
        dom.set_text(&cfg.copy_hint_id, &cfg.copied_text);
        dom.set_color(&cfg.copy_hint_id, &cfg.accent_color);

        let dom = Rc::clone(dom);
        let hint_id = cfg.copy_hint_id.clone();
        let handle = self.handles.scheduler.schedule(
            cfg.hint_duration(),
            Box::new(move || {
                dom.set_text(&hint_id, &old_text);
                dom.set_color(&hint_id, &old_color);
            }),
        );
        Some(handle)
    }

    /// Show the alias field when its checkbox is checked, hide it otherwise.
    pub fn toggle_alias(&self) {
        let cfg = &self.config;
        let dom = &self.handles.dom;
        let Some(checked) = dom.is_checked(&cfg.alias_toggle_id) else {
            return;
        };
        if !dom.set_display(&cfg.alias_container_id, Display::from_visible(checked)) {
            return;
        }
        if checked {
            dom.focus(&cfg.alias_input_id);
        }
    }

    /// Flip between light and dark, persist the choice, and return it.
    pub fn toggle_theme(&self) -> Theme {
        let current = self.current_theme();
        let next = current.toggled();
        self.apply_theme(next);
        if let Err(err) = self.handles.store.save(&self.config.storage_key, next.as_str()) {
            log::warn!("theme preference not saved: {err}");
        }
        log::debug!("theme toggled {current} -> {next}");
        next
    }

    /// Render the moon or sun glyph into the theme icon.
    pub fn update_theme_icon(&self, theme: Theme) {
        self.handles
            .dom
            .set_inner_html(&self.config.theme_icon_id, theme.icon_markup());
    }

    /// Theme currently applied to the root element.
    pub fn current_theme(&self) -> Theme {
        let attr = self.handles.dom.root_attribute(&self.config.theme_attribute);
        Theme::from_attribute(attr.as_deref())
    }

    /// One-time setup on page ready: apply the initial theme and reveal a
    /// server-prefilled alias field.
    pub fn initialize(&self) -> Theme {
        let stored = self.handles.store.load(&self.config.storage_key);
        let theme = Theme::resolve_initial(stored.as_deref(), self.handles.color_scheme.prefers_dark());
        self.apply_theme(theme);
        log::debug!("initial theme {theme} (stored: {stored:?})");

        let cfg = &self.config;
        let dom = &self.handles.dom;
        let prefilled = dom
            .value(&cfg.alias_input_id)
            .is_some_and(|value| !value.is_empty());
        if prefilled && dom.set_checked(&cfg.alias_toggle_id, true) {
            self.toggle_alias();
        }
        theme
    }

    fn apply_theme(&self, theme: Theme) {
        self.handles
            .dom
            .set_root_attribute(&self.config.theme_attribute, theme.as_str());
        self.update_theme_icon(theme);
    }
}
