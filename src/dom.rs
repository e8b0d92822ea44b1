//! Handles the page handlers act through.
//!
//! SYSTEM CONTEXT
//! ==============
//! Handlers never reach into `window`/`document` directly. They receive
//! these handles instead, so the browser backends in `web` and the in-memory
//! fakes used by tests are interchangeable.
//!
//! Every `PageDom` accessor returns `None`/`false` when the element is
//! missing; callers treat that as "nothing to do".

use std::time::Duration;

use futures::future::LocalBoxFuture;

use crate::error::PageError;

/// CSS `display` values the alias container switches between.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Display {
    Block,
    None,
}

impl Display {
    pub fn from_visible(visible: bool) -> Self {
        if visible { Self::Block } else { Self::None }
    }

    pub fn as_css(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::None => "none",
        }
    }
}

/// Element-level access to the page, addressed by element id.
pub trait PageDom {
    /// Rendered text of an element.
    fn text(&self, id: &str) -> Option<String>;
    fn set_text(&self, id: &str, text: &str) -> bool;
    /// Inline `color` style; empty string when unset.
    fn color(&self, id: &str) -> Option<String>;
    /// Set the inline `color` style. An empty string clears it.
    fn set_color(&self, id: &str, color: &str) -> bool;
    fn set_display(&self, id: &str, display: Display) -> bool;
    /// Checked state of a checkbox input.
    fn is_checked(&self, id: &str) -> Option<bool>;
    fn set_checked(&self, id: &str, checked: bool) -> bool;
    /// Current value of a text input.
    fn value(&self, id: &str) -> Option<String>;
    fn focus(&self, id: &str) -> bool;
    fn set_inner_html(&self, id: &str, html: &str) -> bool;
    /// Attribute on the root (`<html>`) element.
    fn root_attribute(&self, name: &str) -> Option<String>;
    fn set_root_attribute(&self, name: &str, value: &str);
}

/// Persistent key/value storage for the theme preference.
pub trait ThemeStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str) -> Result<(), PageError>;
}

/// OS-level color scheme preference.
pub trait ColorSchemePreference {
    fn prefers_dark(&self) -> bool;
}

/// System clipboard.
pub trait Clipboard {
    fn write_text(&self, text: &str) -> LocalBoxFuture<'static, Result<(), PageError>>;
}

/// Pending deferred callback. Dropping the handle leaves the callback
/// scheduled; only `cancel` stops it.
pub trait TimerHandle {
    fn cancel(self: Box<Self>);
}

/// Deferred callback scheduling on the UI event loop.
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Box<dyn TimerHandle>;
}
