//! Page wiring configuration.
//!
//! DESIGN
//! ======
//! The server-rendered page owns the element ids and the storage key; this
//! struct names them in one place so the handlers never hard-code markup
//! details. Every field has a default matching the shipped template, and a
//! partial JSON object can override any subset.

use std::time::Duration;

use serde::Deserialize;

use crate::error::PageError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Element ids, storage key, and copy-hint presentation.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub short_url_id: String,
    pub copy_hint_id: String,
    pub alias_container_id: String,
    pub alias_toggle_id: String,
    pub alias_input_id: String,
    pub theme_icon_id: String,
    pub theme_attribute: String,
    pub storage_key: String,
    pub copied_text: String,
    pub accent_color: String,
    pub hint_duration_ms: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            short_url_id: "shortUrl".to_owned(),
            copy_hint_id: "copyHint".to_owned(),
            alias_container_id: "aliasContainer".to_owned(),
            alias_toggle_id: "aliasToggle".to_owned(),
            alias_input_id: "alias".to_owned(),
            theme_icon_id: "themeIcon".to_owned(),
            theme_attribute: "data-theme".to_owned(),
            storage_key: "theme".to_owned(),
            copied_text: "Copied!".to_owned(),
            accent_color: "var(--pico-primary)".to_owned(),
            hint_duration_ms: 2000,
        }
    }
}

impl PageConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Config`] for malformed JSON or mistyped fields.
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// How long the copy hint stays swapped.
    pub fn hint_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.hint_duration_ms))
    }
}
