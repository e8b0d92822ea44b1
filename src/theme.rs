//! Light/dark theme state and its icon markup.
//!
//! The theme lives in three places at once: the persisted preference, the
//! root element's `data-theme` attribute, and the toggle button's icon. This
//! module holds the pure pieces; `interactions` keeps the three in step.

use std::fmt;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Moon glyph rendered while dark mode is active.
pub const MOON_ICON: &str = r#"<path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"></path>"#;

/// Sun glyph (circle with eight rays) rendered while light mode is active.
pub const SUN_ICON: &str = concat!(
    r#"<circle cx="12" cy="12" r="5"></circle>"#,
    r#"<line x1="12" y1="1" x2="12" y2="3"></line>"#,
    r#"<line x1="12" y1="21" x2="12" y2="23"></line>"#,
    r#"<line x1="4.22" y1="4.22" x2="5.64" y2="5.64"></line>"#,
    r#"<line x1="18.36" y1="18.36" x2="19.78" y2="19.78"></line>"#,
    r#"<line x1="1" y1="12" x2="3" y2="12"></line>"#,
    r#"<line x1="21" y1="12" x2="23" y2="12"></line>"#,
    r#"<line x1="4.22" y1="19.78" x2="5.64" y2="18.36"></line>"#,
    r#"<line x1="18.36" y1="5.64" x2="19.78" y2="4.22"></line>"#,
);

/// Page color theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a persisted value. Only the exact strings `dark` and `light`
    /// are recognized.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Interpret the current root attribute. Anything but `dark`, including
    /// a missing attribute, counts as light.
    pub fn from_attribute(value: Option<&str>) -> Self {
        if value == Some("dark") { Self::Dark } else { Self::Light }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Inner SVG markup for the theme toggle icon.
    pub fn icon_markup(self) -> &'static str {
        match self {
            Self::Dark => MOON_ICON,
            Self::Light => SUN_ICON,
        }
    }

    /// Pick the theme at page load: stored preference first, then the OS
    /// color scheme, then light.
    ///
    /// A stored string outside `dark`/`light` (say `sepia`) is never written
    /// back to `data-theme` as-is; it counts as no preference.
    pub fn resolve_initial(stored: Option<&str>, prefers_dark: bool) -> Self {
        if let Some(theme) = stored.and_then(Self::parse) {
            return theme;
        }
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
