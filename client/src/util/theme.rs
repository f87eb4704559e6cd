//! Light/dark theme initialization and toggle.
//!
//! Reads the user's preference from a [`PreferenceStore`] and applies the
//! `dark` class to the `<html>` element. Toggle writes `"dark"`/`"light"`
//! back under the `theme` key and updates the class.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use super::storage::PreferenceStore;

/// Storage key holding the persisted theme.
pub const STORAGE_KEY: &str = "theme";

/// Class set on the document root while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

/// Two-valued visual preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Persisted representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Interpret a stored value. Only `"dark"` selects the dark theme.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Read the persisted theme. Absent or unknown values read as light.
pub fn read_preference(store: &impl PreferenceStore) -> Theme {
    Theme::from_stored(store.get(STORAGE_KEY).as_deref())
}

/// Add or remove the `dark` class on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let class_list = el.class_list();
                if theme.is_dark() {
                    let _ = class_list.add_1(DARK_CLASS);
                } else {
                    let _ = class_list.remove_1(DARK_CLASS);
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Startup hook: read the stored preference and apply it when dark.
///
/// A light preference takes no action so the default styling stands.
pub fn init(store: &impl PreferenceStore) -> Theme {
    let theme = read_preference(store);
    if theme.is_dark() {
        apply(theme);
    }
    theme
}

/// Flip the theme, apply it, and persist the new value.
pub fn toggle(current: Theme, store: &impl PreferenceStore) -> Theme {
    let next = current.toggled();
    apply(next);
    store.set(STORAGE_KEY, next.as_str());
    next
}
