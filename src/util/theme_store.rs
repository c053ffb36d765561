//! Theme persistence and document application.
//!
//! Reads and writes the preference under a single `localStorage` key and
//! mirrors the applied theme as a `data-theme` attribute on `<html>`.
//!
//! TRADE-OFFS
//! ==========
//! Storage can be disabled, full, or blocked by privacy settings. Reads
//! degrade to "no preference" and writes to no-ops, leaving the in-memory
//! signal authoritative for the session. Non-browser builds no-op so server
//! or test execution stays deterministic.

use crate::state::theme::Theme;

#[cfg(test)]
#[path = "theme_store_test.rs"]
mod theme_store_test;

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "preferred-theme";

#[cfg(feature = "csr")]
const THEME_ATTRIBUTE: &str = "data-theme";

/// Read the persisted theme preference.
///
/// Returns `None` when nothing is stored, the stored value is not a valid
/// theme literal, or storage is unavailable.
pub fn read_saved() -> Option<Theme> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
        Theme::parse(&raw)
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Persist the theme preference, best-effort.
pub fn save(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, theme.as_str());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Apply the theme to the document by setting `data-theme` on `<html>`.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute(THEME_ATTRIBUTE, theme.as_str());
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Read the theme currently applied to the document.
///
/// The toggle flips whatever the live document shows rather than a cached
/// value, so an attribute changed out-of-band still toggles correctly.
pub fn applied() -> Option<Theme> {
    #[cfg(feature = "csr")]
    {
        let doc = web_sys::window().and_then(|w| w.document())?;
        let raw = doc.document_element()?.get_attribute(THEME_ATTRIBUTE)?;
        Theme::parse(&raw)
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Whether the system currently prefers a dark color scheme.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}
