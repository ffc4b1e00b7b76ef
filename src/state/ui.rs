//! App-level UI state, provided as a context signal by the root component.
//!
//! The only state shared across pages is the dark mode flag. A page load
//! restores it from `localStorage`, falling back to the system color scheme
//! when nothing is stored; toggling persists the new choice. The flag is
//! mirrored onto the `dark-mode` class of `<html>` so the stylesheet can
//! react, via [`UiState::sync_dom`] from an effect in the root component.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[cfg(feature = "hydrate")]
const DARK_MODE_KEY: &str = "agrimitra_dark";

/// App-level UI state shared through context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
}

impl UiState {
    /// State for a fresh page load. The stored preference wins; without one
    /// the system color scheme decides. Light mode outside a browser.
    pub fn restore() -> Self {
        Self {
            dark_mode: stored_preference().unwrap_or_else(system_prefers_dark),
        }
    }

    /// Flip dark mode and persist the new choice.
    pub fn toggle(&mut self) {
        self.dark_mode = !self.dark_mode;
        store_preference(self.dark_mode);
    }

    /// Mirror the flag onto the `dark-mode` class of `<html>`.
    pub fn sync_dom(self) {
        #[cfg(feature = "hydrate")]
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let classes = root.class_list();
            let _ = if self.dark_mode {
                classes.add_1("dark-mode")
            } else {
                classes.remove_1("dark-mode")
            };
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = self;
    }
}

#[cfg(feature = "hydrate")]
fn stored_preference() -> Option<bool> {
    let storage = web_sys::window()?.local_storage().ok().flatten()?;
    let value = storage.get_item(DARK_MODE_KEY).ok().flatten()?;
    Some(value == "true")
}

#[cfg(not(feature = "hydrate"))]
fn stored_preference() -> Option<bool> {
    None
}

#[cfg(feature = "hydrate")]
fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map_or(false, |query| query.matches())
}

#[cfg(not(feature = "hydrate"))]
fn system_prefers_dark() -> bool {
    false
}

#[cfg(feature = "hydrate")]
fn store_preference(enabled: bool) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(DARK_MODE_KEY, if enabled { "true" } else { "false" });
        }
    }
}

#[cfg(not(feature = "hydrate"))]
fn store_preference(_enabled: bool) {}
