// Copyright 2026 the Flipline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Theme persistence over `localStorage`.

use web_sys::Storage;

use flipline_core::theme::{Theme, ThemeStore};

/// The `localStorage` key holding the theme preference.
const THEME_KEY: &str = "theme";

/// A [`ThemeStore`] backed by the browser's `localStorage`.
///
/// Storage can be unavailable (private browsing, sandboxed frames, quota);
/// every failure degrades to "no stored preference" on read and a silent
/// no-op on write.
#[derive(Debug)]
pub struct LocalThemeStore {
    storage: Option<Storage>,
}

impl LocalThemeStore {
    /// Opens the window's `localStorage`, tolerating its absence.
    #[must_use]
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        Self { storage }
    }
}

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Option<Theme> {
        let value = self.storage.as_ref()?.get_item(THEME_KEY).ok()??;
        Theme::from_str_opt(&value)
    }

    fn store(&mut self, theme: Theme) {
        if let Some(storage) = &self.storage {
            let _ = storage.set_item(THEME_KEY, theme.as_str());
        }
    }
}

/// Whether the platform prefers a dark color scheme.
///
/// Queries `matchMedia("(prefers-color-scheme: dark)")`; any failure reads
/// as "no preference".
#[must_use]
pub fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|mql| mql.matches())
}
