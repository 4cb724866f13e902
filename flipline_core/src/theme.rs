// Copyright 2026 the Flipline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Light/dark theme preference and color palettes.
//!
//! The swap can be theme-linked: completing a swap also flips the page
//! between light and dark, and the preference is written to durable storage
//! through the [`ThemeStore`] seam. On the next load the stored value wins;
//! the platform's color-scheme preference is the fallback when nothing is
//! stored.

/// The page color scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    /// Light scheme (the page's original state).
    #[default]
    Light,
    /// Dark scheme.
    Dark,
}

impl Theme {
    /// Returns the other theme.
    #[inline]
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Storage string, `"light"` or `"dark"`.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parses a storage string produced by [`as_str`](Self::as_str).
    #[must_use]
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// The color-scheme variables a theme writes onto the surface.
///
/// Each entry is a `(variable, value)` pair; the web surface applies them as
/// CSS custom properties on the document root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeColors {
    /// Page background color.
    pub bg: &'static str,
    /// Foreground/text color.
    pub fg: &'static str,
    /// Accent color for interactive elements.
    pub accent: &'static str,
    /// Card/panel surface color.
    pub surface: &'static str,
}

impl ThemeColors {
    /// The light palette.
    pub const LIGHT: Self = Self {
        bg: "#f5f4f0",
        fg: "#1c1b1a",
        accent: "#b4552d",
        surface: "#ffffff",
    };

    /// The dark palette.
    pub const DARK: Self = Self {
        bg: "#16151a",
        fg: "#e8e6e3",
        accent: "#e08d5a",
        surface: "#221f28",
    };

    /// Returns the palette for `theme`.
    #[inline]
    #[must_use]
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::LIGHT,
            Theme::Dark => Self::DARK,
        }
    }

    /// Iterates the `(css-variable, value)` pairs.
    pub fn variables(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        [
            ("--bg", self.bg),
            ("--fg", self.fg),
            ("--accent", self.accent),
            ("--surface", self.surface),
        ]
        .into_iter()
    }
}

/// Durable storage for the theme preference.
///
/// The web backend implements this over `localStorage`; the harness keeps an
/// in-memory value. Failures are swallowed by implementations — persistence
/// is best-effort and never surfaces an error to the page.
pub trait ThemeStore {
    /// Reads the stored preference, if any.
    fn load(&self) -> Option<Theme>;

    /// Writes the preference.
    fn store(&mut self, theme: Theme);
}

/// Resolves the theme to use at startup.
///
/// Precedence: a stored preference wins; otherwise the platform's
/// color-scheme preference; otherwise light.
#[inline]
#[must_use]
pub fn resolve_initial(stored: Option<Theme>, system_prefers_dark: bool) -> Theme {
    match stored {
        Some(theme) => theme,
        None if system_prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn storage_string_round_trips() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_str_opt(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::from_str_opt("mauve"), None);
    }

    #[test]
    fn stored_preference_wins() {
        assert_eq!(resolve_initial(Some(Theme::Light), true), Theme::Light);
        assert_eq!(resolve_initial(Some(Theme::Dark), false), Theme::Dark);
    }

    #[test]
    fn system_preference_is_fallback() {
        assert_eq!(resolve_initial(None, true), Theme::Dark);
        assert_eq!(resolve_initial(None, false), Theme::Light);
    }

    #[test]
    fn palettes_differ() {
        assert_ne!(ThemeColors::LIGHT, ThemeColors::DARK);
        assert_eq!(ThemeColors::for_theme(Theme::Dark), ThemeColors::DARK);
    }

    #[test]
    fn variables_cover_all_fields() {
        let names: alloc::vec::Vec<_> = ThemeColors::LIGHT.variables().map(|(k, _)| k).collect();
        assert_eq!(names, ["--bg", "--fg", "--accent", "--surface"]);
    }
}
