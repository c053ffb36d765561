//! Theme model and resolution rules.
//!
//! The page has exactly two visual themes. An explicit user choice is
//! persisted and wins over the OS preference forever after; without one the
//! OS preference decides, both at startup and on later change events.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// The two visual presentations the page supports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a persisted value. Only the two exact literals are accepted;
    /// anything else (stale data, tampering) reads as no preference.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The literal used both in storage and as the `data-theme` value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Startup resolution: an explicit saved preference wins, otherwise the
    /// system color-scheme preference decides.
    pub fn resolve_initial(saved: Option<Self>, system_dark: bool) -> Self {
        saved.unwrap_or_else(|| Self::from_system(system_dark))
    }

    /// Map a `prefers-color-scheme: dark` match result to a theme.
    pub fn from_system(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    /// The opposite theme, used by the toggle control.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether dark is active; doubles as the toggle's `aria-pressed` value.
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Toggle button caption: names the theme a click switches to.
    pub fn toggle_text(self) -> &'static str {
        match self {
            Self::Light => "Dark Mode",
            Self::Dark => "Light Mode",
        }
    }

    /// Accessible label describing the action the toggle performs next.
    pub fn toggle_aria_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }
}
