//! Light and dark color presets.

use crate::config::{Colors, Theme};

/// A named bundle of the five themeable colors.
///
/// Presets leave the title-group background and title border alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePreset {
    pub tab_background: &'static str,
    pub active_tab_background: &'static str,
    pub tab_text: &'static str,
    pub content_background: &'static str,
    pub content_text: &'static str,
}

const LIGHT: ThemePreset = ThemePreset {
    tab_background: "#f0f0f0",
    active_tab_background: "#ffffff",
    tab_text: "#333333",
    content_background: "#ffffff",
    content_text: "#333333",
};

const DARK: ThemePreset = ThemePreset {
    tab_background: "#333333",
    active_tab_background: "#1a1a1a",
    tab_text: "#ffffff",
    content_background: "#1a1a1a",
    content_text: "#ffffff",
};

impl ThemePreset {
    /// Preset for `theme`, or `None` for [`Theme::Custom`].
    #[must_use]
    pub fn for_theme(theme: Theme) -> Option<Self> {
        match theme {
            Theme::Custom => None,
            Theme::Light => Some(LIGHT),
            Theme::Dark => Some(DARK),
        }
    }

    /// Overwrite the preset's colors in `colors`.
    pub fn apply_to(&self, colors: &mut Colors) {
        self.tab_background.clone_into(&mut colors.tab_background);
        self.active_tab_background
            .clone_into(&mut colors.active_tab_background);
        self.tab_text.clone_into(&mut colors.tab_text);
        self.content_background
            .clone_into(&mut colors.content_background);
        self.content_text.clone_into(&mut colors.content_text);
    }
}
