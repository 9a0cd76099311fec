//! The editing session.
//!
//! [`Session`] owns the configuration, the raw markup buffer and a
//! [`RenderSurface`]. Every configuration edit ends in [`Session::derive`],
//! which renders once and pushes the result to both the surface and the
//! buffer. Raw edits flow the other way only as far as the surface: the
//! configuration is never rebuilt from markup, and the next configuration
//! edit replaces the buffer.

use tabkit_model::{
    ColorField, Configuration, FontFamily, MAX_TABS, MIN_TABS, Mode, NumericField, TabEntry,
    TabPosition, Theme, ThemePreset,
};

use crate::clipboard::Clipboard;
use crate::coordinator::{self, FieldAvailability};
use crate::error::EditError;
use crate::preview::RenderSurface;

/// File name of the exported document.
pub const EXPORT_FILE_NAME: &str = "index.html";

/// A downloadable document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: &'static str,
    pub contents: String,
}

/// Interactive editing state bound to a preview surface.
pub struct Session<S> {
    config: Configuration,
    selected: usize,
    code_view: bool,
    raw: String,
    surface: S,
}

impl<S: RenderSurface> Session<S> {
    /// Start a session and mount the initial document.
    ///
    /// An empty tab list is given one placeholder tab.
    pub fn new(mut config: Configuration, surface: S) -> Self {
        ensure_tab(&mut config);
        let mut session = Self {
            config,
            selected: 0,
            code_view: false,
            raw: String::new(),
            surface,
        };
        session.derive();
        session
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Index of the tab the content fields edit.
    pub fn selected_tab(&self) -> usize {
        self.selected
    }

    pub fn selected_entry(&self) -> &TabEntry {
        &self.config.tabs[self.selected]
    }

    pub fn code_view(&self) -> bool {
        self.code_view
    }

    /// Raw markup buffer, as rendered or as last edited by hand.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Which controls currently apply.
    pub fn availability(&self) -> FieldAvailability {
        FieldAvailability::of(&self.config)
    }

    /// Render the configuration and publish it to the surface and the raw
    /// buffer.
    pub fn derive(&mut self) {
        self.raw = tabkit_renderer::render(&self.config);
        self.surface.mount(&self.raw);
    }

    /// Replace the whole configuration, e.g. after reloading it from disk.
    pub fn replace_config(&mut self, mut config: Configuration) {
        ensure_tab(&mut config);
        self.config = config;
        self.clamp_selection();
        self.derive();
    }

    // Tab list

    /// Grow or shrink the tab list to `count` entries.
    ///
    /// New entries are placeholders; removed entries are taken from the end.
    pub fn set_tab_count(&mut self, count: usize) -> Result<(), EditError> {
        if !(MIN_TABS..=MAX_TABS).contains(&count) {
            return Err(EditError::TabCount(count));
        }
        let tabs = &mut self.config.tabs;
        if count < tabs.len() {
            tabs.truncate(count);
        } else {
            let start = tabs.len();
            tabs.extend((start..count).map(TabEntry::placeholder));
        }
        self.clamp_selection();
        self.derive();
        Ok(())
    }

    /// Append a placeholder tab. Does nothing at the maximum tab count.
    pub fn add_tab(&mut self) {
        let count = self.config.tabs.len();
        if count >= MAX_TABS {
            tracing::debug!(count, "Tab limit reached, not adding");
            return;
        }
        self.config.tabs.push(TabEntry::placeholder(count));
        self.derive();
    }

    /// Remove the last tab. Does nothing when only one tab is left.
    pub fn remove_tab(&mut self) {
        if self.config.tabs.len() <= MIN_TABS {
            return;
        }
        self.config.tabs.pop();
        self.clamp_selection();
        self.derive();
    }

    /// Choose the tab the content fields edit.
    pub fn select_tab(&mut self, index: usize) -> Result<(), EditError> {
        let count = self.config.tabs.len();
        if index >= count {
            return Err(EditError::NoSuchTab { index, count });
        }
        self.selected = index;
        Ok(())
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.config.tabs[self.selected].title = title.into();
        self.derive();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.config.tabs[self.selected].content = content.into();
        self.derive();
    }

    /// Set the selected tab's video link. A non-empty link makes room for
    /// the player.
    pub fn set_video_link(&mut self, link: impl Into<String>) {
        let tab = &mut self.config.tabs[self.selected];
        tab.video_link = link.into();
        if tab.has_video_link() {
            if tabkit_renderer::embed_url(&tab.video_link).is_none() {
                tracing::debug!(link = %tab.video_link, "Unrecognized video link, no player");
            }
            coordinator::raise_content_height(&mut self.config.metrics);
        }
        self.derive();
    }

    // Modes

    pub fn enable_mode(&mut self, mode: Mode) {
        coordinator::enable_mode(&mut self.config, mode);
        self.derive();
    }

    pub fn disable_mode(&mut self, mode: Mode) {
        coordinator::disable_mode(&mut self.config, mode);
        self.derive();
    }

    /// Set the stored tab position. Outside tabs mode it takes effect once
    /// tabs mode is active again.
    pub fn set_tab_position(&mut self, position: TabPosition) {
        self.config.tab_position = position;
        self.derive();
    }

    // Colors

    /// Set one color. Any manual color edit makes the theme custom.
    pub fn set_color(&mut self, field: ColorField, value: impl Into<String>) {
        *field.slot(&mut self.config.colors) = value.into();
        self.config.theme = Theme::Custom;
        self.derive();
    }

    /// Select a theme. Presets overwrite their colors; [`Theme::Custom`]
    /// keeps the current colors.
    pub fn apply_theme(&mut self, theme: Theme) {
        if let Some(preset) = ThemePreset::for_theme(theme) {
            preset.apply_to(&mut self.config.colors);
        }
        self.config.theme = theme;
        self.derive();
    }

    // Numbers and flags

    /// Set a numeric field. Values outside the field's range are rejected
    /// and the previous value stays.
    pub fn set_number(&mut self, field: NumericField, value: u32) -> Result<(), EditError> {
        let range = field.range();
        if !range.contains(value) {
            return Err(EditError::OutOfRange {
                field: field.key(),
                value,
                min: range.min,
                max: range.max,
            });
        }
        if !range.on_step(value) {
            return Err(EditError::OffStep {
                field: field.key(),
                value,
                step: range.step,
            });
        }
        field.set(&mut self.config.metrics, value);
        self.derive();
        Ok(())
    }

    pub fn set_full_page_layout(&mut self, enabled: bool) {
        self.config.full_page_layout = enabled;
        self.derive();
    }

    pub fn set_auto_height(&mut self, enabled: bool) {
        self.config.auto_height = enabled;
        self.derive();
    }

    pub fn set_animated(&mut self, enabled: bool) {
        self.config.animated = enabled;
        self.derive();
    }

    pub fn set_font_family(&mut self, family: FontFamily) {
        self.config.font_family = family;
        self.derive();
    }

    // Raw markup

    /// Switch between the preview and the raw markup view.
    pub fn set_code_view(&mut self, enabled: bool) {
        self.code_view = enabled;
    }

    /// Replace the raw markup by hand and show it on the surface.
    pub fn edit_raw(&mut self, text: impl Into<String>) {
        self.raw = text.into();
        self.surface.mount(&self.raw);
    }

    /// The document currently shown, ready to save.
    pub fn export(&self) -> ExportArtifact {
        ExportArtifact {
            file_name: EXPORT_FILE_NAME,
            contents: self.raw.clone(),
        }
    }

    /// Copy the raw markup. Failures are logged and reported as `false`.
    pub fn copy_raw(&self, clipboard: &mut impl Clipboard) -> bool {
        match clipboard.set_text(&self.raw) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to copy markup to clipboard");
                false
            }
        }
    }

    fn clamp_selection(&mut self) {
        let last = self.config.tabs.len().saturating_sub(1);
        self.selected = self.selected.min(last);
    }
}

fn ensure_tab(config: &mut Configuration) {
    if config.tabs.is_empty() {
        config.tabs.push(TabEntry::placeholder(0));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::clipboard::{ClipboardError, MemoryClipboard};
    use crate::coordinator::Control;
    use crate::preview::MemorySurface;

    struct BrokenClipboard;

    impl Clipboard for BrokenClipboard {
        fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Unavailable("no display".to_owned()))
        }
    }

    fn session() -> Session<MemorySurface> {
        Session::new(Configuration::default(), MemorySurface::new())
    }

    #[test]
    fn test_new_session_mounts_document() {
        let session = session();
        assert_eq!(session.surface().mounts(), 1);
        assert_eq!(session.surface().markup(), session.raw());
        assert!(session.raw().contains("<title>Custom Tabs</title>"));
    }

    #[test]
    fn test_every_edit_rerenders() {
        let mut session = session();
        session.set_title("Overview");
        assert_eq!(session.surface().mounts(), 2);
        assert!(session.raw().contains(">Overview<"));
        assert_eq!(session.surface().markup(), session.raw());
    }

    #[test]
    fn test_accordion_after_slider() {
        let mut session = session();
        session.set_tab_position(TabPosition::Right);
        session.enable_mode(Mode::Slider);
        session.enable_mode(Mode::Accordion);

        let config = session.config();
        assert_eq!(config.mode, Mode::Accordion);
        assert_eq!(config.effective_tab_position(), TabPosition::Top);
        assert!(session.raw().contains("<title>Accordion Tabs</title>"));
    }

    #[test]
    fn test_slider_content_height() {
        let mut session = session();
        session.enable_mode(Mode::Slider);
        assert_eq!(session.config().metrics.content_height, 400);

        let mut session = self::session();
        session.set_number(NumericField::ContentHeight, 450).unwrap();
        session.enable_mode(Mode::Slider);
        assert_eq!(session.config().metrics.content_height, 450);
    }

    #[test]
    fn test_tabs_accordion_tabs_restores_position() {
        let mut session = session();
        session.set_tab_position(TabPosition::Left);
        session.enable_mode(Mode::Accordion);
        assert!(!session.raw().contains("width: 200px;"));

        session.disable_mode(Mode::Accordion);
        assert_eq!(session.config().effective_tab_position(), TabPosition::Left);
        assert!(session.raw().contains("width: 200px;"));
    }

    #[test]
    fn test_video_link_raises_content_height() {
        let mut session = session();
        session.set_video_link("https://youtu.be/dQw4w9WgXcQ");
        assert_eq!(session.config().metrics.content_height, 400);
        assert!(session.raw().contains("https://www.youtube.com/embed/dQw4w9WgXcQ"));
    }

    #[test]
    fn test_empty_video_link_keeps_content_height() {
        let mut session = session();
        session.set_video_link("");
        assert_eq!(session.config().metrics.content_height, 200);
    }

    #[test]
    fn test_color_edit_reverts_theme_to_custom() {
        let mut session = session();
        session.apply_theme(Theme::Dark);
        assert_eq!(session.config().theme, Theme::Dark);
        assert_eq!(session.config().colors.tab_background, "#333333");

        session.set_color(ColorField::TitleBorder, "#ff0000");
        assert_eq!(session.config().theme, Theme::Custom);
        assert_eq!(session.config().colors.title_border, "#ff0000");
        // Preset colors stay in place
        assert_eq!(session.config().colors.tab_background, "#333333");
    }

    #[test]
    fn test_custom_theme_keeps_colors() {
        let mut session = session();
        session.apply_theme(Theme::Light);
        session.apply_theme(Theme::Custom);
        assert_eq!(session.config().theme, Theme::Custom);
        assert_eq!(session.config().colors.tab_background, "#f0f0f0");
    }

    #[test]
    fn test_availability_follows_mode() {
        let mut session = session();
        assert!(session.availability().get(Control::TabPosition).is_enabled());

        session.enable_mode(Mode::Slider);
        let view = session.availability();
        assert!(!view.get(Control::TabPosition).is_enabled());
        assert!(!view.get(Control::FlipCardToggle).is_enabled());
        assert!(view.get(Control::SliderToggle).is_enabled());
    }

    #[test]
    fn test_off_step_number_rejected() {
        let mut session = session();
        let mounts = session.surface().mounts();
        let err = session
            .set_number(NumericField::ContentHeight, 355)
            .unwrap_err();
        assert_eq!(
            err,
            EditError::OffStep {
                field: "layout.content_height",
                value: 355,
                step: 10,
            }
        );
        assert_eq!(session.config().metrics.content_height, 200);
        assert_eq!(session.surface().mounts(), mounts);
    }

    #[test]
    fn test_out_of_range_number_rejected() {
        let mut session = session();
        let mounts = session.surface().mounts();
        let err = session.set_number(NumericField::FontSize, 30).unwrap_err();
        assert_eq!(
            err,
            EditError::OutOfRange {
                field: "layout.font_size",
                value: 30,
                min: 12,
                max: 24,
            }
        );
        assert_eq!(session.config().metrics.font_size, 16);
        assert_eq!(session.surface().mounts(), mounts);
    }

    #[test]
    fn test_set_tab_count_bounds() {
        let mut session = session();
        assert_eq!(session.set_tab_count(0), Err(EditError::TabCount(0)));
        assert_eq!(session.set_tab_count(11), Err(EditError::TabCount(11)));
        assert_eq!(session.config().tabs.len(), 3);

        session.set_tab_count(5).unwrap();
        assert_eq!(session.config().tabs.len(), 5);
        assert_eq!(session.config().tabs[4].title, "Tab 5");
    }

    #[test]
    fn test_shrinking_clamps_selection() {
        let mut session = session();
        session.set_tab_count(6).unwrap();
        session.select_tab(5).unwrap();
        session.set_tab_count(2).unwrap();
        assert_eq!(session.selected_tab(), 1);

        session.remove_tab();
        assert_eq!(session.config().tabs.len(), 1);
        assert_eq!(session.selected_tab(), 0);
        session.remove_tab();
        assert_eq!(session.config().tabs.len(), 1);
    }

    #[test]
    fn test_add_tab_stops_at_limit() {
        let mut session = session();
        session.set_tab_count(MAX_TABS).unwrap();
        session.add_tab();
        assert_eq!(session.config().tabs.len(), MAX_TABS);
    }

    #[test]
    fn test_select_tab_out_of_bounds() {
        let mut session = session();
        assert_eq!(
            session.select_tab(3),
            Err(EditError::NoSuchTab { index: 3, count: 3 })
        );
        assert_eq!(session.selected_tab(), 0);
    }

    #[test]
    fn test_content_edits_target_selected_tab() {
        let mut session = session();
        session.select_tab(1).unwrap();
        session.set_content("second tab body");
        assert_eq!(session.config().tabs[1].content, "second tab body");
        assert_eq!(session.selected_entry().content, "second tab body");
        assert_ne!(session.config().tabs[0].content, "second tab body");
    }

    #[test]
    fn test_raw_edit_is_one_way() {
        let mut session = session();
        session.edit_raw("<p>hand written</p>");
        assert_eq!(session.surface().markup(), "<p>hand written</p>");
        assert_eq!(session.export().contents, "<p>hand written</p>");
        assert_eq!(session.config().tabs[0].title, "Tab 1");

        session.set_animated(false);
        assert_ne!(session.raw(), "<p>hand written</p>");
        assert!(session.raw().starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_code_view_keeps_raw_edits() {
        let mut session = session();
        session.edit_raw("edited");
        session.set_code_view(true);
        assert!(session.code_view());
        assert_eq!(session.raw(), "edited");
    }

    #[test]
    fn test_export_artifact() {
        let session = session();
        let artifact = session.export();
        assert_eq!(artifact.file_name, "index.html");
        assert_eq!(artifact.contents, session.surface().markup());
    }

    #[test]
    fn test_copy_raw() {
        let session = session();
        let mut clipboard = MemoryClipboard::new();
        assert!(session.copy_raw(&mut clipboard));
        assert_eq!(clipboard.text(), Some(session.raw()));
    }

    #[test]
    fn test_copy_raw_failure_is_not_an_error() {
        let session = session();
        assert!(!session.copy_raw(&mut BrokenClipboard));
        assert!(session.raw().starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_replace_config_clamps_selection() {
        let mut session = session();
        session.select_tab(2).unwrap();
        session.replace_config(Configuration {
            tabs: vec![TabEntry::new("Only", "")],
            ..Configuration::default()
        });
        assert_eq!(session.selected_tab(), 0);
        assert!(session.raw().contains(">Only<"));
    }

    #[test]
    fn test_empty_tab_list_gets_placeholder() {
        let config = Configuration {
            tabs: Vec::new(),
            ..Configuration::default()
        };
        let session = Session::new(config, MemorySurface::new());
        assert_eq!(session.config().tabs.len(), 1);
        assert_eq!(session.selected_entry().title, "Tab 1");
    }
}
