//! The configuration record and its option enums.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseOptionError;
use crate::tab::TabEntry;

/// Number of placeholder tabs a fresh configuration starts with.
const DEFAULT_TAB_COUNT: usize = 3;

/// Presentation mode. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Tab strip on one edge with a single visible content pane.
    #[default]
    Tabs,
    /// Horizontal paging carousel with dot indicators.
    Slider,
    /// Grid of cards that flip to reveal their content.
    FlipCard,
    /// Vertically stacked single-open sections.
    Accordion,
}

impl Mode {
    /// All modes in display order.
    pub const ALL: [Self; 4] = [Self::Tabs, Self::Slider, Self::FlipCard, Self::Accordion];

    /// Lowercase name used in config files and on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tabs => "tabs",
            Self::Slider => "slider",
            Self::FlipCard => "flip-card",
            Self::Accordion => "accordion",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| {
                ParseOptionError::new("mode", s, "tabs, slider, flip-card, accordion")
            })
    }
}

/// Edge the tab strip is placed on. Only meaningful in [`Mode::Tabs`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TabPosition {
    #[default]
    Top,
    Left,
    Right,
    Bottom,
}

impl TabPosition {
    /// Whether the strip runs horizontally (top or bottom edge).
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

/// Selected color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    /// At least one color was set by hand.
    #[default]
    Custom,
    Light,
    Dark,
}

impl FromStr for Theme {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "custom" => Ok(Self::Custom),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ParseOptionError::new("theme", s, "custom, light, dark")),
        }
    }
}

/// Closed set of font stacks offered by the typography control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontFamily {
    #[default]
    Arial,
    Helvetica,
    TimesNewRoman,
    Georgia,
    CourierNew,
}

impl FontFamily {
    /// CSS `font-family` value for this stack.
    #[must_use]
    pub fn css_stack(self) -> &'static str {
        match self {
            Self::Arial => "Arial, sans-serif",
            Self::Helvetica => "'Helvetica Neue', Helvetica, sans-serif",
            Self::TimesNewRoman => "'Times New Roman', Times, serif",
            Self::Georgia => "Georgia, serif",
            Self::CourierNew => "'Courier New', Courier, monospace",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Arial => "Arial",
            Self::Helvetica => "Helvetica",
            Self::TimesNewRoman => "Times New Roman",
            Self::Georgia => "Georgia",
            Self::CourierNew => "Courier New",
        }
    }
}

/// Color fields, each a CSS color string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colors {
    pub tab_background: String,
    pub active_tab_background: String,
    pub tab_text: String,
    pub title_group_background: String,
    pub content_background: String,
    pub content_text: String,
    pub title_border: String,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            tab_background: "#264180".to_owned(),
            active_tab_background: "#1b8ffa".to_owned(),
            tab_text: "#ffffff".to_owned(),
            title_group_background: "#f0f0f0".to_owned(),
            content_background: "#ffffff".to_owned(),
            content_text: "#000000".to_owned(),
            title_border: "#cccccc".to_owned(),
        }
    }
}

/// Bounded integer style fields, all in pixels except the intensities.
///
/// Ranges are described by [`NumericField::range`](crate::NumericField::range).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    pub corner_radius: u32,
    pub shadow_intensity: u32,
    pub tab_height: u32,
    pub font_size: u32,
    pub content_padding: u32,
    pub content_height: u32,
    pub title_border_size: u32,
    pub title_shadow_intensity: u32,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            corner_radius: 5,
            shadow_intensity: 0,
            tab_height: 50,
            font_size: 16,
            content_padding: 20,
            content_height: 200,
            title_border_size: 1,
            title_shadow_intensity: 0,
        }
    }
}

/// The exportable widget configuration.
///
/// The tab list always holds between [`MIN_TABS`](crate::MIN_TABS) and
/// [`MAX_TABS`](crate::MAX_TABS) entries when driven through an editing
/// session; the record itself does not enforce it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub tabs: Vec<TabEntry>,
    pub mode: Mode,
    /// Stored tab position. Kept across mode switches; read it through
    /// [`effective_tab_position`](Self::effective_tab_position) when rendering.
    pub tab_position: TabPosition,
    pub colors: Colors,
    pub metrics: Metrics,
    pub full_page_layout: bool,
    pub auto_height: bool,
    pub animated: bool,
    pub theme: Theme,
    pub font_family: FontFamily,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            tabs: (0..DEFAULT_TAB_COUNT).map(TabEntry::placeholder).collect(),
            mode: Mode::default(),
            tab_position: TabPosition::default(),
            colors: Colors::default(),
            metrics: Metrics::default(),
            full_page_layout: false,
            auto_height: true,
            animated: true,
            theme: Theme::default(),
            font_family: FontFamily::default(),
        }
    }
}

impl Configuration {
    /// Tab position as it applies to the active mode.
    ///
    /// Only [`Mode::Tabs`] honors the stored position; every other mode lays
    /// titles out from the top.
    #[must_use]
    pub fn effective_tab_position(&self) -> TabPosition {
        match self.mode {
            Mode::Tabs => self.tab_position,
            Mode::Slider | Mode::FlipCard | Mode::Accordion => TabPosition::Top,
        }
    }

    /// Whether the dark theme preset is the selected theme.
    #[must_use]
    pub fn is_dark_theme(&self) -> bool {
        self.theme == Theme::Dark
    }
}
