//! Field identifiers and their input ranges.
//!
//! Form collaborators address individual fields through [`NumericField`] and
//! [`ColorField`] instead of reaching into the record directly, which lets
//! the editing session apply the range and theme rules in one place.

use crate::config::{Colors, Metrics};

/// Inclusive bounds and slider step for a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRange {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl FieldRange {
    const fn new(min: u32, max: u32, step: u32) -> Self {
        Self { min, max, step }
    }

    /// Whether `value` lies within the bounds.
    #[must_use]
    pub fn contains(self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Whether `value` is reachable from `min` in whole steps.
    #[must_use]
    pub fn on_step(self, value: u32) -> bool {
        value
            .checked_sub(self.min)
            .is_some_and(|offset| offset % self.step == 0)
    }
}

/// A bounded integer field of [`Metrics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    CornerRadius,
    ShadowIntensity,
    TabHeight,
    FontSize,
    ContentPadding,
    ContentHeight,
    TitleBorderSize,
    TitleShadowIntensity,
}

impl NumericField {
    pub const ALL: [Self; 8] = [
        Self::CornerRadius,
        Self::ShadowIntensity,
        Self::TabHeight,
        Self::FontSize,
        Self::ContentPadding,
        Self::ContentHeight,
        Self::TitleBorderSize,
        Self::TitleShadowIntensity,
    ];

    /// Input bounds for this field.
    #[must_use]
    pub fn range(self) -> FieldRange {
        match self {
            Self::CornerRadius | Self::ShadowIntensity => FieldRange::new(0, 20, 1),
            Self::TabHeight => FieldRange::new(30, 100, 1),
            Self::FontSize => FieldRange::new(12, 24, 1),
            Self::ContentPadding => FieldRange::new(0, 50, 1),
            Self::ContentHeight => FieldRange::new(100, 500, 10),
            Self::TitleBorderSize | Self::TitleShadowIntensity => FieldRange::new(0, 10, 1),
        }
    }

    /// Dotted key used in config files and error messages.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::CornerRadius => "layout.corner_radius",
            Self::ShadowIntensity => "layout.shadow_intensity",
            Self::TabHeight => "layout.tab_height",
            Self::FontSize => "layout.font_size",
            Self::ContentPadding => "layout.content_padding",
            Self::ContentHeight => "layout.content_height",
            Self::TitleBorderSize => "layout.title_border_size",
            Self::TitleShadowIntensity => "layout.title_shadow_intensity",
        }
    }

    /// Read this field from `metrics`.
    #[must_use]
    pub fn get(self, metrics: &Metrics) -> u32 {
        match self {
            Self::CornerRadius => metrics.corner_radius,
            Self::ShadowIntensity => metrics.shadow_intensity,
            Self::TabHeight => metrics.tab_height,
            Self::FontSize => metrics.font_size,
            Self::ContentPadding => metrics.content_padding,
            Self::ContentHeight => metrics.content_height,
            Self::TitleBorderSize => metrics.title_border_size,
            Self::TitleShadowIntensity => metrics.title_shadow_intensity,
        }
    }

    /// Write this field in `metrics` without range checks.
    pub fn set(self, metrics: &mut Metrics, value: u32) {
        let slot = match self {
            Self::CornerRadius => &mut metrics.corner_radius,
            Self::ShadowIntensity => &mut metrics.shadow_intensity,
            Self::TabHeight => &mut metrics.tab_height,
            Self::FontSize => &mut metrics.font_size,
            Self::ContentPadding => &mut metrics.content_padding,
            Self::ContentHeight => &mut metrics.content_height,
            Self::TitleBorderSize => &mut metrics.title_border_size,
            Self::TitleShadowIntensity => &mut metrics.title_shadow_intensity,
        };
        *slot = value;
    }
}

/// A color field of [`Colors`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorField {
    TabBackground,
    ActiveTabBackground,
    TabText,
    TitleGroupBackground,
    ContentBackground,
    ContentText,
    TitleBorder,
}

impl ColorField {
    pub const ALL: [Self; 7] = [
        Self::TabBackground,
        Self::ActiveTabBackground,
        Self::TabText,
        Self::TitleGroupBackground,
        Self::ContentBackground,
        Self::ContentText,
        Self::TitleBorder,
    ];

    /// Dotted key used in config files and error messages.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::TabBackground => "colors.tab_background",
            Self::ActiveTabBackground => "colors.active_tab_background",
            Self::TabText => "colors.tab_text",
            Self::TitleGroupBackground => "colors.title_group_background",
            Self::ContentBackground => "colors.content_background",
            Self::ContentText => "colors.content_text",
            Self::TitleBorder => "colors.title_border",
        }
    }

    /// Read this field from `colors`.
    #[must_use]
    pub fn get(self, colors: &Colors) -> &str {
        match self {
            Self::TabBackground => &colors.tab_background,
            Self::ActiveTabBackground => &colors.active_tab_background,
            Self::TabText => &colors.tab_text,
            Self::TitleGroupBackground => &colors.title_group_background,
            Self::ContentBackground => &colors.content_background,
            Self::ContentText => &colors.content_text,
            Self::TitleBorder => &colors.title_border,
        }
    }

    /// Mutable access to this field in `colors`.
    pub fn slot(self, colors: &mut Colors) -> &mut String {
        match self {
            Self::TabBackground => &mut colors.tab_background,
            Self::ActiveTabBackground => &mut colors.active_tab_background,
            Self::TabText => &mut colors.tab_text,
            Self::TitleGroupBackground => &mut colors.title_group_background,
            Self::ContentBackground => &mut colors.content_background,
            Self::ContentText => &mut colors.content_text,
            Self::TitleBorder => &mut colors.title_border,
        }
    }
}
