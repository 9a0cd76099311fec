//! Configuration management for tabkit.
//!
//! Parses `tabkit.toml` files with serde into a widget [`Configuration`]
//! plus export settings, with auto-discovery of the file in parent
//! directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Resolution order
//!
//! 1. defaults (three placeholder tabs, default colors and layout)
//! 2. top-level `mode` and `tab_position`
//! 3. `theme` preset colors
//! 4. explicit `[colors]` entries (any entry makes the theme custom)
//! 5. `[layout]` values and `[[tabs]]`
//! 6. CLI settings
//!
//! ## Path expansion
//!
//! `export.output` supports `~` and `${VAR}` / `${VAR:-default}`. Relative
//! outputs are resolved against the directory holding the config file.

mod expand;

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tabkit_model::{
    ColorField, Configuration, FontFamily, MAX_TABS, MIN_TABS, Mode, NumericField, TabEntry,
    TabPosition, Theme, ThemePreset,
};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override export output path.
    pub output: Option<PathBuf>,
    /// Override presentation mode.
    pub mode: Option<Mode>,
    /// Override theme (preset colors are applied over file colors).
    pub theme: Option<Theme>,
}

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "tabkit.toml";

/// Default export file name.
const DEFAULT_OUTPUT: &str = "index.html";

/// Loaded configuration.
#[derive(Debug)]
pub struct Config {
    /// Widget configuration handed to the editor and renderer.
    pub widget: Configuration,
    /// Resolved export path.
    pub output: PathBuf,
    /// Path to the config file, if one was loaded.
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw file contents as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct ConfigRaw {
    mode: Option<Mode>,
    tab_position: Option<TabPosition>,
    theme: Option<Theme>,
    export: ExportRaw,
    colors: ColorsRaw,
    layout: LayoutRaw,
    tabs: Option<Vec<TabEntry>>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct ExportRaw {
    output: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct ColorsRaw {
    tab_background: Option<String>,
    active_tab_background: Option<String>,
    tab_text: Option<String>,
    title_group_background: Option<String>,
    content_background: Option<String>,
    content_text: Option<String>,
    title_border: Option<String>,
}

impl ColorsRaw {
    fn entries(&self) -> [(ColorField, Option<&String>); 7] {
        [
            (ColorField::TabBackground, self.tab_background.as_ref()),
            (
                ColorField::ActiveTabBackground,
                self.active_tab_background.as_ref(),
            ),
            (ColorField::TabText, self.tab_text.as_ref()),
            (
                ColorField::TitleGroupBackground,
                self.title_group_background.as_ref(),
            ),
            (ColorField::ContentBackground, self.content_background.as_ref()),
            (ColorField::ContentText, self.content_text.as_ref()),
            (ColorField::TitleBorder, self.title_border.as_ref()),
        ]
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct LayoutRaw {
    corner_radius: Option<u32>,
    shadow_intensity: Option<u32>,
    tab_height: Option<u32>,
    font_size: Option<u32>,
    content_padding: Option<u32>,
    content_height: Option<u32>,
    title_border_size: Option<u32>,
    title_shadow_intensity: Option<u32>,
    full_page: Option<bool>,
    auto_height: Option<bool>,
    animated: Option<bool>,
    font_family: Option<FontFamily>,
}

impl LayoutRaw {
    fn numbers(&self) -> [(NumericField, Option<u32>); 8] {
        [
            (NumericField::CornerRadius, self.corner_radius),
            (NumericField::ShadowIntensity, self.shadow_intensity),
            (NumericField::TabHeight, self.tab_height),
            (NumericField::FontSize, self.font_size),
            (NumericField::ContentPadding, self.content_padding),
            (NumericField::ContentHeight, self.content_height),
            (NumericField::TitleBorderSize, self.title_border_size),
            (
                NumericField::TitleShadowIntensity,
                self.title_shadow_intensity,
            ),
        ]
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`export.output`").
        field: String,
        /// Error message (e.g., "${`OUT_DIR`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a numeric field to lie within its input range, on a step.
fn require_in_range(field: NumericField, value: u32) -> Result<(), ConfigError> {
    let range = field.range();
    if !range.contains(value) {
        return Err(ConfigError::Validation(format!(
            "{} must be between {} and {}, got {value}",
            field.key(),
            range.min,
            range.max
        )));
    }
    if !range.on_step(value) {
        return Err(ConfigError::Validation(format!(
            "{} must move in steps of {}, got {value}",
            field.key(),
            range.step
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `tabkit.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails or
    /// a value is out of range.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            tracing::debug!(path = %discovered.display(), "Discovered config file");
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Parse configuration from TOML text.
    ///
    /// Relative output paths are resolved against `base`.
    ///
    /// # Errors
    ///
    /// Returns error if parsing, expansion or validation fails.
    pub fn from_toml(content: &str, base: &Path) -> Result<Self, ConfigError> {
        let raw: ConfigRaw = toml::from_str(content)?;
        raw.validate()?;

        let output = match raw.export.output.as_deref() {
            Some(output) => {
                require_non_empty(output, "export.output")?;
                base.join(expand::expand_path(output, "export.output")?)
            }
            None => base.join(DEFAULT_OUTPUT),
        };

        Ok(Self {
            widget: raw.into_widget(),
            output,
            config_path: None,
        })
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(output) = &settings.output {
            self.output.clone_from(output);
        }
        if let Some(mode) = settings.mode {
            self.widget.mode = mode;
        }
        if let Some(theme) = settings.theme {
            if let Some(preset) = ThemePreset::for_theme(theme) {
                preset.apply_to(&mut self.widget.colors);
            }
            self.widget.theme = theme;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with output relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with output relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            widget: Configuration::default(),
            output: base.join(DEFAULT_OUTPUT),
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config_dir = path.parent().unwrap_or(Path::new("."));
        let mut config = Self::from_toml(&content, config_dir)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }
}

impl ConfigRaw {
    /// Validate values that the model cannot represent out of range.
    fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in self.layout.numbers() {
            if let Some(value) = value {
                require_in_range(field, value)?;
            }
        }

        for (field, value) in self.colors.entries() {
            if let Some(value) = value {
                require_non_empty(value, field.key())?;
            }
        }

        if let Some(tabs) = &self.tabs {
            if tabs.len() < MIN_TABS {
                return Err(ConfigError::Validation(
                    "tabs must contain at least one entry".to_owned(),
                ));
            }
            if tabs.len() > MAX_TABS {
                return Err(ConfigError::Validation(format!(
                    "tabs cannot contain more than {MAX_TABS} entries, got {}",
                    tabs.len()
                )));
            }
        }

        Ok(())
    }

    /// Build the widget configuration on top of the defaults.
    fn into_widget(self) -> Configuration {
        let mut widget = Configuration::default();

        if let Some(mode) = self.mode {
            widget.mode = mode;
        }
        if let Some(position) = self.tab_position {
            widget.tab_position = position;
        }
        if let Some(theme) = self.theme {
            if let Some(preset) = ThemePreset::for_theme(theme) {
                preset.apply_to(&mut widget.colors);
            }
            widget.theme = theme;
        }

        for (field, value) in self.colors.entries() {
            if let Some(value) = value {
                value.clone_into(field.slot(&mut widget.colors));
                widget.theme = Theme::Custom;
            }
        }

        for (field, value) in self.layout.numbers() {
            if let Some(value) = value {
                field.set(&mut widget.metrics, value);
            }
        }
        let layout = self.layout;
        if let Some(full_page) = layout.full_page {
            widget.full_page_layout = full_page;
        }
        if let Some(auto_height) = layout.auto_height {
            widget.auto_height = auto_height;
        }
        if let Some(animated) = layout.animated {
            widget.animated = animated;
        }
        if let Some(font_family) = layout.font_family {
            widget.font_family = font_family;
        }

        if let Some(tabs) = self.tabs {
            widget.tabs = tabs;
        }

        widget
    }
}
