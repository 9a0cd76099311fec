//! Configuration model for tabkit widgets.
//!
//! A [`Configuration`] is the flat record every other tabkit crate works
//! from: the ordered [`TabEntry`] list plus the style, layout, typography,
//! effect and [`Mode`] options. It carries no behavior beyond defaults and
//! small accessors; mode rules live in `tabkit-editor` and markup generation
//! in `tabkit-renderer`.
//!
//! # Example
//!
//! ```
//! use tabkit_model::{Configuration, Mode, TabPosition};
//!
//! let mut config = Configuration::default();
//! assert_eq!(config.tabs.len(), 3);
//!
//! config.tab_position = TabPosition::Left;
//! config.mode = Mode::Accordion;
//! assert_eq!(config.effective_tab_position(), TabPosition::Top);
//! ```

mod config;
mod field;
mod tab;
mod theme;

pub use config::{Colors, Configuration, FontFamily, Metrics, Mode, TabPosition, Theme};
pub use field::{ColorField, FieldRange, NumericField};
pub use tab::{MAX_TABS, MIN_TABS, TabEntry, placeholder_text};
pub use theme::ThemePreset;

/// Error returned when parsing a named option from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseOptionError {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

impl ParseOptionError {
    pub(crate) fn new(kind: &'static str, value: &str, expected: &'static str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
            expected,
        }
    }
}
