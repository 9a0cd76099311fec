//! Mode switching rules and per-control availability.
//!
//! The configuration stores a single [`Mode`], so mutual exclusion between
//! slider, flip-card and accordion is structural. What remains here is the
//! side effects of switching and the derived view of which controls apply.
//! Stored values of controls that do not apply are never touched, so
//! switching back restores them.

use tabkit_model::{Configuration, Metrics, Mode};

/// Content height guaranteed while a slider or an embedded video is shown.
pub const MEDIA_MIN_CONTENT_HEIGHT: u32 = 400;

/// Make `mode` the active mode.
pub fn enable_mode(config: &mut Configuration, mode: Mode) {
    if config.mode == mode {
        return;
    }
    tracing::debug!(from = %config.mode, to = %mode, "Switching mode");
    config.mode = mode;
    if mode == Mode::Slider {
        raise_content_height(&mut config.metrics);
    }
}

/// Turn `mode` off. Only the active mode can be turned off; it falls back
/// to [`Mode::Tabs`].
pub fn disable_mode(config: &mut Configuration, mode: Mode) {
    if config.mode == mode && mode != Mode::Tabs {
        tracing::debug!(from = %mode, "Mode disabled, returning to tabs");
        config.mode = Mode::Tabs;
    }
}

/// Raise the content height to at least [`MEDIA_MIN_CONTENT_HEIGHT`].
pub fn raise_content_height(metrics: &mut Metrics) {
    metrics.content_height = metrics.content_height.max(MEDIA_MIN_CONTENT_HEIGHT);
}

/// A control whose applicability depends on the mode or other settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    SliderToggle,
    FlipCardToggle,
    AccordionToggle,
    TabPosition,
    FullPageLayout,
    TabHeight,
    AutoHeight,
    ContentHeight,
    TitleBorderSize,
    TitleBorderColor,
    Animation,
}

impl Control {
    pub const ALL: [Self; 11] = [
        Self::SliderToggle,
        Self::FlipCardToggle,
        Self::AccordionToggle,
        Self::TabPosition,
        Self::FullPageLayout,
        Self::TabHeight,
        Self::AutoHeight,
        Self::ContentHeight,
        Self::TitleBorderSize,
        Self::TitleBorderColor,
        Self::Animation,
    ];
}

/// Whether a control applies, and why not when it doesn't.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Enabled,
    Disabled(&'static str),
}

impl Availability {
    #[must_use]
    pub fn is_enabled(self) -> bool {
        self == Self::Enabled
    }

    /// Reason shown next to a disabled control.
    #[must_use]
    pub fn reason(self) -> Option<&'static str> {
        match self {
            Self::Enabled => None,
            Self::Disabled(reason) => Some(reason),
        }
    }
}

/// Availability of every mode-dependent control for one configuration.
///
/// A pure view: computing it never changes the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldAvailability {
    mode: Mode,
    auto_height: bool,
}

impl FieldAvailability {
    #[must_use]
    pub fn of(config: &Configuration) -> Self {
        Self {
            mode: config.mode,
            auto_height: config.auto_height,
        }
    }

    /// Availability of a single control.
    #[must_use]
    pub fn get(&self, control: Control) -> Availability {
        let mode = self.mode;
        let disabled_in = |modes: &[Mode]| {
            if modes.contains(&mode) {
                Availability::Disabled(mode_reason(mode))
            } else {
                Availability::Enabled
            }
        };

        match control {
            Control::SliderToggle => disabled_in(&[Mode::FlipCard, Mode::Accordion]),
            Control::FlipCardToggle => disabled_in(&[Mode::Slider, Mode::Accordion]),
            Control::AccordionToggle => disabled_in(&[Mode::Slider, Mode::FlipCard]),
            Control::TabPosition => disabled_in(&[Mode::Slider, Mode::FlipCard, Mode::Accordion]),
            Control::FullPageLayout | Control::TabHeight | Control::AutoHeight => {
                disabled_in(&[Mode::FlipCard, Mode::Accordion])
            }
            Control::ContentHeight => {
                if mode != Mode::Tabs {
                    Availability::Disabled(mode_reason(mode))
                } else if self.auto_height {
                    Availability::Disabled("Auto height is on")
                } else {
                    Availability::Enabled
                }
            }
            Control::TitleBorderSize | Control::TitleBorderColor | Control::Animation => {
                disabled_in(&[Mode::Accordion])
            }
        }
    }

    /// All controls with their availability, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Control, Availability)> + '_ {
        Control::ALL.into_iter().map(|control| (control, self.get(control)))
    }
}

fn mode_reason(mode: Mode) -> &'static str {
    match mode {
        Mode::Tabs => "Not available in tabs mode",
        Mode::Slider => "Not available in slider mode",
        Mode::FlipCard => "Not available in flip-card mode",
        Mode::Accordion => "Not available in accordion mode",
    }
}
