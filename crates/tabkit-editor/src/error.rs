use tabkit_model::{MAX_TABS, MIN_TABS};

/// Rejected edit. The session state is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    /// Numeric value outside the field's input range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Config key of the field (e.g., "`layout.font_size`").
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
    /// Numeric value between two slider steps.
    #[error("{field} must move in steps of {step}, got {value}")]
    OffStep {
        field: &'static str,
        value: u32,
        step: u32,
    },
    /// Tab index past the end of the tab list.
    #[error("no tab at index {index} (tab count is {count})")]
    NoSuchTab { index: usize, count: usize },
    /// Tab list would leave its allowed size.
    #[error("tab count must be between {} and {}, got {}", MIN_TABS, MAX_TABS, .0)]
    TabCount(usize),
}
