//! Tab entries and placeholder content.

use serde::{Deserialize, Serialize};

/// Minimum number of tabs a configuration holds.
pub const MIN_TABS: usize = 1;

/// Maximum number of tabs the count control allows.
pub const MAX_TABS: usize = 10;

const LOREM_PARAGRAPHS: [&str; 6] = [
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.",
    "Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.",
    "Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur.",
    "Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.",
    "Sed ut perspiciatis unde omnis iste natus error sit voluptatem accusantium doloremque laudantium.",
    "Nemo enim ipsam voluptatem quia voluptas sit aspernatur aut odit aut fugit, sed quia consequuntur magni dolores.",
];

/// Number of lorem paragraphs given to a freshly created tab.
const PLACEHOLDER_PARAGRAPHS: usize = 2;

/// A single tab: title, line-separated content and an optional video link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabEntry {
    /// Label shown on the tab, slide, card front or section header.
    pub title: String,
    /// Paragraphs separated by `\n`.
    #[serde(default)]
    pub content: String,
    /// Video share/watch/embed URL. Empty means no video.
    #[serde(default, rename = "video")]
    pub video_link: String,
}

impl TabEntry {
    /// Create a tab with the given title and content and no video.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            video_link: String::new(),
        }
    }

    /// Create the placeholder tab for the given zero-based position.
    #[must_use]
    pub fn placeholder(index: usize) -> Self {
        Self::new(
            format!("Tab {}", index + 1),
            placeholder_text(PLACEHOLDER_PARAGRAPHS),
        )
    }

    /// Whether a video link has been entered (recognized or not).
    #[must_use]
    pub fn has_video_link(&self) -> bool {
        !self.video_link.is_empty()
    }
}

/// Build `paragraphs` lines of lorem ipsum, each terminated by `\n`.
///
/// Lines cycle through a fixed list, so the output is deterministic.
///
/// ```
/// let text = tabkit_model::placeholder_text(2);
/// assert_eq!(text.lines().count(), 2);
/// assert!(text.ends_with('\n'));
/// ```
#[must_use]
pub fn placeholder_text(paragraphs: usize) -> String {
    let mut text = String::new();
    for paragraph in LOREM_PARAGRAPHS.iter().cycle().take(paragraphs) {
        text.push_str(paragraph);
        text.push('\n');
    }
    text
}
