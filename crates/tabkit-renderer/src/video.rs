//! Video link normalization.
//!
//! Turns a pasted share, watch or embed URL into an embeddable player URL.
//! Unrecognized input yields `None`; callers omit the video element.

use std::sync::LazyLock;

use regex::Regex;

/// Length every accepted video id must have.
const VIDEO_ID_LEN: usize = 11;

/// Prefix of the embeddable player URL.
const EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// Matches the id-bearing segment of the accepted URL shapes.
///
/// The leading `.*` is greedy, so when several markers appear the last one
/// wins.
static VIDEO_LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*(youtu\.be/|v/|u/\w/|embed/|\?v=|&v=)([^#&?]*).*").unwrap()
});

/// Extract the video id from `link`.
///
/// Returns `None` when no marker matches or the id is not exactly eleven
/// characters long.
///
/// ```
/// use tabkit_renderer::video_id;
///
/// assert_eq!(video_id("https://youtu.be/dQw4w9WgXcQ"), Some("dQw4w9WgXcQ"));
/// assert_eq!(video_id("https://youtu.be/short"), None);
/// ```
#[must_use]
pub fn video_id(link: &str) -> Option<&str> {
    let captures = VIDEO_LINK_PATTERN.captures(link)?;
    let id = captures.get(2)?.as_str();
    (id.chars().count() == VIDEO_ID_LEN).then_some(id)
}

/// Build the embeddable player URL for `link`.
///
/// ```
/// use tabkit_renderer::embed_url;
///
/// assert_eq!(
///     embed_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ").as_deref(),
///     Some("https://www.youtube.com/embed/dQw4w9WgXcQ"),
/// );
/// ```
#[must_use]
pub fn embed_url(link: &str) -> Option<String> {
    video_id(link).map(|id| format!("{EMBED_BASE}{id}"))
}
