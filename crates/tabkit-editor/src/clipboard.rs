//! System clipboard seam.
//!
//! The session only needs to place text on a clipboard. Hosts provide the
//! backend; [`MemoryClipboard`] keeps the text in memory for headless use.

/// Destination for copied markup.
pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard write failure.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// No clipboard could be opened (headless session, missing display).
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
    /// The clipboard was opened but refused the write.
    #[error("Clipboard rejected the write: {0}")]
    Rejected(String),
}

/// In-memory [`Clipboard`].
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last copied text.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.text = Some(text.to_owned());
        Ok(())
    }
}
