//! Preview surfaces.
//!
//! A surface displays one complete document at a time. Every mount replaces
//! the previous document.

/// Sandbox flags for hosts that display the preview in a frame.
///
/// Scripts and popups run; top-level navigation and same-origin access do
/// not.
pub const SANDBOX_POLICY: &str = "allow-scripts allow-popups allow-popups-to-escape-sandbox";

/// Host display for rendered markup.
pub trait RenderSurface {
    /// Replace the displayed document with `markup`.
    fn mount(&mut self, markup: &str);
}

/// [`RenderSurface`] that keeps the mounted document in memory.
#[derive(Debug, Default)]
pub struct MemorySurface {
    markup: String,
    mounts: usize,
}

impl MemorySurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently mounted document.
    #[must_use]
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Number of mounts so far.
    #[must_use]
    pub fn mounts(&self) -> usize {
        self.mounts
    }
}

impl RenderSurface for MemorySurface {
    fn mount(&mut self, markup: &str) {
        markup.clone_into(&mut self.markup);
        self.mounts += 1;
    }
}

/// Surface that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl RenderSurface for NullSurface {
    fn mount(&mut self, _markup: &str) {}
}
