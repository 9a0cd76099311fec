//! Editing session for tabkit widgets.
//!
//! A [`Session`] applies form edits to a configuration, enforces the mode
//! rules from [`coordinator`], and keeps a [`RenderSurface`] and the raw
//! markup buffer in step with the configuration.
//!
//! # Example
//!
//! ```
//! use tabkit_editor::{MemorySurface, Session};
//! use tabkit_model::{Configuration, Mode};
//!
//! let mut session = Session::new(Configuration::default(), MemorySurface::new());
//! session.enable_mode(Mode::Slider);
//!
//! assert_eq!(session.config().metrics.content_height, 400);
//! assert!(session.surface().markup().contains("<title>Custom Slider</title>"));
//!
//! let artifact = session.export();
//! assert_eq!(artifact.file_name, "index.html");
//! ```

mod clipboard;
pub mod coordinator;
mod error;
mod preview;
mod session;

pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard};
pub use coordinator::{Availability, Control, FieldAvailability};
pub use error::EditError;
pub use preview::{MemorySurface, NullSurface, RenderSurface, SANDBOX_POLICY};
pub use session::{EXPORT_FILE_NAME, ExportArtifact, Session};
