//! Render surface that writes each mounted document to disk.

use std::path::{Path, PathBuf};

use tabkit_editor::{EXPORT_FILE_NAME, RenderSurface};

/// Writes every mounted document to `path`, replacing the previous one.
///
/// Mount cannot fail from the session's point of view; write errors are
/// logged and remembered until the next successful write.
pub(crate) struct FileSurface {
    path: PathBuf,
    last_error: Option<std::io::Error>,
}

impl FileSurface {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self {
            path,
            last_error: None,
        }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Error from the most recent write, if it failed.
    pub(crate) fn take_error(&mut self) -> Option<std::io::Error> {
        self.last_error.take()
    }
}

impl RenderSurface for FileSurface {
    fn mount(&mut self, markup: &str) {
        match write_document(&self.path, markup) {
            Ok(()) => {
                tracing::info!(path = %self.path.display(), bytes = markup.len(), "Wrote document");
                self.last_error = None;
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to write document");
                self.last_error = Some(e);
            }
        }
    }
}

/// Resolve the export destination: a directory receives `index.html`.
pub(crate) fn resolve_output(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(EXPORT_FILE_NAME)
    } else {
        path.to_path_buf()
    }
}

/// Write `markup` to `path`, creating parent directories.
pub(crate) fn write_document(path: &Path, markup: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, markup)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("index.html");
        let mut surface = FileSurface::new(path.clone());

        surface.mount("<p>first</p>");
        surface.mount("<p>second</p>");

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<p>second</p>");
        assert!(surface.take_error().is_none());
    }

    #[test]
    fn test_mount_failure_is_remembered() {
        let dir = tempfile::tempdir().unwrap();
        // A directory in place of the file makes the write fail
        let mut surface = FileSurface::new(dir.path().to_path_buf());
        surface.mount("<p>x</p>");
        assert!(surface.take_error().is_some());
        assert!(surface.take_error().is_none());
    }

    #[test]
    fn test_resolve_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(resolve_output(dir.path()), dir.path().join("index.html"));

        let file = dir.path().join("widget.html");
        assert_eq!(resolve_output(&file), file);
    }
}
