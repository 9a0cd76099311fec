//! `tabkit export` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use tabkit_config::{CliSettings, Config};
use tabkit_editor::{NullSurface, Session};
use tabkit_model::{Mode, Theme};

use crate::clipboard::SystemClipboard;
use crate::error::CliError;
use crate::output::Output;
use crate::surface::{resolve_output, write_document};

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    /// Path to configuration file (default: auto-discover tabkit.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file or directory (overrides config).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Presentation mode: tabs, slider, flip-card or accordion (overrides config).
    #[arg(long)]
    mode: Option<Mode>,

    /// Color theme: custom, light or dark (overrides config).
    #[arg(long)]
    theme: Option<Theme>,

    /// Write the document to stdout instead of a file.
    #[arg(long, conflicts_with = "output")]
    stdout: bool,

    /// Also copy the document to the system clipboard.
    #[arg(long)]
    copy: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl ExportArgs {
    /// Execute the export command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the document can't be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            output: self.output,
            mode: self.mode,
            theme: self.theme,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            output.info(&format!("Using config: {}", path.display()));
        }

        let mode = config.widget.mode;
        let font = config.widget.font_family.label();
        let tab_count = config.widget.tabs.len();
        let session = Session::new(config.widget, NullSurface);
        for (control, reason) in session
            .availability()
            .iter()
            .filter_map(|(control, availability)| Some((control, availability.reason()?)))
        {
            tracing::info!(?control, reason, "Setting has no effect");
        }
        let artifact = session.export();

        if self.stdout {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(artifact.contents.as_bytes())?;
            stdout.flush()?;
        } else {
            let path = resolve_output(&config.output);
            write_document(&path, &artifact.contents)?;
            output.success(&format!(
                "Exported {mode} widget ({font}) with {tab_count} tab(s) to {}",
                path.display()
            ));
        }

        if self.copy {
            if session.copy_raw(&mut SystemClipboard) {
                output.success("Copied markup to clipboard");
            } else {
                output.warning("Clipboard unavailable, markup was not copied");
            }
        }

        Ok(())
    }
}
