//! `tabkit watch` command implementation.
//!
//! The notify callback runs on the watcher's own thread and only forwards a
//! signal over a channel. Reloading and rendering happen on the main thread
//! once a burst of events has gone quiet.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use clap::Args;
use notify::{RecursiveMode, Watcher};
use tabkit_config::{CONFIG_FILENAME, CliSettings, Config};
use tabkit_editor::Session;

use crate::error::CliError;
use crate::output::Output;
use crate::surface::{FileSurface, resolve_output};

/// Quiet period that ends a burst of file events.
const DEBOUNCE: Duration = Duration::from_millis(100);

/// Arguments for the watch command.
#[derive(Args)]
pub(crate) struct WatchArgs {
    /// Path to configuration file (default: auto-discover tabkit.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file or directory (overrides config).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl WatchArgs {
    /// Execute the watch command. Runs until interrupted.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial configuration fails to load or the
    /// watcher can't be started. Later reload failures are reported and the
    /// previous document is kept.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            output: self.output,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let Some(config_path) = config.config_path.clone() else {
            return Err(CliError::Validation(format!(
                "watch needs a {CONFIG_FILENAME} file (none found in this directory or its parents)"
            )));
        };

        let target = resolve_output(&config.output);
        let mut session = Session::new(config.widget, FileSurface::new(target));
        if let Some(e) = session.surface_mut().take_error() {
            return Err(e.into());
        }

        output.highlight(&format!("Watching {}", config_path.display()));
        output.info(&format!(
            "Writing to {}",
            session.surface().path().display()
        ));

        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
            let Ok(event) = res else { return };
            if is_content_change(event.kind) {
                let _ = tx.send(event.paths);
            }
        })?;
        // Editors often replace the file on save, so watch the directory
        let watch_dir = config_path.parent().unwrap_or(Path::new("."));
        watcher.watch(watch_dir, RecursiveMode::NonRecursive)?;

        while let Ok(paths) = rx.recv() {
            let mut touched = touches(&paths, &config_path);
            touched |= drain_burst(&rx, DEBOUNCE, &config_path);
            if !touched {
                continue;
            }

            match Config::load(Some(&config_path), Some(&cli_settings)) {
                Ok(config) => {
                    session.replace_config(config.widget);
                    match session.surface_mut().take_error() {
                        Some(e) => output.error(&format!("Error: {e}")),
                        None => output.success(&format!(
                            "Rebuilt {} ({} tab(s))",
                            session.config().mode,
                            session.config().tabs.len()
                        )),
                    }
                }
                Err(e) => output.error(&format!("Error: {e}")),
            }
        }

        Ok(())
    }
}

/// Whether a notify event may have changed file contents.
fn is_content_change(kind: notify::EventKind) -> bool {
    matches!(
        kind,
        notify::EventKind::Create(_) | notify::EventKind::Modify(_)
    )
}

fn touches(paths: &[PathBuf], config_path: &Path) -> bool {
    paths
        .iter()
        .any(|path| path.file_name() == config_path.file_name())
}

/// Consume events until none arrives for `quiet`. Returns whether any of
/// them touched `config_path`.
fn drain_burst(rx: &mpsc::Receiver<Vec<PathBuf>>, quiet: Duration, config_path: &Path) -> bool {
    let mut touched = false;
    while let Ok(paths) = rx.recv_timeout(quiet) {
        touched |= touches(&paths, config_path);
    }
    touched
}
