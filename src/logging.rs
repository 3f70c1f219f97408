//! File-backed tracing setup.
//!
//! The terminal is owned by the TUI, so nothing may be written to stdout or
//! stderr once it starts. Logs go to `ANITUI_LOG` or the user cache
//! directory; if neither can be opened they are discarded.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

pub const LOG_FILE_VAR: &str = "ANITUI_LOG";
const DEFAULT_FILTER: &str = "info";

/// Resolve where logs should go. An explicit path always wins.
pub fn resolve_log_path(explicit: Option<String>, cache_dir: Option<PathBuf>) -> Option<PathBuf> {
    explicit
        .filter(|path| !path.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| cache_dir.map(|dir| dir.join("anitui").join("anitui.log")))
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber. Returns the log file in use, if any.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_logging() -> Option<PathBuf> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let path = resolve_log_path(std::env::var(LOG_FILE_VAR).ok(), dirs::cache_dir());

    match path.as_deref().map(open_log_file) {
        Some(Ok(file)) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
            path
        }
        _ => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::sink)
                .try_init();
            None
        }
    }
}
