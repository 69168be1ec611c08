//! File logging. The terminal belongs to the TUI, so nothing goes to stderr
//! once the alternate screen is up.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{LogSettings, default_log_path};

/// Environment variable holding a `tracing` filter that overrides the config.
pub const LOG_ENV: &str = "ENCORE_LOG";

/// Install the global subscriber. Returns the log path on success.
///
/// Failing to open the log file disables logging; it never stops startup.
pub fn init(settings: &LogSettings) -> Option<PathBuf> {
    let path = settings.file.clone().or_else(default_log_path)?;
    let file = match open_log_file(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("encore: logging disabled, cannot open {}: {e}", path.display());
            return None;
        }
    };

    let filter = build_filter(std::env::var(LOG_ENV).ok().as_deref(), &settings.filter);
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();

    match installed {
        Ok(()) => Some(path),
        Err(e) => {
            eprintln!("encore: logging disabled: {e}");
            None
        }
    }
}

/// Prefer the environment directive; fall back to the configured one, then `info`.
pub(crate) fn build_filter(env: Option<&str>, configured: &str) -> EnvFilter {
    env.and_then(|d| EnvFilter::try_new(d).ok())
        .or_else(|| EnvFilter::try_new(configured).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

pub(crate) fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
