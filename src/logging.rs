//! File logging for the binary.
//!
//! The TUI owns the terminal, so log output goes to
//! `<data dir>/nexevent/nexevent.log` instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{Config, data_dir};
use crate::error::Result;

pub const LOG_ENV: &str = "NEXEVENT_LOG";
const LOG_FILE: &str = "nexevent.log";

pub fn log_path() -> Result<PathBuf> {
    Ok(data_dir()?.join(LOG_FILE))
}

/// Filter directives: `NEXEVENT_LOG` when set, else the configured level.
pub fn filter_directives(env_value: Option<String>, config: &Config) -> String {
    match env_value {
        Some(value) if !value.trim().is_empty() => value,
        _ => config.level_filter().to_string().to_lowercase(),
    }
}

/// Install the global subscriber. Logging is skipped if the file can't be opened.
pub fn init(config: &Config) {
    let Ok(path) = log_path() else {
        return;
    };
    if let Some(parent) = path.parent()
        && fs::create_dir_all(parent).is_err()
    {
        return;
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let directives = filter_directives(std::env::var(LOG_ENV).ok(), config);
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
}
