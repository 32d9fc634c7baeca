//! Command implementations behind the CLI.

mod browse;
mod config;
mod ls;
mod show;

pub use browse::cmd_browse;
pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use ls::{cmd_ls, format_event_table};
pub use show::{cmd_show, find_event};

use std::path::PathBuf;

use serde::Serialize;

use crate::config::Config;
use crate::error::Result;
use crate::repository::{ConfiguredSource, FileEventSource, HttpEventSource};

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Pick the event source: `--file` wins, otherwise the resolved API URL.
pub fn resolve_source(
    url: Option<&str>,
    file: Option<PathBuf>,
    config: &Config,
) -> Result<ConfiguredSource> {
    if let Some(path) = file {
        return Ok(ConfiguredSource::File(FileEventSource::new(path)));
    }
    let base = config.resolve_api_url(url)?;
    Ok(ConfiguredSource::Http(HttpEventSource::new(&base)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::EventSource;

    #[test]
    fn test_file_flag_wins_over_url() {
        let source = resolve_source(
            Some("http://example.org"),
            Some(PathBuf::from("events.json")),
            &Config::default(),
        )
        .unwrap();
        assert!(matches!(source, ConfiguredSource::File(_)));
        assert_eq!(source.describe(), "events.json");
    }

    #[test]
    fn test_url_flag_builds_http_source() {
        let source =
            resolve_source(Some("http://127.0.0.1:9000"), None, &Config::default()).unwrap();
        assert_eq!(source.describe(), "http://127.0.0.1:9000/api/events");
    }

    #[test]
    fn test_bad_url_is_rejected() {
        assert!(resolve_source(Some("::nope::"), None, &Config::default()).is_err());
    }
}
