//! `config show`, `config get` and `config set`.

use owo_colors::OwoColorize;
use serde_json::json;

use super::print_json;
use crate::config::{Config, ConfigKey};
use crate::error::{NexEventError, Result};
use crate::logging::log_path;

pub fn cmd_config_show(json: bool) -> Result<()> {
    let config = Config::load()?;
    let config_file = Config::config_path()?;
    let log_file = log_path().ok();

    if json {
        return print_json(&json!({
            "api_url": config.api_url,
            "log_level": config.log_level,
            "config_file": config_file.to_string_lossy(),
            "log_file": log_file.as_ref().map(|p| p.to_string_lossy()),
        }));
    }

    println!("{}\n", "Configuration:".cyan().bold());
    println!("{}: {}", "api_url".cyan(), config.api_url);
    println!("{}: {}", "log_level".cyan(), config.log_level);
    println!("\n{}: {}", "config file".dimmed(), config_file.display());
    if let Some(path) = log_file {
        println!("{}: {}", "log file".dimmed(), path.display());
    }
    Ok(())
}

pub fn cmd_config_get(key: &str) -> Result<()> {
    let key: ConfigKey = key.parse()?;
    println!("{}", Config::load()?.get(key));
    Ok(())
}

pub fn cmd_config_set(key: &str, value: &str) -> Result<()> {
    let key: ConfigKey = key.parse()?;
    // A file that no longer parses is replaced rather than left blocking every command
    let mut config = match Config::load() {
        Err(NexEventError::YamlParse(e)) => {
            eprintln!(
                "{} existing config is invalid ({e}), starting from defaults",
                "warning:".yellow()
            );
            Config::default()
        }
        loaded => loaded?,
    };
    config.set(key, value)?;
    config.save()?;
    println!("Set {} = {}", key.to_string().cyan(), config.get(key));
    Ok(())
}
