use std::io;
use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use crate::commands::{
    cmd_browse, cmd_config_get, cmd_config_set, cmd_config_show, cmd_ls, cmd_show,
    resolve_source,
};
use crate::config::Config;
use crate::error::Result;
use crate::logging;
use crate::query::{FilterState, SortKey, TypeSelection};
use crate::repository::ConfiguredSource;
use crate::types::LocationCategory;

#[derive(Parser)]
#[command(name = "nexevent")]
#[command(about = "Browse upcoming conferences and hackathons")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where events come from.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Base URL of the events API (overrides NEXEVENT_API_URL and config)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Read events from a JSON file instead of the API
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,
}

/// Filter flags, one per filter field.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Case-insensitive text matched against title and location
    #[arg(short, long)]
    pub search: Option<String>,

    /// Location category to include: india, virtual (repeatable; default both)
    #[arg(short, long = "location", value_parser = parse_location)]
    pub locations: Vec<LocationCategory>,

    /// Event type: all, conference, hackathon
    #[arg(short = 't', long = "type", default_value = "all", value_parser = parse_type_selection)]
    pub event_type: TypeSelection,

    /// Indexing label to require (repeatable; matches any)
    #[arg(short, long)]
    pub indexing: Vec<String>,

    /// Sort key: date-asc, price-asc, price-desc, none
    #[arg(long = "sort", default_value = "date-asc", value_parser = parse_sort_key)]
    pub sort_by: SortKey,
}

impl FilterArgs {
    pub fn to_filter_state(&self) -> FilterState {
        let mut filter = FilterState::default()
            .with_search(self.search.as_deref().unwrap_or(""))
            .with_indexing(self.indexing.iter().cloned())
            .with_type(self.event_type)
            .with_sort(self.sort_by);
        if !self.locations.is_empty() {
            filter = filter.with_locations(self.locations.iter().copied());
        }
        filter
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive catalog (default)
    #[command(visible_alias = "b")]
    Browse,

    /// List events matching the filters
    Ls {
        #[command(flatten)]
        filters: FilterArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one event in detail
    #[command(visible_alias = "s")]
    Show {
        /// Event id, or part of its title
        query: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for [possible values: bash, zsh, fish, powershell, elvish]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Display current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print one configuration value
    Get {
        /// api_url or log_level
        key: String,
    },
    /// Set a configuration value
    Set {
        /// api_url or log_level
        key: String,
        value: String,
    },
}

impl Cli {
    /// Run the selected command.
    ///
    /// Config is only loaded by commands that read events, so `completions`
    /// and the `config` subcommands still work with a malformed config file.
    pub async fn run(self) -> Result<()> {
        let SourceArgs { url, file } = self.source;
        let source = || -> Result<ConfiguredSource> {
            let config = Config::load()?;
            logging::init(&config);
            resolve_source(url.as_deref(), file.clone(), &config)
        };

        match self.command.unwrap_or(Commands::Browse) {
            Commands::Browse => cmd_browse(source()?).await,
            Commands::Ls { filters, json } => {
                cmd_ls(&source()?, &filters.to_filter_state(), json).await
            }
            Commands::Show { query, json } => cmd_show(&source()?, &query, json).await,
            Commands::Config { action } => match action {
                ConfigAction::Show { json } => cmd_config_show(json),
                ConfigAction::Get { key } => cmd_config_get(&key),
                ConfigAction::Set { key, value } => cmd_config_set(&key, &value),
            },
            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

fn parse_with_validation<T, E>(
    s: &str,
    parsed: std::result::Result<T, E>,
    field_name: &str,
    valid_values: &[&str],
) -> std::result::Result<T, String> {
    parsed.map_err(|_| {
        format!(
            "Invalid {} '{}'. Must be one of: {}",
            field_name,
            s,
            valid_values.join(", ")
        )
    })
}

fn parse_location(s: &str) -> std::result::Result<LocationCategory, String> {
    parse_with_validation(s, s.parse(), "location", &["india", "virtual"])
}

fn parse_type_selection(s: &str) -> std::result::Result<TypeSelection, String> {
    parse_with_validation(s, s.parse(), "type", &["all", "conference", "hackathon"])
}

fn parse_sort_key(s: &str) -> std::result::Result<SortKey, String> {
    parse_with_validation(
        s,
        s.parse(),
        "sort key",
        &["date-asc", "price-asc", "price-desc", "none"],
    )
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "nexevent", &mut io::stdout());
}
