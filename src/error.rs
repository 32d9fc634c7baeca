use thiserror::Error;

#[derive(Error, Debug)]
pub enum NexEventError {
    #[error("event '{0}' not found")]
    EventNotFound(String),

    #[error("invalid location '{0}' (expected india or virtual)")]
    InvalidLocation(String),

    #[error("invalid event type '{0}' (expected all, conference or hackathon)")]
    InvalidEventType(String),

    #[error("invalid sort key '{0}' (expected date-asc, price-asc, price-desc or none)")]
    InvalidSortKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("events API returned status {0}")]
    Status(u16),

    #[error("terminal UI error: {0}")]
    Tui(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, NexEventError>;
