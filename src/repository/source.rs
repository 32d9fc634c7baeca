use std::future::Future;
use std::path::PathBuf;

use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::error::{NexEventError, Result};
use crate::types::Event;

/// Something that can produce the full event list.
pub trait EventSource: Send + Sync {
    fn fetch(&self) -> impl Future<Output = Result<Vec<Event>>> + Send;

    /// Human-readable origin, shown in logs and the TUI header.
    fn describe(&self) -> String;
}

/// `{base}/api/events`, keeping any path prefix on the base URL.
pub fn events_url(base: &Url) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| NexEventError::Config(format!("'{base}' cannot be used as a base URL")))?
        .pop_if_empty()
        .extend(["api", "events"]);
    Ok(url)
}

/// Reads the catalog from the events API.
#[derive(Debug, Clone)]
pub struct HttpEventSource {
    client: Client,
    url: Url,
}

impl HttpEventSource {
    pub fn new(base_url: &Url) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("nexevent/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            url: events_url(base_url)?,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl EventSource for HttpEventSource {
    async fn fetch(&self) -> Result<Vec<Event>> {
        debug!(url = %self.url, "fetching events");
        let response = self.client.get(self.url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NexEventError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

/// Reads the catalog from a JSON file holding the same array the API serves.
#[derive(Debug, Clone)]
pub struct FileEventSource {
    path: PathBuf,
}

impl FileEventSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl EventSource for FileEventSource {
    async fn fetch(&self) -> Result<Vec<Event>> {
        debug!(path = %self.path.display(), "reading events file");
        let content = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// The source picked from command-line flags and config.
#[derive(Debug, Clone)]
pub enum ConfiguredSource {
    Http(HttpEventSource),
    File(FileEventSource),
}

impl EventSource for ConfiguredSource {
    async fn fetch(&self) -> Result<Vec<Event>> {
        match self {
            ConfiguredSource::Http(source) => source.fetch().await,
            ConfiguredSource::File(source) => source.fetch().await,
        }
    }

    fn describe(&self) -> String {
        match self {
            ConfiguredSource::Http(source) => source.describe(),
            ConfiguredSource::File(source) => source.describe(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_events_url_from_root() {
        let base = Url::parse("http://localhost:5000").unwrap();
        assert_eq!(
            events_url(&base).unwrap().as_str(),
            "http://localhost:5000/api/events"
        );
    }

    #[test]
    fn test_events_url_keeps_prefix() {
        let base = Url::parse("https://example.org/nexevent/").unwrap();
        assert_eq!(
            events_url(&base).unwrap().as_str(),
            "https://example.org/nexevent/api/events"
        );
    }

    #[test]
    fn test_events_url_rejects_opaque_url() {
        let base = Url::parse("mailto:someone@example.org").unwrap();
        assert!(matches!(events_url(&base), Err(NexEventError::Config(_))));
    }

    #[tokio::test]
    async fn test_file_source_reads_array() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(
            &path,
            r#"[{"title":"Hack Night","type":"hackathon","location":"Online","isVirtual":true,"startDate":"2025-04-04","price":0}]"#,
        )
        .unwrap();

        let events = FileEventSource::new(&path).fetch().await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Hack Night");
    }

    #[tokio::test]
    async fn test_file_source_errors() {
        let dir = TempDir::new().unwrap();
        let missing = FileEventSource::new(dir.path().join("missing.json"));
        assert!(matches!(missing.fetch().await, Err(NexEventError::Io(_))));

        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();
        let bad = FileEventSource::new(&path);
        assert!(matches!(bad.fetch().await, Err(NexEventError::Json(_))));
    }
}
