//! The in-memory event list and where it comes from.
//!
//! The list is replaced wholesale on every successful load. A failed load
//! leaves the previous list untouched and records the failure.

use tracing::{info, warn};

use crate::error::Result;
use crate::types::Event;

pub mod source;

pub use source::{ConfiguredSource, EventSource, FileEventSource, HttpEventSource, events_url};

/// Outcome of the most recent load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// A fetch is in flight
    #[default]
    Loading,
    /// The last fetch failed with this message
    Failed(String),
    Ready,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventRepository {
    events: Vec<Event>,
    status: LoadStatus,
    loaded_once: bool,
}

impl EventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Whether any load has ever succeeded.
    pub fn has_loaded(&self) -> bool {
        self.loaded_once
    }

    pub fn begin_load(&mut self) {
        self.status = LoadStatus::Loading;
    }

    pub fn finish_success(&mut self, events: Vec<Event>) {
        info!(count = events.len(), "loaded events");
        self.events = events;
        self.status = LoadStatus::Ready;
        self.loaded_once = true;
    }

    pub fn finish_failure(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!(error = %message, "failed to load events");
        self.status = LoadStatus::Failed(message);
    }

    /// Fetch from `source` and record the outcome.
    pub async fn load<S: EventSource>(&mut self, source: &S) -> Result<&[Event]> {
        self.begin_load();
        match source.fetch().await {
            Ok(events) => {
                self.finish_success(events);
                Ok(&self.events)
            }
            Err(e) => {
                self.finish_failure(e.to_string());
                Err(e)
            }
        }
    }
}
