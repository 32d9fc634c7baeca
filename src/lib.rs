//! Browse conference and hackathon listings from the terminal.
//!
//! Events are fetched from an events API (or a local JSON file), narrowed by
//! a [`query::FilterState`], ordered by a [`query::SortKey`] and shown either
//! as a table (`nexevent ls`) or in an interactive card grid
//! (`nexevent browse`).

pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod macros;
pub mod query;
pub mod repository;
pub mod tui;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_guards;

pub use error::{NexEventError, Result};
pub use query::{FilterState, SortKey, TypeSelection, apply_filter_and_sort, passes_filter};
pub use repository::{EventRepository, EventSource, FileEventSource, HttpEventSource, LoadStatus};
pub use types::{Event, EventType, LocationCategory};
