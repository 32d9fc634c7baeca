//! Pure projections from events to display-ready fields.
//!
//! Nothing here paints anything: the TUI and the CLI commands both render
//! from these values.

use owo_colors::OwoColorize;

use crate::types::{Event, EventType};

pub mod card;
pub mod catalog;
pub mod detail;

pub use card::{EventCard, LocationIcon};
pub use catalog::{CatalogView, EMPTY_MESSAGE, ERROR_MESSAGE, LOADING_MESSAGE, render_catalog};
pub use detail::EventDetail;

/// Format an amount the way a JavaScript number stringifies: integral values
/// have no decimal point.
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 && amount.abs() < 1e15 {
        format!("{}", amount as i64)
    } else {
        format!("{amount}")
    }
}

/// "Free" for zero, otherwise currency followed by the amount.
pub fn price_label(event: &Event) -> String {
    if event.price == 0.0 {
        "Free".to_string()
    } else {
        format!("{}{}", event.currency, format_amount(event.price))
    }
}

/// Type badge colored for terminal output.
pub fn format_type_colored(event_type: EventType) -> String {
    let badge = format!("[{}]", event_type);
    match event_type {
        EventType::Conference => badge.cyan().to_string(),
        EventType::Hackathon => badge.magenta().to_string(),
    }
}
