use serde::Serialize;

use super::price_label;
use crate::types::{Event, EventType};

/// Location icon variant, picked from `is_virtual`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationIcon {
    Laptop,
    Pin,
}

impl LocationIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            LocationIcon::Laptop => "▣",
            LocationIcon::Pin => "◉",
        }
    }
}

/// Everything a catalog card shows, derived from one event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventCard {
    pub badge: EventType,
    /// Abbreviated month, or `---` when the start date does not parse
    pub month: String,
    /// Day of month without padding, or `--`
    pub day: String,
    pub title: String,
    pub location: String,
    pub location_icon: LocationIcon,
    pub price: String,
    pub tags: Vec<String>,
}

impl EventCard {
    pub fn from_event(event: &Event) -> Self {
        let (month, day) = match event.start() {
            Some(dt) => (dt.strftime("%b").to_string(), dt.day().to_string()),
            None => ("---".to_string(), "--".to_string()),
        };

        Self {
            badge: event.event_type,
            month,
            day,
            title: event.title.clone(),
            location: event.location.clone(),
            location_icon: if event.is_virtual {
                LocationIcon::Laptop
            } else {
                LocationIcon::Pin
            },
            price: price_label(event),
            tags: event.indexing.clone(),
        }
    }

    /// Compact single-line rendering used by the table output.
    pub fn date_label(&self) -> String {
        format!("{} {}", self.month, self.day)
    }
}
