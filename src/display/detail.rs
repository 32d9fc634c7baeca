use serde::Serialize;

use super::price_label;
use crate::types::{Event, EventType};

const CONFERENCE_PRICE_NOTE: &str = " (Approx APC/Reg)";

/// Fields of the single-event detail view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventDetail {
    pub title: String,
    pub badge: EventType,
    pub location: String,
    /// Long form such as `Sat Mar 01 2025`; the raw text when it does not parse
    pub date: String,
    pub deadline: String,
    pub price: String,
    pub indexing: String,
    pub description: String,
    pub link: Option<String>,
}

impl EventDetail {
    pub fn from_event(event: &Event) -> Self {
        let date = match event.start() {
            Some(dt) => dt.strftime("%a %b %d %Y").to_string(),
            None if event.start_date.trim().is_empty() => "TBA".to_string(),
            None => event.start_date.clone(),
        };

        let mut price = price_label(event);
        if event.price != 0.0 && event.event_type == EventType::Conference {
            price.push_str(CONFERENCE_PRICE_NOTE);
        }

        let indexing = if event.indexing.is_empty() {
            "N/A".to_string()
        } else {
            event.indexing.join(", ")
        };

        Self {
            title: event.title.clone(),
            badge: event.event_type,
            location: event.location.clone(),
            date,
            deadline: event.submission_deadline.clone(),
            price,
            indexing,
            description: event.description.clone(),
            link: event.external_link().map(str::to_string),
        }
    }

    /// Label/value rows in display order.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = vec![
            ("Type", self.badge.to_string()),
            ("Location", self.location.clone()),
            ("Date", self.date.clone()),
            ("Deadline", self.deadline.clone()),
            ("Price", self.price.clone()),
            ("Indexing", self.indexing.clone()),
        ];
        if let Some(link) = &self.link {
            rows.push(("Link", link.clone()));
        }
        rows
    }

    /// Plain-text block: title, rows, then the description.
    pub fn to_text(&self) -> String {
        let mut out = self.title.clone();
        for (label, value) in self.rows() {
            out.push('\n');
            out.push_str(&format!("{label}: {value}"));
        }
        if !self.description.is_empty() {
            out.push_str("\n\n");
            out.push_str(&self.description);
        }
        out
    }
}
