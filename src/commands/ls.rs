use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::print_json;
use crate::display::{EventCard, format_type_colored};
use crate::error::Result;
use crate::query::{FilterState, apply_filter_and_sort};
use crate::repository::{EventRepository, EventSource};
use crate::types::Event;
use crate::utils::truncate_string;

const TITLE_WIDTH: usize = 48;

#[derive(Tabled)]
struct EventRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    event_type: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Indexing")]
    indexing: String,
}

impl EventRow {
    fn from_event(event: &Event) -> Self {
        let card = EventCard::from_event(event);
        Self {
            date: card.date_label(),
            event_type: card.badge.to_string(),
            title: truncate_string(&card.title, TITLE_WIDTH),
            location: format!("{} {}", card.location_icon.glyph(), card.location),
            price: card.price,
            indexing: card.tags.join(", "),
        }
    }
}

/// Plain table for the given events, in order.
pub fn format_event_table(events: &[&Event]) -> String {
    let rows: Vec<EventRow> = events.iter().map(|e| EventRow::from_event(e)).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Load once, filter, sort and print.
pub async fn cmd_ls<S: EventSource>(source: &S, filter: &FilterState, json: bool) -> Result<()> {
    let mut repository = EventRepository::new();
    let events = repository.load(source).await?;
    let visible = apply_filter_and_sort(events, filter);

    if json {
        return print_json(&visible);
    }

    if visible.is_empty() {
        println!("{}", crate::display::EMPTY_MESSAGE);
        return Ok(());
    }

    println!("{}", format_event_table(&visible));
    let types: Vec<String> = visible
        .iter()
        .map(|e| e.event_type)
        .collect::<std::collections::BTreeSet<_>>()
        .into_iter()
        .map(format_type_colored)
        .collect();
    println!(
        "\n{} of {} event(s) {}",
        visible.len(),
        events.len(),
        types.join(" ")
    );
    Ok(())
}
