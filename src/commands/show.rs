use owo_colors::OwoColorize;

use super::print_json;
use crate::display::{EventDetail, format_type_colored};
use crate::error::{NexEventError, Result};
use crate::repository::{EventRepository, EventSource};
use crate::types::Event;

/// First event whose id equals `query`, else the first whose title contains it
/// (case-insensitive).
pub fn find_event<'a>(events: &'a [Event], query: &str) -> Result<&'a Event> {
    let query = query.trim();
    if let Some(event) = events.iter().find(|e| e.id.as_deref() == Some(query)) {
        return Ok(event);
    }
    let needle = query.to_lowercase();
    events
        .iter()
        .find(|e| !needle.is_empty() && e.title.to_lowercase().contains(&needle))
        .ok_or_else(|| NexEventError::EventNotFound(query.to_string()))
}

pub async fn cmd_show<S: EventSource>(source: &S, query: &str, json: bool) -> Result<()> {
    let mut repository = EventRepository::new();
    let events = repository.load(source).await?;
    let detail = EventDetail::from_event(find_event(events, query)?);

    if json {
        return print_json(&detail);
    }

    println!("{} {}", detail.title.bold(), format_type_colored(detail.badge));
    for (label, value) in detail.rows().into_iter().skip(1) {
        println!("{} {}", format!("{label}:").cyan(), value);
    }
    if !detail.description.is_empty() {
        println!("\n{}", detail.description);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events() -> Vec<Event> {
        serde_json::from_str(
            r#"[
                {"id":"42","title":"Rust Summit","type":"conference","location":"Pune","startDate":"2025-01-01","price":0},
                {"id":"7","title":"Summit of 42","type":"hackathon","location":"Online","isVirtual":true,"startDate":"2025-01-01","price":0}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_exact_id_beats_title_match() {
        let events = events();
        assert_eq!(find_event(&events, "42").unwrap().title, "Rust Summit");
    }

    #[test]
    fn test_title_match_is_case_insensitive() {
        let events = events();
        assert_eq!(find_event(&events, "SUMMIT OF").unwrap().id.as_deref(), Some("7"));
    }

    #[test]
    fn test_no_match_is_not_found() {
        let events = events();
        assert!(matches!(
            find_event(&events, "pycon"),
            Err(NexEventError::EventNotFound(q)) if q == "pycon"
        ));
        assert!(find_event(&events, "  ").is_err());
    }
}
