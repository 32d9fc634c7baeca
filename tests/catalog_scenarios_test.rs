mod common;

use common::fixture_events;
use nexevent::display::{CatalogView, EventCard, EventDetail, render_catalog};
use nexevent::query::{filter_events, sort_events};
use nexevent::{
    Event, EventRepository, FilterState, LocationCategory, SortKey, TypeSelection,
    apply_filter_and_sort, passes_filter,
};

fn event(json: &str) -> Event {
    serde_json::from_str(json).expect("event should parse")
}

fn ai_summit() -> Event {
    event(
        r#"{"title":"AI Summit","isVirtual":true,"type":"conference","location":"Online",
            "indexing":[],"price":0,"startDate":"2025-03-01"}"#,
    )
}

fn titles(events: &[&Event]) -> Vec<String> {
    events.iter().map(|e| e.title.clone()).collect()
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_virtual_free_event_passes_defaults() {
    let summit = ai_summit();
    assert!(passes_filter(&summit, &FilterState::default()));
    assert_eq!(EventCard::from_event(&summit).price, "Free");
}

#[test]
fn test_virtual_event_hidden_when_only_india_selected() {
    let filter = FilterState::default().with_locations([LocationCategory::India]);
    assert!(!passes_filter(&ai_summit(), &filter));
}

#[test]
fn test_price_asc_orders_cheapest_first() {
    let events = vec![
        event(r#"{"title":"Pricey","type":"conference","location":"Pune","startDate":"2025-01-01","price":100}"#),
        event(r#"{"title":"Cheap","type":"conference","location":"Pune","startDate":"2025-01-01","price":50}"#),
    ];
    let filter = FilterState::default().with_sort(SortKey::PriceAsc);
    let prices: Vec<f64> = apply_filter_and_sort(&events, &filter)
        .iter()
        .map(|e| e.price)
        .collect();
    assert_eq!(prices, vec![50.0, 100.0]);
}

#[test]
fn test_disjoint_indexing_excludes_event() {
    let ieee = event(
        r#"{"title":"Signals","type":"conference","location":"Pune","startDate":"2025-01-01","indexing":["IEEE"]}"#,
    );
    let filter = FilterState::default().with_indexing(["ACM"]);
    assert!(!passes_filter(&ieee, &filter));
}

#[test]
fn test_search_is_case_insensitive_substring() {
    let summit = event(
        r#"{"title":"AI Summit 2025","type":"conference","location":"Online","isVirtual":true,"startDate":"2025-03-01"}"#,
    );
    let filter = FilterState::default().with_search("summit");
    assert!(passes_filter(&summit, &filter));
}

// ============================================================================
// Pipeline properties over the fixture catalog
// ============================================================================

#[test]
fn test_empty_indexing_selection_matches_everything() {
    let events = fixture_events();
    assert_eq!(filter_events(&events, &FilterState::default()).len(), events.len());
}

#[test]
fn test_indexing_selection_drops_unindexed_events() {
    let events = fixture_events();
    let filter = FilterState::default().with_indexing(["Scopus"]);
    let visible = apply_filter_and_sort(&events, &filter);
    assert_eq!(
        titles(&visible),
        vec!["International Conference on Data Science", "Workshop on Edge AI"]
    );
    assert!(visible.iter().all(|e| !e.indexing.is_empty()));
}

#[test]
fn test_pipeline_is_idempotent() {
    let events = fixture_events();
    let filter = FilterState::default()
        .with_type(TypeSelection::Conference)
        .with_sort(SortKey::PriceDesc);
    let first = apply_filter_and_sort(&events, &filter);
    let second = apply_filter_and_sort(&events, &filter);
    assert_eq!(first, second);

    let mut again = first.clone();
    sort_events(&mut again, SortKey::PriceDesc);
    assert_eq!(again, first);
}

#[test]
fn test_sort_is_stable_for_equal_prices() {
    let events = fixture_events();
    // AI Summit and Smart India Hackathon are both free
    let filter = FilterState::default().with_sort(SortKey::PriceAsc);
    let visible = apply_filter_and_sort(&events, &filter);
    assert_eq!(
        titles(&visible[..2]),
        vec!["AI Summit 2025", "Smart India Hackathon"]
    );
}

#[test]
fn test_unsorted_keeps_input_order() {
    let events = fixture_events();
    let filter = FilterState::default().with_sort(SortKey::Unsorted);
    let ids: Vec<_> = apply_filter_and_sort(&events, &filter)
        .iter()
        .map(|e| e.id.clone().unwrap_or_default())
        .collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
}

#[test]
fn test_every_rule_must_hold() {
    let events = fixture_events();
    let filter = FilterState::default()
        .with_search("india")
        .with_type(TypeSelection::Hackathon)
        .with_locations([LocationCategory::India]);
    let visible = apply_filter_and_sort(&events, &filter);
    assert_eq!(titles(&visible), vec!["Smart India Hackathon"]);
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_render_populated_then_empty() {
    let mut repository = EventRepository::new();
    repository.finish_success(fixture_events());

    match render_catalog(&repository, &FilterState::default()) {
        CatalogView::Populated(cards) => {
            assert_eq!(cards.len(), 6);
            assert_eq!(cards[0].title, "Global Rust Hack Weekend");
            assert_eq!(cards.last().map(|c| c.day.as_str()), Some("--"));
        }
        other => panic!("expected cards, got {:?}", other),
    }

    let filter = FilterState::default().with_search("no such event");
    assert_eq!(render_catalog(&repository, &filter), CatalogView::Empty);
}

#[test]
fn test_detail_for_fixture_conference() {
    let events = fixture_events();
    let detail = EventDetail::from_event(&events[1]);
    assert_eq!(detail.price, "₹4500 (Approx APC/Reg)");
    assert_eq!(detail.indexing, "IEEE, Scopus");
    assert_eq!(detail.deadline, "Dec 20, 2024");
    assert_eq!(detail.link, None);
}
