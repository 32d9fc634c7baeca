//! Filtering for the event catalog.
//!
//! A [`FilterState`] is an immutable value: every control interaction produces
//! a new state through one of its `with_*`/`toggle_*` methods. The state is
//! compiled into a set of [`EventFilter`] rules, and an event passes iff every
//! rule matches.

use std::collections::BTreeSet;

use crate::enum_display_fromstr;
use crate::error::NexEventError;
use crate::types::{Event, EventType, LocationCategory};

pub mod sort;

pub use sort::{SortKey, sort_events};

/// Type selector value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeSelection {
    #[default]
    All,
    Conference,
    Hackathon,
}

enum_display_fromstr!(TypeSelection, NexEventError::InvalidEventType, {
    All => "all",
    Conference => "conference",
    Hackathon => "hackathon",
});

impl TypeSelection {
    pub const ALL: [TypeSelection; 3] = [
        TypeSelection::All,
        TypeSelection::Conference,
        TypeSelection::Hackathon,
    ];

    pub fn next(self) -> TypeSelection {
        let i = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> TypeSelection {
        let len = Self::ALL.len();
        let i = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(i + len - 1) % len]
    }

    /// Indexing labels only describe conferences.
    pub fn allows_indexing(self) -> bool {
        self != TypeSelection::Hackathon
    }
}

/// Current catalog criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// Lowercased search text
    pub search: String,
    pub locations: BTreeSet<LocationCategory>,
    pub event_type: TypeSelection,
    pub indexing: BTreeSet<String>,
    pub sort_by: SortKey,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            locations: LocationCategory::ALL.into_iter().collect(),
            event_type: TypeSelection::All,
            indexing: BTreeSet::new(),
            sort_by: SortKey::DateAsc,
        }
    }
}

impl FilterState {
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = search.to_lowercase();
        self
    }

    pub fn with_locations(mut self, locations: impl IntoIterator<Item = LocationCategory>) -> Self {
        self.locations = locations.into_iter().collect();
        self
    }

    pub fn toggle_location(mut self, location: LocationCategory) -> Self {
        if !self.locations.remove(&location) {
            self.locations.insert(location);
        }
        self
    }

    /// Select an event type. Choosing `hackathon` also clears the indexing
    /// selection, since the indexing controls are disabled for it.
    pub fn with_type(mut self, event_type: TypeSelection) -> Self {
        self.event_type = event_type;
        if !event_type.allows_indexing() {
            self.indexing.clear();
        }
        self
    }

    pub fn with_indexing<S: Into<String>>(mut self, labels: impl IntoIterator<Item = S>) -> Self {
        self.indexing = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Toggle one indexing label. No-op while indexing is disabled.
    pub fn toggle_indexing(mut self, label: &str) -> Self {
        if !self.event_type.allows_indexing() {
            return self;
        }
        if !self.indexing.remove(label) {
            self.indexing.insert(label.to_string());
        }
        self
    }

    pub fn with_sort(mut self, sort_by: SortKey) -> Self {
        self.sort_by = sort_by;
        self
    }

    pub fn indexing_enabled(&self) -> bool {
        self.event_type.allows_indexing()
    }

    /// Whether anything differs from the defaults.
    pub fn is_default(&self) -> bool {
        *self == FilterState::default()
    }

    /// The rules this state imposes on each event.
    pub fn rules(&self) -> Vec<Box<dyn EventFilter + '_>> {
        vec![
            Box::new(SearchFilter::new(&self.search)),
            Box::new(TypeFilter::new(self.event_type)),
            Box::new(LocationFilter::new(&self.locations)),
            Box::new(IndexingFilter::new(&self.indexing)),
        ]
    }
}

/// A single filtering rule.
pub trait EventFilter {
    fn matches(&self, event: &Event) -> bool;
}

/// Case-insensitive substring match on title or location.
pub struct SearchFilter<'a> {
    needle: &'a str,
}

impl<'a> SearchFilter<'a> {
    /// `needle` must already be lowercased.
    pub fn new(needle: &'a str) -> Self {
        Self { needle }
    }
}

impl EventFilter for SearchFilter<'_> {
    fn matches(&self, event: &Event) -> bool {
        self.needle.is_empty()
            || event.title.to_lowercase().contains(self.needle)
            || event.location.to_lowercase().contains(self.needle)
    }
}

pub struct TypeFilter {
    selection: TypeSelection,
}

impl TypeFilter {
    pub fn new(selection: TypeSelection) -> Self {
        Self { selection }
    }
}

impl EventFilter for TypeFilter {
    fn matches(&self, event: &Event) -> bool {
        match self.selection {
            TypeSelection::All => true,
            TypeSelection::Conference => event.event_type == EventType::Conference,
            TypeSelection::Hackathon => event.event_type == EventType::Hackathon,
        }
    }
}

/// Virtual events need `Virtual` selected; physical ones need `India`.
pub struct LocationFilter<'a> {
    locations: &'a BTreeSet<LocationCategory>,
}

impl<'a> LocationFilter<'a> {
    pub fn new(locations: &'a BTreeSet<LocationCategory>) -> Self {
        Self { locations }
    }
}

impl EventFilter for LocationFilter<'_> {
    fn matches(&self, event: &Event) -> bool {
        self.locations.contains(&event.location_category())
    }
}

/// Empty selection matches everything; otherwise at least one shared label.
pub struct IndexingFilter<'a> {
    selected: &'a BTreeSet<String>,
}

impl<'a> IndexingFilter<'a> {
    pub fn new(selected: &'a BTreeSet<String>) -> Self {
        Self { selected }
    }
}

impl EventFilter for IndexingFilter<'_> {
    fn matches(&self, event: &Event) -> bool {
        self.selected.is_empty() || event.indexing.iter().any(|l| self.selected.contains(l))
    }
}

pub fn passes_filter(event: &Event, filter: &FilterState) -> bool {
    filter.rules().iter().all(|rule| rule.matches(event))
}

/// Events passing every rule, in input order.
pub fn filter_events<'a>(events: &'a [Event], filter: &FilterState) -> Vec<&'a Event> {
    let rules = filter.rules();
    events
        .iter()
        .filter(|e| rules.iter().all(|rule| rule.matches(e)))
        .collect()
}

/// Filter then sort: the full catalog pipeline.
pub fn apply_filter_and_sort<'a>(events: &'a [Event], filter: &FilterState) -> Vec<&'a Event> {
    let mut visible = filter_events(events, filter);
    sort_events(&mut visible, filter.sort_by);
    visible
}

/// Sorted union of indexing labels across `events`.
pub fn indexing_labels(events: &[Event]) -> Vec<String> {
    events
        .iter()
        .flat_map(|e| e.indexing.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_event(title: &str, event_type: EventType, is_virtual: bool, indexing: &[&str]) -> Event {
        Event {
            id: None,
            title: title.to_string(),
            event_type,
            location: if is_virtual { "Online" } else { "Hyderabad" }.to_string(),
            is_virtual,
            start_date: "2025-06-01".to_string(),
            submission_deadline: String::new(),
            price: 0.0,
            currency: "₹".to_string(),
            indexing: indexing.iter().map(|s| s.to_string()).collect(),
            description: String::new(),
            link: None,
        }
    }

    fn conference(title: &str) -> Event {
        make_event(title, EventType::Conference, false, &[])
    }

    // =========================================================================
    // Text match
    // =========================================================================

    #[test]
    fn test_empty_search_matches_everything() {
        let filter = FilterState::default();
        assert!(passes_filter(&conference("Anything"), &filter));
    }

    #[test]
    fn test_search_matches_title_case_insensitively() {
        let filter = FilterState::default().with_search("SUMMIT");
        assert_eq!(filter.search, "summit");
        assert!(passes_filter(&conference("AI Summit 2025"), &filter));
        assert!(!passes_filter(&conference("Data Days"), &filter));
    }

    #[test]
    fn test_search_matches_location() {
        let filter = FilterState::default().with_search("hyder");
        assert!(passes_filter(&conference("Data Days"), &filter));
    }

    // =========================================================================
    // Type match
    // =========================================================================

    #[test]
    fn test_type_filter_isolated() {
        let hack = make_event("Hack", EventType::Hackathon, false, &[]);
        let conf = conference("Conf");

        let all = FilterState::default();
        assert!(passes_filter(&hack, &all) && passes_filter(&conf, &all));

        let only_conf = FilterState::default().with_type(TypeSelection::Conference);
        assert!(passes_filter(&conf, &only_conf));
        assert!(!passes_filter(&hack, &only_conf));

        let only_hack = FilterState::default().with_type(TypeSelection::Hackathon);
        assert!(passes_filter(&hack, &only_hack));
        assert!(!passes_filter(&conf, &only_hack));
    }

    // =========================================================================
    // Location category match
    // =========================================================================

    #[test]
    fn test_location_filter_isolated() {
        let online = make_event("Online", EventType::Conference, true, &[]);
        let physical = conference("Physical");

        let india_only = FilterState::default().with_locations([LocationCategory::India]);
        assert!(passes_filter(&physical, &india_only));
        assert!(!passes_filter(&online, &india_only));

        let virtual_only = FilterState::default().with_locations([LocationCategory::Virtual]);
        assert!(passes_filter(&online, &virtual_only));
        assert!(!passes_filter(&physical, &virtual_only));

        let none = FilterState::default().with_locations([]);
        assert!(!passes_filter(&online, &none));
        assert!(!passes_filter(&physical, &none));
    }

    #[test]
    fn test_toggle_location_round_trips() {
        let filter = FilterState::default().toggle_location(LocationCategory::Virtual);
        assert!(!filter.locations.contains(&LocationCategory::Virtual));
        let filter = filter.toggle_location(LocationCategory::Virtual);
        assert!(filter.is_default());
    }

    // =========================================================================
    // Indexing match
    // =========================================================================

    #[test]
    fn test_empty_indexing_selection_matches_all() {
        let filter = FilterState::default();
        assert!(passes_filter(&make_event("A", EventType::Conference, false, &["IEEE"]), &filter));
        assert!(passes_filter(&make_event("B", EventType::Conference, false, &[]), &filter));
    }

    #[test]
    fn test_indexing_requires_intersection() {
        let filter = FilterState::default().with_indexing(["ACM", "Scopus"]);
        assert!(passes_filter(&make_event("A", EventType::Conference, false, &["Scopus", "IEEE"]), &filter));
        assert!(!passes_filter(&make_event("B", EventType::Conference, false, &["IEEE"]), &filter));
    }

    #[test]
    fn test_event_without_labels_fails_active_indexing() {
        let filter = FilterState::default().with_indexing(["IEEE"]);
        assert!(!passes_filter(&make_event("Bare", EventType::Conference, false, &[]), &filter));
    }

    #[test]
    fn test_hackathon_clears_and_locks_indexing() {
        let filter = FilterState::default()
            .toggle_indexing("IEEE")
            .with_type(TypeSelection::Hackathon);
        assert!(filter.indexing.is_empty());
        assert!(!filter.indexing_enabled());

        let filter = filter.toggle_indexing("IEEE");
        assert!(filter.indexing.is_empty());

        let filter = filter.with_type(TypeSelection::All).toggle_indexing("IEEE");
        assert!(filter.indexing.contains("IEEE"));
    }

    // =========================================================================
    // Pipeline
    // =========================================================================

    #[test]
    fn test_all_rules_must_hold() {
        let event = make_event("AI Summit", EventType::Conference, true, &["IEEE"]);
        let filter = FilterState::default()
            .with_search("summit")
            .with_type(TypeSelection::Conference)
            .with_indexing(["IEEE"]);
        assert!(passes_filter(&event, &filter));
        assert!(!passes_filter(&event, &filter.clone().with_search("expo")));
        assert!(!passes_filter(&event, &filter.clone().toggle_location(LocationCategory::Virtual)));
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let mut events = vec![
            make_event("B", EventType::Conference, false, &["IEEE"]),
            make_event("A", EventType::Hackathon, true, &[]),
            make_event("C", EventType::Conference, true, &["ACM"]),
        ];
        events[0].price = 300.0;
        events[2].price = 300.0;
        let filter = FilterState::default().with_sort(SortKey::PriceDesc);

        let first: Vec<&str> = apply_filter_and_sort(&events, &filter)
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        let second: Vec<&str> = apply_filter_and_sort(&events, &filter)
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(first, vec!["B", "C", "A"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_indexing_labels_sorted_union() {
        let events = vec![
            make_event("A", EventType::Conference, false, &["Scopus", "IEEE"]),
            make_event("B", EventType::Conference, false, &["IEEE", "ACM"]),
        ];
        assert_eq!(indexing_labels(&events), vec!["ACM", "IEEE", "Scopus"]);
    }

    #[test]
    fn test_type_selection_cycle() {
        assert_eq!(TypeSelection::All.next(), TypeSelection::Conference);
        assert_eq!(TypeSelection::Hackathon.next(), TypeSelection::All);
        assert_eq!(TypeSelection::All.prev(), TypeSelection::Hackathon);
    }
}
