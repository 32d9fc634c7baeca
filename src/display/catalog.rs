use super::card::EventCard;
use crate::query::{FilterState, apply_filter_and_sort};
use crate::repository::{EventRepository, LoadStatus};

pub const LOADING_MESSAGE: &str = "Searching Google & Conference Portals...";
pub const ERROR_MESSAGE: &str = "Failed to load live events. Make sure the events API is running.";
pub const EMPTY_MESSAGE: &str = "No events found matching your criteria.";

/// What the catalog area shows for one render cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogView {
    Loading,
    Error { message: String, reason: String },
    /// Data loaded but nothing passes the filter
    Empty,
    Populated(Vec<EventCard>),
}

/// Pick the catalog state and project the visible cards.
///
/// `Loading` only appears while nothing has been loaded yet; a reload over
/// existing data keeps the cards on screen.
pub fn render_catalog(repository: &EventRepository, filter: &FilterState) -> CatalogView {
    match repository.status() {
        LoadStatus::Loading if !repository.has_loaded() => CatalogView::Loading,
        LoadStatus::Failed(reason) => CatalogView::Error {
            message: ERROR_MESSAGE.to_string(),
            reason: reason.clone(),
        },
        _ => {
            let visible = apply_filter_and_sort(repository.events(), filter);
            if visible.is_empty() {
                CatalogView::Empty
            } else {
                CatalogView::Populated(visible.into_iter().map(EventCard::from_event).collect())
            }
        }
    }
}
