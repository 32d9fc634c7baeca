//! Catalog model types for testable state management
//!
//! This module separates state (CatalogState) from view (CatalogViewModel)
//! so the filter controls, grid navigation and load lifecycle can be unit
//! tested without the iocraft framework.

use std::collections::BTreeSet;

use crate::display::{CatalogView, EventDetail, render_catalog};
use crate::query::{FilterState, TypeSelection, apply_filter_and_sort, indexing_labels};
use crate::repository::{EventRepository, LoadStatus};
use crate::tui::components::filter_panel::FILTER_PANEL_WIDTH;
use crate::tui::components::footer::Shortcut;
use crate::tui::components::toast::Toast;
use crate::tui::components::{
    catalog_shortcuts, detail_shortcuts, error_shortcuts, search_shortcuts,
};
use crate::types::{Event, LocationCategory};

/// Outer card width, borders included
pub const CARD_WIDTH: u16 = 32;
/// Outer card height, borders included
pub const CARD_HEIGHT: u16 = 8;
/// Horizontal space between cards
pub const CARD_GAP: u16 = 1;
/// Header, search box and footer
const CHROME_HEIGHT: u16 = 5;
/// Number keys available for indexing toggles
pub const INDEXING_SLOTS: usize = 9;

/// How many cards fit on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: usize,
    pub visible_rows: usize,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            columns: 1,
            visible_rows: 1,
        }
    }
}

impl GridLayout {
    pub fn new(columns: usize, visible_rows: usize) -> Self {
        Self {
            columns: columns.max(1),
            visible_rows: visible_rows.max(1),
        }
    }

    /// Fit the grid into a terminal of `width` x `height` cells.
    pub fn for_area(width: u16, height: u16) -> Self {
        let grid_width = width.saturating_sub(FILTER_PANEL_WIDTH + 1);
        let columns = (grid_width + CARD_GAP) / (CARD_WIDTH + CARD_GAP);
        let visible_rows = height.saturating_sub(CHROME_HEIGHT) / CARD_HEIGHT;
        Self::new(columns as usize, visible_rows as usize)
    }

    fn row_of(&self, index: usize) -> usize {
        index / self.columns
    }
}

/// Raw state that changes during user interaction
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    /// Loaded events and the outcome of the last fetch
    pub repository: EventRepository,
    /// Current filter and sort criteria
    pub filter: FilterState,
    /// Index of the selected card among the visible (filtered, sorted) events
    pub selected_index: usize,
    /// First grid row on screen
    pub scroll_row: usize,
    /// Whether the search box has focus
    pub search_focused: bool,
    /// Event shown in the detail modal
    pub detail: Option<Event>,
    pub toast: Option<Toast>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// All possible actions on the catalog
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogAction {
    // Loading
    /// Start a (re)load; the component issues the fetch
    Reload,
    LoadSucceeded(Vec<Event>),
    LoadFailed(String),

    // Search
    FocusSearch,
    /// Leave the search box, keeping the query
    ExitSearch,
    ClearSearchAndExit,
    UpdateSearch(String),

    // Filters
    NextSort,
    PrevSort,
    ToggleLocation(LocationCategory),
    NextType,
    PrevType,
    /// Toggle the indexing label in this 0-based slot
    ToggleIndexing(usize),
    ResetFilters,

    // Navigation
    Move(Direction),
    GoToFirst,
    GoToLast,

    // Detail
    OpenSelected,
    /// Select the card at this index and open it
    OpenAt(usize),
    CloseDetail,

    DismissToast,
    Quit,
}

/// One entry of the indexing control list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexingOption {
    /// 1-based number key, for the first nine labels
    pub slot: Option<usize>,
    pub label: String,
    pub checked: bool,
}

/// What the filter sidebar shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterPanelModel {
    pub sort_label: String,
    pub locations: Vec<(LocationCategory, bool)>,
    pub event_type: TypeSelection,
    pub indexing_enabled: bool,
    pub indexing: Vec<IndexingOption>,
}

/// Computed view model for rendering
#[derive(Debug, Clone)]
pub struct CatalogViewModel {
    pub view: CatalogView,
    pub selected_index: usize,
    pub scroll_row: usize,
    /// Events passing the filter; `None` until something is shown
    pub visible_count: Option<usize>,
    /// Events loaded; `None` before the first successful load
    pub total_count: Option<usize>,
    pub filter_panel: FilterPanelModel,
    pub detail: Option<EventDetail>,
    pub shortcuts: Vec<Shortcut>,
    /// A reload is running over already loaded data
    pub refreshing: bool,
    pub search_focused: bool,
    pub toast: Option<Toast>,
}

// ============================================================================
// Pure Functions
// ============================================================================

/// Indexing labels offered by the panel: every label in the loaded events
/// plus any selected label no longer present, sorted.
pub fn indexing_options(state: &CatalogState) -> Vec<String> {
    let mut labels: BTreeSet<String> = indexing_labels(state.repository.events())
        .into_iter()
        .collect();
    labels.extend(state.filter.indexing.iter().cloned());
    labels.into_iter().collect()
}

/// Whether `raw` search box text differs from the applied search.
pub fn search_differs(filter: &FilterState, raw: &str) -> bool {
    raw.to_lowercase() != filter.search
}

/// Keep the selected row on screen.
pub fn adjust_scroll(scroll_offset: usize, selected_index: usize, list_height: usize) -> usize {
    if list_height == 0 {
        return 0;
    }

    if selected_index < scroll_offset {
        return selected_index;
    }

    if selected_index >= scroll_offset + list_height {
        return selected_index.saturating_sub(list_height - 1);
    }

    scroll_offset
}

fn visible_events(state: &CatalogState) -> Vec<&Event> {
    apply_filter_and_sort(state.repository.events(), &state.filter)
}

/// Replace the filter and return the selection to the first card.
fn set_filter(state: &mut CatalogState, filter: FilterState) {
    state.filter = filter;
    state.selected_index = 0;
    state.scroll_row = 0;
}

fn select(state: &mut CatalogState, index: usize, layout: GridLayout) {
    state.selected_index = index;
    state.scroll_row = adjust_scroll(
        state.scroll_row,
        layout.row_of(index),
        layout.visible_rows,
    );
}

fn moved_index(current: usize, direction: Direction, count: usize, layout: GridLayout) -> usize {
    if count == 0 {
        return 0;
    }
    let last = count - 1;
    let current = current.min(last);
    match direction {
        Direction::Left => current.saturating_sub(1),
        Direction::Right => (current + 1).min(last),
        Direction::Up => current.checked_sub(layout.columns).unwrap_or(current),
        Direction::Down => {
            // Step into a shorter last row lands on its last card
            if layout.row_of(current) < layout.row_of(last) {
                (current + layout.columns).min(last)
            } else {
                current
            }
        }
    }
}

/// Pure function: apply action to state (reducer pattern)
///
/// Fetching and quitting need the component's async and system context;
/// for those this only records the state transition.
pub fn reduce(mut state: CatalogState, action: CatalogAction, layout: GridLayout) -> CatalogState {
    match action {
        CatalogAction::Reload => {
            state.repository.begin_load();
        }
        CatalogAction::LoadSucceeded(events) => {
            let reloaded = state.repository.has_loaded();
            let count = events.len();
            state.repository.finish_success(events);
            let visible = visible_events(&state).len();
            let index = state.selected_index.min(visible.saturating_sub(1));
            select(&mut state, index, layout);
            if reloaded {
                state.toast = Some(Toast::success(format!("Reloaded {} events", count)));
            }
        }
        CatalogAction::LoadFailed(message) => {
            state.repository.finish_failure(message);
        }

        CatalogAction::FocusSearch => {
            state.search_focused = true;
        }
        CatalogAction::ExitSearch => {
            state.search_focused = false;
        }
        CatalogAction::ClearSearchAndExit => {
            let filter = state.filter.clone().with_search("");
            set_filter(&mut state, filter);
            state.search_focused = false;
        }
        CatalogAction::UpdateSearch(query) => {
            if search_differs(&state.filter, &query) {
                let filter = state.filter.clone().with_search(&query);
                set_filter(&mut state, filter);
            }
        }

        CatalogAction::NextSort => {
            let filter = state.filter.clone().with_sort(state.filter.sort_by.next());
            set_filter(&mut state, filter);
        }
        CatalogAction::PrevSort => {
            let filter = state.filter.clone().with_sort(state.filter.sort_by.prev());
            set_filter(&mut state, filter);
        }
        CatalogAction::ToggleLocation(location) => {
            let filter = state.filter.clone().toggle_location(location);
            set_filter(&mut state, filter);
        }
        CatalogAction::NextType => {
            let filter = state.filter.clone().with_type(state.filter.event_type.next());
            set_filter(&mut state, filter);
        }
        CatalogAction::PrevType => {
            let filter = state.filter.clone().with_type(state.filter.event_type.prev());
            set_filter(&mut state, filter);
        }
        CatalogAction::ToggleIndexing(slot) => {
            if state.filter.indexing_enabled()
                && let Some(label) = indexing_options(&state).get(slot)
            {
                let filter = state.filter.clone().toggle_indexing(label);
                set_filter(&mut state, filter);
            }
        }
        CatalogAction::ResetFilters => {
            if !state.filter.is_default() {
                set_filter(&mut state, FilterState::default());
                state.toast = Some(Toast::info("Filters reset"));
            }
        }

        CatalogAction::Move(direction) => {
            let count = visible_events(&state).len();
            let index = moved_index(state.selected_index, direction, count, layout);
            select(&mut state, index, layout);
        }
        CatalogAction::GoToFirst => {
            state.selected_index = 0;
            state.scroll_row = 0;
        }
        CatalogAction::GoToLast => {
            let last = visible_events(&state).len().saturating_sub(1);
            select(&mut state, last, layout);
        }

        CatalogAction::OpenSelected => {
            state.detail = visible_events(&state)
                .get(state.selected_index)
                .map(|event| (*event).clone());
        }
        CatalogAction::OpenAt(index) => {
            if let Some(event) = visible_events(&state).get(index).map(|e| (*e).clone()) {
                select(&mut state, index, layout);
                state.detail = Some(event);
            }
        }
        CatalogAction::CloseDetail => {
            state.detail = None;
        }

        CatalogAction::DismissToast => {
            state.toast = None;
        }
        CatalogAction::Quit => {}
    }
    state
}

fn filter_panel_model(state: &CatalogState) -> FilterPanelModel {
    let filter = &state.filter;
    FilterPanelModel {
        sort_label: filter.sort_by.label().to_string(),
        locations: LocationCategory::ALL
            .iter()
            .map(|l| (*l, filter.locations.contains(l)))
            .collect(),
        event_type: filter.event_type,
        indexing_enabled: filter.indexing_enabled(),
        indexing: indexing_options(state)
            .into_iter()
            .enumerate()
            .map(|(i, label)| IndexingOption {
                slot: (i < INDEXING_SLOTS).then_some(i + 1),
                checked: filter.indexing.contains(&label),
                label,
            })
            .collect(),
    }
}

/// Pure function: compute view model from state
pub fn compute_view_model(state: &CatalogState) -> CatalogViewModel {
    let repository = &state.repository;
    let view = render_catalog(repository, &state.filter);

    let visible_count = match &view {
        CatalogView::Populated(cards) => Some(cards.len()),
        CatalogView::Empty => Some(0),
        CatalogView::Loading | CatalogView::Error { .. } => None,
    };
    let total_count = repository
        .has_loaded()
        .then(|| repository.events().len());
    let refreshing = *repository.status() == LoadStatus::Loading && repository.has_loaded();

    let detail = state.detail.as_ref().map(EventDetail::from_event);
    let shortcuts = if detail.is_some() {
        detail_shortcuts()
    } else if state.search_focused {
        search_shortcuts()
    } else if matches!(view, CatalogView::Error { .. }) {
        error_shortcuts()
    } else {
        catalog_shortcuts(!state.filter.is_default())
    };

    CatalogViewModel {
        view,
        selected_index: state.selected_index,
        scroll_row: state.scroll_row,
        visible_count,
        total_count,
        filter_panel: filter_panel_model(state),
        detail,
        shortcuts,
        refreshing,
        search_focused: state.search_focused,
        toast: state.toast.clone(),
    }
}

// ============================================================================
// Tests
// ============================================================================
