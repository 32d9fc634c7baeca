//! Event catalog view (`nexevent browse`)
//!
//! Filter sidebar on the left, a grid of event cards on the right, and a
//! detail modal over both when a card is opened.

pub mod handlers;
pub mod model;

use std::time::Instant;

use iocraft::prelude::*;

use crate::display::CatalogView;
use crate::repository::{ConfiguredSource, EventSource};
use crate::tui::components::{
    Clickable, EmptyState, EmptyStateKind, EventCardView, EventDetailModal, FilterPanel, Footer,
    Header, SearchBox, render_toast,
};
use crate::tui::theme::theme;

use handlers::key_to_action;
use model::{
    CARD_WIDTH, CatalogAction, CatalogState, Direction, GridLayout, compute_view_model,
    reduce, search_differs,
};

/// Props for the EventCatalog component
#[derive(Default, Props)]
pub struct EventCatalogProps {
    /// Where events are fetched from
    pub source: Option<ConfiguredSource>,
}

fn dispatch(state: &mut State<CatalogState>, action: CatalogAction, layout: GridLayout) {
    let current = state.read().clone();
    state.set(reduce(current, action, layout));
}

/// Main catalog component
///
/// Layout:
/// ```text
/// +--------------------------------------------------+
/// | Header                              12 of 40 ... |
/// +--------------------------------------------------+
/// | / search...                                      |
/// +-----------+--------------------------------------+
/// | Sort      | +------+ +------+ +------+           |
/// | Location  | | Card | | Card | | Card |           |
/// | Type      | +------+ +------+ +------+           |
/// | Indexing  | +------+ +------+                    |
/// |           | | Card | | Card |                    |
/// +-----------+--------------------------------------+
/// | Footer with shortcuts                            |
/// +--------------------------------------------------+
/// ```
#[component]
pub fn EventCatalog<'a>(props: &EventCatalogProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();
    let layout = GridLayout::for_area(width, height);

    let mut state: State<CatalogState> = hooks.use_state(CatalogState::default);
    let mut search_query = hooks.use_state(String::new);
    let mut should_exit = hooks.use_state(|| false);
    let mut needs_reload = hooks.use_state(|| false);

    // Fetch, then fold the outcome into the state. Overlapping loads simply
    // apply in completion order.
    let load_handler: Handler<()> = hooks.use_async_handler({
        let source = props.source.clone();
        move |()| {
            let source = source.clone();
            let mut state = state;
            async move {
                let action = match source {
                    Some(source) => match source.fetch().await {
                        Ok(events) => CatalogAction::LoadSucceeded(events),
                        Err(e) => CatalogAction::LoadFailed(e.to_string()),
                    },
                    None => CatalogAction::LoadFailed("no event source configured".to_string()),
                };
                dispatch(&mut state, action, layout);
            }
        }
    });

    // Trigger initial load on mount
    let mut fetch_started = hooks.use_state(|| false);
    if !fetch_started.get() {
        fetch_started.set(true);
        load_handler.clone()(());
    }

    if needs_reload.get() {
        needs_reload.set(false);
        load_handler.clone()(());
    }

    let open_card: Handler<usize> = hooks.use_async_handler(move |index: usize| {
        let mut state = state;
        async move {
            dispatch(&mut state, CatalogAction::OpenAt(index), layout);
        }
    });

    let close_detail: Handler<()> = hooks.use_async_handler(move |()| {
        let mut state = state;
        async move {
            dispatch(&mut state, CatalogAction::CloseDetail, layout);
        }
    });

    let retry: Handler<usize> = hooks.use_async_handler(move |_| {
        let mut state = state;
        let mut needs_reload = needs_reload;
        async move {
            dispatch(&mut state, CatalogAction::Reload, layout);
            needs_reload.set(true);
        }
    });

    let scroll_up: Handler<()> = hooks.use_async_handler(move |()| {
        let mut state = state;
        async move {
            dispatch(&mut state, CatalogAction::Move(Direction::Up), layout);
        }
    });

    let scroll_down: Handler<()> = hooks.use_async_handler(move |()| {
        let mut state = state;
        async move {
            dispatch(&mut state, CatalogAction::Move(Direction::Down), layout);
        }
    });

    hooks.use_terminal_events(move |event| {
        if let TerminalEvent::Key(KeyEvent {
            code,
            kind,
            modifiers,
            ..
        }) = event
            && kind != KeyEventKind::Release
        {
            let current = state.read().clone();
            let Some(action) = key_to_action(code, modifiers, &current) else {
                return;
            };
            match action {
                CatalogAction::Quit => should_exit.set(true),
                CatalogAction::Reload => {
                    dispatch(&mut state, action, layout);
                    needs_reload.set(true);
                }
                action => {
                    dispatch(&mut state, action, layout);
                    if state.read().filter.search.is_empty() && !search_query.read().is_empty() {
                        search_query.set(String::new());
                    }
                }
            }
        }
    });

    if should_exit.get() {
        system.exit();
    }

    // Typing in the search box re-filters on every keystroke
    let query = search_query.to_string();
    if search_differs(&state.read().filter, &query) {
        dispatch(&mut state, CatalogAction::UpdateSearch(query), layout);
    }

    let toast_expired = state
        .read()
        .toast
        .as_ref()
        .is_some_and(|t| t.is_expired(Instant::now()));
    if toast_expired {
        dispatch(&mut state, CatalogAction::DismissToast, layout);
    }

    let current = state.read().clone();
    let vm = compute_view_model(&current);
    let theme = theme();
    let source_label = props.source.as_ref().map(|s| s.describe());
    let modal_open = vm.detail.is_some();

    let grid = match vm.view.clone() {
        CatalogView::Loading => element! {
            EmptyState(kind: EmptyStateKind::Loading)
        }
        .into_any(),
        CatalogView::Error { message, reason } => element! {
            EmptyState(
                kind: EmptyStateKind::LoadFailed,
                message: Some(message),
                detail: Some(reason),
                on_retry: Some(retry),
            )
        }
        .into_any(),
        CatalogView::Empty => element! {
            EmptyState(kind: EmptyStateKind::NoResults)
        }
        .into_any(),
        CatalogView::Populated(cards) => {
            let rows: Vec<_> = cards
                .chunks(layout.columns)
                .enumerate()
                .skip(vm.scroll_row)
                .take(layout.visible_rows)
                .map(|(row, chunk)| (row * layout.columns, chunk.to_vec()))
                .collect();

            element! {
                View(
                    flex_grow: 1.0,
                    flex_direction: FlexDirection::Column,
                    overflow: Overflow::Hidden,
                ) {
                    #(rows.into_iter().map(|(first, chunk)| element! {
                        View(flex_direction: FlexDirection::Row, gap: 1) {
                            #(chunk.into_iter().enumerate().map(|(offset, card)| {
                                let index = first + offset;
                                element! {
                                    Clickable(
                                        on_click: if modal_open { None } else { Some(open_card.clone()) },
                                        tag: index,
                                        on_scroll_up: Some(scroll_up.clone()),
                                        on_scroll_down: Some(scroll_down.clone()),
                                    ) {
                                        EventCardView(
                                            card: Some(card),
                                            is_selected: index == vm.selected_index && !vm.search_focused,
                                            width: CARD_WIDTH,
                                        )
                                    }
                                }
                            }))
                        }
                    }))
                }
            }
            .into_any()
        }
    };

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
            position: Position::Relative,
        ) {
            Header(
                source: source_label,
                visible_count: vm.visible_count,
                total_count: vm.total_count,
                refreshing: vm.refreshing,
            )

            SearchBox(value: Some(search_query), has_focus: vm.search_focused && !modal_open)

            View(
                flex_grow: 1.0,
                flex_direction: FlexDirection::Row,
                width: 100pct,
                overflow: Overflow::Hidden,
            ) {
                FilterPanel(model: Some(vm.filter_panel.clone()))
                View(flex_grow: 1.0, margin_left: 1, overflow: Overflow::Hidden) {
                    #(Some(grid))
                }
            }

            #(render_toast(&vm.toast))

            Footer(shortcuts: vm.shortcuts.clone())

            #(vm.detail.clone().map(|detail| element! {
                EventDetailModal(detail: Some(detail), on_close: Some(close_detail.clone()))
            }))
        }
    }
}
