//! Clickable wrapper component for mouse interaction
//!
//! Events are delivered only when they land inside the component bounds
//! (`use_local_terminal_events` does the hit-testing).

use iocraft::prelude::*;

#[derive(Default, Props)]
pub struct ClickableProps<'a> {
    pub children: Vec<AnyElement<'a>>,
    /// Invoked with `tag` on mouse down
    pub on_click: Option<Handler<usize>>,
    /// Passed to `on_click`, e.g. the index of a card
    pub tag: usize,
    pub on_scroll_up: Option<Handler<()>>,
    pub on_scroll_down: Option<Handler<()>>,
}

/// Wraps its first child and forwards clicks and wheel scrolls.
///
/// ```ignore
/// let open_card = hooks.use_async_handler(move |index: usize| async move { /* ... */ });
///
/// element! {
///     Clickable(on_click: Some(open_card.clone()), tag: 3) {
///         Text(content: "Card 3")
///     }
/// }
/// ```
#[component]
pub fn Clickable<'a>(
    props: &mut ClickableProps<'a>,
    mut hooks: Hooks,
) -> impl Into<AnyElement<'a>> {
    let on_click = props.on_click.clone();
    let tag = props.tag;
    let on_scroll_up = props.on_scroll_up.clone();
    let on_scroll_down = props.on_scroll_down.clone();

    hooks.use_local_terminal_events({
        move |event| {
            if let TerminalEvent::FullscreenMouse(mouse_event) = event {
                match mouse_event.kind {
                    MouseEventKind::Down(_) => {
                        if let Some(ref handler) = on_click {
                            handler(tag);
                        }
                    }
                    MouseEventKind::ScrollUp => {
                        if let Some(ref handler) = on_scroll_up {
                            handler(());
                        }
                    }
                    MouseEventKind::ScrollDown => {
                        if let Some(ref handler) = on_scroll_down {
                            handler(());
                        }
                    }
                    _ => {}
                }
            }
        }
    });

    match props.children.iter_mut().next() {
        Some(child) => child.into(),
        None => element!(View).into_any(),
    }
}
