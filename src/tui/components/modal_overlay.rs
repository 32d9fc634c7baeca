//! Modal overlay component
//!
//! Full-screen absolute layer that centers its content over a backdrop and
//! reports clicks that land outside the content box.

use iocraft::prelude::*;

/// Standard backdrop color for all modals
pub const MODAL_BACKDROP: Color = Color::Rgb {
    r: 30,
    g: 30,
    b: 30,
};

#[derive(Default, Props)]
pub struct ModalOverlayProps<'a> {
    pub children: Vec<AnyElement<'a>>,
    /// Size of the centered content box, used for hit-testing backdrop clicks
    pub content_width: u16,
    pub content_height: u16,
    /// Invoked on mouse down outside the content box
    pub on_backdrop_click: Option<Handler<()>>,
}

/// Whether a click at (`column`, `row`) misses a `box_width` x `box_height`
/// box centered in a `width` x `height` area.
pub fn is_outside_centered_box(
    column: u16,
    row: u16,
    width: u16,
    height: u16,
    box_width: u16,
    box_height: u16,
) -> bool {
    let left = width.saturating_sub(box_width) / 2;
    let top = height.saturating_sub(box_height) / 2;
    column < left || column >= left + box_width || row < top || row >= top + box_height
}

#[component]
pub fn ModalOverlay<'a>(
    props: &mut ModalOverlayProps<'a>,
    mut hooks: Hooks,
) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let box_width = props.content_width;
    let box_height = props.content_height;
    let on_backdrop_click = props.on_backdrop_click.clone();

    hooks.use_local_terminal_events(move |event| {
        if let TerminalEvent::FullscreenMouse(mouse_event) = event
            && matches!(mouse_event.kind, MouseEventKind::Down(_))
            && is_outside_centered_box(
                mouse_event.column,
                mouse_event.row,
                width,
                height,
                box_width,
                box_height,
            )
            && let Some(ref handler) = on_backdrop_click
        {
            handler(());
        }
    });

    element! {
        View(
            width: 100pct,
            height: 100pct,
            position: Position::Absolute,
            top: 0,
            left: 0,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            background_color: MODAL_BACKDROP,
        ) {
            #(std::mem::take(&mut props.children))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_inside_box() {
        // 80x24 area, 40x10 box: spans columns 20..60, rows 7..17
        assert!(!is_outside_centered_box(20, 7, 80, 24, 40, 10));
        assert!(!is_outside_centered_box(59, 16, 80, 24, 40, 10));
    }

    #[test]
    fn test_click_outside_box() {
        assert!(is_outside_centered_box(19, 10, 80, 24, 40, 10));
        assert!(is_outside_centered_box(60, 10, 80, 24, 40, 10));
        assert!(is_outside_centered_box(30, 6, 80, 24, 40, 10));
        assert!(is_outside_centered_box(30, 17, 80, 24, 40, 10));
    }

    #[test]
    fn test_box_larger_than_area_covers_everything() {
        assert!(!is_outside_centered_box(0, 0, 30, 10, 40, 20));
    }
}
