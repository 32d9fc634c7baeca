//! Detail modal for one event.

use iocraft::prelude::*;

use super::{ModalContainer, ModalOverlay};
use crate::display::EventDetail;
use crate::tui::theme::theme;
use crate::utils::truncate_string;

pub const DETAIL_MODAL_WIDTH: u16 = 72;
pub const DETAIL_MODAL_HEIGHT: u16 = 22;

#[derive(Default, Props)]
pub struct EventDetailModalProps {
    pub detail: Option<EventDetail>,
    /// Closes the modal; bound to backdrop clicks
    pub on_close: Option<Handler<()>>,
}

#[component]
pub fn EventDetailModal(
    props: &EventDetailModalProps,
    mut hooks: Hooks,
) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let (term_width, term_height) = hooks.use_terminal_size();
    let Some(detail) = props.detail.clone() else {
        return element!(View).into_any();
    };

    let width = DETAIL_MODAL_WIDTH.min(term_width.saturating_sub(2));
    let height = DETAIL_MODAL_HEIGHT.min(term_height.saturating_sub(2));
    let value_width = (width as usize).saturating_sub(16);

    element! {
        ModalOverlay(
            content_width: width,
            content_height: height,
            on_backdrop_click: props.on_close.clone(),
        ) {
            ModalContainer(
                width,
                height,
                title: Some(detail.title.clone()),
                badge: Some(detail.badge.to_string()),
                badge_color: Some(theme.type_color(detail.badge)),
                footer_text: Some("Esc/q or click outside to close".to_string()),
            ) {
                #(detail.rows().into_iter().skip(1).map(|(label, value)| element! {
                    View(flex_direction: FlexDirection::Row) {
                        View(width: 11, flex_shrink: 0.0) {
                            Text(content: label, color: theme.text_dimmed, weight: Weight::Bold)
                        }
                        Text(content: truncate_string(&value, value_width), color: theme.text)
                    }
                }))
                View(margin_top: 1, flex_grow: 1.0, overflow: Overflow::Hidden) {
                    Text(content: detail.description.clone(), color: theme.text, wrap: TextWrap::Wrap)
                }
            }
        }
    }
    .into_any()
}
