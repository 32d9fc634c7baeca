//! Placeholder shown instead of the card grid.

use iocraft::prelude::*;

use super::Clickable;
use crate::display::{EMPTY_MESSAGE, LOADING_MESSAGE};
use crate::tui::theme::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyStateKind {
    /// First fetch in flight
    #[default]
    Loading,
    /// Fetch failed; a retry control is shown
    LoadFailed,
    /// Data loaded, nothing matches the filters
    NoResults,
}

#[derive(Default, Props)]
pub struct EmptyStateProps {
    pub kind: EmptyStateKind,
    /// Main message; the kind's default text when absent
    pub message: Option<String>,
    /// Secondary line, e.g. the underlying error
    pub detail: Option<String>,
    /// Invoked when the retry button is clicked
    pub on_retry: Option<Handler<usize>>,
}

#[component]
pub fn EmptyState(props: &EmptyStateProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let (icon, title, default_message, hint) = match props.kind {
        EmptyStateKind::Loading => ("~", "Loading", LOADING_MESSAGE, ""),
        EmptyStateKind::LoadFailed => ("!", "Load Failed", "", "Press 'r' to retry."),
        EmptyStateKind::NoResults => (
            "?",
            "No Results",
            EMPTY_MESSAGE,
            "Adjust the filters, or press 'x' to reset them.",
        ),
    };
    let message = props
        .message
        .clone()
        .unwrap_or_else(|| default_message.to_string());
    let accent = if props.kind == EmptyStateKind::LoadFailed {
        theme.error
    } else {
        theme.border
    };

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: 2,
        ) {
            View(
                width: 5,
                height: 3,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border_style: BorderStyle::Round,
                border_color: accent,
                margin_bottom: 1,
            ) {
                Text(content: icon, color: accent, weight: Weight::Bold)
            }

            Text(content: title, color: theme.text, weight: Weight::Bold)

            View(margin_top: 1, max_width: 70) {
                Text(content: message, color: theme.text_dimmed)
            }

            #(props.detail.clone().map(|detail| element! {
                View(margin_top: 1, max_width: 70) {
                    Text(content: detail, color: theme.error)
                }
            }))

            #(if props.kind == EmptyStateKind::LoadFailed {
                Some(element! {
                    View(margin_top: 1) {
                        Clickable(on_click: props.on_retry.clone(), tag: 0usize) {
                            View(
                                border_style: BorderStyle::Round,
                                border_color: theme.border_focused,
                                padding_left: 2,
                                padding_right: 2,
                            ) {
                                Text(content: "Retry", color: theme.text, weight: Weight::Bold)
                            }
                        }
                    }
                })
            } else {
                None
            })

            #(if !hint.is_empty() {
                Some(element! {
                    View(margin_top: 1) {
                        Text(content: hint, color: theme.text_dimmed)
                    }
                })
            } else {
                None
            })
        }
    }
}
