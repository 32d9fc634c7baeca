//! Search input component
//!
//! A bordered text input with a `/` prefix, bound to a `State<String>`.

use iocraft::prelude::*;

use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct SearchBoxProps {
    /// State for the search query value
    pub value: Option<State<String>>,
    /// Whether the search box has focus
    pub has_focus: bool,
}

#[component]
pub fn SearchBox(props: &SearchBoxProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let border_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.border
    };

    let Some(mut value) = props.value else {
        return element! {
            View(height: 3)
        };
    };

    let placeholder = !props.has_focus && value.read().is_empty();

    element! {
        View(
            flex_direction: FlexDirection::Row,
            border_style: BorderStyle::Round,
            border_color: border_color,
            padding_left: 1,
            padding_right: 1,
            height: 3,
            flex_shrink: 0.0,
        ) {
            View(margin_right: 1) {
                Text(
                    content: "/",
                    color: if props.has_focus { theme.border_focused } else { theme.text_dimmed },
                )
            }
            View(flex_grow: 1.0) {
                #(Some(if placeholder {
                    element! {
                        Text(content: "Search by title or location", color: theme.text_dimmed)
                    }.into_any()
                } else {
                    element! {
                        TextInput(
                            value: value.to_string(),
                            has_focus: props.has_focus,
                            on_change: move |new_value| value.set(new_value),
                            color: theme.search_match,
                        )
                    }.into_any()
                }))
            }
        }
    }
}
