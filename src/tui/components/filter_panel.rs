//! Filter sidebar: sort, location, type and indexing controls.

use iocraft::prelude::*;

use crate::query::TypeSelection;
use crate::tui::catalog::model::FilterPanelModel;
use crate::tui::theme::theme;

pub const FILTER_PANEL_WIDTH: u16 = 26;

#[derive(Default, Props)]
pub struct FilterPanelProps {
    pub model: Option<FilterPanelModel>,
}

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

fn radio(selected: bool) -> &'static str {
    if selected { "(o)" } else { "( )" }
}

#[component]
pub fn FilterPanel(props: &FilterPanelProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(model) = props.model.clone() else {
        return element!(View);
    };

    let heading = |label: &str| {
        element! {
            View(margin_top: 1) {
                Text(content: label.to_string(), color: theme.highlight, weight: Weight::Bold)
            }
        }
    };

    let indexing_color = if model.indexing_enabled {
        theme.text
    } else {
        theme.text_dimmed
    };

    element! {
        View(
            width: FILTER_PANEL_WIDTH as u32,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            flex_shrink: 0.0,
            border_style: BorderStyle::Round,
            border_color: theme.border,
            padding_left: 1,
            padding_right: 1,
            overflow: Overflow::Hidden,
        ) {
            Text(content: "Sort [s]", color: theme.highlight, weight: Weight::Bold)
            Text(content: model.sort_label.clone(), color: theme.text)

            #(Some(heading("Location [i/v]")))
            #(model.locations.iter().map(|(location, checked)| element! {
                Text(
                    content: format!("{} {}", checkbox(*checked), location),
                    color: theme.text,
                )
            }))

            #(Some(heading("Type [t]")))
            #(TypeSelection::ALL.iter().map(|t| element! {
                Text(
                    content: format!("{} {}", radio(*t == model.event_type), t),
                    color: if *t == model.event_type { theme.search_match } else { theme.text },
                )
            }))

            #(Some(heading(if model.indexing_enabled { "Indexing [1-9]" } else { "Indexing (n/a)" })))
            #(if model.indexing.is_empty() {
                Some(element! {
                    Text(content: "none in feed", color: theme.text_dimmed)
                })
            } else {
                None
            })
            #(model.indexing.iter().map(|option| element! {
                Text(
                    content: match option.slot {
                        Some(slot) => format!("{} {} {}", slot, checkbox(option.checked), option.label),
                        None => format!("  {} {}", checkbox(option.checked), option.label),
                    },
                    color: indexing_color,
                )
            }))
        }
    }
}
