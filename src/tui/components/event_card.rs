//! Event card component for the catalog grid
//!
//! ```text
//! ╭──────────────────────────────╮
//! │ conference            Mar 1  │
//! │ International Conference on  │
//! │ Data Science                 │
//! │ ◉ Bengaluru                  │
//! │ ₹4500                        │
//! │ IEEE, Scopus +1              │
//! ╰──────────────────────────────╯
//! ```

use iocraft::prelude::*;

use crate::display::EventCard;
use crate::tui::theme::theme;
use crate::utils::{join_limited, truncate_string, wrap_words};

/// Title lines shown on a card.
const TITLE_LINES: usize = 2;

#[derive(Default, Props)]
pub struct EventCardViewProps {
    pub card: Option<EventCard>,
    pub is_selected: bool,
    /// Outer width of the card, borders included
    pub width: u16,
}

#[component]
pub fn EventCardView(props: &EventCardViewProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(card) = props.card.clone() else {
        return element!(View);
    };

    let inner = (props.width as usize).saturating_sub(4).max(8);
    let border_color = if props.is_selected {
        theme.border_focused
    } else {
        theme.border
    };
    let date = format!("{} {}", card.month, card.day);
    let badge = card.badge.to_string();
    let badge_width = inner.saturating_sub(date.chars().count() + 1);

    let mut title_lines = wrap_words(&card.title, inner, TITLE_LINES);
    title_lines.resize(TITLE_LINES, String::new());

    let location = truncate_string(
        &format!("{} {}", card.location_icon.glyph(), card.location),
        inner,
    );
    let tags = join_limited(&card.tags, ", ", inner.saturating_sub(4));

    element! {
        View(
            width: props.width as u32,
            height: 8,
            flex_direction: FlexDirection::Column,
            border_style: if props.is_selected { BorderStyle::Double } else { BorderStyle::Round },
            border_color: border_color,
            padding_left: 1,
            padding_right: 1,
        ) {
            View(flex_direction: FlexDirection::Row, justify_content: JustifyContent::SpaceBetween) {
                Text(
                    content: truncate_string(&badge, badge_width),
                    color: theme.type_color(card.badge),
                    weight: Weight::Bold,
                )
                Text(content: date, color: theme.date_box, weight: Weight::Bold)
            }
            #(title_lines.into_iter().map(|line| element! {
                Text(
                    content: line,
                    color: if props.is_selected { theme.highlight_text } else { theme.text },
                    weight: if props.is_selected { Weight::Bold } else { Weight::Normal },
                )
            }))
            Text(content: location, color: theme.text_dimmed)
            Text(content: card.price.clone(), color: theme.price_color(&card.price))
            Text(content: tags, color: theme.tag)
        }
    }
}
