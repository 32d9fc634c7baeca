//! Modal container component
//!
//! Bordered box with a title row, a content area and an optional footer line.

use iocraft::prelude::*;

use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct ModalContainerProps<'a> {
    pub width: u16,
    pub height: u16,
    pub border_color: Option<Color>,
    pub title: Option<String>,
    pub title_color: Option<Color>,
    /// Right-aligned text in the title row, e.g. a type badge
    pub badge: Option<String>,
    pub badge_color: Option<Color>,
    pub footer_text: Option<String>,
    pub children: Vec<AnyElement<'a>>,
}

#[component]
pub fn ModalContainer<'a>(props: &mut ModalContainerProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();

    let border_color = props.border_color.unwrap_or(theme.border_focused);
    let title = props.title.clone().unwrap_or_default();
    let title_color = props.title_color.unwrap_or(Color::Cyan);
    let badge = props.badge.clone();
    let badge_color = props.badge_color.unwrap_or(theme.text_dimmed);
    let footer = props.footer_text.clone();

    element! {
        View(
            width: props.width as u32,
            height: props.height as u32,
            background_color: Color::Black,
            border_style: BorderStyle::Double,
            border_color: border_color,
            padding_left: 1,
            padding_right: 1,
            flex_direction: FlexDirection::Column,
        ) {
            View(
                width: 100pct,
                border_edges: Edges::Bottom,
                border_style: BorderStyle::Single,
                border_color: theme.border,
                flex_direction: FlexDirection::Row,
                flex_shrink: 0.0,
            ) {
                View(flex_grow: 1.0) {
                    Text(content: title, color: title_color, weight: Weight::Bold)
                }
                #(badge.map(|b| element! {
                    Text(content: format!(" [{}]", b), color: badge_color, weight: Weight::Bold)
                }))
            }

            View(
                flex_grow: 1.0,
                width: 100pct,
                flex_direction: FlexDirection::Column,
                overflow: Overflow::Hidden,
            ) {
                #(std::mem::take(&mut props.children))
            }

            #(footer.map(|text| element! {
                View(
                    width: 100pct,
                    border_edges: Edges::Top,
                    border_style: BorderStyle::Single,
                    border_color: theme.border,
                    flex_shrink: 0.0,
                ) {
                    Text(content: text, color: theme.text_dimmed)
                }
            }))
        }
    }
}
