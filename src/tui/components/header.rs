//! App header bar component
//!
//! Displays the application title, the event source and the visible count.

use iocraft::prelude::*;

use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct HeaderProps {
    /// Where events come from (URL or file path)
    pub source: Option<String>,
    /// Number of events passing the filter
    pub visible_count: Option<usize>,
    /// Number of events loaded
    pub total_count: Option<usize>,
    /// A reload is in flight over existing data
    pub refreshing: bool,
}

/// Format the right side of the header, e.g. `12 of 40 events`.
pub fn count_label(visible: Option<usize>, total: Option<usize>) -> Option<String> {
    match (visible, total) {
        (Some(v), Some(t)) => Some(format!("{v} of {t} events")),
        (None, Some(t)) => Some(format!("{t} events")),
        _ => None,
    }
}

#[component]
pub fn Header(props: &HeaderProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let left_text = match &props.source {
        Some(source) => format!("NexEvent - {}", source),
        None => "NexEvent".to_string(),
    };
    let mut right_text = count_label(props.visible_count, props.total_count).unwrap_or_default();
    if props.refreshing {
        right_text = format!("refreshing...  {}", right_text);
    }

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
            background_color: theme.highlight,
        ) {
            Text(content: left_text, color: theme.highlight_text, weight: Weight::Bold)
            Text(content: right_text, color: theme.highlight_text)
        }
    }
}
