//! Keyboard shortcuts bar component
//!
//! Displays available keyboard shortcuts at the bottom of the screen.

use iocraft::prelude::*;

use super::shortcuts::ShortcutsBuilder;
use crate::tui::theme::theme;

/// A single keyboard shortcut entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    /// The key or key combination (e.g., "q", "Ctrl+C", "Tab")
    pub key: String,
    /// Description of the action
    pub action: String,
}

impl Shortcut {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Props for the Footer component
#[derive(Default, Props)]
pub struct FooterProps {
    pub shortcuts: Vec<Shortcut>,
}

/// Keyboard shortcuts bar at the bottom of the screen
#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            min_height: 1,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            column_gap: 2,
            background_color: theme.border,
        ) {
            #(props.shortcuts.iter().map(|shortcut| {
                let key = shortcut.key.clone();
                let action = shortcut.action.clone();
                element! {
                    View(flex_direction: FlexDirection::Row) {
                        Text(
                            content: format!("[{}]", key),
                            color: theme.highlight,
                            weight: Weight::Bold,
                        )
                        Text(
                            content: format!(" {}", action),
                            color: theme.text,
                        )
                    }
                }
            }))
        }
    }
}

/// Shortcuts for the card grid
pub fn catalog_shortcuts(filters_active: bool) -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .with_navigation()
        .with_filters(filters_active)
        .add("r", "Reload")
        .with_quit()
        .build()
}

/// Shortcuts while typing in the search box
pub fn search_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("Enter", "Apply Search")
        .add("Tab", "Exit Search")
        .add("Esc", "Clear & Exit")
        .add("C-c", "Quit")
        .build()
}

/// Shortcuts while the detail modal is open
pub fn detail_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("Esc/q", "Close")
        .add("click outside", "Close")
        .build()
}

/// Shortcuts while the load failed
pub fn error_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("r/Enter", "Retry")
        .with_quit()
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shortcuts_offer_reload_and_quit() {
        let shortcuts = catalog_shortcuts(false);
        assert!(shortcuts.contains(&Shortcut::new("r", "Reload")));
        assert_eq!(shortcuts.last(), Some(&Shortcut::new("q", "Quit")));
    }

    #[test]
    fn test_error_shortcuts_offer_retry() {
        assert_eq!(error_shortcuts()[0].action, "Retry");
    }
}
