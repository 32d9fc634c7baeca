//! Declarative builder for TUI shortcuts

use super::Shortcut;

/// Builder for creating shortcut lists with common patterns
#[derive(Default)]
pub struct ShortcutsBuilder {
    shortcuts: Vec<Shortcut>,
}

impl ShortcutsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arrow keys / hjkl across the card grid
    pub fn with_navigation(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("←↑↓→/hjkl", "Move"));
        self.shortcuts.push(Shortcut::new("Enter", "Details"));
        self
    }

    /// Filter control keys; reset is listed only when a filter is active
    pub fn with_filters(mut self, filters_active: bool) -> Self {
        self.shortcuts.push(Shortcut::new("/", "Search"));
        self.shortcuts.push(Shortcut::new("s/S", "Sort"));
        self.shortcuts.push(Shortcut::new("i/v", "India/Virtual"));
        self.shortcuts.push(Shortcut::new("t/T", "Type"));
        self.shortcuts.push(Shortcut::new("1-9", "Indexing"));
        if filters_active {
            self.shortcuts.push(Shortcut::new("x", "Reset"));
        }
        self
    }

    pub fn with_quit(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("q", "Quit"));
        self
    }

    /// Add a single custom shortcut
    pub fn add(mut self, key: &str, description: &str) -> Self {
        self.shortcuts.push(Shortcut::new(key, description));
        self
    }

    pub fn build(self) -> Vec<Shortcut> {
        self.shortcuts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_order() {
        let shortcuts = ShortcutsBuilder::new()
            .with_navigation()
            .add("r", "Reload")
            .with_quit()
            .build();
        let keys: Vec<&str> = shortcuts.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["←↑↓→/hjkl", "Enter", "r", "q"]);
    }

    #[test]
    fn test_filter_shortcuts() {
        let shortcuts = ShortcutsBuilder::new().with_filters(true).build();
        assert_eq!(shortcuts.len(), 6);
        assert_eq!(shortcuts[0].action, "Search");

        let shortcuts = ShortcutsBuilder::new().with_filters(false).build();
        assert_eq!(shortcuts.len(), 5);
        assert!(shortcuts.iter().all(|s| s.key != "x"));
    }
}
