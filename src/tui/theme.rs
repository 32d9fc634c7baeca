//! Theme system for TUI colors and styles
//!
//! Type colors match the badges printed by the CLI (`display::format_type_colored`).

use iocraft::prelude::Color;

use crate::types::EventType;

const GRAY: Color = Color::Rgb {
    r: 120,
    g: 120,
    b: 120,
};

#[derive(Debug, Clone)]
pub struct Theme {
    // Type badges
    pub type_conference: Color,
    pub type_hackathon: Color,

    pub price_free: Color,
    pub price_paid: Color,
    pub tag: Color,
    pub date_box: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub highlight_text: Color,
    pub search_match: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            type_conference: Color::Cyan,
            type_hackathon: Color::Magenta,

            price_free: Color::Green,
            price_paid: Color::Yellow,
            tag: Color::Blue,
            date_box: Color::Cyan,

            border: GRAY,
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: GRAY,
            highlight: Color::Blue,
            highlight_text: Color::White,
            search_match: Color::Yellow,
            error: Color::Red,
        }
    }
}

impl Theme {
    pub fn type_color(&self, event_type: EventType) -> Color {
        match event_type {
            EventType::Conference => self.type_conference,
            EventType::Hackathon => self.type_hackathon,
        }
    }

    pub fn price_color(&self, price_label: &str) -> Color {
        if price_label == "Free" {
            self.price_free
        } else {
            self.price_paid
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

pub fn theme() -> &'static Theme {
    &THEME
}
