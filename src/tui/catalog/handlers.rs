//! Key mapping for the catalog view

use iocraft::prelude::{KeyCode, KeyModifiers};

use super::model::{CatalogAction, CatalogState, Direction};
use crate::repository::LoadStatus;
use crate::types::LocationCategory;

fn is_ctrl_c(code: KeyCode, modifiers: KeyModifiers) -> bool {
    code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL)
}

/// Convert a key event to a CatalogAction (pure function)
///
/// The detail modal and the search box capture input first. Returns `None`
/// if the key doesn't map to any action.
pub fn key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    state: &CatalogState,
) -> Option<CatalogAction> {
    if is_ctrl_c(code, modifiers) {
        return Some(CatalogAction::Quit);
    }

    if state.detail.is_some() {
        return match code {
            KeyCode::Esc | KeyCode::Char('q') => Some(CatalogAction::CloseDetail),
            _ => None,
        };
    }

    if state.search_focused {
        return search_key_to_action(code);
    }

    match code {
        // Navigation
        KeyCode::Char('h') | KeyCode::Left => Some(CatalogAction::Move(Direction::Left)),
        KeyCode::Char('l') | KeyCode::Right => Some(CatalogAction::Move(Direction::Right)),
        KeyCode::Char('k') | KeyCode::Up => Some(CatalogAction::Move(Direction::Up)),
        KeyCode::Char('j') | KeyCode::Down => Some(CatalogAction::Move(Direction::Down)),
        KeyCode::Char('g') | KeyCode::Home => Some(CatalogAction::GoToFirst),
        KeyCode::Char('G') | KeyCode::End => Some(CatalogAction::GoToLast),

        // Filters
        KeyCode::Char('/') => Some(CatalogAction::FocusSearch),
        KeyCode::Char('s') => Some(CatalogAction::NextSort),
        KeyCode::Char('S') => Some(CatalogAction::PrevSort),
        KeyCode::Char('i') => Some(CatalogAction::ToggleLocation(LocationCategory::India)),
        KeyCode::Char('v') => Some(CatalogAction::ToggleLocation(LocationCategory::Virtual)),
        KeyCode::Char('t') => Some(CatalogAction::NextType),
        KeyCode::Char('T') => Some(CatalogAction::PrevType),
        KeyCode::Char(c @ '1'..='9') if state.filter.indexing_enabled() => {
            let slot = c.to_digit(10).map(|d| d as usize - 1)?;
            Some(CatalogAction::ToggleIndexing(slot))
        }
        KeyCode::Char('x') => Some(CatalogAction::ResetFilters),

        // Actions
        KeyCode::Char('r') => Some(CatalogAction::Reload),
        KeyCode::Enter => match state.repository.status() {
            LoadStatus::Failed(_) => Some(CatalogAction::Reload),
            _ => Some(CatalogAction::OpenSelected),
        },
        KeyCode::Char('q') | KeyCode::Esc => Some(CatalogAction::Quit),

        _ => None,
    }
}

/// Keys handled while the search box has focus; text goes to the input.
fn search_key_to_action(code: KeyCode) -> Option<CatalogAction> {
    match code {
        KeyCode::Esc => Some(CatalogAction::ClearSearchAndExit),
        KeyCode::Enter | KeyCode::Tab => Some(CatalogAction::ExitSearch),
        _ => None,
    }
}
