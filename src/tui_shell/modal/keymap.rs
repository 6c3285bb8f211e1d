use crossterm::event::{KeyCode, KeyEvent};

use super::super::Modal;

const PAGE: usize = 10;

#[derive(Debug, PartialEq, Eq)]
pub(super) enum ModalAction {
    None,
    Close,
}

pub(super) fn map_modal_key(modal: &mut Modal, key: KeyEvent) -> ModalAction {
    let max = modal.line_count().saturating_sub(1);
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => ModalAction::Close,
        KeyCode::Up | KeyCode::Char('k') => {
            modal.scroll = modal.scroll.saturating_sub(1);
            ModalAction::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            modal.scroll = (modal.scroll + 1).min(max);
            ModalAction::None
        }
        KeyCode::PageUp => {
            modal.scroll = modal.scroll.saturating_sub(PAGE);
            ModalAction::None
        }
        KeyCode::PageDown | KeyCode::Char(' ') => {
            modal.scroll = (modal.scroll + PAGE).min(max);
            ModalAction::None
        }
        KeyCode::Home | KeyCode::Char('g') => {
            modal.scroll = 0;
            ModalAction::None
        }
        KeyCode::End | KeyCode::Char('G') => {
            modal.scroll = max;
            ModalAction::None
        }
        _ => ModalAction::None,
    }
}
