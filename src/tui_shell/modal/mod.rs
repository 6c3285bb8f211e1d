use crossterm::event::KeyEvent;

use self::keymap::{ModalAction, map_modal_key};
use crate::explorer::UiTarget;

mod draw;
mod keymap;

pub(super) use self::draw::draw_modal;

pub(super) fn handle_modal_key(app: &mut super::App, key: KeyEvent) {
    let action = {
        let Some(m) = app.modal_mut() else {
            return;
        };
        map_modal_key(m, key)
    };

    match action {
        ModalAction::None => {}
        ModalAction::Close => {
            // Document modals belong to the explorer and close through it.
            let is_document = matches!(
                app.modal.as_ref().map(|m| &m.kind),
                Some(super::ModalKind::Document(_))
            );
            if is_document {
                app.handle_modal_target(UiTarget::ModalClose);
            } else {
                app.close_modal();
            }
        }
    }
}
