use super::*;

impl App {
    pub(in crate::tui_shell) fn push_error(&mut self, msg: impl Into<String>) {
        self.last_result = Some(StatusEntry {
            at: now_local(),
            text: msg.into(),
        });
    }

    pub(in crate::tui_shell) fn open_modal(&mut self, title: impl Into<String>, lines: Vec<String>) {
        self.modal = Some(Modal {
            title: title.into(),
            kind: ModalKind::Viewer(lines.into_iter().map(Line::from).collect()),
            scroll: 0,
        });
    }

    pub(in crate::tui_shell) fn open_document_modal(&mut self, title: impl Into<String>) {
        self.modal = Some(Modal {
            title: title.into(),
            kind: ModalKind::Document(DocumentPane::Loading),
            scroll: 0,
        });
    }

    pub(in crate::tui_shell) fn modal_mut(&mut self) -> Option<&mut Modal> {
        self.modal.as_mut()
    }

    pub(in crate::tui_shell) fn close_modal(&mut self) {
        self.modal = None;
    }

    pub(super) fn open_help(&mut self) {
        self.open_modal(
            "Keys",
            vec![
                "Explorer".to_string(),
                "  Up/Down     move".to_string(),
                "  Tab         switch between dates and documents".to_string(),
                "  Enter       open year/month, select day, view document".to_string(),
                "  v           view document".to_string(),
                "  r / Space   toggle read".to_string(),
                "  Backspace   up one level".to_string(),
                "  h / Home    back to all years".to_string(),
                String::new(),
                "Global".to_string(),
                "  e           exam countdown".to_string(),
                "  p           performance chart".to_string(),
                "  Esc         back / close".to_string(),
                "  ?           this help".to_string(),
                "  q           quit".to_string(),
            ],
        );
    }
}
