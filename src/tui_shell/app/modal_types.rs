use ratatui::text::Line;

#[derive(Debug)]
pub(in crate::tui_shell) struct Modal {
    pub(in crate::tui_shell) title: String,
    pub(in crate::tui_shell) kind: ModalKind,
    pub(in crate::tui_shell) scroll: usize,
}

#[derive(Debug)]
pub(in crate::tui_shell) enum ModalKind {
    Viewer(Vec<Line<'static>>),
    Document(DocumentPane),
}

#[derive(Debug)]
pub(in crate::tui_shell) enum DocumentPane {
    Loading,
    Ready(Vec<Line<'static>>),
    Failed,
}

impl Modal {
    pub(in crate::tui_shell) fn line_count(&self) -> usize {
        match &self.kind {
            ModalKind::Viewer(lines) | ModalKind::Document(DocumentPane::Ready(lines)) => {
                lines.len()
            }
            ModalKind::Document(_) => 1,
        }
    }
}
