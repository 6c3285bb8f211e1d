use std::sync::mpsc::{Receiver, Sender, channel};

use super::*;
use crate::document::LoadedDocument;
use crate::error::DeskResult;

/// Results produced off the UI thread, applied by the event loop.
#[derive(Debug)]
pub(in crate::tui_shell) enum AppEvent {
    DocumentLoaded {
        id: EditorialId,
        result: DeskResult<LoadedDocument>,
    },
}

pub(in crate::tui_shell) struct EventChannel {
    tx: Sender<AppEvent>,
    rx: Receiver<AppEvent>,
}

impl Default for EventChannel {
    fn default() -> Self {
        let (tx, rx) = channel();
        Self { tx, rx }
    }
}

impl EventChannel {
    pub(in crate::tui_shell) fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }

    pub(in crate::tui_shell) fn try_recv(&self) -> Option<AppEvent> {
        self.rx.try_recv().ok()
    }

    #[cfg(test)]
    pub(in crate::tui_shell) fn recv_timeout(&self, timeout: Duration) -> Option<AppEvent> {
        self.rx.recv_timeout(timeout).ok()
    }
}

impl App {
    pub(in crate::tui_shell) fn drain_events(&mut self) {
        while let Some(ev) = self.events.try_recv() {
            self.apply_event(ev);
        }
    }

    pub(in crate::tui_shell) fn apply_event(&mut self, ev: AppEvent) {
        match ev {
            AppEvent::DocumentLoaded { id, result } => {
                // Applied to whatever document modal is open; there is no
                // check that it is still the one that was requested.
                let Some(m) = self.modal.as_mut() else {
                    tracing::debug!(%id, "document arrived after modal closed");
                    return;
                };
                let ModalKind::Document(pane) = &mut m.kind else {
                    return;
                };
                match result {
                    Ok(doc) => {
                        if let Some(title) = doc.front_matter.title.as_deref() {
                            m.title = title.to_string();
                        }
                        *pane = DocumentPane::Ready(doc.render_lines());
                        m.scroll = 0;
                    }
                    Err(err) => {
                        tracing::warn!(%id, error = %err, "document view failed");
                        *pane = DocumentPane::Failed;
                    }
                }
            }
        }
    }
}
