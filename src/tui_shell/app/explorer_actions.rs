use super::*;

impl App {
    /// Runs `target` through the controller against the snapshot on screen.
    pub(in crate::tui_shell) fn activate(&mut self, target: UiTarget) {
        let Some(snapshot) = self
            .frames
            .first()
            .and_then(|f| f.view.as_any().downcast_ref::<ExplorerView>())
            .and_then(|v| v.snapshot.clone())
        else {
            return;
        };
        let Some(ctrl) = self.explorer.as_mut() else {
            return;
        };

        match ctrl.activate(&snapshot, target) {
            Ok(rerender) => {
                let picked_day = matches!(target, UiTarget::ListItem(_)) && rerender == Rerender::Bucket;
                self.apply_rerender(rerender);
                if picked_day && let Some(v) = self.explorer_view_mut() {
                    v.focus_documents();
                }
            }
            Err(err) => {
                tracing::debug!(?target, error = %err, "explorer action rejected");
                self.push_error(format!("{}", err));
            }
        }
    }

    pub(in crate::tui_shell) fn handle_modal_target(&mut self, target: UiTarget) {
        let Some(event) = ExplorerEvent::from_modal_target(target) else {
            return;
        };
        let rerender = match self.explorer.as_mut() {
            Some(ctrl) => ctrl.dispatch(event),
            None => Ok(Rerender::CloseModal),
        };
        match rerender {
            Ok(r) => self.apply_rerender(r),
            Err(err) => self.push_error(format!("{}", err)),
        }
    }

    pub(in crate::tui_shell) fn apply_rerender(&mut self, rerender: Rerender) {
        match rerender {
            // A Years snapshot already carries the home panel, freshly
            // computed, so both repaint the same way.
            Rerender::Full | Rerender::FullWithHome => {
                let Some(snapshot) = self.fresh_snapshot() else {
                    return;
                };
                if let Some(v) = self.explorer_view_mut() {
                    v.replace(snapshot);
                }
            }
            Rerender::Bucket => {
                let Some(snapshot) = self.fresh_snapshot() else {
                    return;
                };
                if let Some(v) = self.explorer_view_mut() {
                    v.update_bucket(snapshot);
                }
            }
            Rerender::OpenDocument(id) => self.open_document(id),
            Rerender::CloseModal => self.close_modal(),
            Rerender::None => {}
        }
    }

    fn fresh_snapshot(&self) -> Option<crate::explorer::ExplorerSnapshot> {
        self.explorer
            .as_ref()
            .map(|c| c.snapshot(&self.home_ctx()))
    }

    fn open_document(&mut self, id: EditorialId) {
        let title = self
            .explorer
            .as_ref()
            .and_then(|c| c.store().get(&id))
            .map(|e| e.original_filename.clone())
            .unwrap_or_else(|| id.to_string());
        self.open_document_modal(title);

        let Some(source) = self.documents.clone() else {
            self.document_failed();
            return;
        };
        let tx = self.events.sender();
        let spawned = std::thread::Builder::new()
            .name("document-load".to_string())
            .spawn(move || {
                let result = load_document(&*source, &id);
                // The receiver is gone only when the app is shutting down.
                let _ = tx.send(AppEvent::DocumentLoaded { id, result });
            });
        if let Err(err) = spawned {
            tracing::warn!(error = %err, "could not spawn document load");
            self.document_failed();
        }
    }

    fn document_failed(&mut self) {
        if let Some(Modal {
            kind: ModalKind::Document(pane),
            ..
        }) = self.modal.as_mut()
        {
            *pane = DocumentPane::Failed;
        }
    }
}
