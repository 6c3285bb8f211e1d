use crate::explorer::{DocumentAction, ExplorerSnapshot, UiTarget};

use super::super::{RenderCtx, UiMode, View};

mod home;
mod render;
mod rows;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(in crate::tui_shell) enum Focus {
    #[default]
    Items,
    Documents,
}

/// Last snapshot produced by the controller plus the cursor state the
/// controller does not track.
#[derive(Debug, Default)]
pub(in crate::tui_shell) struct ExplorerView {
    pub(in crate::tui_shell) snapshot: Option<ExplorerSnapshot>,
    pub(in crate::tui_shell) error: Option<String>,
    pub(in crate::tui_shell) focus: Focus,
    pub(in crate::tui_shell) item_cursor: usize,
    pub(in crate::tui_shell) doc_cursor: usize,
}

impl ExplorerView {
    /// New level: list and crumbs change, cursors start over.
    pub(in crate::tui_shell) fn replace(&mut self, snapshot: ExplorerSnapshot) {
        self.snapshot = Some(snapshot);
        self.error = None;
        self.focus = Focus::Items;
        self.item_cursor = 0;
        self.doc_cursor = 0;
    }

    /// Same level: only the document list and the day marker change.
    pub(in crate::tui_shell) fn update_bucket(&mut self, next: ExplorerSnapshot) {
        let Some(cur) = self.snapshot.as_mut() else {
            self.snapshot = Some(next);
            return;
        };
        for (item, fresh) in cur.items.iter_mut().zip(&next.items) {
            item.selected = fresh.selected;
        }
        let switched_day = cur.bucket.as_ref().map(|b| b.key) != next.bucket.as_ref().map(|b| b.key);
        cur.bucket = next.bucket;
        if switched_day {
            self.doc_cursor = 0;
        }
        self.doc_cursor = self.doc_cursor.min(self.doc_count().saturating_sub(1));
    }

    pub(in crate::tui_shell) fn item_count(&self) -> usize {
        self.snapshot.as_ref().map(|s| s.items.len()).unwrap_or(0)
    }

    pub(in crate::tui_shell) fn doc_count(&self) -> usize {
        self.snapshot
            .as_ref()
            .and_then(|s| s.bucket.as_ref())
            .map(|b| b.cards.len())
            .unwrap_or(0)
    }

    pub(in crate::tui_shell) fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Items if self.doc_count() > 0 => Focus::Documents,
            _ => Focus::Items,
        };
    }

    pub(in crate::tui_shell) fn focus_documents(&mut self) {
        if self.doc_count() > 0 {
            self.focus = Focus::Documents;
        }
    }

    pub(in crate::tui_shell) fn enter_target(&self) -> Option<UiTarget> {
        match self.focus {
            Focus::Items if self.item_count() > 0 => Some(UiTarget::ListItem(self.item_cursor)),
            Focus::Items => None,
            Focus::Documents => self.document_target(DocumentAction::View),
        }
    }

    pub(in crate::tui_shell) fn document_target(&self, action: DocumentAction) -> Option<UiTarget> {
        if self.doc_count() == 0 {
            return None;
        }
        Some(UiTarget::Document {
            index: self.doc_cursor,
            action,
        })
    }

    /// Crumb one level up from the current one.
    pub(in crate::tui_shell) fn parent_crumb(&self) -> Option<UiTarget> {
        let n = self.snapshot.as_ref()?.breadcrumbs.len();
        (n >= 2).then(|| UiTarget::Breadcrumb(n - 2))
    }

    pub(in crate::tui_shell) fn home_crumb(&self) -> Option<UiTarget> {
        let n = self.snapshot.as_ref()?.breadcrumbs.len();
        (n >= 2).then_some(UiTarget::Breadcrumb(0))
    }
}

#[cfg(test)]
#[path = "../../../tests/tui_shell/explorer_view_tests.rs"]
mod tests;
