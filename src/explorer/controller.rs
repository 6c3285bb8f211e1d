use thiserror::Error;
use time::Month;

use super::index::DayKey;
use super::nav::{NavigationError, NavigationState};
use super::render::{ExplorerSnapshot, HomeContext, ItemKey, NavTarget, render};
use super::store::DataStore;
use crate::error::DeskError;
use crate::model::{Editorial, EditorialId};

/// Something the user activated, before interpretation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiTarget {
    ListItem(usize),
    Breadcrumb(usize),
    Document { index: usize, action: DocumentAction },
    ModalBackdrop,
    ModalClose,
    ModalBody,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentAction {
    View,
    ToggleRead,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExplorerEvent {
    NavigateYear(i32),
    NavigateMonth(Month),
    NavigateBack,
    GoHome,
    SelectDay(u8),
    ViewDocument(EditorialId),
    ToggleRead(EditorialId),
    CloseModal,
}

impl ExplorerEvent {
    /// Modal targets need no snapshot: the backdrop and the close control
    /// close, the body is inert.
    pub fn from_modal_target(target: UiTarget) -> Option<Self> {
        match target {
            UiTarget::ModalBackdrop | UiTarget::ModalClose => Some(ExplorerEvent::CloseModal),
            _ => None,
        }
    }
}

/// What the view has to redraw after an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rerender {
    /// Breadcrumbs and item list.
    Full,
    /// Back at the root: item list plus the home statistics.
    FullWithHome,
    /// Only the selected day's document list.
    Bucket,
    OpenDocument(EditorialId),
    CloseModal,
    None,
}

#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error(transparent)]
    Navigation(#[from] NavigationError),
    #[error(transparent)]
    Data(#[from] DeskError),
}

#[derive(Debug)]
pub struct ExplorerController {
    store: DataStore,
    nav: NavigationState,
    selection: Option<u8>,
}

impl ExplorerController {
    pub fn new(store: DataStore) -> Self {
        Self {
            store,
            nav: NavigationState::Years,
            selection: None,
        }
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    pub fn nav(&self) -> NavigationState {
        self.nav
    }

    pub fn selection(&self) -> Option<u8> {
        self.selection
    }

    pub fn selected_day(&self) -> Option<DayKey> {
        match (self.nav, self.selection) {
            (NavigationState::Days { year, month }, Some(day)) => Some(DayKey { year, month, day }),
            _ => None,
        }
    }

    pub fn snapshot(&self, home: &HomeContext<'_>) -> ExplorerSnapshot {
        render(self.nav, &self.store, self.selection, home)
    }

    /// Interprets `target` against the snapshot the user was looking at.
    /// Inert targets (modal body, out-of-range rows, the current crumb)
    /// classify to `None`.
    pub fn classify(&self, snapshot: &ExplorerSnapshot, target: UiTarget) -> Option<ExplorerEvent> {
        match target {
            UiTarget::ListItem(i) => {
                let entry = snapshot.items.get(i)?;
                Some(match entry.key {
                    ItemKey::Year(y) => ExplorerEvent::NavigateYear(y),
                    ItemKey::Month(m) => ExplorerEvent::NavigateMonth(m),
                    ItemKey::Day(d) => ExplorerEvent::SelectDay(d),
                })
            }
            UiTarget::Breadcrumb(i) => match snapshot.breadcrumbs.get(i)?.target? {
                NavTarget::Home => Some(ExplorerEvent::GoHome),
                NavTarget::Year(_) => Some(ExplorerEvent::NavigateBack),
            },
            UiTarget::Document { index, action } => {
                let card = snapshot.bucket.as_ref()?.cards.get(index)?;
                Some(match action {
                    DocumentAction::View => ExplorerEvent::ViewDocument(card.id.clone()),
                    DocumentAction::ToggleRead => ExplorerEvent::ToggleRead(card.id.clone()),
                })
            }
            UiTarget::ModalBackdrop | UiTarget::ModalClose | UiTarget::ModalBody => {
                ExplorerEvent::from_modal_target(target)
            }
        }
    }

    pub fn dispatch(&mut self, event: ExplorerEvent) -> Result<Rerender, ExplorerError> {
        tracing::debug!(?event, nav = ?self.nav, "explorer event");
        match event {
            ExplorerEvent::NavigateYear(year) => {
                self.set_nav(self.nav.select_year(self.store.index(), year)?);
                Ok(Rerender::Full)
            }
            ExplorerEvent::NavigateMonth(month) => {
                self.set_nav(self.nav.select_month(self.store.index(), month)?);
                Ok(Rerender::Full)
            }
            ExplorerEvent::NavigateBack => {
                self.set_nav(self.nav.back());
                Ok(self.landing_rerender())
            }
            ExplorerEvent::GoHome => {
                self.set_nav(self.nav.go_home());
                Ok(Rerender::FullWithHome)
            }
            ExplorerEvent::SelectDay(day) => {
                let key = self.nav.select_day(self.store.index(), day)?;
                self.selection = Some(key.day);
                Ok(Rerender::Bucket)
            }
            ExplorerEvent::ViewDocument(id) => {
                if self.store.get(&id).is_none() {
                    return Err(DeskError::not_found("editorial", &id).into());
                }
                Ok(Rerender::OpenDocument(id))
            }
            ExplorerEvent::ToggleRead(id) => {
                self.toggle_read(&id)?;
                Ok(Rerender::Bucket)
            }
            ExplorerEvent::CloseModal => Ok(Rerender::CloseModal),
        }
    }

    /// Classify and dispatch in one step.
    pub fn activate(
        &mut self,
        snapshot: &ExplorerSnapshot,
        target: UiTarget,
    ) -> Result<Rerender, ExplorerError> {
        match self.classify(snapshot, target) {
            Some(event) => self.dispatch(event),
            None => Ok(Rerender::None),
        }
    }

    pub fn toggle_read(&mut self, id: &EditorialId) -> Result<Editorial, ExplorerError> {
        let key = self
            .selected_day()
            .ok_or_else(|| DeskError::not_found("editorial", id))?;
        Ok(self.store.toggle_read(key, id)?)
    }

    fn set_nav(&mut self, next: NavigationState) {
        if next.level() != self.nav.level() {
            self.selection = None;
        }
        self.nav = next;
    }

    fn landing_rerender(&self) -> Rerender {
        if self.nav == NavigationState::Years {
            Rerender::FullWithHome
        } else {
            Rerender::Full
        }
    }
}

#[cfg(test)]
#[path = "../tests/explorer/controller_tests.rs"]
mod tests;
