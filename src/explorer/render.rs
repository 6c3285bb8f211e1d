use serde::Serialize;
use time::Month;

use super::index::DayKey;
use super::nav::{Level, NavigationState};
use super::store::{DataStore, EditorialStats};
use crate::model::{EditorialId, UpcomingExam};

pub const ROOT_LABEL: &str = "Editorials";

/// Where an ancestor breadcrumb leads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    Home,
    Year(i32),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Breadcrumb {
    pub label: String,
    /// `None` for the current level.
    pub target: Option<NavTarget>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKey {
    Year(i32),
    Month(Month),
    Day(u8),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListEntry {
    pub label: String,
    pub key: ItemKey,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExamCountdown {
    pub name: String,
    pub days_remaining: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HomeStats {
    pub next_exam: Option<ExamCountdown>,
    pub editorials: EditorialStats,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentCard {
    pub id: EditorialId,
    pub title: String,
    pub is_read: bool,
    pub status: &'static str,
    pub toggle_label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BucketView {
    pub key: DayKey,
    pub cards: Vec<DocumentCard>,
}

/// Inputs for the home panel that live outside the explorer.
#[derive(Clone, Copy, Debug, Default)]
pub struct HomeContext<'a> {
    /// Nearest upcoming exam, if any; its countdown is the day budget.
    pub next_exam: Option<&'a UpcomingExam>,
}

impl HomeContext<'_> {
    pub fn total_days_available(&self) -> i64 {
        self.next_exam.map(|e| e.days_remaining).unwrap_or(0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExplorerSnapshot {
    pub level: Level,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub items: Vec<ListEntry>,
    pub home: Option<HomeStats>,
    pub bucket: Option<BucketView>,
}

pub fn render(
    nav: NavigationState,
    store: &DataStore,
    selection: Option<u8>,
    home: &HomeContext<'_>,
) -> ExplorerSnapshot {
    let index = store.index();
    let mut breadcrumbs = Vec::new();
    let items: Vec<ListEntry>;

    match nav {
        NavigationState::Years => {
            breadcrumbs.push(crumb(ROOT_LABEL, None));
            items = index
                .years()
                .iter()
                .map(|y| ListEntry {
                    label: y.year.to_string(),
                    key: ItemKey::Year(y.year),
                    selected: false,
                })
                .collect();
        }
        NavigationState::Months { year } => {
            breadcrumbs.push(crumb(ROOT_LABEL, Some(NavTarget::Home)));
            breadcrumbs.push(crumb(&year.to_string(), None));
            items = index
                .year(year)
                .map(|y| {
                    y.months
                        .iter()
                        .map(|m| ListEntry {
                            label: m.month.to_string(),
                            key: ItemKey::Month(m.month),
                            selected: false,
                        })
                        .collect()
                })
                .unwrap_or_default();
        }
        NavigationState::Days { year, month } => {
            breadcrumbs.push(crumb(ROOT_LABEL, Some(NavTarget::Home)));
            breadcrumbs.push(crumb(&year.to_string(), Some(NavTarget::Year(year))));
            breadcrumbs.push(crumb(&month.to_string(), None));
            items = index
                .month(year, month)
                .map(|m| {
                    m.days
                        .iter()
                        .map(|d| ListEntry {
                            label: format!("{:02}", d.day),
                            key: ItemKey::Day(d.day),
                            selected: selection == Some(d.day),
                        })
                        .collect()
                })
                .unwrap_or_default();
        }
    }

    let home = match nav {
        NavigationState::Years => Some(render_home(store, home)),
        _ => None,
    };
    let bucket = match (nav, selection) {
        (NavigationState::Days { year, month }, Some(day)) => {
            Some(render_bucket(store, DayKey { year, month, day }))
        }
        _ => None,
    };

    ExplorerSnapshot {
        level: nav.level(),
        breadcrumbs,
        items,
        home,
        bucket,
    }
}

pub fn render_bucket(store: &DataStore, key: DayKey) -> BucketView {
    let cards = store
        .bucket(key)
        .into_iter()
        .map(|doc| DocumentCard {
            id: doc.id.clone(),
            title: doc.original_filename.clone(),
            is_read: doc.is_read,
            status: doc.status_label(),
            toggle_label: doc.toggle_label(),
        })
        .collect();
    BucketView { key, cards }
}

pub fn render_home(store: &DataStore, home: &HomeContext<'_>) -> HomeStats {
    HomeStats {
        next_exam: home.next_exam.map(|e| ExamCountdown {
            name: e.name.clone(),
            days_remaining: e.days_remaining,
        }),
        editorials: store.stats(home.total_days_available()),
    }
}

fn crumb(label: &str, target: Option<NavTarget>) -> Breadcrumb {
    Breadcrumb {
        label: label.to_string(),
        target,
    }
}

#[cfg(test)]
#[path = "../tests/explorer/render_tests.rs"]
mod tests;
