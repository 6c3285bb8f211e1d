//! Drill-down browser over editorials: years, then months, then days.
//!
//! [`DataStore`] owns the documents and their [`GroupedIndex`],
//! [`NavigationState`] tracks the drill-down level, [`render`] maps both to
//! an [`ExplorerSnapshot`], and [`ExplorerController`] turns activated UI
//! targets into typed [`ExplorerEvent`]s and applies them.

mod controller;
mod index;
mod nav;
mod render;
mod store;

pub use self::controller::{
    DocumentAction, ExplorerController, ExplorerError, ExplorerEvent, Rerender, UiTarget,
};
pub use self::index::{DayGroup, DayKey, GroupedIndex, MonthGroup, YearGroup};
pub use self::nav::{Level, NavigationError, NavigationState};
pub use self::render::{
    Breadcrumb, BucketView, DocumentCard, ExamCountdown, ExplorerSnapshot, HomeContext,
    HomeStats, ItemKey, ListEntry, NavTarget, render, render_bucket, render_home,
};
pub use self::store::{
    DataStore, EditorialSource, EditorialStats, StatusSink, StatusUpdate, per_day_metric,
};

#[cfg(test)]
#[path = "tests/explorer/support.rs"]
pub(crate) mod test_support;
