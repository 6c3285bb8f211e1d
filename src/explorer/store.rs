use std::sync::Arc;

use serde::Serialize;

use super::index::{DayKey, GroupedIndex};
use crate::error::{DeskError, DeskResult};
use crate::model::{AthenaId, Editorial, EditorialId};

/// Where the editorial list comes from.
pub trait EditorialSource {
    fn fetch_editorials(&self) -> DeskResult<Vec<Editorial>>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusUpdate {
    pub athena_id: AthenaId,
    pub is_read: bool,
}

/// Receives read/unread changes after they are applied locally. Delivery is
/// the sink's business; callers never wait for or observe the outcome.
pub trait StatusSink {
    fn submit(&self, update: StatusUpdate);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct EditorialStats {
    pub total: usize,
    pub read: usize,
    pub unread: usize,
    pub per_day: f64,
}

/// Unread documents per remaining day, rounded to one decimal.
pub fn per_day_metric(unread: usize, total_days_available: i64) -> f64 {
    if total_days_available <= 0 {
        return 0.0;
    }
    let raw = unread as f64 / total_days_available as f64;
    (raw * 10.0).round() / 10.0
}

pub struct DataStore {
    documents: Vec<Editorial>,
    index: GroupedIndex,
    status: Arc<dyn StatusSink>,
}

impl std::fmt::Debug for DataStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataStore")
            .field("documents", &self.documents.len())
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl DataStore {
    pub fn load(source: &dyn EditorialSource, status: Arc<dyn StatusSink>) -> DeskResult<Self> {
        let documents = source.fetch_editorials()?;
        Ok(Self::from_documents(documents, status))
    }

    pub fn from_documents(documents: Vec<Editorial>, status: Arc<dyn StatusSink>) -> Self {
        let index = GroupedIndex::build(&documents);
        tracing::info!(
            documents = documents.len(),
            years = index.years().len(),
            "editorial index built"
        );
        Self {
            documents,
            index,
            status,
        }
    }

    pub fn documents(&self) -> &[Editorial] {
        &self.documents
    }

    pub fn index(&self) -> &GroupedIndex {
        &self.index
    }

    /// Re-derives the grouping from the current list.
    pub fn group(&self) -> GroupedIndex {
        GroupedIndex::build(&self.documents)
    }

    pub fn get(&self, id: &EditorialId) -> Option<&Editorial> {
        self.documents.iter().find(|d| &d.id == id)
    }

    /// Documents of one day, in source order. Empty for unknown days.
    pub fn bucket(&self, key: DayKey) -> Vec<&Editorial> {
        self.index
            .day(key)
            .map(|d| d.entries.iter().map(|&pos| &self.documents[pos]).collect())
            .unwrap_or_default()
    }

    /// Flips the read flag of `id` inside the `key` bucket and hands the new
    /// state to the status sink.
    pub fn toggle_read(&mut self, key: DayKey, id: &EditorialId) -> DeskResult<Editorial> {
        let pos = self
            .index
            .day(key)
            .and_then(|d| {
                d.entries
                    .iter()
                    .copied()
                    .find(|&pos| &self.documents[pos].id == id)
            })
            .ok_or_else(|| DeskError::not_found("editorial", id))?;

        let doc = &mut self.documents[pos];
        doc.is_read = !doc.is_read;
        let updated = doc.clone();

        tracing::debug!(id = %updated.id, is_read = updated.is_read, "toggled read status");
        self.status.submit(StatusUpdate {
            athena_id: updated.athena_id.clone(),
            is_read: updated.is_read,
        });
        Ok(updated)
    }

    pub fn stats(&self, total_days_available: i64) -> EditorialStats {
        let total = self.documents.len();
        let read = self.documents.iter().filter(|d| d.is_read).count();
        let unread = total - read;
        EditorialStats {
            total,
            read,
            unread,
            per_day: per_day_metric(unread, total_days_available),
        }
    }
}

#[cfg(test)]
#[path = "../tests/explorer/store_tests.rs"]
mod tests;
