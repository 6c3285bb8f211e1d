//! Fire-and-forget delivery of read/unread changes.

use std::sync::Arc;

use super::RemoteClient;
use crate::explorer::{StatusSink, StatusUpdate};

/// Sends each update on its own worker thread. Failures are logged and
/// otherwise dropped; the in-memory state is never rolled back.
pub struct BackgroundStatusSink {
    client: Arc<RemoteClient>,
}

impl BackgroundStatusSink {
    pub fn new(client: Arc<RemoteClient>) -> Self {
        Self { client }
    }
}

impl StatusSink for BackgroundStatusSink {
    fn submit(&self, update: StatusUpdate) {
        let client = Arc::clone(&self.client);
        let spawned = std::thread::Builder::new()
            .name("status-update".to_string())
            .spawn(move || {
                match client.update_status(&update.athena_id, update.is_read) {
                    Ok(()) => tracing::debug!(
                        athena_id = %update.athena_id,
                        is_read = update.is_read,
                        "status updated"
                    ),
                    Err(err) => tracing::warn!(
                        athena_id = %update.athena_id,
                        is_read = update.is_read,
                        error = %err,
                        "status update failed"
                    ),
                }
            });
        if let Err(err) = spawned {
            tracing::warn!(error = %err, "could not spawn status update");
        }
    }
}
