//! Editorial listing, download links and document bodies.

use super::*;
use crate::document::DocumentSource;
use crate::explorer::EditorialSource;
use crate::model::{AthenaId, Editorial, EditorialId};

impl RemoteClient {
    pub fn list_editorials(&self) -> DeskResult<Vec<Editorial>> {
        let records: Vec<EditorialRecord> =
            self.send_json(self.get("/notes/editorials"), "list editorials")?;
        tracing::info!(count = records.len(), "fetched editorials");
        records
            .into_iter()
            .map(EditorialRecord::into_editorial)
            .collect()
    }

    pub fn editorial_download_link(&self, id: &EditorialId) -> DeskResult<DownloadLink> {
        self.send_json(
            self.get(&format!("/notes/editorials/{}/download-link", id)),
            "editorial download link",
        )
    }

    /// Fetches a document body from a previously issued download URL.
    /// The URL is self-authorizing, so no API token is attached.
    pub fn fetch_document_text(&self, url: &str) -> DeskResult<String> {
        self.send_text(self.client.get(url), "document body")
    }

    pub fn update_status(&self, athena_id: &AthenaId, is_read: bool) -> DeskResult<()> {
        let req = self
            .patch(&format!("/notes/status/{}", athena_id))
            .json(&StatusPatchRequest { is_read });
        let resp = req
            .send()
            .map_err(|err| DeskError::fetch("update status", err))?;
        self.ensure_ok(resp, "update status")?;
        Ok(())
    }
}

impl EditorialSource for RemoteClient {
    fn fetch_editorials(&self) -> DeskResult<Vec<Editorial>> {
        self.list_editorials()
    }
}

impl DocumentSource for RemoteClient {
    fn download_url(&self, id: &EditorialId) -> DeskResult<String> {
        Ok(self.editorial_download_link(id)?.download_url)
    }

    fn fetch_text(&self, url: &str) -> DeskResult<String> {
        self.fetch_document_text(url)
    }
}
