//! DTOs and payload types for remote API requests/responses.

use crate::error::{DeskError, DeskResult};
use crate::model::{AthenaId, Editorial, EditorialId, parse_calendar_date};

/// Wire shape of `GET /notes/editorials` entries.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct EditorialRecord {
    pub id: EditorialId,
    pub athena_id: AthenaId,
    pub date: String,
    pub original_filename: String,

    #[serde(default)]
    pub is_read: bool,
}

impl EditorialRecord {
    pub fn into_editorial(self) -> DeskResult<Editorial> {
        let date = parse_calendar_date(&self.date).map_err(|err| match err {
            DeskError::Parse { message, .. } => {
                DeskError::parse(format!("editorial {} date", self.id), message)
            }
            other => other,
        })?;
        Ok(Editorial {
            id: self.id,
            athena_id: self.athena_id,
            date,
            original_filename: self.original_filename,
            is_read: self.is_read,
        })
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct DownloadLink {
    pub download_url: String,
}

#[derive(Debug, serde::Serialize)]
pub(super) struct StatusPatchRequest {
    pub(super) is_read: bool,
}
