use serde::Serialize;
use time::Date;

use super::{AthenaId, EditorialId};

/// One dated study note.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Editorial {
    pub id: EditorialId,
    pub athena_id: AthenaId,
    #[serde(serialize_with = "serialize_date")]
    pub date: Date,
    pub original_filename: String,
    pub is_read: bool,
}

impl Editorial {
    pub fn status_label(&self) -> &'static str {
        if self.is_read { "Read" } else { "Unread" }
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.is_read {
            "Mark as Unread"
        } else {
            "Mark as Read"
        }
    }
}

fn serialize_date<S>(date: &Date, ser: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    ser.collect_str(&format_args!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    ))
}
