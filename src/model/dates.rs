use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, Time};

use crate::error::{DeskError, DeskResult};

/// Calendar date of an API timestamp.
///
/// Full RFC 3339 timestamps keep the date in their own offset; anything else
/// must start with `YYYY-MM-DD` (a trailing naive time is ignored).
pub fn parse_calendar_date(raw: &str) -> DeskResult<Date> {
    let raw = raw.trim();
    if let Ok(dt) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Ok(dt.date());
    }
    let head = raw.get(..10).unwrap_or(raw);
    Date::parse(head, format_description!("[year]-[month]-[day]"))
        .map_err(|err| DeskError::parse(format!("date {:?}", raw), err))
}

/// Point in time of an API timestamp. Date-only values are midnight UTC.
pub fn parse_instant(raw: &str) -> DeskResult<OffsetDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Ok(dt);
    }
    let date = parse_calendar_date(raw)?;
    Ok(date.with_time(Time::MIDNIGHT).assume_utc())
}

pub(super) fn serialize_rfc3339<S>(dt: &OffsetDateTime, ser: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let s = dt.format(&Rfc3339).map_err(serde::ser::Error::custom)?;
    ser.serialize_str(&s)
}
