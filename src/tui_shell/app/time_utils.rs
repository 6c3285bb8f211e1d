use time::macros::format_description;

use super::*;

/// Local wall-clock time; falls back to UTC when the offset is unknown.
pub(in crate::tui_shell) fn now_local() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

pub(in crate::tui_shell) fn greeting(hour: u8) -> &'static str {
    if hour < 12 {
        "Good morning"
    } else if hour < 17 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}

pub(in crate::tui_shell) fn fmt_long_date(at: OffsetDateTime) -> String {
    at.format(format_description!(
        "[weekday], [month repr:long] [day padding:none], [year]"
    ))
        .unwrap_or_else(|_| at.date().to_string())
}

pub(in crate::tui_shell) fn fmt_clock(at: OffsetDateTime) -> String {
    at.format(format_description!("[hour padding:zero]:[minute padding:zero]"))
        .unwrap_or_else(|_| format!("{:02}:{:02}", at.hour(), at.minute()))
}

pub(in crate::tui_shell) fn fmt_day_count(days: i64) -> String {
    match days {
        0 => "today".to_string(),
        1 => "1 day".to_string(),
        n => format!("{} days", n),
    }
}
