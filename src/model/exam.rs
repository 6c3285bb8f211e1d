use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::parse_instant;
use crate::error::DeskResult;

const MS_PER_DAY: i128 = 86_400_000;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Exam {
    #[serde(deserialize_with = "super::ids::deserialize_loose_string")]
    pub id: String,
    pub name: String,
    pub date: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UpcomingExam {
    pub id: String,
    pub name: String,
    #[serde(serialize_with = "super::dates::serialize_rfc3339")]
    pub date: OffsetDateTime,
    pub days_remaining: i64,
}

/// Whole days between `now` and `date`, rounded toward negative infinity.
pub fn days_remaining(date: OffsetDateTime, now: OffsetDateTime) -> i64 {
    let ms = (date - now).whole_milliseconds();
    ms.div_euclid(MS_PER_DAY) as i64
}

/// Exams that have not passed yet, earliest first.
pub fn upcoming_exams(exams: &[Exam], now: OffsetDateTime) -> DeskResult<Vec<UpcomingExam>> {
    let mut out = Vec::new();
    for exam in exams {
        let date = parse_instant(&exam.date)?;
        let days = days_remaining(date, now);
        if days < 0 {
            continue;
        }
        out.push(UpcomingExam {
            id: exam.id.clone(),
            name: exam.name.clone(),
            date,
            days_remaining: days,
        });
    }
    out.sort_by_key(|e| e.date);
    Ok(out)
}

#[cfg(test)]
#[path = "../tests/model/exam_tests.rs"]
mod tests;
