use super::*;
use time::format_description::well_known::Rfc3339;

fn at(s: &str) -> OffsetDateTime {
    OffsetDateTime::parse(s, &Rfc3339).unwrap()
}

fn exam(id: &str, name: &str, date: &str) -> Exam {
    Exam {
        id: id.to_string(),
        name: name.to_string(),
        date: date.to_string(),
    }
}

#[test]
fn days_remaining_floors_partial_days() {
    let exam_day = at("2026-11-01T00:00:00Z");
    assert_eq!(days_remaining(exam_day, at("2026-10-30T12:00:00Z")), 1);
    assert_eq!(days_remaining(exam_day, at("2026-10-31T00:00:00Z")), 1);
    assert_eq!(days_remaining(exam_day, at("2026-10-31T00:00:01Z")), 0);
    assert_eq!(days_remaining(exam_day, at("2026-11-01T06:00:00Z")), -1);
}

#[test]
fn upcoming_exams_drop_past_and_sort_by_date() {
    let now = at("2026-10-19T09:00:00Z");
    let exams = vec![
        exam("3", "Finals", "2027-03-01"),
        exam("1", "Past", "2026-10-01"),
        exam("2", "Prelims", "2026-12-10"),
    ];
    let out = upcoming_exams(&exams, now).unwrap();
    let names: Vec<&str> = out.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Prelims", "Finals"]);
    assert_eq!(out[0].days_remaining, 51);
}

#[test]
fn unparseable_exam_date_is_a_parse_error() {
    let now = at("2026-10-19T09:00:00Z");
    let err = upcoming_exams(&[exam("1", "Bad", "soon")], now).unwrap_err();
    assert!(err.is_parse());
}

#[test]
fn exam_ids_accept_numbers() {
    let exams: Vec<Exam> =
        serde_json::from_str(r#"[{"id": 7, "name": "Prelims", "date": "2026-12-10"}]"#).unwrap();
    assert_eq!(exams[0].id, "7");
}

#[test]
fn calendar_dates_accept_plain_and_timestamped_values() {
    use crate::model::parse_calendar_date;
    use time::Month;

    let d = parse_calendar_date("2024-01-05").unwrap();
    assert_eq!((d.year(), d.month(), d.day()), (2024, Month::January, 5));
    let d = parse_calendar_date("2024-02-14T06:30:00Z").unwrap();
    assert_eq!((d.month(), d.day()), (Month::February, 14));
    let d = parse_calendar_date("2024-03-09 10:00:00").unwrap();
    assert_eq!(d.day(), 9);
    assert!(parse_calendar_date("05/01/2024").unwrap_err().is_parse());
}
