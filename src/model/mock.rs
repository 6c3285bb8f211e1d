use serde::{Deserialize, Serialize};

/// One scored mock test from a series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MockTest {
    pub subject: String,
    #[serde(rename = "test-number")]
    pub test_number: u32,
    pub score: f64,
    pub date: String,
}

/// Scores of one subject ordered by test number, ready for charting.
#[derive(Clone, Debug, PartialEq)]
pub struct SubjectSeries {
    pub subject: String,
    pub points: Vec<(f64, f64)>,
}

pub fn series_by_subject(tests: &[MockTest]) -> Vec<SubjectSeries> {
    let mut out: Vec<SubjectSeries> = Vec::new();
    for t in tests {
        let point = (f64::from(t.test_number), t.score);
        match out.iter_mut().find(|s| s.subject == t.subject) {
            Some(series) => series.points.push(point),
            None => out.push(SubjectSeries {
                subject: t.subject.clone(),
                points: vec![point],
            }),
        }
    }
    for series in &mut out {
        series.points.sort_by(|a, b| a.0.total_cmp(&b.0));
    }
    out
}

#[cfg(test)]
#[path = "../tests/model/mock_tests.rs"]
mod tests;
