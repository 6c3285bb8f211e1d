use super::*;
use crate::model::{Exam, MockTest};

impl RemoteClient {
    pub fn list_exams(&self) -> DeskResult<Vec<Exam>> {
        let exams: Vec<Exam> = self.send_json(self.get("/exams"), "list exams")?;
        tracing::info!(count = exams.len(), "fetched exams");
        Ok(exams)
    }

    pub fn list_mock_tests(&self, series_id: &str) -> DeskResult<Vec<MockTest>> {
        self.send_json(
            self.get(&format!("/mocks/{}/tests", series_id)),
            "list mock tests",
        )
    }
}
