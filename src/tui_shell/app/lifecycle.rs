use super::*;
use crate::explorer::DataStore;
use crate::model::upcoming_exams;
use crate::remote::BackgroundStatusSink;

impl App {
    /// Fetches exams and editorials. Failures are kept per panel so the
    /// rest of the dashboard still opens.
    pub(super) fn load(opts: crate::tui::TuiRunOptions) -> Self {
        let mut app = App::new(opts.config);

        let client = match RemoteClient::new(app.config.api.clone()) {
            Ok(c) => Arc::new(c),
            Err(err) => {
                let msg = format!("{}", err);
                app.exams = Err(msg.clone());
                app.explorer_failed(msg);
                return app;
            }
        };
        tracing::info!(base_url = %app.config.api.base_url, "loading dashboard");

        app.exams = client
            .list_exams()
            .and_then(|exams| upcoming_exams(&exams, OffsetDateTime::now_utc()))
            .map_err(|err| {
                tracing::warn!(error = %err, "exam load failed");
                format!("{}", err)
            });

        let sink = Arc::new(BackgroundStatusSink::new(Arc::clone(&client)));
        match DataStore::load(&*client, sink) {
            Ok(store) => {
                let documents: Arc<dyn DocumentSource + Send + Sync> = client.clone();
                app.install(ExplorerController::new(store), documents);
            }
            Err(err) => {
                tracing::warn!(error = %err, "editorial load failed");
                app.explorer_failed(format!("{}", err));
            }
        }
        app.client = Some(client);
        app
    }

    /// Attaches a loaded explorer and paints its first snapshot.
    pub(in crate::tui_shell) fn install(
        &mut self,
        controller: ExplorerController,
        documents: Arc<dyn DocumentSource + Send + Sync>,
    ) {
        let snapshot = controller.snapshot(&self.home_ctx());
        self.explorer = Some(controller);
        self.documents = Some(documents);
        if let Some(v) = self.explorer_view_mut() {
            v.replace(snapshot);
        }
    }

    fn explorer_failed(&mut self, msg: String) {
        if let Some(v) = self.explorer_view_mut() {
            v.error = Some(msg);
        }
    }

    pub(super) fn load_performance(&self) -> PerformanceView {
        let series = self.config.mock_series_id.clone();
        let tests = match &self.client {
            Some(client) => client
                .list_mock_tests(&series)
                .map_err(|err| format!("{}", err)),
            None => Err("not connected".to_string()),
        };
        if let Err(err) = &tests {
            tracing::warn!(series = %series, error = %err, "mock test load failed");
        }
        PerformanceView::new(series, tests)
    }
}
