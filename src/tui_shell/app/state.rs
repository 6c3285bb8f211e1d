use super::*;

pub(in crate::tui_shell) struct ViewFrame {
    pub(in crate::tui_shell) view: Box<dyn View>,
}

/// The most recent rejected action, shown in the footer.
#[derive(Clone, Debug)]
pub(in crate::tui_shell) struct StatusEntry {
    pub(in crate::tui_shell) at: OffsetDateTime,
    pub(in crate::tui_shell) text: String,
}

pub(in crate::tui_shell) struct App {
    pub(in crate::tui_shell) config: DeskConfig,
    pub(in crate::tui_shell) client: Option<Arc<RemoteClient>>,
    pub(in crate::tui_shell) documents: Option<Arc<dyn DocumentSource + Send + Sync>>,

    // Load failures are kept as text and shown in place of the panel.
    pub(in crate::tui_shell) exams: Result<Vec<UpcomingExam>, String>,
    pub(in crate::tui_shell) explorer: Option<ExplorerController>,

    pub(in crate::tui_shell) modal: Option<Modal>,
    pub(in crate::tui_shell) last_result: Option<StatusEntry>,
    pub(in crate::tui_shell) events: EventChannel,

    pub(in crate::tui_shell) frames: Vec<ViewFrame>,
    pub(in crate::tui_shell) quit: bool,
}

impl App {
    pub(in crate::tui_shell) fn new(config: DeskConfig) -> Self {
        Self {
            config,
            client: None,
            documents: None,
            exams: Ok(Vec::new()),
            explorer: None,
            modal: None,
            last_result: None,
            events: EventChannel::default(),
            frames: vec![ViewFrame {
                view: Box::new(ExplorerView::default()),
            }],
            quit: false,
        }
    }

    pub(in crate::tui_shell) fn next_exam(&self) -> Option<&UpcomingExam> {
        self.exams.as_ref().ok().and_then(|e| e.first())
    }

    pub(in crate::tui_shell) fn home_ctx(&self) -> HomeContext<'_> {
        HomeContext {
            next_exam: self.next_exam(),
        }
    }
}
