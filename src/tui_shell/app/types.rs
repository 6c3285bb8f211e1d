#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum UiMode {
    Explorer,
    Exams,
    Performance,
}

impl UiMode {
    pub(in crate::tui_shell) fn label(self) -> &'static str {
        match self {
            UiMode::Explorer => "editorials",
            UiMode::Exams => "exams",
            UiMode::Performance => "performance",
        }
    }
}
