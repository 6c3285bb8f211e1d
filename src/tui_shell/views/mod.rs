pub(super) mod exams;
pub(super) mod explorer;
pub(super) mod performance;

pub(in crate::tui_shell) use exams::ExamsView;
pub(in crate::tui_shell) use explorer::ExplorerView;
pub(in crate::tui_shell) use performance::PerformanceView;
