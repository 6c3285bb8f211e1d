use anyhow::Result;

mod app;

mod modal;
mod view;
mod views;

// Make core TUI types/helpers available to submodules via `super::...`.
use app::{App, DocumentPane, Modal, ModalKind, UiMode, fmt_day_count};
use view::{RenderCtx, View, render_view_chrome};

pub fn run(opts: crate::tui::TuiRunOptions) -> Result<()> {
    app::run(opts)
}
