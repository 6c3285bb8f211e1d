use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use time::OffsetDateTime;

use crate::document::{DocumentSource, load_document};
use crate::explorer::{
    DocumentAction, ExplorerController, ExplorerEvent, HomeContext, Rerender, UiTarget,
};
use crate::model::{DeskConfig, EditorialId, UpcomingExam};
use crate::remote::RemoteClient;

use super::modal;
use super::view::{RenderCtx, View};
use super::views::{ExamsView, ExplorerView, PerformanceView};

mod app_event;
mod event_loop;
mod explorer_actions;
mod lifecycle;
mod modal_output;
mod modal_types;
mod render;
mod runtime;
mod state;
mod time_utils;
mod types;
mod view_nav;

pub(super) use self::app_event::{AppEvent, EventChannel};
pub(super) use self::modal_types::{DocumentPane, Modal, ModalKind};
pub(super) use self::state::{App, StatusEntry, ViewFrame};
pub(super) use self::time_utils::{fmt_clock, fmt_day_count, fmt_long_date, greeting, now_local};
pub(super) use self::types::UiMode;

pub(super) fn run(opts: crate::tui::TuiRunOptions) -> Result<()> {
    runtime::run(opts)
}

#[cfg(test)]
#[path = "../tests/tui_shell/app_tests.rs"]
mod tests;
