use std::io::{self, IsTerminal, Stdout};

use anyhow::{Context, Result};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use super::{App, event_loop};

/// Raw mode plus the alternate screen; both are undone on drop, including
/// when the session ends with an error.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            disable_raw_mode().ok();
            return Err(err).context("enter alternate screen");
        }
        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(t) => t,
            Err(err) => {
                execute!(io::stdout(), LeaveAlternateScreen).ok();
                disable_raw_mode().ok();
                return Err(err).context("create terminal");
            }
        };
        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        disable_raw_mode().ok();
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen).ok();
        self.terminal.show_cursor().ok();
    }
}

pub(in crate::tui_shell) fn run(opts: crate::tui::TuiRunOptions) -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("TUI requires an interactive terminal (TTY)");
    }

    let mut session = TerminalSession::enter()?;
    session.terminal.clear().ok();

    // The initial fetch blocks; paint a splash first.
    let base_url = opts.config.api.base_url.clone();
    session
        .terminal
        .draw(|f| draw_loading(f, &base_url))
        .ok();

    let mut app = App::load(opts);
    let res = event_loop::run_loop(&mut session.terminal, &mut app);
    tracing::info!(ok = res.is_ok(), "session ended");
    res
}

fn draw_loading(frame: &mut ratatui::Frame, base_url: &str) {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .areas(frame.area());
    let lines = vec![
        Line::styled(
            "prepdesk",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Line::from("Loading exams and editorials…"),
        Line::styled(base_url.to_string(), Style::default().fg(Color::DarkGray)),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), middle);
}
