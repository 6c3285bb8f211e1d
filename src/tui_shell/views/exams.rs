use std::any::Any;

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph, Wrap};

use time::OffsetDateTime;

use crate::model::{UpcomingExam, days_remaining};

use super::super::{RenderCtx, UiMode, View, fmt_day_count, render_view_chrome};

#[derive(Debug)]
pub(in crate::tui_shell) struct ExamsView {
    pub(in crate::tui_shell) exams: Result<Vec<UpcomingExam>, String>,
    pub(in crate::tui_shell) selected: usize,
}

impl ExamsView {
    pub(in crate::tui_shell) fn new(exams: Result<Vec<UpcomingExam>, String>) -> Self {
        Self { exams, selected: 0 }
    }

    fn len(&self) -> usize {
        self.exams.as_ref().map(|e| e.len()).unwrap_or(0)
    }
}

/// Days left as of `now`, so the list stays current across midnight.
fn countdown(exam: &UpcomingExam, now: OffsetDateTime) -> i64 {
    days_remaining(exam.date, now).max(0)
}

fn countdown_style(days: i64) -> Style {
    match days {
        0..=7 => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        8..=30 => Style::default().fg(Color::Yellow),
        _ => Style::default().fg(Color::Green),
    }
}

impl View for ExamsView {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn mode(&self) -> UiMode {
        UiMode::Exams
    }

    fn title(&self) -> &str {
        "Exams"
    }

    fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn move_down(&mut self) {
        let max = self.len().saturating_sub(1);
        self.selected = (self.selected + 1).min(max);
    }

    fn render(&self, frame: &mut ratatui::Frame, area: Rect, ctx: &RenderCtx) {
        let exams = match &self.exams {
            Ok(exams) => exams,
            Err(err) => {
                let inner = render_view_chrome(frame, self.title(), "", area);
                frame.render_widget(
                    Paragraph::new(vec![
                        Line::from("Could not load exams."),
                        Line::from(err.clone()),
                    ])
                    .style(Style::default().fg(Color::Red))
                    .wrap(Wrap { trim: false }),
                    inner,
                );
                return;
            }
        };

        let subtitle = format!("{} upcoming", exams.len());
        let inner = render_view_chrome(frame, self.title(), &subtitle, area);
        if exams.is_empty() {
            frame.render_widget(
                Paragraph::new("No upcoming exams.").style(Style::default().fg(Color::Gray)),
                inner,
            );
            return;
        }

        let width = exams.iter().map(|e| e.name.chars().count()).max().unwrap_or(0);
        let rows: Vec<ListItem> = exams
            .iter()
            .map(|e| {
                let days = countdown(e, ctx.now);
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{:<width$}  ", e.name, width = width)),
                    Span::styled(
                        format!("{:>10}", fmt_day_count(days)),
                        countdown_style(days),
                    ),
                    Span::styled(
                        format!("  {}", e.date.date()),
                        Style::default().fg(Color::Gray),
                    ),
                ]))
            })
            .collect();

        let mut state = ListState::default();
        state.select(Some(self.selected.min(exams.len() - 1)));
        let list = List::new(rows).highlight_style(Style::default().bg(Color::DarkGray));
        frame.render_stateful_widget(list, inner, &mut state);
    }
}
