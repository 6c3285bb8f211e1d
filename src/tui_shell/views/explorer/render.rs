use std::any::Any;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListState, Paragraph, Wrap};

use super::super::super::render_view_chrome;
use super::home::home_lines;
use super::rows::{card_rows, crumb_line, item_rows};
use super::{ExplorerView, Focus, RenderCtx, UiMode, View};
use crate::explorer::Level;

impl View for ExplorerView {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn mode(&self) -> UiMode {
        UiMode::Explorer
    }

    fn title(&self) -> &str {
        "Editorials"
    }

    fn move_up(&mut self) {
        match self.focus {
            Focus::Items => self.item_cursor = self.item_cursor.saturating_sub(1),
            Focus::Documents => self.doc_cursor = self.doc_cursor.saturating_sub(1),
        }
    }

    fn move_down(&mut self) {
        match self.focus {
            Focus::Items => {
                let max = self.item_count().saturating_sub(1);
                self.item_cursor = (self.item_cursor + 1).min(max);
            }
            Focus::Documents => {
                let max = self.doc_count().saturating_sub(1);
                self.doc_cursor = (self.doc_cursor + 1).min(max);
            }
        }
    }

    fn hints(&self) -> &'static str {
        match self.focus {
            Focus::Items => "Enter open  Tab documents  Backspace up  h home  e exams  p performance  ? help  q quit",
            Focus::Documents => "v view  r toggle read  Tab dates  Backspace up  ? help  q quit",
        }
    }

    fn render(&self, frame: &mut ratatui::Frame, area: Rect, _ctx: &RenderCtx) {
        let level = self
            .snapshot
            .as_ref()
            .map(|s| s.level.to_string())
            .unwrap_or_default();
        let inner = render_view_chrome(frame, self.title(), &level, area);

        if let Some(err) = &self.error {
            frame.render_widget(
                Paragraph::new(vec![
                    Line::from("Could not load editorials."),
                    Line::from(err.clone()),
                ])
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: false }),
                inner,
            );
            return;
        }
        let Some(snap) = &self.snapshot else {
            frame.render_widget(Paragraph::new("Loading…"), inner);
            return;
        };

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(inner);
        frame.render_widget(
            Paragraph::new(crumb_line(&snap.breadcrumbs))
                .block(Block::default().borders(Borders::BOTTOM)),
            rows[0],
        );

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(rows[1]);

        let highlight = |focused: bool| {
            if focused {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            }
        };

        if snap.items.is_empty() {
            frame.render_widget(
                Paragraph::new("No editorials yet.").style(Style::default().fg(Color::Gray)),
                cols[0],
            );
        } else {
            let mut state = ListState::default();
            state.select(Some(self.item_cursor.min(snap.items.len() - 1)));
            let list = List::new(item_rows(&snap.items))
                .block(Block::default().borders(Borders::RIGHT).title(snap.level.to_string()))
                .highlight_style(highlight(self.focus == Focus::Items));
            frame.render_stateful_widget(list, cols[0], &mut state);
        }

        let right = Block::default().borders(Borders::NONE);
        if let Some(home) = &snap.home {
            frame.render_widget(
                Paragraph::new(home_lines(home))
                    .block(right.title("Overview"))
                    .wrap(Wrap { trim: false }),
                cols[1],
            );
        } else if let Some(bucket) = &snap.bucket {
            let title = format!(
                "{} {} {}",
                bucket.key.day, bucket.key.month, bucket.key.year
            );
            let mut state = ListState::default();
            if !bucket.cards.is_empty() {
                state.select(Some(self.doc_cursor.min(bucket.cards.len() - 1)));
            }
            let list = List::new(card_rows(&bucket.cards))
                .block(right.title(title))
                .highlight_style(highlight(self.focus == Focus::Documents));
            frame.render_stateful_widget(list, cols[1], &mut state);
        } else {
            let hint = match snap.level {
                Level::Days => "Select a day to see its editorials.",
                _ => "",
            };
            frame.render_widget(
                Paragraph::new(hint).style(Style::default().fg(Color::Gray)),
                cols[1],
            );
        }
    }
}
