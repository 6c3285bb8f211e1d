use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use super::super::super::fmt_day_count;
use crate::explorer::HomeStats;

pub(super) fn home_lines(stats: &HomeStats) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::Gray);
    let value = Style::default().add_modifier(Modifier::BOLD);
    let mut out = Vec::new();

    match &stats.next_exam {
        Some(exam) => out.push(Line::from(vec![
            Span::styled("Next exam   ", label),
            Span::styled(exam.name.clone(), value),
            Span::raw(format!(" in {}", fmt_day_count(exam.days_remaining))),
        ])),
        None => out.push(Line::from(vec![
            Span::styled("Next exam   ", label),
            Span::styled("none scheduled", Style::default().fg(Color::DarkGray)),
        ])),
    }
    out.push(Line::default());

    let e = &stats.editorials;
    out.push(Line::from(vec![
        Span::styled("Editorials  ", label),
        Span::styled(e.total.to_string(), value),
    ]));
    out.push(Line::from(vec![
        Span::styled("Read        ", label),
        Span::styled(e.read.to_string(), Style::default().fg(Color::Green)),
    ]));
    out.push(Line::from(vec![
        Span::styled("Unread      ", label),
        Span::styled(e.unread.to_string(), Style::default().fg(Color::Yellow)),
    ]));
    out.push(Line::from(vec![
        Span::styled("Per day     ", label),
        Span::styled(format!("{:.1}", e.per_day), value),
    ]));
    out
}
