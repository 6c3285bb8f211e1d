use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::ListItem;

use crate::explorer::{Breadcrumb, DocumentCard, ListEntry};

pub(super) fn crumb_line(crumbs: &[Breadcrumb]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, c) in crumbs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" › ", Style::default().fg(Color::DarkGray)));
        }
        let style = match c.target {
            Some(_) => Style::default().fg(Color::Blue),
            None => Style::default().add_modifier(Modifier::BOLD),
        };
        spans.push(Span::styled(c.label.clone(), style));
    }
    Line::from(spans)
}

pub(super) fn item_rows(items: &[ListEntry]) -> Vec<ListItem<'static>> {
    items
        .iter()
        .map(|e| {
            if e.selected {
                ListItem::new(Line::from(vec![
                    Span::styled("▸ ", Style::default().fg(Color::Yellow)),
                    Span::styled(
                        e.label.clone(),
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    ),
                ]))
            } else {
                ListItem::new(Line::from(format!("  {}", e.label)))
            }
        })
        .collect()
}

pub(super) fn card_rows(cards: &[DocumentCard]) -> Vec<ListItem<'static>> {
    cards
        .iter()
        .map(|c| {
            let (mark, color) = if c.is_read {
                ("✓", Color::Green)
            } else {
                ("•", Color::Yellow)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", mark), Style::default().fg(color)),
                Span::raw(c.title.clone()),
                Span::raw("  "),
                Span::styled(c.status, Style::default().fg(color)),
                Span::styled(
                    format!("  [{}]", c.toggle_label),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect()
}
