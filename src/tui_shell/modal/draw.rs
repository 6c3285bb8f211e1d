use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::super::{DocumentPane, Modal, ModalKind};

pub(in crate::tui_shell) fn draw_modal(frame: &mut ratatui::Frame, modal: &Modal) {
    let area = frame.area();
    frame
        .buffer_mut()
        .set_style(area, Style::default().add_modifier(Modifier::DIM));

    let w = area.width.saturating_sub(6).clamp(20, 100);
    let h = area.height.saturating_sub(4).clamp(8, 40);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    let box_area = Rect {
        x,
        y,
        width: w.min(area.width),
        height: h.min(area.height),
    };

    frame.render_widget(Clear, box_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(vec![
            Span::styled(modal.title.clone(), Style::default().fg(Color::Yellow)),
        ]))
        .title_bottom(Line::from(Span::styled(
            " Esc close  ↑↓ scroll ",
            Style::default().fg(Color::DarkGray),
        )));
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);

    let lines: Vec<Line> = match &modal.kind {
        ModalKind::Viewer(lines) | ModalKind::Document(DocumentPane::Ready(lines)) => {
            lines.clone()
        }
        ModalKind::Document(DocumentPane::Loading) => vec![Line::from(Span::styled(
            "Loading…",
            Style::default().fg(Color::Gray),
        ))],
        ModalKind::Document(DocumentPane::Failed) => vec![Line::from(Span::styled(
            "Could not load this document.",
            Style::default().fg(Color::Red),
        ))],
    };
    let scroll = modal.scroll.min(lines.len().saturating_sub(1)) as u16;
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        inner,
    );
}
