use std::any::Any;

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};

use time::OffsetDateTime;

#[derive(Clone, Copy, Debug)]
pub(super) struct RenderCtx {
    pub(super) now: OffsetDateTime,
}

pub(super) trait View: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn mode(&self) -> super::UiMode;
    fn title(&self) -> &str;

    fn move_up(&mut self) {}
    fn move_down(&mut self) {}

    /// Key hints shown in the footer while this view is on top.
    fn hints(&self) -> &'static str {
        "Esc back  q quit"
    }

    fn render(&self, frame: &mut ratatui::Frame, area: Rect, ctx: &RenderCtx);
}

pub(super) fn render_view_chrome(
    frame: &mut ratatui::Frame,
    title: &str,
    subtitle: &str,
    area: Rect,
) -> Rect {
    let mut spans = vec![Span::styled(
        title.to_string(),
        Style::default().fg(Color::Yellow),
    )];
    if !subtitle.is_empty() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            subtitle.to_string(),
            Style::default().fg(Color::Gray),
        ));
    }
    let outer = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(spans));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);
    inner
}
