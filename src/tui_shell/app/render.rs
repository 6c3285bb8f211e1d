use super::*;

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let now = now_local();

    // Header
    let mut spans = vec![
        Span::styled(
            "prepdesk",
            Style::default().fg(Color::Black).bg(Color::White),
        ),
        Span::raw("  "),
        Span::styled(
            greeting(now.hour()),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::raw(fmt_long_date(now)),
        Span::raw("  "),
        Span::styled(fmt_clock(now), Style::default().fg(Color::Cyan)),
    ];
    match &app.exams {
        Ok(exams) => {
            if let Some(next) = exams.first() {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    format!("{} in {}", next.name, fmt_day_count(next.days_remaining)),
                    Style::default().fg(Color::Green),
                ));
            }
        }
        Err(_) => {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                "exams unavailable",
                Style::default().fg(Color::Red),
            ));
        }
    }
    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    // Main view
    let ctx = RenderCtx { now };
    if let Some(view) = app.view() {
        view.render(frame, chunks[1], &ctx);
    }

    // Last result and key hints
    {
        let mut lines = Vec::new();
        if let Some(r) = &app.last_result {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} ", fmt_clock(r.at)),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(r.text.as_str(), Style::default().fg(Color::Red)),
            ]));
        } else {
            lines.push(Line::from(""));
        }
        let hints = app.view().map(|v| v.hints()).unwrap_or_default();
        lines.push(Line::from(Span::styled(
            hints,
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::TOP)),
            chunks[2],
        );
    }

    if let Some(m) = &app.modal {
        modal::draw_modal(frame, m);
    }
}
