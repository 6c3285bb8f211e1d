use std::any::Any;

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Chart, Dataset, GraphType, Paragraph, Wrap};

use crate::model::{MockTest, SubjectSeries, series_by_subject};

use super::super::{RenderCtx, UiMode, View, render_view_chrome};

const PALETTE: [Color; 6] = [
    Color::Cyan,
    Color::Yellow,
    Color::Green,
    Color::Magenta,
    Color::Red,
    Color::Blue,
];

#[derive(Debug)]
pub(in crate::tui_shell) struct PerformanceView {
    pub(in crate::tui_shell) series_id: String,
    pub(in crate::tui_shell) series: Result<Vec<SubjectSeries>, String>,
}

impl PerformanceView {
    pub(in crate::tui_shell) fn new(series_id: String, tests: Result<Vec<MockTest>, String>) -> Self {
        Self {
            series_id,
            series: tests.map(|t| series_by_subject(&t)),
        }
    }
}

/// Axis bounds covering every point, padded so single points stay visible.
pub(in crate::tui_shell) fn chart_bounds(series: &[SubjectSeries]) -> ([f64; 2], [f64; 2]) {
    let points = series.iter().flat_map(|s| s.points.iter());
    let (mut x_max, mut y_max) = (1.0_f64, 0.0_f64);
    let mut x_min = f64::MAX;
    for &(x, y) in points {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_max = y_max.max(y);
    }
    if x_min == f64::MAX || x_min >= x_max {
        x_min = 0.0;
    }
    let y_top = if y_max <= 0.0 { 100.0 } else { y_max + (y_max / 10.0).ceil() };
    ([x_min, x_max], [0.0, y_top])
}

impl View for PerformanceView {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn mode(&self) -> UiMode {
        UiMode::Performance
    }

    fn title(&self) -> &str {
        "Performance"
    }

    fn render(&self, frame: &mut ratatui::Frame, area: Rect, _ctx: &RenderCtx) {
        let subtitle = format!("series {}", self.series_id);
        let inner = render_view_chrome(frame, self.title(), &subtitle, area);

        let series = match &self.series {
            Ok(s) if s.is_empty() => {
                frame.render_widget(
                    Paragraph::new("No mock tests recorded.").style(Style::default().fg(Color::Gray)),
                    inner,
                );
                return;
            }
            Ok(s) => s,
            Err(err) => {
                frame.render_widget(
                    Paragraph::new(vec![
                        Line::from("Could not load mock tests."),
                        Line::from(err.clone()),
                    ])
                    .style(Style::default().fg(Color::Red))
                    .wrap(Wrap { trim: false }),
                    inner,
                );
                return;
            }
        };

        let datasets: Vec<Dataset> = series
            .iter()
            .enumerate()
            .map(|(i, s)| {
                Dataset::default()
                    .name(s.subject.clone())
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(PALETTE[i % PALETTE.len()]))
                    .data(&s.points)
            })
            .collect();

        let ([x0, x1], [y0, y1]) = chart_bounds(series);
        let gray = Style::default().fg(Color::Gray);
        let chart = Chart::new(datasets)
            .x_axis(
                Axis::default()
                    .title("test")
                    .style(gray)
                    .bounds([x0, x1])
                    .labels(vec![
                        Span::raw(format!("{:.0}", x0)),
                        Span::raw(format!("{:.0}", x1)),
                    ]),
            )
            .y_axis(
                Axis::default()
                    .title("score")
                    .style(gray)
                    .bounds([y0, y1])
                    .labels(vec![
                        Span::raw(format!("{:.0}", y0)),
                        Span::raw(format!("{:.0}", (y0 + y1) / 2.0)),
                        Span::raw(format!("{:.0}", y1)),
                    ]),
            );
        frame.render_widget(chart, inner);
    }
}
