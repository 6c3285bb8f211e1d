//! Viewing a single editorial: download-link resolution, body fetch,
//! front-matter split and markdown rendering.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::error::DeskResult;
use crate::model::EditorialId;

mod front_matter;
mod markdown;

pub use self::front_matter::{FrontMatter, split_front_matter};
pub use self::markdown::{plain_text, render_markdown};

/// Two-step access to a document body: a short-lived URL, then the text.
pub trait DocumentSource {
    fn download_url(&self, id: &EditorialId) -> DeskResult<String>;
    fn fetch_text(&self, url: &str) -> DeskResult<String>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoadedDocument {
    pub id: EditorialId,
    pub front_matter: FrontMatter,
    pub body: String,
}

pub fn load_document(source: &dyn DocumentSource, id: &EditorialId) -> DeskResult<LoadedDocument> {
    let url = source.download_url(id)?;
    tracing::debug!(%id, "resolved download link");
    let raw = source.fetch_text(&url)?;
    let (front_matter, body) = split_front_matter(&raw)?;
    Ok(LoadedDocument {
        id: id.clone(),
        front_matter,
        body: body.to_string(),
    })
}

impl LoadedDocument {
    pub fn title<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.front_matter.title.as_deref().unwrap_or(fallback)
    }

    /// Metadata header followed by the formatted body.
    pub fn render_lines(&self) -> Vec<Line<'static>> {
        let key = Style::default().fg(Color::Gray);
        let mut out = Vec::new();

        let mut meta = |label: &str, value: String| {
            out.push(Line::from(vec![
                Span::styled(format!("{:<8}", label), key),
                Span::raw(value),
            ]));
        };
        if let Some(subject) = &self.front_matter.subject {
            meta("subject", subject.clone());
        }
        if let Some(source) = &self.front_matter.source {
            meta("source", source.clone());
        }
        if !self.front_matter.tags.is_empty() {
            meta("tags", self.front_matter.tags.join(", "));
        }
        if !out.is_empty() {
            out.push(Line::from(Span::styled(
                "─".repeat(40),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            )));
            out.push(Line::default());
        }

        out.extend(render_markdown(&self.body));
        out
    }
}

#[cfg(test)]
#[path = "tests/document/load_tests.rs"]
mod tests;
