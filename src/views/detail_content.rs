//! Turns a [`DetailDocument`] into styled lines for the detail viewport.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::models::{join_names, DetailDocument, DisplayName};
use crate::text::wrap;
use crate::ui::theme::Theme;

/// Sections of the detail document, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Title,
    Overview,
    Synopsis,
    Background,
    Related,
    Recommendations,
}

#[derive(Debug, Clone, Default)]
pub struct DetailContent {
    pub lines: Vec<Line<'static>>,
    pub sections: Vec<SectionKind>,
}

impl DetailContent {
    /// All lines joined with `\n`, without styling.
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

const OVERVIEW_LABEL_WIDTH: usize = 14;

struct Builder<'t> {
    theme: &'t Theme,
    width: usize,
    content: DetailContent,
}

impl Builder<'_> {
    fn start(&mut self, kind: SectionKind) {
        if !self.content.sections.is_empty() {
            self.blank();
            self.content
                .lines
                .push(Line::styled("─".repeat(self.width.max(1)), self.theme.rule()));
            self.blank();
        }
        self.content.sections.push(kind);
    }

    fn heading(&mut self, text: &str) {
        self.content
            .lines
            .push(Line::styled(text.to_string(), self.theme.heading()));
        self.blank();
    }

    fn blank(&mut self) {
        self.content.lines.push(Line::default());
    }

    fn text(&mut self, text: String) {
        self.content.lines.push(Line::styled(text, self.theme.text()));
    }

    fn paragraph(&mut self, text: &str) {
        for line in wrap(text.trim_end(), self.width).split('\n') {
            self.text(line.to_string());
        }
    }

    fn field(&mut self, label: &str, value: String) {
        self.content.lines.push(Line::from(vec![
            Span::styled(
                format!("{:<width$}: ", label, width = OVERVIEW_LABEL_WIDTH),
                Style::default().fg(self.theme.dim),
            ),
            Span::styled(value, self.theme.text()),
        ]));
    }
}

fn or_unknown(value: Option<u32>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| v.to_string())
}

/// Render `doc` with free text wrapped to `width` columns.
///
/// Background appears whenever the field is present, even if empty. Related
/// and Recommendations appear only when they have entries.
pub fn render_detail(doc: &DetailDocument, width: usize, theme: &Theme) -> DetailContent {
    let mut b = Builder {
        theme,
        width,
        content: DetailContent::default(),
    };

    b.start(SectionKind::Title);
    b.content
        .lines
        .push(Line::styled(format!("# {}", doc.display_title()), theme.title_style()));
    if !doc.alternative_titles.ja.is_empty() {
        b.text(format!("  {}", doc.alternative_titles.ja));
    }
    b.text(format!("> Released : {}", doc.start_date));

    b.start(SectionKind::Overview);
    b.heading("Overview");
    b.field("All Time Rank", or_unknown(doc.rank));
    b.field("Popularity", or_unknown(doc.popularity));
    b.field("Status", doc.status_text());
    b.field("Genres", join_names(&doc.genres));
    b.field("Rating", doc.rating.clone());
    b.field("Studios", join_names(&doc.studios));

    b.start(SectionKind::Synopsis);
    b.heading("Synopsis:");
    b.paragraph(&doc.synopsis);

    if let Some(background) = &doc.background {
        b.start(SectionKind::Background);
        b.heading("Background:");
        b.paragraph(background);
    }

    if !doc.related_anime.is_empty() {
        b.start(SectionKind::Related);
        b.heading("Related:");
        for (i, related) in doc.related_anime.iter().enumerate() {
            if i > 0 {
                b.blank();
            }
            b.field("  Title", related.display_name().to_string());
            b.field("  Relation", related.relation.clone());
        }
    }

    if !doc.recommendations.is_empty() {
        b.start(SectionKind::Recommendations);
        b.heading("Recommendations:");
        for recommendation in &doc.recommendations {
            b.field("  Title", recommendation.display_name().to_string());
        }
    }

    b.content
}
