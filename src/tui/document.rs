//! The portfolio rendered as a virtual line document.
//!
//! Layout is computed once per content load: every section and card gets a
//! row span, which scrolling, active-link highlighting, and reveal
//! observation all share. Rendering rebuilds the styled lines each frame
//! from the animation state; line counts never depend on state, so spans
//! stay valid.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::time::Instant;

use crate::content::{Portfolio, SectionId};
use crate::tui::animation::{ProgressBars, RevealState, StatCounters};
use crate::tui::scroll::parallax_offset;
use crate::tui::Theme;

/// Rows of the hero glyph field.
const HERO_GLYPH_ROWS: u16 = 7;

/// Character width of a skill progress bar.
const BAR_WIDTH: u16 = 30;

/// An observable element of the document: a section or a card inside one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    /// A whole section
    Section(SectionId),
    /// Skill card by index
    SkillCard(usize),
    /// Project card by index
    ProjectCard(usize),
    /// Stat item by index
    StatItem(usize),
}

/// Row span of one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    /// Which section
    pub id: SectionId,
    /// First document row of the section
    pub top: u16,
    /// Rows the section occupies
    pub height: u16,
}

/// Row span of one observable element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementSpan {
    /// Which element
    pub element: Element,
    /// First document row of the element
    pub top: u16,
    /// Rows the element occupies
    pub height: u16,
}

/// Precomputed document geometry.
#[derive(Debug, Clone)]
pub struct DocumentLayout {
    /// Section spans in page order
    pub sections: Vec<SectionSpan>,
    /// Element spans for reveal observation
    pub elements: Vec<ElementSpan>,
    /// Total document height in rows
    pub height: u16,
}

impl DocumentLayout {
    /// The span of a given section.
    #[must_use]
    pub fn section(&self, id: SectionId) -> Option<SectionSpan> {
        self.sections.iter().copied().find(|s| s.id == id)
    }
}

const fn hero_height() -> u16 {
    // blank, name, blank, tagline, blank, glyph field
    5 + HERO_GLYPH_ROWS
}

fn about_height(portfolio: &Portfolio) -> u16 {
    5 + portfolio.bio.len() as u16 + portfolio.stats.len() as u16
}

fn skills_height(portfolio: &Portfolio) -> u16 {
    3 + portfolio.skills.len() as u16 * 3
}

fn projects_height(portfolio: &Portfolio) -> u16 {
    3 + portfolio.projects.len() as u16 * 3
}

const fn contact_height() -> u16 {
    8
}

/// Computes the document layout for the given content.
#[must_use]
pub fn layout(portfolio: &Portfolio) -> DocumentLayout {
    let mut sections = Vec::new();
    let mut elements = Vec::new();
    let mut top: u16 = 0;

    for id in SectionId::ALL {
        let height = match id {
            SectionId::Home => hero_height(),
            SectionId::About => about_height(portfolio),
            SectionId::Skills => skills_height(portfolio),
            SectionId::Projects => projects_height(portfolio),
            SectionId::Contact => contact_height(),
        };

        sections.push(SectionSpan { id, top, height });
        elements.push(ElementSpan {
            element: Element::Section(id),
            top,
            height,
        });

        match id {
            SectionId::About => {
                let stats_top = top + 4 + portfolio.bio.len() as u16;
                for i in 0..portfolio.stats.len() {
                    elements.push(ElementSpan {
                        element: Element::StatItem(i),
                        top: stats_top + i as u16,
                        height: 1,
                    });
                }
            }
            SectionId::Skills => {
                for i in 0..portfolio.skills.len() {
                    elements.push(ElementSpan {
                        element: Element::SkillCard(i),
                        top: top + 3 + i as u16 * 3,
                        height: 2,
                    });
                }
            }
            SectionId::Projects => {
                for i in 0..portfolio.projects.len() {
                    elements.push(ElementSpan {
                        element: Element::ProjectCard(i),
                        top: top + 3 + i as u16 * 3,
                        height: 2,
                    });
                }
            }
            SectionId::Home | SectionId::Contact => {}
        }

        top += height;
    }

    DocumentLayout {
        sections,
        elements,
        height: top,
    }
}

/// Everything rendering needs besides the content itself.
pub struct RenderContext<'a> {
    /// Active theme palette
    pub theme: &'a Theme,
    /// Reveal state (unrevealed elements render dim)
    pub reveal: &'a RevealState,
    /// Stat counter animations
    pub counters: &'a StatCounters,
    /// Progress bar animations
    pub progress: &'a ProgressBars,
    /// Current scroll offset (drives parallax)
    pub scroll: u16,
    /// Current time (drives the progress delay)
    pub now: Instant,
    /// Render width in columns
    pub width: u16,
}

fn element_style(ctx: &RenderContext<'_>, element: Element, base: Style) -> Style {
    if ctx.reveal.is_revealed(element) {
        base
    } else {
        Style::default().fg(ctx.theme.text_muted)
    }
}

fn section_title(ctx: &RenderContext<'_>, id: SectionId) -> Line<'static> {
    let style = element_style(
        ctx,
        Element::Section(id),
        Style::default()
            .fg(ctx.theme.primary)
            .add_modifier(Modifier::BOLD),
    );
    Line::from(Span::styled(format!("── {} ──", id.title()), style))
}

fn push_hero(lines: &mut Vec<Line<'static>>, portfolio: &Portfolio, ctx: &RenderContext<'_>) {
    let style = element_style(
        ctx,
        Element::Section(SectionId::Home),
        Style::default().fg(ctx.theme.text),
    );

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        portfolio.name.clone(),
        style.add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(portfolio.tagline.clone(), style)));
    lines.push(Line::default());

    // Glyph field: each glyph drifts upward with scroll at its own speed
    let width = ctx.width.max(1) as usize;
    let mut field = vec![vec![' '; width]; HERO_GLYPH_ROWS as usize];
    for (index, glyph) in portfolio.glyphs.iter().enumerate() {
        let offset = parallax_offset(ctx.scroll, index);
        let row = i32::from(glyph.row) + offset;
        if row < 0 || row >= i32::from(HERO_GLYPH_ROWS) {
            continue;
        }
        let col = usize::from(glyph.col).min(width.saturating_sub(1));
        if let Some(c) = glyph.glyph.chars().next() {
            field[row as usize][col] = c;
        }
    }
    for row in field {
        lines.push(Line::from(Span::styled(
            row.into_iter().collect::<String>(),
            Style::default().fg(ctx.theme.accent),
        )));
    }
}

fn push_about(lines: &mut Vec<Line<'static>>, portfolio: &Portfolio, ctx: &RenderContext<'_>) {
    lines.push(Line::default());
    lines.push(section_title(ctx, SectionId::About));
    lines.push(Line::default());

    let body = element_style(
        ctx,
        Element::Section(SectionId::About),
        Style::default().fg(ctx.theme.text),
    );
    for paragraph in &portfolio.bio {
        lines.push(Line::from(Span::styled(paragraph.clone(), body)));
    }
    lines.push(Line::default());

    for (i, stat) in portfolio.stats.iter().enumerate() {
        let value = ctx
            .counters
            .display(i)
            .unwrap_or_else(|| stat.value.clone());
        let style = element_style(
            ctx,
            Element::StatItem(i),
            Style::default().fg(ctx.theme.accent),
        );
        lines.push(Line::from(vec![
            Span::styled(format!("  {value:>6}  "), style.add_modifier(Modifier::BOLD)),
            Span::styled(stat.label.clone(), Style::default().fg(ctx.theme.text)),
        ]));
    }
    lines.push(Line::default());
}

fn push_skills(lines: &mut Vec<Line<'static>>, portfolio: &Portfolio, ctx: &RenderContext<'_>) {
    lines.push(Line::default());
    lines.push(section_title(ctx, SectionId::Skills));
    lines.push(Line::default());

    for (i, skill) in portfolio.skills.iter().enumerate() {
        let style = element_style(
            ctx,
            Element::SkillCard(i),
            Style::default().fg(ctx.theme.text),
        );
        lines.push(Line::from(Span::styled(format!("  {}", skill.name), style)));

        let fill = ctx.progress.width(skill.level, ctx.now);
        let filled = usize::from(fill.min(100) * BAR_WIDTH / 100);
        let bar: String = "█".repeat(filled) + &"░".repeat(usize::from(BAR_WIDTH) - filled);
        lines.push(Line::from(vec![
            Span::styled(format!("  {bar} "), Style::default().fg(ctx.theme.primary)),
            Span::styled(
                format!("{}%", skill.level),
                Style::default().fg(ctx.theme.text_muted),
            ),
        ]));
        lines.push(Line::default());
    }
}

fn push_projects(lines: &mut Vec<Line<'static>>, portfolio: &Portfolio, ctx: &RenderContext<'_>) {
    lines.push(Line::default());
    lines.push(section_title(ctx, SectionId::Projects));
    lines.push(Line::default());

    for (i, project) in portfolio.projects.iter().enumerate() {
        let style = element_style(
            ctx,
            Element::ProjectCard(i),
            Style::default().fg(ctx.theme.text),
        );
        lines.push(Line::from(Span::styled(
            format!("  {}", project.name),
            style.add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("    {}", project.description),
            style,
        )));
        lines.push(Line::default());
    }
}

fn push_contact(lines: &mut Vec<Line<'static>>, portfolio: &Portfolio, ctx: &RenderContext<'_>) {
    lines.push(Line::default());
    lines.push(section_title(ctx, SectionId::Contact));
    lines.push(Line::default());

    let style = element_style(
        ctx,
        Element::Section(SectionId::Contact),
        Style::default().fg(ctx.theme.text),
    );
    lines.push(Line::from(Span::styled(
        "Want to work together?".to_string(),
        style,
    )));
    lines.push(Line::from(Span::styled(
        "Press c to open the contact form.".to_string(),
        Style::default().fg(ctx.theme.text_muted),
    )));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("© {}", portfolio.name),
        Style::default().fg(ctx.theme.text_muted),
    )));
    lines.push(Line::default());
}

/// Builds the full document as styled lines.
///
/// The line count always equals the layout height.
#[must_use]
pub fn render_lines(portfolio: &Portfolio, ctx: &RenderContext<'_>) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    push_hero(&mut lines, portfolio, ctx);
    push_about(&mut lines, portfolio, ctx);
    push_skills(&mut lines, portfolio, ctx);
    push_projects(&mut lines, portfolio, ctx);
    push_contact(&mut lines, portfolio, ctx);
    lines
}

/// Renders the visible window of the document.
pub fn render(f: &mut Frame, area: Rect, portfolio: &Portfolio, ctx: &RenderContext<'_>) {
    let lines = render_lines(portfolio, ctx);
    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(ctx.theme.background))
        .scroll((ctx.scroll, 0));
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_layout() -> (Portfolio, DocumentLayout) {
        let portfolio = Portfolio::sample();
        let doc = layout(&portfolio);
        (portfolio, doc)
    }

    #[test]
    fn test_sections_are_contiguous() {
        let (_, doc) = sample_layout();
        let mut expected_top = 0;
        for span in &doc.sections {
            assert_eq!(span.top, expected_top);
            assert!(span.height > 0);
            expected_top += span.height;
        }
        assert_eq!(doc.height, expected_top);
    }

    #[test]
    fn test_every_section_has_a_span() {
        let (_, doc) = sample_layout();
        for id in SectionId::ALL {
            assert!(doc.section(id).is_some());
        }
    }

    #[test]
    fn test_card_spans_sit_inside_their_sections() {
        let (portfolio, doc) = sample_layout();
        let skills = doc.section(SectionId::Skills).unwrap();
        for i in 0..portfolio.skills.len() {
            let span = doc
                .elements
                .iter()
                .find(|e| e.element == Element::SkillCard(i))
                .unwrap();
            assert!(span.top >= skills.top);
            assert!(span.top + span.height <= skills.top + skills.height);
        }
    }

    #[test]
    fn test_render_line_count_matches_layout_height() {
        let (portfolio, doc) = sample_layout();
        let theme = Theme::dark();
        let ctx = RenderContext {
            theme: &theme,
            reveal: &RevealState::new(),
            counters: &StatCounters::new(),
            progress: &ProgressBars::new(),
            scroll: 0,
            now: Instant::now(),
            width: 80,
        };
        let lines = render_lines(&portfolio, &ctx);
        assert_eq!(lines.len() as u16, doc.height);
    }

    #[test]
    fn test_render_line_count_stable_under_state() {
        let (portfolio, doc) = sample_layout();
        let theme = Theme::light();
        let mut counters = StatCounters::new();
        counters.start(&portfolio.stats);
        let mut progress = ProgressBars::new();
        progress.start(Instant::now());
        let ctx = RenderContext {
            theme: &theme,
            reveal: &RevealState::new(),
            counters: &counters,
            progress: &progress,
            scroll: 17,
            now: Instant::now(),
            width: 40,
        };
        let lines = render_lines(&portfolio, &ctx);
        assert_eq!(lines.len() as u16, doc.height);
    }
}
