//! Status bar at the bottom of the screen.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::contact::SubmissionStatus;

use super::theme::Theme;
use super::AppState;

/// Bottom status bar: current message on the left, submission state and
/// theme icon on the right.
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let mut left = vec![Span::styled(
            state.status_message.clone(),
            Style::default().fg(theme.text),
        )];

        if state.active_popup.is_none() {
            left.push(Span::styled(
                "  ·  ? help  t theme  c contact  q quit",
                Style::default().fg(theme.text_muted),
            ));
        }

        let mut right: Vec<Span> = Vec::new();
        if state.submission.status != SubmissionStatus::Idle {
            let color = match state.submission.status {
                SubmissionStatus::Success => theme.success,
                SubmissionStatus::Failed => theme.error,
                _ => theme.text_muted,
            };
            right.push(Span::styled(
                state.submission.status.to_string(),
                Style::default().fg(color),
            ));
            right.push(Span::raw("  "));
        }
        right.push(Span::styled(
            state.theme_variant.icon(),
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ));

        let right_width: usize = right.iter().map(|s| s.content.chars().count()).sum();
        let left_width: usize = left.iter().map(|s| s.content.chars().count()).sum();
        let gap = (area.width as usize)
            .saturating_sub(left_width + right_width + 2)
            .max(1);

        let mut spans = left;
        spans.push(Span::raw(" ".repeat(gap)));
        spans.extend(right);

        let bar = Paragraph::new(Line::from(spans))
            .style(Style::default().bg(theme.surface))
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(theme.text_muted)),
            );
        f.render_widget(bar, area);
    }
}
