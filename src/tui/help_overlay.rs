//! Help overlay popup listing the keyboard bindings.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::component::{Component, ComponentEvent};
use crate::tui::Theme;

/// Keybinding reference shown with `?`.
#[derive(Debug, Default)]
pub struct HelpOverlay {
    closed: bool,
}

const BINDINGS: &[(&str, &str)] = &[
    ("j / ↓, k / ↑", "Scroll"),
    ("PgDn / PgUp", "Scroll by page"),
    ("g / Home, G / End", "Top / bottom"),
    ("1-5", "Jump to section"),
    ("Tab", "Next section"),
    ("t", "Toggle light/dark theme"),
    ("m", "Open nav menu (narrow terminals)"),
    ("c", "Open contact form"),
    ("?", "This help"),
    ("q", "Quit"),
];

impl HelpOverlay {
    /// Creates the overlay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for HelpOverlay {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?' | 'q') | KeyCode::Enter => {
                self.closed = true;
                Some(ComponentEvent::Cancelled)
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let width = 46.min(area.width);
        let height = (BINDINGS.len() as u16 + 4).min(area.height);
        let popup = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        };

        f.render_widget(Clear, popup);

        let mut lines = vec![Line::default()];
        for (keys, action) in BINDINGS {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {keys:<20}"),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled((*action).to_string(), Style::default().fg(theme.text)),
            ]));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary))
                .title(" Help ")
                .style(Style::default().bg(theme.surface)),
        );
        f.render_widget(paragraph, popup);
    }

    fn should_close(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_any_dismiss_key_closes() {
        for code in [KeyCode::Esc, KeyCode::Char('?'), KeyCode::Char('q')] {
            let mut overlay = HelpOverlay::new();
            let event = overlay.handle_input(KeyEvent::new(code, KeyModifiers::NONE));
            assert!(matches!(event, Some(ComponentEvent::Cancelled)));
            assert!(overlay.should_close());
        }
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut overlay = HelpOverlay::new();
        let event = overlay.handle_input(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));
        assert!(event.is_none());
        assert!(!overlay.should_close());
    }
}
