//! Nav bar: links, active-section highlighting, scroll-elevated styling,
//! and the collapsed menu used below the width breakpoint.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::constants::{
    ACTIVE_LOOKAHEAD_ROWS, APP_NAME, MOBILE_BREAKPOINT_COLS, NAVBAR_ELEVATED_THRESHOLD_ROWS,
};
use crate::content::{NavEntry, SectionId};
use crate::tui::component::{Component, ComponentEvent};
use crate::tui::document::SectionSpan;
use crate::tui::Theme;

/// The section whose span contains the scroll position plus the lookahead.
///
/// Sections are checked in page order and the last match wins, so when
/// spans overlap the later section takes the highlight.
#[must_use]
pub fn active_section(sections: &[SectionSpan], scroll: u16) -> Option<SectionId> {
    let pos = u32::from(scroll) + u32::from(ACTIVE_LOOKAHEAD_ROWS);
    let mut active = None;
    for span in sections {
        let top = u32::from(span.top);
        if pos >= top && pos < top + u32::from(span.height) {
            active = Some(span.id);
        }
    }
    active
}

/// Whether the nav bar should use its elevated style at this scroll depth.
#[must_use]
pub fn is_elevated(scroll: u16) -> bool {
    scroll > NAVBAR_ELEVATED_THRESHOLD_ROWS
}

/// Nav bar widget.
pub struct NavBar;

impl NavBar {
    /// Renders the nav bar across the top of the screen.
    pub fn render(
        f: &mut Frame,
        area: Rect,
        entries: &[NavEntry],
        active: Option<SectionId>,
        menu_open: bool,
        scroll: u16,
        theme: &Theme,
    ) {
        let elevated = is_elevated(scroll);
        let border_style = if elevated {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_muted)
        };

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(border_style)
            .style(Style::default().bg(theme.background));

        let mut spans = vec![Span::styled(
            format!(" {APP_NAME} "),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )];

        if area.width < MOBILE_BREAKPOINT_COLS {
            // Collapsed: links live behind the menu toggle
            let toggle = if menu_open { "✕ Close" } else { "≡ Menu" };
            spans.push(Span::styled(
                format!("  {toggle} (m)"),
                Style::default().fg(theme.text),
            ));
        } else {
            for entry in entries {
                let is_active = matches!(
                    (&entry.target, active),
                    (crate::content::LinkTarget::Section(id), Some(a)) if *id == a
                );
                let style = if is_active {
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                } else {
                    Style::default().fg(theme.text)
                };
                spans.push(Span::raw("  "));
                spans.push(Span::styled(entry.label.clone(), style));
            }
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(block);
        f.render_widget(paragraph, area);
    }
}

/// Collapsed nav menu popup.
///
/// Activating any entry closes the menu; Esc or the toggle key closes it
/// without acting.
#[derive(Debug)]
pub struct NavMenu {
    labels: Vec<String>,
    selected: usize,
    closed: bool,
}

impl NavMenu {
    /// Creates a menu over the given nav entries.
    #[must_use]
    pub fn new(entries: &[NavEntry]) -> Self {
        Self {
            labels: entries.iter().map(|e| e.label.clone()).collect(),
            selected: 0,
            closed: false,
        }
    }
}

impl Component for NavMenu {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.labels.len() {
                    self.selected += 1;
                }
                None
            }
            KeyCode::Enter => {
                self.closed = true;
                Some(ComponentEvent::LinkActivated(self.selected))
            }
            KeyCode::Esc | KeyCode::Char('m') => {
                self.closed = true;
                Some(ComponentEvent::Cancelled)
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let height = (self.labels.len() as u16 + 2).min(area.height);
        let width = 24.min(area.width);
        let popup = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width,
            height,
        };

        f.render_widget(Clear, popup);

        let items: Vec<ListItem> = self
            .labels
            .iter()
            .map(|label| ListItem::new(label.clone()))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary))
                    .title(" Menu ")
                    .style(Style::default().bg(theme.surface).fg(theme.text)),
            )
            .highlight_style(
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("› ");

        let mut state = ListState::default();
        state.select(Some(self.selected));
        f.render_stateful_widget(list, popup, &mut state);
    }

    fn should_close(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn spans() -> Vec<SectionSpan> {
        // 5 contiguous sections of height 20
        SectionId::ALL
            .iter()
            .enumerate()
            .map(|(i, &id)| SectionSpan {
                id,
                top: i as u16 * 20,
                height: 20,
            })
            .collect()
    }

    #[test]
    fn test_exactly_one_active_for_covering_spans() {
        let sections = spans();
        for scroll in 0u16..90 {
            let active = active_section(&sections, scroll);
            assert!(active.is_some(), "no active link at scroll {scroll}");
        }
    }

    #[test]
    fn test_lookahead_flips_section_early() {
        let sections = spans();
        // Just before the lookahead reaches the second section
        assert_eq!(
            active_section(&sections, 20 - ACTIVE_LOOKAHEAD_ROWS - 1),
            Some(SectionId::Home)
        );
        // Lookahead lands exactly on the second section's top
        assert_eq!(
            active_section(&sections, 20 - ACTIVE_LOOKAHEAD_ROWS),
            Some(SectionId::About)
        );
    }

    #[test]
    fn test_last_match_wins_on_overlap() {
        let sections = vec![
            SectionSpan {
                id: SectionId::Home,
                top: 0,
                height: 30,
            },
            SectionSpan {
                id: SectionId::About,
                top: 10,
                height: 30,
            },
        ];
        // Position inside both spans: the later section takes the highlight
        assert_eq!(active_section(&sections, 10), Some(SectionId::About));
    }

    #[test]
    fn test_no_active_past_the_end() {
        let sections = spans();
        assert_eq!(active_section(&sections, 200), None);
    }

    #[test]
    fn test_elevation_threshold() {
        assert!(!is_elevated(0));
        assert!(!is_elevated(NAVBAR_ELEVATED_THRESHOLD_ROWS));
        assert!(is_elevated(NAVBAR_ELEVATED_THRESHOLD_ROWS + 1));
    }

    #[test]
    fn test_menu_activation_closes() {
        let portfolio = crate::content::Portfolio::sample();
        let mut menu = NavMenu::new(&portfolio.nav_entries());

        let _ = menu.handle_input(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        let event = menu.handle_input(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert!(matches!(event, Some(ComponentEvent::LinkActivated(1))));
        assert!(menu.should_close());
    }

    #[test]
    fn test_menu_escape_cancels() {
        let portfolio = crate::content::Portfolio::sample();
        let mut menu = NavMenu::new(&portfolio.nav_entries());

        let event = menu.handle_input(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert!(matches!(event, Some(ComponentEvent::Cancelled)));
        assert!(menu.should_close());
    }
}
