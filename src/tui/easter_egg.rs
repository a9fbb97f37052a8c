//! Konami-code easter egg: sliding-buffer detector plus the rainbow
//! overlay shown on a match.

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::collections::VecDeque;
use std::time::Instant;

use crate::constants::EASTER_EGG_DURATION_MS;
use crate::tui::Theme;

/// The fixed unlock sequence.
pub const KONAMI_CODE: [KeyCode; 10] = [
    KeyCode::Up,
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Char('b'),
    KeyCode::Char('a'),
];

/// Exact-match detector over the last N key codes.
///
/// Every key press appends to a FIFO buffer capped at the pattern length;
/// the buffer is compared to the pattern by ordered equality.
#[derive(Debug, Default)]
pub struct KonamiDetector {
    buffer: VecDeque<KeyCode>,
}

impl KonamiDetector {
    /// Creates an empty detector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a key press; returns true when the buffer matches the code.
    pub fn record(&mut self, code: KeyCode) -> bool {
        self.buffer.push_back(code);
        if self.buffer.len() > KONAMI_CODE.len() {
            self.buffer.pop_front();
        }
        self.buffer.len() == KONAMI_CODE.len() && self.buffer.iter().eq(KONAMI_CODE.iter())
    }

    /// Clears the buffer so the sequence can be entered again.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }
}

/// Converts a hue angle (degrees) to a fully saturated terminal color.
fn hue_color(degrees: f32) -> Color {
    let h = degrees.rem_euclid(360.0) / 60.0;
    let x = (1.0 - (h % 2.0 - 1.0).abs()) * 255.0;
    let x = x.round() as u8;
    match h as u32 {
        0 => Color::Rgb(255, x, 0),
        1 => Color::Rgb(x, 255, 0),
        2 => Color::Rgb(0, 255, x),
        3 => Color::Rgb(0, x, 255),
        4 => Color::Rgb(x, 0, 255),
        _ => Color::Rgb(255, 0, x),
    }
}

/// The rainbow effect shown while the easter egg is active.
///
/// The whole UI's accent rotates through the hue wheel every two seconds,
/// with a celebratory overlay in the middle; both disappear after the
/// fixed duration.
#[derive(Debug)]
pub struct RainbowEffect {
    started: Instant,
}

impl RainbowEffect {
    /// Starts the effect.
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self { started: now }
    }

    /// Whether the effect has run its course.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.started).as_millis() as u64 >= EASTER_EGG_DURATION_MS
    }

    /// Current hue-rotated color, one full rotation every two seconds.
    #[must_use]
    pub fn color(&self, now: Instant) -> Color {
        let elapsed = now.duration_since(self.started).as_millis() as f32;
        hue_color(elapsed / 2000.0 * 360.0)
    }

    /// Renders the celebratory overlay centered in the area.
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, now: Instant) {
        let message = "🎉 Konami Code Activated! You found the easter egg! 🎉";
        let width = (message.chars().count() as u16 + 6).min(area.width);
        let height = 5.min(area.height);
        let popup = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        };

        f.render_widget(Clear, popup);
        let paragraph = Paragraph::new(vec![
            Line::default(),
            Line::from(Span::styled(
                message,
                Style::default()
                    .fg(self.color(now))
                    .add_modifier(Modifier::BOLD),
            ))
            .centered(),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.color(now)))
                .style(Style::default().bg(theme.surface)),
        );
        f.render_widget(paragraph, popup);
    }
}
