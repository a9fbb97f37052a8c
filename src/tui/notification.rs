//! Auto-dismissing notification banner.
//!
//! Slides in from the right edge, holds, slides back out, and removes
//! itself after a fixed lifetime. Two variants that differ only by
//! message and color.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};
use std::time::Instant;

use crate::constants::{NOTIFICATION_LIFETIME_MS, NOTIFICATION_SLIDE_MS};
use crate::tui::Theme;

/// Notification variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Green banner
    Success,
    /// Red banner
    Error,
}

impl NotificationKind {
    fn background(self, theme: &Theme) -> Color {
        match self {
            Self::Success => theme.success,
            Self::Error => theme.error,
        }
    }
}

/// A transient banner shown in the top-right corner.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Banner text
    pub message: String,
    /// Success or error variant
    pub kind: NotificationKind,
    created: Instant,
}

/// How much of the banner is on screen, 0.0 (hidden) to 1.0 (fully shown).
///
/// Pure in the elapsed lifetime so the slide phases are testable.
#[must_use]
pub fn slide_progress(elapsed_ms: u64) -> f32 {
    if elapsed_ms >= NOTIFICATION_LIFETIME_MS {
        return 0.0;
    }
    if elapsed_ms < NOTIFICATION_SLIDE_MS {
        return elapsed_ms as f32 / NOTIFICATION_SLIDE_MS as f32;
    }
    let slide_out_start = NOTIFICATION_LIFETIME_MS - NOTIFICATION_SLIDE_MS;
    if elapsed_ms >= slide_out_start {
        return (NOTIFICATION_LIFETIME_MS - elapsed_ms) as f32 / NOTIFICATION_SLIDE_MS as f32;
    }
    1.0
}

impl Notification {
    /// Creates a success banner.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Success,
            created: Instant::now(),
        }
    }

    /// Creates an error banner.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Error,
            created: Instant::now(),
        }
    }

    /// Whether the banner's lifetime has elapsed and it should be removed.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.created).as_millis() as u64 >= NOTIFICATION_LIFETIME_MS
    }

    /// Renders the banner at its current slide position.
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, now: Instant) {
        let elapsed = now.duration_since(self.created).as_millis() as u64;
        let progress = slide_progress(elapsed);

        let full_width = (self.message.chars().count() as u16 + 4).min(area.width);
        let visible = (f32::from(full_width) * progress).round() as u16;
        if visible == 0 || area.height < 4 {
            return;
        }

        let banner = Rect {
            x: area.x + area.width - visible,
            y: area.y + 1,
            width: visible,
            height: 3,
        };

        f.render_widget(Clear, banner);
        let paragraph = Paragraph::new(Line::from(Span::styled(
            format!(" {} ", self.message),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )))
        .block(Block::default().style(Style::default().bg(self.kind.background(theme))));
        f.render_widget(paragraph, banner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_slide_in_ramps_up() {
        assert_eq!(slide_progress(0), 0.0);
        assert!(slide_progress(NOTIFICATION_SLIDE_MS / 2) < 1.0);
        assert!(slide_progress(NOTIFICATION_SLIDE_MS / 2) > 0.0);
        assert_eq!(slide_progress(NOTIFICATION_SLIDE_MS), 1.0);
    }

    #[test]
    fn test_fully_shown_in_the_middle() {
        assert_eq!(slide_progress(NOTIFICATION_LIFETIME_MS / 2), 1.0);
    }

    #[test]
    fn test_slide_out_ramps_down() {
        let start = NOTIFICATION_LIFETIME_MS - NOTIFICATION_SLIDE_MS;
        assert_eq!(slide_progress(start - 1), 1.0);
        let mid = slide_progress(start + NOTIFICATION_SLIDE_MS / 2);
        assert!(mid > 0.0 && mid < 1.0);
        assert_eq!(slide_progress(NOTIFICATION_LIFETIME_MS), 0.0);
    }

    #[test]
    fn test_expiry_after_lifetime() {
        let banner = Notification::success("done");
        let now = Instant::now();
        assert!(!banner.is_expired(now));
        let later = now + Duration::from_millis(NOTIFICATION_LIFETIME_MS + 50);
        assert!(banner.is_expired(later));
    }

    #[test]
    fn test_variants_differ_only_by_kind() {
        let ok = Notification::success("sent");
        let err = Notification::error("failed");
        assert_eq!(ok.kind, NotificationKind::Success);
        assert_eq!(err.kind, NotificationKind::Error);

        let theme = Theme::dark();
        assert_ne!(
            ok.kind.background(&theme),
            err.kind.background(&theme)
        );
    }
}
