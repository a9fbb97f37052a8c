//! Viewport scrolling: animated section jumps and the parallax offset.

use crate::constants::{HEADER_OFFSET_ROWS, PARALLAX_BASE_SPEED, PARALLAX_SPEED_STEP};

/// Scrollable viewport over the rendered document.
///
/// A section jump animates toward its target one tick at a time; manual
/// scrolling cancels any jump in progress.
#[derive(Debug, Clone, Default)]
pub struct Viewport {
    /// Current scroll offset in rows
    pub scroll: u16,
    /// Jump target being eased toward, if any
    target: Option<u16>,
    /// Maximum scroll offset (document height minus view height)
    max_scroll: u16,
}

impl Viewport {
    /// Creates a viewport parked at the top.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the scroll bound from document and view heights.
    ///
    /// Clamps the current position if the bound shrank.
    pub fn set_bounds(&mut self, document_height: u16, view_height: u16) {
        self.max_scroll = document_height.saturating_sub(view_height);
        self.scroll = self.scroll.min(self.max_scroll);
    }

    /// Starts an animated jump to a section top, stopping short by the
    /// header offset.
    pub fn jump_to(&mut self, section_top: u16) {
        let target = section_top
            .saturating_sub(HEADER_OFFSET_ROWS)
            .min(self.max_scroll);
        self.target = Some(target);
    }

    /// Scrolls by a manual delta, cancelling any jump in progress.
    pub fn scroll_by(&mut self, delta: i32) {
        self.target = None;
        let next = i32::from(self.scroll) + delta;
        self.scroll = next.clamp(0, i32::from(self.max_scroll)) as u16;
    }

    /// Jumps straight to the top, cancelling any animation.
    pub fn scroll_to_top(&mut self) {
        self.target = None;
        self.scroll = 0;
    }

    /// Jumps straight to the bottom, cancelling any animation.
    pub fn scroll_to_bottom(&mut self) {
        self.target = None;
        self.scroll = self.max_scroll;
    }

    /// Advances one animation step toward the jump target, if any.
    ///
    /// Eases out: a quarter of the remaining distance per tick, at least
    /// one row, settling exactly on the target.
    pub fn tick(&mut self) {
        let Some(target) = self.target else {
            return;
        };

        let distance = i32::from(target) - i32::from(self.scroll);
        if distance == 0 {
            self.target = None;
            return;
        }

        let step = (distance.abs() / 4).max(1) * distance.signum();
        self.scroll = (i32::from(self.scroll) + step).clamp(0, i32::from(self.max_scroll)) as u16;
        if self.scroll == target {
            self.target = None;
        }
    }

    /// Whether a jump animation is in progress.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }
}

/// Vertical parallax offset for a floating glyph.
///
/// Pure function of scroll position and glyph index: glyphs drift upward
/// as the page scrolls, faster the later they appear.
#[must_use]
pub fn parallax_offset(scroll: u16, index: usize) -> i32 {
    let speed = PARALLAX_BASE_SPEED + PARALLAX_SPEED_STEP * index as f32;
    -(f32::from(scroll) * speed).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(document_height: u16, view_height: u16) -> Viewport {
        let mut vp = Viewport::new();
        vp.set_bounds(document_height, view_height);
        vp
    }

    #[test]
    fn test_jump_applies_header_offset() {
        let mut vp = viewport(100, 20);
        vp.jump_to(40);
        while vp.is_animating() {
            vp.tick();
        }
        assert_eq!(vp.scroll, 40 - HEADER_OFFSET_ROWS);
    }

    #[test]
    fn test_jump_near_top_clamps_to_zero() {
        let mut vp = viewport(100, 20);
        vp.scroll_by(10);
        vp.jump_to(2);
        while vp.is_animating() {
            vp.tick();
        }
        assert_eq!(vp.scroll, 0);
    }

    #[test]
    fn test_jump_settles_exactly_and_stops() {
        let mut vp = viewport(200, 20);
        vp.jump_to(100);
        let mut steps = 0;
        while vp.is_animating() {
            vp.tick();
            steps += 1;
            assert!(steps < 1000, "jump never settled");
        }
        assert_eq!(vp.scroll, 100 - HEADER_OFFSET_ROWS);
        // Further ticks are inert
        vp.tick();
        assert_eq!(vp.scroll, 100 - HEADER_OFFSET_ROWS);
    }

    #[test]
    fn test_manual_scroll_cancels_jump() {
        let mut vp = viewport(200, 20);
        vp.jump_to(100);
        assert!(vp.is_animating());
        vp.scroll_by(1);
        assert!(!vp.is_animating());
    }

    #[test]
    fn test_scroll_clamps_to_bounds() {
        let mut vp = viewport(50, 20);
        vp.scroll_by(-5);
        assert_eq!(vp.scroll, 0);
        vp.scroll_by(1000);
        assert_eq!(vp.scroll, 30);
    }

    #[test]
    fn test_parallax_speed_increases_with_index() {
        assert_eq!(parallax_offset(0, 0), 0);
        assert_eq!(parallax_offset(10, 0), -5);
        assert_eq!(parallax_offset(10, 1), -6);
        assert_eq!(parallax_offset(10, 2), -7);
    }

    #[test]
    fn test_parallax_is_pure_in_scroll() {
        let a = parallax_offset(7, 3);
        let b = parallax_offset(7, 3);
        assert_eq!(a, b);
    }
}
