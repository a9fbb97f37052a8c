//! Scroll-triggered animation state: one-shot reveals, stat counters,
//! and delayed progress-bar fills.
//!
//! None of this draws anything; rendering reads these states each frame.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::constants::{
    COUNTER_DURATION_MS, PROGRESS_DELAY_MS, REVEAL_BOTTOM_MARGIN_ROWS, REVEAL_THRESHOLD, TICK_MS,
};
use crate::content::Stat;
use crate::tui::document::{Element, ElementSpan};

/// Fraction of an element's rows inside the viewport, with the bottom
/// margin trimmed off.
fn visible_fraction(top: u16, height: u16, scroll: u16, view_height: u16) -> f32 {
    if height == 0 {
        return 0.0;
    }

    let view_top = u32::from(scroll);
    let view_bottom =
        u32::from(scroll) + u32::from(view_height.saturating_sub(REVEAL_BOTTOM_MARGIN_ROWS));
    let elem_top = u32::from(top);
    let elem_bottom = elem_top + u32::from(height);

    let overlap = elem_bottom
        .min(view_bottom)
        .saturating_sub(elem_top.max(view_top));

    overlap as f32 / f32::from(height)
}

/// One-shot reveal tracking for sections and cards.
///
/// An element is revealed the first time enough of it enters the viewport;
/// it never un-reveals when scrolled away.
#[derive(Debug, Default)]
pub struct RevealState {
    revealed: HashSet<Element>,
}

impl RevealState {
    /// Creates an empty reveal state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks all spans against the viewport and returns the elements
    /// newly revealed by this observation.
    pub fn observe(
        &mut self,
        spans: &[ElementSpan],
        scroll: u16,
        view_height: u16,
    ) -> Vec<Element> {
        let mut newly = Vec::new();
        for span in spans {
            if self.revealed.contains(&span.element) {
                continue;
            }
            let fraction = visible_fraction(span.top, span.height, scroll, view_height);
            if fraction >= REVEAL_THRESHOLD {
                self.revealed.insert(span.element);
                newly.push(span.element);
            }
        }
        newly
    }

    /// Whether an element has been revealed.
    #[must_use]
    pub fn is_revealed(&self, element: Element) -> bool {
        self.revealed.contains(&element)
    }
}

/// Suffix preserved through a counter animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suffix {
    /// Bare number
    None,
    /// Percent sign, e.g. "98%"
    Percent,
    /// Plus sign, e.g. "150+"
    Plus,
}

impl Suffix {
    const fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Percent => "%",
            Self::Plus => "+",
        }
    }
}

/// A single count-up animation toward a stat's target value.
///
/// Advances linearly by `target / (duration / tick)` per tick and clamps
/// at the target, so intermediate values are non-decreasing and bounded.
#[derive(Debug, Clone)]
pub struct Counter {
    target: u64,
    suffix: Suffix,
    current: f64,
    done: bool,
}

impl Counter {
    /// Parses a displayed stat value like `"150+"` into a counter.
    ///
    /// Returns `None` when the text has no leading number.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let digits: String = text.chars().take_while(char::is_ascii_digit).collect();
        let target: u64 = digits.parse().ok()?;

        let suffix = if text.contains('%') {
            Suffix::Percent
        } else if text.contains('+') {
            Suffix::Plus
        } else {
            Suffix::None
        };

        Some(Self {
            target,
            suffix,
            current: 0.0,
            done: target == 0,
        })
    }

    /// Advances the counter by one tick.
    pub fn advance(&mut self) {
        if self.done {
            return;
        }

        let steps = (COUNTER_DURATION_MS / TICK_MS) as f64;
        self.current += self.target as f64 / steps;
        if self.current >= self.target as f64 {
            self.current = self.target as f64;
            self.done = true;
        }
    }

    /// Whether the counter has reached its target.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Current displayed text: the floored running value plus the suffix.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{}{}", self.current.floor() as u64, self.suffix.as_str())
    }
}

/// Counter animations for the About section's stats.
#[derive(Debug, Default)]
pub struct StatCounters {
    counters: Vec<Counter>,
    started: bool,
}

impl StatCounters {
    /// Creates an idle set of counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or restarts) counting from zero for each stat.
    ///
    /// There is deliberately no double-start guard; re-triggering restarts
    /// the count, matching the page behavior.
    pub fn start(&mut self, stats: &[Stat]) {
        self.counters = stats
            .iter()
            .filter_map(|stat| Counter::parse(&stat.value))
            .collect();
        self.started = true;
    }

    /// Whether the animation has been triggered.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Advances every counter by one tick.
    pub fn tick(&mut self) {
        for counter in &mut self.counters {
            counter.advance();
        }
    }

    /// Displayed text for the stat at `index`, if animating.
    #[must_use]
    pub fn display(&self, index: usize) -> Option<String> {
        self.counters.get(index).map(Counter::display)
    }
}

/// Delayed progress-bar fill for the Skills section.
///
/// After the fixed delay every bar's width becomes its target; the slide
/// itself is a rendering concern, not computed per frame.
#[derive(Debug, Default)]
pub struct ProgressBars {
    started_at: Option<Instant>,
}

impl ProgressBars {
    /// Creates idle progress bars.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or restarts) the fill delay.
    pub fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
    }

    /// Whether the animation has been triggered.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Width of a bar with the given target percentage at `now`.
    ///
    /// Zero until the delay has elapsed, then exactly the target.
    #[must_use]
    pub fn width(&self, target: u16, now: Instant) -> u16 {
        match self.started_at {
            Some(t0) if now.duration_since(t0) >= Duration::from_millis(PROGRESS_DELAY_MS) => {
                target
            }
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SectionId;

    #[test]
    fn test_counter_parse_suffixes() {
        assert_eq!(Counter::parse("150+").unwrap().suffix, Suffix::Plus);
        assert_eq!(Counter::parse("98%").unwrap().suffix, Suffix::Percent);
        assert_eq!(Counter::parse("8").unwrap().suffix, Suffix::None);
        assert!(Counter::parse("n/a").is_none());
    }

    #[test]
    fn test_counter_monotonic_and_bounded() {
        let mut counter = Counter::parse("150+").unwrap();
        let mut previous = 0u64;

        for _ in 0..200 {
            counter.advance();
            let text = counter.display();
            let value: u64 = text.trim_end_matches('+').parse().unwrap();
            assert!(value >= previous, "counter went backwards");
            assert!(value <= 150, "counter overshot target");
            previous = value;
        }
        assert!(counter.is_done());
        assert_eq!(counter.display(), "150+");
    }

    #[test]
    fn test_counter_reaches_target_near_duration() {
        let mut counter = Counter::parse("150+").unwrap();
        let mut ticks = 0;
        while !counter.is_done() {
            counter.advance();
            ticks += 1;
            assert!(ticks <= 200, "counter never finished");
        }
        // 2000ms / 16ms = 125 linear steps, plus float slack
        assert!(ticks >= 125 && ticks <= 126, "finished in {ticks} ticks");
    }

    #[test]
    fn test_counter_zero_target_is_immediately_done() {
        let counter = Counter::parse("0").unwrap();
        assert!(counter.is_done());
        assert_eq!(counter.display(), "0");
    }

    #[test]
    fn test_stat_counters_restart_on_second_start() {
        let stats = vec![Stat {
            label: "x".to_string(),
            value: "100".to_string(),
        }];
        let mut counters = StatCounters::new();
        counters.start(&stats);
        for _ in 0..200 {
            counters.tick();
        }
        assert_eq!(counters.display(0).as_deref(), Some("100"));

        counters.start(&stats);
        assert_eq!(counters.display(0).as_deref(), Some("0"));
    }

    #[test]
    fn test_progress_width_respects_delay() {
        let mut bars = ProgressBars::new();
        let t0 = Instant::now();
        bars.start(t0);

        assert_eq!(bars.width(80, t0), 0);
        let before = t0 + Duration::from_millis(PROGRESS_DELAY_MS - 1);
        assert_eq!(bars.width(80, before), 0);
        let after = t0 + Duration::from_millis(PROGRESS_DELAY_MS);
        assert_eq!(bars.width(80, after), 80);
        // Never exceeds the target
        let much_later = t0 + Duration::from_millis(PROGRESS_DELAY_MS * 10);
        assert_eq!(bars.width(80, much_later), 80);
    }

    #[test]
    fn test_progress_idle_width_is_zero() {
        let bars = ProgressBars::new();
        assert_eq!(bars.width(80, Instant::now()), 0);
    }

    #[test]
    fn test_reveal_is_one_shot() {
        let spans = vec![ElementSpan {
            element: Element::Section(SectionId::About),
            top: 10,
            height: 10,
        }];
        let mut reveal = RevealState::new();

        // Far away: nothing revealed
        assert!(reveal.observe(&spans, 100, 20).is_empty());
        assert!(!reveal.is_revealed(Element::Section(SectionId::About)));

        // In view: revealed once
        let newly = reveal.observe(&spans, 5, 20);
        assert_eq!(newly.len(), 1);
        assert!(reveal.is_revealed(Element::Section(SectionId::About)));

        // Scrolled away and back: no second reveal
        assert!(reveal.observe(&spans, 100, 20).is_empty());
        assert!(reveal.observe(&spans, 5, 20).is_empty());
        assert!(reveal.is_revealed(Element::Section(SectionId::About)));
    }

    #[test]
    fn test_reveal_threshold_fraction() {
        // 10-row element with exactly 1 row visible: 10%, right at threshold
        assert!(visible_fraction(19, 10, 0, 20 + REVEAL_BOTTOM_MARGIN_ROWS) >= REVEAL_THRESHOLD);
        // Fully out of view
        assert_eq!(visible_fraction(50, 10, 0, 20), 0.0);
        // Fully in view
        assert!((visible_fraction(2, 10, 0, 40) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_reveal_bottom_margin_shrinks_viewport() {
        // Element exactly at the raw viewport bottom is hidden by the margin
        let view_height = 20;
        let top = view_height - REVEAL_BOTTOM_MARGIN_ROWS;
        assert_eq!(visible_fraction(top, 10, 0, view_height), 0.0);
    }
}
