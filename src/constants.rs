//! Application-wide constants.
//!
//! This module defines constants used throughout the application:
//! naming, event-loop timing, scroll geometry, and animation durations.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Folio";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "folio";

/// Event-loop tick interval in milliseconds.
///
/// Counters advance once per tick, so this doubles as the counter step.
pub const TICK_MS: u64 = 16;

/// Rows the viewport stops short of a section top when jumping to it,
/// leaving room for the nav bar.
pub const HEADER_OFFSET_ROWS: u16 = 4;

/// Rows added to the scroll position when deciding which section is active.
pub const ACTIVE_LOOKAHEAD_ROWS: u16 = 6;

/// Scroll depth past which the nav bar switches to its elevated style.
pub const NAVBAR_ELEVATED_THRESHOLD_ROWS: u16 = 3;

/// Fraction of an element that must be inside the viewport to reveal it.
pub const REVEAL_THRESHOLD: f32 = 0.1;

/// Rows trimmed off the bottom of the viewport for reveal checks.
pub const REVEAL_BOTTOM_MARGIN_ROWS: u16 = 3;

/// Terminal width below which nav links collapse behind the menu toggle.
pub const MOBILE_BREAKPOINT_COLS: u16 = 80;

/// Delay before a progress bar fills to its target, in milliseconds.
pub const PROGRESS_DELAY_MS: u64 = 500;

/// Total duration of a counter animation, in milliseconds.
pub const COUNTER_DURATION_MS: u64 = 2000;

/// Lifetime of a notification banner, in milliseconds.
pub const NOTIFICATION_LIFETIME_MS: u64 = 5000;

/// Duration of the notification slide-in and slide-out, in milliseconds.
pub const NOTIFICATION_SLIDE_MS: u64 = 300;

/// How long the easter-egg effect stays on screen, in milliseconds.
pub const EASTER_EGG_DURATION_MS: u64 = 5000;

/// Path of the contact endpoint on the configured base URL.
pub const CONTACT_ENDPOINT_PATH: &str = "/api/contact";

/// Base parallax speed for the first floating glyph.
pub const PARALLAX_BASE_SPEED: f32 = 0.5;

/// Parallax speed added per floating-glyph index.
pub const PARALLAX_SPEED_STEP: f32 = 0.1;
