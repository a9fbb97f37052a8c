//! Theme system for consistent UI colors across dark and light modes.
//!
//! The persisted [`ThemeMode`] resolves to a concrete palette here; Auto
//! detects the OS preference via the `dark-light` crate.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary color for borders, titles, and emphasis
    pub primary: Color,
    /// Accent color for highlights, the active nav link, and focus states
    pub accent: Color,
    /// Success state color (notifications, submission status)
    pub success: Color,
    /// Error state color (notifications, submission status)
    pub error: Color,

    /// Primary text content color
    pub text: Color,
    /// Muted text color for help text and dim content
    pub text_muted: Color,

    /// Main background color
    pub background: Color,
    /// Surface color for panels and popups
    pub surface: Color,
}

/// Theme variant identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    /// Dark theme optimized for dark terminal backgrounds
    Dark,
    /// Light theme optimized for light terminal backgrounds
    Light,
}

impl ThemeVariant {
    /// Flips between the two variants.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// The status-bar icon for this variant: sun when dark, moon when light.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Dark => "☀",
            Self::Light => "☾",
        }
    }

    /// The persisted mode equivalent of this variant.
    #[must_use]
    pub const fn mode(self) -> ThemeMode {
        match self {
            Self::Dark => ThemeMode::Dark,
            Self::Light => ThemeMode::Light,
        }
    }
}

impl Theme {
    /// Detects the OS theme and returns the matching variant.
    #[must_use]
    pub fn detect_variant() -> ThemeVariant {
        match dark_light::detect() {
            dark_light::Mode::Light => ThemeVariant::Light,
            // Fall back to dark when the OS reports dark or no preference
            dark_light::Mode::Dark | dark_light::Mode::Default => ThemeVariant::Dark,
        }
    }

    /// Resolves a persisted mode to a concrete variant.
    #[must_use]
    pub fn resolve(mode: ThemeMode) -> ThemeVariant {
        match mode {
            ThemeMode::Auto => Self::detect_variant(),
            ThemeMode::Dark => ThemeVariant::Dark,
            ThemeMode::Light => ThemeVariant::Light,
        }
    }

    /// Creates a theme from a variant.
    #[must_use]
    pub const fn from_variant(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Dark => Self::dark(),
            ThemeVariant::Light => Self::light(),
        }
    }

    /// Creates a dark theme optimized for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            error: Color::Red,

            text: Color::White,
            text_muted: Color::DarkGray,

            background: Color::Black,
            surface: Color::Rgb(30, 30, 30),
        }
    }

    /// Creates a light theme optimized for light terminal backgrounds.
    ///
    /// Accent is a dark orange rather than yellow for visibility.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0),
            success: Color::Rgb(0, 128, 0),
            error: Color::Red,

            text: Color::Black,
            text_muted: Color::Gray,

            background: Color::White,
            surface: Color::Rgb(245, 245, 245),
        }
    }

    /// Returns the variant for the current palette, judged by background.
    #[must_use]
    pub const fn variant(&self) -> ThemeVariant {
        match self.background {
            Color::White | Color::Rgb(255, 255, 255) => ThemeVariant::Light,
            _ => ThemeVariant::Dark,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_dark() {
        let theme = Theme::dark();
        assert_eq!(theme.primary, Color::Cyan);
        assert_eq!(theme.background, Color::Black);
        assert_eq!(theme.text, Color::White);
        assert_eq!(theme.variant(), ThemeVariant::Dark);
    }

    #[test]
    fn test_theme_light() {
        let theme = Theme::light();
        assert_eq!(theme.text, Color::Black);
        assert_eq!(theme.background, Color::White);
        assert_eq!(theme.variant(), ThemeVariant::Light);
        // Verify accent is not yellow (too bright for light bg)
        assert_ne!(theme.accent, Color::Yellow);
    }

    #[test]
    fn test_variant_toggle_is_involutive() {
        assert_eq!(ThemeVariant::Dark.toggled(), ThemeVariant::Light);
        assert_eq!(ThemeVariant::Light.toggled(), ThemeVariant::Dark);
        assert_eq!(ThemeVariant::Dark.toggled().toggled(), ThemeVariant::Dark);
    }

    #[test]
    fn test_variant_icons_differ() {
        assert_ne!(ThemeVariant::Dark.icon(), ThemeVariant::Light.icon());
    }

    #[test]
    fn test_resolve_explicit_modes() {
        assert_eq!(Theme::resolve(ThemeMode::Dark), ThemeVariant::Dark);
        assert_eq!(Theme::resolve(ThemeMode::Light), ThemeVariant::Light);
    }

    #[test]
    fn test_auto_resolves_to_a_concrete_variant() {
        // OS detection is environment-dependent, but it must always land
        // on one of the two palettes
        let variant = Theme::resolve(ThemeMode::Auto);
        assert!(matches!(variant, ThemeVariant::Dark | ThemeVariant::Light));
        assert_eq!(Theme::from_variant(variant).variant(), variant);
    }

    #[test]
    fn test_from_variant() {
        assert_eq!(Theme::from_variant(ThemeVariant::Dark), Theme::dark());
        assert_eq!(Theme::from_variant(ThemeVariant::Light), Theme::light());
    }
}
