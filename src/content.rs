//! Portfolio content model.
//!
//! The page's markup becomes data here: sections, skills with target
//! percentages, stats with suffixed values, projects, and the floating
//! glyphs the hero section animates. Content can be loaded from a TOML
//! file or fall back to the built-in sample.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Identifier for the fixed set of page sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    /// Hero section with name, tagline, and floating glyphs
    Home,
    /// Bio and animated stats
    About,
    /// Skill cards with progress bars
    Skills,
    /// Project cards
    Projects,
    /// Contact call-to-action
    Contact,
}

impl SectionId {
    /// All sections in page order.
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::About,
        Self::Skills,
        Self::Projects,
        Self::Contact,
    ];

    /// Human-readable section title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }
}

/// Target of a nav entry: an in-page section or an external URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Jump to a section of the page
    Section(SectionId),
    /// External link, passed through without scrolling
    External(String),
}

/// One entry in the nav bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    /// Label shown in the nav bar
    pub label: String,
    /// Where the entry leads
    pub target: LinkTarget,
}

/// A skill with the percentage its progress bar fills to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Skill name
    pub name: String,
    /// Target fill percentage (0-100)
    pub level: u16,
}

/// A stat item whose value counts up when the About section reveals.
///
/// The value keeps its original text form (e.g. `"150+"`, `"98%"`, `"12"`)
/// so the suffix survives the animation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    /// Stat label
    pub label: String,
    /// Displayed value, digits with an optional `%` or `+` suffix
    pub value: String,
}

/// A project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project name
    pub name: String,
    /// One-line description
    pub description: String,
}

/// A decorative glyph floating in the hero section, moved by parallax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloatingGlyph {
    /// The glyph itself
    pub glyph: String,
    /// Column the glyph floats in
    pub col: u16,
    /// Row the glyph rests at before any scrolling
    pub row: u16,
}

/// The whole portfolio: everything the page displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Site owner's name
    pub name: String,
    /// Hero tagline
    pub tagline: String,
    /// Bio paragraph lines for the About section
    pub bio: Vec<String>,
    /// Animated stats
    pub stats: Vec<Stat>,
    /// Skills with progress-bar targets
    pub skills: Vec<Skill>,
    /// Project cards
    pub projects: Vec<Project>,
    /// Floating hero glyphs
    #[serde(default)]
    pub glyphs: Vec<FloatingGlyph>,
    /// URL of the external login link
    #[serde(default = "default_login_url")]
    pub login_url: String,
}

fn default_login_url() -> String {
    "https://example.com/admin/login".to_string()
}

impl Portfolio {
    /// Loads portfolio content from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read content file: {}", path.display()))?;

        let portfolio: Self = toml::from_str(&content)
            .context(format!("Failed to parse content file: {}", path.display()))?;

        Ok(portfolio)
    }

    /// Built-in sample content used when no content file is given.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            name: "Alex Rivera".to_string(),
            tagline: "Full-stack developer who ships".to_string(),
            bio: vec![
                "I build web applications end to end, from database schema".to_string(),
                "to pixel polish. Off hours I contribute to open source and".to_string(),
                "mentor new developers.".to_string(),
            ],
            stats: vec![
                Stat {
                    label: "Projects Completed".to_string(),
                    value: "150+".to_string(),
                },
                Stat {
                    label: "Client Satisfaction".to_string(),
                    value: "98%".to_string(),
                },
                Stat {
                    label: "Years Experience".to_string(),
                    value: "8".to_string(),
                },
            ],
            skills: vec![
                Skill {
                    name: "Rust".to_string(),
                    level: 80,
                },
                Skill {
                    name: "TypeScript".to_string(),
                    level: 90,
                },
                Skill {
                    name: "PostgreSQL".to_string(),
                    level: 75,
                },
                Skill {
                    name: "Kubernetes".to_string(),
                    level: 60,
                },
            ],
            projects: vec![
                Project {
                    name: "Atlas".to_string(),
                    description: "Self-hosted map tile server with offline sync".to_string(),
                },
                Project {
                    name: "Inkwell".to_string(),
                    description: "Collaborative markdown editor with CRDT merge".to_string(),
                },
                Project {
                    name: "Relay".to_string(),
                    description: "Lightweight webhook router for home labs".to_string(),
                },
            ],
            glyphs: vec![
                FloatingGlyph {
                    glyph: "◆".to_string(),
                    col: 8,
                    row: 2,
                },
                FloatingGlyph {
                    glyph: "●".to_string(),
                    col: 52,
                    row: 4,
                },
                FloatingGlyph {
                    glyph: "▲".to_string(),
                    col: 30,
                    row: 6,
                },
            ],
            login_url: default_login_url(),
        }
    }

    /// Builds the nav bar entries: one per section plus the external login link.
    #[must_use]
    pub fn nav_entries(&self) -> Vec<NavEntry> {
        let mut entries: Vec<NavEntry> = SectionId::ALL
            .iter()
            .map(|&id| NavEntry {
                label: id.title().to_string(),
                target: LinkTarget::Section(id),
            })
            .collect();

        entries.push(NavEntry {
            label: "Login".to_string(),
            target: LinkTarget::External(self.login_url.clone()),
        });

        entries
    }
}
