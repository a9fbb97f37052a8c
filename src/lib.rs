//! Folio - an interactive terminal portfolio.
//!
//! Renders a scrollable portfolio page in the terminal: themed light/dark
//! palettes, a sticky navigation bar with active-section tracking, scroll
//! reveal and counter animations, a contact form posting to an HTTP
//! endpoint in the background, and one hidden surprise for the patient.

pub mod config;
pub mod constants;
pub mod contact;
pub mod content;
pub mod logging;
pub mod tui;
