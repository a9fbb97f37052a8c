//! Component trait pattern for TUI popups.
//!
//! Popups are self-contained UI elements that manage their own state,
//! handle keyboard input, and emit events for the parent to act on.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::contact::ContactPayload;
use crate::tui::Theme;

/// A popup component that can be rendered and handle input.
pub trait Component {
    /// Event type this component can emit
    type Event;

    /// Handle keyboard input.
    ///
    /// Returns `Some(Event)` if the component wants to signal something to
    /// the parent; `None` if input was handled internally.
    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event>;

    /// Render the component within the provided area.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme);

    /// Check if the component has finished its work and should be closed.
    fn should_close(&self) -> bool {
        false
    }
}

/// Events emitted by popup components and processed by the app state.
#[derive(Debug, Clone)]
pub enum ComponentEvent {
    /// Contact form requested a submission
    Submit(ContactPayload),
    /// A nav-menu entry was activated
    LinkActivated(usize),
    /// User dismissed the component without acting
    Cancelled,
}
