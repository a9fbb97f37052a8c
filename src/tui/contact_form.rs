//! Contact form popup component.
//!
//! Three text fields plus a submit button. While a submission is in
//! flight the button is disabled and relabeled; the parent re-enables it
//! exactly once when the outcome arrives.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::contact::ContactPayload;
use crate::tui::component::{Component, ComponentEvent};
use crate::tui::Theme;

/// Fields in the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// Sender name
    Name,
    /// Sender email
    Email,
    /// Message body
    Message,
    /// The submit button
    Submit,
}

impl FormField {
    const fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Message,
            Self::Message => Self::Submit,
            Self::Submit => Self::Name,
        }
    }

    const fn previous(self) -> Self {
        match self {
            Self::Name => Self::Submit,
            Self::Email => Self::Name,
            Self::Message => Self::Email,
            Self::Submit => Self::Message,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
            Self::Submit => "Submit",
        }
    }
}

/// Contact form state.
#[derive(Debug)]
pub struct ContactForm {
    /// Name field contents
    pub name: String,
    /// Email field contents
    pub email: String,
    /// Message field contents
    pub message: String,
    active: FormField,
    submitting: bool,
    closed: bool,
}

impl ContactForm {
    /// Creates an empty form focused on the name field.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            active: FormField::Name,
            submitting: false,
            closed: false,
        }
    }

    /// The currently focused field.
    #[must_use]
    pub fn active_field(&self) -> FormField {
        self.active
    }

    /// Locks or unlocks the submit button while a request is in flight.
    pub fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
    }

    /// Whether the submit button is currently locked.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Clears every field (after a successful submission).
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.active = FormField::Name;
    }

    fn active_text_mut(&mut self) -> Option<&mut String> {
        match self.active {
            FormField::Name => Some(&mut self.name),
            FormField::Email => Some(&mut self.email),
            FormField::Message => Some(&mut self.message),
            FormField::Submit => None,
        }
    }

    fn payload(&self) -> ContactPayload {
        ContactPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }

    fn render_field(
        &self,
        f: &mut Frame,
        area: Rect,
        field: FormField,
        value: &str,
        theme: &Theme,
    ) {
        let focused = self.active == field;
        let border = if focused {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.text_muted)
        };
        let paragraph = Paragraph::new(value.to_string())
            .style(Style::default().fg(theme.text))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title(field.label()),
            );
        f.render_widget(paragraph, area);
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ContactForm {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc => {
                self.closed = true;
                Some(ComponentEvent::Cancelled)
            }
            KeyCode::Tab | KeyCode::Down => {
                self.active = self.active.next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.active = self.active.previous();
                None
            }
            KeyCode::Enter => {
                if self.active == FormField::Submit {
                    if self.submitting {
                        // Button disabled while the request is in flight
                        None
                    } else {
                        Some(ComponentEvent::Submit(self.payload()))
                    }
                } else {
                    self.active = self.active.next();
                    None
                }
            }
            KeyCode::Backspace => {
                if let Some(text) = self.active_text_mut() {
                    text.pop();
                }
                None
            }
            KeyCode::Char(c) => {
                if let Some(text) = self.active_text_mut() {
                    text.push(c);
                }
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let width = 50.min(area.width);
        let height = 14.min(area.height);
        let popup = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        };

        f.render_widget(Clear, popup);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .title(" Get In Touch ")
            .style(Style::default().bg(theme.surface));
        let inner = block.inner(popup);
        f.render_widget(block, popup);

        if inner.height < 12 {
            return;
        }

        let field_rect = |y: u16, h: u16| Rect {
            x: inner.x + 1,
            y: inner.y + y,
            width: inner.width.saturating_sub(2),
            height: h,
        };

        self.render_field(f, field_rect(0, 3), FormField::Name, &self.name, theme);
        self.render_field(f, field_rect(3, 3), FormField::Email, &self.email, theme);
        self.render_field(f, field_rect(6, 3), FormField::Message, &self.message, theme);

        // Submit button: relabeled and dimmed while a request is in flight
        let label = if self.submitting {
            "Sending..."
        } else {
            "Send Message"
        };
        let button_style = if self.submitting {
            Style::default().fg(theme.text_muted)
        } else if self.active == FormField::Submit {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };
        let button = Paragraph::new(Line::from(Span::styled(format!("[ {label} ]"), button_style)))
            .centered();
        f.render_widget(button, field_rect(9, 1));
    }

    fn should_close(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(form: &mut ContactForm, text: &str) {
        for c in text.chars() {
            form.handle_input(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_typing_fills_active_field() {
        let mut form = ContactForm::new();
        type_text(&mut form, "Alex");
        form.handle_input(key(KeyCode::Tab));
        type_text(&mut form, "a@b.c");
        form.handle_input(key(KeyCode::Tab));
        type_text(&mut form, "Hello");

        assert_eq!(form.name, "Alex");
        assert_eq!(form.email, "a@b.c");
        assert_eq!(form.message, "Hello");
    }

    #[test]
    fn test_field_cycle_wraps() {
        let mut form = ContactForm::new();
        assert_eq!(form.active_field(), FormField::Name);
        for _ in 0..4 {
            form.handle_input(key(KeyCode::Tab));
        }
        assert_eq!(form.active_field(), FormField::Name);
        form.handle_input(key(KeyCode::BackTab));
        assert_eq!(form.active_field(), FormField::Submit);
    }

    #[test]
    fn test_enter_on_submit_emits_payload() {
        let mut form = ContactForm::new();
        type_text(&mut form, "Alex");
        while form.active_field() != FormField::Submit {
            form.handle_input(key(KeyCode::Tab));
        }

        let event = form.handle_input(key(KeyCode::Enter));
        match event {
            Some(ComponentEvent::Submit(payload)) => assert_eq!(payload.name, "Alex"),
            other => panic!("expected submit event, got {other:?}"),
        }
    }

    #[test]
    fn test_submit_disabled_while_in_flight() {
        let mut form = ContactForm::new();
        while form.active_field() != FormField::Submit {
            form.handle_input(key(KeyCode::Tab));
        }
        form.set_submitting(true);

        assert!(form.handle_input(key(KeyCode::Enter)).is_none());

        form.set_submitting(false);
        assert!(matches!(
            form.handle_input(key(KeyCode::Enter)),
            Some(ComponentEvent::Submit(_))
        ));
    }

    #[test]
    fn test_clear_resets_fields_and_focus() {
        let mut form = ContactForm::new();
        type_text(&mut form, "Alex");
        form.handle_input(key(KeyCode::Tab));
        type_text(&mut form, "a@b.c");
        form.clear();

        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.message.is_empty());
        assert_eq!(form.active_field(), FormField::Name);
    }

    #[test]
    fn test_escape_cancels() {
        let mut form = ContactForm::new();
        let event = form.handle_input(key(KeyCode::Esc));
        assert!(matches!(event, Some(ComponentEvent::Cancelled)));
        assert!(form.should_close());
    }

    #[test]
    fn test_backspace_edits_active_field() {
        let mut form = ContactForm::new();
        type_text(&mut form, "Alexx");
        form.handle_input(key(KeyCode::Backspace));
        assert_eq!(form.name, "Alex");
    }
}
