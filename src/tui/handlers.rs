//! Keyboard dispatch for the main event loop.
//!
//! Every key press is offered to the Konami detector before anything else,
//! matching a page-wide listener: the code works even while a popup has
//! focus. Popups then get exclusive input; otherwise the global bindings
//! apply.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use std::time::Instant;

use crate::content::SectionId;

use super::component::{Component, ComponentEvent};
use super::navbar;
use super::{AppState, PopupType};

/// Handle a key event. Returns `Ok(true)` when the application should quit.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent, now: Instant) -> Result<bool> {
    if key.kind != KeyEventKind::Press {
        return Ok(false);
    }

    // Page-wide easter egg listener
    if state.konami.record(key.code) {
        state.activate_easter_egg(now);
        return Ok(false);
    }

    if state.active_popup.is_some() {
        handle_popup_key(state, key);
        return Ok(false);
    }

    match key.code {
        KeyCode::Char('q') => return Ok(true),
        KeyCode::Char('t') => state.toggle_theme(),
        KeyCode::Char('?') => state.open_help(),
        KeyCode::Char('c') => state.open_contact_form(),
        KeyCode::Char('m') => state.open_nav_menu(),

        KeyCode::Char('j') | KeyCode::Down => state.viewport.scroll_by(1),
        KeyCode::Char('k') | KeyCode::Up => state.viewport.scroll_by(-1),
        KeyCode::PageDown => state.viewport.scroll_by(page_step(state)),
        KeyCode::PageUp => state.viewport.scroll_by(-page_step(state)),
        KeyCode::Char('g') | KeyCode::Home => state.viewport.scroll_to_top(),
        KeyCode::Char('G') | KeyCode::End => state.viewport.scroll_to_bottom(),

        KeyCode::Tab => jump_to_next_section(state),
        KeyCode::Char(c @ '1'..='5') => {
            if let Some(id) = section_for_digit(c) {
                jump_to_section(state, id);
            }
        }

        _ => {}
    }

    Ok(false)
}

fn page_step(state: &AppState) -> i32 {
    i32::from(state.view_height.saturating_sub(2).max(1))
}

fn jump_to_section(state: &mut AppState, id: SectionId) {
    if let Some(span) = state.doc.section(id) {
        state.viewport.jump_to(span.top);
        state.set_status(format!("→ {}", id.title()));
    }
}

/// Jump to the section after the currently active one, wrapping at the end.
fn jump_to_next_section(state: &mut AppState) {
    let sections = &state.doc.sections;
    if sections.is_empty() {
        return;
    }

    let next = match navbar::active_section(sections, state.viewport.scroll) {
        Some(active) => {
            let pos = sections.iter().position(|s| s.id == active).unwrap_or(0);
            (pos + 1) % sections.len()
        }
        None => 0,
    };
    let id = sections[next].id;
    jump_to_section(state, id);
}

fn handle_popup_key(state: &mut AppState, key: KeyEvent) {
    let Some(popup) = state.active_popup else {
        return;
    };

    match popup {
        PopupType::ContactForm => {
            let event = state.contact_form.handle_input(key);
            if let Some(ComponentEvent::Submit(payload)) = event {
                state.submit_contact(payload);
            }
            if state.contact_form.should_close() {
                state.close_popup();
            }
        }
        PopupType::NavMenu => {
            let event = state
                .nav_menu
                .as_mut()
                .and_then(|menu| menu.handle_input(key));
            if let Some(ComponentEvent::LinkActivated(index)) = event {
                state.activate_nav_entry(index);
                state.close_popup();
                return;
            }
            if state
                .nav_menu
                .as_ref()
                .is_some_and(Component::should_close)
            {
                state.close_popup();
            }
        }
        PopupType::Help => {
            if let Some(help) = state.help.as_mut() {
                let _ = help.handle_input(key);
            }
            if state.help.as_ref().is_some_and(Component::should_close) {
                state.close_popup();
            }
        }
    }
}

/// Section targeted by a numeric shortcut, `'1'` through `'5'`.
#[must_use]
pub fn section_for_digit(digit: char) -> Option<SectionId> {
    let index = (digit as usize).checked_sub('1' as usize)?;
    SectionId::ALL.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::content::Portfolio;
    use crossterm::event::{KeyEventState, KeyModifiers};
    use tempfile::TempDir;

    fn test_state() -> (AppState, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let config_path = temp.path().join("config.toml");
        let mut state = AppState::new(Config::new(), config_path, Portfolio::sample());
        state.view_height = 30;
        state.view_width = 100;
        state.viewport.set_bounds(state.doc.height, 30);
        (state, temp)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_quit_key() {
        let (mut state, _temp) = test_state();
        let quit = handle_key_event(&mut state, press(KeyCode::Char('q')), Instant::now());
        assert!(quit.unwrap());
    }

    #[test]
    fn test_scroll_keys() {
        let (mut state, _temp) = test_state();
        handle_key_event(&mut state, press(KeyCode::Char('j')), Instant::now()).unwrap();
        assert_eq!(state.viewport.scroll, 1);
        handle_key_event(&mut state, press(KeyCode::Char('k')), Instant::now()).unwrap();
        assert_eq!(state.viewport.scroll, 0);
    }

    #[test]
    fn test_digit_jump_targets_section() {
        let (mut state, _temp) = test_state();
        handle_key_event(&mut state, press(KeyCode::Char('3')), Instant::now()).unwrap();
        assert!(state.viewport.is_animating());
        assert_eq!(section_for_digit('3'), Some(SectionId::Skills));
        assert_eq!(section_for_digit('9'), None);
    }

    #[test]
    fn test_popup_captures_input() {
        let (mut state, _temp) = test_state();
        state.open_contact_form();
        // 'q' goes into the form, not quit
        let quit = handle_key_event(&mut state, press(KeyCode::Char('q')), Instant::now());
        assert!(!quit.unwrap());
        assert_eq!(state.contact_form.name, "q");
    }

    #[test]
    fn test_popup_escape_closes() {
        let (mut state, _temp) = test_state();
        state.open_help();
        handle_key_event(&mut state, press(KeyCode::Esc), Instant::now()).unwrap();
        assert_eq!(state.active_popup, None);
    }

    #[test]
    fn test_menu_activation_closes_and_jumps() {
        let (mut state, _temp) = test_state();
        state.open_nav_menu();
        handle_key_event(&mut state, press(KeyCode::Down), Instant::now()).unwrap();
        handle_key_event(&mut state, press(KeyCode::Enter), Instant::now()).unwrap();
        assert_eq!(state.active_popup, None);
        assert!(state.viewport.is_animating());
    }

    #[test]
    fn test_konami_fires_inside_popup() {
        let (mut state, _temp) = test_state();
        state.open_contact_form();
        for code in crate::tui::easter_egg::KONAMI_CODE {
            handle_key_event(&mut state, press(code), Instant::now()).unwrap();
        }
        assert!(state.rainbow.is_some());
    }

    #[test]
    fn test_release_events_ignored() {
        let (mut state, _temp) = test_state();
        let release = KeyEvent {
            code: KeyCode::Char('j'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        handle_key_event(&mut state, release, Instant::now()).unwrap();
        assert_eq!(state.viewport.scroll, 0);
    }
}
