//! Terminal user interface: state, event loop, and rendering.
//!
//! All UI state lives in [`AppState`]; the event loop ticks animations,
//! polls the background submission, renders, and dispatches input. The
//! controllers (theme, navigation, animations, contact form, easter egg)
//! are independent fields coordinated only by this loop.

pub mod animation;
pub mod component;
pub mod contact_form;
pub mod document;
pub mod easter_egg;
pub mod handlers;
pub mod help_overlay;
pub mod navbar;
pub mod notification;
pub mod scroll;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout},
    style::Style,
    widgets::Block,
    Frame, Terminal,
};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::constants::{CONTACT_ENDPOINT_PATH, TICK_MS};
use crate::contact::{ContactPayload, ContactState};
use crate::content::{LinkTarget, NavEntry, Portfolio};

pub use animation::{ProgressBars, RevealState, StatCounters};
pub use component::{Component, ComponentEvent};
pub use contact_form::ContactForm;
pub use document::DocumentLayout;
pub use easter_egg::{KonamiDetector, RainbowEffect};
pub use help_overlay::HelpOverlay;
pub use navbar::{NavBar, NavMenu};
pub use notification::Notification;
pub use scroll::Viewport;
pub use status_bar::StatusBar;
pub use theme::{Theme, ThemeVariant};

/// Popup types that can be displayed over the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupType {
    /// Contact form
    ContactForm,
    /// Collapsed nav menu
    NavMenu,
    /// Help overlay
    Help,
}

/// Application state - single source of truth.
///
/// All UI components read from this state immutably; only event handlers
/// and the tick modify it.
pub struct AppState {
    // Core data
    /// Portfolio content
    pub portfolio: Portfolio,
    /// Precomputed document geometry
    pub doc: DocumentLayout,
    /// Nav bar entries (sections plus the external login link)
    pub nav: Vec<NavEntry>,

    // Theme
    /// Current theme palette
    pub theme: Theme,
    /// Current resolved variant (what toggling flips)
    pub theme_variant: ThemeVariant,

    // Scroll / navigation
    /// Scrollable viewport over the document
    pub viewport: Viewport,
    /// Last known content-area height, for reveal checks and paging
    pub view_height: u16,
    /// Last known content-area width
    pub view_width: u16,

    // Animations
    /// One-shot reveal tracking
    pub reveal: RevealState,
    /// Stat counter animations
    pub counters: StatCounters,
    /// Progress bar animations
    pub progress: ProgressBars,

    // Contact
    /// Contact form contents (kept across popup open/close)
    pub contact_form: ContactForm,
    /// Background submission state
    pub submission: ContactState,
    /// Active notification banner, if any
    pub notification: Option<Notification>,

    // Easter egg
    /// Konami input buffer
    pub konami: KonamiDetector,
    /// Rainbow effect while the easter egg is active
    pub rainbow: Option<RainbowEffect>,

    // Popups
    /// Currently active popup (if any)
    pub active_popup: Option<PopupType>,
    /// Collapsed nav menu component (present while open)
    pub nav_menu: Option<NavMenu>,
    /// Help overlay component (present while open)
    pub help: Option<HelpOverlay>,

    // System resources
    /// Application configuration
    pub config: Config,
    /// Where the configuration persists (injectable for tests)
    pub config_path: PathBuf,

    // Status
    /// Status bar message
    pub status_message: String,
    /// Whether the application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates a new `AppState` from config and content.
    #[must_use]
    pub fn new(config: Config, config_path: PathBuf, portfolio: Portfolio) -> Self {
        let doc = document::layout(&portfolio);
        let nav = portfolio.nav_entries();
        let theme_variant = Theme::resolve(config.ui.theme);
        let theme = Theme::from_variant(theme_variant);

        Self {
            portfolio,
            doc,
            nav,
            theme,
            theme_variant,
            viewport: Viewport::new(),
            view_height: 0,
            view_width: 0,
            reveal: RevealState::new(),
            counters: StatCounters::new(),
            progress: ProgressBars::new(),
            contact_form: ContactForm::new(),
            submission: ContactState::new(),
            notification: None,
            konami: KonamiDetector::new(),
            rainbow: None,
            active_popup: None,
            nav_menu: None,
            help: None,
            config,
            config_path,
            status_message: "Press ? for help".to_string(),
            should_quit: false,
        }
    }

    /// Set status message.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Applies a theme variant, persists it, and updates the status-bar
    /// icon.
    pub fn set_theme(&mut self, variant: ThemeVariant) {
        self.theme_variant = variant;
        self.theme = Theme::from_variant(variant);
        self.config.ui.theme = variant.mode();

        if let Err(e) = self.config.save_to(&self.config_path) {
            tracing::warn!(error = %e, "failed to persist theme");
        }

        self.set_status(format!(
            "{} {} theme",
            variant.icon(),
            match variant {
                ThemeVariant::Dark => "Dark",
                ThemeVariant::Light => "Light",
            }
        ));
    }

    /// Flips between light and dark. Toggling twice restores the original
    /// theme and persisted entry.
    pub fn toggle_theme(&mut self) {
        self.set_theme(self.theme_variant.toggled());
    }

    /// Opens the contact form popup.
    pub fn open_contact_form(&mut self) {
        self.active_popup = Some(PopupType::ContactForm);
    }

    /// Opens the collapsed nav menu popup.
    pub fn open_nav_menu(&mut self) {
        self.nav_menu = Some(NavMenu::new(&self.nav));
        self.active_popup = Some(PopupType::NavMenu);
    }

    /// Opens the help overlay popup.
    pub fn open_help(&mut self) {
        self.help = Some(HelpOverlay::new());
        self.active_popup = Some(PopupType::Help);
    }

    /// Closes the currently active popup.
    pub fn close_popup(&mut self) {
        self.active_popup = None;
        self.nav_menu = None;
        self.help = None;
    }

    /// Whether the nav menu popup is open.
    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.active_popup == Some(PopupType::NavMenu)
    }

    /// Activates a nav entry: section links jump, external links pass
    /// through untouched and are only surfaced on the status line.
    pub fn activate_nav_entry(&mut self, index: usize) {
        let Some(entry) = self.nav.get(index) else {
            return;
        };

        match &entry.target {
            LinkTarget::Section(id) => {
                if let Some(span) = self.doc.section(*id) {
                    self.viewport.jump_to(span.top);
                    self.set_status(format!("→ {}", id.title()));
                }
            }
            LinkTarget::External(url) => {
                // Deliberate policy: no scroll interception for external links
                self.set_status(format!("External link: {url}"));
            }
        }
    }

    /// Starts a contact submission in the background and locks the form.
    pub fn submit_contact(&mut self, payload: ContactPayload) {
        let endpoint = format!(
            "{}{}",
            self.config.contact.base_url.trim_end_matches('/'),
            CONTACT_ENDPOINT_PATH
        );

        match self.submission.submit(endpoint, payload) {
            Ok(()) => {
                self.contact_form.set_submitting(true);
                self.set_status("Sending message...");
            }
            Err(e) => self.set_status(format!("Cannot submit: {e}")),
        }
    }

    /// Triggers the easter egg.
    pub fn activate_easter_egg(&mut self, now: Instant) {
        self.rainbow = Some(RainbowEffect::new(now));
    }

    /// Advances all time-driven state by one tick.
    pub fn tick(&mut self, now: Instant) {
        // Smooth scroll easing
        self.viewport.tick();

        // Reveal observation; About and Skills have side effects on first
        // reveal
        let newly = self
            .reveal
            .observe(&self.doc.elements, self.viewport.scroll, self.view_height);
        for element in newly {
            match element {
                document::Element::Section(crate::content::SectionId::About) => {
                    self.counters.start(&self.portfolio.stats);
                }
                document::Element::Section(crate::content::SectionId::Skills) => {
                    self.progress.start(now);
                }
                _ => {}
            }
        }

        if self.counters.is_started() {
            self.counters.tick();
        }

        // Background submission outcome, delivered exactly once
        if let Some(outcome) = self.submission.poll() {
            self.contact_form.set_submitting(false);
            if outcome.success {
                self.notification = Some(Notification::success("Message sent successfully! 🎉"));
                self.contact_form.clear();
            } else {
                self.notification =
                    Some(Notification::error("Failed to send message. Please try again. 😞"));
            }
        }

        // Expire the notification banner
        if self
            .notification
            .as_ref()
            .is_some_and(|n| n.is_expired(now))
        {
            self.notification = None;
        }

        // Tear down the easter egg and reset the buffer so the code can
        // fire again
        if self.rainbow.as_ref().is_some_and(|r| r.is_expired(now)) {
            self.rainbow = None;
            self.konami.reset();
        }
    }

    /// Theme palette with the easter-egg hue rotation applied when active.
    #[must_use]
    pub fn effective_theme(&self, now: Instant) -> Theme {
        match &self.rainbow {
            Some(effect) => {
                let mut theme = self.theme.clone();
                let color = effect.color(now);
                theme.primary = color;
                theme.accent = color;
                theme
            }
            None => self.theme.clone(),
        }
    }
}

/// Initialize terminal for TUI.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state.
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Paces animation ticks to the fixed interval.
///
/// `event::poll` returns immediately while input is queued, so without
/// pacing a held-down key would advance counters and scroll easing far
/// faster than their nominal durations.
struct TickPacer {
    last: Instant,
}

impl TickPacer {
    fn new(now: Instant) -> Self {
        Self { last: now }
    }

    /// True at most once per tick interval.
    fn should_tick(&mut self, now: Instant) -> bool {
        if now.duration_since(self.last) >= Duration::from_millis(TICK_MS) {
            self.last = now;
            true
        } else {
            false
        }
    }

    /// Time left until the next tick is due.
    fn remaining(&self, now: Instant) -> Duration {
        Duration::from_millis(TICK_MS).saturating_sub(now.duration_since(self.last))
    }
}

/// Main event loop.
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    let mut pacer = TickPacer::new(Instant::now());

    loop {
        let now = Instant::now();
        if pacer.should_tick(now) {
            state.tick(now);
        }

        terminal.draw(|f| render(f, state, now))?;

        if crossterm::event::poll(pacer.remaining(Instant::now()))? {
            if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
                if handlers::handle_key_event(state, key, Instant::now())? {
                    break;
                }
            }
            // Resize events fall through; the next draw picks up the new size
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state.
fn render(f: &mut Frame, state: &mut AppState, now: Instant) {
    let theme = state.effective_theme(now);

    // Fill the whole screen with the theme background first
    let full_bg = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Nav bar
            Constraint::Min(5),    // Page content
            Constraint::Length(2), // Status bar
        ])
        .split(f.area());

    let content = chunks[1];
    state.view_height = content.height;
    state.view_width = content.width;
    state
        .viewport
        .set_bounds(state.doc.height, content.height);

    let active = navbar::active_section(&state.doc.sections, state.viewport.scroll);
    NavBar::render(
        f,
        chunks[0],
        &state.nav,
        active,
        state.menu_open(),
        state.viewport.scroll,
        &theme,
    );

    let ctx = document::RenderContext {
        theme: &theme,
        reveal: &state.reveal,
        counters: &state.counters,
        progress: &state.progress,
        scroll: state.viewport.scroll,
        now,
        width: content.width,
    };
    document::render(f, content, &state.portfolio, &ctx);

    StatusBar::render(f, chunks[2], state, &theme);

    // Popups over the page
    match state.active_popup {
        Some(PopupType::ContactForm) => state.contact_form.render(f, f.area(), &theme),
        Some(PopupType::NavMenu) => {
            if let Some(menu) = &state.nav_menu {
                menu.render(f, f.area(), &theme);
            }
        }
        Some(PopupType::Help) => {
            if let Some(help) = &state.help {
                help.render(f, f.area(), &theme);
            }
        }
        None => {}
    }

    // Notification banner above popups
    if let Some(notification) = &state.notification {
        notification.render(f, f.area(), &theme, now);
    }

    // Easter egg overlay on top of everything
    if let Some(effect) = &state.rainbow {
        effect.render(f, f.area(), &theme, now);
    }
}
