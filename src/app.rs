//! Main application state and event loop model.
//!
//! This module implements The Elm Architecture (TEA) pattern: `update`
//! consumes events and mutates state, `view` renders it. Fetches are not
//! performed here; when a page change requires one, the app records a
//! pending fetch and the main loop spawns the task. That keeps the
//! page-change → fetch call graph explicit and testable without a network.

use tracing::{debug, error, info, trace, warn};

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::config::Config;
use crate::events::Event;
use crate::tasks::ApiMessage;
use crate::ui::{theme::theme, GalleryAction, GalleryView, HelpView};

/// The current screen state of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Waiting for the initial page-0 fetch.
    #[default]
    Loading,
    /// Browsing the artwork table.
    Browsing,
    /// Help overlay is open.
    Help,
    /// Application is shutting down.
    Exiting,
}

/// The main application struct that holds all state.
pub struct App {
    /// The current screen state.
    state: AppState,
    /// Whether the application should quit.
    should_quit: bool,
    /// The artwork gallery view.
    gallery: GalleryView,
    /// A 0-based page index the main loop should fetch. Set by page-change
    /// handling, taken exactly once by the loop.
    pending_fetch: Option<u32>,
}

impl App {
    /// Create a new application instance.
    ///
    /// The initial state requests page 0: the gallery starts loading and the
    /// first call to [`App::take_pending_fetch`] yields `Some(0)`.
    pub fn new(config: &Config) -> Self {
        debug!("Creating application instance");

        let mut gallery = GalleryView::new(config.ui.vim_mode);
        gallery.set_loading(true);

        Self {
            state: AppState::Loading,
            should_quit: false,
            gallery,
            pending_fetch: Some(0),
        }
    }

    /// Whether the application should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the current application state.
    pub fn state(&self) -> AppState {
        self.state
    }

    /// Get a reference to the gallery view.
    pub fn gallery(&self) -> &GalleryView {
        &self.gallery
    }

    /// Take the pending page fetch, if any.
    ///
    /// The main loop calls this after each update and spawns a fetch task
    /// for the returned page.
    pub fn take_pending_fetch(&mut self) -> Option<u32> {
        self.pending_fetch.take()
    }

    /// Request a fetch for the given 0-based page.
    ///
    /// This is the single point that turns a page change into a fetch.
    fn request_page(&mut self, page: u32) {
        info!(page, "Requesting artwork page");
        self.gallery.set_loading(true);
        self.pending_fetch = Some(page);
    }

    /// Update the application state based on an event.
    pub fn update(&mut self, event: Event) {
        match event {
            Event::Key(key_event) => {
                trace!(key = ?key_event.code, modifiers = ?key_event.modifiers, "Key event");
                self.handle_key_event(key_event);
            }
            Event::Resize(width, height) => {
                trace!(width, height, "Terminal resize event");
                // Handled automatically by ratatui on the next draw
            }
            Event::Tick => {}
        }
    }

    /// Handle keyboard input events.
    fn handle_key_event(&mut self, key_event: crossterm::event::KeyEvent) {
        use crossterm::event::{KeyCode, KeyModifiers};

        // Ctrl+C always quits
        if let (KeyCode::Char('c'), KeyModifiers::CONTROL) =
            (key_event.code, key_event.modifiers)
        {
            self.quit();
            return;
        }

        match self.state {
            AppState::Help => match key_event.code {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
                    self.state = AppState::Browsing;
                }
                _ => {}
            },
            AppState::Loading | AppState::Browsing => match key_event.code {
                KeyCode::Char('q') | KeyCode::Esc => self.quit(),
                KeyCode::Char('?') => {
                    self.state = AppState::Help;
                }
                _ => {
                    if let Some(action) = self.gallery.handle_input(key_event) {
                        self.handle_gallery_action(action);
                    }
                }
            },
            AppState::Exiting => {}
        }
    }

    /// Apply an action emitted by the gallery view.
    fn handle_gallery_action(&mut self, action: GalleryAction) {
        match action {
            GalleryAction::PageChanged(page) => {
                debug!(page, "Page changed");
                self.request_page(page);
            }
            GalleryAction::Refresh(page) => {
                info!(page, "Refreshing current page");
                self.request_page(page);
            }
            GalleryAction::OpenUrl(url) => {
                debug!(url = %url, "Opening artwork in browser");
                if let Err(e) = open::that(&url) {
                    warn!(url = %url, error = %e, "Failed to open browser");
                }
            }
        }
    }

    /// Apply a message from a background task.
    ///
    /// A failed fetch is logged and otherwise dropped: whatever the gallery
    /// showed before the fetch stays exactly as it was. A successful fetch
    /// for a page the user has already left is discarded the same way.
    pub fn handle_api_message(&mut self, message: ApiMessage) {
        match message {
            ApiMessage::PageFetched { page, result } => {
                if page != self.gallery.current_page() {
                    debug!(
                        answered = page,
                        current = self.gallery.current_page(),
                        "Discarding response for a page no longer displayed"
                    );
                    return;
                }

                match result {
                    Ok(artwork_page) => {
                        debug!(
                            page,
                            records = artwork_page.data.len(),
                            total = artwork_page.total(),
                            "Applying fetched page"
                        );
                        self.gallery.apply_page(artwork_page);
                    }
                    Err(e) => {
                        error!(page, error = %e, "Failed to fetch artwork page");
                        self.gallery.set_loading(false);
                    }
                }

                if self.state == AppState::Loading {
                    self.state = AppState::Browsing;
                }
            }
        }
    }

    /// Signal shutdown.
    fn quit(&mut self) {
        info!("Quit requested");
        self.should_quit = true;
        self.state = AppState::Exiting;
    }

    /// Render the application UI.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Header
                Constraint::Min(4),    // Content
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        self.render_header(frame, chunks[0]);
        self.gallery.render(frame, chunks[1]);
        self.gallery.render_status_bar(frame, chunks[2]);

        if self.state == AppState::Help {
            HelpView::render(frame, area);
        }
    }

    /// Render the application header.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let theme = theme();
        let title = Paragraph::new(Line::styled(
            "Artscope · Art Institute of Chicago",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.dim)),
        );
        frame.render_widget(title, area);
    }
}
