//! The artwork gallery view.
//!
//! Renders one page of artwork records as a table with checkbox row
//! selection, with a paginator footer. This view owns the page index, the
//! displayed records, and the selection set; fetching is requested through
//! [`GalleryAction::PageChanged`] so the caller controls when requests are
//! actually issued.

use std::collections::HashSet;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::api::types::{Artwork, ArtworkPage};
use crate::ui::components::Paginator;
use crate::ui::theme::theme;

/// Actions that can be returned from the gallery view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryAction {
    /// The page index changed; the caller should fetch this 0-based page.
    PageChanged(u32),
    /// Re-fetch the current page.
    Refresh(u32),
    /// Open the given URL in the system browser.
    OpenUrl(String),
}

/// The paged, selectable artwork table.
pub struct GalleryView {
    /// Records for the most recently applied page, in server order.
    artworks: Vec<Artwork>,
    /// Ids of the checked rows. Keyed by artwork id, so selection survives
    /// paging and re-renders of the same logical row.
    selected: HashSet<u64>,
    /// Cursor position within the current page.
    cursor: usize,
    /// Page index and total-count state.
    paginator: Paginator,
    /// Whether a fetch for the current page is outstanding. The table is not
    /// gated while loading; the previous page stays interactive.
    loading: bool,
    /// Whether checkbox selection is active. Fixed configuration; when
    /// false the checkbox column still renders but keys do not change it.
    selection_enabled: bool,
    /// Whether hjkl navigation is active.
    vim_mode: bool,
    /// Table state for ratatui row highlighting.
    table_state: TableState,
}

impl GalleryView {
    /// Create a new gallery view at page 0.
    pub fn new(vim_mode: bool) -> Self {
        let mut table_state = TableState::default();
        table_state.select(Some(0));
        Self {
            artworks: Vec::new(),
            selected: HashSet::new(),
            cursor: 0,
            paginator: Paginator::new(),
            loading: false,
            selection_enabled: true,
            vim_mode,
            table_state,
        }
    }

    /// The 0-based page index currently displayed (or being fetched).
    pub fn current_page(&self) -> u32 {
        self.paginator.page()
    }

    /// The records currently displayed.
    pub fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }

    /// Server-reported total record count.
    pub fn total(&self) -> u64 {
        self.paginator.total()
    }

    /// Offset of the first displayed record.
    pub fn first_offset(&self) -> u64 {
        self.paginator.first()
    }

    /// Ids of the checked rows.
    pub fn selected(&self) -> &HashSet<u64> {
        &self.selected
    }

    /// Replace the selection wholesale.
    pub fn set_selected(&mut self, selected: HashSet<u64>) {
        self.selected = selected;
    }

    /// Whether a fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Mark a fetch as outstanding.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// The artwork under the cursor.
    pub fn cursored_artwork(&self) -> Option<&Artwork> {
        self.artworks.get(self.cursor)
    }

    /// Apply a successfully fetched page.
    ///
    /// Replaces the records and the total wholesale. The page index is not
    /// touched (the caller set it when the fetch was requested) and the
    /// selection is left alone.
    pub fn apply_page(&mut self, page: ArtworkPage) {
        self.paginator.set_total(page.total());
        self.artworks = page.data;
        self.loading = false;

        if self.cursor >= self.artworks.len() {
            self.cursor = self.artworks.len().saturating_sub(1);
        }
        self.table_state.select(Some(self.cursor));
    }

    /// Handle keyboard input.
    ///
    /// Returns an action for the caller when the page changes or an external
    /// effect is requested; cursor movement and selection are absorbed here.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<GalleryAction> {
        if let Some(action) = self.handle_navigation(key) {
            return Some(action);
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('j'), KeyModifiers::NONE) if self.vim_mode => {
                self.move_cursor_down();
                None
            }
            (KeyCode::Char('k'), KeyModifiers::NONE) if self.vim_mode => {
                self.move_cursor_up();
                None
            }
            (KeyCode::Down, _) => {
                self.move_cursor_down();
                None
            }
            (KeyCode::Up, _) => {
                self.move_cursor_up();
                None
            }
            (KeyCode::Char(' '), KeyModifiers::NONE) => {
                self.toggle_current();
                None
            }
            (KeyCode::Char('a'), KeyModifiers::CONTROL) => {
                self.select_all();
                None
            }
            (KeyCode::Char('x'), KeyModifiers::NONE) => {
                self.clear_selection();
                None
            }
            (KeyCode::Char('r'), KeyModifiers::NONE) => {
                Some(GalleryAction::Refresh(self.current_page()))
            }
            (KeyCode::Char('o'), KeyModifiers::NONE) => self
                .cursored_artwork()
                .map(|art| GalleryAction::OpenUrl(art.web_url())),
            _ => None,
        }
    }

    /// Handle the page-navigation keys.
    fn handle_navigation(&mut self, key: KeyEvent) -> Option<GalleryAction> {
        let changed = match (key.code, key.modifiers) {
            (KeyCode::Char('l'), KeyModifiers::NONE) if self.vim_mode => {
                self.paginator.next_page()
            }
            (KeyCode::Char('h'), KeyModifiers::NONE) if self.vim_mode => {
                self.paginator.prev_page()
            }
            (KeyCode::Right, _) | (KeyCode::Char('n'), KeyModifiers::NONE) => {
                self.paginator.next_page()
            }
            (KeyCode::Left, _) | (KeyCode::Char('p'), KeyModifiers::NONE) => {
                self.paginator.prev_page()
            }
            (KeyCode::Home, _) | (KeyCode::Char('g'), KeyModifiers::NONE) => {
                self.paginator.first_page()
            }
            (KeyCode::End, _) | (KeyCode::Char('G'), KeyModifiers::SHIFT) => {
                self.paginator.last_page()
            }
            _ => return None,
        };

        changed.map(GalleryAction::PageChanged)
    }

    /// Move the cursor down one row.
    fn move_cursor_down(&mut self) {
        if !self.artworks.is_empty() && self.cursor < self.artworks.len() - 1 {
            self.cursor += 1;
            self.table_state.select(Some(self.cursor));
        }
    }

    /// Move the cursor up one row.
    fn move_cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.table_state.select(Some(self.cursor));
        }
    }

    /// Toggle the checkbox of the row under the cursor.
    fn toggle_current(&mut self) {
        if !self.selection_enabled {
            return;
        }
        if let Some(art) = self.artworks.get(self.cursor) {
            if !self.selected.remove(&art.id) {
                self.selected.insert(art.id);
            }
        }
    }

    /// Check every row on the current page.
    fn select_all(&mut self) {
        if !self.selection_enabled {
            return;
        }
        for art in &self.artworks {
            self.selected.insert(art.id);
        }
    }

    /// Uncheck everything, including rows selected on other pages.
    fn clear_selection(&mut self) {
        if self.selection_enabled {
            self.selected.clear();
        }
    }

    /// Render the table and the paginator footer.
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Table
                Constraint::Length(1), // Paginator
            ])
            .split(area);

        self.render_table(frame, chunks[0]);
        self.paginator.render(frame, chunks[1]);
    }

    /// Render the artwork table.
    fn render_table(&mut self, frame: &mut Frame, area: Rect) {
        let theme = theme();

        let block = Block::default()
            .title(" Artworks ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.dim));

        if self.artworks.is_empty() {
            let message = if self.loading {
                "Loading artworks..."
            } else {
                "No artworks to display"
            };
            let paragraph = Paragraph::new(Line::from(Span::styled(
                message,
                Style::default().fg(theme.dim),
            )))
            .block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let header = Row::new(vec![
            Cell::from(""),
            Cell::from("Title"),
            Cell::from("Place of Origin"),
            Cell::from("Artist"),
            Cell::from("Inscriptions"),
            Cell::from("Start"),
            Cell::from("End"),
        ])
        .style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

        let rows: Vec<Row> = self
            .artworks
            .iter()
            .map(|art| {
                let checked = self.selected.contains(&art.id);
                let checkbox = if checked { "[x]" } else { "[ ]" };
                let row_style = if checked {
                    Style::default().fg(theme.selected)
                } else {
                    Style::default().fg(theme.fg)
                };

                Row::new(vec![
                    Cell::from(checkbox),
                    Cell::from(art.title.as_str()),
                    Cell::from(art.place_of_origin.as_deref().unwrap_or("")),
                    Cell::from(art.artist_display.as_deref().unwrap_or("")),
                    Cell::from(art.inscriptions.as_deref().unwrap_or("")),
                    Cell::from(art.date_start.map(|y| y.to_string()).unwrap_or_default()),
                    Cell::from(art.date_end.map(|y| y.to_string()).unwrap_or_default()),
                ])
                .style(row_style)
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(3),
                Constraint::Percentage(26),
                Constraint::Percentage(16),
                Constraint::Percentage(28),
                Constraint::Percentage(18),
                Constraint::Length(6),
                Constraint::Length(6),
            ],
        )
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

        frame.render_stateful_widget(table, area, &mut self.table_state);
    }

    /// Render the one-line status bar.
    pub fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let theme = theme();

        let mut spans = vec![Span::styled(
            format!(
                " Page {}/{} ",
                self.paginator.page() + 1,
                self.paginator.page_count()
            ),
            Style::default().fg(theme.accent).add_modifier(Modifier::REVERSED),
        )];

        if !self.selected.is_empty() {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                format!("{} selected", self.selected.len()),
                Style::default().fg(theme.selected),
            ));
        }

        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            "←/→ page  ↑/↓ move  space select  o open  r refresh  ? help  q quit",
            Style::default().fg(theme.dim),
        ));

        let bar = Paragraph::new(Line::from(spans));
        frame.render_widget(bar, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::Pagination;

    fn page_of(ids: &[u64], total: u64) -> ArtworkPage {
        ArtworkPage {
            data: ids
                .iter()
                .map(|&id| Artwork {
                    id,
                    title: format!("Artwork {}", id),
                    place_of_origin: Some("Chicago".to_string()),
                    artist_display: Some("Unknown artist".to_string()),
                    inscriptions: None,
                    date_start: Some(1900),
                    date_end: Some(1901),
                })
                .collect(),
            pagination: Pagination {
                total,
                limit: 10,
                current_page: 1,
                total_pages: 0,
            },
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_apply_page_replaces_records_and_total() {
        let mut view = GalleryView::new(true);
        view.apply_page(page_of(&[1, 2, 3], 37));
        assert_eq!(view.artworks().len(), 3);
        assert_eq!(view.total(), 37);
        assert_eq!(view.first_offset(), 0);

        view.apply_page(page_of(&[4, 5], 42));
        assert_eq!(view.artworks().len(), 2);
        assert_eq!(view.total(), 42);
    }

    #[test]
    fn test_apply_page_preserves_page_index_and_selection() {
        let mut view = GalleryView::new(true);
        view.apply_page(page_of(&[1, 2], 100));
        view.handle_input(key(KeyCode::Char(' ')));
        assert!(view.selected().contains(&1));

        view.handle_input(key(KeyCode::Right));
        assert_eq!(view.current_page(), 1);

        view.apply_page(page_of(&[11, 12], 100));
        assert_eq!(view.current_page(), 1);
        assert!(view.selected().contains(&1));
    }

    #[test]
    fn test_page_change_emits_action_with_target_page() {
        let mut view = GalleryView::new(true);
        view.apply_page(page_of(&[1], 50));

        assert_eq!(
            view.handle_input(key(KeyCode::Right)),
            Some(GalleryAction::PageChanged(1))
        );
        assert_eq!(
            view.handle_input(key(KeyCode::End)),
            Some(GalleryAction::PageChanged(4))
        );
        assert_eq!(
            view.handle_input(key(KeyCode::Home)),
            Some(GalleryAction::PageChanged(0))
        );
    }

    #[test]
    fn test_page_change_at_bounds_emits_nothing() {
        let mut view = GalleryView::new(true);
        view.apply_page(page_of(&[1], 10));
        // Single page: neither direction can move.
        assert_eq!(view.handle_input(key(KeyCode::Right)), None);
        assert_eq!(view.handle_input(key(KeyCode::Left)), None);
    }

    #[test]
    fn test_offset_tracks_page_changes() {
        let mut view = GalleryView::new(true);
        view.apply_page(page_of(&[1], 100));
        view.handle_input(key(KeyCode::Right));
        view.handle_input(key(KeyCode::Right));
        assert_eq!(view.first_offset(), 20);
    }

    #[test]
    fn test_selection_toggle_and_clear() {
        let mut view = GalleryView::new(true);
        view.apply_page(page_of(&[7, 8, 9], 3));

        view.handle_input(key(KeyCode::Char(' ')));
        assert!(view.selected().contains(&7));
        view.handle_input(key(KeyCode::Char(' ')));
        assert!(!view.selected().contains(&7));

        view.handle_input(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        assert_eq!(view.selected().len(), 3);

        view.handle_input(key(KeyCode::Char('x')));
        assert!(view.selected().is_empty());
    }

    #[test]
    fn test_selection_never_mutates_records_or_page_state() {
        let mut view = GalleryView::new(true);
        view.apply_page(page_of(&[1, 2, 3], 37));
        let records_before = view.artworks().to_vec();
        let page_before = view.current_page();
        let total_before = view.total();

        view.handle_input(key(KeyCode::Char(' ')));
        view.handle_input(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        view.set_selected(HashSet::from([2, 3]));

        assert_eq!(view.artworks(), records_before.as_slice());
        assert_eq!(view.current_page(), page_before);
        assert_eq!(view.total(), total_before);
    }

    #[test]
    fn test_selection_replacement_is_wholesale() {
        let mut view = GalleryView::new(true);
        view.apply_page(page_of(&[1, 2, 3], 3));
        view.handle_input(key(KeyCode::Char(' ')));
        assert!(view.selected().contains(&1));

        view.set_selected(HashSet::from([3]));
        assert_eq!(view.selected(), &HashSet::from([3]));
    }

    #[test]
    fn test_cursor_clamped_to_page_length() {
        let mut view = GalleryView::new(true);
        view.apply_page(page_of(&[1, 2, 3], 100));
        view.handle_input(key(KeyCode::Down));
        view.handle_input(key(KeyCode::Down));
        assert_eq!(view.cursored_artwork().unwrap().id, 3);

        // A shorter page pulls the cursor back in range.
        view.apply_page(page_of(&[4], 100));
        assert_eq!(view.cursored_artwork().unwrap().id, 4);
    }

    #[test]
    fn test_refresh_reports_current_page() {
        let mut view = GalleryView::new(true);
        view.apply_page(page_of(&[1], 50));
        view.handle_input(key(KeyCode::Right));
        assert_eq!(
            view.handle_input(key(KeyCode::Char('r'))),
            Some(GalleryAction::Refresh(1))
        );
    }

    #[test]
    fn test_open_url_for_cursored_artwork() {
        let mut view = GalleryView::new(true);
        view.apply_page(page_of(&[129884], 1));
        assert_eq!(
            view.handle_input(key(KeyCode::Char('o'))),
            Some(GalleryAction::OpenUrl(
                "https://www.artic.edu/artworks/129884".to_string()
            ))
        );
    }

    #[test]
    fn test_vim_keys_respect_vim_mode() {
        let mut view = GalleryView::new(false);
        view.apply_page(page_of(&[1, 2], 50));
        // 'l' is a page key only in vim mode.
        assert_eq!(view.handle_input(key(KeyCode::Char('l'))), None);
        assert_eq!(view.current_page(), 0);

        let mut vim_view = GalleryView::new(true);
        vim_view.apply_page(page_of(&[1, 2], 50));
        assert_eq!(
            vim_view.handle_input(key(KeyCode::Char('l'))),
            Some(GalleryAction::PageChanged(1))
        );
    }

    #[test]
    fn test_empty_page_is_safe() {
        let mut view = GalleryView::new(true);
        view.handle_input(key(KeyCode::Down));
        view.handle_input(key(KeyCode::Char(' ')));
        assert!(view.selected().is_empty());
        assert_eq!(view.cursored_artwork(), None);
    }
}
