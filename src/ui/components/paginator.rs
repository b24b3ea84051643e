//! Page navigation state and footer rendering.
//!
//! The paginator owns the 0-based page index and the server-reported total,
//! and renders a first/previous/page-list/next/last control line. The page
//! size is a single fixed option; the endpoint serves 10 records per page
//! and this constant must match it for the offset math to hold.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::theme;

/// Records per page. Fixed; mirrors the endpoint's served page size.
pub const PAGE_SIZE: u32 = 10;

/// How many numbered page links to show around the current page.
const PAGE_LINK_WINDOW: u32 = 5;

/// Page navigation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    /// The 0-based current page index.
    page: u32,
    /// Total record count, as last reported by the server.
    total: u64,
}

impl Paginator {
    /// Create a paginator at page 0 with an unknown (zero) total.
    pub fn new() -> Self {
        Self { page: 0, total: 0 }
    }

    /// The 0-based current page index.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Total record count.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Overwrite the total with the server-reported count.
    pub fn set_total(&mut self, total: u64) {
        self.total = total;
    }

    /// Offset of the first record on the current page.
    pub fn first(&self) -> u64 {
        u64::from(self.page) * u64::from(PAGE_SIZE)
    }

    /// Number of pages implied by the current total. At least 1.
    pub fn page_count(&self) -> u32 {
        let pages = self.total.div_ceil(u64::from(PAGE_SIZE));
        pages.clamp(1, u64::from(u32::MAX)) as u32
    }

    /// Whether a previous page exists.
    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    /// Whether a next page exists.
    pub fn has_next(&self) -> bool {
        self.page + 1 < self.page_count()
    }

    /// Jump to an absolute page index, clamped to the known page range.
    ///
    /// Returns the new page if it changed.
    pub fn go_to(&mut self, page: u32) -> Option<u32> {
        let target = page.min(self.page_count() - 1);
        if target == self.page {
            return None;
        }
        self.page = target;
        Some(target)
    }

    /// Move to the first page. Returns the new page if it changed.
    pub fn first_page(&mut self) -> Option<u32> {
        self.go_to(0)
    }

    /// Move to the previous page. Returns the new page if it changed.
    pub fn prev_page(&mut self) -> Option<u32> {
        if self.has_prev() {
            self.go_to(self.page - 1)
        } else {
            None
        }
    }

    /// Move to the next page. Returns the new page if it changed.
    pub fn next_page(&mut self) -> Option<u32> {
        if self.has_next() {
            self.go_to(self.page + 1)
        } else {
            None
        }
    }

    /// Move to the last page. Returns the new page if it changed.
    pub fn last_page(&mut self) -> Option<u32> {
        self.go_to(self.page_count() - 1)
    }

    /// The window of 1-based page numbers to display as links.
    fn page_links(&self) -> Vec<u32> {
        let count = self.page_count();
        let half = PAGE_LINK_WINDOW / 2;
        let start = self.page.saturating_sub(half);
        let start = start.min(count.saturating_sub(PAGE_LINK_WINDOW));
        (start + 1..=count.min(start + PAGE_LINK_WINDOW)).collect()
    }

    /// Render the paginator line: `« ‹ 1 2 [3] 4 5 › »  20-29 of 126557`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let theme = theme();
        let active = Style::default().fg(theme.accent);
        let inactive = Style::default().fg(theme.dim);
        let current = Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED);

        let mut spans = vec![
            Span::styled("«", if self.has_prev() { active } else { inactive }),
            Span::raw(" "),
            Span::styled("‹", if self.has_prev() { active } else { inactive }),
            Span::raw("  "),
        ];

        for number in self.page_links() {
            let style = if number == self.page + 1 {
                current
            } else {
                active
            };
            spans.push(Span::styled(format!(" {} ", number), style));
        }

        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            "›",
            if self.has_next() { active } else { inactive },
        ));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            "»",
            if self.has_next() { active } else { inactive },
        ));

        if self.total > 0 {
            let last = (self.first() + u64::from(PAGE_SIZE)).min(self.total);
            spans.push(Span::styled(
                format!("   {}-{} of {}", self.first(), last.saturating_sub(1), self.total),
                Style::default().fg(theme.fg),
            ));
            spans.push(Span::styled(
                format!(" ({}/page)", PAGE_SIZE),
                Style::default().fg(theme.dim),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new()
    }
}
