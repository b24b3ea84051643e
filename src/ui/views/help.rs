//! Help overlay listing the key bindings.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::theme::theme;

/// Key bindings shown in the help overlay, as (keys, description) pairs.
const BINDINGS: &[(&str, &str)] = &[
    ("→ / n / l", "Next page"),
    ("← / p / h", "Previous page"),
    ("Home / g", "First page"),
    ("End / G", "Last page"),
    ("↓ / j", "Move cursor down"),
    ("↑ / k", "Move cursor up"),
    ("space", "Toggle row selection"),
    ("Ctrl+a", "Select all rows on page"),
    ("x", "Clear selection"),
    ("o", "Open artwork in browser"),
    ("r", "Refresh current page"),
    ("?", "Toggle this help"),
    ("q / Esc", "Quit"),
];

/// The help view, rendered centered over the gallery.
pub struct HelpView;

impl HelpView {
    /// Render the help overlay.
    pub fn render(frame: &mut Frame, area: Rect) {
        let theme = theme();

        let height = (BINDINGS.len() as u16) + 4;
        let width = 44u16.min(area.width);
        let popup = centered_rect(width, height.min(area.height), area);

        let mut lines = vec![Line::from("")];
        for (keys, description) in BINDINGS {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<12}", keys),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*description, Style::default().fg(theme.fg)),
            ]));
        }

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent));

        frame.render_widget(Clear, popup);
        frame.render_widget(Paragraph::new(lines).block(block), popup);
    }
}

/// A rect of the given size centered inside `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_inside_area() {
        let area = Rect::new(0, 0, 80, 24);
        let popup = centered_rect(44, 17, area);
        assert!(popup.x + popup.width <= 80);
        assert!(popup.y + popup.height <= 24);
        assert_eq!(popup.width, 44);
    }

    #[test]
    fn test_centered_rect_clamps_to_small_area() {
        let area = Rect::new(0, 0, 20, 5);
        let popup = centered_rect(44, 17, area);
        assert!(popup.width <= 20);
        assert!(popup.height <= 5);
    }
}
