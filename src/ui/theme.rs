//! Theme and styling configuration.

use std::sync::OnceLock;

use ratatui::style::Color;

/// Color theme for the application.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Primary foreground color.
    pub fg: Color,
    /// Dimmed foreground for hints and borders.
    pub dim: Color,
    /// Highlight color for the cursor row.
    pub highlight: Color,
    /// Color for selected (checked) rows.
    pub selected: Color,
    /// Accent color for the header and paginator.
    pub accent: Color,
}

impl Theme {
    /// The default dark theme.
    pub fn dark() -> Self {
        Self {
            fg: Color::White,
            dim: Color::DarkGray,
            highlight: Color::Cyan,
            selected: Color::Green,
            accent: Color::Cyan,
        }
    }

    /// A theme for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            fg: Color::Black,
            dim: Color::Gray,
            highlight: Color::Blue,
            selected: Color::Green,
            accent: Color::Blue,
        }
    }

    /// Look up a theme by its config name. Unknown names fall back to dark.
    pub fn by_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

static THEME: OnceLock<Theme> = OnceLock::new();

/// Install the global theme. Later calls are ignored.
pub fn init_theme(name: &str) {
    let _ = THEME.set(Theme::by_name(name));
}

/// The active theme.
pub fn theme() -> Theme {
    *THEME.get_or_init(Theme::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name_light() {
        let t = Theme::by_name("light");
        assert_eq!(t.fg, Color::Black);
    }

    #[test]
    fn test_by_name_unknown_falls_back_to_dark() {
        let t = Theme::by_name("solarized-mauve");
        assert_eq!(t.fg, Color::White);
    }
}
