//! Theme palettes and styling for the TUI.
//!
//! Two palettes, light and dark. The active choice is persisted in the
//! `"theme"` storage slot and defaults to light when unset.

use ratatui::style::{Color, Modifier, Style};
use taskmaster_core::task::Priority;

/// Which palette is active. Persisted as `"light"` / `"dark"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeKind {
    /// Light palette (default).
    #[default]
    Light,
    /// Dark palette.
    Dark,
}

impl ThemeKind {
    /// Returns the other palette.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Storage slot representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parses a stored slot value; anything unrecognized falls back to
    /// light.
    #[must_use]
    pub fn from_slot_value(value: &str) -> Self {
        match value.trim() {
            "dark" => Self::Dark,
            _ => Self::Light,
        }
    }
}

impl std::fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color palette consumed by all render functions.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Primary foreground color.
    pub fg_primary: Color,
    /// Secondary foreground color (dimmed text, metadata).
    pub fg_secondary: Color,
    /// Highlight color for focused/selected elements.
    pub highlight: Color,
    /// Success indicator color.
    pub success: Color,
    /// Warning indicator color.
    pub warning: Color,
    /// Error indicator color.
    pub error: Color,
    /// Panel title color for the task list.
    pub tasks_title: Color,
    /// Panel title color for the input box.
    pub input_title: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
}

impl Theme {
    /// The light palette.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            fg_primary: Color::Black,
            fg_secondary: Color::DarkGray,
            highlight: Color::Blue,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            tasks_title: Color::Blue,
            input_title: Color::Magenta,
            status_bg: Color::Rgb(220, 220, 230),
            status_fg: Color::Black,
        }
    }

    /// The dark palette.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            fg_primary: Color::White,
            fg_secondary: Color::Gray,
            highlight: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            tasks_title: Color::Green,
            input_title: Color::Cyan,
            status_bg: Color::Rgb(30, 30, 50),
            status_fg: Color::White,
        }
    }

    /// Palette for the given kind.
    #[must_use]
    pub const fn for_kind(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Light => Self::light(),
            ThemeKind::Dark => Self::dark(),
        }
    }

    /// Normal text style.
    #[must_use]
    pub fn normal(&self) -> Style {
        Style::default().fg(self.fg_primary)
    }

    /// Dimmed text style (dates, metadata).
    #[must_use]
    pub fn dimmed(&self) -> Style {
        Style::default().fg(self.fg_secondary)
    }

    /// Bold text style.
    #[must_use]
    pub fn bold(&self) -> Style {
        Style::default()
            .fg(self.fg_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Highlighted text style (focused borders, active filter).
    #[must_use]
    pub fn highlighted(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected row style.
    #[must_use]
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for completed task text (dimmed and struck through).
    #[must_use]
    pub fn completed(&self) -> Style {
        Style::default()
            .fg(self.fg_secondary)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    /// Style for panel titles with a given color (bold).
    #[must_use]
    pub fn panel_title(&self, color: Color) -> Style {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    /// Style for the status bar line.
    #[must_use]
    pub fn status_bar(&self) -> Style {
        Style::default().fg(self.status_fg).bg(self.status_bg)
    }

    /// Badge color for a priority level.
    #[must_use]
    pub const fn priority_color(&self, priority: Priority) -> Color {
        match priority {
            Priority::Low => self.success,
            Priority::Medium => self.warning,
            Priority::High => self.error,
        }
    }
}
