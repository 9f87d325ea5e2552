//! Input box rendering (add/search entry and the normal-mode hint line).

use ratatui::{
    Frame,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, InputMode};

/// Render the input box above the task list.
///
/// In insert and search modes the box shows the live text buffer and places
/// the terminal cursor at the edit position; otherwise it shows the active
/// search term and the next-task priority.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let (title, body, show_cursor) = match app.mode {
        InputMode::Insert => (
            format!("Add task \u{2014} priority: {} (Tab to change)", app.selected_priority),
            app.input.as_str(),
            true,
        ),
        InputMode::Search => ("Search".to_string(), app.input.as_str(), true),
        _ => {
            if app.search.is_empty() {
                (
                    format!("New task priority: {}", app.selected_priority),
                    "Press 'a' to add a task, '/' to search",
                    false,
                )
            } else {
                ("Search (press '/' to change)".to_string(), app.search.as_str(), false)
            }
        }
    };

    let style = if show_cursor {
        theme.normal()
    } else {
        theme.dimmed()
    };
    let input = Paragraph::new(Line::from(Span::styled(body, style))).block(
        Block::default()
            .title(Span::styled(title, theme.panel_title(theme.input_title)))
            .borders(Borders::ALL)
            .border_style(if show_cursor {
                theme.highlighted()
            } else {
                theme.normal()
            }),
    );
    frame.render_widget(input, area);

    if show_cursor {
        let cursor_x = u16::try_from(app.cursor_position).unwrap_or(u16::MAX);
        frame.set_cursor_position(Position::new(
            area.x.saturating_add(cursor_x).saturating_add(1),
            area.y + 1,
        ));
    }
}
