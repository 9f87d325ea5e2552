//! Modal overlays for editing and destructive-action confirmation.

use ratatui::{
    Frame,
    layout::Position,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;

use super::centered_rect;

/// Render the edit overlay with the live text buffer and edit priority.
pub fn render_edit(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = centered_rect(60, 3, frame.area());
    frame.render_widget(Clear, area);

    let title = format!("Edit task \u{2014} priority: {} (Tab to change)", app.edit_priority);
    let body = Paragraph::new(Line::from(Span::styled(app.input.as_str(), theme.normal())))
        .block(
            Block::default()
                .title(Span::styled(title, theme.panel_title(theme.input_title)))
                .borders(Borders::ALL)
                .border_style(theme.highlighted()),
        );
    frame.render_widget(body, area);

    let cursor_x = u16::try_from(app.cursor_position).unwrap_or(u16::MAX);
    frame.set_cursor_position(Position::new(
        area.x.saturating_add(cursor_x).saturating_add(1),
        area.y + 1,
    ));
}

/// Render the delete-confirmation overlay with a preview of the doomed
/// task.
pub fn render_confirm_delete(frame: &mut Frame, app: &App) {
    let preview = app
        .pending_delete_task()
        .map_or_else(String::new, |t| t.text.clone());
    render_confirm(frame, app, "Delete task?", &preview);
}

/// Render the clear-all confirmation overlay.
pub fn render_confirm_clear(frame: &mut Frame, app: &App) {
    let stats = app.store.stats();
    let body = format!("This removes all {} tasks permanently.", stats.total);
    render_confirm(frame, app, "Clear all tasks?", &body);
}

fn render_confirm(frame: &mut Frame, app: &App, title: &str, body: &str) {
    let theme = &app.theme;
    let area = centered_rect(50, 4, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(body, theme.normal())),
        Line::from(Span::styled("y: confirm    n: cancel", theme.dimmed())),
    ];
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(title, theme.bold().fg(theme.error)))
            .borders(Borders::ALL)
            .border_style(theme.highlighted()),
    );
    frame.render_widget(paragraph, area);
}
