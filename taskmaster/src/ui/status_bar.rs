//! Status bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, InputMode, NotifyKind};

/// Render the status bar at the bottom of the screen.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let help_text = match app.mode {
        InputMode::Normal => {
            "a: add | e: edit | d: delete | Space: toggle | J/K: move | f: filter | /: search | t: theme | x: export | q: quit"
        }
        InputMode::Insert => "Enter: add | Tab: priority | Esc: cancel",
        InputMode::Edit => "Enter: save | Tab: priority | Esc: cancel",
        InputMode::Search => "Enter: keep | Esc: clear",
        InputMode::ConfirmDelete | InputMode::ConfirmClear => "y: confirm | n: cancel",
    };

    let stats = app.store.stats();
    let mut spans = vec![
        Span::styled("TaskMaster", theme.bold()),
        Span::raw(" | "),
        Span::raw(format!("{}/{} done", stats.completed, stats.total)),
        Span::raw(" | "),
        Span::styled(app.filter.label(), theme.highlighted()),
        Span::raw(" | "),
    ];

    if let Some(notification) = &app.notification {
        let color = match notification.kind {
            NotifyKind::Success => theme.success,
            NotifyKind::Info => theme.highlight,
            NotifyKind::Error => theme.error,
        };
        spans.push(Span::styled(
            notification.message.clone(),
            theme.bold().fg(color),
        ));
    } else {
        spans.push(Span::styled(help_text, theme.dimmed()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(theme.status_bar());
    frame.render_widget(paragraph, area);
}
