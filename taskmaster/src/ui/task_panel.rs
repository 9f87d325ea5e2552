//! Task list rendering.

use chrono::{Local, TimeZone};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use taskmaster_core::task::{Priority, Task};

use crate::app::{App, InputMode};

/// Render the task list, or an empty-state panel when no rows match the
/// active filter and search.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let stats = app.store.stats();
    let title = format!(
        "Tasks \u{2014} {} ({}/{} done)",
        app.filter.label(),
        stats.completed,
        stats.total
    );
    let block = Block::default()
        .title(Span::styled(title, theme.panel_title(theme.tasks_title)))
        .borders(Borders::ALL)
        .border_style(theme.normal());

    let rows = app.visible_tasks();
    if rows.is_empty() {
        let message = if app.store.is_empty() {
            "No tasks yet \u{2014} press 'a' to add one"
        } else {
            "No tasks match the current filter or search"
        };
        let empty = Paragraph::new(Line::from(Span::styled(message, theme.dimmed())))
            .block(block)
            .centered();
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let selected = app.mode == InputMode::Normal && idx == app.selected;
            ListItem::new(task_line(app, task, selected))
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

/// Builds the display line for one task row.
fn task_line<'a>(app: &App, task: &'a Task, selected: bool) -> Line<'a> {
    let theme = &app.theme;
    let checkbox = if task.completed { "[\u{2713}]" } else { "[ ]" };
    let text_style = if selected {
        theme.selected()
    } else if task.completed {
        theme.completed()
    } else {
        theme.normal()
    };

    Line::from(vec![
        Span::styled(checkbox, if selected { theme.selected() } else { theme.normal() }),
        Span::raw(" "),
        Span::styled(
            priority_badge(task.priority),
            theme.normal().fg(theme.priority_color(task.priority)),
        ),
        Span::raw(" "),
        Span::styled(task.text.as_str(), text_style),
        Span::raw("  "),
        Span::styled(
            format_created_at(task.created_at, &app.timestamp_format),
            theme.dimmed(),
        ),
    ])
}

/// Short fixed-width badge for a priority level.
const fn priority_badge(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "[low]",
        Priority::Medium => "[med]",
        Priority::High => "[high]",
    }
}

/// Format an epoch-millisecond creation timestamp with the configured
/// chrono format string.
fn format_created_at(ms: u64, format: &str) -> String {
    let secs = (ms / 1000).cast_signed();
    let nsecs = u32::try_from((ms % 1000) * 1_000_000).unwrap_or(0);
    match Local.timestamp_opt(secs, nsecs) {
        chrono::LocalResult::Single(dt) => dt.format(format).to_string(),
        _ => "????-??-??".to_string(),
    }
}
