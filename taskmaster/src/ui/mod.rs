//! Terminal UI rendering.
//!
//! Pure functions of the application state; nothing here mutates the task
//! collection.

pub mod input_panel;
pub mod modal;
pub mod status_bar;
pub mod task_panel;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::app::{App, InputMode};

/// Main draw function for the entire UI.
pub fn draw(frame: &mut Frame, app: &App) {
    // Input box on top, task list in the middle, status bar at the bottom.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    input_panel::render(frame, chunks[0], app);
    task_panel::render(frame, chunks[1], app);
    status_bar::render(frame, chunks[2], app);

    match app.mode {
        InputMode::Edit => modal::render_edit(frame, app),
        InputMode::ConfirmDelete => modal::render_confirm_delete(frame, app),
        InputMode::ConfirmClear => modal::render_confirm_clear(frame, app),
        _ => {}
    }
}

/// A centered rectangle of the given percentage size, for modal overlays.
#[must_use]
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
