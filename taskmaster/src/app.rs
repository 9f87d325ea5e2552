//! Application state and command dispatch.
//!
//! Every user action maps to a [`TaskStore`] method call followed by an
//! explicit persist; the UI is redrawn from this state on the next frame.
//! The store is constructed in `main` and owned here — no ambient
//! singleton.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use taskmaster_core::store::{StoreError, TaskStore};
use taskmaster_core::task::{Filter, Priority, Task, TaskId};

use crate::config::AppConfig;
use crate::storage::{self, Storage};
use crate::ui::theme::{Theme, ThemeKind};

/// Which input mode the app is in. Modes replace the modal dialogs of a
/// typical GUI task manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// List navigation and single-key commands (default).
    Normal,
    /// Typing the text of a new task.
    Insert,
    /// Editing the text/priority of an existing task.
    Edit,
    /// Typing an incremental search term.
    Search,
    /// Awaiting confirmation to delete the selected task.
    ConfirmDelete,
    /// Awaiting confirmation to clear the whole collection.
    ConfirmClear,
}

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyKind {
    /// An operation succeeded.
    Success,
    /// Neutral information.
    Info,
    /// An operation failed.
    Error,
}

/// A transient status-bar notification.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Message shown to the user.
    pub message: String,
    /// Severity, controls the display color.
    pub kind: NotifyKind,
    raised_at: Instant,
}

/// Main application state.
pub struct App {
    /// The task collection (source of truth).
    pub store: TaskStore,
    storage: Storage,
    /// Current input mode.
    pub mode: InputMode,
    /// Active display filter.
    pub filter: Filter,
    /// Active search term (live while typing in search mode).
    pub search: String,
    /// Text being typed in insert/edit/search mode.
    pub input: String,
    /// Cursor position in `input` (character index).
    pub cursor_position: usize,
    /// Selected row index into the visible task list.
    pub selected: usize,
    /// Priority applied to the next added task.
    pub selected_priority: Priority,
    /// Priority applied when the current edit is submitted.
    pub edit_priority: Priority,
    edit_id: Option<TaskId>,
    pending_delete: Option<TaskId>,
    /// Active palette.
    pub theme: Theme,
    /// Which palette is active (persisted).
    pub theme_kind: ThemeKind,
    /// Active transient notification, if any.
    pub notification: Option<Notification>,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Creation-date display format (chrono).
    pub timestamp_format: String,
    notification_timeout: Duration,
    export_path: PathBuf,
}

impl App {
    /// Creates the application from a loaded store and opened storage.
    #[must_use]
    pub fn new(
        store: TaskStore,
        storage: Storage,
        config: &AppConfig,
        theme_kind: ThemeKind,
    ) -> Self {
        let export_path = config
            .export_path
            .clone()
            .unwrap_or_else(|| storage.default_export_path());
        Self {
            store,
            storage,
            mode: InputMode::Normal,
            filter: Filter::All,
            search: String::new(),
            input: String::new(),
            cursor_position: 0,
            selected: 0,
            selected_priority: Priority::default(),
            edit_priority: Priority::default(),
            edit_id: None,
            pending_delete: None,
            theme: Theme::for_kind(theme_kind),
            theme_kind,
            notification: None,
            should_quit: false,
            timestamp_format: config.timestamp_format.clone(),
            notification_timeout: config.notification_timeout,
            export_path,
        }
    }

    /// The rows currently displayed: filter + search applied, sorted by
    /// order rank.
    #[must_use]
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.store.list(self.filter, &self.search)
    }

    /// The task under the selection cursor, if any.
    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        self.visible_tasks().get(self.selected).copied()
    }

    /// The task awaiting delete confirmation (for the modal preview).
    #[must_use]
    pub fn pending_delete_task(&self) -> Option<&Task> {
        self.pending_delete.as_ref().and_then(|id| self.store.get(id))
    }

    /// Expires the active notification once its display window has passed.
    /// Called once per frame.
    pub fn tick_notification(&mut self) {
        if let Some(n) = &self.notification
            && n.raised_at.elapsed() >= self.notification_timeout
        {
            self.notification = None;
        }
    }

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
            self.should_quit = true;
            return;
        }

        match self.mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::Insert => self.handle_insert_key(key),
            InputMode::Edit => self.handle_edit_key(key),
            InputMode::Search => self.handle_search_key(key),
            InputMode::ConfirmDelete => self.handle_confirm_key(key, Self::confirm_delete),
            InputMode::ConfirmClear => self.handle_confirm_key(key, Self::confirm_clear),
        }
    }

    // -----------------------------------------------------------------------
    // Per-mode key handling
    // -----------------------------------------------------------------------

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('a') => self.begin_insert(),
            KeyCode::Char('e') => self.begin_edit(),
            KeyCode::Char('d') => self.begin_delete(),
            KeyCode::Char('C') => self.begin_clear(),
            KeyCode::Char('/') => self.begin_search(),
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_selected(),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Char('K') => self.move_task_up(),
            KeyCode::Char('J') => self.move_task_down(),
            KeyCode::Char('f') => self.set_filter(self.filter.cycle()),
            KeyCode::Char('1') => self.set_filter(Filter::All),
            KeyCode::Char('2') => self.set_filter(Filter::Pending),
            KeyCode::Char('3') => self.set_filter(Filter::Completed),
            KeyCode::Char('p') => self.selected_priority = self.selected_priority.cycle(),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('x') => self.export_tasks(),
            _ => {}
        }
    }

    fn handle_insert_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_add(),
            KeyCode::Esc => {
                self.reset_input();
                self.mode = InputMode::Normal;
            }
            KeyCode::Tab => self.selected_priority = self.selected_priority.cycle(),
            _ => self.handle_text_key(key),
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_edit(),
            KeyCode::Esc => {
                self.edit_id = None;
                self.reset_input();
                self.mode = InputMode::Normal;
            }
            KeyCode::Tab => self.edit_priority = self.edit_priority.cycle(),
            _ => self.handle_text_key(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            // Enter keeps the term active and returns to the list.
            KeyCode::Enter => self.mode = InputMode::Normal,
            KeyCode::Esc => {
                self.reset_input();
                self.search.clear();
                self.mode = InputMode::Normal;
                self.clamp_selection();
            }
            _ => {
                self.handle_text_key(key);
                self.search = self.input.clone();
                self.clamp_selection();
            }
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent, apply: fn(&mut Self)) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => apply(self),
            KeyCode::Char('n') | KeyCode::Esc => {
                self.pending_delete = None;
                self.mode = InputMode::Normal;
            }
            _ => {}
        }
    }

    /// Shared text editing for insert/edit/search modes.
    fn handle_text_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => self.enter_char(c),
            KeyCode::Backspace => self.delete_char(),
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Home => self.cursor_position = 0,
            KeyCode::End => self.cursor_position = self.input.chars().count(),
            _ => {}
        }
    }

    // -----------------------------------------------------------------------
    // Mode transitions
    // -----------------------------------------------------------------------

    fn begin_insert(&mut self) {
        self.reset_input();
        self.mode = InputMode::Insert;
    }

    fn begin_edit(&mut self) {
        let Some((id, priority, text)) = self
            .selected_task()
            .map(|t| (t.id.clone(), t.priority, t.text.clone()))
        else {
            return;
        };
        self.edit_id = Some(id);
        self.edit_priority = priority;
        self.input = text;
        self.cursor_position = self.input.chars().count();
        self.mode = InputMode::Edit;
    }

    fn begin_delete(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        self.pending_delete = Some(id);
        self.mode = InputMode::ConfirmDelete;
    }

    fn begin_clear(&mut self) {
        if !self.store.is_empty() {
            self.mode = InputMode::ConfirmClear;
        }
    }

    fn begin_search(&mut self) {
        self.input = self.search.clone();
        self.cursor_position = self.input.chars().count();
        self.mode = InputMode::Search;
    }

    // -----------------------------------------------------------------------
    // Commands (store mutation + persist)
    // -----------------------------------------------------------------------

    fn submit_add(&mut self) {
        // Validation failure (empty text after trim) is a silent no-op;
        // the user stays in insert mode.
        if let Ok(task) = self.store.add(&self.input, self.selected_priority) {
            tracing::debug!(id = %task.id, "task added");
            self.reset_input();
            self.selected_priority = Priority::default();
            self.mode = InputMode::Normal;
            self.select_id(&task.id);
            self.notify(NotifyKind::Success, "Task added");
            // Persist last so a save failure replaces the success message.
            self.persist();
        }
    }

    fn submit_edit(&mut self) {
        let Some(id) = self.edit_id.clone() else {
            self.mode = InputMode::Normal;
            return;
        };
        match self.store.edit(&id, &self.input, self.edit_priority) {
            Ok(()) => {
                self.edit_id = None;
                self.reset_input();
                self.mode = InputMode::Normal;
                self.notify(NotifyKind::Success, "Task updated");
                self.persist();
            }
            // Empty text is silently ignored; the user stays in edit mode.
            Err(StoreError::TextEmpty) => {}
            Err(StoreError::NotFound(_)) => {
                self.edit_id = None;
                self.reset_input();
                self.mode = InputMode::Normal;
            }
        }
    }

    fn toggle_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        if let Ok(done) = self.store.toggle(&id) {
            tracing::debug!(id = %id, done, "task toggled");
            self.persist();
        }
        self.clamp_selection();
    }

    fn confirm_delete(&mut self) {
        if let Some(id) = self.pending_delete.take()
            && self.store.remove(&id).is_ok()
        {
            tracing::debug!(id = %id, "task deleted");
            self.notify(NotifyKind::Info, "Task deleted");
            self.persist();
        }
        self.mode = InputMode::Normal;
        self.clamp_selection();
    }

    fn confirm_clear(&mut self) {
        self.store.clear();
        self.selected = 0;
        self.mode = InputMode::Normal;
        self.notify(NotifyKind::Info, "All tasks cleared");
        self.persist();
    }

    fn move_task_up(&mut self) {
        if self.selected == 0 {
            return;
        }
        let rows = self.visible_ids();
        let (Some(sel), Some(prev)) = (rows.get(self.selected), rows.get(self.selected - 1)) else {
            return;
        };
        if self.store.reorder(sel, prev).is_ok() {
            self.persist();
            self.selected -= 1;
        }
    }

    fn move_task_down(&mut self) {
        let rows = self.visible_ids();
        let (Some(sel), Some(next)) = (rows.get(self.selected), rows.get(self.selected + 1)) else {
            return;
        };
        // Moving the next row before the selected one pushes the selection
        // down by one.
        if self.store.reorder(next, sel).is_ok() {
            self.persist();
            self.selected += 1;
        }
    }

    fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.clamp_selection();
    }

    /// Flips the palette and persists the preference.
    pub fn toggle_theme(&mut self) {
        self.theme_kind = self.theme_kind.toggled();
        self.theme = Theme::for_kind(self.theme_kind);
        if let Err(e) = self.storage.save_theme(self.theme_kind) {
            tracing::error!("theme save failed: {e}");
            self.notify(NotifyKind::Error, "Could not save theme preference");
        }
    }

    fn export_tasks(&mut self) {
        let path = self.export_path.clone();
        match storage::export_to(&path, self.store.tasks()) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "tasks exported");
                self.notify(
                    NotifyKind::Success,
                    format!("Exported to {}", path.display()),
                );
            }
            Err(e) => {
                tracing::error!("export failed: {e}");
                self.notify(NotifyKind::Error, "Export failed");
            }
        }
    }

    /// Imports a task collection from a JSON file, replacing the current
    /// collection wholesale on success. A parse or read failure leaves the
    /// existing tasks untouched and raises an error notification.
    pub fn import_from(&mut self, path: &Path) {
        match storage::import_from(path) {
            Ok(tasks) => {
                let count = tasks.len();
                self.store.replace(tasks);
                self.selected = 0;
                tracing::info!(count, "tasks imported");
                self.notify(NotifyKind::Success, format!("Imported {count} tasks"));
                self.persist();
            }
            Err(e) => {
                tracing::warn!("import failed: {e}");
                self.notify(NotifyKind::Error, format!("Import failed: {e}"));
            }
        }
    }

    // -----------------------------------------------------------------------
    // Selection and input helpers
    // -----------------------------------------------------------------------

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn select_next(&mut self) {
        let len = self.visible_tasks().len();
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    fn selected_id(&self) -> Option<TaskId> {
        self.selected_task().map(|t| t.id.clone())
    }

    fn visible_ids(&self) -> Vec<TaskId> {
        self.visible_tasks().iter().map(|t| t.id.clone()).collect()
    }

    /// Moves the selection to the given task if it is currently visible.
    fn select_id(&mut self, id: &TaskId) {
        if let Some(idx) = self.visible_tasks().iter().position(|t| &t.id == id) {
            self.selected = idx;
        } else {
            self.clamp_selection();
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_tasks().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    fn persist(&mut self) {
        // A save failure keeps the in-memory collection; the operation that
        // triggered it is not rolled back.
        if let Err(e) = self.storage.save_tasks(self.store.tasks()) {
            tracing::error!("save failed: {e}");
            self.notify(NotifyKind::Error, "Could not save tasks");
        }
    }

    fn notify(&mut self, kind: NotifyKind, message: impl Into<String>) {
        self.notification = Some(Notification {
            message: message.into(),
            kind,
            raised_at: Instant::now(),
        });
    }

    fn reset_input(&mut self) {
        self.input.clear();
        self.cursor_position = 0;
    }

    fn byte_index(&self) -> usize {
        self.input
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor_position)
            .unwrap_or(self.input.len())
    }

    fn enter_char(&mut self, c: char) {
        let idx = self.byte_index();
        self.input.insert(idx, c);
        self.cursor_position += 1;
    }

    fn delete_char(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        let before = self.input.chars().take(self.cursor_position - 1);
        let after = self.input.chars().skip(self.cursor_position);
        self.input = before.chain(after).collect();
        self.cursor_position -= 1;
    }

    const fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }
}
