//! The in-memory task collection and its operations.
//!
//! [`TaskStore`] is the source of truth for all task data. It performs no
//! I/O: callers persist the collection after each mutating operation. All
//! mutations either apply fully or return an error with the collection
//! unchanged.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::task::{Filter, Priority, Task, TaskId};

/// Errors that can occur during store operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    /// Task text is empty after trimming surrounding whitespace.
    #[error("task text cannot be empty")]
    TextEmpty,
    /// Task with the given ID was not found.
    #[error("task not found: {0}")]
    NotFound(String),
}

/// Aggregate counts for the status display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskStats {
    /// Number of tasks in the collection.
    pub total: usize,
    /// Number of tasks with `completed == true`.
    pub completed: usize,
}

/// Ordered collection of [`Task`] records.
///
/// The store exclusively owns all task records. Display order is defined by
/// each task's `order` rank, which [`reorder`](Self::reorder) renumbers to
/// the contiguous range `0..N`.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Creates a store from an existing collection (loaded or imported).
    ///
    /// Records are taken as-is; no per-record validation is performed.
    #[must_use]
    pub const fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Returns the current timestamp in milliseconds since epoch.
    fn now_ms() -> u64 {
        u64::try_from(
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis(),
        )
        .unwrap_or(u64::MAX)
    }

    /// Adds a new task with the given text and priority.
    ///
    /// The text is trimmed; the new task gets a fresh id, `order` equal to
    /// the current collection length, and `completed == false`. Returns a
    /// clone of the created task.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TextEmpty`] if the text is empty after
    /// trimming; the collection is unchanged.
    pub fn add(&mut self, text: &str, priority: Priority) -> Result<Task, StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::TextEmpty);
        }

        let task = Task {
            id: TaskId::new(),
            text: text.to_string(),
            priority,
            completed: false,
            created_at: Self::now_ms(),
            completed_at: None,
            updated_at: None,
            order: self.tasks.len(),
        };
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Replaces the text and priority of an existing task and stamps
    /// `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TextEmpty`] if the new text is empty after
    /// trimming, or [`StoreError::NotFound`] if the id is unknown. The
    /// collection is unchanged on error.
    pub fn edit(
        &mut self,
        id: &TaskId,
        new_text: &str,
        new_priority: Priority,
    ) -> Result<(), StoreError> {
        let new_text = new_text.trim();
        if new_text.is_empty() {
            return Err(StoreError::TextEmpty);
        }

        let now = Self::now_ms();
        let task = self.get_mut(id)?;
        task.text = new_text.to_string();
        task.priority = new_priority;
        task.updated_at = Some(now);
        Ok(())
    }

    /// Removes a task from the collection. No tombstone is kept.
    ///
    /// Returns the removed task so callers can display what was deleted.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the id is unknown.
    pub fn remove(&mut self, id: &TaskId) -> Result<Task, StoreError> {
        let idx = self
            .index_of(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        Ok(self.tasks.remove(idx))
    }

    /// Flips the completion state of a task.
    ///
    /// `completed_at` is set when the task transitions to done and cleared
    /// when it transitions back to pending. Returns the new state.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the id is unknown.
    pub fn toggle(&mut self, id: &TaskId) -> Result<bool, StoreError> {
        let now = Self::now_ms();
        let task = self.get_mut(id)?;
        task.completed = !task.completed;
        task.completed_at = task.completed.then_some(now);
        Ok(task.completed)
    }

    /// Moves the dragged task immediately before the target task's
    /// pre-removal position, then renumbers all `order` ranks to `0..N`.
    ///
    /// A reorder onto itself is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if either id is unknown; the
    /// collection is unchanged.
    pub fn reorder(&mut self, dragged_id: &TaskId, target_id: &TaskId) -> Result<(), StoreError> {
        if dragged_id == target_id {
            return Ok(());
        }
        let dragged_idx = self
            .index_of(dragged_id)
            .ok_or_else(|| StoreError::NotFound(dragged_id.to_string()))?;
        let target_idx = self
            .index_of(target_id)
            .ok_or_else(|| StoreError::NotFound(target_id.to_string()))?;

        let dragged = self.tasks.remove(dragged_idx);
        // Removing an earlier element shifts the target left by one.
        let insert_idx = if dragged_idx < target_idx {
            target_idx - 1
        } else {
            target_idx
        };
        self.tasks.insert(insert_idx, dragged);

        for (idx, task) in self.tasks.iter_mut().enumerate() {
            task.order = idx;
        }
        Ok(())
    }

    /// Returns the tasks passing `filter` whose text contains `search`
    /// case-insensitively, sorted ascending by `order`.
    ///
    /// The search term is trimmed; an empty term matches everything. Does
    /// not mutate the collection.
    #[must_use]
    pub fn list(&self, filter: Filter, search: &str) -> Vec<&Task> {
        let needle = search.trim().to_lowercase();
        let mut rows: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|t| filter.matches(t))
            .filter(|t| needle.is_empty() || t.text.to_lowercase().contains(&needle))
            .collect();
        rows.sort_by_key(|t| t.order);
        rows
    }

    /// Returns total and completed counts.
    #[must_use]
    pub fn stats(&self) -> TaskStats {
        TaskStats {
            total: self.tasks.len(),
            completed: self.tasks.iter().filter(|t| t.completed).count(),
        }
    }

    /// Replaces the whole collection with empty.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Wholesale-replaces the collection (import semantics: no merge, no
    /// per-record validation).
    pub fn replace(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Returns the underlying collection in storage order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns a mutable reference to a task, or `NotFound`.
    fn get_mut(&mut self, id: &TaskId) -> Result<&mut Task, StoreError> {
        self.tasks
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Returns the positional index of a task in the collection.
    fn index_of(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == id)
    }
}
