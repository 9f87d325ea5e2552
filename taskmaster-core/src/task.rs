//! Task model types for `TaskMaster`.
//!
//! Defines the [`Task`] record stored in the task collection, its
//! [`Priority`] level, and the view-level [`Filter`] predicate. All types
//! serialize to JSON for the persistence blob and export files.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a task, based on UUID v7 for time-ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new time-ordered task identifier (UUID v7).
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Creates a `TaskId` from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID value.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Priority level of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Low priority.
    Low,
    /// Medium priority (default for new tasks).
    #[default]
    Medium,
    /// High priority.
    High,
}

impl Priority {
    /// Returns the next priority in the Low → Medium → High → Low cycle.
    ///
    /// Used by the UI to cycle the selected priority with a single key.
    #[must_use]
    pub const fn cycle(self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium => Self::High,
            Self::High => Self::Low,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// A single user-entered to-do item.
///
/// Tasks are owned exclusively by the [`TaskStore`](crate::store::TaskStore);
/// `id` and `created_at` are immutable after creation, every other field is
/// mutated through store operations only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier (UUID v7, time-ordered).
    pub id: TaskId,
    /// Task text. Non-empty; trimmed of surrounding whitespace on write.
    pub text: String,
    /// Priority level.
    pub priority: Priority,
    /// Whether the task is done.
    pub completed: bool,
    /// When this task was created (milliseconds since epoch).
    pub created_at: u64,
    /// When `completed` last transitioned to true; cleared on un-complete.
    pub completed_at: Option<u64>,
    /// When text or priority was last edited.
    pub updated_at: Option<u64>,
    /// Integer rank defining the default display order.
    pub order: usize,
}

/// View-level predicate narrowing which tasks are displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    /// All tasks.
    #[default]
    All,
    /// Only tasks with `completed == false`.
    Pending,
    /// Only tasks with `completed == true`.
    Completed,
}

impl Filter {
    /// Returns whether the given task passes this filter.
    #[must_use]
    pub const fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Pending => !task.completed,
            Self::Completed => task.completed,
        }
    }

    /// Returns the next filter in the All → Pending → Completed → All cycle.
    #[must_use]
    pub const fn cycle(self) -> Self {
        match self {
            Self::All => Self::Pending,
            Self::Pending => Self::Completed,
            Self::Completed => Self::All,
        }
    }

    /// Display label for the status bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}
