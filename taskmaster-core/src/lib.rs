//! `TaskMaster` core library: task model, store, and JSON codec.
//!
//! This crate holds the data layer with no I/O or UI dependencies so the
//! store can be unit-tested without any harness. Persistence and rendering
//! live in the `taskmaster` application crate.

pub mod codec;
pub mod store;
pub mod task;

pub use store::{StoreError, TaskStats, TaskStore};
pub use task::{Filter, Priority, Task, TaskId};
