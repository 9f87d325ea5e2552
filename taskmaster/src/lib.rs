//! `TaskMaster` — terminal-native task list manager library.

pub mod app;
pub mod config;
pub mod storage;
pub mod ui;
