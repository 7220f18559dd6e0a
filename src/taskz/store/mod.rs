//! # Storage Layer
//!
//! The [`TaskStore`] trait abstracts where the task list is persisted:
//!
//! - [`fs::FileStore`]: production storage, one task per line in a plain
//!   text file, rewritten wholesale on every save so the file always
//!   mirrors the last committed in-memory state.
//! - [`memory::InMemoryStore`]: in-memory storage for tests. No
//!   filesystem, fast, isolated.
//!
//! Loading is tolerant by design: a line the codec cannot understand is
//! skipped and reported through [`LoadOutcome::skipped`], never allowed to
//! abort the whole load.

use crate::error::Result;
use crate::tasks::TaskList;

pub mod fs;
pub mod memory;

/// A line the loader could not understand, with a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the backing file.
    pub number: usize,
    pub reason: String,
}

/// Result of a load: every task that parsed, plus the lines that did not.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub tasks: TaskList,
    pub skipped: Vec<SkippedLine>,
}

pub trait TaskStore {
    /// Loads the persisted task list. A missing backing file is an empty
    /// list, not an error.
    fn load(&self) -> Result<LoadOutcome>;

    /// Replaces the persisted task list with `tasks`, wholesale.
    fn save(&mut self, tasks: &TaskList) -> Result<()>;
}
