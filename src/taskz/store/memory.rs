use super::{LoadOutcome, TaskStore};
use crate::error::Result;
use crate::tasks::TaskList;

/// In-memory storage for testing. Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    saved: TaskList,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(tasks: TaskList) -> Self {
        Self { saved: tasks }
    }

    /// Snapshot of the last saved list.
    pub fn saved(&self) -> &TaskList {
        &self.saved
    }
}

impl TaskStore for InMemoryStore {
    fn load(&self) -> Result<LoadOutcome> {
        Ok(LoadOutcome {
            tasks: self.saved.clone(),
            skipped: Vec::new(),
        })
    }

    fn save(&mut self, tasks: &TaskList) -> Result<()> {
        self.saved = tasks.clone();
        Ok(())
    }
}
