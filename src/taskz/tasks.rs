use crate::error::{Result, TaskzError};
use crate::model::Task;

/// Ordered, mutable container of tasks. Insertion order is the visible and
/// persisted order, and command indices are 1-based positions into it.
///
/// [`TaskList::check_index`] is the single user-facing range check. The
/// mutating operations trust a checked index; handing them an unchecked one
/// is a bug in the caller, and they panic rather than mask it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Validates a raw 1-based index against the current length. Any integer
    /// outside `[1, len]` is out of range, including zero and negatives.
    pub fn check_index(&self, command: &'static str, raw: i64) -> Result<usize> {
        if raw >= 1 && raw as usize <= self.tasks.len() {
            Ok(raw as usize)
        } else {
            Err(TaskzError::IndexOutOfRange {
                command,
                index: raw,
                len: self.tasks.len(),
            })
        }
    }

    /// Appends a task and returns a reference to it for reporting.
    pub fn add(&mut self, task: Task) -> &Task {
        self.tasks.push(task);
        &self.tasks[self.tasks.len() - 1]
    }

    /// Removes and returns the task at the 1-based `index`. Later tasks
    /// shift down one position: an index is a position, not an identity.
    pub fn remove(&mut self, index: usize) -> Task {
        self.tasks.remove(index - 1)
    }

    /// Sets the done flag of the task at the 1-based `index`. Idempotent.
    pub fn set_done(&mut self, index: usize, done: bool) -> &Task {
        self.tasks[index - 1].done = done;
        &self.tasks[index - 1]
    }

    /// Case-sensitive substring match over descriptions, in list order.
    /// An empty query matches every task. Does not mutate.
    pub fn find(&self, query: &str) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.description.contains(query))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> TaskList {
        TaskList::from_tasks(vec![
            Task::todo("buy milk"),
            Task::deadline(
                "submit report",
                NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            ),
            Task::todo("call the plumber"),
        ])
    }

    #[test]
    fn add_appends_at_the_end() {
        let mut tasks = TaskList::new();
        tasks.add(Task::todo("first"));
        let added = tasks.add(Task::todo("second"));
        assert_eq!(added.description, "second");
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks.iter().last().unwrap().description, "second");
    }

    #[test]
    fn check_index_accepts_full_valid_range() {
        let tasks = sample();
        assert_eq!(tasks.check_index("done", 1).unwrap(), 1);
        assert_eq!(tasks.check_index("done", 3).unwrap(), 3);
    }

    #[test]
    fn check_index_rejects_zero_negative_and_past_the_end() {
        let tasks = sample();
        for raw in [0, -1, 4, 99] {
            assert!(matches!(
                tasks.check_index("delete", raw),
                Err(TaskzError::IndexOutOfRange {
                    command: "delete",
                    ..
                })
            ));
        }
    }

    #[test]
    fn check_index_rejects_everything_on_an_empty_list() {
        let tasks = TaskList::new();
        assert!(tasks.check_index("done", 1).is_err());
    }

    #[test]
    fn remove_shifts_later_tasks_down() {
        let mut tasks = sample();
        let removed = tasks.remove(2);
        assert_eq!(removed.description, "submit report");
        assert_eq!(tasks.len(), 2);
        // The old index 3 is now index 2; no gap, no stale position.
        assert_eq!(tasks.set_done(2, true).description, "call the plumber");
    }

    #[test]
    fn set_done_is_idempotent() {
        let mut tasks = sample();
        tasks.set_done(1, true);
        let once = tasks.clone();
        tasks.set_done(1, true);
        assert_eq!(tasks, once);
        assert!(tasks.iter().next().unwrap().done);
    }

    #[test]
    fn set_done_can_unmark() {
        let mut tasks = sample();
        tasks.set_done(1, true);
        assert!(!tasks.set_done(1, false).done);
    }

    #[test]
    fn find_is_case_sensitive_and_order_preserving() {
        let tasks = sample();
        let matches = tasks.find("the");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].description, "call the plumber");
        assert!(tasks.find("PLUMBER").is_empty());
    }

    #[test]
    fn find_with_empty_query_returns_the_whole_list() {
        let tasks = sample();
        let matches = tasks.find("");
        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0].description, "buy milk");
        assert_eq!(matches[2].description, "call the plumber");
    }

    #[test]
    fn find_without_matches_returns_empty() {
        assert!(sample().find("nothing like this").is_empty());
    }
}
