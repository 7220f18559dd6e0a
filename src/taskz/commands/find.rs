use crate::commands::{CmdMessage, CmdResult};
use crate::tasks::TaskList;

pub fn run(tasks: &TaskList, query: &str) -> CmdResult {
    let matches = tasks.find(query);
    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info(format!("No tasks matching '{}'.", query)));
        return result;
    }
    // Matches are renumbered 1..n; the original positions are not shown.
    for (i, task) in matches.iter().enumerate() {
        result.add_message(CmdMessage::info(format!("{}. {}", i + 1, task)));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Task;

    fn sample() -> TaskList {
        TaskList::from_tasks(vec![
            Task::todo("buy milk"),
            Task::todo("call dentist"),
            Task::todo("buy stamps"),
        ])
    }

    #[test]
    fn matches_are_renumbered_but_keep_list_order() {
        let result = run(&sample(), "buy");
        assert_eq!(result.messages.len(), 2);
        assert_eq!(result.messages[0].content, "1. [T][ ] buy milk");
        assert_eq!(result.messages[1].content, "2. [T][ ] buy stamps");
    }

    #[test]
    fn no_match_reports_instead_of_listing_nothing() {
        let result = run(&sample(), "xyz");
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].content, "No tasks matching 'xyz'.");
    }

    #[test]
    fn search_is_case_sensitive() {
        let result = run(&sample(), "BUY");
        assert_eq!(result.messages[0].content, "No tasks matching 'BUY'.");
    }
}
