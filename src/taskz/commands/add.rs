use crate::commands::{count_message, CmdMessage, CmdResult};
use crate::model::Task;
use crate::tasks::TaskList;

pub fn run(tasks: &mut TaskList, task: Task) -> CmdResult {
    let rendered = tasks.add(task).to_string();
    CmdResult::default()
        .with_message(CmdMessage::success(format!("Added: {}", rendered)))
        .with_message(count_message(tasks))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use chrono::NaiveDate;

    #[test]
    fn appends_and_reports_the_task() {
        let mut tasks = TaskList::new();
        let result = run(&mut tasks, Task::todo("buy milk"));

        assert_eq!(tasks.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.messages[0].content, "Added: [T][ ] buy milk");
        assert_eq!(result.messages[1].content, "Now tracking 1 task(s).");
    }

    #[test]
    fn keeps_insertion_order() {
        let mut tasks = TaskList::new();
        run(&mut tasks, Task::todo("first"));
        run(
            &mut tasks,
            Task::deadline("second", NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()),
        );

        let descriptions: Vec<&str> = tasks.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descriptions, vec!["first", "second"]);
    }
}
