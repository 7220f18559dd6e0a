use crate::commands::{CmdMessage, CmdResult};
use crate::tasks::TaskList;

pub fn run(tasks: &TaskList) -> CmdResult {
    let mut result = CmdResult::default();
    if tasks.is_empty() {
        result.add_message(CmdMessage::info("Nothing to do yet."));
        return result;
    }
    for (i, task) in tasks.iter().enumerate() {
        result.add_message(CmdMessage::info(format!("{}. {}", i + 1, task)));
    }
    result
}
