use crate::commands::{count_message, CmdMessage, CmdResult};
use crate::error::Result;
use crate::tasks::TaskList;

pub fn run(tasks: &mut TaskList, index: i64) -> Result<CmdResult> {
    let index = tasks.check_index("delete", index)?;
    let removed = tasks.remove(index);
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Removed: {}", removed)))
        .with_message(count_message(tasks)))
}
