use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::tasks::TaskList;

pub fn run(tasks: &mut TaskList, index: i64) -> Result<CmdResult> {
    let index = tasks.check_index("done", index)?;
    let rendered = tasks.set_done(index, true).to_string();
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Marked as done: {}", rendered))))
}
