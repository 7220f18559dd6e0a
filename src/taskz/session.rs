//! The per-line engine behind the interactive loop.
//!
//! [`Session`] owns the task list and the storage backend for one run of
//! the program. Each input line goes through parse → validate → dispatch,
//! and the current list is saved afterwards whether or not the command
//! succeeded, so the file on disk always mirrors the last committed
//! in-memory state. The session never touches stdin or stdout; the CLI
//! layer feeds it lines and renders its replies.

use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Task;
use crate::parse::Command;
use crate::store::{SkippedLine, TaskStore};
use crate::tasks::TaskList;

/// What the CLI should do after rendering a reply's messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Followup {
    Continue,
    ClearScreen,
    Exit,
}

#[derive(Debug)]
pub struct Reply {
    pub result: CmdResult,
    pub followup: Followup,
}

pub struct Session<S: TaskStore> {
    tasks: TaskList,
    store: S,
}

impl<S: TaskStore> Session<S> {
    /// Loads the persisted list and reports any lines the loader skipped.
    /// A load failure here is fatal: starting with an empty list over an
    /// unreadable file would overwrite it on the first command.
    pub fn start(store: S) -> Result<(Self, Vec<SkippedLine>)> {
        let outcome = store.load()?;
        Ok((
            Self {
                tasks: outcome.tasks,
                store,
            },
            outcome.skipped,
        ))
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Greeting shown at startup and for the `hello` command.
    pub fn greeting() -> CmdMessage {
        CmdMessage::info("Hello! What can I do for you today?")
    }

    /// Runs one input line through the pipeline, then saves the current
    /// list regardless of the outcome. A failed save is reported as a
    /// warning and the session keeps going with its in-memory state.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let (mut result, followup) = self.dispatch(line);
        if let Err(e) = self.store.save(&self.tasks) {
            result.add_message(CmdMessage::warning(format!(
                "Could not save the task file: {}. Changes from this session exist only in memory.",
                e
            )));
        }
        Reply { result, followup }
    }

    fn dispatch(&mut self, line: &str) -> (CmdResult, Followup) {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(e) => return (error_reply(e.to_string()), Followup::Continue),
        };

        let outcome = match command {
            Command::Todo { description } => {
                Ok(commands::add::run(&mut self.tasks, Task::todo(description)))
            }
            Command::Deadline { description, due } => Ok(commands::add::run(
                &mut self.tasks,
                Task::deadline(description, due),
            )),
            Command::Event { description, at } => Ok(commands::add::run(
                &mut self.tasks,
                Task::event(description, at),
            )),
            Command::List => Ok(commands::list::run(&self.tasks)),
            Command::Done { index } => commands::done::run(&mut self.tasks, index),
            Command::Delete { index } => commands::delete::run(&mut self.tasks, index),
            Command::Find { query } => Ok(commands::find::run(&self.tasks, &query)),
            Command::Clear => return (CmdResult::default(), Followup::ClearScreen),
            Command::Hello => {
                return (
                    CmdResult::default().with_message(Self::greeting()),
                    Followup::Continue,
                )
            }
            Command::Bye => {
                return (
                    CmdResult::default()
                        .with_message(CmdMessage::info("Bye. Hope to see you again soon!")),
                    Followup::Exit,
                )
            }
        };

        match outcome {
            Ok(result) => (result, Followup::Continue),
            Err(e) => (error_reply(e.to_string()), Followup::Continue),
        }
    }
}

fn error_reply(message: String) -> CmdResult {
    CmdResult::default().with_message(CmdMessage::error(message))
}
