//! Turns one raw input line into a typed [`Command`].
//!
//! Parsing is pure and stateless: the only thing it cannot check is whether
//! a task index actually exists, which depends on the current list and is
//! validated by [`crate::tasks::TaskList::check_index`] before dispatch.

use crate::error::{Result, TaskzError};
use crate::model::DATE_FORMAT;
use chrono::NaiveDate;

/// Literal marker separating a deadline description from its date.
pub const DEADLINE_MARKER: &str = " /by ";
/// Literal marker separating an event description from its date.
pub const EVENT_MARKER: &str = " /at ";

/// One fully parsed input line. Indices are carried raw (`i64`) because any
/// integer is a well-formed argument; whether it is in range is a property
/// of the current task list, not of the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Todo { description: String },
    Deadline { description: String, due: NaiveDate },
    Event { description: String, at: NaiveDate },
    List,
    Done { index: i64 },
    Delete { index: i64 },
    Find { query: String },
    Clear,
    Hello,
    Bye,
}

impl Command {
    /// Parses a line into a command. Checks run in a fixed order so every
    /// bad input produces exactly one error: unknown command first, then a
    /// missing argument, then the argument's shape (number, marker, date).
    pub fn parse(line: &str) -> Result<Self> {
        let token = command_token(line);
        let details = details(line);

        let lowered = token.to_ascii_lowercase();
        let name: &'static str = match lowered.as_str() {
            "todo" => "todo",
            "event" => "event",
            "deadline" => "deadline",
            "list" => "list",
            "done" => "done",
            "bye" => "bye",
            "delete" => "delete",
            "clear" => "clear",
            "hello" => "hello",
            "find" => "find",
            _ => return Err(TaskzError::UnknownCommand(token.to_string())),
        };

        let takes_no_details = matches!(name, "list" | "bye" | "clear" | "hello");
        if !takes_no_details && details.is_empty() {
            return Err(TaskzError::MissingArgument(name));
        }

        Ok(match name {
            "todo" => Command::Todo {
                description: details.to_string(),
            },
            "deadline" => {
                let (description, date) = split_on_marker(name, details, DEADLINE_MARKER)?;
                Command::Deadline {
                    description: description.to_string(),
                    due: parse_date(date)?,
                }
            }
            "event" => {
                let (description, date) = split_on_marker(name, details, EVENT_MARKER)?;
                Command::Event {
                    description: description.to_string(),
                    at: parse_date(date)?,
                }
            }
            "done" => Command::Done {
                index: parse_index(details)?,
            },
            "delete" => Command::Delete {
                index: parse_index(details)?,
            },
            "find" => Command::Find {
                query: details.to_string(),
            },
            "list" => Command::List,
            "clear" => Command::Clear,
            "hello" => Command::Hello,
            "bye" => Command::Bye,
            _ => unreachable!("token already matched against the command set"),
        })
    }
}

/// First whitespace-delimited word of the line. Empty for a blank line.
pub fn command_token(line: &str) -> &str {
    line.split_whitespace().next().unwrap_or("")
}

/// Everything after the command token, trimmed. Empty if absent.
pub fn details(line: &str) -> &str {
    let trimmed = line.trim_start();
    match trimmed.find(char::is_whitespace) {
        Some(pos) => trimmed[pos..].trim(),
        None => "",
    }
}

/// Splits a details string on a literal marker such as ` /by `. A missing
/// marker or an empty description half is a user error, never a panic.
fn split_on_marker<'a>(
    command: &'static str,
    details: &'a str,
    marker: &'static str,
) -> Result<(&'a str, &'a str)> {
    let (left, right) = details
        .split_once(marker)
        .ok_or(TaskzError::MissingSeparator(marker.trim()))?;
    let left = left.trim();
    if left.is_empty() {
        return Err(TaskzError::MissingArgument(command));
    }
    Ok((left, right.trim()))
}

fn parse_index(details: &str) -> Result<i64> {
    details
        .parse::<i64>()
        .map_err(|_| TaskzError::NotANumber(details.to_string()))
}

fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|_| TaskzError::DateParse(text.to_string()))
}
