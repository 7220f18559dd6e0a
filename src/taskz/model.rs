use chrono::NaiveDate;
use std::fmt;

/// Dates render the same everywhere: on screen, in the task file.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Deadline { due: NaiveDate },
    Event { at: NaiveDate },
}

/// A single unit of work. The description is never empty: the parser and the
/// storage loader both reject empty descriptions before construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub description: String,
    pub done: bool,
    pub kind: TaskKind,
}

impl Task {
    pub fn todo(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Todo,
        }
    }

    pub fn deadline(description: impl Into<String>, due: NaiveDate) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Deadline { due },
        }
    }

    pub fn event(description: impl Into<String>, at: NaiveDate) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Event { at },
        }
    }

    /// Single-letter kind tag, shared by the display rendering and the
    /// storage line format.
    pub fn tag(&self) -> char {
        match self.kind {
            TaskKind::Todo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self.kind {
            TaskKind::Todo => None,
            TaskKind::Deadline { due } => Some(due),
            TaskKind::Event { at } => Some(at),
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = if self.done { 'X' } else { ' ' };
        write!(f, "[{}][{}] {}", self.tag(), flag, self.description)?;
        match self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { due } => write!(f, " (by: {})", due.format(DATE_FORMAT)),
            TaskKind::Event { at } => write!(f, " (at: {})", at.format(DATE_FORMAT)),
        }
    }
}
