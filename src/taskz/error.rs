use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskzError {
    #[error("Unknown command '{0}'. Known commands: todo, deadline, event, list, done, delete, find, clear, hello, bye")]
    UnknownCommand(String),

    #[error("The '{0}' command needs an argument")]
    MissingArgument(&'static str),

    #[error("No task at position {index} for '{command}': the list has {len} task(s)")]
    IndexOutOfRange {
        command: &'static str,
        index: i64,
        len: usize,
    },

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("Expected a '{0}' marker between the description and the date")]
    MissingSeparator(&'static str),

    #[error("Dates must look like YYYY-MM-DD, got '{0}'")]
    DateParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TaskzError>;
