use super::{LoadOutcome, SkippedLine, TaskStore};
use crate::error::Result;
use crate::model::{Task, DATE_FORMAT};
use crate::tasks::TaskList;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// Field delimiter of the on-disk line format. A description containing it
/// will not round-trip; the loader skips such lines instead of guessing.
pub const FIELD_DELIMITER: &str = " | ";

/// File-backed task storage.
///
/// Line format, one task per line:
///
/// ```text
/// T | 1 | buy milk
/// D | 0 | submit report | 2024-01-15
/// E | 0 | team offsite | 2024-03-02
/// ```
///
/// Fields are kind tag, done flag (`1`/`0`), description, and an ISO date
/// for deadlines and events. The whole file is rewritten on every save.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TaskStore for FileStore {
    fn load(&self) -> Result<LoadOutcome> {
        if !self.path.exists() {
            return Ok(LoadOutcome::default());
        }

        let content = fs::read_to_string(&self.path)?;
        let mut outcome = LoadOutcome::default();
        for (i, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match decode_line(line) {
                Ok(task) => {
                    outcome.tasks.add(task);
                }
                Err(reason) => outcome.skipped.push(SkippedLine {
                    number: i + 1,
                    reason,
                }),
            }
        }
        Ok(outcome)
    }

    fn save(&mut self, tasks: &TaskList) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut content = String::new();
        for task in tasks.iter() {
            content.push_str(&encode_line(task));
            content.push('\n');
        }
        fs::write(&self.path, content)?;
        Ok(())
    }
}

fn encode_line(task: &Task) -> String {
    let done = if task.done { '1' } else { '0' };
    let mut line = format!(
        "{}{}{}{}{}",
        task.tag(),
        FIELD_DELIMITER,
        done,
        FIELD_DELIMITER,
        task.description
    );
    if let Some(date) = task.date() {
        line.push_str(FIELD_DELIMITER);
        line.push_str(&date.format(DATE_FORMAT).to_string());
    }
    line
}

fn decode_line(line: &str) -> std::result::Result<Task, String> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if fields.len() < 3 {
        return Err(format!(
            "expected at least 3 '|'-separated fields, found {}",
            fields.len()
        ));
    }

    let done = match fields[1] {
        "0" => false,
        "1" => true,
        other => return Err(format!("bad done flag '{}'", other)),
    };

    let description = fields[2];
    if description.is_empty() {
        return Err("empty description".to_string());
    }

    let mut task = match fields[0] {
        "T" => {
            if fields.len() != 3 {
                return Err(format!("'T' tasks take 3 fields, found {}", fields.len()));
            }
            Task::todo(description)
        }
        "D" | "E" => {
            if fields.len() != 4 {
                return Err(format!("'{}' tasks need a date field", fields[0]));
            }
            let date = decode_date(fields[3])?;
            if fields[0] == "D" {
                Task::deadline(description, date)
            } else {
                Task::event(description, date)
            }
        }
        other => return Err(format!("unknown task tag '{}'", other)),
    };
    task.done = done;
    Ok(task)
}

fn decode_date(text: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| format!("bad date '{}'", text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> TaskList {
        let mut tasks = TaskList::new();
        tasks.add(Task::todo("buy milk"));
        let mut done = Task::deadline("submit report", date(2024, 1, 15));
        done.done = true;
        tasks.add(done);
        tasks.add(Task::event("team offsite", date(2024, 3, 2)));
        tasks
    }

    #[test]
    fn encodes_each_kind() {
        let tasks = sample();
        let lines: Vec<String> = tasks.iter().map(encode_line).collect();
        assert_eq!(lines[0], "T | 0 | buy milk");
        assert_eq!(lines[1], "D | 1 | submit report | 2024-01-15");
        assert_eq!(lines[2], "E | 0 | team offsite | 2024-03-02");
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("tasks.txt"));

        let tasks = sample();
        store.save(&tasks).unwrap();
        let outcome = store.load().unwrap();

        assert!(outcome.skipped.is_empty());
        assert_eq!(outcome.tasks, tasks);

        // A second save of the loaded list reproduces the file byte for byte.
        let first = fs::read_to_string(store.path()).unwrap();
        store.save(&outcome.tasks).unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), first);
    }

    #[test]
    fn missing_file_loads_as_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("does-not-exist.txt"));
        let outcome = store.load().unwrap();
        assert!(outcome.tasks.is_empty());
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn malformed_lines_are_skipped_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.txt");
        fs::write(
            &path,
            "T | 0 | buy milk\n\
             garbage\n\
             X | 0 | unknown tag\n\
             T | 2 | bad flag\n\
             D | 0 | no date here\n\
             D | 0 | bad date | 15-01-2024\n\
             T | 0 | \n\
             E | 1 | good event | 2024-03-02\n",
        )
        .unwrap();

        let outcome = FileStore::new(&path).load().unwrap();
        assert_eq!(outcome.tasks.len(), 2);
        assert_eq!(outcome.tasks.iter().next().unwrap().description, "buy milk");

        let skipped: Vec<usize> = outcome.skipped.iter().map(|s| s.number).collect();
        assert_eq!(skipped, vec![2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn blank_lines_are_ignored_silently() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.txt");
        fs::write(&path, "\nT | 0 | buy milk\n\n").unwrap();

        let outcome = FileStore::new(&path).load().unwrap();
        assert_eq!(outcome.tasks.len(), 1);
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn save_overwrites_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("tasks.txt"));

        store.save(&sample()).unwrap();
        let mut shorter = TaskList::new();
        shorter.add(Task::todo("only one left"));
        store.save(&shorter).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "T | 0 | only one left\n");
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("tasks.txt");
        let mut store = FileStore::new(&path);
        store.save(&sample()).unwrap();
        assert!(path.exists());
    }
}
