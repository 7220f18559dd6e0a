use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use taskz::commands::{CmdMessage, MessageLevel};
use taskz::config::TaskzConfig;
use taskz::error::Result;
use taskz::session::{Followup, Session};
use taskz::store::fs::FileStore;
use taskz::store::SkippedLine;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let data_path = resolve_data_path(&cli)?;

    let store = FileStore::new(data_path);
    let (mut session, skipped) = Session::start(store)?;
    report_skipped(&skipped);

    print_message(&Session::<FileStore>::greeting());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        let reply = session.handle_line(&line);
        print_messages(&reply.result.messages);
        match reply.followup {
            Followup::Continue => {}
            Followup::ClearScreen => clear_screen(&mut stdout)?,
            Followup::Exit => return Ok(()),
        }
    }

    // Input stream closed without `bye`; the last command already saved.
    Ok(())
}

fn resolve_data_path(cli: &Cli) -> Result<PathBuf> {
    if let Some(file) = &cli.file {
        return Ok(file.clone());
    }

    let app_dir = app_dir();
    let config = TaskzConfig::load(&app_dir).unwrap_or_default();
    Ok(config.data_path(&app_dir))
}

fn app_dir() -> PathBuf {
    let proj_dirs =
        ProjectDirs::from("com", "taskz", "taskz").expect("Could not determine data dir");
    proj_dirs.data_dir().to_path_buf()
}

fn report_skipped(skipped: &[SkippedLine]) {
    for line in skipped {
        print_message(&CmdMessage::warning(format!(
            "Skipping line {} of the task file: {}",
            line.number, line.reason
        )));
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        print_message(message);
    }
}

fn print_message(message: &CmdMessage) {
    match message.level {
        MessageLevel::Info => println!("{}", message.content),
        MessageLevel::Success => println!("{}", message.content.green()),
        MessageLevel::Warning => println!("{}", message.content.yellow()),
        MessageLevel::Error => println!("{}", message.content.red()),
    }
}

// Blank-line clear: pushes old output out of view and works on terminals
// without an escape-code clear.
fn clear_screen(out: &mut impl Write) -> io::Result<()> {
    for _ in 0..24 {
        writeln!(out)?;
    }
    out.flush()
}
