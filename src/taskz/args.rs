use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "taskz")]
#[command(version)]
#[command(about = "Interactive task tracker for the command line", long_about = None)]
pub struct Cli {
    /// Task data file to use (overrides the configured location)
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}
