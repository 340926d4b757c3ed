mod commands;
mod menu;
mod prompt;
mod table;

use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use taskdesk_store::{Database, ErrorLog, TaskRepo};
use tracing_subscriber::EnvFilter;

use crate::menu::run_menu;
use crate::prompt::Prompt;

#[derive(Debug, Parser)]
struct Cli {
    #[clap(
        long,
        env = "TASKDESK_DB",
        default_value = "taskdesk.db",
        help = "Path to the task database"
    )]
    db: PathBuf,

    #[clap(
        long,
        env = "TASKDESK_LOG_DIR",
        default_value = "logs",
        help = "Directory for the error log"
    )]
    log_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(error) = run(cli) {
        eprintln!("{} {}", "✖".red().bold(), error);
        process::exit(1);
    }

    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let db = Database::open(&cli.db)?;
    let repo = TaskRepo::new(db, ErrorLog::new(cli.log_dir));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompt = Prompt::new(stdin.lock(), stdout.lock());
    run_menu(&repo, &mut prompt)?;

    Ok(())
}
