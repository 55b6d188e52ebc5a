use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

mod error;
mod menu;
mod store;
mod task;
mod ui;

/// Interactive tracker for project tasks.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// JSON file holding the task list.
    #[arg(long, default_value = "tasks.json")]
    file: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut console = ui::Console::new();
    if let Err(err) = menu::run(&mut console, &cli.file) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
