mod cli;
mod clipboard;
mod commands;
mod logging;

use clap::Parser;
use cli::Cli;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Held for the whole run so buffered file log lines are flushed on exit
    let _log_guard = logging::init(&cli.log_file)?;

    commands::label::run(&cli)
}
