use crate::cli::Cli;
use crate::clipboard::SystemClipboard;
use evlabel_core::{LabelConfig, Outcome};
use std::io::Write;
use std::process::ExitCode;

pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let config = LabelConfig::new(&cli.json_path)
        .with_chunk_size(cli.chunk_size)
        .with_auto_copy(!cli.no_auto_copy);

    let mut input = std::io::stdin().lock();
    let mut output = std::io::stdout().lock();
    let mut clipboard = SystemClipboard::new();

    let outcome = evlabel_core::run(&config, &mut input, &mut output, &mut clipboard);
    output.flush()?;

    if let Outcome::Completed {
        classified,
        remaining,
    } = outcome
    {
        tracing::info!("Labeled {classified} events, {remaining} left for a later run");
    }
    Ok(ExitCode::from(outcome.exit_code()))
}
