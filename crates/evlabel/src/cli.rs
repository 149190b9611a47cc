use clap::Parser;
use evlabel_core::DEFAULT_CHUNK_SIZE;
use std::path::PathBuf;

pub const DEFAULT_LOG_FILE: &str = "event_classification.log";

#[derive(Parser, Debug)]
#[command(name = "evlabel")]
#[command(version)]
#[command(about = "Label news events as policy, leader, or emergency events")]
pub struct Cli {
    /// Path to the JSON file to process
    pub json_path: PathBuf,

    /// Number of events shown per batch
    #[arg(
        short = 'c',
        long = "chunk_size",
        visible_alias = "chunk-size",
        default_value_t = DEFAULT_CHUNK_SIZE,
        value_parser = parse_chunk_size
    )]
    pub chunk_size: usize,

    /// Disable auto-copy of each batch prompt to the clipboard
    #[arg(long = "no-auto-copy")]
    pub no_auto_copy: bool,

    /// File that receives a copy of the log output
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,
}

fn parse_chunk_size(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("chunk size must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(err) => Err(err.to_string()),
    }
}
