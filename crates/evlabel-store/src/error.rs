use std::path::PathBuf;

/// Errors raised while reading or writing a collection file.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The file could not be opened or read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file is not valid JSON.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The file is valid JSON but its top level is not an array.
    #[error("{path} does not contain a JSON array")]
    NotAnArray { path: PathBuf },
    #[error("failed to serialize collection: {0}")]
    Serialize(#[source] serde_json::Error),
    /// The file (or its temp sibling) could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
