//! Collection file I/O and atomic file operations

use crate::{backup_path, Collection, StoreError};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Read a collection from a JSON array file.
pub fn load(path: &Path) -> Result<Collection, StoreError> {
    let text = std::fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_str(&text).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    match value {
        Value::Array(entries) => Ok(Collection::new(entries)),
        _ => Err(StoreError::NotAnArray {
            path: path.to_path_buf(),
        }),
    }
}

/// Write a collection as 2-space indented JSON, keeping non-ASCII text as is.
pub fn save(path: &Path, collection: &Collection) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(collection).map_err(StoreError::Serialize)?;
    atomic_write(path, json.as_bytes()).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Save an unmodified copy of the collection next to `path`.
pub fn write_backup(path: &Path, collection: &Collection) -> Result<PathBuf, StoreError> {
    let backup = backup_path(path);
    save(&backup, collection)?;
    Ok(backup)
}

/// Write data atomically using temp file + rename
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);
    std::fs::write(&temp_path, data)?;
    if let Err(err) = std::fs::rename(&temp_path, path) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(err);
    }
    Ok(())
}
