//! Backup path resolution

use std::path::{Path, PathBuf};

/// Suffix that replaces a trailing `.json` on the backup file name.
pub const BACKUP_SUFFIX: &str = "_backup.json";

/// Sibling path the pre-run copy of a collection is written to.
///
/// `news.json` becomes `news_backup.json`. A name without a `.json`
/// suffix keeps its full name and gets the suffix appended, so the backup
/// never lands on the input file itself.
pub fn backup_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = name.strip_suffix(".json").unwrap_or(&name);
    path.with_file_name(format!("{stem}{BACKUP_SUFFIX}"))
}
