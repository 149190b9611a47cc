//! JSON collection storage: load, save, and one-shot backups

mod error;
mod io;
mod paths;
mod types;

pub use error::StoreError;
pub use io::{atomic_write, load, save, write_backup};
pub use paths::{backup_path, BACKUP_SUFFIX};
pub use types::Collection;
