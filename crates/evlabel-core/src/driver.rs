//! Full labeling run: load, backup, label batches, merge, save

use crate::{flatten, label_chunk, restore, ChunkOutcome, Clipboard, EventType, LabelConfig};
use std::io::{BufRead, Write};

/// Result of a labeling run, mapped onto the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Collection saved; `remaining` items are still unlabeled
    Completed { classified: usize, remaining: usize },
    /// Collection saved, but the terminal failed before all batches ran
    Interrupted { classified: usize, remaining: usize },
    /// Every record with content already has a label
    NothingToDo,
    LoadFailed,
    BackupFailed,
    SaveFailed,
}

impl Outcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Completed { .. } => 0,
            Outcome::NothingToDo => 3,
            Outcome::LoadFailed => 4,
            Outcome::BackupFailed => 5,
            Outcome::SaveFailed => 6,
            Outcome::Interrupted { .. } => 7,
        }
    }
}

struct Progress {
    done: usize,
    total: usize,
}

impl Progress {
    fn advance<W: Write>(&mut self, by: usize, output: &mut W) -> std::io::Result<()> {
        self.done = (self.done + by).min(self.total);
        writeln!(output, "Progress: {}/{} events", self.done, self.total)
    }
}

/// Run one labeling pass over the collection named in `config`.
///
/// Operator prompts go to `output` and answers come from `input`. The
/// collection is backed up before the first batch is shown and written
/// back once at the end, including labels from aborted batches.
pub fn run<R: BufRead, W: Write>(
    config: &LabelConfig,
    input: &mut R,
    output: &mut W,
    clipboard: &mut dyn Clipboard,
) -> Outcome {
    let path = config.json_path.as_path();
    tracing::info!("Loading JSON from {}", path.display());
    let mut collection = match evlabel_store::load(path) {
        Ok(collection) => collection,
        Err(err) => {
            tracing::error!("Error loading JSON: {err}");
            return Outcome::LoadFailed;
        }
    };

    if collection.is_empty() {
        tracing::warn!("{} holds no records", path.display());
    } else {
        tracing::info!("Loaded {} records", collection.len());
    }

    let mut items = flatten(&collection);
    if items.is_empty() {
        tracing::info!("No unlabeled events found.");
        return Outcome::NothingToDo;
    }

    tracing::info!(
        "Backing up to {}",
        evlabel_store::backup_path(path).display()
    );
    if let Err(err) = evlabel_store::write_backup(path, &collection) {
        tracing::error!("Error writing backup: {err}");
        return Outcome::BackupFailed;
    }

    let mut progress = Progress {
        done: 0,
        total: items.len(),
    };
    let mut interrupted = false;
    for chunk in items.chunks_mut(config.chunk_size) {
        let report = if config.auto_copy {
            label_chunk(chunk, input, output, Some(&mut *clipboard))
        } else {
            label_chunk(chunk, input, output, None)
        };
        if let Err(err) = progress.advance(chunk.len(), output) {
            tracing::warn!("Could not write progress: {err}");
        }
        tracing::info!(
            "Processed {}/{} events in chunk",
            report.classified,
            chunk.len()
        );
        match report.outcome {
            ChunkOutcome::Completed | ChunkOutcome::Aborted => {}
            ChunkOutcome::InputClosed => {
                tracing::warn!("Input closed; remaining events stay unlabeled");
                break;
            }
            ChunkOutcome::InputFailed => {
                tracing::error!("Stopping the session; saving labels entered so far");
                interrupted = true;
                break;
            }
        }
    }

    let written = restore(&mut collection, &items);
    tracing::debug!(written, "labels merged into collection");
    if let Err(err) = evlabel_store::save(path, &collection) {
        tracing::error!("Error saving JSON: {err}");
        return Outcome::SaveFailed;
    }

    for event_type in EventType::ALL {
        let count = items
            .iter()
            .filter(|item| item.event_type == Some(event_type))
            .count();
        tracing::info!("{event_type}: {count}");
    }
    let classified = items.iter().filter(|item| item.event_type.is_some()).count();
    let remaining = items.len() - classified;
    if interrupted {
        tracing::warn!("Classification interrupted; partial results saved.");
        return Outcome::Interrupted {
            classified,
            remaining,
        };
    }
    tracing::info!("Classification completed and saved.");
    Outcome::Completed {
        classified,
        remaining,
    }
}
