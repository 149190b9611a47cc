//! Event labeling: work item selection, label resolution, and the
//! interactive batch session

mod clipboard;
mod config;
mod driver;
mod flatten;
mod prompt;
mod resolver;
mod session;
mod types;

pub use clipboard::{Clipboard, ClipboardError};
pub use config::{LabelConfig, DEFAULT_CHUNK_SIZE};
pub use driver::{run, Outcome};
pub use flatten::{flatten, restore};
pub use prompt::render_prompt;
pub use resolver::{EventType, ParseEventTypeError};
pub use session::{label_chunk, ChunkOutcome, ChunkReport};
pub use types::WorkItem;
