//! Batch prompt text shown to the operator and copied to the clipboard

use crate::{EventType, WorkItem};
use std::fmt::Write;

/// Build the instructions plus one `Event N: content` line per item.
pub fn render_prompt(chunk: &[WorkItem]) -> String {
    let mut prompt = String::from("Classify each news event as one of:\n");
    for event_type in EventType::ALL {
        let _ = writeln!(prompt, "- {} ({})", event_type, event_type.shorthand());
    }
    prompt.push_str("Reply in format: INDEX: <EVENT-TYPE>\n\n");

    for item in chunk {
        let _ = writeln!(prompt, "Event {}: {}", item.global_index, item.content);
    }
    prompt
}
