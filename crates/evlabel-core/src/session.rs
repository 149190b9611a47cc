//! Interactive labeling of one batch of work items

use crate::{render_prompt, Clipboard, EventType, WorkItem};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::io::{BufRead, Write};

/// How a batch ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkOutcome {
    /// Every item in the batch received a label
    Completed,
    /// The operator typed `exit`
    Aborted,
    /// Input reached end of file before the batch was finished
    InputClosed,
    /// Reading from or writing to the terminal failed
    InputFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkReport {
    /// Items labeled in this batch
    pub classified: usize,
    pub outcome: ChunkOutcome,
}

/// Index typed by the operator. Integers too large for `i64` are kept as
/// text so they are reported as outside the chunk, not as unparsable.
#[derive(Debug, PartialEq, Eq)]
enum Index {
    Number(i64),
    OutOfRange(String),
}

impl Index {
    fn position(&self) -> Option<usize> {
        match self {
            Index::Number(n) => usize::try_from(*n).ok(),
            Index::OutOfRange(_) => None,
        }
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Index::Number(n) => write!(f, "{n}"),
            Index::OutOfRange(digits) => f.write_str(digits),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Done,
    Exit,
    Label { index: Index, event_type: EventType },
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
enum LineError {
    #[error("Invalid format. Use 'INDEX: <EVENT-TYPE>'")]
    Format,
    #[error("Invalid event type. Use PA, LA, or EE.")]
    EventType,
    #[error("Could not parse index '{0}', please try again.")]
    Index(String),
}

fn is_integer_literal(token: &str) -> bool {
    let digits = token.strip_prefix(&['+', '-'][..]).unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn parse_index(index_token: &str) -> Result<Index, LineError> {
    let stripped = index_token.replace("Event", "");
    let stripped = stripped.trim();
    match stripped.parse::<i64>() {
        Ok(n) => Ok(Index::Number(n)),
        Err(_) if is_integer_literal(stripped) => Ok(Index::OutOfRange(
            stripped.trim_start_matches('+').to_string(),
        )),
        Err(_) => Err(LineError::Index(index_token.to_string())),
    }
}

fn parse_line(line: &str) -> Result<Command, LineError> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("done") {
        return Ok(Command::Done);
    }
    if line.eq_ignore_ascii_case("exit") {
        return Ok(Command::Exit);
    }

    let parts: Vec<&str> = line.split(':').collect();
    let [index_token, label] = parts.as_slice() else {
        return Err(LineError::Format);
    };
    let (index_token, label) = (index_token.trim(), label.trim());

    let event_type = EventType::resolve(label).ok_or(LineError::EventType)?;
    let index = parse_index(index_token)?;

    Ok(Command::Label { index, event_type })
}

/// Show the batch prompt and read `INDEX: TYPE` lines until every item is
/// labeled, the operator types `exit`, or input runs out.
///
/// Labels accepted before an abort or a terminal failure are kept. The
/// prompt is copied to `clipboard` when one is given; a copy failure is
/// reported and the session carries on.
pub fn label_chunk<R: BufRead, W: Write>(
    chunk: &mut [WorkItem],
    input: &mut R,
    output: &mut W,
    clipboard: Option<&mut dyn Clipboard>,
) -> ChunkReport {
    let mut labels: BTreeMap<usize, EventType> = BTreeMap::new();
    let outcome = match converse(chunk, input, output, clipboard, &mut labels) {
        Ok(outcome) => outcome,
        Err(err) => {
            tracing::error!("Terminal I/O failed: {err}");
            ChunkOutcome::InputFailed
        }
    };

    for item in chunk.iter_mut() {
        if let Some(&event_type) = labels.get(&item.global_index) {
            item.event_type = Some(event_type);
        }
    }

    ChunkReport {
        classified: labels.len(),
        outcome,
    }
}

fn converse<R: BufRead, W: Write>(
    chunk: &[WorkItem],
    input: &mut R,
    output: &mut W,
    clipboard: Option<&mut dyn Clipboard>,
    labels: &mut BTreeMap<usize, EventType>,
) -> std::io::Result<ChunkOutcome> {
    let prompt = render_prompt(chunk);
    writeln!(output, "\n=== PROMPT TO COPY (if needed) ===")?;
    writeln!(output, "{prompt}")?;
    writeln!(output, "===================================")?;

    if let Some(clipboard) = clipboard {
        match clipboard.copy(&prompt) {
            Ok(()) => writeln!(output, "\nPrompt copied to clipboard!")?,
            Err(err) => {
                tracing::warn!("Clipboard copy failed: {err}");
                writeln!(output, "\nFailed to copy to clipboard")?;
            }
        }
    }

    writeln!(output, "\nEnter classifications as 'INDEX: <EVENT-TYPE>'")?;
    writeln!(output, "Type 'done' when finished, or 'exit' to abort.\n")?;

    let mut outstanding: BTreeSet<usize> = chunk.iter().map(|item| item.global_index).collect();
    let mut buf = Vec::new();

    while !outstanding.is_empty() {
        write!(output, "Classification > ")?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(output)?;
            return Ok(ChunkOutcome::InputClosed);
        }

        let parsed = match std::str::from_utf8(&buf) {
            Ok(line) => parse_line(line),
            Err(_) => Err(LineError::Format),
        };
        match parsed {
            // The loop exits by itself once nothing is outstanding, so
            // `done` only ever lands here with work left.
            Ok(Command::Done) => {
                writeln!(output, "Still missing indices: {outstanding:?}")?;
            }
            Ok(Command::Exit) => {
                writeln!(output, "Aborting this chunk...")?;
                return Ok(ChunkOutcome::Aborted);
            }
            Ok(Command::Label { index, event_type }) => {
                match index.position().filter(|idx| outstanding.remove(idx)) {
                    Some(idx) => {
                        labels.insert(idx, event_type);
                    }
                    None => writeln!(output, "Index {index} not in current chunk.")?,
                }
            }
            Err(err) => writeln!(output, "{err}")?,
        }
    }

    Ok(ChunkOutcome::Completed)
}
