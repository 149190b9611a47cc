//! System clipboard backed by the platform's copy command

use evlabel_core::{Clipboard, ClipboardError};
use std::io::Write;
use std::process::{Command, Stdio};

#[cfg(target_os = "macos")]
const COPY_TOOLS: &[(&str, &[&str])] = &[("pbcopy", &[])];

#[cfg(target_os = "windows")]
const COPY_TOOLS: &[(&str, &[&str])] = &[("clip", &[])];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const COPY_TOOLS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

/// Pipes text into the first copy tool that accepts it.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut last_err = ClipboardError::Unavailable;
        for (program, args) in COPY_TOOLS {
            match pipe_to(program, args, text) {
                Ok(()) => return Ok(()),
                Err(ClipboardError::Io { source, .. })
                    if source.kind() == std::io::ErrorKind::NotFound =>
                {
                    continue
                }
                Err(err) => {
                    tracing::debug!("{program} could not take the prompt: {err}");
                    last_err = err;
                }
            }
        }
        Err(last_err)
    }
}

fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<(), ClipboardError> {
    let io_err = |source| ClipboardError::Io {
        tool: program.to_string(),
        source,
    };

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(io_err)?;

    // Dropping stdin closes the pipe so the tool sees end of input
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes()).map_err(io_err)?;
    }

    let status = child.wait().map_err(io_err)?;
    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::Status {
            tool: program.to_string(),
            status,
        })
    }
}
