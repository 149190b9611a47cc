//! Clipboard sink used to hand the batch prompt to other tools

/// Errors from placing text on a clipboard.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("no clipboard tool is available")]
    Unavailable,
    #[error("clipboard tool {tool} failed: {source}")]
    Io {
        tool: String,
        source: std::io::Error,
    },
    #[error("clipboard tool {tool} exited with {status}")]
    Status {
        tool: String,
        status: std::process::ExitStatus,
    },
}

/// Destination for the rendered batch prompt.
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}
