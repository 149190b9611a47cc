use evlabel_core::{Clipboard, ClipboardError, LabelConfig, Outcome};
use serde_json::Value;
use std::io::{BufRead, Cursor, Read};
use std::path::{Path, PathBuf};

/// Clipboard double that remembers every prompt it was handed.
#[derive(Default)]
pub struct RecordingClipboard {
    pub copied: Vec<String>,
}

impl Clipboard for RecordingClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.copied.push(text.to_string());
        Ok(())
    }
}

pub fn write_collection(dir: &Path, name: &str, data: &Value) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_string_pretty(data).unwrap()).unwrap();
    path
}

pub fn read_json(path: &Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

/// Run a labeling pass with `script` as the operator's typed input.
pub fn run_scripted(
    config: &LabelConfig,
    script: &str,
    clipboard: &mut RecordingClipboard,
) -> (Outcome, String) {
    let mut input = Cursor::new(script.as_bytes().to_vec());
    run_with_input(config, &mut input, clipboard)
}

pub fn run_with_input<R: BufRead>(
    config: &LabelConfig,
    input: &mut R,
    clipboard: &mut RecordingClipboard,
) -> (Outcome, String) {
    let mut output = Vec::new();
    let outcome = evlabel_core::run(config, input, &mut output, clipboard);
    (outcome, String::from_utf8(output).unwrap())
}

/// Terminal stand-in that serves `typed` and then fails every read.
pub struct FailingTerminal {
    pub typed: Cursor<Vec<u8>>,
}

impl Read for FailingTerminal {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match self.typed.read(buf)? {
            0 => Err(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "terminal closed unexpectedly",
            )),
            n => Ok(n),
        }
    }
}
