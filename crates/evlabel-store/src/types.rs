//! Collection type

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordered entries of a collection file, kept as raw JSON so fields the
/// labeler does not know about survive a load/save cycle untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    entries: Vec<Value>,
}

impl Collection {
    pub fn new(entries: Vec<Value>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[Value] {
        &self.entries
    }

    pub fn entries_mut(&mut self) -> &mut [Value] {
        &mut self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
