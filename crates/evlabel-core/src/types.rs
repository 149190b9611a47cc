//! Per-run work item

use crate::EventType;

/// One unlabeled record queued for the operator.
///
/// `global_index` counts only the records selected in this run, so it is
/// stable for the run and meaningless across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub global_index: usize,
    pub doc_id: String,
    pub content: String,
    pub date: String,
    /// Label accepted during the session, if any
    pub event_type: Option<EventType>,
}

