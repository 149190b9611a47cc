//! Projection of a collection onto work items, and the merge back

use crate::WorkItem;
use evlabel_store::Collection;
use serde_json::{Map, Value};

/// Select the records that still need a label, in collection order.
///
/// A record qualifies when it is an object with a `content` field and its
/// `event_type` is missing or falsy.
pub fn flatten(collection: &Collection) -> Vec<WorkItem> {
    collection
        .entries()
        .iter()
        .filter_map(Value::as_object)
        .filter(|record| record.contains_key("content") && is_unclassified(record))
        .enumerate()
        .map(|(global_index, record)| WorkItem {
            global_index,
            doc_id: text_field(record, "doc_id"),
            content: text_field(record, "content"),
            date: text_field(record, "date"),
            event_type: None,
        })
        .collect()
}

/// Copy accepted labels back onto the collection by `doc_id`.
///
/// Each labeled item binds to the first record carrying its `doc_id`;
/// later records sharing the id are never touched. Returns the number of
/// records written.
pub fn restore(collection: &mut Collection, items: &[WorkItem]) -> usize {
    let mut applied = 0;
    for item in items {
        let Some(event_type) = item.event_type else {
            continue;
        };
        let target = collection
            .entries_mut()
            .iter_mut()
            .filter_map(Value::as_object_mut)
            .find(|record| doc_id_matches(record, &item.doc_id));
        match target {
            Some(record) => {
                record.insert(
                    "event_type".to_string(),
                    Value::String(event_type.as_str().to_string()),
                );
                applied += 1;
            }
            None => {
                tracing::debug!(
                    doc_id = %item.doc_id,
                    global_index = item.global_index,
                    "no record matches labeled item"
                );
            }
        }
    }
    applied
}

fn is_unclassified(record: &Map<String, Value>) -> bool {
    record.get("event_type").map_or(true, is_falsy)
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

fn text_field(record: &Map<String, Value>, key: &str) -> String {
    match record.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

// A missing or null `doc_id` never matches, even for items whose id is empty.
fn doc_id_matches(record: &Map<String, Value>, doc_id: &str) -> bool {
    match record.get("doc_id") {
        Some(Value::String(s)) => s == doc_id,
        Some(number @ Value::Number(_)) => number.to_string() == doc_id,
        _ => false,
    }
}
