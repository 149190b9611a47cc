use evlabel_core::{flatten, restore, EventType};
use serde_json::{json, Value};
use tempfile::TempDir;

#[test]
fn test_load_save_preserves_unlabeled_collection() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("news.json");
    let text = r#"[
  {"doc_id": "a", "source": "wire", "content": "Ceasefire talks resume", "date": "2024-03-01"},
  {"content": "No id here", "tags": ["x", "y"]},
  42
]"#;
    std::fs::write(&path, text).unwrap();

    let collection = evlabel_store::load(&path).unwrap();
    evlabel_store::save(&path, &collection).unwrap();

    let saved: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let expected: Value = serde_json::from_str(text).unwrap();
    assert_eq!(saved, expected);
}

#[test]
fn test_flatten_count_matches_unlabeled_records() {
    let entries = vec![
        json!({"content": "a"}),
        json!({"content": "b", "event_type": "Policy-Announcement"}),
        json!({"title": "no content"}),
        json!({"content": "c", "event_type": ""}),
        json!(null),
    ];
    let collection = evlabel_store::Collection::new(entries);

    let items = flatten(&collection);

    let contents: Vec<_> = items.iter().map(|i| i.content.as_str()).collect();
    assert_eq!(contents, vec!["a", "c"]);
}

#[test]
fn test_restore_twice_matches_restore_once() {
    let mut collection = evlabel_store::Collection::new(vec![
        json!({"doc_id": "a", "content": "a"}),
        json!({"doc_id": "b", "content": "b"}),
    ]);
    let mut items = flatten(&collection);
    items[0].event_type = Some(EventType::LeaderActivity);
    items[1].event_type = Some(EventType::PolicyAnnouncement);

    restore(&mut collection, &items);
    let once = collection.clone();
    restore(&mut collection, &items);

    assert_eq!(collection, once);
}
