use serde_json::json;

use super::*;

fn id(raw: &str) -> GroupId {
    GroupId::from(raw)
}

#[test]
fn insert_and_get() {
    let mut registry = MarkdownRegistry::new();
    assert!(registry.insert(id("markdown-a"), "# A").is_none());
    let entry = registry.get(&id("markdown-a")).unwrap();
    assert_eq!(entry.id, id("markdown-a"));
    assert_eq!(entry.text, "# A");
    assert_eq!(registry.len(), 1);
}

#[test]
fn insert_overwrites_and_returns_previous() {
    let mut registry = MarkdownRegistry::new();
    registry.insert(id("g"), "old");
    let previous = registry.insert(id("g"), "new").unwrap();
    assert_eq!(previous.text, "old");
    assert_eq!(registry.get(&id("g")).unwrap().text, "new");
    assert_eq!(registry.len(), 1);
}

#[test]
fn remove_entry() {
    let mut registry = MarkdownRegistry::new();
    registry.insert(id("g"), "x");
    assert!(registry.remove(&id("g")).is_some());
    assert!(registry.remove(&id("g")).is_none());
    assert!(registry.is_empty());
}

#[test]
fn retain_reports_dropped_ids() {
    let mut registry = MarkdownRegistry::new();
    registry.insert(id("a"), "1");
    registry.insert(id("b"), "2");
    registry.insert(id("c"), "3");
    let dropped = registry.retain(|g| g.as_str() != "b");
    assert_eq!(dropped, vec![id("b")]);
    assert!(registry.contains(&id("a")));
    assert!(!registry.contains(&id("b")));
    assert_eq!(registry.iter().count(), 2);
}

#[test]
fn registry_serializes_as_map_of_entries() {
    let mut registry = MarkdownRegistry::new();
    registry.insert(id("markdown-x"), "> q");
    let value = serde_json::to_value(&registry).unwrap();
    assert_eq!(value, json!({"markdown-x": {"id": "markdown-x", "text": "> q"}}));
}

#[test]
fn board_data_reads_host_layout() {
    let raw = json!({
        "elements": [{"type": "ellipse", "groupIds": []}],
        "files": {},
        "appState": {"zoom": {"value": 1}},
        "markdown_registry": {
            "markdown-1": {"id": "markdown-1", "text": "# Hello"}
        }
    });
    let board: BoardData = serde_json::from_value(raw).unwrap();
    assert_eq!(board.elements.len(), 1);
    assert!(board.app_state.contains_key("zoom"));
    assert_eq!(board.markdown_registry.get(&id("markdown-1")).unwrap().text, "# Hello");
}

#[test]
fn board_data_fills_missing_sections() {
    let board: BoardData = serde_json::from_value(json!({})).unwrap();
    assert_eq!(board, BoardData::default());
}

#[test]
fn board_data_writes_registry_key_verbatim() {
    let value = serde_json::to_value(BoardData::default()).unwrap();
    assert!(value.get("markdown_registry").is_some());
    assert!(value.get("appState").is_some());
}

#[test]
fn boards_data_keyed_by_board() {
    let mut boards = BoardsData::new();
    boards.entry("board-1".into()).or_default().markdown_registry.insert(id("g"), "text");
    let json = serde_json::to_string(&boards).unwrap();
    let parsed: BoardsData = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, boards);
}
