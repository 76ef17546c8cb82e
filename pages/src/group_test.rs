use std::collections::HashSet;

use super::*;

#[test]
fn generated_ids_have_prefix_and_hex_suffix() {
    let id = GroupId::generate();
    let suffix = id.as_str().strip_prefix("markdown-").unwrap();
    assert_eq!(suffix.len(), 32);
    assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    assert!(id.is_markdown());
}

#[test]
fn generated_ids_do_not_repeat() {
    let ids: HashSet<GroupId> = (0..1000).map(|_| GroupId::generate()).collect();
    assert_eq!(ids.len(), 1000);
}

#[test]
fn foreign_ids_are_not_markdown() {
    assert!(!GroupId::from("frame-7").is_markdown());
}

#[test]
fn display_and_serde_use_raw_string() {
    let id = GroupId::from("markdown-abc");
    assert_eq!(id.to_string(), "markdown-abc");
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"markdown-abc\"");
    let back: GroupId = serde_json::from_str("\"markdown-abc\"").unwrap();
    assert_eq!(back, id);
}
