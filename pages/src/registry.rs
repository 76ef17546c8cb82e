//! Markdown source registry and the per-board data container.
//!
//! The canvas only keeps laid-out primitives. To let a user reopen a page and
//! edit its Markdown, the raw text is kept next to the board's elements,
//! keyed by the page's group id.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::group::GroupId;

/// Raw source of one compiled page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub id: GroupId,
    pub text: String,
}

/// Group id to raw Markdown source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkdownRegistry {
    entries: BTreeMap<GroupId, RegistryEntry>,
}

impl MarkdownRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `text` under `id`, replacing any earlier source.
    pub fn insert(&mut self, id: GroupId, text: impl Into<String>) -> Option<RegistryEntry> {
        let entry = RegistryEntry { id: id.clone(), text: text.into() };
        self.entries.insert(id, entry)
    }

    #[must_use]
    pub fn get(&self, id: &GroupId) -> Option<&RegistryEntry> {
        self.entries.get(id)
    }

    pub fn remove(&mut self, id: &GroupId) -> Option<RegistryEntry> {
        self.entries.remove(id)
    }

    #[must_use]
    pub fn contains(&self, id: &GroupId) -> bool {
        self.entries.contains_key(id)
    }

    /// Keep only the entries for which `keep` returns true. Returns the dropped ids.
    pub fn retain(&mut self, mut keep: impl FnMut(&GroupId) -> bool) -> Vec<GroupId> {
        let dropped: Vec<GroupId> = self.entries.keys().filter(|id| !keep(id)).cloned().collect();
        for id in &dropped {
            self.entries.remove(id);
        }
        dropped
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Everything persisted for one board.
///
/// `elements`, `files` and `app_state` belong to the drawing host and are
/// kept as opaque JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardData {
    #[serde(default)]
    pub elements: Vec<serde_json::Value>,
    #[serde(default)]
    pub files: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub app_state: serde_json::Map<String, serde_json::Value>,
    #[serde(default, rename = "markdown_registry")]
    pub markdown_registry: MarkdownRegistry,
}

/// Board id to board data.
pub type BoardsData = BTreeMap<String, BoardData>;
