//! Board orchestration: compile Markdown onto a board and keep its source.
//!
//! DESIGN
//! ======
//! `Board` owns one board's persisted data and the layout config it
//! compiles with. Every mutation that adds a page compiles first and only
//! registers the source once the primitives are on the board, so a stored
//! source always matches a page that exists. Deleting a page removes its
//! primitives and its source together.
//!
//! Elements are kept as the host's JSON so elements drawn by hand survive
//! a load/save round trip untouched.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use serde_json::Value;

use crate::config::LayoutConfig;
use crate::error::{BoardError, ConfigError};
use crate::group::GroupId;
use crate::layout::{self, Page};
use crate::registry::{BoardData, RegistryEntry};
use crate::viewport::{Point, Viewport};

/// What [`Board::delete_markdown`] removed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Removed {
    /// Number of canvas elements dropped.
    pub elements: usize,
    /// The registered source, if there was one.
    pub source: Option<RegistryEntry>,
}

/// One board's data plus the config pages are compiled with.
#[derive(Debug, Clone)]
pub struct Board {
    data: BoardData,
    config: LayoutConfig,
}

impl Board {
    /// An empty board.
    ///
    /// # Errors
    ///
    /// Fails if `config` does not pass [`LayoutConfig::validate`].
    pub fn new(config: LayoutConfig) -> Result<Self, ConfigError> {
        Self::from_data(BoardData::default(), config)
    }

    /// Wrap previously persisted board data.
    ///
    /// # Errors
    ///
    /// Fails if `config` does not pass [`LayoutConfig::validate`].
    pub fn from_data(data: BoardData, config: LayoutConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { data, config })
    }

    #[must_use]
    pub fn data(&self) -> &BoardData {
        &self.data
    }

    #[must_use]
    pub fn into_data(self) -> BoardData {
        self.data
    }

    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    // --- Mutations ---

    /// Compile `text` at the middle of `viewport`, add it to the board, and
    /// register its source.
    ///
    /// # Errors
    ///
    /// Fails if the viewport cannot produce a finite center.
    pub fn commit_markdown(&mut self, text: &str, viewport: &Viewport) -> Result<Page, BoardError> {
        let center = viewport.center()?;
        self.commit_at(text, center)
    }

    /// Compile `text` centered on `center`, add it to the board, and
    /// register its source.
    ///
    /// # Errors
    ///
    /// Fails if `center` is not finite.
    pub fn commit_at(&mut self, text: &str, center: Point) -> Result<Page, BoardError> {
        let page = layout::compile(text, center, &self.config)?;
        let elements = page
            .primitives
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;

        self.data.elements.extend(elements);
        self.data.markdown_registry.insert(page.group_id.clone(), text);

        tracing::info!(
            group_id = %page.group_id,
            primitives = page.primitives.len(),
            "markdown page committed"
        );
        Ok(page)
    }

    /// Swap a page for a recompiled one.
    ///
    /// The new page is centered where the old page's background was; if the
    /// old page has no elements left on the board, it lands in the middle of
    /// `viewport` instead.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownGroup`] if `id` has no registered
    /// source, or a layout error if no finite center can be found. The board
    /// is unchanged on error.
    pub fn replace_markdown(&mut self, id: &GroupId, text: &str, viewport: &Viewport) -> Result<Page, BoardError> {
        if !self.data.markdown_registry.contains(id) {
            return Err(BoardError::UnknownGroup(id.clone()));
        }
        let center = match self.page_center(id) {
            Some(center) => center.validated()?,
            None => viewport.center()?,
        };

        self.delete_markdown(id);
        self.commit_at(text, center)
    }

    /// Remove a page's elements and its source.
    pub fn delete_markdown(&mut self, id: &GroupId) -> Removed {
        let before = self.data.elements.len();
        self.data.elements.retain(|element| !in_group(element, id));
        let removed = Removed {
            elements: before - self.data.elements.len(),
            source: self.data.markdown_registry.remove(id),
        };

        if removed.elements > 0 || removed.source.is_some() {
            tracing::info!(group_id = %id, elements = removed.elements, "markdown page deleted");
        }
        removed
    }

    /// Drop sources whose page is no longer on the board.
    ///
    /// The host deletes elements directly; this brings the registry back in
    /// line afterwards.
    pub fn prune_registry(&mut self) -> Vec<GroupId> {
        let elements = &self.data.elements;
        let dropped = self
            .data
            .markdown_registry
            .retain(|id| elements.iter().any(|element| in_group(element, id)));

        if !dropped.is_empty() {
            tracing::info!(count = dropped.len(), "pruned orphaned markdown sources");
        }
        dropped
    }

    // --- Queries ---

    /// The Markdown a page was compiled from, for re-editing.
    #[must_use]
    pub fn markdown_source(&self, id: &GroupId) -> Option<&str> {
        self.data.markdown_registry.get(id).map(|entry| entry.text.as_str())
    }

    /// All registered page sources, ordered by group id.
    pub fn markdown_pages(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.data.markdown_registry.iter()
    }

    /// Elements belonging to `id`.
    pub fn elements_in(&self, id: &GroupId) -> impl Iterator<Item = &Value> {
        self.data.elements.iter().filter(move |element| in_group(element, id))
    }

    /// Center of the page's background rectangle, if it is still on the board.
    #[must_use]
    pub fn page_center(&self, id: &GroupId) -> Option<Point> {
        let background = self
            .elements_in(id)
            .find(|element| element.get("type").and_then(Value::as_str) == Some("rectangle"))?;
        let number = |key: &str| background.get(key).and_then(Value::as_f64);
        Some(Point::new(
            number("x")? + number("width")? / 2.0,
            number("y")? + number("height")? / 2.0,
        ))
    }
}

fn in_group(element: &Value, id: &GroupId) -> bool {
    element
        .get("groupIds")
        .and_then(Value::as_array)
        .is_some_and(|ids| ids.iter().any(|g| g.as_str() == Some(id.as_str())))
}
