#[cfg(test)]
#[path = "group_test.rs"]
mod group_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::GROUP_ID_PREFIX;

/// Opaque identifier tying a page's primitives and its stored source together.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(String);

impl GroupId {
    /// Generate a fresh id of the form `markdown-<32 hex digits>`.
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("{GROUP_ID_PREFIX}{}", Uuid::new_v4().simple()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this id was minted by [`GroupId::generate`].
    #[must_use]
    pub fn is_markdown(&self) -> bool {
        self.0.starts_with(GROUP_ID_PREFIX)
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for GroupId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for GroupId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl AsRef<str> for GroupId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
