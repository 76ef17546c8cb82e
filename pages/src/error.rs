//! Error types for the pages crate.

use crate::group::GroupId;

/// Error returned by the page compiler and viewport math.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// A numeric input was missing, non-finite, or out of range.
    #[error("invalid argument `{field}`: {value}")]
    InvalidArgument { field: &'static str, value: f64 },
}

/// Error returned by [`crate::config::LayoutConfig::validate`] and friends.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A size field must be strictly positive and finite.
    #[error("`{field}` must be a positive number, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    /// A spacing field must be zero or positive and finite.
    #[error("`{field}` must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    /// Horizontal padding leaves no room for content.
    #[error("horizontal padding {padding} leaves no content width on a {width} wide page")]
    NoContentWidth { padding: f64, width: f64 },
    /// An environment variable held something other than a number.
    #[error("invalid value for {var}: {raw}")]
    Env { var: String, raw: String },
    /// A config file could not be parsed.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Error returned by [`crate::board::Board`] operations.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error(transparent)]
    Layout(#[from] LayoutError),
    /// No markdown source is registered under this group.
    #[error("unknown markdown group: {0}")]
    UnknownGroup(GroupId),
    /// A primitive or board container failed to (de)serialize.
    #[error("board data: {0}")]
    Json(#[from] serde_json::Error),
}
