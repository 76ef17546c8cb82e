//! Viewport state supplied by the canvas host, and the center point new
//! pages are placed on.
//!
//! The host reports its scroll offset in canvas units, its size in CSS
//! pixels, and its zoom. Older hosts send zoom as a bare number, newer ones
//! as `{ "value": n }`; [`Zoom`] accepts both and nothing past
//! deserialization sees the difference.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// A point in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Reject non-finite coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidArgument`] naming the offending axis.
    pub fn validated(self) -> Result<Self, LayoutError> {
        finite("center.x", self.x)?;
        finite("center.y", self.y)?;
        Ok(self)
    }
}

/// Zoom factor as the host may encode it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "ZoomRepr", into = "f64")]
pub struct Zoom(f64);

#[derive(Deserialize)]
#[serde(untagged)]
enum ZoomRepr {
    Plain(f64),
    Wrapped { value: f64 },
}

impl From<ZoomRepr> for Zoom {
    fn from(repr: ZoomRepr) -> Self {
        match repr {
            ZoomRepr::Plain(value) | ZoomRepr::Wrapped { value } => Self(value),
        }
    }
}

impl From<Zoom> for f64 {
    fn from(zoom: Zoom) -> Self {
        zoom.0
    }
}

impl Zoom {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self(1.0)
    }
}

/// Visible region of the canvas.
///
/// Field names follow the host's app-state keys so the struct can be
/// deserialized straight from it; unknown keys are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub scroll_x: f64,
    pub scroll_y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub zoom: Zoom,
}

impl Viewport {
    #[must_use]
    pub fn new(scroll_x: f64, scroll_y: f64, width: f64, height: f64, zoom: f64) -> Self {
        Self { scroll_x, scroll_y, width, height, zoom: Zoom(zoom) }
    }

    /// Canvas-space point at the middle of the visible region.
    ///
    /// Per axis: `-scroll + size / (2 * zoom)`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidArgument`] if any field is non-finite or
    /// the zoom is not strictly positive.
    pub fn center(&self) -> Result<Point, LayoutError> {
        let zoom = self.zoom.value();
        finite("zoom", zoom)?;
        if zoom <= 0.0 {
            return Err(LayoutError::InvalidArgument { field: "zoom", value: zoom });
        }
        finite("scrollX", self.scroll_x)?;
        finite("scrollY", self.scroll_y)?;
        finite("width", self.width)?;
        finite("height", self.height)?;

        Ok(Point {
            x: -self.scroll_x + self.width / (2.0 * zoom),
            y: -self.scroll_y + self.height / (2.0 * zoom),
        })
    }
}

fn finite(field: &'static str, value: f64) -> Result<f64, LayoutError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LayoutError::InvalidArgument { field, value })
    }
}
