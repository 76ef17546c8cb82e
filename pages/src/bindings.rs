//! `wasm-bindgen` exports for the browser host.
//!
//! Values cross the boundary as JSON: Rust builds a `serde_json` value, the
//! host receives the parsed JS object. The host owns persistence, so a page
//! is handed back together with the registry entry it should store.

#[cfg(test)]
#[path = "bindings_test.rs"]
mod bindings_test;

use serde_json::{Value, json};
use wasm_bindgen::prelude::*;

use crate::config::LayoutConfig;
use crate::edit::{self, BlockMarker, LineEdit};
use crate::layout::{self, Page};
use crate::registry::RegistryEntry;
use crate::viewport::{Point, Viewport};

#[wasm_bindgen]
extern "C" {
    /// No tracing subscriber runs in the browser, so host-visible warnings
    /// go to the console directly.
    #[wasm_bindgen(js_namespace = console, js_name = warn)]
    fn console_warn(message: &str);
}

/// Compile `markdown` centered on `(center_x, center_y)`.
///
/// Returns `{ groupId, elements, source: { id, text } }`. A non-string
/// `markdown` compiles as the empty document with a `console.warn`.
///
/// # Errors
///
/// Throws if the center is not finite.
#[wasm_bindgen(js_name = generateMarkdownPage)]
pub fn generate_markdown_page(center_x: f64, center_y: f64, markdown: JsValue) -> Result<JsValue, JsValue> {
    let text = document_or_empty(markdown.as_string(), console_warn);
    let page = layout::compile(&text, Point::new(center_x, center_y), &LayoutConfig::default())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_js(&page_payload(&page, &text))
}

/// Center of the visible region described by the host's app state.
///
/// # Errors
///
/// Throws if the state lacks scroll/size fields or has an unusable zoom.
#[wasm_bindgen(js_name = viewportCenter)]
pub fn viewport_center(app_state: JsValue) -> Result<JsValue, JsValue> {
    let raw = String::from(js_sys::JSON::stringify(&app_state)?);
    let center = center_from_json(&raw).map_err(|e| JsValue::from_str(&e))?;
    to_js(&json!({ "x": center.x, "y": center.y }))
}

#[wasm_bindgen(js_name = sanitizeMarkdown)]
#[must_use]
pub fn sanitize_markdown(text: &str) -> String {
    edit::sanitize(text)
}

/// Rewrite the line under `cursor` as `block` (`#`, `>`, `>>`, `---`, `para`).
///
/// Returns `{ text, cursor }`. Both cursors are UTF-16 code unit indexes,
/// as a textarea's `selectionStart` reports them.
///
/// # Errors
///
/// Throws on an unknown block name.
#[wasm_bindgen(js_name = applyMarkdownBlock)]
pub fn apply_markdown_block(text: &str, cursor: usize, block: &str) -> Result<JsValue, JsValue> {
    let marker: BlockMarker = block.parse().map_err(|e: edit::UnknownMarker| JsValue::from_str(&e.to_string()))?;
    let edit = apply_block_utf16(text, cursor, marker);
    to_js(&json!({ "text": edit.text, "cursor": edit.cursor }))
}

/// [`edit::apply_block`] with the cursor in UTF-16 code units on both sides.
fn apply_block_utf16(text: &str, cursor: usize, marker: BlockMarker) -> LineEdit {
    let edit = edit::apply_block(text, edit::byte_offset_from_utf16(text, cursor), marker);
    let cursor = edit::utf16_offset(&edit.text, edit.cursor);
    LineEdit { text: edit.text, cursor }
}

/// The document text, or the empty document with a warning through both
/// `tracing` and `warn`.
fn document_or_empty(markdown: Option<String>, warn: impl Fn(&str)) -> String {
    markdown.unwrap_or_else(|| {
        let message = "markdown argument is not a string; using empty document";
        tracing::warn!("{message}");
        warn(message);
        String::new()
    })
}

fn page_payload(page: &Page, text: &str) -> Value {
    json!({
        "groupId": page.group_id,
        "elements": page.primitives,
        "source": RegistryEntry { id: page.group_id.clone(), text: text.to_owned() },
    })
}

fn center_from_json(raw: &str) -> Result<Point, String> {
    let viewport: Viewport = serde_json::from_str(raw).map_err(|e| format!("invalid app state: {e}"))?;
    viewport.center().map_err(|e| e.to_string())
}

fn to_js(value: &Value) -> Result<JsValue, JsValue> {
    js_sys::JSON::parse(&value.to_string())
}
