//! Markdown page compiler for the whiteboard canvas.
//!
//! A short Markdown document becomes one "page": a white background
//! rectangle plus styled text lines and divider rules, all sharing a fresh
//! group id so the host moves and deletes them as a unit. The crate is
//! compiled to WebAssembly for the browser and used natively by the CLI.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`block`] | Line classifier: heading, quote, memo, divider, paragraph, empty |
//! | [`wrap`] | Width estimate and greedy word wrap |
//! | [`layout`] | Two-pass page compiler (measure, then emit) |
//! | [`primitive`] | Drawing primitive records in the host's JSON shape |
//! | [`viewport`] | Viewport center math and zoom normalization |
//! | [`group`] | Page group ids |
//! | [`edit`] | Editor line operations: apply a block marker, sanitize |
//! | [`registry`] | Raw Markdown source per page, board data container |
//! | [`board`] | Commit / replace / delete / prune pages on a board |
//! | [`config`] | Layout configuration, defaults, env and JSON overlays |
//! | [`error`] | Error types |
//! | [`bindings`] | `wasm-bindgen` exports for the browser host |
//! | [`consts`] | Layout and styling constants |

pub mod bindings;
pub mod block;
pub mod board;
pub mod config;
pub mod consts;
pub mod edit;
pub mod error;
pub mod group;
pub mod layout;
pub mod primitive;
pub mod registry;
pub mod viewport;
pub mod wrap;

pub use board::{Board, Removed};
pub use config::LayoutConfig;
pub use error::{BoardError, ConfigError, LayoutError};
pub use group::GroupId;
pub use layout::{Page, compile};
pub use registry::{BoardData, BoardsData, MarkdownRegistry, RegistryEntry};
pub use viewport::{Point, Viewport};
