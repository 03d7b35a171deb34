//! JSON-RPC 2.0 bridge to the page embedding the map.
//!
//! On wasm32 the map listens for `postMessage` strings from its parent
//! window and answers the same way; on native builds outgoing messages are
//! dropped.
//!
//! ## Methods
//!
//! - `toggle_category {category}`: queue a toggle for one of `CAFE`, `FOOD`,
//!   `MART`, `PHARMACY` (case-insensitive). Anything else is `-32602`.
//! - `get_visibility`: visible categories, button affordances, readiness.
//! - `get_categories`: the known category table with labels and icons.
//! - `get_points`: the fetched points in source order.
//!
//! ## Notifications
//!
//! - `points_loaded {count, categories}`
//! - `points_load_failed {error}`
//! - `visibility_changed {category, visible, visible_categories}`
//! - `app_ready {filtering, markers}`
//!
//! Error codes: `-32600` invalid request, `-32601` method not found,
//! `-32602` invalid params.

pub mod web_rpc;
