//! One-shot fetch of the points endpoint.
//!
//! The request goes through the asset server, which issues an HTTP GET on
//! wasm32 and reads the file from the asset folder on native builds.

/// Fetch start, completion polling and the resulting events.
pub mod points_loader;
