//! Compile-time tables shared by the map engine.

/// Point-of-interest category table: wire tags, labels, icons and accents.
pub mod category;

/// Map defaults: centre, zoom and projection tile size.
pub mod map;

/// Asset and endpoint paths, relative to the served asset root.
pub mod path;

/// Colours and sizes for markers and filter buttons.
pub mod render_settings;
