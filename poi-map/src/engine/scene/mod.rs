//! Map canvas and coordinate projection.

/// Map canvas, centre pin and reference grid.
pub mod canvas;

/// Web Mercator projection from latitude/longitude to world units.
pub mod projection;
