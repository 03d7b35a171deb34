/// Latitude of the initial map centre (degrees).
pub const CENTER_LAT: f64 = 37.5358994;

/// Longitude of the initial map centre (degrees).
pub const CENTER_LNG: f64 = 126.8969627;

/// Initial zoom level.
pub const DEFAULT_ZOOM: u8 = 17;

/// Zoom levels are clamped to this range when projecting.
pub const MIN_ZOOM: u8 = 0;
pub const MAX_ZOOM: u8 = 22;

/// Side of one Web Mercator tile in world units at any zoom level.
pub const TILE_SIZE: f64 = 256.0;

/// Latitude limit of the Web Mercator projection.
pub const MAX_LATITUDE: f64 = 85.051_128_78;
