//! Runtime map configuration, seeded from the `constants` crate.

use bevy::prelude::*;
use constants::map::{CENTER_LAT, CENTER_LNG, DEFAULT_ZOOM};
use constants::path::{ICON_BASE_PATH, POINTS_ENDPOINT};

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct MapConfig {
    pub center_lat: f64,
    pub center_lng: f64,
    pub zoom: u8,
    /// Asset path of the points endpoint.
    pub points_endpoint: String,
    /// Directory joined with each icon file name.
    pub icon_base_path: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_lat: CENTER_LAT,
            center_lng: CENTER_LNG,
            zoom: DEFAULT_ZOOM,
            points_endpoint: POINTS_ENDPOINT.to_string(),
            icon_base_path: ICON_BASE_PATH.to_string(),
        }
    }
}
