use crate::config::MapConfig;
use bevy::math::DVec2;
use bevy::prelude::*;
use constants::map::{MAX_LATITUDE, MAX_ZOOM, MIN_ZOOM, TILE_SIZE};
use std::f64::consts::PI;

/// Web Mercator projection anchored at the map centre.
///
/// World units are pixels at the configured zoom; the centre sits at the
/// origin with north towards +Y.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct MapProjection {
    zoom: u8,
    origin: DVec2,
}

impl MapProjection {
    pub fn new(center_lat: f64, center_lng: f64, zoom: u8) -> Self {
        let zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        Self {
            zoom,
            origin: mercator_pixels(center_lat, center_lng, zoom),
        }
    }

    pub fn from_config(config: &MapConfig) -> Self {
        Self::new(config.center_lat, config.center_lng, config.zoom)
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// World position of a coordinate.
    pub fn to_world(&self, lat: f64, lng: f64) -> Vec2 {
        let pixels = mercator_pixels(lat, lng, self.zoom);
        Vec2::new(
            (pixels.x - self.origin.x) as f32,
            (self.origin.y - pixels.y) as f32,
        )
    }

    /// Coordinate under a world position, as `(lat, lng)`.
    #[cfg(test)]
    pub fn to_lat_lng(&self, world: Vec2) -> (f64, f64) {
        let scale = world_size(self.zoom);
        let x = (self.origin.x + world.x as f64) / scale;
        let y = (self.origin.y - world.y as f64) / scale;
        let lng = x * 360.0 - 180.0;
        let lat = (PI * (1.0 - 2.0 * y)).sinh().atan().to_degrees();
        (lat, lng)
    }
}

impl Default for MapProjection {
    fn default() -> Self {
        Self::from_config(&MapConfig::default())
    }
}

fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * (1u64 << zoom) as f64
}

/// Global pixel coordinates, y growing southwards.
fn mercator_pixels(lat: f64, lng: f64, zoom: u8) -> DVec2 {
    let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    let lng = lng.clamp(-180.0, 180.0);
    let scale = world_size(zoom);
    let x = (lng + 180.0) / 360.0 * scale;
    let y = (1.0 - lat.to_radians().tan().asinh() / PI) / 2.0 * scale;
    DVec2::new(x, y)
}
