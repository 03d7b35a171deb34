//! 2D map camera with drag panning, wheel zoom and WASD movement.
pub mod map_camera;
