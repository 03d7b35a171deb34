use bevy::color::Color;

pub const MAP_BACKGROUND_COLOUR: Color = Color::srgb(0.93, 0.92, 0.89);
pub const MAP_GRID_COLOUR: Color = Color::srgba(0.55, 0.55, 0.55, 0.35);

/// Grid cells drawn on each side of the map centre.
pub const MAP_GRID_HALF_CELLS: u32 = 40;

/// Rendered marker size in world units.
pub const MARKER_SIZE: f32 = 32.0;
pub const PIN_SIZE: f32 = 40.0;

pub const BUTTON_ACTIVE_COLOUR: Color = Color::srgb(0.18, 0.42, 0.78);
pub const BUTTON_INACTIVE_COLOUR: Color = Color::srgb(0.22, 0.24, 0.28);
/// Hover and press tints keep the active/inactive hue distinct.
pub const BUTTON_ACTIVE_HOVER_COLOUR: Color = Color::srgb(0.24, 0.50, 0.88);
pub const BUTTON_ACTIVE_PRESSED_COLOUR: Color = Color::srgb(0.14, 0.34, 0.66);
pub const BUTTON_INACTIVE_HOVER_COLOUR: Color = Color::srgb(0.30, 0.32, 0.36);
pub const BUTTON_INACTIVE_PRESSED_COLOUR: Color = Color::srgb(0.18, 0.20, 0.24);

/// Wheel zoom limits for the camera transform scale.
pub const MIN_CAMERA_SCALE: f32 = 0.05;
pub const MAX_CAMERA_SCALE: f32 = 64.0;
