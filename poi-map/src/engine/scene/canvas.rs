use crate::config::MapConfig;
use crate::engine::assets::icons::MarkerIcons;
use crate::engine::scene::projection::MapProjection;
use bevy::prelude::*;
use constants::map::TILE_SIZE;
use constants::render_settings::{
    MAP_BACKGROUND_COLOUR, MAP_GRID_COLOUR, MAP_GRID_HALF_CELLS, PIN_SIZE,
};

const CANVAS_Z: f32 = 0.0;
const PIN_Z: f32 = 2.0;

/// Background plane that the markers are drawn on. Its presence marks the
/// surface as ready.
#[derive(Component)]
pub struct MapCanvas;

/// Fixed marker at the map centre, outside the category system.
#[derive(Component)]
pub struct CenterPin;

/// Spawn camera, canvas and centre pin at the configured centre and zoom.
pub fn spawn_map_canvas(
    mut commands: Commands,
    config: Res<MapConfig>,
    icons: Res<MarkerIcons>,
) {
    let projection = MapProjection::from_config(&config);
    let extent = TILE_SIZE as f32 * MAP_GRID_HALF_CELLS as f32 * 2.0;

    commands.spawn((Camera2d, Name::new("MapCamera")));

    commands.spawn((
        MapCanvas,
        Name::new("MapCanvas"),
        Sprite::from_color(MAP_BACKGROUND_COLOUR, Vec2::splat(extent)),
        Transform::from_xyz(0.0, 0.0, CANVAS_Z),
    ));

    let mut pin = Sprite::from_image(icons.pin.clone());
    pin.custom_size = Some(Vec2::splat(PIN_SIZE));
    commands.spawn((
        CenterPin,
        Name::new("CenterPin"),
        pin,
        Transform::from_translation(
            projection
                .to_world(config.center_lat, config.center_lng)
                .extend(PIN_Z),
        ),
    ));

    info!(
        "Map centred at ({}, {}) zoom {}",
        config.center_lat,
        config.center_lng,
        projection.zoom()
    );
    commands.insert_resource(projection);
}

/// Reference grid aligned to the projection's tile size.
pub fn draw_map_grid(mut gizmos: Gizmos) {
    let cell = TILE_SIZE as f32;
    let half = MAP_GRID_HALF_CELLS as i32;
    let extent = cell * half as f32;

    for i in -half..=half {
        let offset = i as f32 * cell;
        gizmos.line_2d(
            Vec2::new(offset, -extent),
            Vec2::new(offset, extent),
            MAP_GRID_COLOUR,
        );
        gizmos.line_2d(
            Vec2::new(-extent, offset),
            Vec2::new(extent, offset),
            MAP_GRID_COLOUR,
        );
    }
}
