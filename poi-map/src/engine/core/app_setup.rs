use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use crate::config::MapConfig;
use crate::engine::assets::icons::{MarkerIcons, load_marker_icons};
use crate::engine::assets::point_list::PointList;
use crate::engine::camera::map_camera::{MapCamera, camera_controller};
use crate::engine::core::app_state::{AppState, announce_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::points_loader::{PointsLoader, poll_fetch, start_fetch};
use crate::engine::scene::canvas::{draw_map_grid, spawn_map_canvas};
use crate::engine::scene::projection::MapProjection;
use crate::filter::FilterPlugin;
use crate::rpc::web_rpc::WebRpcPlugin;
use crate::ui::FilterButtonsPlugin;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(JsonAssetPlugin::<PointList>::new(&["json"]))
        .init_state::<AppState>()
        .add_plugins(WebRpcPlugin)
        .add_plugins(FilterPlugin)
        .add_plugins(FilterButtonsPlugin);

    // Startup systems replace the icon and projection placeholders.
    app.init_resource::<MapConfig>()
        .init_resource::<MarkerIcons>()
        .init_resource::<MapProjection>()
        .init_resource::<MapCamera>()
        .init_resource::<PointsLoader>();

    app.add_systems(
        Startup,
        (load_marker_icons, spawn_map_canvas, start_fetch).chain(),
    )
    .add_systems(Update, poll_fetch.run_if(in_state(AppState::Loading)))
    .add_systems(Update, (camera_controller, draw_map_grid))
    .add_systems(OnEnter(AppState::Running), announce_running);

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    // Served builds carry no .meta files next to the JSON and icons.
    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
