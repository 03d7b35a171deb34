//! Category filtering of point markers.
//!
//! The state machine (`point_store`, `marker_registry`, `visibility`,
//! `controller`) is plain Rust and talks to the engine only through the
//! [`surface::MapSurface`] and [`surface::FilterAffordance`] traits.
//! `scene_surface` and `systems` bind it to Bevy.

pub mod category;
pub mod controller;
pub mod marker_registry;
pub mod point_store;
pub mod scene_surface;
pub mod surface;
pub mod systems;
pub mod visibility;

use crate::engine::loading::points_loader::{PointsFetchFailed, PointsFetched};
use bevy::prelude::*;
use controller::FilterController;
use scene_surface::MarkerEntities;
use systems::{
    CategoryToggleEvent, apply_category_toggles, populate_on_fetch, report_fetch_failure,
};

pub struct FilterPlugin;

impl Plugin for FilterPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FilterController>()
            .init_resource::<MarkerEntities>()
            .add_event::<CategoryToggleEvent>()
            .add_event::<PointsFetched>()
            .add_event::<PointsFetchFailed>()
            .add_systems(
                Update,
                (populate_on_fetch, report_fetch_failure, apply_category_toggles).chain(),
            );

        #[cfg(not(target_arch = "wasm32"))]
        app.add_systems(Update, systems::keyboard_category_toggles);
    }
}
