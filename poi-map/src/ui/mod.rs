//! On-canvas UI: the category filter bar.

/// Filter buttons, their click handling and affordance rendering.
pub mod filter_buttons;

use bevy::prelude::*;
use filter_buttons::{filter_button_interaction, spawn_filter_buttons};

pub struct FilterButtonsPlugin;

impl Plugin for FilterButtonsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_filter_buttons)
            .add_systems(Update, filter_button_interaction);
    }
}
