use super::category::CategoryTag;
use super::controller::{FilterController, ToggleOutcome};
use super::point_store::Point;
use super::scene_surface::SceneSurface;
use super::surface::MapSurface;
use crate::engine::loading::points_loader::{PointsFetchFailed, PointsFetched};
use crate::rpc::web_rpc::WebRpcInterface;
use crate::ui::filter_buttons::ButtonAffordances;
use bevy::prelude::*;

/// Request to flip one category's visibility.
#[derive(Event, Debug, Clone)]
pub struct CategoryToggleEvent {
    pub category: CategoryTag,
    pub source: ToggleSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleSource {
    Button,
    Rpc,
    Keyboard,
}

/// Wire tags of the currently visible categories.
pub fn visible_tags(controller: &FilterController) -> Vec<String> {
    controller
        .visibility()
        .iter()
        .map(|c| c.as_tag().to_string())
        .collect()
}

// Materialize fetched points once the map surface exists.
pub fn populate_on_fetch(
    mut fetched: EventReader<PointsFetched>,
    mut pending: Local<Option<Vec<Point>>>,
    mut controller: ResMut<FilterController>,
    mut surface: SceneSurface,
    mut buttons: ButtonAffordances,
    mut rpc: ResMut<WebRpcInterface>,
) {
    for event in fetched.read() {
        *pending = Some(event.points.clone());
    }

    if pending.is_none() {
        return;
    }
    if !surface.is_ready() {
        debug!("Points fetched before the map surface exists, deferring markers");
        return;
    }
    let Some(points) = pending.take() else {
        return;
    };

    let count = controller.populate(points, &mut surface, &mut buttons);
    if controller.points().is_empty() {
        warn!("Points endpoint returned an empty list");
    }
    let categories: Vec<String> = controller
        .points()
        .categories()
        .iter()
        .map(|c| c.as_tag().to_string())
        .collect();
    rpc.send_notification(
        "points_loaded",
        serde_json::json!({
            "count": count,
            "categories": categories,
        }),
    );
}

pub fn report_fetch_failure(
    mut failures: EventReader<PointsFetchFailed>,
    mut rpc: ResMut<WebRpcInterface>,
) {
    for failure in failures.read() {
        rpc.send_notification(
            "points_load_failed",
            serde_json::json!({ "error": failure.error.to_string() }),
        );
    }
}

/// Apply toggle requests in arrival order, each one to completion.
pub fn apply_category_toggles(
    mut events: EventReader<CategoryToggleEvent>,
    mut controller: ResMut<FilterController>,
    mut surface: SceneSurface,
    mut buttons: ButtonAffordances,
    mut rpc: ResMut<WebRpcInterface>,
) {
    for event in events.read() {
        let outcome = controller.toggle(&event.category, &mut surface, &mut buttons);
        let ToggleOutcome::Applied {
            visible,
            markers_changed,
        } = outcome
        else {
            continue;
        };

        info!(
            "{} {} via {:?} ({} markers)",
            event.category,
            if visible { "shown" } else { "hidden" },
            event.source,
            markers_changed
        );
        if controller.visibility().is_empty() {
            info!("Every category is hidden");
        }
        rpc.send_notification(
            "visibility_changed",
            serde_json::json!({
                "category": event.category.as_tag(),
                "visible": visible,
                "visible_categories": visible_tags(&controller),
            }),
        );
    }
}

/// Number keys 1-4 toggle the filter buttons in order (native only).
pub fn keyboard_category_toggles(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut toggles: EventWriter<CategoryToggleEvent>,
) {
    const KEYS: [KeyCode; 4] = [
        KeyCode::Digit1,
        KeyCode::Digit2,
        KeyCode::Digit3,
        KeyCode::Digit4,
    ];

    for (key, category) in KEYS.into_iter().zip(CategoryTag::KNOWN) {
        if keyboard.just_pressed(key) {
            toggles.write(CategoryToggleEvent {
                category,
                source: ToggleSource::Keyboard,
            });
        }
    }
}
