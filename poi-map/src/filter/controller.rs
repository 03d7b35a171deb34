use super::category::CategoryTag;
use super::marker_registry::MarkerRegistry;
use super::point_store::{Point, PointStore};
use super::surface::{FilterAffordance, MapSurface};
use super::visibility::{VisibilityCommand, VisibilityState};
use bevy::log::{debug, info};
use bevy::prelude::Resource;

/// Result of a toggle request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// No points have been materialized yet; nothing to filter.
    Ignored,
    Applied {
        visible: bool,
        /// Markers whose attachment was changed.
        markers_changed: usize,
    },
}

/// Owns the fetched points, their markers and the visible-category set, and
/// keeps surface and buttons in step with that set.
///
/// Every method takes `&mut self` and runs to completion, so a toggle's
/// read, commit and apply steps cannot interleave with another toggle.
#[derive(Resource, Debug, Default)]
pub struct FilterController {
    store: PointStore,
    registry: MarkerRegistry,
    visibility: VisibilityState,
    populated: bool,
}

impl FilterController {
    /// Materialize `points` and show every category present in them.
    ///
    /// Replaces any earlier population; visibility always restarts at
    /// all-visible.
    pub fn populate(
        &mut self,
        points: Vec<Point>,
        surface: &mut impl MapSurface,
        affordance: &mut impl FilterAffordance,
    ) -> usize {
        self.registry.clear(surface);
        self.store.load(points);
        self.registry.materialize(self.store.iter(), surface);
        self.visibility = VisibilityState::from_points(self.store.points());
        self.populated = true;

        let commands = self.visibility.sync_affordances();
        self.apply(commands, surface, affordance);

        info!(
            "Materialized {} markers across {} categories",
            self.registry.len(),
            self.visibility.len()
        );
        self.registry.len()
    }

    /// Flip visibility of `category`.
    pub fn toggle(
        &mut self,
        category: &CategoryTag,
        surface: &mut impl MapSurface,
        affordance: &mut impl FilterAffordance,
    ) -> ToggleOutcome {
        if !self.populated {
            debug!("Toggle of {} ignored, no markers materialized", category);
            return ToggleOutcome::Ignored;
        }

        let (next, commands) = self.visibility.toggle(category);
        self.visibility = next;
        let markers_changed = self.apply(commands, surface, affordance);

        ToggleOutcome::Applied {
            visible: self.visibility.contains(category),
            markers_changed,
        }
    }

    fn apply(
        &self,
        commands: Vec<VisibilityCommand>,
        surface: &mut impl MapSurface,
        affordance: &mut impl FilterAffordance,
    ) -> usize {
        let mut markers_changed = 0;
        for command in commands {
            match command {
                VisibilityCommand::ShowMarkers(category) => {
                    markers_changed += self.registry.set_visible(&category, true, surface);
                }
                VisibilityCommand::HideMarkers(category) => {
                    markers_changed += self.registry.set_visible(&category, false, surface);
                }
                VisibilityCommand::SetAffordance { category, active } => {
                    affordance.set_active(&category, active);
                }
            }
        }
        markers_changed
    }

    pub fn is_populated(&self) -> bool {
        self.populated
    }

    pub fn is_visible(&self, category: &CategoryTag) -> bool {
        self.visibility.contains(category)
    }

    pub fn visibility(&self) -> &VisibilityState {
        &self.visibility
    }

    pub fn points(&self) -> &PointStore {
        &self.store
    }

    pub fn markers(&self) -> &MarkerRegistry {
        &self.registry
    }
}
