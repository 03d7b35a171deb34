use super::category::CategoryTag;
use super::point_store::{Point, PointId};
use super::surface::MapSurface;
use bevy::log::warn;
use std::collections::HashMap;

/// Registry-allocated identifier of a rendered marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(pub u32);

/// One rendered marker, with a copy of its point's category for filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerHandle {
    pub id: MarkerId,
    pub point: PointId,
    pub category: CategoryTag,
}

/// Owns every marker handle and indexes them by category.
#[derive(Debug, Default)]
pub struct MarkerRegistry {
    handles: Vec<MarkerHandle>,
    by_category: HashMap<CategoryTag, Vec<MarkerId>>,
    next_id: u32,
}

impl MarkerRegistry {
    /// Create and attach one marker per point.
    ///
    /// Handles are recorded even when the surface rejects a marker, so the
    /// registry always mirrors the point list.
    pub fn materialize<'a>(
        &mut self,
        points: impl IntoIterator<Item = (PointId, &'a Point)>,
        surface: &mut impl MapSurface,
    ) -> Vec<MarkerHandle> {
        let mut created = Vec::new();

        for (point_id, point) in points {
            let id = MarkerId(self.next_id);
            self.next_id += 1;

            if let Err(err) = surface.add_marker(id, point) {
                warn!("Marker for '{}' not attached: {}", point.name, err);
            }

            let handle = MarkerHandle {
                id,
                point: point_id,
                category: point.category.clone(),
            };
            self.by_category
                .entry(handle.category.clone())
                .or_default()
                .push(id);
            self.handles.push(handle.clone());
            created.push(handle);
        }

        created
    }

    /// Attach or detach every marker of `category`.
    /// Returns how many markers were addressed.
    pub fn set_visible(
        &self,
        category: &CategoryTag,
        visible: bool,
        surface: &mut impl MapSurface,
    ) -> usize {
        let Some(ids) = self.by_category.get(category) else {
            return 0;
        };

        for id in ids {
            if let Err(err) = surface.set_marker_visible(*id, visible) {
                warn!("Marker {:?} ({}) visibility not applied: {}", id, category, err);
            }
        }
        ids.len()
    }

    /// Detach and forget every marker.
    pub fn clear(&mut self, surface: &mut impl MapSurface) {
        for handle in self.handles.drain(..) {
            if let Err(err) = surface.remove_marker(handle.id) {
                warn!("Marker {:?} not removed: {}", handle.id, err);
            }
        }
        self.by_category.clear();
    }

    #[cfg(test)]
    pub fn handles(&self) -> &[MarkerHandle] {
        &self.handles
    }

    pub fn count_for(&self, category: &CategoryTag) -> usize {
        self.by_category.get(category).map_or(0, Vec::len)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}
