use super::category::CategoryTag;
use super::marker_registry::MarkerId;
use super::point_store::Point;
use thiserror::Error;

/// Failures reported by a rendering surface.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("map surface is not ready")]
    NotReady,

    #[error("marker {0:?} is not known to the surface")]
    UnknownMarker(MarkerId),
}

/// Rendering surface that owns the drawn markers.
///
/// Attach/detach are external calls; callers keep their own bookkeeping
/// regardless of the returned result.
pub trait MapSurface {
    fn is_ready(&self) -> bool;

    /// Create a marker for `point` and attach it (visible).
    fn add_marker(&mut self, id: MarkerId, point: &Point) -> Result<(), SurfaceError>;

    fn set_marker_visible(&mut self, id: MarkerId, visible: bool) -> Result<(), SurfaceError>;

    fn remove_marker(&mut self, id: MarkerId) -> Result<(), SurfaceError>;
}

/// Active/inactive look of the per-category filter buttons.
pub trait FilterAffordance {
    /// Categories without a button are ignored.
    fn set_active(&mut self, category: &CategoryTag, active: bool);
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use std::collections::{BTreeMap, HashMap};

    #[derive(Debug, Clone, PartialEq)]
    pub enum SurfaceCall {
        Add(MarkerId),
        SetVisible(MarkerId, bool),
        Remove(MarkerId),
    }

    /// In-memory surface recording every call it receives.
    #[derive(Debug)]
    pub struct RecordingSurface {
        pub ready: bool,
        pub attached: HashMap<MarkerId, (CategoryTag, bool)>,
        pub calls: Vec<SurfaceCall>,
    }

    impl Default for RecordingSurface {
        fn default() -> Self {
            Self {
                ready: true,
                attached: HashMap::new(),
                calls: Vec::new(),
            }
        }
    }

    impl RecordingSurface {
        pub fn not_ready() -> Self {
            Self {
                ready: false,
                ..Self::default()
            }
        }

        pub fn visible_count(&self) -> usize {
            self.attached.values().filter(|(_, visible)| *visible).count()
        }

        pub fn visible_count_for(&self, category: &CategoryTag) -> usize {
            self.attached
                .values()
                .filter(|(c, visible)| c == category && *visible)
                .count()
        }

        pub fn all_visible_for(&self, category: &CategoryTag) -> bool {
            self.attached
                .values()
                .filter(|(c, _)| c == category)
                .all(|(_, visible)| *visible)
        }

        pub fn visibility_snapshot(&self) -> BTreeMap<MarkerId, bool> {
            self.attached
                .iter()
                .map(|(id, (_, visible))| (*id, *visible))
                .collect()
        }
    }

    impl MapSurface for RecordingSurface {
        fn is_ready(&self) -> bool {
            self.ready
        }

        fn add_marker(&mut self, id: MarkerId, point: &Point) -> Result<(), SurfaceError> {
            if !self.ready {
                return Err(SurfaceError::NotReady);
            }
            self.calls.push(SurfaceCall::Add(id));
            self.attached.insert(id, (point.category.clone(), true));
            Ok(())
        }

        fn set_marker_visible(&mut self, id: MarkerId, visible: bool) -> Result<(), SurfaceError> {
            if !self.ready {
                return Err(SurfaceError::NotReady);
            }
            self.calls.push(SurfaceCall::SetVisible(id, visible));
            let entry = self
                .attached
                .get_mut(&id)
                .ok_or(SurfaceError::UnknownMarker(id))?;
            entry.1 = visible;
            Ok(())
        }

        fn remove_marker(&mut self, id: MarkerId) -> Result<(), SurfaceError> {
            if !self.ready {
                return Err(SurfaceError::NotReady);
            }
            self.calls.push(SurfaceCall::Remove(id));
            self.attached
                .remove(&id)
                .map(|_| ())
                .ok_or(SurfaceError::UnknownMarker(id))
        }
    }

    /// Button affordances for the known categories.
    #[derive(Debug, Default)]
    pub struct RecordingButtons {
        pub active: BTreeMap<CategoryTag, bool>,
    }

    impl RecordingButtons {
        pub fn new() -> Self {
            Self {
                active: CategoryTag::KNOWN.into_iter().map(|c| (c, false)).collect(),
            }
        }

        pub fn is_active(&self, category: &CategoryTag) -> bool {
            self.active.get(category).copied().unwrap_or(false)
        }
    }

    impl FilterAffordance for RecordingButtons {
        fn set_active(&mut self, category: &CategoryTag, active: bool) {
            if let Some(slot) = self.active.get_mut(category) {
                *slot = active;
            }
        }
    }
}
