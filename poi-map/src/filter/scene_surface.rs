use super::category::CategoryTag;
use super::marker_registry::MarkerId;
use super::point_store::Point;
use super::surface::{MapSurface, SurfaceError};
use crate::engine::assets::icons::MarkerIcons;
use crate::engine::scene::canvas::MapCanvas;
use crate::engine::scene::projection::MapProjection;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use constants::render_settings::MARKER_SIZE;
use std::collections::HashMap;

/// Draw order of point markers, above the canvas and below the centre pin.
pub const MARKER_Z: f32 = 1.0;

const MISSING_ICON_TINT: Color = Color::srgb(0.45, 0.45, 0.45);

/// Rendered point marker.
#[derive(Component, Debug, Clone)]
pub struct MapMarker {
    pub id: MarkerId,
    pub category: CategoryTag,
}

/// Entities spawned for each registry marker.
#[derive(Resource, Default, Debug)]
pub struct MarkerEntities(HashMap<MarkerId, Entity>);

impl MarkerEntities {
    pub fn get(&self, id: MarkerId) -> Option<Entity> {
        self.0.get(&id).copied()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Bevy-backed [`MapSurface`]: markers are sprite entities, detaching a
/// marker hides it.
#[derive(SystemParam)]
pub struct SceneSurface<'w, 's> {
    commands: Commands<'w, 's>,
    icons: Res<'w, MarkerIcons>,
    projection: Res<'w, MapProjection>,
    entities: ResMut<'w, MarkerEntities>,
    canvas: Query<'w, 's, (), With<MapCanvas>>,
}

impl SceneSurface<'_, '_> {
    fn marker_entity(&self, id: MarkerId) -> Result<Entity, SurfaceError> {
        if !self.is_ready() {
            return Err(SurfaceError::NotReady);
        }
        self.entities.get(id).ok_or(SurfaceError::UnknownMarker(id))
    }
}

impl MapSurface for SceneSurface<'_, '_> {
    fn is_ready(&self) -> bool {
        !self.canvas.is_empty()
    }

    fn add_marker(&mut self, id: MarkerId, point: &Point) -> Result<(), SurfaceError> {
        if !self.is_ready() {
            return Err(SurfaceError::NotReady);
        }

        let mut sprite = match self.icons.for_category(&point.category) {
            Some(icon) => Sprite::from_image(icon),
            None => Sprite::from_color(MISSING_ICON_TINT, Vec2::ONE),
        };
        sprite.custom_size = Some(Vec2::splat(MARKER_SIZE));

        let position = self.projection.to_world(point.lat, point.lng);
        let entity = self
            .commands
            .spawn((
                MapMarker {
                    id,
                    category: point.category.clone(),
                },
                Name::new(point.name.clone()),
                sprite,
                Transform::from_translation(position.extend(MARKER_Z)),
                Visibility::Inherited,
            ))
            .id();

        self.entities.0.insert(id, entity);
        Ok(())
    }

    fn set_marker_visible(&mut self, id: MarkerId, visible: bool) -> Result<(), SurfaceError> {
        let entity = self.marker_entity(id)?;
        let visibility = if visible {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        self.commands.entity(entity).insert(visibility);
        Ok(())
    }

    fn remove_marker(&mut self, id: MarkerId) -> Result<(), SurfaceError> {
        let entity = self.marker_entity(id)?;
        self.commands.entity(entity).despawn();
        self.entities.0.remove(&id);
        Ok(())
    }
}
