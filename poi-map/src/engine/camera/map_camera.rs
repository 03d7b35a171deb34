use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use constants::render_settings::{MAX_CAMERA_SCALE, MIN_CAMERA_SCALE};

/// Pan/zoom state of the 2D map camera.
#[derive(Resource, Debug, Clone)]
pub struct MapCamera {
    pub focus_point: Vec2,
    pub scale: f32,
    pub zoom_step: f32,
    pub keyboard_speed: f32,
}

impl Default for MapCamera {
    fn default() -> Self {
        Self {
            focus_point: Vec2::ZERO,
            scale: 1.0,
            zoom_step: 0.1,
            keyboard_speed: 600.0,
        }
    }
}

impl MapCamera {
    /// Apply accumulated wheel lines; positive zooms in.
    pub fn zoom_by(&mut self, lines: f32) {
        let factor = (1.0 - self.zoom_step).powf(lines);
        self.scale = (self.scale * factor).clamp(MIN_CAMERA_SCALE, MAX_CAMERA_SCALE);
    }

    /// Drag the map by a screen-space delta.
    pub fn pan_by_screen(&mut self, delta: Vec2) {
        // Screen y grows downwards, world y upwards.
        self.focus_point += Vec2::new(-delta.x, delta.y) * self.scale;
    }
}

pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera2d>>,
    mut map_camera: ResMut<MapCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    keyboard: Res<ButtonInput<KeyCode>>,
    interactions: Query<&Interaction>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    // Clicks on UI buttons must not drag the map.
    let over_ui = interactions.iter().any(|i| *i != Interaction::None);
    if mouse_button.pressed(MouseButton::Left) && !over_ui && mouse_delta != Vec2::ZERO {
        map_camera.pan_by_screen(mouse_delta);
    }

    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }
    if scroll_accum.abs() > f32::EPSILON {
        map_camera.zoom_by(scroll_accum);
    }

    let mut move_input = Vec2::ZERO;
    if keyboard.pressed(KeyCode::KeyW) {
        move_input.y += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) {
        move_input.y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        move_input.x += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyA) {
        move_input.x -= 1.0;
    }
    if move_input != Vec2::ZERO {
        let mut speed = map_camera.keyboard_speed * map_camera.scale;
        if keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]) {
            speed *= 3.5;
        }
        map_camera.focus_point += move_input.normalize() * speed * time.delta_secs();
    }

    let target = map_camera.focus_point.extend(camera_transform.translation.z);
    let lerp_speed = (12.0 * time.delta_secs()).min(1.0);
    camera_transform.translation = camera_transform.translation.lerp(target, lerp_speed);
    camera_transform.scale = Vec3::splat(map_camera.scale);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_is_clamped() {
        let mut camera = MapCamera::default();
        camera.zoom_by(1000.0);
        assert_eq!(camera.scale, MIN_CAMERA_SCALE);
        camera.zoom_by(-1000.0);
        assert_eq!(camera.scale, MAX_CAMERA_SCALE);
    }

    #[test]
    fn dragging_right_moves_focus_left() {
        let mut camera = MapCamera::default();
        camera.scale = 2.0;
        camera.pan_by_screen(Vec2::new(10.0, 5.0));
        assert_eq!(camera.focus_point, Vec2::new(-20.0, 10.0));
    }
}
