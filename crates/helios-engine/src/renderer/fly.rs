use glam::Vec3;

use crate::input::queue::{InputEvent, KeyCode};
use crate::renderer::camera::Camera;

/// Free-fly camera translation from held-key state.
///
/// Six independent flags, toggled by key edge events rather than polled
/// from raw hardware state. Each frame, every active flag translates the
/// camera a fixed distance along its axis; simultaneous flags compose
/// additively. Orientation is untouched (see `Camera` ownership split).
pub struct FlyController {
    /// Translation per frame, world units.
    pub speed: f32,
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
    up: bool,
    down: bool,
}

impl FlyController {
    pub fn new() -> Self {
        Self {
            speed: 10.0,
            forward: false,
            backward: false,
            left: false,
            right: false,
            up: false,
            down: false,
        }
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Update flag state from a key edge event. Other events are ignored.
    pub fn handle(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown { key } => self.set_key(*key, true),
            InputEvent::KeyUp { key } => self.set_key(*key, false),
            _ => {}
        }
    }

    fn set_key(&mut self, key: KeyCode, pressed: bool) {
        match key {
            KeyCode::KeyW => self.forward = pressed,
            KeyCode::KeyS => self.backward = pressed,
            KeyCode::KeyA => self.left = pressed,
            KeyCode::KeyD => self.right = pressed,
            KeyCode::Space => self.up = pressed,
            KeyCode::ShiftLeft => self.down = pressed,
            KeyCode::Other(_) => {}
        }
    }

    /// Whether any movement flag is held.
    pub fn is_moving(&self) -> bool {
        self.forward || self.backward || self.left || self.right || self.up || self.down
    }

    /// Apply one frame of translation to the camera.
    pub fn update(&self, camera: &mut Camera) {
        let direction = camera.forward();
        // up × forward points to the camera's left
        let side = Vec3::Y.cross(direction).normalize();

        if self.forward {
            camera.position += direction * self.speed;
        }
        if self.backward {
            camera.position -= direction * self.speed;
        }
        if self.left {
            camera.position += side * self.speed;
        }
        if self.right {
            camera.position -= side * self.speed;
        }
        if self.up {
            camera.position.y += self.speed;
        }
        if self.down {
            camera.position.y -= self.speed;
        }
    }
}

impl Default for FlyController {
    fn default() -> Self {
        Self::new()
    }
}
