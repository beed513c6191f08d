//! Screen-space position component.
//!
//! The [`ScreenPosition`] component stores an entity's position in render
//! target pixels. UI labels use it so they do not move with the camera.
//!
//! For world-space entities, see
//! [`MapPosition`](super::mapposition::MapPosition).

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Copy, Debug, Default)]
pub struct ScreenPosition {
    pub pos: Vector2,
}

impl ScreenPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}
