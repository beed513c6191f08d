use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

/// World-wide physics settings for the current scene.
#[derive(Resource, Debug, Clone, Copy)]
pub struct PhysicsWorld {
    /// Acceleration applied to every body with `allow_gravity`.
    pub gravity: Vector2,
}

impl PhysicsWorld {
    pub fn with_gravity_y(gravity: f32) -> Self {
        Self {
            gravity: Vector2 { x: 0.0, y: gravity },
        }
    }
}
