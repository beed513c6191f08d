//! Time-to-live component for automatic entity despawning.
//!
//! The [`Ttl`] component counts down scaled time each frame; when the
//! remaining time reaches zero the entity is despawned by
//! [`crate::systems::ttl::ttl_system`]. Walk particles are the main user.

use bevy_ecs::prelude::Component;

#[derive(Component, Debug, Clone, Copy)]
pub struct Ttl {
    /// Remaining time in seconds before despawn.
    pub remaining: f32,
}

impl Ttl {
    pub fn new(seconds: f32) -> Self {
        Ttl { remaining: seconds }
    }

    /// Count down by `dt` seconds. Returns true once expired.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        self.remaining <= 0.0
    }
}
