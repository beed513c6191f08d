//! Time update system.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per frame, applying `time_scale` to the provided delta.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Advance `WorldTime` by the unscaled frame delta `dt` (seconds).
pub fn update_world_time(world: &mut World, dt: f32) {
    world.resource_mut::<WorldTime>().advance(dt);
}
