use bevy_ecs::prelude::Resource;

/// Simulation clock. `delta` is the scaled duration of the current frame in
/// seconds.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    /// Advance the clock by an unscaled frame delta.
    pub fn advance(&mut self, dt: f32) {
        let scaled_dt = dt * self.time_scale;
        self.elapsed += scaled_dt;
        self.delta = scaled_dt;
        self.frame_count += 1;
    }
}
