//! Shared 2D camera resources.
//!
//! [`Camera2DRes`] wraps raylib's [`Camera2D`] so that systems agree on a
//! single world/screen transform. [`CameraFollow`] holds the follow rules the
//! play scene configures: a dead zone around the view centre, a lerp factor
//! per axis and the world bounds the view may not leave.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera2D, Rectangle, Vector2};

/// ECS resource that holds the active 2D camera parameters.
#[derive(Resource)]
pub struct Camera2DRes(pub Camera2D);

impl Camera2DRes {
    /// Camera looking at `target`, centred in a view of `view_w` × `view_h`
    /// render pixels.
    pub fn centered_on(target: Vector2, view_w: f32, view_h: f32, zoom: f32) -> Self {
        Camera2DRes(Camera2D {
            offset: Vector2::new(view_w * 0.5, view_h * 0.5),
            target,
            rotation: 0.0,
            zoom,
        })
    }
}

/// Follow parameters for the camera.
#[derive(Resource, Debug, Clone, Copy)]
pub struct CameraFollow {
    /// Dead zone size in world units, centred on the view centre.
    pub deadzone: Vector2,
    /// Fraction of the remaining distance covered per frame, per axis.
    pub lerp: Vector2,
    /// World rectangle the view is kept inside.
    pub bounds: Rectangle,
}

impl CameraFollow {
    pub fn new(deadzone: Vector2, lerp: Vector2, bounds: Rectangle) -> Self {
        Self {
            deadzone,
            lerp,
            bounds,
        }
    }

    /// Next camera target given the current one and the followed point.
    ///
    /// `view` is the visible area in world units (render size / zoom).
    pub fn follow_step(&self, current: Vector2, followed: Vector2, view: Vector2) -> Vector2 {
        let x = follow_axis(current.x, followed.x, self.deadzone.x, self.lerp.x);
        let y = follow_axis(current.y, followed.y, self.deadzone.y, self.lerp.y);
        Vector2::new(
            clamp_axis(x, self.bounds.x, self.bounds.width, view.x),
            clamp_axis(y, self.bounds.y, self.bounds.height, view.y),
        )
    }
}

fn follow_axis(current: f32, followed: f32, deadzone: f32, lerp: f32) -> f32 {
    let half = deadzone * 0.5;
    let delta = followed - current;
    let excess = if delta > half {
        delta - half
    } else if delta < -half {
        delta + half
    } else {
        0.0
    };
    current + excess * lerp
}

/// Keep a view of size `view` centred on `center` inside `[min, min + size]`;
/// centre it when the bounds are smaller than the view.
fn clamp_axis(center: f32, min: f32, size: f32, view: f32) -> f32 {
    if size <= view {
        return min + size * 0.5;
    }
    let half = view * 0.5;
    center.clamp(min + half, min + size - half)
}
