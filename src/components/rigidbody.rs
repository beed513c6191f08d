//! Arcade-style kinematic body.
//!
//! The [`RigidBody`] component stores velocity, acceleration and drag for an
//! entity, together with the [`Blocked`] flags written by the tile collision
//! pass. The integration rules follow classic arcade physics:
//!
//! - `velocity += (acceleration + gravity) * dt`, gravity only when
//!   `allow_gravity` is set;
//! - drag applies on an axis only while that axis has zero acceleration, and
//!   never reverses the sign of the velocity;
//! - each velocity component is clamped to `max_velocity`.
//!
//! Position integration and tile collision live in
//! [`movement`](crate::systems::movement::movement).

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Default per-axis speed limit, in world units per second.
pub const DEFAULT_MAX_VELOCITY: f32 = 10000.0;

/// Which sides of a body touched solid geometry during the last physics step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Blocked {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Blocked {
    pub fn clear(&mut self) {
        *self = Blocked::default();
    }

    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// Kinematic body integrated by the movement system.
///
/// # Example
/// ```ignore
/// let mut rb = RigidBody::new();
/// rb.set_acceleration_x(-100.0);
/// rb.set_drag_x(1800.0);
/// if rb.is_grounded() {
///     rb.set_velocity_y(-400.0);
/// }
/// ```
#[derive(Component, Clone, Debug)]
pub struct RigidBody {
    /// Current velocity in world units per second.
    pub velocity: Vector2,
    /// Acceleration in world units per second squared.
    pub acceleration: Vector2,
    /// Deceleration applied on axes with zero acceleration.
    pub drag: Vector2,
    /// Per-axis speed limit.
    pub max_velocity: Vector2,
    /// Whether world gravity affects this body.
    pub allow_gravity: bool,
    /// Contact flags, rewritten on every physics step.
    pub blocked: Blocked,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a RigidBody at rest, affected by gravity, with no drag.
    pub fn new() -> Self {
        Self {
            velocity: Vector2::zero(),
            acceleration: Vector2::zero(),
            drag: Vector2::zero(),
            max_velocity: Vector2::new(DEFAULT_MAX_VELOCITY, DEFAULT_MAX_VELOCITY),
            allow_gravity: true,
            blocked: Blocked::default(),
        }
    }

    /// Body that moves in a straight line, ignoring gravity (particles).
    pub fn floating(velocity: Vector2) -> Self {
        Self {
            velocity,
            allow_gravity: false,
            ..Self::new()
        }
    }

    pub fn set_acceleration_x(&mut self, ax: f32) {
        self.acceleration.x = ax;
    }

    pub fn set_drag_x(&mut self, drag: f32) {
        self.drag.x = drag;
    }

    pub fn set_velocity_y(&mut self, vy: f32) {
        self.velocity.y = vy;
    }

    /// Resting on a solid tile or on the bottom of the world.
    pub fn is_grounded(&self) -> bool {
        self.blocked.down
    }

    /// Advance the velocity by one step of `dt` seconds.
    pub fn integrate_velocity(&mut self, gravity: Vector2, dt: f32) {
        let g = if self.allow_gravity {
            gravity
        } else {
            Vector2::zero()
        };
        self.velocity.x = step_axis(
            self.velocity.x,
            self.acceleration.x,
            g.x,
            self.drag.x,
            self.max_velocity.x,
            dt,
        );
        self.velocity.y = step_axis(
            self.velocity.y,
            self.acceleration.y,
            g.y,
            self.drag.y,
            self.max_velocity.y,
            dt,
        );
    }
}

fn step_axis(v: f32, accel: f32, gravity: f32, drag: f32, max: f32, dt: f32) -> f32 {
    let mut v = v + gravity * dt;
    if accel != 0.0 {
        v += accel * dt;
    } else if drag > 0.0 {
        let d = drag * dt;
        if v - d > 0.0 {
            v -= d;
        } else if v + d < 0.0 {
            v += d;
        } else {
            v = 0.0;
        }
    }
    v.clamp(-max, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_rigidbody_new() {
        let rb = RigidBody::new();
        assert!(approx_eq(rb.velocity.x, 0.0));
        assert!(approx_eq(rb.velocity.y, 0.0));
        assert!(rb.allow_gravity);
        assert!(!rb.blocked.any());
        assert!(!rb.is_grounded());
    }

    #[test]
    fn test_floating_ignores_gravity() {
        let mut rb = RigidBody::floating(Vector2::new(50.0, 0.0));
        rb.integrate_velocity(Vector2::new(0.0, 1500.0), 0.5);
        assert!(approx_eq(rb.velocity.x, 50.0));
        assert!(approx_eq(rb.velocity.y, 0.0));
    }

    #[test]
    fn test_gravity_and_acceleration_add_up() {
        let mut rb = RigidBody::new();
        rb.acceleration.y = 20.0;
        rb.integrate_velocity(Vector2::new(0.0, 100.0), 0.5);
        assert!(approx_eq(rb.velocity.y, 60.0));
    }

    #[test]
    fn test_acceleration_suppresses_drag() {
        let mut rb = RigidBody::new();
        rb.velocity.x = 10.0;
        rb.set_acceleration_x(-100.0);
        rb.set_drag_x(1800.0);
        rb.integrate_velocity(Vector2::zero(), 0.1);
        assert!(approx_eq(rb.velocity.x, 0.0));
        rb.integrate_velocity(Vector2::zero(), 0.1);
        assert!(approx_eq(rb.velocity.x, -10.0));
    }

    #[test]
    fn test_drag_slows_down() {
        let mut rb = RigidBody::new();
        rb.velocity.x = -100.0;
        rb.set_drag_x(500.0);
        rb.integrate_velocity(Vector2::zero(), 0.1);
        assert!(approx_eq(rb.velocity.x, -50.0));
    }

    #[test]
    fn test_drag_never_reverses_sign() {
        let mut rb = RigidBody::new();
        rb.velocity.x = 30.0;
        rb.set_drag_x(1800.0);
        rb.integrate_velocity(Vector2::zero(), 0.1);
        assert!(approx_eq(rb.velocity.x, 0.0));

        rb.velocity.x = -30.0;
        rb.integrate_velocity(Vector2::zero(), 0.1);
        assert!(approx_eq(rb.velocity.x, 0.0));
    }

    #[test]
    fn test_max_velocity_clamp() {
        let mut rb = RigidBody::new();
        rb.max_velocity = Vector2::new(100.0, 200.0);
        rb.set_acceleration_x(10000.0);
        rb.integrate_velocity(Vector2::new(0.0, 10000.0), 1.0);
        assert!(approx_eq(rb.velocity.x, 100.0));
        assert!(approx_eq(rb.velocity.y, 200.0));
    }

    #[test]
    fn test_set_velocity_y_for_jump() {
        let mut rb = RigidBody::new();
        rb.set_velocity_y(-400.0);
        assert!(approx_eq(rb.velocity.y, -400.0));
    }

    #[test]
    fn test_blocked_clear() {
        let mut blocked = Blocked {
            down: true,
            left: true,
            ..Default::default()
        };
        assert!(blocked.any());
        blocked.clear();
        assert_eq!(blocked, Blocked::default());
    }
}
