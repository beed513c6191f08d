//! Physics step: velocity integration and tile collision.
//!
//! Every [`RigidBody`] gets its velocity advanced by acceleration, gravity and
//! drag (see [`RigidBody::integrate_velocity`]) and its [`MapPosition`]
//! integrated by `velocity * dt`.
//!
//! Bodies tagged [`CollidesWithTiles`] that carry a [`BoxCollider`] are moved
//! axis by axis in sub-steps no longer than half a tile. After each sub-step
//! the collider is pushed out of any solid tile of the [`Level`] and kept
//! inside the level bounds; the blocked velocity component is zeroed and the
//! matching [`Blocked`] flag set. Flags are cleared at the start of every step,
//! so `blocked.down` means "resting on something this frame".

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::player::CollidesWithTiles;
use crate::components::rigidbody::{Blocked, RigidBody};
use crate::resources::level::Level;
use crate::resources::physicsworld::PhysicsWorld;
use crate::resources::worldtime::WorldTime;

const EPS: f32 = 1e-3;

pub fn movement(
    mut query: Query<(
        &mut MapPosition,
        &mut RigidBody,
        Option<&BoxCollider>,
        Has<CollidesWithTiles>,
    )>,
    time: Res<WorldTime>,
    physics: Option<Res<PhysicsWorld>>,
    level: Option<Res<Level>>,
) {
    let dt = time.delta;
    if dt <= 0.0 {
        return;
    }
    let gravity = physics.map(|p| p.gravity).unwrap_or(Vector2::zero());

    for (mut position, mut body, collider, collides) in query.iter_mut() {
        body.integrate_velocity(gravity, dt);
        match (collider, level.as_deref()) {
            (Some(collider), Some(level)) if collides => {
                step_against_level(&mut position.pos, &mut body, collider, level, dt);
            }
            _ => {
                position.pos = position.pos + body.velocity.scale_by(dt);
            }
        }
    }
}

/// Move a body by `velocity * dt`, resolving collisions with solid tiles and
/// the level bounds.
pub fn step_against_level(
    pos: &mut Vector2,
    body: &mut RigidBody,
    collider: &BoxCollider,
    level: &Level,
    dt: f32,
) {
    body.blocked.clear();
    let tw = level.tile_width as f32;
    let th = level.tile_height as f32;
    let delta = body.velocity.scale_by(dt);
    let max_step = tw.min(th) * 0.5;
    let steps = (delta.x.abs().max(delta.y.abs()) / max_step).ceil().max(1.0) as u32;
    let step = delta.scale_by(1.0 / steps as f32);

    let mut move_x = step.x != 0.0;
    let mut move_y = step.y != 0.0;
    for _ in 0..steps {
        if move_x {
            pos.x += step.x;
            if resolve_x(pos, step.x, collider, level, &mut body.blocked) {
                body.velocity.x = 0.0;
                move_x = false;
            }
        }
        if move_y {
            pos.y += step.y;
            if resolve_y(pos, step.y, collider, level, &mut body.blocked) {
                body.velocity.y = 0.0;
                move_y = false;
            }
        }
    }

    if !body.blocked.down && body.velocity.y >= 0.0 && resting_on_ground(*pos, collider, level) {
        body.blocked.down = true;
        body.velocity.y = 0.0;
    }
}

fn tile_span(min: f32, max: f32, size: f32) -> (i32, i32) {
    (
        (min / size).floor() as i32,
        ((max - EPS) / size).floor() as i32,
    )
}

/// Push out horizontally. Returns true when the body was stopped.
fn resolve_x(
    pos: &mut Vector2,
    dx: f32,
    collider: &BoxCollider,
    level: &Level,
    blocked: &mut Blocked,
) -> bool {
    let tw = level.tile_width as f32;
    let th = level.tile_height as f32;
    let (min, max) = collider.aabb(*pos);
    let (row0, row1) = tile_span(min.y, max.y, th);

    if dx > 0.0 {
        let col = ((max.x - EPS) / tw).floor() as i32;
        if (row0..=row1).any(|row| level.is_solid(col, row)) {
            pos.x -= max.x - col as f32 * tw;
            blocked.right = true;
            return true;
        }
        if max.x > level.width_px() {
            pos.x -= max.x - level.width_px();
            blocked.right = true;
            return true;
        }
    } else if dx < 0.0 {
        let col = (min.x / tw).floor() as i32;
        if (row0..=row1).any(|row| level.is_solid(col, row)) {
            pos.x += (col + 1) as f32 * tw - min.x;
            blocked.left = true;
            return true;
        }
        if min.x < 0.0 {
            pos.x -= min.x;
            blocked.left = true;
            return true;
        }
    }
    false
}

/// Push out vertically. Returns true when the body was stopped.
fn resolve_y(
    pos: &mut Vector2,
    dy: f32,
    collider: &BoxCollider,
    level: &Level,
    blocked: &mut Blocked,
) -> bool {
    let tw = level.tile_width as f32;
    let th = level.tile_height as f32;
    let (min, max) = collider.aabb(*pos);
    let (col0, col1) = tile_span(min.x, max.x, tw);

    if dy > 0.0 {
        let row = ((max.y - EPS) / th).floor() as i32;
        if (col0..=col1).any(|col| level.is_solid(col, row)) {
            pos.y -= max.y - row as f32 * th;
            blocked.down = true;
            return true;
        }
        if max.y > level.height_px() {
            pos.y -= max.y - level.height_px();
            blocked.down = true;
            return true;
        }
    } else if dy < 0.0 {
        let row = (min.y / th).floor() as i32;
        if (col0..=col1).any(|col| level.is_solid(col, row)) {
            pos.y += (row + 1) as f32 * th - min.y;
            blocked.up = true;
            return true;
        }
        if min.y < 0.0 {
            pos.y -= min.y;
            blocked.up = true;
            return true;
        }
    }
    false
}

/// Feet exactly on top of a solid tile or on the bottom bound.
fn resting_on_ground(pos: Vector2, collider: &BoxCollider, level: &Level) -> bool {
    let tw = level.tile_width as f32;
    let th = level.tile_height as f32;
    let (min, max) = collider.aabb(pos);
    if (max.y - level.height_px()).abs() < EPS {
        return true;
    }
    let row = (max.y / th).round();
    if (max.y - row * th).abs() >= EPS {
        return false;
    }
    let (col0, col1) = tile_span(min.x, max.x, tw);
    (col0..=col1).any(|col| level.is_solid(col, row as i32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::level::TileCell;

    const EPSILON: f32 = 1e-3;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    /// 6x4 map of 18px tiles: solid floor on the bottom row, a wall at column 4
    /// on the row above it.
    fn level() -> Level {
        let (w, h) = (6u32, 4u32);
        let mut tiles = vec![None; (w * h) as usize];
        let solid = Some(TileCell {
            frame: 0,
            solid: true,
        });
        for x in 0..w {
            tiles[(3 * w + x) as usize] = solid;
        }
        tiles[(2 * w + 4) as usize] = solid;
        Level {
            width: w,
            height: h,
            tile_width: 18,
            tile_height: 18,
            tiles,
            tileset_columns: 20,
            objects: Vec::new(),
        }
    }

    fn player_collider() -> BoxCollider {
        BoxCollider::bottom_centered(12.0, 12.0)
    }

    #[test]
    fn test_falling_body_lands_on_tile_top() {
        let level = level();
        let mut pos = Vector2::new(20.0, 40.0);
        let mut body = RigidBody::new();
        body.velocity.y = 300.0;
        step_against_level(&mut pos, &mut body, &player_collider(), &level, 0.1);
        assert!(approx_eq(pos.y, 54.0));
        assert!(body.blocked.down);
        assert!(body.is_grounded());
        assert!(approx_eq(body.velocity.y, 0.0));
    }

    #[test]
    fn test_resting_body_stays_grounded() {
        let level = level();
        let mut pos = Vector2::new(20.0, 54.0);
        let mut body = RigidBody::new();
        for _ in 0..10 {
            body.integrate_velocity(Vector2::new(0.0, 100.0), 1.0 / 60.0);
            step_against_level(&mut pos, &mut body, &player_collider(), &level, 1.0 / 60.0);
            assert!(body.blocked.down);
            assert!(approx_eq(pos.y, 54.0));
        }
    }

    #[test]
    fn test_idle_body_without_velocity_is_grounded() {
        let level = level();
        let mut pos = Vector2::new(20.0, 54.0);
        let mut body = RigidBody::new();
        step_against_level(&mut pos, &mut body, &player_collider(), &level, 1.0 / 60.0);
        assert!(body.blocked.down);
    }

    #[test]
    fn test_walking_into_wall_stops() {
        let level = level();
        let mut pos = Vector2::new(60.0, 54.0);
        let mut body = RigidBody::new();
        body.velocity.x = 200.0;
        step_against_level(&mut pos, &mut body, &player_collider(), &level, 0.1);
        // wall starts at x = 72, collider half width is 6
        assert!(approx_eq(pos.x, 66.0));
        assert!(body.blocked.right);
        assert!(approx_eq(body.velocity.x, 0.0));
    }

    #[test]
    fn test_level_bounds() {
        let level = level();
        let mut pos = Vector2::new(10.0, 30.0);
        let mut body = RigidBody::new();
        body.velocity = Vector2::new(-100.0, -400.0);
        step_against_level(&mut pos, &mut body, &player_collider(), &level, 0.1);
        assert!(approx_eq(pos.x, 6.0));
        assert!(approx_eq(pos.y, 12.0));
        assert!(body.blocked.left);
        assert!(body.blocked.up);
    }

    #[test]
    fn test_airborne_body_not_grounded() {
        let level = level();
        let mut pos = Vector2::new(20.0, 20.0);
        let mut body = RigidBody::new();
        body.velocity.x = 10.0;
        step_against_level(&mut pos, &mut body, &player_collider(), &level, 0.1);
        assert!(!body.blocked.any());
        assert!(approx_eq(pos.x, 21.0));
    }

    #[test]
    fn test_movement_system_integrates_free_bodies() {
        let mut world = World::new();
        let mut time = WorldTime::default();
        time.advance(0.5);
        world.insert_resource(time);
        world.insert_resource(PhysicsWorld::with_gravity_y(100.0));
        let e = world
            .spawn((MapPosition::new(0.0, 0.0), RigidBody::floating(Vector2::new(50.0, 0.0))))
            .id();
        let mut schedule = Schedule::default();
        schedule.add_systems(movement);
        schedule.run(&mut world);
        let pos = world.get::<MapPosition>(e).unwrap();
        assert!(approx_eq(pos.pos.x, 25.0));
        assert!(approx_eq(pos.pos.y, 0.0));
    }
}
