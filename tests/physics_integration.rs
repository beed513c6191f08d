//! Movement against the level grid, run through the ECS.

mod common;

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use common::{DT, approx_eq, test_level};
use tilehopper::components::boxcollider::BoxCollider;
use tilehopper::components::mapposition::MapPosition;
use tilehopper::components::player::CollidesWithTiles;
use tilehopper::components::rigidbody::RigidBody;
use tilehopper::resources::physicsworld::PhysicsWorld;
use tilehopper::resources::worldtime::WorldTime;
use tilehopper::systems::movement::movement;
use tilehopper::systems::time::update_world_time;

fn make_world(gravity: f32) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(PhysicsWorld::with_gravity_y(gravity));
    world.insert_resource(test_level());
    world
}

fn tick(world: &mut World, schedule: &mut Schedule) {
    update_world_time(world, DT);
    schedule.run(world);
}

fn movement_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(movement);
    schedule
}

fn spawn_walker(world: &mut World, x: f32, y: f32, body: RigidBody) -> Entity {
    world
        .spawn((
            MapPosition::new(x, y),
            body,
            BoxCollider::bottom_centered(12.0, 12.0),
            CollidesWithTiles,
        ))
        .id()
}

#[test]
fn falling_body_lands_on_floor() {
    let mut world = make_world(1500.0);
    let mut schedule = movement_schedule();
    let e = spawn_walker(&mut world, 40.0, 20.0, RigidBody::new());

    for _ in 0..120 {
        tick(&mut world, &mut schedule);
    }
    let pos = world.get::<MapPosition>(e).unwrap().pos;
    let body = world.get::<RigidBody>(e).unwrap();
    assert!(approx_eq(pos.y, 90.0));
    assert!(body.blocked.down);
    assert!(approx_eq(body.velocity.y, 0.0));
}

#[test]
fn walking_into_wall_stops_at_its_face() {
    let mut world = make_world(100.0);
    let mut schedule = movement_schedule();
    let mut body = RigidBody::new();
    body.velocity.x = 300.0;
    let e = spawn_walker(&mut world, 190.0, 90.0, body);

    let mut hit = false;
    for _ in 0..30 {
        tick(&mut world, &mut schedule);
        if world.get::<RigidBody>(e).unwrap().blocked.right {
            hit = true;
            break;
        }
    }
    assert!(hit);
    // wall tile starts at x = 216, half the collider is 6
    assert!(approx_eq(world.get::<MapPosition>(e).unwrap().pos.x, 210.0));
    assert!(approx_eq(world.get::<RigidBody>(e).unwrap().velocity.x, 0.0));
}

#[test]
fn level_bounds_hold_the_body() {
    let mut world = make_world(100.0);
    let mut schedule = movement_schedule();
    let mut body = RigidBody::new();
    body.velocity.x = -500.0;
    let e = spawn_walker(&mut world, 20.0, 60.0, body);

    for _ in 0..10 {
        tick(&mut world, &mut schedule);
    }
    assert!(approx_eq(world.get::<MapPosition>(e).unwrap().pos.x, 6.0));
}

#[test]
fn bodies_without_tile_collision_pass_through() {
    let mut world = make_world(100.0);
    let mut schedule = movement_schedule();
    let e = world
        .spawn((
            MapPosition::new(200.0, 85.0),
            RigidBody::floating(Vector2::new(300.0, 0.0)),
        ))
        .id();

    for _ in 0..10 {
        tick(&mut world, &mut schedule);
    }
    let pos = world.get::<MapPosition>(e).unwrap().pos;
    assert!((pos.x - 250.0).abs() < 1e-2);
    assert!(approx_eq(pos.y, 85.0));
}
