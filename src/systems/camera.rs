//! Camera follow system.
//!
//! Moves the shared [`Camera2DRes`] towards the player following the
//! [`CameraFollow`] rules set up by the play scene: no motion while the
//! player stays inside the dead zone, a lerp step towards it outside, and a
//! view that never leaves the level bounds.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::resources::camera2d::{Camera2DRes, CameraFollow};
use crate::resources::screensize::ScreenSize;

pub fn camera_follow(
    camera: Option<ResMut<Camera2DRes>>,
    follow: Option<Res<CameraFollow>>,
    screen: Res<ScreenSize>,
    players: Query<&MapPosition, With<Player>>,
) {
    let (Some(mut camera), Some(follow)) = (camera, follow) else {
        return;
    };
    let Some(player) = players.iter().next() else {
        return;
    };
    let zoom = camera.0.zoom.max(f32::EPSILON);
    let view = Vector2::new(screen.w as f32 / zoom, screen.h as f32 / zoom);
    camera.0.target = follow.follow_step(camera.0.target, player.pos, view);
}

#[cfg(test)]
mod tests {
    use super::*;
    use raylib::prelude::Rectangle;

    const EPSILON: f32 = 1e-4;

    fn world(camera_target: Vector2, player: Vector2) -> World {
        let mut world = World::new();
        world.insert_resource(ScreenSize { w: 640, h: 360 });
        world.insert_resource(Camera2DRes::centered_on(camera_target, 640.0, 360.0, 2.0));
        world.insert_resource(CameraFollow::new(
            Vector2::new(50.0, 50.0),
            Vector2::new(0.25, 0.25),
            Rectangle::new(0.0, 0.0, 1000.0, 1000.0),
        ));
        world.spawn((Player::default(), MapPosition::new(player.x, player.y)));
        world
    }

    fn run(world: &mut World) -> Vector2 {
        let mut schedule = Schedule::default();
        schedule.add_systems(camera_follow);
        schedule.run(world);
        world.resource::<Camera2DRes>().0.target
    }

    #[test]
    fn test_player_inside_deadzone_keeps_camera() {
        let mut world = world(Vector2::new(400.0, 400.0), Vector2::new(420.0, 380.0));
        let target = run(&mut world);
        assert!((target.x - 400.0).abs() < EPSILON);
        assert!((target.y - 400.0).abs() < EPSILON);
    }

    #[test]
    fn test_player_outside_deadzone_pulls_camera_by_lerp() {
        let mut world = world(Vector2::new(400.0, 400.0), Vector2::new(465.0, 400.0));
        let target = run(&mut world);
        // 40 units past the dead zone edge, a quarter of it per frame
        assert!((target.x - 410.0).abs() < EPSILON);
    }

    #[test]
    fn test_view_clamped_to_level() {
        let mut world = world(Vector2::new(160.0, 90.0), Vector2::new(0.0, 0.0));
        let target = run(&mut world);
        // view is 320x180 world units at zoom 2
        assert!((target.x - 160.0).abs() < EPSILON);
        assert!((target.y - 90.0).abs() < EPSILON);
    }
}
