//! The play scene.
//!
//! [`enter_play`] turns the loaded [`Level`] into entities and installs the
//! per-scene resources (gravity, camera, tracked groups). The two overlap
//! callbacks implement coin pickup and the win condition.

use bevy_ecs::prelude::*;
use log::{debug, info};
use raylib::prelude::{Rectangle, Vector2};

use crate::components::animation::Animation;
use crate::components::boxcollider::BoxCollider;
use crate::components::collision::{OverlapCtx, OverlapRule};
use crate::components::group::{COIN, EXIT, Group, PLAYER, TILES};
use crate::components::mapposition::MapPosition;
use crate::components::particleemitter::ParticleEmitter;
use crate::components::player::{Coin, CollidesWithTiles, Exit, Player};
use crate::components::rigidbody::RigidBody;
use crate::components::scale::Scale;
use crate::components::sprite::Sprite;
use crate::components::zindex::{Z_PICKUPS, Z_PLAYER, Z_TILES, ZIndex};
use crate::events::audio::AudioCmd;
use crate::resources::camera2d::{Camera2DRes, CameraFollow};
use crate::resources::gamestate::GameStates;
use crate::resources::group::TrackedGroups;
use crate::resources::level::{COIN_OBJECT, EXIT_OBJECT, Level, LevelObject, SPAWN_OBJECT};
use crate::resources::physicsworld::PhysicsWorld;
use crate::resources::playconfig::PlayConfig;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldsignals::WorldSignals;

/// Texture keys loaded during setup.
pub const TILEMAP_TEX: &str = "tilemap";
pub const CHARACTERS_TEX: &str = "characters";
pub const PARTICLES_TEX: &str = "particles";

/// World signal counting picked up coins.
pub const COINS_COLLECTED: &str = "coins_collected";
/// World signal flag set once the exit has been reached.
pub const LEVEL_WON: &str = "level_won";
/// World signal entity key of the player.
pub const PLAYER_ENTITY: &str = "player";

/// Character frame size in the sheet, and the scale it is drawn at.
const CHARACTER_FRAME: f32 = 24.0;
const CHARACTER_SCALE: f32 = 0.5;
/// Side of a smoke frame in the particle sheet.
const PARTICLE_FRAME: f32 = 512.0;

const CAMERA_DEADZONE: Vector2 = Vector2 { x: 50.0, y: 50.0 };
const CAMERA_LERP: Vector2 = Vector2 { x: 0.25, y: 0.25 };

pub fn enter_play(
    mut commands: Commands,
    level: Res<Level>,
    config: Res<PlayConfig>,
    screen: Res<ScreenSize>,
    mut signals: ResMut<WorldSignals>,
    mut tracked: ResMut<TrackedGroups>,
) {
    let spawn = level
        .find_object(SPAWN_OBJECT)
        .unwrap_or_else(|| panic!("Level has no '{}' object, cannot start", SPAWN_OBJECT));

    commands.insert_resource(PhysicsWorld::with_gravity_y(config.gravity));

    let tile_w = level.tile_width as f32;
    let tile_h = level.tile_height as f32;
    for (tx, ty, cell) in level.iter_tiles() {
        let (fx, fy) = level.frame_origin(cell.frame);
        commands.spawn((
            Group::new(TILES),
            MapPosition::new(tx as f32 * tile_w, ty as f32 * tile_h),
            Sprite::top_left(TILEMAP_TEX, tile_w, tile_h, Vector2::new(fx, fy)),
            ZIndex(Z_TILES),
        ));
    }

    let mut coins = 0;
    for object in level.tile_objects_named(COIN_OBJECT) {
        if spawn_tile_object(&mut commands, &level, object, COIN, Coin) {
            coins += 1;
        }
    }

    let player_collider = CHARACTER_FRAME * CHARACTER_SCALE;
    let mut body = RigidBody::new();
    body.set_drag_x(config.drag);
    let player = commands
        .spawn((
            Group::new(PLAYER),
            Player::default(),
            MapPosition::new(spawn.x, spawn.y),
            body,
            CollidesWithTiles,
            BoxCollider::bottom_centered(player_collider, player_collider),
            Sprite::bottom_centered(
                CHARACTERS_TEX,
                CHARACTER_FRAME,
                CHARACTER_FRAME,
                Vector2::zero(),
            ),
            Scale::uniform(CHARACTER_SCALE),
            Animation::new("idle"),
            ParticleEmitter::walk_effect(PARTICLES_TEX, PARTICLE_FRAME),
            ZIndex(Z_PLAYER),
        ))
        .id();
    signals.set_entity(PLAYER_ENTITY, player);

    let mut exits = 0;
    for object in level.tile_objects_named(EXIT_OBJECT) {
        if spawn_tile_object(&mut commands, &level, object, EXIT, Exit) {
            exits += 1;
        }
    }

    commands.spawn(OverlapRule::new(PLAYER, COIN, collect_coin));
    commands.spawn(OverlapRule::new(PLAYER, EXIT, reach_exit));
    tracked.add_group(COIN);
    tracked.add_group(EXIT);

    let follow = CameraFollow::new(
        CAMERA_DEADZONE,
        CAMERA_LERP,
        Rectangle::new(0.0, 0.0, level.width_px(), level.height_px()),
    );
    let (view_w, view_h) = (screen.w as f32, screen.h as f32);
    let zoom = config.zoom.max(f32::EPSILON);
    let spawn_pos = Vector2::new(spawn.x, spawn.y);
    let target = follow.follow_step(spawn_pos, spawn_pos, Vector2::new(view_w / zoom, view_h / zoom));
    commands.insert_resource(Camera2DRes::centered_on(target, view_w, view_h, zoom));
    commands.insert_resource(follow);

    signals.set_integer(COINS_COLLECTED, 0);
    info!(
        "Play scene ready: {}x{} tiles, {} coins, {} exits, player at ({:.0}, {:.0})",
        level.width, level.height, coins, exits, spawn.x, spawn.y
    );
}

/// Spawn a pickup-like entity for a tile object: sprite from the object's
/// tile, bottom-centre pivot, collider the size of a tile. Objects without a
/// tile are skipped.
fn spawn_tile_object(
    commands: &mut Commands,
    level: &Level,
    object: &LevelObject,
    group: &str,
    marker: impl Bundle,
) -> bool {
    let Some(frame) = object.frame else {
        return false;
    };
    let (x, y) = level.object_pivot(object);
    let (fx, fy) = level.frame_origin(frame);
    let tile_w = level.tile_width as f32;
    let tile_h = level.tile_height as f32;
    commands.spawn((
        Group::new(group),
        MapPosition::new(x, y),
        Sprite::bottom_centered(TILEMAP_TEX, tile_w, tile_h, Vector2::new(fx, fy)),
        BoxCollider::bottom_centered(tile_w, tile_h),
        ZIndex(Z_PICKUPS),
        marker,
    ));
    true
}

/// Player touched a coin: remove it, count it and play the pickup sound.
pub fn collect_coin(_player: Entity, coin: Entity, ctx: &mut OverlapCtx) {
    ctx.commands.entity(coin).try_despawn();
    let total = ctx.signals.add_integer(COINS_COLLECTED, 1);
    if let Some(id) = ctx.config.coin_sfx.clone() {
        ctx.audio.write(AudioCmd::PlayFx { id });
    }
    info!("Coin collected ({} so far)", total);
}

/// Player touched an exit: request the win screen, once.
pub fn reach_exit(_player: Entity, exit: Entity, ctx: &mut OverlapCtx) {
    if ctx.signals.has_flag(LEVEL_WON) || ctx.next_state.is_pending() {
        debug!("Exit {:?} touched again, ignored", exit);
        return;
    }
    ctx.signals.set_flag(LEVEL_WON);
    ctx.next_state.set(GameStates::Won);
    info!("Exit reached, level won");
}
