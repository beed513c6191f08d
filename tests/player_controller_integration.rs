//! Player control through the full gameplay schedule.

mod common;

use common::{DT, Harness, approx_eq};
use tilehopper::components::animation::Animation;
use tilehopper::components::group::PARTICLE;
use tilehopper::components::mapposition::MapPosition;
use tilehopper::components::particleemitter::ParticleEmitter;
use tilehopper::components::player::{Facing, Player};
use tilehopper::components::rigidbody::RigidBody;
use tilehopper::components::sprite::Sprite;
use tilehopper::events::audio::AudioCmd;
use tilehopper::resources::input::KeyBindings;
use tilehopper::resources::playconfig::PlayConfig;
use tilehopper::resources::worldsignals::WorldSignals;
use tilehopper::scenes::play::COINS_COLLECTED;

#[test]
fn idle_player_rests_on_floor() {
    let mut h = Harness::new(PlayConfig::default());
    h.ticks(5);

    let body = h.player_component::<RigidBody>();
    assert!(body.is_grounded());
    assert!(approx_eq(body.acceleration.x, 0.0));
    assert!(approx_eq(body.drag.x, 1800.0));
    assert!(h.player_component::<Animation>().is_playing("idle"));
    assert!(!h.player_component::<ParticleEmitter>().is_emitting());
}

#[test]
fn left_wins_over_right() {
    let mut h = Harness::new(PlayConfig::default());
    h.ticks(2);
    h.input().left.hold();
    h.input().right.hold();
    h.ticks(3);

    let body = h.player_component::<RigidBody>();
    assert!(approx_eq(body.acceleration.x, -100.0));
    assert!(body.velocity.x < 0.0);
    assert_eq!(h.player_component::<Player>().facing, Facing::Left);
    assert!(!h.player_component::<Sprite>().flip_h);
    assert!(h.player_component::<Animation>().is_playing("walk"));
}

#[test]
fn walking_right_flips_and_kicks_up_dust() {
    let mut h = Harness::new(PlayConfig::default());
    h.ticks(2);
    h.input().right.hold();
    h.ticks(3);

    assert_eq!(h.player_component::<Player>().facing, Facing::Right);
    assert!(h.player_component::<Sprite>().flip_h);

    let dust = h.player_component::<ParticleEmitter>();
    assert!(dust.is_emitting());
    // trailing edge: left side of a 12 px wide player
    assert!(approx_eq(dust.offset.x, -6.0));
    assert!(approx_eq(dust.particle_velocity.x, -50.0));
    assert!(approx_eq(dust.particle_velocity.y, 0.0));
    assert!(h.count_group(PARTICLE) > 0);

    h.input().right.release();
    h.tick();
    assert!(!h.player_component::<ParticleEmitter>().is_emitting());
    assert!(h.player_component::<Animation>().is_playing("idle"));
    // particles fade out and expire after 350 ms
    h.ticks(30);
    assert_eq!(h.count_group(PARTICLE), 0);
}

#[test]
fn jump_only_from_the_ground() {
    let mut h = Harness::new(PlayConfig::default());
    h.ticks(3);
    assert!(h.player_component::<RigidBody>().is_grounded());

    h.input().jump.press();
    h.tick();
    let body = h.player_component::<RigidBody>();
    assert!(approx_eq(body.velocity.y, -400.0 + 100.0 * DT));
    assert!(!body.is_grounded());

    h.tick();
    assert!(h.player_component::<Animation>().is_playing("jump"));

    // a second press in the air does not reset the velocity
    let before = h.player_component::<RigidBody>().velocity.y;
    h.input().jump.press();
    h.tick();
    let after = h.player_component::<RigidBody>().velocity.y;
    assert!(approx_eq(after, before + 100.0 * DT));
}

#[test]
fn held_jump_does_not_repeat() {
    let mut h = Harness::with_keys(PlayConfig::classic(), KeyBindings::arrows());
    h.ticks(3);
    assert!(h.player_component::<RigidBody>().is_grounded());

    h.input().jump.press();
    h.tick();
    let mut prev = h.player_component::<RigidBody>().velocity.y;
    assert!(prev < -500.0);

    let mut landed = false;
    let mut impulses = 0;
    for _ in 0..240 {
        h.input().jump.hold();
        h.tick();
        let body = h.player_component::<RigidBody>();
        landed |= body.is_grounded();
        if body.velocity.y < prev - 300.0 {
            impulses += 1;
        }
        prev = body.velocity.y;
    }
    assert!(landed);
    assert_eq!(impulses, 0);
    assert!(h.player_component::<RigidBody>().is_grounded());
}

#[test]
fn holding_right_moves_right_every_frame() {
    let mut h = Harness::new(PlayConfig::default());
    h.ticks(3);
    let mut prev = h.player_component::<MapPosition>().pos.x;

    for _ in 0..60 {
        h.input().right.hold();
        h.tick();
        let pos = h.player_component::<MapPosition>().pos;
        assert!(pos.x > prev, "x went from {} to {}", prev, pos.x);
        assert!(approx_eq(pos.y, 90.0));
        prev = pos.x;
    }
}

#[test]
fn drag_brings_player_to_rest_without_reversing() {
    let mut h = Harness::new(PlayConfig::default());
    h.ticks(2);
    h.input().right.hold();
    h.ticks(20);
    h.input().right.release();

    for _ in 0..30 {
        h.tick();
        assert!(h.player_component::<RigidBody>().velocity.x >= 0.0);
    }
    assert!(approx_eq(h.player_component::<RigidBody>().velocity.x, 0.0));
}

#[test]
fn classic_preset_uses_arrows_and_stays_silent() {
    let mut h = Harness::with_keys(PlayConfig::classic(), KeyBindings::arrows());
    h.ticks(2);
    h.input().right.hold();
    assert!(h.tick_until(300, |h| {
        h.world
            .resource::<WorldSignals>()
            .get_integer(COINS_COLLECTED)
            == Some(1)
    }));
    assert!(approx_eq(h.player_component::<RigidBody>().acceleration.x, 400.0));
    assert!(
        !h.audio_cmds()
            .iter()
            .any(|cmd| matches!(cmd, AudioCmd::PlayFx { .. }))
    );
}
