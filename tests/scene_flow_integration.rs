//! Scene lifecycle: entering the play scene, coin pickup, the win transition
//! and restarts.

mod common;

use common::{Harness, approx_eq};
use tilehopper::components::dynamictext::DynamicText;
use tilehopper::components::group::{COIN, EXIT, TEXTS, TILES};
use tilehopper::components::mapposition::MapPosition;
use tilehopper::components::player::{Coin, Exit, Player};
use tilehopper::events::audio::AudioCmd;
use tilehopper::resources::camera2d::Camera2DRes;
use tilehopper::resources::gamestate::GameStates;
use tilehopper::resources::playconfig::PlayConfig;
use tilehopper::resources::worldsignals::WorldSignals;
use tilehopper::scenes::play::COINS_COLLECTED;

fn coins_collected(h: &Harness) -> i32 {
    h.world
        .resource::<WorldSignals>()
        .get_integer(COINS_COLLECTED)
        .unwrap_or(-1)
}

/// Walk right until the win screen shows up.
fn play_to_win(h: &mut Harness) {
    h.tick();
    h.input().right.hold();
    assert!(h.tick_until(600, |h| h.state() == GameStates::Won));
    h.input().right.release();
}

#[test]
fn first_frame_builds_play_scene() {
    let mut h = Harness::new(PlayConfig::default());
    assert_eq!(h.state(), GameStates::None);
    h.tick();

    assert_eq!(h.state(), GameStates::Playing);
    assert_eq!(h.count::<Player>(), 1);
    // the coin object without a tile is not spawned
    assert_eq!(h.count::<Coin>(), 1);
    assert_eq!(h.count::<Exit>(), 1);
    assert_eq!(h.count_group(TILES), 15);
    assert_eq!(coins_collected(&h), 0);

    let signals = h.world.resource::<WorldSignals>();
    assert_eq!(signals.get_group_count(COIN), Some(1));
    assert_eq!(signals.get_group_count(EXIT), Some(1));

    let pos = h.player_component::<MapPosition>().pos;
    assert!(approx_eq(pos.x, 27.0));
    assert!(approx_eq(pos.y, 90.0));

    // zoom 5 on a 640x360 target shows 128x72 world units; clamped to the map
    let camera = h.world.resource::<Camera2DRes>().0;
    assert!(approx_eq(camera.zoom, 5.0));
    assert!(approx_eq(camera.target.x, 64.0));
    assert!(approx_eq(camera.target.y, 72.0));
}

#[test]
fn coin_is_collected_once_with_sound() {
    let mut h = Harness::new(PlayConfig::default());
    h.tick();
    h.input().right.hold();
    assert!(h.tick_until(300, |h| coins_collected(h) == 1));

    assert_eq!(h.count::<Coin>(), 0);
    h.ticks(10);
    assert_eq!(coins_collected(&h), 1);

    let plays: Vec<AudioCmd> = h
        .audio_cmds()
        .into_iter()
        .filter(|cmd| matches!(cmd, AudioCmd::PlayFx { .. }))
        .collect();
    assert_eq!(
        plays,
        vec![AudioCmd::PlayFx {
            id: "sfx-coin".into()
        }]
    );
}

#[test]
fn reaching_exit_shows_end_screen() {
    let mut h = Harness::new(PlayConfig::default());
    play_to_win(&mut h);

    assert_eq!(h.count::<Player>(), 0);
    assert_eq!(h.count::<Exit>(), 0);
    assert_eq!(h.count_group(TILES), 0);
    assert_eq!(h.count_group(TEXTS), 2);
    assert!(!h.world.contains_resource::<Camera2DRes>());

    let mut query = h.world.query::<&DynamicText>();
    let mut texts: Vec<(String, i32)> = query
        .iter(&h.world)
        .map(|t| (t.content.clone(), t.font_size))
        .collect();
    texts.sort();
    assert_eq!(
        texts,
        vec![
            ("Press R to play again".to_string(), 24),
            ("You Win!".to_string(), 48),
        ]
    );
}

#[test]
fn win_transition_happens_once() {
    let mut h = Harness::new(PlayConfig::default());
    play_to_win(&mut h);
    h.ticks(30);
    assert_eq!(h.state(), GameStates::Won);
    assert_eq!(h.count_group(TEXTS), 2);
}

#[test]
fn restart_from_end_screen_starts_fresh() {
    let mut h = Harness::new(PlayConfig::default());
    play_to_win(&mut h);

    h.input().restart.press();
    h.tick();
    h.tick();

    assert_eq!(h.state(), GameStates::Playing);
    assert_eq!(h.count_group(TEXTS), 0);
    assert_eq!(h.count::<Player>(), 1);
    assert_eq!(h.count::<Coin>(), 1);
    assert_eq!(coins_collected(&h), 0);
    let pos = h.player_component::<MapPosition>().pos;
    assert!(approx_eq(pos.x, 27.0));
}

#[test]
fn restart_while_playing_rebuilds_scene() {
    let mut h = Harness::new(PlayConfig::default());
    h.tick();
    let first = h.player().expect("player");
    h.input().right.hold();
    assert!(h.tick_until(300, |h| coins_collected(h) == 1));
    h.input().right.release();

    h.input().restart.press();
    h.tick();
    h.tick();

    assert_eq!(h.state(), GameStates::Playing);
    assert!(h.world.get_entity(first).is_err());
    assert_eq!(h.count::<Player>(), 1);
    assert_eq!(h.count::<Coin>(), 1);
    assert_eq!(coins_collected(&h), 0);
    let pos = h.player_component::<MapPosition>().pos;
    assert!(approx_eq(pos.x, 27.0));
    assert!(approx_eq(pos.y, 90.0));
}

#[test]
fn overlap_rules_are_rebuilt_not_duplicated() {
    use tilehopper::components::collision::OverlapRule;

    let mut h = Harness::new(PlayConfig::default());
    h.tick();
    h.input().restart.press();
    h.ticks(2);
    let mut query = h.world.query::<&OverlapRule>();
    assert_eq!(query.iter(&h.world).count(), 2);
}
