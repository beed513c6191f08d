//! Game wiring: asset setup, scene registration and the frame schedule.
//!
//! Scene hooks are plain systems registered once at startup and stored by
//! name in [`SystemsStore`]; the game state observer runs them on every
//! transition (see [`crate::events::gamestate`]).

use std::sync::Arc;

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::*;

use crate::components::persistent::Persistent;
use crate::events::audio::AudioCmd;
use crate::events::collision::overlap_observer;
use crate::events::gamestate::observe_gamestate_change_event;
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::animationstore::{AnimationResource, AnimationStore};
use crate::resources::camera2d::{Camera2DRes, CameraFollow};
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::group::TrackedGroups;
use crate::resources::input::{InputState, KeyBindings};
use crate::resources::level::Level;
use crate::resources::physicsworld::PhysicsWorld;
use crate::resources::playconfig::{COIN_SFX, PlayConfig};
use crate::resources::screensize::ScreenSize;
use crate::resources::systemsstore::SystemsStore;
use crate::resources::texturestore::TextureStore;
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;
use crate::scenes::end::enter_end;
use crate::scenes::play::{CHARACTERS_TEX, PARTICLES_TEX, TILEMAP_TEX, enter_play};
use crate::systems::animation::animation;
use crate::systems::camera::camera_follow;
use crate::systems::collision::overlap_detector;
use crate::systems::gamestate::{check_pending_state, state_accepts_restart, state_is_playing};
use crate::systems::group::update_group_counts_system;
use crate::systems::movement::movement;
use crate::systems::particleemitter::{particle_emitter_system, particle_fade_system};
use crate::systems::playercontroller::player_controller;
use crate::systems::scenecontrols::restart_on_key;
use crate::systems::ttl::ttl_system;

const COIN_SOUND_PATH: &str = "./assets/audio/coin.ogg";

/// Character strip: idle, walk (two frames) and jump, 24 px apart.
pub fn player_animations() -> AnimationStore {
    let mut store = AnimationStore::default();
    let tex: Arc<str> = Arc::from(CHARACTERS_TEX);
    store.insert(
        "idle",
        AnimationResource {
            tex_key: tex.clone(),
            position: Vector2::new(0.0, 0.0),
            displacement: 24.0,
            frame_count: 1,
            fps: 1.0,
            looped: true,
        },
    );
    store.insert(
        "walk",
        AnimationResource {
            tex_key: tex.clone(),
            position: Vector2::new(0.0, 0.0),
            displacement: 24.0,
            frame_count: 2,
            fps: 15.0,
            looped: true,
        },
    );
    store.insert(
        "jump",
        AnimationResource {
            tex_key: tex,
            position: Vector2::new(24.0, 0.0),
            displacement: 24.0,
            frame_count: 1,
            fps: 1.0,
            looped: false,
        },
    );
    store
}

/// Load every asset once, then request the play scene.
///
/// Missing assets are fatal.
pub fn setup(
    mut commands: Commands,
    mut next_state: ResMut<NextGameState>,
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    config: Res<GameConfig>,
    mut audio_cmd_writer: MessageWriter<AudioCmd>,
) {
    let tilemap_tex = rl
        .load_texture(&th, "./assets/textures/tilemap_packed.png")
        .expect("load assets/textures/tilemap_packed.png");
    let characters_tex = rl
        .load_texture(&th, "./assets/textures/characters.png")
        .expect("load assets/textures/characters.png");
    let particles_tex = rl
        .load_texture(&th, "./assets/textures/particles.png")
        .expect("load assets/textures/particles.png");

    let mut tex_store = TextureStore::default();
    tex_store.insert(TILEMAP_TEX, tilemap_tex);
    tex_store.insert(CHARACTERS_TEX, characters_tex);
    tex_store.insert(PARTICLES_TEX, particles_tex);
    commands.insert_resource(tex_store);

    let level = Level::load(&config.level_path).expect("Failed to load level");
    commands.insert_resource(level);
    commands.insert_resource(player_animations());

    audio_cmd_writer.write(AudioCmd::LoadFx {
        id: COIN_SFX.into(),
        path: COIN_SOUND_PATH.into(),
    });

    next_state.set(GameStates::Playing);
    info!("Setup done, next state set to Playing");
}

/// Tear the current scene down: every entity not marked [`Persistent`] and
/// the per-scene resources.
pub fn clean_scene(
    mut commands: Commands,
    query: Query<Entity, Without<Persistent>>,
    mut signals: ResMut<WorldSignals>,
    mut tracked: ResMut<TrackedGroups>,
) {
    let mut count = 0;
    for entity in query.iter() {
        commands.entity(entity).try_despawn();
        count += 1;
    }
    signals.clear();
    tracked.clear();
    commands.remove_resource::<Camera2DRes>();
    commands.remove_resource::<CameraFollow>();
    commands.remove_resource::<PhysicsWorld>();
    info!("Scene cleaned, {} entities despawned", count);
}

/// Resources shared by every scene.
pub fn insert_core_resources(
    world: &mut World,
    config: GameConfig,
    play: PlayConfig,
    keys: KeyBindings,
) {
    let (render_w, render_h) = config.render_size();
    world.insert_resource(WorldTime::default());
    world.insert_resource(WorldSignals::default());
    world.insert_resource(TrackedGroups::default());
    world.insert_resource(ScreenSize {
        w: render_w as i32,
        h: render_h as i32,
    });
    world.insert_resource(config);
    world.insert_resource(play);
    world.insert_resource(InputState::with_bindings(keys));
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
}

fn register_hook<M>(
    world: &mut World,
    store: &mut SystemsStore,
    name: &str,
    system: impl IntoSystem<(), (), M> + 'static,
) {
    let id = world.register_system(system);
    // registered systems live in entities; keep them across scene cleanups
    world.entity_mut(id.entity()).insert(Persistent);
    store.insert(name, id);
}

/// Register the scene hooks under the names the game state observer uses.
///
/// `setup` is left out so headless drivers can provide the level and
/// animations themselves; see [`register_setup`].
pub fn register_scenes(world: &mut World) {
    let mut store = world.remove_resource::<SystemsStore>().unwrap_or_default();
    register_hook(world, &mut store, "enter_play", enter_play);
    register_hook(world, &mut store, "enter_end", enter_end);
    register_hook(world, &mut store, "clean_scene", clean_scene);
    world.insert_resource(store);
}

/// Register the asset loading hook. Needs the raylib window.
pub fn register_setup(world: &mut World) {
    let mut store = world.remove_resource::<SystemsStore>().unwrap_or_default();
    register_hook(world, &mut store, "setup", setup);
    world.insert_resource(store);
}

/// Spawn the global observers.
pub fn register_observers(world: &mut World) {
    world.spawn((Observer::new(observe_gamestate_change_event), Persistent));
    world.spawn((Observer::new(overlap_observer), Persistent));
    world.spawn((Observer::new(switch_debug_observer), Persistent));
    world.flush();
}

/// Gameplay systems that need no window.
///
/// `check_pending_state` goes first so a transition requested last frame is
/// applied before anything reads the scene.
pub fn add_gameplay_systems(schedule: &mut Schedule) {
    schedule.add_systems(check_pending_state);
    schedule.add_systems(
        restart_on_key
            .run_if(state_accepts_restart)
            .after(check_pending_state),
    );
    schedule.add_systems(
        (
            player_controller,
            particle_emitter_system,
            movement,
            overlap_detector,
            (camera_follow, animation, particle_fade_system, ttl_system),
            update_group_counts_system,
        )
            .chain()
            .run_if(state_is_playing)
            .after(check_pending_state),
    );
}
