//! Headless game driver shared by the integration tests.
//!
//! Builds the same world and gameplay schedule as the binary, minus the
//! window: the level comes from an inline Tiled map, input is set by hand and
//! nothing is rendered.

#![allow(dead_code)]

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemState;

use tilehopper::components::group::Group;
use tilehopper::components::player::Player;
use tilehopper::events::audio::AudioCmd;
use tilehopper::game;
use tilehopper::resources::audio::init_audio_messages;
use tilehopper::resources::gameconfig::GameConfig;
use tilehopper::resources::gamestate::{GameState, GameStates, NextGameState};
use tilehopper::resources::input::{InputState, KeyBindings};
use tilehopper::resources::level::Level;
use tilehopper::resources::playconfig::PlayConfig;
use tilehopper::systems::time::update_world_time;

pub const DT: f32 = 1.0 / 60.0;
pub const EPSILON: f32 = 1e-3;

pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// 14x6 map of 18 px tiles: solid floor on the bottom row (top at y = 90)
/// and a single wall tile at column 12 just above it.
///
/// Spawn at (27, 90), one coin with its pivot at (63, 90), the exit at
/// (171, 90), and a coin object without a tile that must be ignored.
pub const LEVEL_JSON: &str = r#"{
    "width": 14, "height": 6, "tilewidth": 18, "tileheight": 18,
    "orientation": "orthogonal", "infinite": false,
    "layers": [
        {"type": "tilelayer", "name": "Ground-n-Platforms", "width": 14, "height": 6,
         "data": [
            0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1
         ]},
        {"type": "objectgroup", "name": "Objects", "objects": [
            {"id": 1, "name": "Spawn", "x": 27, "y": 90, "point": true},
            {"id": 2, "name": "coin", "x": 54, "y": 90, "gid": 152, "width": 18, "height": 18},
            {"id": 3, "name": "coin", "x": 90, "y": 40},
            {"id": 4, "name": "Exit", "x": 162, "y": 90, "gid": 112, "width": 18, "height": 18}
        ]}
    ],
    "tilesets": [{
        "firstgid": 1, "name": "tilemap_packed", "columns": 20, "tilecount": 180,
        "tilewidth": 18, "tileheight": 18,
        "tiles": [
            {"id": 0, "properties": [{"name": "collides", "type": "bool", "value": true}]}
        ]
    }]
}"#;

pub fn test_level() -> Level {
    Level::from_json_str(LEVEL_JSON).expect("test level parses")
}

/// A world running the play scene with the given tuning.
pub struct Harness {
    pub world: World,
    schedule: Schedule,
}

impl Harness {
    pub fn new(play: PlayConfig) -> Self {
        Self::with_keys(play, KeyBindings::wasd())
    }

    pub fn with_keys(play: PlayConfig, keys: KeyBindings) -> Self {
        let mut world = World::new();
        game::insert_core_resources(&mut world, GameConfig::new(), play, keys);
        init_audio_messages(&mut world);
        world.insert_resource(test_level());
        world.insert_resource(game::player_animations());
        game::register_scenes(&mut world);
        game::register_observers(&mut world);
        world.resource_mut::<NextGameState>().set(GameStates::Playing);

        let mut schedule = Schedule::default();
        game::add_gameplay_systems(&mut schedule);
        Self { world, schedule }
    }

    /// Run one frame, then drop this frame's key edges.
    pub fn tick(&mut self) {
        update_world_time(&mut self.world, DT);
        self.schedule.run(&mut self.world);
        self.world.resource_mut::<InputState>().clear_edges();
    }

    pub fn ticks(&mut self, n: usize) {
        for _ in 0..n {
            self.tick();
        }
    }

    /// Tick until `done` holds, at most `max` frames. Returns whether it held.
    pub fn tick_until(&mut self, max: usize, mut done: impl FnMut(&mut Self) -> bool) -> bool {
        for _ in 0..max {
            self.tick();
            if done(self) {
                return true;
            }
        }
        false
    }

    pub fn input(&mut self) -> Mut<'_, InputState> {
        self.world.resource_mut::<InputState>()
    }

    pub fn state(&self) -> GameStates {
        *self.world.resource::<GameState>().get()
    }

    pub fn player(&mut self) -> Option<Entity> {
        let mut query = self.world.query_filtered::<Entity, With<Player>>();
        query.iter(&self.world).next()
    }

    pub fn player_component<T: Component + Clone>(&mut self) -> T {
        let player = self.player().expect("player exists");
        self.world
            .get::<T>(player)
            .cloned()
            .expect("player has component")
    }

    pub fn count<T: Component>(&mut self) -> usize {
        let mut query = self.world.query_filtered::<Entity, With<T>>();
        query.iter(&self.world).count()
    }

    pub fn count_group(&mut self, name: &str) -> usize {
        let mut query = self.world.query::<&Group>();
        query
            .iter(&self.world)
            .filter(|g| g.name() == name)
            .count()
    }

    /// Every audio command written so far (nothing drains them headless).
    pub fn audio_cmds(&mut self) -> Vec<AudioCmd> {
        let mut state: SystemState<MessageReader<AudioCmd>> = SystemState::new(&mut self.world);
        let mut reader = state.get_mut(&mut self.world);
        reader.read().cloned().collect()
    }
}
