//! Tilehopper entry point.
//!
//! A small 2D platformer built on:
//! - **raylib** for windowing, graphics, input and audio
//! - **bevy_ecs** for the entity-component-system architecture
//!
//! # Main Loop
//!
//! 1. Read `config.ini` and the command line, resolve the gameplay preset
//! 2. Open the window, create the render target and the audio thread
//! 3. Register scene hooks and observers, enter `Setup` (asset loading)
//! 4. Run the frame schedule until the window closes:
//!    input, state transitions, player control, physics, overlaps,
//!    camera, animation, audio, rendering
//! 5. Stop the audio thread on exit
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --preset classic
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod events;
mod game;
mod resources;
mod scenes;
mod systems;

use crate::events::gamestate::GameStateChangedEvent;
use crate::resources::audio::{setup_audio, shutdown_audio};
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::playconfig::Preset;
use crate::resources::rendertarget::RenderTarget;
use crate::systems::audio::{
    forward_audio_cmds, log_audio_messages, poll_audio_messages, update_bevy_audio_cmds,
    update_bevy_audio_messages,
};
use crate::systems::dynamictext_size::dynamictext_size_system;
use crate::systems::gamestate::check_pending_state;
use crate::systems::group::update_group_counts_system;
use crate::systems::input::update_input_state;
use crate::systems::render::render_system;
use crate::systems::time::update_world_time;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

/// Tilehopper, a tiny tile platformer.
#[derive(Parser)]
#[command(version, about = "Collect the coins, reach the exit.")]
struct Cli {
    /// Configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Gameplay preset: default or classic. Overrides the config file.
    #[arg(long, value_name = "NAME")]
    preset: Option<String>,

    /// Tiled JSON map to play. Overrides the config file.
    #[arg(long, value_name = "PATH")]
    level: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }
    if let Some(preset) = cli.preset {
        config.preset = preset;
    }
    if let Some(level) = cli.level {
        config.level_path = level;
    }

    let preset = match Preset::by_name(&config.preset) {
        Ok(preset) => preset,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };
    let mut play = preset.config.clone();
    play.apply(&config.overrides);
    log::info!("Preset '{}': {:?}", preset.name, play);

    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let mut builder = raylib::init();
    builder
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("Tilehopper");
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);
    rl.set_exit_key(None);

    let (render_width, render_height) = config.render_size();
    let render_target = RenderTarget::new(&mut rl, &thread, render_width, render_height)
        .expect("Failed to create render target");

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    game::insert_core_resources(&mut world, config, play, preset.keys);
    world.insert_non_send_resource(render_target);

    // Must go before the setup hook writes its first AudioCmd
    setup_audio(&mut world);

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    game::register_setup(&mut world);
    game::register_scenes(&mut world);
    game::register_observers(&mut world);

    world.resource_mut::<NextGameState>().set(GameStates::Setup);
    world.trigger(GameStateChangedEvent {}); // enter Setup right away

    let mut update = Schedule::default();
    update.add_systems(update_input_state.before(check_pending_state));
    game::add_gameplay_systems(&mut update);
    update.add_systems(
        // audio systems must be together
        (
            update_bevy_audio_cmds,
            forward_audio_cmds,
            poll_audio_messages,
            update_bevy_audio_messages,
            log_audio_messages,
        )
            .chain()
            .after(update_group_counts_system),
    );
    update.add_systems(dynamictext_size_system.after(check_pending_state));
    update.add_systems(
        render_system
            .after(dynamictext_size_system)
            .after(update_group_counts_system),
    );

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers();
    }
    shutdown_audio(&mut world);
}
