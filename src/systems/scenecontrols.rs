//! Scene-level key handling shared by the play and end scenes.
use bevy_ecs::prelude::*;
use log::info;

use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::input::InputState;

/// Restart key: request a fresh play scene.
///
/// From the play scene this is a `Playing → Playing` transition, which tears
/// the scene down and builds it again. An already pending request (the exit
/// was reached this frame) takes precedence.
pub fn restart_on_key(
    input: Res<InputState>,
    state: Res<GameState>,
    mut next_state: ResMut<NextGameState>,
) {
    if !input.restart.just_pressed || next_state.is_pending() {
        return;
    }
    info!("Restart requested from {:?}", state.get());
    next_state.set(GameStates::Playing);
}
