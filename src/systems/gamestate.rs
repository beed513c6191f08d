//! Game state systems and run conditions.
use crate::events::gamestate::GameStateChangedEvent;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use bevy_ecs::prelude::*;

/// Emit a [`GameStateChangedEvent`] when a transition has been requested.
pub fn check_pending_state(mut commands: Commands, next_state: Res<NextGameState>) {
    if next_state.is_pending() {
        commands.trigger(GameStateChangedEvent {});
    }
}

pub fn state_is_playing(state: Res<GameState>) -> bool {
    matches!(state.get(), GameStates::Playing)
}

/// Play or end scene: the states where the restart key is live.
pub fn state_accepts_restart(state: Res<GameState>) -> bool {
    matches!(state.get(), GameStates::Playing | GameStates::Won)
}
