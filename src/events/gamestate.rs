//! Game state transition event and observer.
//!
//! Systems and overlap callbacks request a change to the high-level
//! [`GameStates`] by updating [`NextGameState`]. The `check_pending_state`
//! system then emits a [`GameStateChangedEvent`], and the observer in this
//! module applies the transition to [`GameState`] and runs the scene hooks
//! stored in [`crate::resources::systemsstore::SystemsStore`].
//!
//! Hooks by state:
//!
//! | state     | on exit       | on enter     |
//! |-----------|---------------|--------------|
//! | `Setup`   | –             | `setup`      |
//! | `Playing` | `clean_scene` | `enter_play` |
//! | `Won`     | `clean_scene` | `enter_end`  |
//!
//! A transition from a state to itself runs both hooks, which is how a
//! restart rebuilds the play scene from scratch.
use crate::resources::gamestate::NextGameStates::{Pending, Unchanged};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::systemsstore::SystemsStore;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Event used to indicate that a pending game state transition should be
/// applied.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Observer that applies a pending game state transition.
///
/// Contract
/// - Reads the intention from [`NextGameState`].
/// - If pending, copies the new value into [`GameState`], then:
///   - runs the exit hook of the previous state
///   - runs the enter hook of the new state
///   - resets [`NextGameState`] to [`Unchanged`]
/// - If any required resource is missing, logs a diagnostic and returns.
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    mut next_game_state: Option<ResMut<NextGameState>>,
    mut game_state: Option<ResMut<GameState>>,
    systems_store: Res<SystemsStore>,
) {
    debug!("GameStateChangedEvent triggered");

    if next_game_state.is_none() || game_state.is_none() {
        warn!(
            "One or more resources missing in observe_gamestate_change_event. next_state: {:?}, game_state: {:?}",
            next_game_state.is_some(),
            game_state.is_some()
        );
        return;
    }
    let (Some(next_game_state), Some(game_state)) =
        (next_game_state.as_deref_mut(), game_state.as_deref_mut())
    else {
        return;
    };

    match *next_game_state.get() {
        Pending(new_state) => {
            let old_state = *game_state.get();
            if old_state == new_state {
                info!("Restarting {:?}", new_state);
            } else {
                info!("Transitioning from {:?} to {:?}", old_state, new_state);
            }
            game_state.set(new_state);
            next_game_state.reset();
            on_state_exit(old_state, &mut commands, &systems_store);
            on_state_enter(new_state, &mut commands, &systems_store);
        }
        Unchanged => {
            debug!("No state change pending.");
        }
    }
}

/// Hook name run when entering `state`, if any.
pub fn enter_hook(state: GameStates) -> Option<&'static str> {
    match state {
        GameStates::None => None,
        GameStates::Setup => Some("setup"),
        GameStates::Playing => Some("enter_play"),
        GameStates::Won => Some("enter_end"),
    }
}

/// Hook name run when leaving `state`, if any.
pub fn exit_hook(state: GameStates) -> Option<&'static str> {
    match state {
        GameStates::None | GameStates::Setup => None,
        GameStates::Playing | GameStates::Won => Some("clean_scene"),
    }
}

fn on_state_enter(state: GameStates, commands: &mut Commands, systems_store: &SystemsStore) {
    run_hook(enter_hook(state), commands, systems_store);
}

fn on_state_exit(state: GameStates, commands: &mut Commands, systems_store: &SystemsStore) {
    run_hook(exit_hook(state), commands, systems_store);
}

fn run_hook(hook: Option<&str>, commands: &mut Commands, systems_store: &SystemsStore) {
    let Some(name) = hook else {
        return;
    };
    debug!("Running scene hook '{}'", name);
    let system_id = systems_store
        .get(name)
        .unwrap_or_else(|| panic!("System '{}' not found in SystemsStore", name));
    commands.run_system(*system_id);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hooks_per_state() {
        assert_eq!(enter_hook(GameStates::Setup), Some("setup"));
        assert_eq!(enter_hook(GameStates::Playing), Some("enter_play"));
        assert_eq!(enter_hook(GameStates::Won), Some("enter_end"));
        assert_eq!(exit_hook(GameStates::Setup), None);
        assert_eq!(exit_hook(GameStates::Playing), Some("clean_scene"));
        assert_eq!(exit_hook(GameStates::Won), Some("clean_scene"));
    }
}
