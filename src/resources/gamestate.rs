//! High-level game state resources.
//!
//! These resources track the authoritative current state of the game and any
//! pending transition requested by systems or overlap callbacks. See
//! `crate::events::gamestate::observe_gamestate_change_event` for how a
//! transition is applied and scene hooks are invoked.

use bevy_ecs::prelude::Resource;

/// Discrete high-level states the game can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    #[default]
    None,
    /// Loading textures, the level and sounds.
    Setup,
    /// The play scene is running.
    Playing,
    /// The end scene is showing.
    Won,
}

/// Representation of a requested next state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NextGameStates {
    #[default]
    Unchanged,
    Pending(GameStates),
}

/// Authoritative current game state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameState {
    current: GameStates,
}

impl GameState {
    /// Create a new state initialized to [`GameStates::None`].
    pub fn new() -> Self {
        GameState {
            current: GameStates::None,
        }
    }
    /// Read-only access to the current state.
    pub fn get(&self) -> &GameStates {
        &self.current
    }
    /// Update the current state immediately.
    ///
    /// Prefer requesting transitions via [`NextGameState`] so that scene
    /// teardown and setup run.
    pub fn set(&mut self, state: GameStates) {
        self.current = state;
    }
}

/// Intent to change to a new game state.
///
/// Requesting the state the game is already in is a valid transition: it
/// tears the scene down and builds it again (restart).
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NextGameState {
    next: NextGameStates,
}

impl NextGameState {
    /// Create a new value initialized to [`NextGameStates::Unchanged`].
    pub fn new() -> Self {
        NextGameState {
            next: NextGameStates::Unchanged,
        }
    }

    /// Get the current transition request.
    pub fn get(&self) -> &NextGameStates {
        &self.next
    }

    /// Request a transition to `next`. The `check_pending_state` system turns
    /// the request into a state change event.
    pub fn set(&mut self, next: GameStates) {
        self.next = NextGameStates::Pending(next);
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.next, NextGameStates::Pending(_))
    }

    /// Reset to [`NextGameStates::Unchanged`].
    pub fn reset(&mut self) {
        self.next = NextGameStates::Unchanged;
    }
}
