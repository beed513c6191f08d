//! Input system.
//!
//! [`update_input_state`] reads hardware input from raylib each frame and
//! writes the results into [`crate::resources::input::InputState`]. A press of
//! the debug key toggles debug mode via
//! [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent).
use bevy_ecs::prelude::*;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::InputState;

/// Poll raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    for state in input.iter_mut() {
        let key = state.key_binding;
        state.update(
            rl.is_key_down(key),
            rl.is_key_pressed(key),
            rl.is_key_released(key),
        );
    }

    if input.debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
}
