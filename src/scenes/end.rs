//! The win screen.
use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::Color;

use crate::components::dynamictext::DynamicText;
use crate::components::group::{Group, TEXTS};
use crate::components::screenposition::ScreenPosition;
use crate::resources::input::{InputState, key_label};
use crate::resources::screensize::ScreenSize;

pub const WIN_TEXT: &str = "You Win!";

/// Hint under the title, naming the restart key.
pub fn restart_hint(input: &InputState) -> String {
    format!("Press {} to play again", key_label(input.bindings().restart))
}

/// Two centred labels; the restart key is handled by
/// [`restart_on_key`](crate::systems::scenecontrols::restart_on_key).
pub fn enter_end(mut commands: Commands, screen: Res<ScreenSize>, input: Res<InputState>) {
    let cx = screen.w as f32 * 0.5;
    let cy = screen.h as f32 * 0.5;

    commands.spawn((
        Group::new(TEXTS),
        ScreenPosition::new(cx, cy - 20.0),
        DynamicText::centered(WIN_TEXT, 48, Color::WHITE),
    ));
    commands.spawn((
        Group::new(TEXTS),
        ScreenPosition::new(cx, cy + 20.0),
        DynamicText::centered(restart_hint(&input), 24, Color::YELLOW),
    ));
    info!("Showing end screen");
}
