//! Per-frame keyboard input resource.
//!
//! Captures the handful of actions the game cares about and exposes them to
//! systems via the [`InputState`] resource. Movement is level-triggered (read
//! `active`), while jump, restart and the debug toggle are edge-triggered
//! (read `just_pressed`). Which physical key drives each action comes from
//! [`KeyBindings`], chosen by the gameplay preset.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently held down.
    pub active: bool,
    /// Whether the key went down this frame.
    pub just_pressed: bool,
    /// Whether the key went up this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound(KeyboardKey::KEY_NULL)
    }
}

impl BoolState {
    /// Released state bound to `key`.
    pub fn bound(key: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: key,
        }
    }

    /// Store this frame's polled key state.
    pub fn update(&mut self, down: bool, pressed: bool, released: bool) {
        self.active = down;
        self.just_pressed = pressed;
        self.just_released = released;
    }

    /// Press the key for one frame. Used by headless drivers and tests.
    pub fn press(&mut self) {
        self.update(true, true, false);
    }

    /// Keep the key held without a new edge.
    pub fn hold(&mut self) {
        self.update(true, false, false);
    }

    pub fn release(&mut self) {
        let was_down = self.active;
        self.update(false, false, was_down);
    }
}

/// Physical keys for each game action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub left: KeyboardKey,
    pub right: KeyboardKey,
    pub jump: KeyboardKey,
    pub restart: KeyboardKey,
    pub debug: KeyboardKey,
}

impl KeyBindings {
    /// A/D to walk, Space to jump.
    pub fn wasd() -> Self {
        Self {
            left: KeyboardKey::KEY_A,
            right: KeyboardKey::KEY_D,
            jump: KeyboardKey::KEY_SPACE,
            restart: KeyboardKey::KEY_R,
            debug: KeyboardKey::KEY_F,
        }
    }

    /// Cursor keys, Up to jump.
    pub fn arrows() -> Self {
        Self {
            left: KeyboardKey::KEY_LEFT,
            right: KeyboardKey::KEY_RIGHT,
            jump: KeyboardKey::KEY_UP,
            restart: KeyboardKey::KEY_R,
            debug: KeyboardKey::KEY_F,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::wasd()
    }
}

/// Resource capturing the per-frame keyboard state relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub left: BoolState,
    pub right: BoolState,
    pub jump: BoolState,
    pub restart: BoolState,
    pub debug: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self::with_bindings(KeyBindings::default())
    }
}

impl InputState {
    pub fn with_bindings(keys: KeyBindings) -> Self {
        Self {
            left: BoolState::bound(keys.left),
            right: BoolState::bound(keys.right),
            jump: BoolState::bound(keys.jump),
            restart: BoolState::bound(keys.restart),
            debug: BoolState::bound(keys.debug),
        }
    }

    pub fn bindings(&self) -> KeyBindings {
        KeyBindings {
            left: self.left.key_binding,
            right: self.right.key_binding,
            jump: self.jump.key_binding,
            restart: self.restart.key_binding,
            debug: self.debug.key_binding,
        }
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut BoolState> {
        [
            &mut self.left,
            &mut self.right,
            &mut self.jump,
            &mut self.restart,
            &mut self.debug,
        ]
        .into_iter()
    }

    /// Drop every edge, keeping held keys held.
    pub fn clear_edges(&mut self) {
        for state in self.iter_mut() {
            state.just_pressed = false;
            state.just_released = false;
        }
    }
}

/// Human readable name of a key, as shown in on-screen hints.
pub fn key_label(key: KeyboardKey) -> String {
    let named = match key {
        KeyboardKey::KEY_SPACE => Some("Space"),
        KeyboardKey::KEY_ENTER => Some("Enter"),
        KeyboardKey::KEY_ESCAPE => Some("Escape"),
        KeyboardKey::KEY_LEFT => Some("Left"),
        KeyboardKey::KEY_RIGHT => Some("Right"),
        KeyboardKey::KEY_UP => Some("Up"),
        KeyboardKey::KEY_DOWN => Some("Down"),
        KeyboardKey::KEY_NULL => Some("?"),
        _ => None,
    };
    if let Some(name) = named {
        return name.to_string();
    }
    let code = key as u32;
    match char::from_u32(code) {
        Some(c) if c.is_ascii_alphanumeric() => c.to_ascii_uppercase().to_string(),
        _ => format!("{:?}", key).trim_start_matches("KEY_").to_string(),
    }
}
