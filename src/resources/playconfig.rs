//! Gameplay tuning for the play scene.
//!
//! [`PlayConfig`] is the numeric record the play scene and the player
//! controller read every frame. Two named [`Preset`]s ship with the game:
//!
//! | preset    | accel | drag | gravity | jump | particle | zoom | coin sound | keys        |
//! |-----------|-------|------|---------|------|----------|------|------------|-------------|
//! | `default` | 100   | 1800 | 100     | -400 | 50       | 5    | `sfx-coin` | A/D/Space   |
//! | `classic` | 400   | 500  | 1500    | -600 | 50       | 2    | none       | ←/→/↑       |
//!
//! The `classic` numbers are a hand-picked tuning with heavier gravity and a
//! wider view. No other build of the game supplies them.
//!
//! Individual fields can be overridden from the `[gameplay]` section of
//! `config.ini` through [`GameplayOverrides`].

use bevy_ecs::prelude::Resource;

use crate::resources::input::KeyBindings;

/// Sound effect id of the coin pickup.
pub const COIN_SFX: &str = "sfx-coin";

/// Numeric tuning of the play scene.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct PlayConfig {
    /// Horizontal acceleration while a direction key is held.
    pub acceleration: f32,
    /// Horizontal drag applied when no direction key is held.
    pub drag: f32,
    /// World gravity on the Y axis.
    pub gravity: f32,
    /// Vertical velocity set on jump; negative is up.
    pub jump_velocity: f32,
    /// Speed of walk particles.
    pub particle_velocity: f32,
    /// Camera zoom.
    pub zoom: f32,
    /// Sound effect played on coin pickup, if any.
    pub coin_sfx: Option<String>,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            acceleration: 100.0,
            drag: 1800.0,
            gravity: 100.0,
            jump_velocity: -400.0,
            particle_velocity: 50.0,
            zoom: 5.0,
            coin_sfx: Some(COIN_SFX.to_string()),
        }
    }
}

impl PlayConfig {
    /// Hand-picked arcade tuning with heavier gravity and a wider view.
    pub fn classic() -> Self {
        Self {
            acceleration: 400.0,
            drag: 500.0,
            gravity: 1500.0,
            jump_velocity: -600.0,
            particle_velocity: 50.0,
            zoom: 2.0,
            coin_sfx: None,
        }
    }

    /// Replace every field the overrides set.
    pub fn apply(&mut self, overrides: &GameplayOverrides) {
        if let Some(v) = overrides.acceleration {
            self.acceleration = v;
        }
        if let Some(v) = overrides.drag {
            self.drag = v;
        }
        if let Some(v) = overrides.gravity {
            self.gravity = v;
        }
        if let Some(v) = overrides.jump_velocity {
            self.jump_velocity = v;
        }
        if let Some(v) = overrides.particle_velocity {
            self.particle_velocity = v;
        }
        if let Some(v) = overrides.zoom {
            self.zoom = v;
        }
        if let Some(sfx) = &overrides.coin_sfx {
            self.coin_sfx = sfx.clone();
        }
    }
}

/// Per-field overrides read from `config.ini`. `None` keeps the preset value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameplayOverrides {
    pub acceleration: Option<f32>,
    pub drag: Option<f32>,
    pub gravity: Option<f32>,
    pub jump_velocity: Option<f32>,
    pub particle_velocity: Option<f32>,
    pub zoom: Option<f32>,
    /// `Some(None)` disables the coin sound.
    pub coin_sfx: Option<Option<String>>,
}

/// A named pair of tuning and key bindings.
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub config: PlayConfig,
    pub keys: KeyBindings,
}

pub const PRESET_NAMES: [&str; 2] = ["default", "classic"];

impl Preset {
    pub fn default_preset() -> Self {
        Self {
            name: "default",
            config: PlayConfig::default(),
            keys: KeyBindings::wasd(),
        }
    }

    pub fn classic() -> Self {
        Self {
            name: "classic",
            config: PlayConfig::classic(),
            keys: KeyBindings::arrows(),
        }
    }

    /// Look a preset up by name (case-insensitive).
    pub fn by_name(name: &str) -> Result<Self, String> {
        match name.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Self::default_preset()),
            "classic" => Ok(Self::classic()),
            other => Err(format!(
                "Unknown preset '{}' (expected one of: {})",
                other,
                PRESET_NAMES.join(", ")
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raylib::prelude::KeyboardKey;

    #[test]
    fn test_default_preset_values() {
        let preset = Preset::by_name("default").unwrap();
        assert_eq!(preset.config.acceleration, 100.0);
        assert_eq!(preset.config.drag, 1800.0);
        assert_eq!(preset.config.gravity, 100.0);
        assert_eq!(preset.config.jump_velocity, -400.0);
        assert_eq!(preset.config.particle_velocity, 50.0);
        assert_eq!(preset.config.zoom, 5.0);
        assert_eq!(preset.config.coin_sfx.as_deref(), Some("sfx-coin"));
        assert_eq!(preset.keys.jump, KeyboardKey::KEY_SPACE);
    }

    #[test]
    fn test_classic_preset_values() {
        let preset = Preset::by_name("Classic").unwrap();
        assert_eq!(preset.name, "classic");
        assert_eq!(preset.config.acceleration, 400.0);
        assert_eq!(preset.config.drag, 500.0);
        assert_eq!(preset.config.gravity, 1500.0);
        assert_eq!(preset.config.jump_velocity, -600.0);
        assert_eq!(preset.config.zoom, 2.0);
        assert!(preset.config.coin_sfx.is_none());
        assert_eq!(preset.keys.left, KeyboardKey::KEY_LEFT);
        assert_eq!(preset.keys.jump, KeyboardKey::KEY_UP);
    }

    #[test]
    fn test_unknown_preset_is_error() {
        let err = Preset::by_name("turbo").unwrap_err();
        assert!(err.contains("turbo"));
    }

    #[test]
    fn test_overrides_apply_field_by_field() {
        let mut config = PlayConfig::default();
        config.apply(&GameplayOverrides {
            gravity: Some(900.0),
            coin_sfx: Some(None),
            ..Default::default()
        });
        assert_eq!(config.gravity, 900.0);
        assert_eq!(config.acceleration, 100.0);
        assert!(config.coin_sfx.is_none());
    }
}
