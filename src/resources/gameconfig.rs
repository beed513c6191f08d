//! Game configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides defaults
//! for safe startup; every key is optional.
//!
//! # Configuration File Format
//!
//! ```ini
//! [render]
//! width = 640
//! height = 360
//!
//! [window]
//! width = 1280
//! height = 720
//! vsync = true
//! target_fps = 120
//!
//! [level]
//! path = assets/levels/level1.tmj
//!
//! [gameplay]
//! preset = default
//! ; optional per-field overrides
//! gravity = 900
//! coin_sfx = none
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::resources::playconfig::GameplayOverrides;

/// Default safe values for startup
const DEFAULT_RENDER_WIDTH: u32 = 640;
const DEFAULT_RENDER_HEIGHT: u32 = 360;
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";
pub const DEFAULT_LEVEL_PATH: &str = "./assets/levels/level1.tmj";
pub const DEFAULT_PRESET: &str = "default";

/// Game configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Internal render width in pixels.
    pub render_width: u32,
    /// Internal render height in pixels.
    pub render_height: u32,
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Tiled map to play.
    pub level_path: PathBuf,
    /// Name of the gameplay preset.
    pub preset: String,
    /// Per-field tuning overrides on top of the preset.
    pub overrides: GameplayOverrides,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            render_width: DEFAULT_RENDER_WIDTH,
            render_height: DEFAULT_RENDER_HEIGHT,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            level_path: PathBuf::from(DEFAULT_LEVEL_PATH),
            preset: DEFAULT_PRESET.to_string(),
            overrides: GameplayOverrides::default(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config)?;
        info!(
            "Loaded config from {:?}: {}x{} render, {}x{} window, fps={}, vsync={}, level={:?}, preset={}",
            self.config_path,
            self.render_width,
            self.render_height,
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.level_path,
            self.preset
        );
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config)
    }

    fn apply_ini(&mut self, config: &Ini) -> Result<(), String> {
        // [render] section
        if let Some(width) = config.getuint("render", "width")? {
            self.render_width = width as u32;
        }
        if let Some(height) = config.getuint("render", "height")? {
            self.render_height = height as u32;
        }

        // [window] section
        if let Some(width) = config.getuint("window", "width")? {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height")? {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps")? {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync")? {
            self.vsync = vsync;
        }

        // [level] section
        if let Some(path) = config.get("level", "path") {
            self.level_path = PathBuf::from(path);
        }

        // [gameplay] section
        if let Some(preset) = config.get("gameplay", "preset") {
            self.preset = preset;
        }
        let float = |key: &str| -> Result<Option<f32>, String> {
            Ok(config.getfloat("gameplay", key)?.map(|v| v as f32))
        };
        self.overrides.acceleration = float("acceleration")?.or(self.overrides.acceleration);
        self.overrides.drag = float("drag")?.or(self.overrides.drag);
        self.overrides.gravity = float("gravity")?.or(self.overrides.gravity);
        self.overrides.jump_velocity = float("jump_velocity")?.or(self.overrides.jump_velocity);
        self.overrides.particle_velocity =
            float("particle_velocity")?.or(self.overrides.particle_velocity);
        self.overrides.zoom = float("zoom")?.or(self.overrides.zoom);
        if let Some(sfx) = config.get("gameplay", "coin_sfx") {
            let sfx = sfx.trim();
            self.overrides.coin_sfx = if sfx.is_empty() || sfx.eq_ignore_ascii_case("none") {
                Some(None)
            } else {
                Some(Some(sfx.to_string()))
            };
        }
        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    /// Get the render size.
    pub fn render_size(&self) -> (u32, u32) {
        (self.render_width, self.render_height)
    }
}
