//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: input state, timing, rendering
//! handles, asset stores, level data and tuning. Each submodule documents the
//! semantics and intended usage of its resource(s).
//!
//! Overview
//! - `animationstore` – definitions for sprite animations reused across entities
//! - `audio` – bridge and channels for the background audio thread
//! - `camera2d` – shared 2D camera and its follow rules
//! - `debugmode` – presence toggles collider outlines and the diagnostic overlay
//! - `gameconfig` – settings read from `config.ini`
//! - `gamestate` – authoritative and pending high-level game state
//! - `group` – groups whose entity counts are published as signals
//! - `input` – per-frame keyboard state and key bindings
//! - `level` – tile grid and placed objects loaded from a Tiled map
//! - `physicsworld` – gravity of the current scene
//! - `playconfig` – gameplay tuning and named presets
//! - `rendertarget` – fixed-resolution framebuffer scaled to the window
//! - `screensize` – internal render resolution in pixels
//! - `systemsstore` – registry of scene hooks by name
//! - `texturestore` – loaded textures keyed by string IDs
//! - `worldsignals` – global key/value signals
//! - `worldtime` – simulation time and delta
pub mod animationstore;
pub mod audio;
pub mod camera2d;
pub mod debugmode;
pub mod gameconfig;
pub mod gamestate;
pub mod group;
pub mod input;
pub mod level;
pub mod physicsworld;
pub mod playconfig;
pub mod rendertarget;
pub mod screensize;
pub mod systemsstore;
pub mod texturestore;
pub mod worldsignals;
pub mod worldtime;
