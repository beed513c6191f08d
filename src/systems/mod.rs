//! Game systems.
//!
//! Submodules overview
//! - [`animation`] – advance sprite animations
//! - [`audio`] – bridge with the audio thread (poll/update message queues)
//! - [`camera`] – dead zone camera follow
//! - [`collision`] – overlap checks between grouped colliders
//! - [`dynamictext_size`] – measure text labels for centring
//! - [`gamestate`] – check for pending state transitions, run conditions
//! - [`group`] – publish tracked group counts
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`movement`] – integrate rigid bodies and resolve tile collisions
//! - [`particleemitter`] – emit and fade particles
//! - [`playercontroller`] – keyboard control of the player
//! - [`render`] – draw world, texts and debug overlays using Raylib
//! - [`scenecontrols`] – restart key
//! - [`time`] – update simulation time and delta
//! - [`ttl`] – despawn expired entities

pub mod animation;
pub mod audio;
pub mod camera;
pub mod collision;
pub mod dynamictext_size;
pub mod gamestate;
pub mod group;
pub mod input;
pub mod movement;
pub mod particleemitter;
pub mod playercontroller;
pub mod render;
pub mod scenecontrols;
pub mod time;
pub mod ttl;
