//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world. Components define data and behaviors such as position,
//! rendering, physics, overlap rules, animation and particles.
//!
//! Submodules overview:
//! - [`animation`] – playback state for sprite-strip animations
//! - [`boxcollider`] – axis-aligned rectangular collider for overlaps and tile collision
//! - [`collision`] – overlap rules between groups and the context their callbacks receive
//! - [`dynamictext`] – text component for rendering strings in screen space
//! - [`group`] – tag component for grouping entities by name
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`particleemitter`] – particle emitter and per-particle fade parameters
//! - [`persistent`] – marker for entities that persist across scene changes
//! - [`player`] – player, coin and exit markers plus facing direction
//! - [`rigidbody`] – arcade-style body with velocity, acceleration, drag and contact flags
//! - [`scale`] – 2D scale factor for sprites
//! - [`screenposition`] – screen-space position for UI elements
//! - [`sprite`] – 2D sprite rendering component
//! - [`tint`] – colour multiplier (mostly used for particle alpha)
//! - [`ttl`] – time-to-live countdown for automatic despawn
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod animation;
pub mod boxcollider;
pub mod collision;
pub mod dynamictext;
pub mod group;
pub mod mapposition;
pub mod particleemitter;
pub mod persistent;
pub mod player;
pub mod rigidbody;
pub mod scale;
pub mod screenposition;
pub mod sprite;
pub mod tint;
pub mod ttl;
pub mod zindex;
