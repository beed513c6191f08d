//! Z-index component for render ordering.
//!
//! Entities with higher z-index values are drawn on top of those with lower
//! values.

use bevy_ecs::prelude::Component;

/// Rendering order hint for 2D drawing. Higher values are drawn later.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);

/// Ground tiles.
pub const Z_TILES: i32 = -1;
/// Coins and exits.
pub const Z_PICKUPS: i32 = 0;
/// The player sprite.
pub const Z_PLAYER: i32 = 1;
/// Walk particles, drawn over the player like the emitter added after it.
pub const Z_PARTICLES: i32 = 2;
