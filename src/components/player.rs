//! Gameplay markers for the platformer entities.

use bevy_ecs::prelude::Component;

/// Direction the player sprite faces. The character art faces left.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Facing {
    #[default]
    Left,
    Right,
}

impl Facing {
    /// Whether the sprite must be mirrored to face this way.
    pub fn flip_h(self) -> bool {
        self == Facing::Right
    }
}

/// The player-controlled character.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Player {
    pub facing: Facing,
}

/// Collectible coin.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Coin;

/// Level exit; touching it wins the level.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Exit;

/// Body whose motion is clipped against solid tiles and the level bounds.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct CollidesWithTiles;
