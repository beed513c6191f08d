use bevy_ecs::prelude::Component;

/// Group name used by the player entity.
pub const PLAYER: &str = "player";
/// Group name used by collectible coins.
pub const COIN: &str = "coin";
/// Group name used by exit triggers.
pub const EXIT: &str = "exit";
/// Group name used by ground tile sprites.
pub const TILES: &str = "tiles";
/// Group name used by spawned particles.
pub const PARTICLE: &str = "particle";
/// Group name used by screen labels.
pub const TEXTS: &str = "texts";

/// Tag component naming the group an entity belongs to.
///
/// Overlap rules and group counting match on this name.
#[derive(Component, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Group(String);

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}
