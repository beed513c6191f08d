//! Overlap rules between entity groups.
//!
//! An [`OverlapRule`] entity pairs two group names with a callback. The
//! overlap detector emits an
//! [`OverlapEvent`](crate::events::collision::OverlapEvent) for every
//! overlapping pair, and the observer invokes the callback with the member of
//! `group_a` first and the member of `group_b` second.

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemParam;

use crate::events::audio::AudioCmd;
use crate::resources::gamestate::NextGameState;
use crate::resources::playconfig::PlayConfig;
use crate::resources::worldsignals::WorldSignals;

/// World access handed to overlap callbacks.
#[derive(SystemParam)]
pub struct OverlapCtx<'w, 's> {
    pub commands: Commands<'w, 's>,
    pub next_state: ResMut<'w, NextGameState>,
    pub audio: MessageWriter<'w, AudioCmd>,
    pub config: Res<'w, PlayConfig>,
    pub signals: ResMut<'w, WorldSignals>,
}

/// Callback signature for overlap rules: `(member of group_a, member of group_b, ctx)`.
pub type OverlapCallback = for<'a, 'w, 's> fn(Entity, Entity, &'a mut OverlapCtx<'w, 's>);

#[derive(Component)]
pub struct OverlapRule {
    pub group_a: String,
    pub group_b: String,
    pub callback: OverlapCallback,
}

impl OverlapRule {
    pub fn new(
        group_a: impl Into<String>,
        group_b: impl Into<String>,
        callback: OverlapCallback,
    ) -> Self {
        Self {
            group_a: group_a.into(),
            group_b: group_b.into(),
            callback,
        }
    }

    pub fn matches(&self, group_a: &str, group_b: &str) -> bool {
        (self.group_a == group_a && self.group_b == group_b)
            || (self.group_a == group_b && self.group_b == group_a)
    }

    /// Put `(a, b)` in rule order, given the group each one belongs to.
    /// Returns `None` if the pair does not match this rule.
    pub fn ordered(
        &self,
        a: (Entity, &str),
        b: (Entity, &str),
    ) -> Option<(Entity, Entity)> {
        if self.group_a == a.1 && self.group_b == b.1 {
            Some((a.0, b.0))
        } else if self.group_a == b.1 && self.group_b == a.1 {
            Some((b.0, a.0))
        } else {
            None
        }
    }
}
