//! Global signal storage resource.
//!
//! The [`WorldSignals`] resource is a world-wide key/value map for
//! cross-system communication. The play scene keeps the `coins_collected`
//! counter and the `player` entity here, and the group counting system
//! publishes `group_count:{name}` integers.

use bevy_ecs::prelude::{Entity, Resource};
use rustc_hash::{FxHashMap, FxHashSet};

/// Key prefix for group counts published by the group counting system.
pub const GROUP_COUNT_PREFIX: &str = "group_count:";

/// Global signal storage for cross-system communication.
#[derive(Debug, Clone, Default, Resource)]
pub struct WorldSignals {
    /// Integer numeric signals addressed by string keys.
    pub integers: FxHashMap<String, i32>,
    /// Presence-only boolean flags; a key being present means "true".
    pub flags: FxHashSet<String>,
    /// Map of entities of interest for the current scene.
    pub entities: FxHashMap<String, Entity>,
}

impl WorldSignals {
    /// Set an integer signal value.
    pub fn set_integer(&mut self, key: impl Into<String>, value: i32) {
        self.integers.insert(key.into(), value);
    }
    /// Get an integer signal by key.
    pub fn get_integer(&self, key: &str) -> Option<i32> {
        self.integers.get(key).copied()
    }
    /// Add `delta` to an integer signal, starting from zero when absent.
    /// Returns the new value.
    pub fn add_integer(&mut self, key: &str, delta: i32) -> i32 {
        let value = self.integers.entry(key.to_string()).or_insert(0);
        *value += delta;
        *value
    }
    /// Publish the entity count of a tracked group.
    pub fn set_group_count(&mut self, group: &str, count: i32) {
        let key = format!("{GROUP_COUNT_PREFIX}{group}");
        if self.integers.get(&key) != Some(&count) {
            self.integers.insert(key, count);
        }
    }
    /// Last published entity count of a tracked group.
    pub fn get_group_count(&self, group: &str) -> Option<i32> {
        self.integers
            .get(&format!("{GROUP_COUNT_PREFIX}{group}"))
            .copied()
    }
    /// Mark a flag as present/true.
    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.flags.insert(key.into());
    }
    /// Check whether a flag is present/true.
    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.contains(key)
    }
    /// Get an entity by key.
    pub fn get_entity(&self, key: &str) -> Option<&Entity> {
        self.entities.get(key)
    }
    /// Set an entity by key.
    pub fn set_entity(&mut self, key: impl Into<String>, entity: Entity) {
        self.entities.insert(key.into(), entity);
    }
    /// Drop every scene-scoped value.
    pub fn clear(&mut self) {
        self.integers.clear();
        self.flags.clear();
        self.entities.clear();
    }
}
