//! Tracked groups resource for entity counting.
//!
//! The [`TrackedGroups`] resource defines which group names are counted by
//! [`update_group_counts_system`](crate::systems::group::update_group_counts_system).
//! Counts are published to
//! [`WorldSignals`](crate::resources::worldsignals::WorldSignals) as
//! `"group_count:{name}"`. The play scene tracks `coin` and `exit`.

use bevy_ecs::prelude::*;
use rustc_hash::FxHashSet;

/// Set of group names whose entity counts are published each frame.
#[derive(Debug, Clone, Resource, Default)]
pub struct TrackedGroups {
    pub groups: FxHashSet<String>,
}

impl TrackedGroups {
    pub fn add_group(&mut self, group_name: impl Into<String>) {
        self.groups.insert(group_name.into());
    }

    pub fn has_group(&self, group_name: impl AsRef<str>) -> bool {
        self.groups.contains(group_name.as_ref())
    }

    pub fn clear(&mut self) {
        self.groups.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.groups.iter()
    }
}
