//! Group entity counting system.
//!
//! Counts entities belonging to the groups listed in [`TrackedGroups`] and
//! publishes the counts as `group_count:{name}` integer signals in
//! [`WorldSignals`]. The play scene tracks coins and exits; the debug overlay
//! shows the remaining coin count.

use crate::components::group::Group;
use crate::resources::group::TrackedGroups;
use crate::resources::worldsignals::WorldSignals;
use bevy_ecs::prelude::*;

use rustc_hash::FxHashMap;

/// Counts entities for each tracked group and updates [`WorldSignals`].
///
/// Groups with no entities left are reported as `0`.
pub fn update_group_counts_system(
    query_group: Query<&Group>,
    mut world_signals: ResMut<WorldSignals>,
    tracked_groups: Res<TrackedGroups>,
) {
    let mut counts: FxHashMap<&str, i32> = FxHashMap::default();
    for group in query_group.iter() {
        if tracked_groups.has_group(group.name()) {
            *counts.entry(group.name()).or_insert(0) += 1;
        }
    }

    for group_name in tracked_groups.iter() {
        let count = counts.get(group_name.as_str()).copied().unwrap_or(0);
        world_signals.set_group_count(group_name, count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::group::{COIN, EXIT, PARTICLE};

    #[test]
    fn test_counts_tracked_groups_only() {
        let mut world = World::new();
        world.insert_resource(WorldSignals::default());
        let mut tracked = TrackedGroups::default();
        tracked.add_group(COIN);
        tracked.add_group(EXIT);
        world.insert_resource(tracked);
        world.spawn(Group::new(COIN));
        world.spawn(Group::new(COIN));
        world.spawn(Group::new(PARTICLE));

        let mut schedule = Schedule::default();
        schedule.add_systems(update_group_counts_system);
        schedule.run(&mut world);

        let signals = world.resource::<WorldSignals>();
        assert_eq!(signals.get_group_count(COIN), Some(2));
        assert_eq!(signals.get_group_count(EXIT), Some(0));
        assert_eq!(signals.get_group_count(PARTICLE), None);
    }
}
