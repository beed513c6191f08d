//! Overlap event and the observer that dispatches it to overlap rules.
//!
//! The overlap detector
//! ([`crate::systems::collision::overlap_detector`]) triggers an
//! [`OverlapEvent`] for every pair of entities whose groups are paired by an
//! [`OverlapRule`] and whose colliders intersect. [`overlap_observer`] then
//! calls the rule callback synchronously, inside the same frame tick.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::trace;

use crate::components::collision::{OverlapCtx, OverlapRule};
use crate::components::group::Group;

/// Event fired when two entities paired by an overlap rule intersect.
///
/// No ordering guarantees are provided between `a` and `b`; the observer
/// puts them in rule order before calling back.
#[derive(Event, Debug, Clone, Copy)]
pub struct OverlapEvent {
    pub a: Entity,
    pub b: Entity,
}

/// Global observer that runs every matching rule callback for an overlap.
///
/// Entities despawned earlier in the same frame (a coin already collected by
/// a previous pair) no longer have a [`Group`] and are skipped.
pub fn overlap_observer(
    trigger: On<OverlapEvent>,
    rules: Query<&OverlapRule>,
    groups: Query<&Group>,
    mut ctx: OverlapCtx,
) {
    let OverlapEvent { a, b } = *trigger.event();
    let (Ok(group_a), Ok(group_b)) = (groups.get(a), groups.get(b)) else {
        return;
    };
    for rule in rules.iter() {
        if let Some((first, second)) = rule.ordered((a, group_a.name()), (b, group_b.name())) {
            trace!(
                "Overlap {}({:?}) x {}({:?})",
                rule.group_a, first, rule.group_b, second
            );
            (rule.callback)(first, second, &mut ctx);
        }
    }
}
