//! Overlap detection between grouped colliders.
//!
//! [`overlap_detector`] tests every pair of entities carrying a
//! [`BoxCollider`] and a [`Group`]. A pair is reported only when some
//! [`OverlapRule`] pairs their groups, as a single
//! [`OverlapEvent`](crate::events::collision::OverlapEvent) that the
//! observer in [`crate::events::collision`] dispatches to the rule callbacks.

use bevy_ecs::prelude::*;
use smallvec::SmallVec;

use crate::components::boxcollider::BoxCollider;
use crate::components::collision::OverlapRule;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::events::collision::OverlapEvent;

pub fn overlap_detector(
    query: Query<(Entity, &MapPosition, &BoxCollider, &Group)>,
    rules: Query<&OverlapRule>,
    mut commands: Commands,
) {
    if rules.is_empty() {
        return;
    }

    let mut pairs: SmallVec<[(Entity, Entity); 8]> = SmallVec::new();
    for [(a, pos_a, col_a, group_a), (b, pos_b, col_b, group_b)] in query.iter_combinations() {
        if !rules
            .iter()
            .any(|rule| rule.matches(group_a.name(), group_b.name()))
        {
            continue;
        }
        if col_a.overlaps(pos_a.pos, col_b, pos_b.pos) {
            pairs.push((a, b));
        }
    }

    for (a, b) in pairs {
        commands.trigger(OverlapEvent { a, b });
    }
}
