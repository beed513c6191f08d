//! TTL (Time-to-live) system.
//!
//! Counts down every [`Ttl`](crate::components::ttl::Ttl) by the scaled frame
//! delta and despawns the entity once it runs out. Walk particles rely on it
//! to disappear after their lifespan.

use bevy_ecs::prelude::*;

use crate::components::ttl::Ttl;
use crate::resources::worldtime::WorldTime;

/// Decrements TTL and despawns entities when it reaches zero.
pub fn ttl_system(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Ttl)>,
    mut commands: Commands,
) {
    let dt = world_time.delta; // delta is already scaled by time_scale
    for (entity, mut ttl) in query.iter_mut() {
        if ttl.tick(dt) {
            commands.entity(entity).try_despawn();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expired_entities_are_despawned() {
        let mut world = World::new();
        let mut time = WorldTime::default();
        time.advance(0.2);
        world.insert_resource(time);
        let short = world.spawn(Ttl::new(0.1)).id();
        let long = world.spawn(Ttl::new(0.35)).id();

        let mut schedule = Schedule::default();
        schedule.add_systems(ttl_system);
        schedule.run(&mut world);

        assert!(world.get_entity(short).is_err());
        let remaining = world.get::<Ttl>(long).unwrap().remaining;
        assert!((remaining - 0.15).abs() < 1e-5);
    }
}
