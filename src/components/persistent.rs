//! Persistent entity marker component.
//!
//! Entities with the [`Persistent`] component are not despawned when the
//! active scene changes. Observers and registered scene systems carry it;
//! everything a scene spawns does not.

use bevy_ecs::prelude::Component;

/// Tag component used to mark entities that should survive scene changes.
#[derive(Component, Clone, Debug)]
pub struct Persistent;
