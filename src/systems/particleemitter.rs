//! Particle emitter systems.
//!
//! - [`particle_emitter_system`] spawns particles for every emitter that is
//!   `emitting`, catching up when a frame is long.
//! - [`particle_fade_system`] eases scale and alpha of live particles over
//!   their lifespan.
//!
//! Particles are plain entities: a centred [`Sprite`] with a random frame, a
//! gravity-free [`RigidBody`] carrying the emitter's particle velocity, a
//! [`Ttl`] equal to the lifespan and a [`ParticleFade`]. Movement and TTL
//! systems take it from there.

use bevy_ecs::prelude::*;
use fastrand::Rng;
use log::trace;

use crate::components::group::{Group, PARTICLE};
use crate::components::mapposition::MapPosition;
use crate::components::particleemitter::{ParticleEmitter, ParticleFade};
use crate::components::rigidbody::RigidBody;
use crate::components::scale::Scale;
use crate::components::sprite::Sprite;
use crate::components::tint::Tint;
use crate::components::ttl::Ttl;
use crate::components::zindex::{Z_PARTICLES, ZIndex};
use crate::resources::worldtime::WorldTime;

/// System that processes particle emitters and spawns particles.
///
/// # Ordering
///
/// Should run **before** `movement` so particles move on their spawn frame,
/// and after the player controller so the emitter state is current.
pub fn particle_emitter_system(
    mut emitter_query: Query<(&MapPosition, &mut ParticleEmitter)>,
    time: Res<WorldTime>,
    mut commands: Commands,
    mut rng: Local<Rng>,
) {
    let dt = time.delta;
    if dt <= 0.0 {
        return;
    }

    for (owner_pos, mut emitter) in emitter_query.iter_mut() {
        if emitter.frames.is_empty() {
            continue;
        }
        let due = emitter.take_due_emissions(dt);
        if due > 0 {
            trace!("Emitting {} bursts", due);
        }
        for _ in 0..due {
            emit_particles(&mut commands, owner_pos, &emitter, &mut rng);
        }
    }
}

/// Emit particles for a single emission event.
fn emit_particles(
    commands: &mut Commands,
    owner_pos: &MapPosition,
    emitter: &ParticleEmitter,
    rng: &mut Rng,
) {
    let spawn_pos = owner_pos.pos + emitter.offset;

    for _ in 0..emitter.particles_per_emission {
        let frame = emitter.frames[rng.usize(0..emitter.frames.len())];
        let mut tint = Tint::default();
        tint.set_alpha(emitter.alpha.0);

        commands.spawn((
            Group::new(PARTICLE),
            MapPosition::new(spawn_pos.x, spawn_pos.y),
            RigidBody::floating(emitter.particle_velocity),
            Sprite::centered(
                emitter.tex_key.clone(),
                emitter.frame_size.x,
                emitter.frame_size.y,
                frame,
            ),
            Scale::uniform(emitter.scale.0),
            tint,
            Ttl::new(emitter.lifespan),
            ParticleFade::new(emitter.lifespan, emitter.scale, emitter.alpha),
            ZIndex(Z_PARTICLES),
        ));
    }
}

/// Age particles and ease their scale and alpha.
pub fn particle_fade_system(
    mut query: Query<(&mut ParticleFade, &mut Scale, &mut Tint)>,
    time: Res<WorldTime>,
) {
    for (mut fade, mut scale, mut tint) in query.iter_mut() {
        fade.age += time.delta;
        let s = fade.current_scale();
        scale.scale.x = s;
        scale.scale.y = s;
        tint.set_alpha(fade.current_alpha());
    }
}
