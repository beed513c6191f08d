//! Particle emitter component for the walk effect.
//!
//! The [`ParticleEmitter`] component makes its entity spawn short-lived
//! particle sprites while it is `emitting`. The emitter follows its owner's
//! [`MapPosition`](super::mapposition::MapPosition) with an `offset`, and every
//! particle gets the same `particle_velocity`, a random frame from `frames`, a
//! fixed `lifespan`, and a [`ParticleFade`] that eases scale and alpha over
//! that lifespan.
//!
//! # How It Works
//!
//! 1. The player controller moves the emitter to the trailing edge, points the
//!    particle velocity against the motion, and calls [`ParticleEmitter::start`]
//!    or [`ParticleEmitter::stop`].
//! 2. The `particle_emitter_system` accumulates time and emits
//!    `particles_per_emission` particles every `1 / emissions_per_second`
//!    seconds, catching up on long frames.
//! 3. `particle_fade_system` eases each particle and the TTL system despawns it.
//!
//! # Related
//!
//! - [`crate::systems::particleemitter::particle_emitter_system`]
//! - [`crate::components::ttl::Ttl`]

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

/// Particle lifespan of the walk effect, in seconds.
pub const WALK_PARTICLE_LIFESPAN: f32 = 0.35;

#[derive(Component, Debug, Clone)]
pub struct ParticleEmitter {
    /// Texture the particle frames are cut from.
    pub tex_key: String,
    /// Top-left corners of the candidate frames inside the texture.
    pub frames: Vec<Vector2>,
    /// Size of a single frame in texture pixels.
    pub frame_size: Vector2,
    /// Offset from owner's MapPosition.
    pub offset: Vector2,
    /// Velocity given to every particle.
    pub particle_velocity: Vector2,
    /// Emissions per second. If <= 0, no emissions occur.
    pub emissions_per_second: f32,
    pub particles_per_emission: u32,
    /// Particle lifespan in seconds.
    pub lifespan: f32,
    /// Scale at birth and at death.
    pub scale: (f32, f32),
    /// Alpha at birth and at death.
    pub alpha: (f32, f32),
    pub emitting: bool,
    /// Time accumulated since last emission.
    pub time_since_emit: f32,
}

impl Default for ParticleEmitter {
    fn default() -> Self {
        Self {
            tex_key: String::new(),
            frames: Vec::new(),
            frame_size: Vector2::zero(),
            offset: Vector2::zero(),
            particle_velocity: Vector2::zero(),
            emissions_per_second: 60.0,
            particles_per_emission: 1,
            lifespan: WALK_PARTICLE_LIFESPAN,
            scale: (0.015, 0.05),
            alpha: (1.0, 0.1),
            emitting: false,
            time_since_emit: 0.0,
        }
    }
}

impl ParticleEmitter {
    /// Walk effect: two square smoke frames laid side by side in `tex_key`.
    pub fn walk_effect(tex_key: impl Into<String>, frame_px: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            frames: vec![Vector2::zero(), Vector2::new(frame_px, 0.0)],
            frame_size: Vector2::new(frame_px, frame_px),
            ..Default::default()
        }
    }

    /// Start emitting. Restarting an emitter that is already on keeps its
    /// emission timer.
    pub fn start(&mut self) {
        if !self.emitting {
            self.emitting = true;
            self.time_since_emit = 0.0;
        }
    }

    pub fn stop(&mut self) {
        self.emitting = false;
    }

    pub fn is_emitting(&self) -> bool {
        self.emitting
    }

    pub fn follow_offset(&mut self, x: f32, y: f32) {
        self.offset = Vector2::new(x, y);
    }

    pub fn set_particle_speed(&mut self, vx: f32, vy: f32) {
        self.particle_velocity = Vector2::new(vx, vy);
    }

    /// Number of emissions due after `dt` more seconds, consuming them from
    /// the accumulator.
    pub fn take_due_emissions(&mut self, dt: f32) -> u32 {
        if !self.emitting || self.emissions_per_second <= 0.0 {
            return 0;
        }
        let interval = 1.0 / self.emissions_per_second;
        self.time_since_emit += dt;
        let mut due = 0;
        while self.time_since_emit >= interval {
            self.time_since_emit -= interval;
            due += 1;
        }
        due
    }
}

/// Linear scale/alpha easing for a live particle.
#[derive(Component, Debug, Clone, Copy)]
pub struct ParticleFade {
    pub lifespan: f32,
    pub age: f32,
    pub scale: (f32, f32),
    pub alpha: (f32, f32),
}

impl ParticleFade {
    pub fn new(lifespan: f32, scale: (f32, f32), alpha: (f32, f32)) -> Self {
        Self {
            lifespan,
            age: 0.0,
            scale,
            alpha,
        }
    }

    /// Fraction of the lifespan already elapsed, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.lifespan <= 0.0 {
            return 1.0;
        }
        (self.age / self.lifespan).clamp(0.0, 1.0)
    }

    pub fn current_scale(&self) -> f32 {
        lerp(self.scale.0, self.scale.1, self.progress())
    }

    pub fn current_alpha(&self) -> f32 {
        lerp(self.alpha.0, self.alpha.1, self.progress())
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
