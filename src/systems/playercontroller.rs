//! Keyboard control of the player character.
//!
//! Runs every frame while playing. Movement keys are level-triggered, jump is
//! edge-triggered and only honoured while grounded:
//!
//! - left held: accelerate left, face left, walk animation, dust at the
//!   right edge blowing right, emitter started when grounded;
//! - otherwise right held: the mirror image;
//! - neither: no acceleration, drag on, idle animation, emitter stopped;
//! - airborne: the jump animation overrides walk and idle.
//!
//! Left wins when both directions are held.

use bevy_ecs::prelude::*;

use crate::components::animation::Animation;
use crate::components::particleemitter::ParticleEmitter;
use crate::components::player::{Facing, Player};
use crate::components::rigidbody::RigidBody;
use crate::components::scale::Scale;
use crate::components::sprite::Sprite;
use crate::resources::input::InputState;
use crate::resources::playconfig::PlayConfig;

/// Vertical offset of the walk dust from the feet pivot.
const DUST_OFFSET_Y: f32 = -1.0;

pub fn player_controller(
    mut query: Query<(
        &mut Player,
        &mut RigidBody,
        &mut Sprite,
        &mut Animation,
        &mut ParticleEmitter,
        Option<&Scale>,
    )>,
    input: Res<InputState>,
    config: Res<PlayConfig>,
) {
    for (mut player, mut body, mut sprite, mut anim, mut dust, scale) in query.iter_mut() {
        let grounded = body.is_grounded();
        let half_width = sprite.width * scale.copied().unwrap_or_default().scale.x * 0.5;

        let walking = if input.left.active {
            Some(Facing::Left)
        } else if input.right.active {
            Some(Facing::Right)
        } else {
            None
        };

        match walking {
            Some(facing) => {
                let sign = match facing {
                    Facing::Left => -1.0,
                    Facing::Right => 1.0,
                };
                body.set_acceleration_x(sign * config.acceleration);
                player.facing = facing;
                sprite.flip_h = facing.flip_h();
                anim.play("walk");
                dust.follow_offset(-sign * half_width, DUST_OFFSET_Y);
                dust.set_particle_speed(-sign * config.particle_velocity, 0.0);
                if grounded {
                    dust.start();
                }
            }
            None => {
                body.set_acceleration_x(0.0);
                body.set_drag_x(config.drag);
                anim.play("idle");
                dust.stop();
            }
        }

        if !grounded {
            anim.play("jump");
        }

        if grounded && input.jump.just_pressed {
            body.set_velocity_y(config.jump_velocity);
        }
    }
}
