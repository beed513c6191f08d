//! Animation system.
//!
//! [`animation`] advances every [`Animation`] by the frame delta and writes
//! the current frame of its strip into the entity's [`Sprite`] offset.
//! Strips are defined in [`AnimationStore`]; gameplay code only switches
//! keys with [`Animation::play`].

use bevy_ecs::prelude::*;
use log::trace;

use crate::components::animation::Animation;
use crate::components::sprite::Sprite;
use crate::resources::animationstore::AnimationStore;
use crate::resources::worldtime::WorldTime;

/// Advance animation playback and update the sprite frame.
///
/// Looping strips wrap to the first frame, the others hold the last one.
/// Unknown keys leave the sprite untouched.
pub fn animation(
    mut query: Query<(&mut Animation, &mut Sprite)>,
    animation_store: Res<AnimationStore>,
    time: Res<WorldTime>,
) {
    for (mut anim_comp, mut sprite) in query.iter_mut() {
        let Some(animation) = animation_store.get(&anim_comp.animation_key) else {
            trace!("Unknown animation '{}'", anim_comp.animation_key);
            continue;
        };

        if animation.fps > 0.0 && animation.frame_count > 1 {
            anim_comp.elapsed_time += time.delta;
            let frame_duration = 1.0 / animation.fps;
            while anim_comp.elapsed_time >= frame_duration {
                anim_comp.elapsed_time -= frame_duration;
                anim_comp.frame_index += 1;
                if anim_comp.frame_index >= animation.frame_count {
                    anim_comp.frame_index = if animation.looped {
                        0
                    } else {
                        animation.frame_count - 1
                    };
                }
            }
        }

        sprite.offset = animation.frame_offset(anim_comp.frame_index);
    }
}
