use bevy_ecs::prelude::Component;

/// Currently playing animation of an entity.
///
/// Keys refer to entries of the
/// [`AnimationStore`](crate::resources::animationstore::AnimationStore); the
/// animation system advances `frame_index` and writes the frame into the
/// entity's `Sprite`.
#[derive(Debug, Clone, Component)]
pub struct Animation {
    pub animation_key: String,
    pub frame_index: usize,
    pub elapsed_time: f32,
}

impl Animation {
    pub fn new(animation_key: impl Into<String>) -> Self {
        Self {
            animation_key: animation_key.into(),
            frame_index: 0,
            elapsed_time: 0.0,
        }
    }

    /// Switch to `key`, restarting from the first frame. Asking for the
    /// animation that is already playing leaves it running.
    pub fn play(&mut self, key: &str) {
        if self.animation_key == key {
            return;
        }
        self.animation_key.clear();
        self.animation_key.push_str(key);
        self.frame_index = 0;
        self.elapsed_time = 0.0;
    }

    pub fn is_playing(&self, key: &str) -> bool {
        self.animation_key == key
    }
}
