//! Animation resource registry.
//!
//! Animation definitions shared by every entity that plays them. Systems look
//! up an animation by key and drive playback from the immutable parameters
//! stored here.

use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;
use rustc_hash::FxHashMap;

/// Central registry of reusable animation definitions keyed by string IDs.
#[derive(Resource, Default)]
pub struct AnimationStore {
    pub animations: FxHashMap<String, AnimationResource>,
}

impl AnimationStore {
    pub fn insert(&mut self, key: impl Into<String>, animation: AnimationResource) {
        self.animations.insert(key.into(), animation);
    }

    pub fn get(&self, key: &str) -> Option<&AnimationResource> {
        self.animations.get(key)
    }
}

/// Immutable data describing a horizontal sprite-sheet strip.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationResource {
    /// Texture key in [`crate::resources::texturestore::TextureStore`].
    pub tex_key: Arc<str>,
    /// Top-left corner of the first frame inside the texture.
    pub position: Vector2,
    /// Horizontal distance between consecutive frames.
    pub displacement: f32,
    /// Number of frames in the animation.
    pub frame_count: usize,
    /// Frames per second playback speed.
    pub fps: f32,
    /// Whether the animation restarts after the last frame.
    pub looped: bool,
}

impl AnimationResource {
    /// Texture offset of `frame_index`, clamped to the last frame.
    pub fn frame_offset(&self, frame_index: usize) -> Vector2 {
        let index = frame_index.min(self.frame_count.saturating_sub(1));
        Vector2 {
            x: self.position.x + index as f32 * self.displacement,
            y: self.position.y,
        }
    }
}
