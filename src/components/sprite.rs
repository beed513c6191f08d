use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Sprite is identified by a texture key, its frame size in texture pixels and
/// the offset of the current frame inside the texture (spritesheets).
/// The origin selects the pivot point (in unscaled pixels) relative to the
/// frame's top-left; it lands on the entity's `MapPosition` when rendering.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub offset: Vector2,
    pub origin: Vector2,
    pub flip_h: bool,
}

impl Sprite {
    /// Sprite whose pivot sits at the bottom centre of the frame.
    pub fn bottom_centered(tex_key: impl Into<String>, width: f32, height: f32, offset: Vector2) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            offset,
            origin: Vector2 {
                x: width * 0.5,
                y: height,
            },
            flip_h: false,
        }
    }

    /// Sprite whose pivot is the frame's top-left corner (tiles).
    pub fn top_left(tex_key: impl Into<String>, width: f32, height: f32, offset: Vector2) -> Self {
        Self {
            origin: Vector2::zero(),
            ..Self::bottom_centered(tex_key, width, height, offset)
        }
    }

    /// Sprite whose pivot sits at the centre of the frame.
    pub fn centered(tex_key: impl Into<String>, width: f32, height: f32, offset: Vector2) -> Self {
        Self {
            origin: Vector2 {
                x: width * 0.5,
                y: height * 0.5,
            },
            ..Self::bottom_centered(tex_key, width, height, offset)
        }
    }
}
