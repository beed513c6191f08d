//! Color tint component for rendering sprites.
//!
//! The [`Tint`] color replaces `Color::WHITE` in the sprite draw call. Particles
//! use it to fade out.

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

#[derive(Component, Clone, Debug, Copy)]
pub struct Tint {
    pub color: Color,
}

impl Tint {
    /// Create a new Tint with the specified RGBA values.
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            color: Color::new(r, g, b, a),
        }
    }

    /// Set the alpha channel from a `[0, 1]` opacity.
    pub fn set_alpha(&mut self, alpha: f32) {
        self.color.a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    }

    pub fn alpha(&self) -> f32 {
        self.color.a as f32 / 255.0
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
        }
    }
}
