use bevy_ecs::prelude::Component;
use raylib::prelude::{Color, Vector2};

/// Text label drawn with raylib's default font.
///
/// Paired with a [`ScreenPosition`](super::screenposition::ScreenPosition), the
/// label is drawn in screen space after the world pass. When `centered` is set
/// the position is the centre of the text box instead of its top-left corner.
///
/// `size` is measured by
/// [`dynamictext_size_system`](crate::systems::dynamictext_size::dynamictext_size_system)
/// whenever the text changes.
#[derive(Component, Clone, Debug)]
pub struct DynamicText {
    pub content: String,
    /// Font size in screen pixels.
    pub font_size: i32,
    pub color: Color,
    pub centered: bool,
    size: Vector2,
}

impl DynamicText {
    pub fn new(content: impl Into<String>, font_size: i32, color: Color) -> Self {
        Self {
            content: content.into(),
            font_size,
            color,
            centered: false,
            size: Vector2::zero(),
        }
    }

    /// Text whose position is its centre.
    pub fn centered(content: impl Into<String>, font_size: i32, color: Color) -> Self {
        Self {
            centered: true,
            ..Self::new(content, font_size, color)
        }
    }

    pub fn size(&self) -> Vector2 {
        self.size
    }

    pub fn set_size(&mut self, size: Vector2) {
        self.size = size;
    }

    /// Top-left corner of the text box drawn at `pos`.
    pub fn top_left(&self, pos: Vector2) -> Vector2 {
        if self.centered {
            Vector2::new(pos.x - self.size.x * 0.5, pos.y - self.size.y * 0.5)
        } else {
            pos
        }
    }
}
