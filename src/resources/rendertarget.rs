//! Render target resource for fixed-resolution rendering.
//!
//! Provides a framebuffer texture at the game's internal resolution, which is
//! then scaled to fit the actual window size with letterboxing. Pixel art is
//! scaled with nearest-neighbor filtering.

use raylib::ffi::{self, TextureFilter};
use raylib::prelude::*;

/// Render target for fixed-resolution rendering with scaling.
///
/// This is a NonSend resource because `RenderTexture2D` contains GPU resources
/// that must be accessed from the main thread.
pub struct RenderTarget {
    /// The underlying raylib render texture.
    pub texture: RenderTexture2D,
    /// Game's internal render width in pixels.
    pub game_width: u32,
    /// Game's internal render height in pixels.
    pub game_height: u32,
}

impl RenderTarget {
    /// Create a new render target at the specified game resolution.
    pub fn new(
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        width: u32,
        height: u32,
    ) -> Result<Self, String> {
        let texture = rl
            .load_render_texture(th, width, height)
            .map_err(|e| format!("Failed to create render texture: {}", e))?;
        unsafe {
            ffi::SetTextureFilter(
                texture.texture,
                TextureFilter::TEXTURE_FILTER_POINT as i32,
            );
        }
        Ok(Self {
            texture,
            game_width: width,
            game_height: height,
        })
    }

    /// Get the source rectangle for drawing this texture.
    ///
    /// Returns a rectangle with negative height to flip the Y axis,
    /// compensating for OpenGL's inverted texture coordinates.
    pub fn source_rect(&self) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: self.game_width as f32,
            height: -(self.game_height as f32), // Negative to flip Y
        }
    }

    /// Destination rectangle inside a window of the given size.
    pub fn dest_rect(&self, window_w: i32, window_h: i32) -> Rectangle {
        letterbox(
            self.game_width as f32,
            self.game_height as f32,
            window_w as f32,
            window_h as f32,
        )
    }
}

/// Largest rectangle with the game's aspect ratio that fits the window,
/// centred on it.
pub fn letterbox(game_w: f32, game_h: f32, window_w: f32, window_h: f32) -> Rectangle {
    let scale = (window_w / game_w).min(window_h / game_h);
    let w = game_w * scale;
    let h = game_h * scale;
    Rectangle {
        x: (window_w - w) * 0.5,
        y: (window_h - h) * 0.5,
        width: w,
        height: h,
    }
}
