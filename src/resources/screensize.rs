//! Screen size resource.
//!
//! Stores the game's internal render resolution in pixels. Scenes lay out
//! screen-space labels against it and the camera uses it as the view size.

use bevy_ecs::prelude::Resource;

/// Render resolution in pixels.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
