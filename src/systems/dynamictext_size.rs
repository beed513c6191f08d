//! DynamicText size caching system.
//!
//! Measures [`DynamicText`] labels with raylib's default font when they are
//! added or modified, so the renderer can centre them without measuring every
//! frame.

use bevy_ecs::change_detection::DetectChangesMut;
use bevy_ecs::prelude::*;
use raylib::ffi;
use raylib::math::Vector2;
use raylib::RaylibHandle;

use log::{debug, warn};

use crate::components::dynamictext::DynamicText;

/// Recalculates the cached size for any [`DynamicText`] that was added or changed.
///
/// Uses `bypass_change_detection` when updating the size so the write does
/// not retrigger the system on the next frame.
pub fn dynamictext_size_system(
    mut query: Query<&mut DynamicText, Changed<DynamicText>>,
    _rl: NonSend<RaylibHandle>,
) {
    for mut text in query.iter_mut() {
        debug!("Measuring DynamicText '{}'", text.content);
        let Ok(c_text) = std::ffi::CString::new(text.content.as_bytes()) else {
            warn!("DynamicText '{}' contains a NUL byte, size left as is", text.content);
            continue;
        };
        let width = unsafe { ffi::MeasureText(c_text.as_ptr(), text.font_size) };
        let size = Vector2::new(width as f32, text.font_size as f32);
        text.bypass_change_detection().set_size(size);
    }
}
