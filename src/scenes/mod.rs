//! Scene enter hooks and overlap callbacks.
//!
//! - [`play`] – builds the level, the player, coins, exits and the camera
//! - [`end`] – the win screen
//!
//! Hooks are registered by name in
//! [`crate::game::register_scenes`] and run by the game state observer.

pub mod end;
pub mod play;
