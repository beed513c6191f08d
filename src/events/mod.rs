//! Event types and observers used by the game.
//!
//! Events provide a decoupled way for systems to communicate: a system
//! triggers an event and an observer reacts to it within the same frame.
//!
//! Submodules:
//! - [`audio`] – commands and messages for the background audio thread
//! - [`collision`] – overlap notifications and the rule dispatching observer
//! - [`gamestate`] – state transition notifications for the scene flow
//! - [`switchdebug`] – toggle debug rendering and diagnostics on/off
pub mod audio;
pub mod collision;
pub mod gamestate;
pub mod switchdebug;
