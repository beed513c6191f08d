//! ECS resources that bridge the main thread with the background audio thread.
//!
//! Use [`setup_audio`] once during initialization to spawn the audio thread
//! and insert the [`AudioBridge`] and message resources. Call
//! [`shutdown_audio`] during teardown to stop the thread and free the sounds.
//! Headless worlds (tests) only need [`init_audio_messages`].

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::systems::audio::audio_thread;
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};
use log::warn;

/// Shared bridge between the ECS world and the audio thread.
#[derive(Resource)]
pub struct AudioBridge {
    /// Sender for [`AudioCmd`] messages (ECS -> audio thread).
    pub tx_cmd: Sender<AudioCmd>,
    /// Receiver for [`AudioMessage`] messages (audio thread -> ECS).
    pub rx_msg: Receiver<AudioMessage>,
    /// Join handle for the background audio thread.
    pub handle: std::thread::JoinHandle<()>,
}

/// Register the `AudioCmd`/`AudioMessage` message queues.
pub fn init_audio_messages(world: &mut World) {
    world.init_resource::<Messages<AudioCmd>>();
    world.init_resource::<Messages<AudioMessage>>();
}

/// Spawn the audio thread and register bridge resources.
pub fn setup_audio(world: &mut World) {
    let (tx_cmd, rx_cmd) = unbounded::<AudioCmd>();
    let (tx_msg, rx_msg) = unbounded::<AudioMessage>();

    let handle = std::thread::spawn(move || audio_thread(rx_cmd, tx_msg));

    world.insert_resource(AudioBridge {
        tx_cmd,
        rx_msg,
        handle,
    });
    init_audio_messages(world);
}

/// Request shutdown of the audio thread and join it.
pub fn shutdown_audio(world: &mut World) {
    if let Some(bridge) = world.remove_resource::<AudioBridge>() {
        let _ = bridge.tx_cmd.send(AudioCmd::Shutdown);
        if bridge.handle.join().is_err() {
            warn!("Audio thread panicked");
        }
    }
}
