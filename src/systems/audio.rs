//! Audio system implementation backed by a dedicated thread and raylib.
//!
//! This module hosts the background audio thread and the systems that bridge
//! it with the ECS world:
//! - [`audio_thread`] runs on its own OS thread, owns the raylib audio device,
//!   and processes [`AudioCmd`] messages, answering with [`AudioMessage`]s.
//! - [`forward_audio_cmds`] sends the frame's `AudioCmd` messages over the
//!   channel.
//! - [`poll_audio_messages`] drains the audio thread's replies into the ECS
//!   message queue, and [`log_audio_messages`] reports them.
//!
//! Raylib audio calls stay on a single thread; the game thread only talks to
//! it through `crossbeam-channel`.
//!
//! See also: [`crate::events::audio`] and [`crate::resources::audio`].

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::AudioBridge;
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender};
use log::{debug, info, warn};
use raylib::core::audio::{RaylibAudio, Sound};
use rustc_hash::FxHashMap;

/// Drain any pending replies from the audio thread into
/// [`Messages<AudioMessage>`].
pub fn poll_audio_messages(bridge: Res<AudioBridge>, mut writer: MessageWriter<AudioMessage>) {
    writer.write_batch(bridge.rx_msg.try_iter());
}

/// Advance the ECS message queue for [`AudioMessage`].
///
/// Run this after [`poll_audio_messages`] in the schedule.
pub fn update_bevy_audio_messages(mut msgs: ResMut<Messages<AudioMessage>>) {
    msgs.update();
}

/// Forward ECS AudioCmd messages to the audio thread via the AudioBridge sender.
pub fn forward_audio_cmds(bridge: Res<AudioBridge>, mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        // ignore send error on shutdown
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Advance the ECS message queue for AudioCmd so same-frame readers can observe writes.
pub fn update_bevy_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

/// Log replies from the audio thread.
pub fn log_audio_messages(mut reader: MessageReader<AudioMessage>) {
    for msg in reader.read() {
        match msg {
            AudioMessage::FxLoadFailed { id, error } => {
                warn!("Sound '{}' failed to load: {}", id, error)
            }
            AudioMessage::FxUnknown { id } => warn!("Sound '{}' is not loaded", id),
            other => debug!("Audio: {:?}", other),
        }
    }
}

/// Entry point of the dedicated audio thread.
///
/// Initializes the raylib audio device once, owns every `Sound` handle and
/// reacts to [`AudioCmd`] inputs until it receives [`AudioCmd::Shutdown`], at
/// which point it unloads everything and exits.
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_evt: Sender<AudioMessage>) {
    let audio = match RaylibAudio::init_audio_device() {
        Ok(device) => device,
        Err(e) => {
            panic!("Failed to initialize audio device: {}", e);
        }
    };

    info!(
        "Audio thread starting (id={:?})",
        std::thread::current().id()
    );

    let mut sounds: FxHashMap<String, Sound> = FxHashMap::default();

    // blocks between commands; the game only plays one-shot effects
    for cmd in rx_cmd.iter() {
        match cmd {
            AudioCmd::LoadFx { id, path } => match audio.new_sound(&path) {
                Ok(sound) => {
                    debug!("Audio fx loaded id='{}' path='{}'", id, path);
                    sounds.insert(id.clone(), sound);
                    let _ = tx_evt.send(AudioMessage::FxLoaded { id });
                }
                Err(e) => {
                    let _ = tx_evt.send(AudioMessage::FxLoadFailed {
                        id,
                        error: format!("{} ({})", e, path),
                    });
                }
            },
            AudioCmd::PlayFx { id } => {
                if let Some(sound) = sounds.get(&id) {
                    sound.play();
                    let _ = tx_evt.send(AudioMessage::FxPlayed { id });
                } else {
                    let _ = tx_evt.send(AudioMessage::FxUnknown { id });
                }
            }
            AudioCmd::Shutdown => {
                debug!("Audio shutdown requested");
                sounds.clear();
                let _ = tx_evt.send(AudioMessage::FxUnloadedAll);
                break;
            }
        }
    }

    info!(
        "Audio thread exiting (id={:?})",
        std::thread::current().id()
    );

    // sounds drop before `audio`
}
