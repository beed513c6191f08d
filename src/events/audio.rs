use bevy_ecs::message::Message;

/// Commands sent *to* the audio thread
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioCmd {
    LoadFx { id: String, path: String },
    PlayFx { id: String },
    Shutdown,
}

/// Events sent *back* from the audio thread
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioMessage {
    FxLoaded { id: String },
    FxLoadFailed { id: String, error: String },
    FxPlayed { id: String },
    FxUnknown { id: String },
    FxUnloadedAll,
}
