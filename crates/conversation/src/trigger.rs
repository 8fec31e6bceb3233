//! User inputs fed to the state machine, and the callback data that encodes button presses.

use content_generator::Model;
use wordpress_client::PostStatus;
use wpbot_core::EventKind;

/// Callback data carried by inline buttons.
pub mod callback {
    pub const MODEL_PREFIX: &str = "model:";
    pub const REDO: &str = "redo";
    pub const SUGGEST: &str = "suggest";
    pub const CHANGE_TOPIC: &str = "change_topic";
    pub const PUBLISH: &str = "publish";
    pub const SAVE_DRAFT: &str = "save_draft";
    pub const CANCEL: &str = "cancel";

    pub fn model(id: &str) -> String {
        format!("{}{}", MODEL_PREFIX, id)
    }
}

/// One user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    Start,
    Help,
    Cancel,
    ChooseModel(Model),
    /// Topic or suggestion text, depending on the state.
    Text(String),
    Redo,
    Suggest,
    ChangeTopic,
    Publish(PostStatus),
    /// Unrecognised command or button.
    Unknown(String),
}

impl Trigger {
    /// Maps a core event to a trigger. `None` for events the bot does not react to.
    pub fn from_event(kind: &EventKind) -> Option<Trigger> {
        match kind {
            EventKind::Text(text) => Some(Trigger::Text(text.clone())),
            EventKind::Command { name, .. } => Some(Self::from_command(name)),
            EventKind::Callback { data, .. } => Some(Self::from_callback(data)),
            EventKind::Unsupported => None,
        }
    }

    pub fn from_command(name: &str) -> Trigger {
        match name.to_ascii_lowercase().as_str() {
            "start" => Trigger::Start,
            "help" => Trigger::Help,
            "cancel" => Trigger::Cancel,
            other => Trigger::Unknown(format!("/{}", other)),
        }
    }

    pub fn from_callback(data: &str) -> Trigger {
        if let Some(id) = data.strip_prefix(callback::MODEL_PREFIX) {
            return match Model::parse(id) {
                Ok(model) => Trigger::ChooseModel(model),
                Err(_) => Trigger::Unknown(data.to_string()),
            };
        }
        match data {
            callback::REDO => Trigger::Redo,
            callback::SUGGEST => Trigger::Suggest,
            callback::CHANGE_TOPIC => Trigger::ChangeTopic,
            callback::PUBLISH => Trigger::Publish(PostStatus::Publish),
            callback::SAVE_DRAFT => Trigger::Publish(PostStatus::Draft),
            callback::CANCEL => Trigger::Cancel,
            other => Trigger::Unknown(other.to_string()),
        }
    }

    /// Short, log-friendly name.
    pub fn name(&self) -> &'static str {
        match self {
            Trigger::Start => "start",
            Trigger::Help => "help",
            Trigger::Cancel => "cancel",
            Trigger::ChooseModel(_) => "choose_model",
            Trigger::Text(_) => "text",
            Trigger::Redo => "redo",
            Trigger::Suggest => "suggest",
            Trigger::ChangeTopic => "change_topic",
            Trigger::Publish(_) => "publish",
            Trigger::Unknown(_) => "unknown",
        }
    }
}
