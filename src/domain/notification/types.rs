use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Payload attached to a displayed notification by whoever raised it.
///
/// Only `sender` is read. A sender that is not a string is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationData {
    #[serde(
        default,
        deserialize_with = "lenient_sender",
        skip_serializing_if = "Option::is_none"
    )]
    pub sender: Option<String>,
}

fn lenient_sender<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(sender) => Some(sender),
        _ => None,
    })
}

impl NotificationData {
    pub fn for_sender(sender: impl Into<String>) -> Self {
        Self {
            sender: Some(sender.into()),
        }
    }

    /// Sender to open a chat for. Empty strings count as no sender.
    pub fn sender(&self) -> Option<&str> {
        self.sender.as_deref().filter(|sender| !sender.is_empty())
    }

    /// Parses a payload, falling back to an empty one when the value is not an object.
    pub fn from_json(value: &serde_json::Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        serde_json::from_value(value.clone()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientAction {
    OpenChat,
}

/// Message posted to an application window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientMessage {
    pub action: ClientAction,
    pub sender: String,
}

impl ClientMessage {
    pub fn open_chat(sender: impl Into<String>) -> Self {
        Self {
            action: ClientAction::OpenChat,
            sender: sender.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    Focused { client_id: String, messaged: bool },
    Opened,
    OpenUnsupported,
    OpenFailed,
}

impl fmt::Display for ClickOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClickOutcome::Focused {
                client_id,
                messaged: true,
            } => write!(f, "focused {client_id} and posted open_chat"),
            ClickOutcome::Focused { client_id, .. } => write!(f, "focused {client_id}"),
            ClickOutcome::Opened => write!(f, "opened a new window"),
            ClickOutcome::OpenUnsupported => write!(f, "no window and openWindow unsupported"),
            ClickOutcome::OpenFailed => write!(f, "openWindow rejected"),
        }
    }
}
