//! Inbound voice requests.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::session::DialogSession;

/// Name of the slot holding the person being asked about.
pub const NAME_SLOT: &str = "name";

/// One turn from the voice platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceRequest {
    /// What the caller did.
    pub request: RequestKind,
    /// Dialog state echoed back from the previous turn's response.
    #[serde(default)]
    pub session: DialogSession,
}

/// Request classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RequestKind {
    /// The skill was opened without a question.
    Launch,
    /// A recognized utterance.
    Intent {
        /// The resolved intent.
        intent: Intent,
        /// Platform slot-filling progress.
        #[serde(default)]
        dialog_state: DialogState,
    },
}

/// A platform intent with its slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    /// Platform intent name.
    pub name: String,
    /// Slot name to spoken value.
    #[serde(default)]
    pub slots: BTreeMap<String, String>,
    /// Whether the caller confirmed or denied the last prompt.
    #[serde(default)]
    pub confirmation_status: ConfirmationStatus,
}

impl Intent {
    /// The spoken name, if the slot is filled with something non-blank.
    pub fn name_slot(&self) -> Option<&str> {
        self.slots
            .get(NAME_SLOT)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// A copy of this intent with the name slot replaced.
    pub fn with_name_slot(&self, value: &str) -> Self {
        let mut intent = self.clone();
        intent
            .slots
            .insert(NAME_SLOT.to_string(), value.to_string());
        intent
    }
}

/// Platform slot-filling progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogState {
    /// First turn of a multi-turn intent.
    Started,
    /// Slots are still being collected.
    InProgress,
    /// All required slots are filled.
    #[default]
    Completed,
}

/// Caller's answer to a confirmation prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmationStatus {
    /// No confirmation was requested or given.
    #[default]
    None,
    /// The caller said yes.
    Confirmed,
    /// The caller said no.
    Denied,
}
