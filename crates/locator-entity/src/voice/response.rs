//! Outbound voice responses.

use serde::{Deserialize, Serialize};

use super::request::Intent;
use super::session::DialogSession;

/// The answer to one voice turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceResponse {
    /// Text for the assistant to speak.
    pub speech: String,
    /// Dialog continuation, if the conversation is not over.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directive: Option<Directive>,
    /// State to echo back on the next turn.
    pub session: DialogSession,
    /// Whether the platform should close the session.
    pub should_end_session: bool,
}

impl VoiceResponse {
    /// A final spoken answer.
    pub fn tell(speech: impl Into<String>, session: DialogSession) -> Self {
        Self {
            speech: speech.into(),
            directive: None,
            session,
            should_end_session: true,
        }
    }

    /// Hand slot filling back to the platform.
    pub fn delegate(intent: Intent, session: DialogSession) -> Self {
        Self {
            speech: String::new(),
            directive: Some(Directive::Delegate { intent }),
            session,
            should_end_session: false,
        }
    }

    /// Ask the caller to confirm an updated intent.
    pub fn confirm(speech: impl Into<String>, intent: Intent, session: DialogSession) -> Self {
        Self {
            speech: speech.into(),
            directive: Some(Directive::ConfirmIntent { intent }),
            session,
            should_end_session: false,
        }
    }
}

/// Dialog continuation directives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Directive {
    /// Let the platform keep collecting slots.
    Delegate {
        /// The intent as received.
        intent: Intent,
    },
    /// Ask the caller to confirm the intent carrying a suggested value.
    ConfirmIntent {
        /// The intent with the suggested slot value filled in.
        intent: Intent,
    },
}
