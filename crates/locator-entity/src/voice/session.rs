//! Dialog session carried between voice turns.
//!
//! The session is returned in every response and echoed back by the
//! platform on the next request, so the dispatcher holds no state of its
//! own between turns.

use serde::{Deserialize, Serialize};

/// Where a conversation stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogPhase {
    /// No question is in flight.
    #[default]
    AwaitingIntent,
    /// The spoken name matched a user exactly.
    ExactMatch,
    /// A fuzzy suggestion awaits the caller's yes or no.
    NeedsConfirmation,
    /// Nobody resembles the spoken name.
    NoMatch,
    /// A final answer was given.
    Responded,
}

/// A fuzzy suggestion waiting for confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingConfirmation {
    /// Intent the suggestion belongs to.
    pub intent: String,
    /// The username offered to the caller.
    pub suggested_username: String,
}

/// Per-conversation state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogSession {
    /// Current phase.
    #[serde(default)]
    pub phase: DialogPhase,
    /// Outstanding suggestion, set only in `NeedsConfirmation`.
    #[serde(default)]
    pub pending: Option<PendingConfirmation>,
}

impl DialogSession {
    /// Move to `next`, dropping any pending suggestion.
    pub fn transition(&mut self, next: DialogPhase) {
        self.phase = next;
        if next != DialogPhase::NeedsConfirmation {
            self.pending = None;
        }
    }

    /// Park a suggestion and wait for the caller.
    pub fn await_confirmation(&mut self, pending: PendingConfirmation) {
        self.phase = DialogPhase::NeedsConfirmation;
        self.pending = Some(pending);
    }

    /// Take the pending suggestion if it belongs to `intent`.
    pub fn take_pending_for(&mut self, intent: &str) -> Option<PendingConfirmation> {
        match &self.pending {
            Some(p) if p.intent == intent => self.pending.take(),
            _ => None,
        }
    }
}
