//! Voice assistant envelope: requests, responses, and the dialog session
//! carried between turns.

pub mod intent;
pub mod request;
pub mod response;
pub mod session;

pub use intent::IntentKind;
pub use request::{ConfirmationStatus, DialogState, Intent, NAME_SLOT, RequestKind, VoiceRequest};
pub use response::{Directive, VoiceResponse};
pub use session::{DialogPhase, DialogSession, PendingConfirmation};
