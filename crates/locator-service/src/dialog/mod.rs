//! Voice dialog: intent dispatch, the confirmation sub-dialog, and phrase
//! selection.

pub mod dispatcher;
pub mod phrases;

pub use dispatcher::IntentDispatcher;
pub use phrases::{Phrase, PhraseBook, fill};
