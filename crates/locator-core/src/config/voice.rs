//! Voice dialog configuration: phrase pools and fixed replies.
//!
//! Templates use `{name}` and `{room}` placeholders. Every pool must be
//! non-empty; [`VoiceConfig::validate`] enforces that at startup.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Voice assistant configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceConfig {
    /// Upper bound on the edit distance of a fuzzy suggestion.
    ///
    /// Unset means every miss is answered with the closest known user,
    /// however dissimilar.
    #[serde(default)]
    pub fuzzy_max_distance: Option<usize>,
    /// Randomized answer pools.
    #[serde(default)]
    pub phrases: PhrasePools,
    /// Reply to a launch request.
    #[serde(default = "default_greeting")]
    pub greeting: String,
    /// Reply when no user matches the spoken name.
    #[serde(default = "default_unknown_person")]
    pub unknown_person: String,
    /// Reply to an unrecognized intent.
    #[serde(default = "default_not_understood")]
    pub not_understood: String,
    /// Reply when the caller denies a confirmation.
    #[serde(default = "default_denied")]
    pub denied: String,
    /// Reply when the store cannot be reached.
    #[serde(default = "default_unavailable")]
    pub unavailable: String,
    /// Where-is reply for a user who is out of the office.
    #[serde(default = "default_not_arrived")]
    pub not_arrived: String,
    /// Prompt asking the caller to confirm a fuzzy suggestion.
    #[serde(default = "default_confirm_prompt")]
    pub confirm_prompt: String,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            fuzzy_max_distance: None,
            phrases: PhrasePools::default(),
            greeting: default_greeting(),
            unknown_person: default_unknown_person(),
            not_understood: default_not_understood(),
            denied: default_denied(),
            unavailable: default_unavailable(),
            not_arrived: default_not_arrived(),
            confirm_prompt: default_confirm_prompt(),
        }
    }
}

impl VoiceConfig {
    /// Reject configurations with an empty phrase pool.
    pub fn validate(&self) -> Result<(), AppError> {
        for (name, pool) in self.phrases.named() {
            if pool.is_empty() {
                return Err(AppError::configuration(format!(
                    "Phrase pool 'voice.phrases.{name}' must not be empty"
                )));
            }
        }
        Ok(())
    }
}

/// Paraphrase pools, one per answer category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhrasePools {
    /// The person is in the office.
    #[serde(default = "default_in_office")]
    pub in_office: Vec<String>,
    /// The person is not in the office.
    #[serde(default = "default_not_in_office")]
    pub not_in_office: Vec<String>,
    /// The person is in a known room.
    #[serde(default = "default_where_is")]
    pub where_is: Vec<String>,
    /// The person is in, but the room is untracked.
    #[serde(default = "default_somewhere")]
    pub somewhere: Vec<String>,
    /// The person checked in today.
    #[serde(default = "default_here_today")]
    pub here_today: Vec<String>,
    /// The person has not checked in today.
    #[serde(default = "default_not_here_today")]
    pub not_here_today: Vec<String>,
}

impl Default for PhrasePools {
    fn default() -> Self {
        Self {
            in_office: default_in_office(),
            not_in_office: default_not_in_office(),
            where_is: default_where_is(),
            somewhere: default_somewhere(),
            here_today: default_here_today(),
            not_here_today: default_not_here_today(),
        }
    }
}

impl PhrasePools {
    fn named(&self) -> [(&'static str, &Vec<String>); 6] {
        [
            ("in_office", &self.in_office),
            ("not_in_office", &self.not_in_office),
            ("where_is", &self.where_is),
            ("somewhere", &self.somewhere),
            ("here_today", &self.here_today),
            ("not_here_today", &self.not_here_today),
        ]
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_in_office() -> Vec<String> {
    strings(&[
        "Yep, {name} is here.",
        "Yes, {name} is here.",
        "Yes, {name} has arrived at the office.",
        "The {name} you are looking for is here.",
        "{name} is in the office, yes.",
        "Yep, {name} came to work today.",
    ])
}

fn default_not_in_office() -> Vec<String> {
    strings(&[
        "Nope, {name} is not here.",
        "The {name} you are looking for is not here.",
        "{name} is not here.",
        "{name} is not in the office.",
    ])
}

fn default_where_is() -> Vec<String> {
    strings(&[
        "{name} is in room {room}.",
        "I have found {name} in room {room}.",
        "{name} is currently in room {room}.",
        "{name} can be found in room {room}.",
        "{name} is probably keeping the people in room {room} busy.",
    ])
}

fn default_somewhere() -> Vec<String> {
    strings(&[
        "{name} is somewhere in the office.",
        "{name} moves from room to room too often to track.",
        "{name} is in the office, but I can't tell you which room.",
        "I guess {name} is running around the office as usual.",
    ])
}

fn default_here_today() -> Vec<String> {
    strings(&[
        "Yes, {name} is in the office today.",
        "{name} came to work today.",
    ])
}

fn default_not_here_today() -> Vec<String> {
    strings(&[
        "{name} does not seem to be coming to work today.",
        "I guess {name} is still at home.",
        "{name} is not here today.",
        "{name} has not come to the office yet.",
    ])
}

fn default_greeting() -> String {
    "Hello! You can ask me if someone is in the office.".to_string()
}

fn default_unknown_person() -> String {
    "Sorry, I don't know this person.".to_string()
}

fn default_not_understood() -> String {
    "Sorry, I didn't get that.".to_string()
}

fn default_denied() -> String {
    "Then I cannot help you!".to_string()
}

fn default_unavailable() -> String {
    "Sorry, I can't answer that right now.".to_string()
}

fn default_not_arrived() -> String {
    "{name} has not arrived at the office yet.".to_string()
}

fn default_confirm_prompt() -> String {
    "I did not find {name}, do you mean {suggestion}?".to_string()
}
