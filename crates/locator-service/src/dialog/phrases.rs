//! Randomized answer wording.

use std::sync::Arc;

use locator_core::config::VoiceConfig;
use locator_core::traits::IndexSource;

/// Answer categories with a pool of paraphrases each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phrase {
    /// The person is in the office.
    InOffice,
    /// The person is not in the office.
    NotInOffice,
    /// The person is in a known room.
    WhereIs,
    /// The person is in, room untracked.
    Somewhere,
    /// The person checked in today.
    HereToday,
    /// The person has not checked in today.
    NotHereToday,
}

/// Substitute `{key}` placeholders in a template.
///
/// Substitution is a single left-to-right pass: inserted values are never
/// scanned again, and unknown placeholders are kept as written.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let known = tail.find('}').and_then(|close| {
            let key = &tail[1..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, value)| (*value, close))
        });
        match known {
            Some((value, close)) => {
                out.push_str(value);
                rest = &tail[close + 1..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Phrase pools plus the source that picks among them.
///
/// Randomness only chooses wording; the category is always decided by the
/// caller.
#[derive(Debug, Clone)]
pub struct PhraseBook {
    config: Arc<VoiceConfig>,
    source: Arc<dyn IndexSource>,
}

impl PhraseBook {
    /// Creates a phrase book. Pools must be non-empty (see
    /// [`VoiceConfig::validate`]).
    pub fn new(config: Arc<VoiceConfig>, source: Arc<dyn IndexSource>) -> Self {
        Self { config, source }
    }

    /// The configured voice settings.
    pub fn config(&self) -> &VoiceConfig {
        &self.config
    }

    /// The template pool for a category.
    pub fn pool(&self, phrase: Phrase) -> &[String] {
        let pools = &self.config.phrases;
        match phrase {
            Phrase::InOffice => &pools.in_office,
            Phrase::NotInOffice => &pools.not_in_office,
            Phrase::WhereIs => &pools.where_is,
            Phrase::Somewhere => &pools.somewhere,
            Phrase::HereToday => &pools.here_today,
            Phrase::NotHereToday => &pools.not_here_today,
        }
    }

    /// Pick a template from the category's pool and fill it in.
    pub fn render(&self, phrase: Phrase, name: &str, room: &str) -> String {
        let pool = self.pool(phrase);
        let Some(template) = pool.get(self.source.pick(pool.len().max(1))) else {
            return String::new();
        };
        fill(template, &[("name", name), ("room", room)])
    }

    /// Every rendering `render` could produce; used to check answers.
    pub fn renderings(&self, phrase: Phrase, name: &str, room: &str) -> Vec<String> {
        self.pool(phrase)
            .iter()
            .map(|t| fill(t, &[("name", name), ("room", room)]))
            .collect()
    }
}
