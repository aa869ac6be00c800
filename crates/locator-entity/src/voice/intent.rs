//! Recognized intent names.

use std::fmt;

/// The intents the locator answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntentKind {
    /// "Is X in the office?"
    IsInOffice,
    /// "Where is X?"
    WhereIs,
    /// "Did X come to work today?"
    CameToWorkToday,
}

impl IntentKind {
    /// Parse a platform intent name; unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "PersonIsInOfficeIntent" => Some(Self::IsInOffice),
            "WhereIsPersonIntent" => Some(Self::WhereIs),
            "PersonCameToWorkToday" => Some(Self::CameToWorkToday),
            _ => None,
        }
    }

    /// The platform intent name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IsInOffice => "PersonIsInOfficeIntent",
            Self::WhereIs => "WhereIsPersonIntent",
            Self::CameToWorkToday => "PersonCameToWorkToday",
        }
    }

    /// Whether the platform must finish slot filling before we answer.
    pub fn requires_completed_dialog(&self) -> bool {
        matches!(self, Self::CameToWorkToday)
    }
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
