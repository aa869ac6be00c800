//! Closest-username lookup by Levenshtein distance.

use locator_entity::presence::normalize_key;

/// A suggested identity for an unmatched name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzyMatch {
    /// The registered username being suggested.
    pub username: String,
    /// Edit distance from the spoken name.
    pub distance: usize,
}

/// Picks the registered username closest to a spoken name.
///
/// Ties on distance go to the lexicographically smallest username, so the
/// answer does not depend on the order the store returns candidates in.
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzyResolver {
    /// Reject suggestions farther than this. `None` always suggests.
    max_distance: Option<usize>,
}

impl FuzzyResolver {
    /// Creates a resolver with an optional distance cap.
    pub fn new(max_distance: Option<usize>) -> Self {
        Self { max_distance }
    }

    /// Best candidate for `name`, or `None` if there are no candidates
    /// (or none within the cap).
    pub fn resolve<I, S>(&self, name: &str, candidates: I) -> Option<FuzzyMatch>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = normalize_key(name);

        candidates
            .into_iter()
            .map(|candidate| {
                let username = normalize_key(candidate.as_ref());
                let distance = strsim::levenshtein(&name, &username);
                FuzzyMatch { username, distance }
            })
            .filter(|m| self.max_distance.is_none_or(|max| m.distance <= max))
            .min_by(|a, b| {
                a.distance
                    .cmp(&b.distance)
                    .then_with(|| a.username.cmp(&b.username))
            })
    }
}
