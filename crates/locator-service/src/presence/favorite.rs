//! Favorite room inference over a user's room history.

use std::collections::HashMap;

use locator_entity::presence::OUT;

/// The most frequently visited room, ignoring `"out"`.
///
/// The leader only changes on a strictly higher count, so among rooms that
/// tie, the one that reached the count first wins. Returns `None` when the
/// history has no concrete rooms.
pub fn favorite_room<I, S>(history: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut favorite: Option<String> = None;
    let mut highest = 0;

    for entry in history {
        let room = entry.as_ref().to_lowercase();
        if room == OUT {
            continue;
        }

        let count = counts.entry(room.clone()).or_insert(0);
        *count += 1;

        if *count > highest {
            highest = *count;
            favorite = Some(room);
        }
    }

    favorite
}
