//! Post-processing helpers for parsed results.

use std::collections::HashSet;

use crate::models::Card;

/// Collapse multiple printings of the same card to the first one seen.
///
/// Order is preserved. Cards without a name are always kept, since there is
/// nothing to compare them by.
pub fn remove_duplicates_by_name(cards: Vec<Card>) -> Vec<Card> {
    let mut seen: HashSet<String> = HashSet::new();
    cards
        .into_iter()
        .filter(|card| match &card.name {
            Some(name) => seen.insert(name.clone()),
            None => true,
        })
        .collect()
}
