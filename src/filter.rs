//! Search Filter
//!
//! Derives the visible rows from the item collection and the search term.

use crate::models::Item;

/// Case-insensitive substring match; an empty term matches everything.
pub fn matches_search(item: &Item, term: &str) -> bool {
    term.is_empty() || item.value.to_lowercase().contains(&term.to_lowercase())
}

/// Items whose label contains `term`, in collection order
pub fn filter_items(items: &[Item], term: &str) -> Vec<Item> {
    items
        .iter()
        .filter(|item| matches_search(item, term))
        .cloned()
        .collect()
}

/// Backing indices of the items [`filter_items`] would return
pub fn visible_positions(items: &[Item], term: &str) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| matches_search(item, term))
        .map(|(pos, _)| pos)
        .collect()
}
