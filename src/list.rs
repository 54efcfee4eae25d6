//! Item Collection
//!
//! State transitions over the authoritative item list. Every function either
//! applies its change fully or returns a [`ListError`] and leaves the list as
//! it was.

use chrono::NaiveDate;
use leptos_dragdrop::{zone_destination, DropTarget};

use crate::error::ListError;
use crate::filter::visible_positions;
use crate::models::{Item, ItemId};

/// Append a new item. Text is kept as typed but must not be blank.
pub fn add_item(items: &mut Vec<Item>, text: &str, due_date: Option<NaiveDate>) -> Result<ItemId, ListError> {
    if text.trim().is_empty() {
        return Err(ListError::EmptyText);
    }
    let item = Item::new(text, due_date);
    let id = item.id;
    items.push(item);
    Ok(id)
}

/// Remove the first item with `id`
pub fn delete_item(items: &mut Vec<Item>, id: ItemId) -> Result<Item, ListError> {
    let pos = position_of(items, id)?;
    Ok(items.remove(pos))
}

/// Replace the label of `id`
pub fn edit_item(items: &mut [Item], id: ItemId, new_text: &str) -> Result<(), ListError> {
    if new_text.trim().is_empty() {
        return Err(ListError::EmptyText);
    }
    let item = find_mut(items, id)?;
    item.value = new_text.to_string();
    Ok(())
}

/// Flip the completed flag; returns the new value
pub fn toggle_complete(items: &mut [Item], id: ItemId) -> Result<bool, ListError> {
    let item = find_mut(items, id)?;
    item.completed = !item.completed;
    Ok(item.completed)
}

/// Drop every item; returns how many were removed
pub fn clear_all(items: &mut Vec<Item>) -> usize {
    let removed = items.len();
    items.clear();
    removed
}

/// Move a row of the filtered view.
///
/// `source` and `dest` index the rows visible under `search_term`. The dragged
/// item is reinserted where the visible item at `dest` currently sits, so hidden
/// items keep their relative order. `dest == None` is a drop outside the list.
pub fn reorder(
    items: &mut Vec<Item>,
    search_term: &str,
    source: usize,
    dest: Option<usize>,
) -> Result<(), ListError> {
    let dest = dest.ok_or(ListError::InvalidDropTarget)?;
    let visible = visible_positions(items, search_term);
    let len = visible.len();
    let from = *visible
        .get(source)
        .ok_or(ListError::IndexOutOfRange { index: source, len })?;
    let to = *visible
        .get(dest)
        .ok_or(ListError::IndexOutOfRange { index: dest, len })?;

    let moved = items.remove(from);
    items.insert(to, moved);
    Ok(())
}

/// Index of `id` in the visible rows, if it is visible
pub fn visible_index(items: &[Item], search_term: &str, id: ItemId) -> Option<usize> {
    visible_positions(items, search_term)
        .into_iter()
        .position(|pos| items[pos].id == id)
}

/// Translate a drop into filtered-view `(source, dest)` indices for [`reorder`].
///
/// A row target takes that row's index; a zone goes through
/// [`zone_destination`]. `None` when the dragged item is not visible, so there
/// is nothing to move. A target that is no longer visible yields `dest == None`.
pub fn drop_destination(
    items: &[Item],
    search_term: &str,
    dragged: ItemId,
    target: DropTarget<ItemId>,
) -> Option<(usize, Option<usize>)> {
    let source = visible_index(items, search_term, dragged)?;
    let dest = match target {
        DropTarget::Item(target_id) => visible_index(items, search_term, target_id),
        DropTarget::Zone(zone) => {
            zone_destination(source, zone, visible_positions(items, search_term).len())
        }
    };
    Some((source, dest))
}

fn position_of(items: &[Item], id: ItemId) -> Result<usize, ListError> {
    items
        .iter()
        .position(|item| item.id == id)
        .ok_or(ListError::UnknownItem(id))
}

fn find_mut(items: &mut [Item], id: ItemId) -> Result<&mut Item, ListError> {
    items
        .iter_mut()
        .find(|item| item.id == id)
        .ok_or(ListError::UnknownItem(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_list(values: &[&str]) -> Vec<Item> {
        let mut items = Vec::new();
        for v in values {
            add_item(&mut items, v, None).expect("add failed");
        }
        items
    }

    fn values(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.value.as_str()).collect()
    }

    #[test]
    fn test_add_blank_is_rejected() {
        let mut items = make_list(&["a"]);
        assert_eq!(add_item(&mut items, "", None), Err(ListError::EmptyText));
        assert_eq!(add_item(&mut items, "   \t", None), Err(ListError::EmptyText));
        assert_eq!(values(&items), vec!["a"]);
    }

    #[test]
    fn test_add_appends_with_due_date() {
        let mut items = make_list(&["first"]);
        let due = NaiveDate::from_ymd_opt(2024, 6, 1);
        let id = add_item(&mut items, "  second ", due).expect("add failed");

        assert_eq!(items.len(), 2);
        assert_eq!(items[1].id, id);
        assert_eq!(items[1].value, "  second ");
        assert_eq!(items[1].due_date, due);
        assert!(!items[1].completed);
    }

    #[test]
    fn test_add_then_delete() {
        let mut items = Vec::new();
        let id = add_item(&mut items, "Buy milk", None).unwrap();
        let removed = delete_item(&mut items, id).unwrap();
        assert_eq!(removed.value, "Buy milk");
        assert!(items.is_empty());
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let mut items = make_list(&["a", "b"]);
        let stray = ItemId::random();
        assert_eq!(delete_item(&mut items, stray), Err(ListError::UnknownItem(stray)));
        assert_eq!(values(&items), vec!["a", "b"]);
    }

    #[test]
    fn test_delete_removes_only_first_match() {
        let mut items = make_list(&["a", "b"]);
        let mut dup = items[0].clone();
        dup.value = "a-copy".to_string();
        items.push(dup);

        let id = items[0].id;
        delete_item(&mut items, id).unwrap();
        assert_eq!(values(&items), vec!["b", "a-copy"]);
    }

    #[test]
    fn test_edit_replaces_value() {
        let mut items = make_list(&["a", "b"]);
        let id = items[1].id;
        edit_item(&mut items, id, "bee").unwrap();
        assert_eq!(values(&items), vec!["a", "bee"]);
    }

    #[test]
    fn test_edit_blank_or_unknown_is_noop() {
        let mut items = make_list(&["a"]);
        let id = items[0].id;
        assert_eq!(edit_item(&mut items, id, "  "), Err(ListError::EmptyText));

        let stray = ItemId::random();
        assert_eq!(edit_item(&mut items, stray, "x"), Err(ListError::UnknownItem(stray)));
        assert_eq!(values(&items), vec!["a"]);
    }

    #[test]
    fn test_edit_keeps_completion_and_date() {
        let mut items = Vec::new();
        let due = NaiveDate::from_ymd_opt(2024, 1, 1);
        let id = add_item(&mut items, "a", due).unwrap();
        toggle_complete(&mut items, id).unwrap();
        edit_item(&mut items, id, "b").unwrap();
        assert!(items[0].completed);
        assert_eq!(items[0].due_date, due);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut items = make_list(&["a"]);
        let id = items[0].id;
        assert_eq!(toggle_complete(&mut items, id), Ok(true));
        assert_eq!(toggle_complete(&mut items, id), Ok(false));
        assert!(!items[0].completed);
    }

    #[test]
    fn test_clear_all() {
        let mut items = make_list(&["a", "b", "c"]);
        assert_eq!(clear_all(&mut items), 3);
        assert!(items.is_empty());
        assert_eq!(clear_all(&mut items), 0);
        assert!(items.is_empty());
    }

    #[test]
    fn test_reorder_first_to_last() {
        let mut items = make_list(&["a", "b", "c"]);
        reorder(&mut items, "", 0, Some(2)).unwrap();
        assert_eq!(values(&items), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_reorder_last_to_first() {
        let mut items = make_list(&["a", "b", "c"]);
        reorder(&mut items, "", 2, Some(0)).unwrap();
        assert_eq!(values(&items), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_reorder_same_index_is_identity() {
        let mut items = make_list(&["a", "b", "c"]);
        reorder(&mut items, "", 1, Some(1)).unwrap();
        assert_eq!(values(&items), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_reorder_invalid_target_is_noop() {
        let mut items = make_list(&["a", "b", "c"]);
        assert_eq!(reorder(&mut items, "", 0, None), Err(ListError::InvalidDropTarget));
        assert_eq!(
            reorder(&mut items, "", 0, Some(3)),
            Err(ListError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            reorder(&mut items, "", 5, Some(0)),
            Err(ListError::IndexOutOfRange { index: 5, len: 3 })
        );
        assert_eq!(values(&items), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_reorder_under_search_keeps_hidden_order() {
        // visible under "task": [task 1, task 2, task 3]
        let mut items = make_list(&["task 1", "note x", "task 2", "note y", "task 3"]);
        reorder(&mut items, "task", 0, Some(2)).unwrap();
        assert_eq!(values(&items), vec!["note x", "task 2", "note y", "task 3", "task 1"]);

        reorder(&mut items, "task", 2, Some(0)).unwrap();
        assert_eq!(values(&items), vec!["note x", "task 1", "task 2", "note y", "task 3"]);
    }

    #[test]
    fn test_visible_index() {
        let items = make_list(&["apple", "bread", "apricot"]);
        assert_eq!(visible_index(&items, "ap", items[2].id), Some(1));
        assert_eq!(visible_index(&items, "ap", items[1].id), None);
        assert_eq!(visible_index(&items, "", items[1].id), Some(1));
    }

    #[test]
    fn test_drop_on_row_below_and_above() {
        let mut items = make_list(&["a", "b", "c", "d"]);
        let (a, c) = (items[0].id, items[2].id);

        let (source, dest) = drop_destination(&items, "", a, DropTarget::Item(c)).unwrap();
        assert_eq!((source, dest), (0, Some(2)));
        reorder(&mut items, "", source, dest).unwrap();
        assert_eq!(values(&items), vec!["b", "c", "a", "d"]);

        let d = items[3].id;
        let b = items[0].id;
        let (source, dest) = drop_destination(&items, "", d, DropTarget::Item(b)).unwrap();
        assert_eq!((source, dest), (3, Some(0)));
        reorder(&mut items, "", source, dest).unwrap();
        assert_eq!(values(&items), vec!["d", "b", "c", "a"]);
    }

    #[test]
    fn test_drop_on_zone_under_search() {
        let mut items = make_list(&["task 1", "note", "task 2", "task 3"]);
        let dragged = items[0].id;

        // bottom gap of the three visible tasks
        let (source, dest) = drop_destination(&items, "task", dragged, DropTarget::Zone(3)).unwrap();
        assert_eq!((source, dest), (0, Some(2)));
        reorder(&mut items, "task", source, dest).unwrap();
        assert_eq!(values(&items), vec!["note", "task 2", "task 3", "task 1"]);
    }

    #[test]
    fn test_drop_zone_past_end_has_no_dest() {
        let items = make_list(&["a", "b"]);
        let dragged = items[0].id;
        assert_eq!(drop_destination(&items, "", dragged, DropTarget::Zone(5)), Some((0, None)));
    }

    #[test]
    fn test_drop_of_hidden_item_is_skipped() {
        let items = make_list(&["task 1", "note", "task 2"]);
        let (hidden, visible) = (items[1].id, items[2].id);
        assert_eq!(drop_destination(&items, "task", hidden, DropTarget::Item(visible)), None);
        assert_eq!(drop_destination(&items, "task", hidden, DropTarget::Zone(0)), None);
        assert_eq!(drop_destination(&items, "", ItemId::random(), DropTarget::Zone(0)), None);
    }

    #[test]
    fn test_drop_on_hidden_row_has_no_dest() {
        let mut items = make_list(&["task 1", "note", "task 2"]);
        let (dragged, hidden) = (items[0].id, items[1].id);
        let (source, dest) = drop_destination(&items, "task", dragged, DropTarget::Item(hidden)).unwrap();
        assert_eq!(dest, None);
        assert_eq!(reorder(&mut items, "task", source, dest), Err(ListError::InvalidDropTarget));
        assert_eq!(values(&items), vec!["task 1", "note", "task 2"]);
    }
}
