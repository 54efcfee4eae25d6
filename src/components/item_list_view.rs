//! Item List View Component
//!
//! Displays the filtered items with drag-and-drop reordering.
//! Uses leptos-dragdrop with explicit DropZones between rows.

use leptos::prelude::*;
use tracing::debug;

use crate::components::ItemRow;
use crate::list::drop_destination;
use crate::models::ItemId;
use crate::store::{store_reorder_items, store_visible_items, use_app_store, AppStateStoreFields};

use leptos_dragdrop::*;

/// Item list view component with DnD support
#[component]
pub fn ItemListView() -> impl IntoView {
    let store = use_app_store();

    let dnd = create_dnd_signals::<ItemId>();

    // Resolve the drop into filtered-view indices, then let the store move it
    bind_global_mouseup(dnd, move |dragged_id, target| {
        let term = store.search_term().get_untracked();
        let resolved = store
            .items()
            .with_untracked(|items| drop_destination(items, &term, dragged_id, target));

        debug!(%dragged_id, ?target, ?resolved, "drop");
        if let Some((source, dest)) = resolved {
            store_reorder_items(&store, source, dest);
        }
    });

    let rows = move || {
        store_visible_items(&store)
            .into_iter()
            .enumerate()
            .collect::<Vec<_>>()
    };

    // Rows ignore hover styling until the drop has settled
    let list_class = move || {
        if dnd.drag_just_ended_read.get() { "list-group item-list just-dropped" } else { "list-group item-list" }
    };

    view! {
        <div class=list_class>
            // Drop zone above the first row
            <DropZone dnd=dnd position=0 />

            <For
                each=rows
                key=|(index, item)| {
                    // Every rendered field, so edits re-render the row
                    (item.id, *index, item.value.clone(), item.completed, item.due_date)
                }
                children=move |(index, item)| {
                    let id = item.id;

                    let on_mousedown = make_on_mousedown(dnd, id);
                    let on_mouseenter = make_on_item_mouseenter(dnd, id);
                    let on_mouseleave = make_on_mouseleave(dnd);

                    let is_dragging = move || dnd.dragging_id_read.get() == Some(id);
                    let is_drop_target = move || {
                        matches!(dnd.drop_target_read.get(), Some(DropTarget::Item(tid)) if tid == id)
                    };

                    let row_class = move || {
                        let mut c = String::from("item-row-wrapper");
                        if is_dragging() { c.push_str(" dragging"); }
                        if is_drop_target() { c.push_str(" drop-target"); }
                        c
                    };

                    view! {
                        <div
                            class=row_class
                            on:mousedown=on_mousedown
                            on:mouseenter=on_mouseenter
                            on:mouseleave=on_mouseleave
                        >
                            <ItemRow item=item />
                        </div>

                        // Drop zone below this row
                        <DropZone dnd=dnd position=index + 1 />
                    }
                }
            />
        </div>
    }
}

/// Drop zone component - a horizontal separator for dropping rows
#[component]
pub fn DropZone(
    dnd: DndSignals<ItemId>,
    position: usize,
) -> impl IntoView {
    let on_mouseenter = make_on_zone_mouseenter(dnd, position);
    let on_mouseleave = make_on_mouseleave(dnd);

    let is_active = move || {
        matches!(dnd.drop_target_read.get(), Some(DropTarget::Zone(pos)) if pos == position)
    };

    // Only show when dragging
    let is_dragging = move || dnd.dragging_id_read.get().is_some();

    let zone_class = move || {
        let mut c = String::from("drop-zone");
        if !is_dragging() { c.push_str(" hidden"); }
        if is_active() { c.push_str(" active"); }
        c
    };

    view! {
        <div
            class=zone_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
