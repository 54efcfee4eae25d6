//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for flat Leptos lists using mouse events.
//! Uses movement threshold to distinguish click from drag.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Drop target types
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropTarget<K> {
    /// Drop on a row (take its position)
    Item(K),
    /// Drop on a zone between rows, `0..=len`
    Zone(usize),
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals<K: 'static> {
    pub dragging_id_read: ReadSignal<Option<K>>,
    pub dragging_id_write: WriteSignal<Option<K>>,
    pub drop_target_read: ReadSignal<Option<DropTarget<K>>>,
    pub drop_target_write: WriteSignal<Option<DropTarget<K>>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending key (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<K>>,
    pub pending_id_write: WriteSignal<Option<K>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// How long the "just ended" flag stays up after a drop
const DRAG_END_SUPPRESS_MS: u32 = 100;

/// Bound on the keys the DnD signals can carry
pub trait DragKey: Copy + PartialEq + Send + Sync + 'static {}

impl<K> DragKey for K where K: Copy + PartialEq + Send + Sync + 'static {}

pub fn create_dnd_signals<K: DragKey>() -> DndSignals<K> {
    let (dragging_id_read, dragging_id_write) = signal(None::<K>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget<K>>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<K>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// Final index of a dragged row dropped on a between-rows zone.
///
/// `zone` counts gaps from the top (0 = above the first row). Zones just above
/// and just below the source row leave it where it is. Returns `None` when
/// `zone` lies past `len`.
pub fn zone_destination(source: usize, zone: usize, len: usize) -> Option<usize> {
    if source >= len || zone > len {
        return None;
    }
    if zone > source {
        Some(zone - 1)
    } else {
        Some(zone)
    }
}

/// End drag operation
pub fn end_drag<K: DragKey>(dnd: &DndSignals<K>) {
    dnd.dragging_id_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_id_write.set(None);
    dnd.drag_just_ended_write.set(true);

    let clear = dnd.drag_just_ended_write;
    let _ = Timeout::new(DRAG_END_SUPPRESS_MS, move || clear.set(false)).forget();
}

/// Create mousedown handler for draggable rows
/// Records pending drag with start position
pub fn make_on_mousedown<K: DragKey>(dnd: DndSignals<K>, key: K) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Inputs and buttons keep their own click behaviour
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        dnd.pending_id_write.set(Some(key));
        dnd.start_x_write.set(ev.client_x());
        dnd.start_y_write.set(ev.client_y());
    }
}

/// Create mousemove handler for document - starts drag if moved enough
pub fn bind_global_mousemove<K: DragKey>(dnd: DndSignals<K>) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_id_read.get_untracked();

        if pending.is_some() && dnd.dragging_id_read.get_untracked().is_none() {
            let dx = (ev.client_x() - dnd.start_x_read.get_untracked()).abs();
            let dy = (ev.client_y() - dnd.start_y_read.get_untracked()).abs();

            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                dnd.dragging_id_write.set(pending);
            }
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for rows
pub fn make_on_item_mouseenter<K: DragKey>(dnd: DndSignals<K>, key: K) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if let Some(dragging) = dnd.dragging_id_read.get_untracked() {
            // Don't allow dropping on self
            if dragging != key {
                dnd.drop_target_write.set(Some(DropTarget::Item(key)));
            }
        }
    }
}

/// Create mouseenter handler for zones
pub fn make_on_zone_mouseenter<K: DragKey>(dnd: DndSignals<K>, position: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(DropTarget::Zone(position)));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave<K: DragKey>(dnd: DndSignals<K>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection.
///
/// `on_drop` runs only when a drag was in progress and the pointer was over a
/// target; releasing anywhere else cancels the drag.
///
/// The document listeners (mouseup and mousemove) are leaked and never removed,
/// so call this once per list that lives for the whole page. Remounting the
/// list would stack another pair of listeners.
pub fn bind_global_mouseup<K, F>(dnd: DndSignals<K>, on_drop: F)
where
    K: DragKey,
    F: Fn(K, DropTarget<K>) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging_id = dnd.dragging_id_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();

        dnd.pending_id_write.set(None);

        match (dragging_id, drop_target) {
            (Some(dragged), Some(target)) => {
                end_drag(&dnd);
                on_drop(dragged, target);
            }
            (Some(_), None) => end_drag(&dnd),
            // Plain click, nothing was dragged
            (None, _) => {}
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_above_source_keeps_index() {
        // rows [a, b, c], drag c (2) to the top gap
        assert_eq!(zone_destination(2, 0, 3), Some(0));
        assert_eq!(zone_destination(2, 1, 3), Some(1));
    }

    #[test]
    fn zone_below_source_accounts_for_removal() {
        // drag a (0) to the bottom gap -> [b, c, a]
        assert_eq!(zone_destination(0, 3, 3), Some(2));
        assert_eq!(zone_destination(0, 2, 3), Some(1));
    }

    #[test]
    fn zones_around_source_are_noops() {
        assert_eq!(zone_destination(1, 1, 3), Some(1));
        assert_eq!(zone_destination(1, 2, 3), Some(1));
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert_eq!(zone_destination(0, 4, 3), None);
        assert_eq!(zone_destination(3, 0, 3), None);
        assert_eq!(zone_destination(0, 0, 0), None);
    }

    #[test]
    fn drop_target_compares_by_value() {
        assert_eq!(DropTarget::<u32>::Zone(2), DropTarget::Zone(2));
        assert_ne!(DropTarget::Item(7u32), DropTarget::Zone(7));
    }
}
