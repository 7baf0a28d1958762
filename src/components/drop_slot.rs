//! Drop Slot Component
//!
//! A separator between items that becomes the drop target while hovered.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_mouseleave, make_on_slot_mouseenter, DndSignals};

/// Slot `index` in `parent_id`'s sequence; only visible while dragging
#[component]
pub fn DropSlot(
    dnd: DndSignals,
    parent_id: u32,
    index: usize,
    /// Vertical bar between columns instead of a line between cards
    #[prop(optional)]
    vertical: bool,
) -> impl IntoView {
    let on_mouseenter = make_on_slot_mouseenter(dnd, parent_id, index);
    let on_mouseleave = make_on_mouseleave(dnd);

    let slot_class = move || {
        let mut c = String::from(if vertical { "drop-slot vertical" } else { "drop-slot" });
        if dnd.dragging_id_read.get().is_none() { c.push_str(" hidden"); }
        if dnd.is_active_slot(parent_id, index) { c.push_str(" active"); }
        c
    };

    view! {
        <div
            class=slot_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
