//! Application Context
//!
//! Drag-and-drop state provided via Leptos Context API.

use leptos::prelude::*;
use leptos_dragdrop::{create_dnd_signals, DndSignals};

/// One set of DnD signals per kind of draggable on a board
#[derive(Clone, Copy)]
pub struct DndContext {
    /// Cards, dropped on slots between cards of any list
    pub cards: DndSignals,
    /// Lists, dropped on slots between the board's columns
    pub lists: DndSignals,
}

impl DndContext {
    pub fn new() -> Self {
        Self {
            cards: create_dnd_signals(),
            lists: create_dnd_signals(),
        }
    }
}

pub fn use_dnd() -> DndContext {
    expect_context::<DndContext>()
}
