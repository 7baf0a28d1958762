//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Lists and cards
//! live in `Projection`s so a drop reorders the view at once; the new key is
//! written to the server in the background and never rolled back.

use board_order::{persist, DragEnd, OrderUpdate, OrderWriter, OrderedItem, Projection};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::DropTarget;
use reactive_stores::Store;

use crate::commands::{CardOrderWriter, ListOrderWriter};
use crate::models::{Board, BoardDetail, Card, List};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Boards for the picker, most recently updated first
    pub boards: Vec<Board>,
    /// The open board
    pub board: Option<Board>,
    /// Lists of the open board, keyed by board id
    pub lists: Projection<List>,
    /// Cards of the open board, keyed by list id
    pub cards: Projection<Card>,
    /// Last failure to show in the status bar
    pub error: Option<String>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Turn a drop on `target` into a drag event for `item_id`.
///
/// `None` when the item is not in the view any more.
pub fn drop_event<T: OrderedItem>(projection: &Projection<T>, item_id: u32, target: DropTarget) -> Option<DragEnd> {
    let (source_parent_id, source_index) = projection.locate(item_id)?;
    Some(DragEnd::from_slot(
        item_id,
        source_parent_id,
        source_index,
        target.parent_id(),
        target.index(),
    ))
}

/// Apply a drop to `projection`; the returned update still has to be persisted
pub fn plan_drop<T: OrderedItem>(projection: &mut Projection<T>, item_id: u32, target: DropTarget) -> Option<OrderUpdate> {
    let event = drop_event(projection, item_id, target)?;
    projection.apply_move(event)
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_boards(store: &AppStore, boards: Vec<Board>) {
    *store.boards().write() = boards;
}

/// Open a board: replace lists and cards with the server's view
pub fn store_load_board(store: &AppStore, detail: BoardDetail) {
    let (board, lists, cards) = detail.split();
    store.lists().write().load(lists);
    store.cards().write().load(cards);
    *store.board().write() = Some(board);
}

pub fn store_close_board(store: &AppStore) {
    *store.board().write() = None;
    *store.lists().write() = Projection::new();
    *store.cards().write() = Projection::new();
}

pub fn store_add_board(store: &AppStore, board: Board) {
    store.boards().write().insert(0, board);
}

pub fn store_remove_board(store: &AppStore, board_id: u32) {
    store.boards().write().retain(|b| b.id != board_id);
    if store.board().read_untracked().as_ref().map(|b| b.id) == Some(board_id) {
        store_close_board(store);
    }
}

pub fn store_add_list(store: &AppStore, list: List) {
    store.lists().write().insert(list);
}

pub fn store_update_list(store: &AppStore, list: List) {
    let binding = store.lists();
    let mut lists = binding.write();
    lists.remove(list.id);
    lists.insert(list);
}

/// Remove a list and the cards it held
pub fn store_remove_list(store: &AppStore, list_id: u32) {
    store.lists().write().remove(list_id);
    store.cards().write().remove_parent(list_id);
}

pub fn store_add_card(store: &AppStore, card: Card) {
    store.cards().write().insert(card);
}

pub fn store_update_card(store: &AppStore, card: Card) {
    let binding = store.cards();
    let mut cards = binding.write();
    cards.remove(card.id);
    cards.insert(card);
}

pub fn store_remove_card(store: &AppStore, card_id: u32) {
    store.cards().write().remove(card_id);
}

/// Drop a card on a slot: reorder the view now, save in the background
pub fn store_move_card(store: &AppStore, card_id: u32, target: DropTarget) {
    let update = {
        let binding = store.cards();
        let mut cards = binding.write();
        plan_drop(&mut *cards, card_id, target)
    };
    if let Some(update) = update {
        persist_in_background(*store, CardOrderWriter, update);
    }
}

/// Drop a list on a slot: reorder the view now, save in the background
pub fn store_move_list(store: &AppStore, list_id: u32, target: DropTarget) {
    let update = {
        let binding = store.lists();
        let mut lists = binding.write();
        plan_drop(&mut *lists, list_id, target)
    };
    if let Some(update) = update {
        persist_in_background(*store, ListOrderWriter, update);
    }
}

pub fn store_report_error(store: &AppStore, message: String) {
    web_sys::console::error_1(&message.clone().into());
    *store.error().write() = Some(message);
}

fn persist_in_background<W>(store: AppStore, writer: W, update: OrderUpdate)
where
    W: OrderWriter + 'static,
{
    spawn_local(async move {
        if let Err(e) = persist(&writer, update).await {
            store_report_error(&store, format!("Could not save the new order: {}", e));
        }
    });
}
