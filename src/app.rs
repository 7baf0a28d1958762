//! Kanban Frontend App
//!
//! Board picker on the left, the open board in the main area, and a status
//! line for failed requests.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::bind_global_mouseup;
use reactive_stores::Store;

use crate::commands;
use crate::components::{BoardPicker, BoardView};
use crate::context::DndContext;
use crate::store::{
    store_move_card, store_move_list, store_report_error, store_set_boards, AppState,
    AppStateStoreFields,
};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    // Bound once for the app's lifetime; the board view mounts and unmounts
    let dnd = DndContext::new();
    provide_context(dnd);
    bind_global_mouseup(dnd.cards, move |card_id, target| store_move_card(&store, card_id, target));
    bind_global_mouseup(dnd.lists, move |list_id, target| store_move_list(&store, list_id, target));

    spawn_local(async move {
        match commands::list_boards().await {
            Ok(boards) => {
                web_sys::console::log_1(&format!("[APP] Loaded {} boards", boards.len()).into());
                store_set_boards(&store, boards);
            }
            Err(e) => store_report_error(&store, format!("Could not load boards: {}", e)),
        }
    });

    view! {
        <div class="app-layout">
            <BoardPicker />

            <main class="main-content">
                <Show
                    when=move || store.board().read().is_some()
                    fallback=|| view! { <p class="empty-hint">"Pick a board or create one."</p> }
                >
                    <BoardView />
                </Show>
            </main>

            {move || store.error().get().map(|message| view! {
                <div class="status-bar error">
                    <span>{message}</span>
                    <button on:click=move |_| *store.error().write() = None>"×"</button>
                </div>
            })}
        </div>
    }
}
