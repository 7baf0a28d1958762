//! Board Picker Component
//!
//! Sidebar listing boards, with create and delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, CreateBoardArgs};
use crate::components::{AddItemForm, DeleteConfirmButton};
use crate::models::Board;
use crate::store::{
    store_add_board, store_load_board, store_remove_board, store_report_error, use_app_store,
    AppStateStoreFields, AppStore,
};

/// Fetch a board's lists and cards and make it the open board
fn open_board(store: AppStore, id: u32) {
    spawn_local(async move {
        match commands::get_board(id).await {
            Ok(detail) => store_load_board(&store, detail),
            Err(e) => store_report_error(&store, format!("Could not open board {}: {}", id, e)),
        }
    });
}

#[component]
pub fn BoardPicker() -> impl IntoView {
    let store = use_app_store();

    let on_create = Callback::new(move |name: String| {
        spawn_local(async move {
            let args = CreateBoardArgs {
                name: &name,
                background_color: None,
            };
            match commands::create_board(&args).await {
                Ok(detail) => {
                    store_add_board(&store, detail.board.clone());
                    store_load_board(&store, detail);
                }
                Err(e) => store_report_error(&store, format!("Could not create board: {}", e)),
            }
        });
    });

    view! {
        <nav class="board-picker">
            <h2>"Boards"</h2>
            <For
                each=move || store.boards().get()
                key=|board| (board.id, board.name.clone())
                children=move |board: Board| {
                    let id = board.id;
                    let is_open = move || store.board().read().as_ref().map(|b| b.id) == Some(id);
                    let on_delete = Callback::new(move |_: ()| {
                        spawn_local(async move {
                            match commands::delete_board(id).await {
                                Ok(()) => store_remove_board(&store, id),
                                Err(e) => store_report_error(&store, format!("Could not delete board: {}", e)),
                            }
                        });
                    });

                    view! {
                        <div class=move || if is_open() { "board-entry active" } else { "board-entry" }>
                            <button class="board-link" on:click=move |_| open_board(store, id)>
                                {board.name.clone()}
                            </button>
                            <DeleteConfirmButton button_class="delete-btn" on_confirm=on_delete />
                        </div>
                    }
                }
            />
            <AddItemForm placeholder="New board..." on_submit=on_create class="add-board-form" />
        </nav>
    }
}
