//! Board View Component
//!
//! The open board: its columns in order, with drop slots between them.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{AddItemForm, DropSlot, ListColumn};
use crate::context::use_dnd;
use crate::store::{store_add_list, store_report_error, use_app_store, AppStateStoreFields};

#[component]
pub fn BoardView() -> impl IntoView {
    let store = use_app_store();
    let dnd = use_dnd();

    let board_id = move || store.board().read().as_ref().map(|b| b.id).unwrap_or_default();
    let title = move || store.board().read().as_ref().map(|b| b.name.clone()).unwrap_or_default();
    let background = move || {
        store
            .board()
            .read()
            .as_ref()
            .map(|b| format!("background-color: {};", b.background_color))
            .unwrap_or_default()
    };

    let lists = move || {
        store
            .lists()
            .read()
            .sequence(board_id())
            .iter()
            .cloned()
            .enumerate()
            .collect::<Vec<_>>()
    };
    let list_count = move || store.lists().read().sequence(board_id()).len();

    let on_add_list = Callback::new(move |name: String| {
        let board = store.board().read_untracked().as_ref().map(|b| b.id).unwrap_or_default();
        spawn_local(async move {
            match commands::create_list(board, &name).await {
                Ok(list) => store_add_list(&store, list),
                Err(e) => store_report_error(&store, format!("Could not add list: {}", e)),
            }
        });
    });

    view! {
        <div class="board" style=background>
            <h1 class="board-title">{title}</h1>
            <div class="board-lists">
                <For
                    each=lists
                    key=|(index, list)| (list.id, *index, list.name.clone())
                    children=move |(index, list)| {
                        let parent = list.board_id;
                        view! {
                            <DropSlot dnd=dnd.lists parent_id=parent index=index vertical=true />
                            <ListColumn list=list />
                        }
                    }
                />
                {move || view! {
                    <DropSlot dnd=dnd.lists parent_id=board_id() index=list_count() vertical=true />
                }}
                <AddItemForm placeholder="Add a list..." on_submit=on_add_list class="add-list-form" />
            </div>
        </div>
    }
}
