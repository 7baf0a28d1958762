//! List Column Component
//!
//! A board column: header, cards with drop slots between them, add-card form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::make_on_mousedown;

use crate::commands;
use crate::components::{AddItemForm, CardTile, DeleteConfirmButton, DropSlot, EditableTitle};
use crate::context::use_dnd;
use crate::models::List;
use crate::store::{
    store_add_card, store_remove_list, store_report_error, store_update_list, use_app_store,
    AppStateStoreFields,
};

#[component]
pub fn ListColumn(list: List) -> impl IntoView {
    let store = use_app_store();
    let dnd = use_dnd();
    let list_id = list.id;

    let cards = move || {
        store
            .cards()
            .read()
            .sequence(list_id)
            .iter()
            .cloned()
            .enumerate()
            .collect::<Vec<_>>()
    };
    let card_count = move || store.cards().read().sequence(list_id).len();

    let on_mousedown = make_on_mousedown(dnd.lists, list_id);
    let column_class = move || {
        if dnd.lists.is_dragging(list_id) { "list-column dragging" } else { "list-column" }
    };

    let on_rename = Callback::new(move |name: String| {
        spawn_local(async move {
            match commands::rename_list(list_id, &name).await {
                Ok(list) => store_update_list(&store, list),
                Err(e) => store_report_error(&store, format!("Could not rename list: {}", e)),
            }
        });
    });

    let on_delete = Callback::new(move |_: ()| {
        spawn_local(async move {
            match commands::delete_list(list_id).await {
                Ok(()) => store_remove_list(&store, list_id),
                Err(e) => store_report_error(&store, format!("Could not delete list: {}", e)),
            }
        });
    });

    let on_add_card = Callback::new(move |name: String| {
        spawn_local(async move {
            match commands::create_card(list_id, &name).await {
                Ok(card) => store_add_card(&store, card),
                Err(e) => store_report_error(&store, format!("Could not add card: {}", e)),
            }
        });
    });

    view! {
        <div class=column_class on:mousedown=on_mousedown>
            <div class="list-header">
                <EditableTitle text=list.name.clone() on_save=on_rename class="list-name" />
                <span class="card-count">{card_count}</span>
                <DeleteConfirmButton button_class="delete-btn" on_confirm=on_delete />
            </div>

            <div class="list-cards">
                <For
                    each=cards
                    // Index and name in the key so moved or renamed cards re-render
                    key=|(index, card)| (card.id, *index, card.name.clone(), card.description.clone())
                    children=move |(index, card)| {
                        view! {
                            <DropSlot dnd=dnd.cards parent_id=list_id index=index />
                            <CardTile card=card />
                        }
                    }
                />
                {move || view! { <DropSlot dnd=dnd.cards parent_id=list_id index=card_count() /> }}
            </div>

            <AddItemForm placeholder="Add a card..." on_submit=on_add_card class="add-card-form" />
        </div>
    }
}
