//! Card Tile Component
//!
//! One card inside a list column.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::make_on_mousedown;

use crate::commands::{self, UpdateCardArgs};
use crate::components::{DeleteConfirmButton, EditableTitle};
use crate::context::use_dnd;
use crate::models::Card;
use crate::store::{store_remove_card, store_report_error, store_update_card, use_app_store};

#[component]
pub fn CardTile(card: Card) -> impl IntoView {
    let store = use_app_store();
    let dnd = use_dnd();
    let id = card.id;

    let on_mousedown = make_on_mousedown(dnd.cards, id);
    let tile_class = move || {
        if dnd.cards.is_dragging(id) { "card-tile dragging" } else { "card-tile" }
    };

    let on_rename = Callback::new(move |name: String| {
        spawn_local(async move {
            let args = UpdateCardArgs {
                name: Some(name),
                ..Default::default()
            };
            match commands::update_card(id, &args).await {
                Ok(card) => store_update_card(&store, card),
                Err(e) => store_report_error(&store, format!("Could not rename card: {}", e)),
            }
        });
    });

    let on_delete = Callback::new(move |_: ()| {
        spawn_local(async move {
            match commands::delete_card(id).await {
                Ok(()) => store_remove_card(&store, id),
                Err(e) => store_report_error(&store, format!("Could not delete card: {}", e)),
            }
        });
    });

    view! {
        <div class=tile_class on:mousedown=on_mousedown>
            <EditableTitle text=card.name.clone() on_save=on_rename class="card-name" />
            {card.description.clone().map(|d| view! { <p class="card-description">{d}</p> })}
            <DeleteConfirmButton button_class="delete-btn" on_confirm=on_delete />
        </div>
    }
}
