//! Add Item Form Component
//!
//! One-line form used for new boards, lists and cards.

use leptos::prelude::*;

/// Submits the trimmed text and clears itself; blank input is ignored
#[component]
pub fn AddItemForm(
    #[prop(into)] placeholder: String,
    #[prop(into)] on_submit: Callback<String>,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let (text, set_text) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let value = text.get_untracked().trim().to_string();
        if value.is_empty() {
            return;
        }
        on_submit.run(value);
        set_text.set(String::new());
    };

    view! {
        <form class=class.unwrap_or_else(|| "add-item-form".to_string()) on:submit=submit>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
