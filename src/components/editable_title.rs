//! Editable Title Component
//!
//! Text that turns into an input on double click. Enter saves, Escape
//! cancels, leaving the field saves.

use leptos::prelude::*;

#[component]
pub fn EditableTitle(
    #[prop(into)] text: String,
    #[prop(into)] on_save: Callback<String>,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let original = text.clone();
    let reset = text.clone();
    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(text.clone());

    let commit = move || {
        if !editing.get_untracked() {
            return;
        }
        set_editing.set(false);
        let value = draft.get_untracked().trim().to_string();
        if !value.is_empty() && value != original {
            on_save.run(value);
        }
    };

    let class = class.unwrap_or_else(|| "editable-title".to_string());

    view! {
        <Show
            when=move || editing.get()
            fallback={
                let class = class.clone();
                let text = text.clone();
                move || view! {
                    <span class=class.clone() on:dblclick=move |_| set_editing.set(true)>
                        {text.clone()}
                    </span>
                }
            }
        >
            <input
                type="text"
                class="title-input"
                prop:value=move || draft.get()
                on:input=move |ev| set_draft.set(event_target_value(&ev))
                on:blur={
                    let commit = commit.clone();
                    move |_| commit()
                }
                on:keydown={
                    let commit = commit.clone();
                    let reset = reset.clone();
                    move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                        "Enter" => commit(),
                        "Escape" => {
                            set_editing.set(false);
                            set_draft.set(reset.clone());
                        }
                        _ => {}
                    }
                }
            />
        </Show>
    }
}
