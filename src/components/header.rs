//! Header Component
//!
//! New-todo field plus the toggle-all button.

use leptos::html;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppState, AppStateStoreFields};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let input_ref = NodeRef::<html::Input>::new();

    let is_disabled = move || store.with(AppState::is_busy);
    let has_todos = move || store.todos().with(|todos| !todos.is_empty());
    let all_completed = move || store.with(AppState::all_completed);

    // Keep focus in the field whenever it becomes usable again
    Effect::new(move |_| {
        if !is_disabled() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let raw = title.get_untracked();
        ctx.spawn(move |controller| async move {
            if controller.submit_new_todo(&raw).await.is_ok() {
                set_title.set(String::new());
            }
        });
    };

    let on_toggle_all = move |_| {
        ctx.spawn(|controller| async move {
            let _ = controller.toggle_all().await;
        });
    };

    view! {
        <header class="todoapp__header">
            <Show when=has_todos>
                <button
                    type="button"
                    class=move || if all_completed() { "todoapp__toggle-all active" } else { "todoapp__toggle-all" }
                    data-cy="ToggleAllButton"
                    on:click=on_toggle_all
                />
            </Show>

            <form on:submit=on_submit>
                <input
                    node_ref=input_ref
                    data-cy="NewTodoField"
                    type="text"
                    class="todoapp__new-todo"
                    placeholder="What needs to be done?"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                    disabled=is_disabled
                />
            </form>
        </header>
    }
}
