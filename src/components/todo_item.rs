//! Todo Item Component
//!
//! One row: checkbox, title with inline editing, delete button, loader.

use leptos::html;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Todo;
use crate::store::{use_app_store, AppState};

/// A single todo row
///
/// Placeholder rows belong to a creation still in flight: always loading,
/// never editable.
#[component]
pub fn TodoItem(#[prop(into)] todo: Signal<Todo>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let placeholder = todo.with_untracked(Todo::is_placeholder);

    let loading = move || {
        let id = todo.with(|t| t.id);
        placeholder || store.with(|s: &AppState| s.is_processing(id))
    };

    // Checkbox shows the click right away; any change of the canonical
    // value drops the local override again.
    let canonical_completed = Memo::new(move |_| todo.with(|t| t.completed));
    let (checked_override, set_checked_override) = signal::<Option<bool>>(None);
    Effect::new(move |_| {
        canonical_completed.track();
        set_checked_override.set(None);
    });
    let checked = move || checked_override.get().unwrap_or_else(|| canonical_completed.get());

    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(String::new());
    let (committing, set_committing) = signal(false);
    let edit_ref = NodeRef::<html::Input>::new();

    Effect::new(move |_| {
        if editing.get() {
            if let Some(input) = edit_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let on_toggle = move |ev: web_sys::Event| {
        if placeholder {
            return;
        }
        let value = event_target_checked(&ev);
        set_checked_override.set(Some(value));
        let current = todo.get_untracked();
        ctx.spawn(move |controller| async move {
            if controller.set_completed(&current, value).await.is_err() {
                set_checked_override.set(None);
            }
        });
    };

    let on_delete = move |_| {
        let id = todo.with_untracked(|t| t.id);
        ctx.spawn(move |controller| async move {
            let _ = controller.delete_todo(id).await;
        });
    };

    let start_editing = move |_| {
        if placeholder {
            return;
        }
        set_draft.set(todo.with_untracked(|t| t.title.clone()));
        set_editing.set(true);
    };

    // Submit and blur both land here; a commit in flight is not repeated
    let commit = move || {
        if !editing.get_untracked() || committing.get_untracked() {
            return;
        }
        let current = todo.get_untracked();
        let text = draft.get_untracked();
        set_committing.set(true);
        ctx.spawn(move |controller| async move {
            let result = controller.commit_title_edit(&current, &text).await;
            set_committing.set(false);
            if result.is_ok() {
                set_editing.set(false);
            }
        });
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            set_draft.set(todo.with_untracked(|t| t.title.clone()));
            set_editing.set(false);
        }
    };

    view! {
        <div data-cy="Todo" class=move || if checked() { "todo completed" } else { "todo" }>
            <label class="todo__status-label">
                <input
                    data-cy="TodoStatus"
                    type="checkbox"
                    class="todo__status"
                    prop:checked=checked
                    on:change=on_toggle
                />
            </label>

            <Show
                when=move || editing.get()
                fallback=move || view! {
                    <span data-cy="TodoTitle" class="todo__title" on:dblclick=start_editing>
                        {move || todo.with(|t| t.title.clone())}
                    </span>
                    <button
                        type="button"
                        class="todo__remove"
                        data-cy="TodoDelete"
                        disabled=loading
                        on:click=on_delete
                    >
                        "×"
                    </button>
                }
            >
                <form on:submit=move |ev: web_sys::SubmitEvent| {
                    ev.prevent_default();
                    commit();
                }>
                    <input
                        node_ref=edit_ref
                        data-cy="TodoTitleField"
                        type="text"
                        class="todo__title-field"
                        placeholder="Empty todo will be deleted"
                        prop:value=move || draft.get()
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                        on:keydown=on_keydown
                        on:blur=move |_| commit()
                    />
                </form>
            </Show>

            <div data-cy="TodoLoader" class=move || if loading() { "modal overlay is-active" } else { "modal overlay" }>
                <div class="modal-background has-background-white-ter" />
                <div class="loader" />
            </div>
        </div>
    }
}
