//! Todo List Component
//!
//! Filtered todos followed by the in-flight placeholder.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::filter::filter_todos;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    let visible = Memo::new(move |_| {
        let status = store.filter_status().get();
        store.todos().with(|todos| filter_todos(status, todos))
    });

    view! {
        <section class="todoapp__main" data-cy="TodoList">
            <For
                each=move || visible.get()
                key=|todo| todo.id
                children=move |todo| {
                    let id = todo.id;
                    // Follow the canonical todo so renames and toggles re-render
                    let current = Memo::new(move |_| {
                        store
                            .todos()
                            .with(|todos| todos.iter().find(|t| t.id == id).cloned())
                            .unwrap_or_else(|| todo.clone())
                    });
                    view! { <TodoItem todo=current /> }
                }
            />

            {move || store.temp_todo().get().map(|todo| view! {
                <TodoItem todo=Signal::stored(todo) />
            })}
        </section>
    }
}
