//! Footer Component
//!
//! Active counter, filter links and "Clear completed".

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::filter::{active_count, completed_count};
use crate::models::FilterStatus;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let active = move || store.todos().with(|todos| active_count(todos));
    let completed = move || store.todos().with(|todos| completed_count(todos));

    let on_clear = move |_| {
        ctx.spawn(|controller| async move {
            controller.clear_completed().await;
        });
    };

    view! {
        <footer class="todoapp__footer" data-cy="Footer">
            <span class="todo-count" data-cy="TodosCounter">
                {move || format!("{} items left", active())}
            </span>

            <nav class="filter" data-cy="Filter">
                {FilterStatus::ALL.into_iter().map(|status| {
                    let is_selected = move || store.filter_status().get() == status;
                    view! {
                        <a
                            href=status.href()
                            class=move || if is_selected() { "filter__link selected" } else { "filter__link" }
                            data-cy=format!("FilterLink{}", status.label())
                            on:click=move |_| ctx.set_filter(status)
                        >
                            {status.label()}
                        </a>
                    }
                }).collect_view()}
            </nav>

            <button
                type="button"
                class="todoapp__clear-completed"
                data-cy="ClearCompletedButton"
                disabled=move || completed() == 0
                on:click=on_clear
            >
                "Clear completed"
            </button>
        </footer>
    }
}
