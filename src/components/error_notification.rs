//! Error Notification Component
//!
//! Banner for the current error; hides itself after `ERROR_DISPLAY_MS`.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::config::ERROR_DISPLAY_MS;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ErrorNotification() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    // Each new error restarts the window; older timers find a newer
    // generation and do nothing.
    Effect::new(move |_| {
        let generation = store.error_generation().get();
        if store.error_message().with_untracked(|m| m.is_none()) {
            return;
        }
        ctx.spawn(move |controller| async move {
            TimeoutFuture::new(ERROR_DISPLAY_MS).await;
            controller.expire_error(generation);
        });
    });

    let has_error = move || store.error_message().with(|m| m.is_some());

    view! {
        <div
            data-cy="ErrorNotification"
            class=move || {
                if has_error() {
                    "notification is-danger is-light has-text-weight-normal"
                } else {
                    "notification is-danger is-light has-text-weight-normal hidden"
                }
            }
        >
            <button
                data-cy="HideErrorButton"
                type="button"
                class="delete"
                on:click=move |_| ctx.clear_error()
            />
            {move || store.error_message().get().map(|m| m.to_string()).unwrap_or_default()}
        </div>
    }
}
