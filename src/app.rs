//! Todos Frontend App
//!
//! Root component: owns the store, loads todos once, follows hash routes.

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ErrorNotification, Footer, Header, TodoList};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::models::FilterStatus;
use crate::store::{AppState, AppStateStoreFields};

/// Filter named by the current `location.hash`
fn filter_from_location() -> FilterStatus {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|hash| FilterStatus::from_hash(&hash))
        .unwrap_or_default()
}

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_env();
    log::info!("[APP] Using {} (user {})", config.base_url, config.user_id);

    let store = Store::new(AppState::new(filter_from_location()));
    provide_context(store);

    let ctx = AppContext::new(store, config);
    provide_context(ctx);

    // Load todos once on mount
    ctx.spawn(|controller| async move {
        controller.load().await;
    });

    // Back/forward and typed URLs switch the filter too
    let _ = window_event_listener(ev::hashchange, move |_| {
        ctx.set_filter(filter_from_location());
    });

    let has_todos = move || store.todos().with(|todos| !todos.is_empty());

    view! {
        <div class="todoapp">
            <h1 class="todoapp__title">"todos"</h1>

            <div class="todoapp__content">
                <Header />

                <TodoList />

                <Show when=has_todos>
                    <Footer />
                </Show>
            </div>

            <ErrorNotification />
        </div>
    }
}
