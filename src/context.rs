//! Application Context
//!
//! Shared controller provided via Leptos Context API.

use std::future::Future;
use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpTodoApi;
use crate::config::ApiConfig;
use crate::controller::TodoController;
use crate::models::FilterStatus;
use crate::store::AppStore;

/// Controller wired to the reactive store and the HTTP backend
pub type AppController = TodoController<AppStore, HttpTodoApi>;

/// App-wide handle provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    controller: StoredValue<AppController>,
}

impl AppContext {
    pub fn new(store: AppStore, config: ApiConfig) -> Self {
        let user_id = config.user_id;
        let api = Arc::new(HttpTodoApi::new(config));
        Self {
            controller: StoredValue::new(TodoController::new(store, api, user_id)),
        }
    }

    pub fn controller(&self) -> AppController {
        self.controller.get_value()
    }

    /// Run a controller operation on the event loop
    pub fn spawn<F, Fut>(&self, f: F)
    where
        F: FnOnce(AppController) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(f(self.controller()));
    }

    pub fn set_filter(&self, filter_status: FilterStatus) {
        self.controller().set_filter(filter_status);
    }

    pub fn clear_error(&self) {
        self.controller().clear_error();
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
