//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use std::collections::{HashMap, HashSet};

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filter;
use crate::models::{ErrorMessage, FilterStatus, Todo};

/// Canonical application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Saved todos in server order
    pub todos: Vec<Todo>,
    /// Unsaved todo shown while a creation is in flight
    pub temp_todo: Option<Todo>,
    pub filter_status: FilterStatus,
    /// Error currently on screen
    pub error_message: Option<ErrorMessage>,
    /// Bumped on every new error so stale hide timers can be ignored
    pub error_generation: u32,
    /// Todos with a delete in flight
    pub deleting: HashSet<u32>,
    /// Todos with an update in flight
    pub updating: HashSet<u32>,
    /// Last server-confirmed version of each todo in `updating`
    pub pending_updates: HashMap<u32, PendingUpdate>,
}

/// Bookkeeping for the updates in flight on one todo
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingUpdate {
    pub confirmed: Todo,
    pub in_flight: usize,
}

impl AppState {
    pub fn new(filter_status: FilterStatus) -> Self {
        Self {
            filter_status,
            ..Default::default()
        }
    }

    /// Any creation, deletion or update still waiting on the server
    pub fn is_busy(&self) -> bool {
        self.temp_todo.is_some() || !self.deleting.is_empty() || !self.updating.is_empty()
    }

    pub fn is_processing(&self, id: u32) -> bool {
        self.deleting.contains(&id) || self.updating.contains(&id)
    }

    pub fn all_completed(&self) -> bool {
        filter::all_completed(&self.todos)
    }

    pub fn find(&self, id: u32) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// Swap in a new version of an existing todo
    pub fn replace(&mut self, updated: Todo) {
        if let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == updated.id) {
            *todo = updated;
        }
    }

    pub fn remove(&mut self, id: u32) {
        self.todos.retain(|todo| todo.id != id);
    }

    /// Show `todo` right away and remember what the server last confirmed.
    ///
    /// An update started while another is in flight keeps the older
    /// confirmed version instead of the unconfirmed value on screen.
    pub fn begin_update(&mut self, todo: Todo) {
        let id = todo.id;
        match self.pending_updates.get_mut(&id) {
            Some(pending) => pending.in_flight += 1,
            None => {
                if let Some(current) = self.find(id).cloned() {
                    self.pending_updates.insert(id, PendingUpdate { confirmed: current, in_flight: 1 });
                }
            }
        }
        self.updating.insert(id);
        self.replace(todo);
    }

    /// Settle one update of `id`: `Some(echo)` on success, `None` on failure.
    ///
    /// While newer updates are still in flight the todo keeps showing
    /// their value; once the last one settles it shows the confirmed version.
    pub fn finish_update(&mut self, id: u32, echo: Option<Todo>) {
        let Some(pending) = self.pending_updates.get_mut(&id) else {
            self.updating.remove(&id);
            return;
        };
        if let Some(echo) = echo {
            pending.confirmed = echo;
        }
        pending.in_flight = pending.in_flight.saturating_sub(1);
        if pending.in_flight == 0 {
            let confirmed = pending.confirmed.clone();
            self.pending_updates.remove(&id);
            self.updating.remove(&id);
            self.replace(confirmed);
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Read/write access to `AppState`, independent of the reactive runtime
pub trait StateAccess: Clone + 'static {
    fn with_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R;
    fn update_state(&self, f: impl FnOnce(&mut AppState));
}

impl StateAccess for AppStore {
    fn with_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        self.with_untracked(f)
    }

    fn update_state(&self, f: impl FnOnce(&mut AppState)) {
        self.update(f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: u32, completed: bool) -> Todo {
        Todo {
            id,
            user_id: 1,
            title: format!("Todo {}", id),
            completed,
        }
    }

    #[test]
    fn test_busy_flags() {
        let mut state = AppState::new(FilterStatus::Active);
        assert_eq!(state.filter_status, FilterStatus::Active);
        assert!(!state.is_busy());

        state.temp_todo = Some(Todo::placeholder(1, "x"));
        assert!(state.is_busy());
        state.temp_todo = None;

        state.updating.insert(4);
        assert!(state.is_busy());
        assert!(state.is_processing(4));
        assert!(!state.is_processing(5));
    }

    #[test]
    fn test_replace_and_remove() {
        let mut state = AppState::default();
        state.todos = vec![make_todo(1, false), make_todo(2, false)];

        state.replace(make_todo(2, true));
        assert!(state.find(2).unwrap().completed);

        // Unknown ids are ignored
        state.replace(make_todo(9, true));
        assert_eq!(state.todos.len(), 2);

        state.remove(1);
        assert!(state.find(1).is_none());
        assert_eq!(state.todos.len(), 1);
    }

    #[test]
    fn test_overlapping_updates_fall_back_to_confirmed() {
        let mut state = AppState::default();
        state.todos = vec![make_todo(1, false)];

        state.begin_update(make_todo(1, true));
        state.begin_update(make_todo(1, false));
        assert_eq!(state.pending_updates[&1].confirmed, make_todo(1, false));
        assert_eq!(state.pending_updates[&1].in_flight, 2);

        // First one fails: the newer value stays while it is in flight
        state.finish_update(1, None);
        assert!(state.is_processing(1));
        assert!(!state.find(1).unwrap().completed);

        state.finish_update(1, None);
        assert_eq!(state.find(1), Some(&make_todo(1, false)));
        assert!(state.updating.is_empty());
        assert!(state.pending_updates.is_empty());
    }

    #[test]
    fn test_echo_becomes_confirmed_version() {
        let mut state = AppState::default();
        state.todos = vec![make_todo(1, false)];

        state.begin_update(make_todo(1, true));
        state.begin_update(Todo { title: "Renamed".to_string(), ..make_todo(1, true) });
        state.finish_update(1, Some(make_todo(1, true)));
        state.finish_update(1, None);

        assert_eq!(state.find(1), Some(&make_todo(1, true)));
        assert!(state.pending_updates.is_empty());
    }
}
