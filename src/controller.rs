//! Todo Controller
//!
//! Mediates every mutation between the UI and the remote store.
//! Local state is updated optimistically and rolled back when the
//! server call fails; failures end up as the shared error message.

use std::sync::Arc;

use futures::future::join_all;

use crate::api::{ApiResult, TodoApi};
use crate::edit::TitleEdit;
use crate::models::{ErrorMessage, FilterStatus, Todo};
use crate::store::StateAccess;

/// A controller operation failed; the message is already on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationFailed(pub ErrorMessage);

pub type OperationResult = Result<(), OperationFailed>;

pub struct TodoController<S, A> {
    state: S,
    api: Arc<A>,
    user_id: u32,
}

impl<S: Clone, A> Clone for TodoController<S, A> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            api: Arc::clone(&self.api),
            user_id: self.user_id,
        }
    }
}

impl<S: StateAccess, A: TodoApi> TodoController<S, A> {
    pub fn new(state: S, api: Arc<A>, user_id: u32) -> Self {
        Self { state, api, user_id }
    }

    // ========================
    // Errors
    // ========================

    pub fn show_error(&self, message: ErrorMessage) {
        self.state.update_state(|s| {
            s.error_message = Some(message);
            s.error_generation = s.error_generation.wrapping_add(1);
        });
    }

    pub fn clear_error(&self) {
        self.state.update_state(|s| s.error_message = None);
    }

    /// Hide the error only if nothing newer replaced it since `generation`
    pub fn expire_error(&self, generation: u32) {
        self.state.update_state(|s| {
            if s.error_generation == generation {
                s.error_message = None;
            }
        });
    }

    fn fail(&self, message: ErrorMessage) -> OperationResult {
        self.show_error(message);
        Err(OperationFailed(message))
    }

    pub fn set_filter(&self, filter_status: FilterStatus) {
        self.state.update_state(|s| s.filter_status = filter_status);
    }

    // ========================
    // Operations
    // ========================

    /// Initial fetch of the whole collection
    pub async fn load(&self) {
        match self.api.list().await {
            Ok(todos) => {
                log::info!("[TODO] Loaded {} todos", todos.len());
                self.state.update_state(|s| s.todos = todos);
            }
            Err(e) => {
                log::warn!("[TODO] Load failed: {}", e);
                self.show_error(ErrorMessage::Load);
            }
        }
    }

    /// Validate the new-todo field and create it
    pub async fn submit_new_todo(&self, raw: &str) -> OperationResult {
        let title = raw.trim();
        if title.is_empty() {
            return self.fail(ErrorMessage::EmptyTitle);
        }
        self.add_todo(title).await?;
        self.clear_error();
        Ok(())
    }

    pub async fn add_todo(&self, title: &str) -> OperationResult {
        let placeholder = Todo::placeholder(self.user_id, title);
        self.state.update_state(|s| s.temp_todo = Some(placeholder));

        let result = self.api.create(title, false).await;

        match result {
            Ok(todo) => {
                log::info!("[TODO] Created #{}", todo.id);
                self.state.update_state(|s| {
                    s.temp_todo = None;
                    s.todos.push(todo);
                });
                Ok(())
            }
            Err(e) => {
                log::warn!("[TODO] Create failed: {}", e);
                self.state.update_state(|s| s.temp_todo = None);
                self.fail(ErrorMessage::Add)
            }
        }
    }

    pub async fn delete_todo(&self, id: u32) -> OperationResult {
        self.state.update_state(|s| {
            s.deleting.insert(id);
        });

        let result = self.delete_remote(id).await;

        self.state.update_state(|s| {
            s.deleting.remove(&id);
        });

        match result {
            Ok(()) => Ok(()),
            Err(_) => self.fail(ErrorMessage::Delete),
        }
    }

    /// Delete on the server and drop the todo locally on success.
    /// Leaves the `deleting` set alone.
    async fn delete_remote(&self, id: u32) -> ApiResult<()> {
        match self.api.delete(id).await {
            Ok(()) => {
                log::info!("[TODO] Deleted #{}", id);
                self.state.update_state(|s| s.remove(id));
                Ok(())
            }
            Err(e) => {
                log::warn!("[TODO] Delete #{} failed: {}", id, e);
                Err(e)
            }
        }
    }

    /// Apply `todo` locally, then persist it; restores the last
    /// server-confirmed version if the server rejects it.
    pub async fn update_todo(&self, todo: Todo) -> OperationResult {
        let id = todo.id;
        self.state.update_state(|s| s.begin_update(todo.clone()));

        let result = self.api.update(&todo).await;

        match result {
            Ok(updated) => {
                self.state.update_state(|s| s.finish_update(id, Some(updated)));
                Ok(())
            }
            Err(e) => {
                log::warn!("[TODO] Update #{} failed: {}", id, e);
                self.state.update_state(|s| s.finish_update(id, None));
                self.fail(ErrorMessage::Update)
            }
        }
    }

    pub async fn set_completed(&self, todo: &Todo, completed: bool) -> OperationResult {
        self.update_todo(Todo {
            completed,
            ..todo.clone()
        })
        .await
    }

    /// Commit an inline title edit: unchanged is a no-op, empty deletes
    pub async fn commit_title_edit(&self, todo: &Todo, draft: &str) -> OperationResult {
        match TitleEdit::plan(&todo.title, draft) {
            TitleEdit::Unchanged => Ok(()),
            TitleEdit::Delete => self.delete_todo(todo.id).await,
            TitleEdit::Rename(title) => {
                self.update_todo(Todo {
                    title,
                    ..todo.clone()
                })
                .await
            }
        }
    }

    /// Delete every completed todo concurrently.
    ///
    /// All ids enter `deleting` together and leave together once every
    /// request has settled.
    pub async fn clear_completed(&self) {
        let ids: Vec<u32> = self.state.with_state(|s| {
            s.todos.iter().filter(|todo| todo.completed).map(|todo| todo.id).collect()
        });
        if ids.is_empty() {
            return;
        }

        self.state.update_state(|s| s.deleting.extend(ids.iter().copied()));

        let results = join_all(ids.iter().map(|&id| self.delete_remote(id))).await;

        self.state.update_state(|s| {
            for id in &ids {
                s.deleting.remove(id);
            }
        });

        let failed = results.iter().filter(|r| r.is_err()).count();
        if failed > 0 {
            log::warn!("[TODO] Clear completed: {} of {} deletes failed", failed, ids.len());
            self.show_error(ErrorMessage::Delete);
        }
    }

    /// Mark everything completed, or everything active when all are done.
    ///
    /// Updates run one at a time and stop at the first failure.
    pub async fn toggle_all(&self) -> OperationResult {
        let (target, ids) = self.state.with_state(|s| {
            let target = !s.all_completed();
            let ids: Vec<u32> = s.todos.iter().filter(|todo| todo.completed != target).map(|todo| todo.id).collect();
            (target, ids)
        });

        for id in ids {
            // Re-read so edits made during the sequence are not overwritten
            let current = self.state.with_state(|s| s.find(id).cloned());
            let Some(todo) = current.filter(|todo| todo.completed != target) else {
                continue;
            };
            self.set_completed(&todo, target).await?;
        }
        Ok(())
    }
}
