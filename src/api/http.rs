//! HTTP Todo Store
//!
//! `TodoApi` over the browser fetch API.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::Serialize;

use super::{ApiError, ApiResult, TodoApi};
use crate::config::ApiConfig;
use crate::models::Todo;

// ========================
// Request Bodies
// ========================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TodoPayload<'a> {
    user_id: u32,
    title: &'a str,
    completed: bool,
}

// ========================
// Client
// ========================

#[derive(Debug, Clone)]
pub struct HttpTodoApi {
    config: ApiConfig,
}

impl HttpTodoApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

fn transport(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

fn decode(e: gloo_net::Error) -> ApiError {
    ApiError::Decode(e.to_string())
}

fn ensure_ok(response: Response) -> ApiResult<Response> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status(response.status()))
    }
}

#[async_trait(?Send)]
impl TodoApi for HttpTodoApi {
    async fn list(&self) -> ApiResult<Vec<Todo>> {
        let response = Request::get(&self.config.list_url()).send().await.map_err(transport)?;
        ensure_ok(response)?.json().await.map_err(decode)
    }

    async fn create(&self, title: &str, completed: bool) -> ApiResult<Todo> {
        let payload = TodoPayload {
            user_id: self.config.user_id,
            title,
            completed,
        };
        let response = Request::post(&self.config.collection_url())
            .json(&payload)
            .map_err(decode)?
            .send()
            .await
            .map_err(transport)?;
        ensure_ok(response)?.json().await.map_err(decode)
    }

    async fn update(&self, todo: &Todo) -> ApiResult<Todo> {
        let payload = TodoPayload {
            user_id: todo.user_id,
            title: &todo.title,
            completed: todo.completed,
        };
        let response = Request::patch(&self.config.todo_url(todo.id))
            .json(&payload)
            .map_err(decode)?
            .send()
            .await
            .map_err(transport)?;
        ensure_ok(response)?.json().await.map_err(decode)
    }

    async fn delete(&self, id: u32) -> ApiResult<()> {
        let response = Request::delete(&self.config.todo_url(id)).send().await.map_err(transport)?;
        ensure_ok(response)?;
        Ok(())
    }
}
