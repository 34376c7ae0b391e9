//! Remote Todo Store
//!
//! Abstract access to the remote todo collection.
//! One best-effort request per call: no retries, no batching.

mod http;

use std::fmt;

use async_trait::async_trait;

use crate::models::Todo;

pub use http::HttpTodoApi;

/// Common result type for remote operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Network-level failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Request never produced a response
    Transport(String),
    /// Server answered with a non-success status
    Status(u16),
    /// Body could not be encoded or decoded
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "Transport error: {}", msg),
            ApiError::Status(code) => write!(f, "Server responded with status {}", code),
            ApiError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// CRUD over the todo collection of one owner
///
/// Futures are `!Send`: everything runs on the browser event loop.
#[async_trait(?Send)]
pub trait TodoApi {
    /// Every todo of the owner
    async fn list(&self) -> ApiResult<Vec<Todo>>;

    /// Create a todo; the server assigns its id
    async fn create(&self, title: &str, completed: bool) -> ApiResult<Todo>;

    /// Replace title and completed of an existing todo
    async fn update(&self, todo: &Todo) -> ApiResult<Todo>;

    async fn delete(&self, id: u32) -> ApiResult<()>;
}
